use dioxus::prelude::*;

use content::PortfolioConfig;
use ui::{SiteProvider, ViewportProvider};
use views::{About, AdminLayout, Contact, NotFound, Skills};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AdminLayout)]
        #[route("/")]
        About {},
        #[route("/skills")]
        Skills {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[redirect("/about", || Route::About {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Surface content problems at startup rather than on the first page view.
    // PORTFOLIO_CONTENT points at an edited copy of site.toml to check it
    // before rebuilding.
    let loaded = match std::env::var("PORTFOLIO_CONTENT") {
        Ok(path) => {
            tracing::info!("Checking site content at {}", path);
            content::load_content(&content::FileSource::new(path)).await
        }
        Err(_) => content::load_content(&content::EmbeddedSource::default()).await,
    };
    match loaded {
        Ok(site) => tracing::info!("Serving {} skills for {}", site.skills.len(), site.profile.name),
        Err(e) => tracing::error!("Site content is invalid: {}", e),
    }

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server stopped unexpectedly");
}

#[component]
fn App() -> Element {
    let config = use_hook(PortfolioConfig::from_build_env);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SiteProvider {
            config: config,
            ViewportProvider {
                Router::<Route> {}
            }
        }
    }
}
