//! Viewport size as a shared signal.
//!
//! [`ViewportProvider`] owns the browser `resize` listener and publishes the
//! current size through context; components read it with [`use_viewport`].
//! The listener is removed when the provider unmounts. Native builds (server
//! rendering) report a fixed desktop size.

use dioxus::prelude::*;

/// Current viewport size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Size assumed when there is no window to measure.
    pub const DESKTOP: Viewport = Viewport {
        width: 1280,
        height: 800,
    };
}

/// Read the viewport signal provided by [`ViewportProvider`].
pub fn use_viewport() -> Signal<Viewport> {
    use_context::<Signal<Viewport>>()
}

/// Provider component that tracks the window size.
#[component]
pub fn ViewportProvider(children: Element) -> Element {
    let viewport = use_signal(current_viewport);

    #[cfg(target_arch = "wasm32")]
    {
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;

        let listener = use_hook(move || {
            let mut viewport = viewport;
            let closure = Closure::<dyn FnMut()>::new(move || {
                let size = current_viewport();
                if *viewport.peek() != size {
                    viewport.set(size);
                }
            });
            if let Some(window) = web_sys::window() {
                if let Err(e) =
                    window.add_event_listener_with_callback("resize", callback(&closure))
                {
                    tracing::error!("Failed to watch viewport: {:?}", e);
                }
            }
            Rc::new(closure)
        });

        use_drop(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback("resize", callback(&listener));
            }
        });
    }

    use_context_provider(|| viewport);

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
fn callback(closure: &wasm_bindgen::closure::Closure<dyn FnMut()>) -> &js_sys::Function {
    use wasm_bindgen::JsCast;
    closure.as_ref().unchecked_ref()
}

#[cfg(target_arch = "wasm32")]
fn current_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::DESKTOP;
    };
    let measure = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).map(|v| v as u32)
    };
    Viewport {
        width: measure(window.inner_width()).unwrap_or(Viewport::DESKTOP.width),
        height: measure(window.inner_height()).unwrap_or(Viewport::DESKTOP.height),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn current_viewport() -> Viewport {
    Viewport::DESKTOP
}
