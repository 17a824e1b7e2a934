//! # Skill list and profile loader
//!
//! Reads the content document from a [`ContentSource`], parses it, and checks
//! the invariants the pages rely on:
//!
//! - every skill has a non-empty `id` and `title`;
//! - skill ids are unique (they are the list keys on the Skills page);
//! - proficiency is a percentage (0 to 100).
//!
//! Skills keep their source order. Loading is stateless: calling a loader twice
//! against unchanged content yields equal results.
//!
//! The skill checks only gate [`load_skills`] and [`load_content`]. A bad skill
//! entry does not stop [`load_profile`], which only needs the document to parse.

use std::collections::HashSet;

use crate::models::{Profile, SiteContent, SkillRecord};
use crate::source::ContentSource;

/// Why the content document could not be loaded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("content source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed content: {0}")]
    Malformed(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("duplicate skill id: {0}")]
    DuplicateId(String),
}

/// Load and validate the full content document.
pub async fn load_content<S: ContentSource>(source: &S) -> Result<SiteContent, LoadError> {
    let content = parse_document(source).await?;
    validate_skills(&content.skills)?;
    Ok(content)
}

/// Load the ordered skill list.
pub async fn load_skills<S: ContentSource>(source: &S) -> Result<Vec<SkillRecord>, LoadError> {
    let content = load_content(source).await?;
    tracing::info!("Loaded {} skills", content.skills.len());
    Ok(content.skills)
}

/// Load the owner's profile.
pub async fn load_profile<S: ContentSource>(source: &S) -> Result<Profile, LoadError> {
    Ok(parse_document(source).await?.profile)
}

async fn parse_document<S: ContentSource>(source: &S) -> Result<SiteContent, LoadError> {
    let text = source.read().await?;
    toml::from_str(&text).map_err(|e| LoadError::Malformed(e.to_string()))
}

fn validate_skills(skills: &[SkillRecord]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for skill in skills {
        if skill.id.trim().is_empty() {
            return Err(LoadError::MissingField("id".to_string()));
        }
        if skill.title.trim().is_empty() {
            return Err(LoadError::MissingField(format!("title (skill {})", skill.id)));
        }
        if skill.proficiency > 100 {
            return Err(LoadError::Malformed(format!(
                "proficiency {} out of range for skill {}",
                skill.proficiency, skill.id
            )));
        }
        if !seen.insert(skill.id.as_str()) {
            return Err(LoadError::DuplicateId(skill.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySource;
    use crate::source::EmbeddedSource;

    const TWO_SKILLS: &str = r#"
        [[skills]]
        id = "rust"
        title = "Rust"
        icon = "rust"
        proficiency = 60

        [[skills]]
        id = "css"
        title = "CSS"
    "#;

    #[tokio::test]
    async fn test_load_keeps_source_order() {
        let source = MemorySource::new(TWO_SKILLS);
        let skills = load_skills(&source).await.unwrap();

        let ids: Vec<&str> = skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["rust", "css"]);
        assert_eq!(skills[0].proficiency, 60);
        assert_eq!(skills[1].icon, "");
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let source = MemorySource::new(TWO_SKILLS);

        let first = load_skills(&source).await.unwrap();
        let second = load_skills(&source).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.reads(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_source() {
        let err = load_skills(&MemorySource::unavailable()).await.unwrap_err();
        assert!(matches!(err, LoadError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_document() {
        let source = MemorySource::new("[[skills]]\nid = 42\n");
        let err = load_skills(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_title() {
        let source = MemorySource::new("[[skills]]\nid = \"rust\"\ntitle = \"  \"\n");
        let err = load_skills(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::MissingField(_)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let source = MemorySource::new(
            "[[skills]]\nid = \"rust\"\ntitle = \"Rust\"\n\n[[skills]]\nid = \"rust\"\ntitle = \"Rust again\"\n",
        );
        let err = load_skills(&source).await.unwrap_err();
        assert_eq!(err, LoadError::DuplicateId("rust".to_string()));
    }

    #[tokio::test]
    async fn test_bad_skills_do_not_hide_profile() {
        let source = MemorySource::new(
            r#"
            [profile]
            name = "Mehdi"

            [[skills]]
            id = "rust"
            title = "Rust"

            [[skills]]
            id = "rust"
            title = "Rust again"
            "#,
        );

        let profile = load_profile(&source).await.unwrap();
        assert_eq!(profile.name, "Mehdi");
        assert_eq!(
            load_skills(&source).await.unwrap_err(),
            LoadError::DuplicateId("rust".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_document_fails_profile() {
        let err = load_profile(&MemorySource::new("[profile]
name = 7
")).await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_proficiency_out_of_range() {
        let source =
            MemorySource::new("[[skills]]\nid = \"rust\"\ntitle = \"Rust\"\nproficiency = 150\n");
        let err = load_skills(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_source_change_is_picked_up() {
        let source = MemorySource::new(TWO_SKILLS);
        assert_eq!(load_skills(&source).await.unwrap().len(), 2);

        source.set("[[skills]]\nid = \"git\"\ntitle = \"Git\"\n");
        let skills = load_skills(&source).await.unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].id, "git");
    }

    #[tokio::test]
    async fn test_embedded_content_is_valid() {
        let content = load_content(&EmbeddedSource::default()).await.unwrap();
        assert!(!content.skills.is_empty());
        assert!(!content.profile.name.is_empty());
        assert!(!content.profile.contact.email.is_empty());
    }

    #[tokio::test]
    async fn test_empty_document() {
        let content = load_content(&MemorySource::new("")).await.unwrap();
        assert!(content.skills.is_empty());
        assert_eq!(load_profile(&MemorySource::new("")).await.unwrap(), Profile::default());
    }
}
