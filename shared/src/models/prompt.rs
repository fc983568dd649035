//! Prompt Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tag;

/// Prompt entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Creation time in Unix milliseconds, filled in by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Prompt {
    /// Create a new prompt with a freshly generated id
    pub fn new(name: impl Into<String>, content: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            content: content.into(),
            tags,
            created_at: None,
        }
    }
}

/// Snapshot of everything the store knows: all prompts and all tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCollection {
    pub prompts: Vec<Prompt>,
    pub tags: Vec<Tag>,
}

impl PromptCollection {
    /// Find a known tag by exact (case-sensitive) name
    pub fn find_tag_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// Find a prompt by id
    pub fn find_prompt(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag_by_name_is_exact() {
        let collection = PromptCollection {
            prompts: vec![],
            tags: vec![Tag::with_id("t1", "Work")],
        };
        assert_eq!(collection.find_tag_by_name("Work").map(|t| t.id.as_str()), Some("t1"));
        assert!(collection.find_tag_by_name("work").is_none());
        assert!(collection.find_tag_by_name("Work ").is_none());
    }

    #[test]
    fn test_created_at_is_optional_on_the_wire() {
        let json = r#"{"id":"p1","name":"Greeting","content":"Hello","tags":[]}"#;
        let prompt: Prompt = serde_json::from_str(json).unwrap();
        assert_eq!(prompt.created_at, None);

        let out = serde_json::to_value(&prompt).unwrap();
        assert!(out.get("created_at").is_none());
    }
}
