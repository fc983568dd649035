//! Tag Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag entity
///
/// Identity is `id`; two tags with the same `name` are the same label for
/// deduplication purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    /// Create a tag with a freshly generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Create a tag with a known id
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Tag::new("work");
        let b = Tag::new("work");
        assert_eq!(a.name, b.name);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }
}
