//! Prompt form state
//!
//! Name, content and the pending tag list of the prompt being created,
//! plus the tag-input text box used to add tags one at a time.

use shared::models::Tag;
use thiserror::Error;

/// Fields with required-value validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Content,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Content => "Content",
        }
    }

    /// Message shown under the field when it is left empty
    pub fn missing_message(&self) -> &'static str {
        match self {
            FormField::Name => "Please enter a prompt name",
            FormField::Content => "Please enter the prompt content",
        }
    }
}

/// A required field was empty at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl FieldError {
    fn missing(field: FormField) -> Self {
        Self {
            field,
            message: field.missing_message(),
        }
    }
}

/// Validation failure; submission is blocked before any backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} required field(s) missing", .errors.len())]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    /// Message for one field, if that field failed
    pub fn for_field(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptForm {
    pub name: String,
    pub content: String,
    pub tag_input: String,
    pub pending_tags: Vec<Tag>,
}

impl PromptForm {
    /// The "add" action is disabled while the tag input is empty
    pub fn can_add_tag(&self) -> bool {
        !self.tag_input.is_empty()
    }

    /// Move the tag input into the pending list under a fresh id
    ///
    /// Names already pending are added again; duplicates are only collapsed
    /// by the store.
    pub fn add_pending_tag(&mut self) -> Option<&Tag> {
        if !self.can_add_tag() {
            return None;
        }
        let name = std::mem::take(&mut self.tag_input);
        self.pending_tags.push(Tag::new(name));
        self.pending_tags.last()
    }

    pub fn remove_pending_tag(&mut self, tag_id: &str) -> Option<Tag> {
        let index = self.pending_tags.iter().position(|t| t.id == tag_id)?;
        Some(self.pending_tags.remove(index))
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(FieldError::missing(FormField::Name));
        }
        if self.content.is_empty() {
            errors.push(FieldError::missing(FormField::Content));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors { errors })
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_clears_input() {
        let mut form = PromptForm {
            tag_input: "work".into(),
            ..Default::default()
        };
        let added = form.add_pending_tag().cloned().unwrap();
        assert_eq!(added.name, "work");
        assert!(form.tag_input.is_empty());
        assert_eq!(form.pending_tags, vec![added]);
    }

    #[test]
    fn test_add_tag_with_empty_input_is_noop() {
        let mut form = PromptForm::default();
        assert!(!form.can_add_tag());
        assert!(form.add_pending_tag().is_none());
        assert!(form.pending_tags.is_empty());
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut form = PromptForm::default();
        for _ in 0..2 {
            form.tag_input = "work".into();
            form.add_pending_tag();
        }
        assert_eq!(form.pending_tags.len(), 2);
        assert_ne!(form.pending_tags[0].id, form.pending_tags[1].id);
    }

    #[test]
    fn test_remove_pending_tag() {
        let mut form = PromptForm::default();
        form.tag_input = "work".into();
        let id = form.add_pending_tag().unwrap().id.clone();

        assert!(form.remove_pending_tag("other").is_none());
        assert_eq!(form.remove_pending_tag(&id).map(|t| t.name), Some("work".into()));
        assert!(form.pending_tags.is_empty());
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let form = PromptForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 2);
        assert_eq!(
            errors.for_field(FormField::Name),
            Some("Please enter a prompt name")
        );
        assert_eq!(errors.to_string(), "2 required field(s) missing");

        let form = PromptForm {
            name: "Greeting".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.for_field(FormField::Name).is_none());
        assert!(errors.for_field(FormField::Content).is_some());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let form = PromptForm {
            name: " ".into(),
            content: "\n".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }
}
