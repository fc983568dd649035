//! Tag chips

use shared::models::Tag;

/// One chip as rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLabel<'a> {
    pub id: &'a str,
    pub name: &'a str,
    /// Whether the chip shows a delete affordance
    pub removable: bool,
}

/// A row of tag chips
///
/// Pending tags in the form are removable; tags of saved prompts are not,
/// since prompts are never edited.
#[derive(Debug, Clone, Copy)]
pub struct TagLabelList<'a> {
    tags: &'a [Tag],
    removable: bool,
}

impl<'a> TagLabelList<'a> {
    pub fn read_only(tags: &'a [Tag]) -> Self {
        Self {
            tags,
            removable: false,
        }
    }

    pub fn removable(tags: &'a [Tag]) -> Self {
        Self {
            tags,
            removable: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn labels(self) -> impl Iterator<Item = TagLabel<'a>> + 'a {
        let removable = self.removable;
        self.tags.iter().map(move |t| TagLabel {
            id: &t.id,
            name: &t.name,
            removable,
        })
    }

    /// Id to remove when the delete affordance of chip `index` is selected
    pub fn remove_target(&self, index: usize) -> Option<&'a str> {
        if !self.removable {
            return None;
        }
        self.tags.get(index).map(|t| t.id.as_str())
    }
}
