use serde::{Deserialize, Serialize};

/// Which hierarchy a draggable row belongs to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ItemKind {
    Note,
    Tag,
}

impl ItemKind {
    /// Class carried by rendered rows of this kind.
    pub fn css_class(self) -> &'static str {
        match self {
            ItemKind::Note => "note-item",
            ItemKind::Tag => "tag-item",
        }
    }

    /// Attribute holding the backend id on rendered rows.
    pub fn id_attribute(self) -> &'static str {
        match self {
            ItemKind::Note => "data-note-id",
            ItemKind::Tag => "data-tag-id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Note => "note",
            ItemKind::Tag => "tag",
        }
    }
}

/// Selector matching any draggable row on the page.
pub(crate) const ITEM_SELECTOR: &str = ".note-item, .tag-item";

/// A note or tag as rendered by the server.
///
/// Identity is `(kind, id)`; `parent_id` is informational and comes from the
/// optional `data-parent-id` attribute.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ItemRef {
    pub id: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            parent_id: None,
        }
    }

    #[cfg(test)]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Build from raw attribute values; rows without a usable id are skipped.
    pub fn from_attributes(
        kind: ItemKind,
        id: Option<String>,
        parent_id: Option<String>,
    ) -> Option<Self> {
        let id = id?.trim().to_string();
        if id.is_empty() {
            return None;
        }

        let parent_id = parent_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Some(Self {
            id,
            kind,
            parent_id,
        })
    }

    pub fn is_same_item(&self, other: &ItemRef) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_item(other)
    }
}

impl Eq for ItemRef {}

impl std::fmt::Display for ItemRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.id)
    }
}
