use crate::models::{ItemKind, ItemRef};

/// How note-onto-note drops are sent to the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum MoveProtocol {
    /// `POST /api/attach_child_note` with a JSON body.
    #[default]
    Json,
    /// `POST /note/:id/move` form posts (detach, then attach).
    Form,
}

impl MoveProtocol {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "form" => Some(Self::Form),
            _ => None,
        }
    }
}

/// One relationship change requested by a drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mutation {
    AttachChildNote {
        parent_note_id: String,
        child_note_id: String,
    },
    AttachChildTag {
        parent_tag_id: String,
        child_tag_id: String,
    },
    AttachNoteToTag {
        note_id: String,
        tag_id: String,
    },
    MoveNote {
        note_id: String,
        new_parent_id: String,
    },
}

impl Mutation {
    /// Pick the request for dropping `source` onto `target`.
    ///
    /// Returns `None` for self-drops and for pairings with no backend
    /// relationship (a tag dropped onto a note).
    pub fn for_drop(source: &ItemRef, target: &ItemRef, protocol: MoveProtocol) -> Option<Self> {
        if source.is_same_item(target) {
            return None;
        }

        match (source.kind, target.kind) {
            (ItemKind::Note, ItemKind::Note) => Some(match protocol {
                MoveProtocol::Json => Self::AttachChildNote {
                    parent_note_id: target.id.clone(),
                    child_note_id: source.id.clone(),
                },
                MoveProtocol::Form => Self::MoveNote {
                    note_id: source.id.clone(),
                    new_parent_id: target.id.clone(),
                },
            }),
            (ItemKind::Tag, ItemKind::Tag) => Some(Self::AttachChildTag {
                parent_tag_id: target.id.clone(),
                child_tag_id: source.id.clone(),
            }),
            (ItemKind::Note, ItemKind::Tag) => Some(Self::AttachNoteToTag {
                note_id: source.id.clone(),
                tag_id: target.id.clone(),
            }),
            (ItemKind::Tag, ItemKind::Note) => None,
        }
    }

    pub fn endpoint(&self) -> String {
        match self {
            Self::AttachChildNote { .. } => "/api/attach_child_note".to_string(),
            Self::AttachChildTag { .. } => "/api/attach_child_tag".to_string(),
            Self::AttachNoteToTag { .. } => "/api/attach_note_to_tag".to_string(),
            Self::MoveNote { note_id, .. } => {
                format!("/note/{}/move", urlencoding::encode(note_id))
            }
        }
    }

    /// Text used in the failure notice.
    pub fn failure_notice(&self) -> &'static str {
        match self {
            Self::AttachChildNote { .. } | Self::MoveNote { .. } => {
                "Failed to move note. Please try again."
            }
            Self::AttachChildTag { .. } => "Failed to move tag. Please try again.",
            Self::AttachNoteToTag { .. } => "Failed to tag note. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str) -> ItemRef {
        ItemRef::new(ItemKind::Note, id)
    }

    fn tag(id: &str) -> ItemRef {
        ItemRef::new(ItemKind::Tag, id)
    }

    #[test]
    fn test_note_onto_note_attaches_child() {
        let m = Mutation::for_drop(&note("N1"), &note("N2"), MoveProtocol::Json);
        assert_eq!(
            m,
            Some(Mutation::AttachChildNote {
                parent_note_id: "N2".to_string(),
                child_note_id: "N1".to_string(),
            })
        );
        assert_eq!(m.map(|m| m.endpoint()).as_deref(), Some("/api/attach_child_note"));
    }

    #[test]
    fn test_note_onto_note_with_form_protocol_moves() {
        let m = Mutation::for_drop(&note("N1"), &note("N2"), MoveProtocol::Form)
            .expect("should produce a move");
        assert_eq!(m.endpoint(), "/note/N1/move");
    }

    #[test]
    fn test_tag_onto_tag_attaches_child_tag() {
        let m = Mutation::for_drop(&tag("T1"), &tag("T2"), MoveProtocol::Json);
        assert_eq!(
            m,
            Some(Mutation::AttachChildTag {
                parent_tag_id: "T2".to_string(),
                child_tag_id: "T1".to_string(),
            })
        );
    }

    #[test]
    fn test_note_onto_tag_associates() {
        let m = Mutation::for_drop(&note("5"), &tag("5"), MoveProtocol::Form)
            .expect("note and tag with equal ids are different items");
        assert_eq!(
            m,
            Mutation::AttachNoteToTag {
                note_id: "5".to_string(),
                tag_id: "5".to_string(),
            }
        );
    }

    #[test]
    fn test_self_drop_and_tag_onto_note_are_none() {
        assert!(Mutation::for_drop(&tag("T1"), &tag("T1"), MoveProtocol::Json).is_none());
        assert!(Mutation::for_drop(&note("N1"), &note("N1"), MoveProtocol::Form).is_none());
        assert!(Mutation::for_drop(&tag("T1"), &note("N1"), MoveProtocol::Json).is_none());
    }

    #[test]
    fn test_move_endpoint_escapes_id() {
        let m = Mutation::MoveNote {
            note_id: "a/b".to_string(),
            new_parent_id: "c".to_string(),
        };
        assert_eq!(m.endpoint(), "/note/a%2Fb/move");
    }

    #[test]
    fn test_protocol_parse() {
        assert_eq!(MoveProtocol::parse(" FORM "), Some(MoveProtocol::Form));
        assert_eq!(MoveProtocol::parse("json"), Some(MoveProtocol::Json));
        assert_eq!(MoveProtocol::parse("xml"), None);
    }
}
