// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit types for undo grouping

/// Type of edit being performed
///
/// The session tags every mutation with one of these so a host undo
/// stack can group consecutive edits of the same type into a single
/// undo action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditType {
    /// Discrete edit (add/remove link, image change; always a new
    /// undo group)
    #[default]
    Normal,

    /// Typing into a text field (consecutive keystrokes into the same
    /// field combine)
    Text,

    /// Drag reorder completed (one undo group per drop, however many
    /// intermediate positions the gesture reported)
    Drag,
}

impl EditType {
    /// Whether an edit of type `next` belongs in the same undo group
    /// as a preceding edit of type `self`.
    pub fn groups_with(self, next: EditType) -> bool {
        self == next && self == EditType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_text_edits_group() {
        assert!(EditType::Text.groups_with(EditType::Text));
    }

    #[test]
    fn discrete_edits_never_group() {
        assert!(!EditType::Normal.groups_with(EditType::Normal));
        assert!(!EditType::Drag.groups_with(EditType::Drag));
        assert!(!EditType::Text.groups_with(EditType::Normal));
        assert!(!EditType::Normal.groups_with(EditType::Text));
    }
}
