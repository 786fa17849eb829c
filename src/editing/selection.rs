// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection state for the social link edit form.
//!
//! `LinkSelection` tracks which entry (if any) has its edit form open.
//! It is derived, reactive state, never independent truth: every list
//! mutation has a matching transition here so the selection can never
//! point at an index the mutation just invalidated. Transitions are
//! pure (they take the current value and return the next one) so the
//! session can apply them in lockstep with the pure list operations.

use crate::error::{ModelError, Result};

/// Which social link entry's edit form is currently open.
///
/// Distinct from the block's own editor-wide focus state; see
/// [`on_block_deselected`](LinkSelection::on_block_deselected) for how
/// the two interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkSelection {
    /// No edit form is open.
    #[default]
    Unselected,
    /// The entry at this index has its edit form open.
    Selected(usize),
}

impl LinkSelection {
    /// The selected index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            LinkSelection::Unselected => None,
            LinkSelection::Selected(index) => Some(index),
        }
    }

    /// Whether the entry at `index` is the selected one.
    pub fn is_selected(self, index: usize) -> bool {
        self == LinkSelection::Selected(index)
    }

    /// Whether this selection is consistent with a list of `len`
    /// entries.
    pub fn is_valid_for(self, len: usize) -> bool {
        match self {
            LinkSelection::Unselected => true,
            LinkSelection::Selected(index) => index < len,
        }
    }

    /// An entry was appended; the list now has `new_len` entries.
    /// The new tail entry's edit form opens.
    pub fn on_add(self, new_len: usize) -> Self {
        LinkSelection::Selected(new_len - 1)
    }

    /// The entry at `removed` was excised from the list.
    ///
    /// Removing the selected entry closes the form; a selection past
    /// the removal point shifts down by one to keep tracking the same
    /// logical entry.
    pub fn on_remove(self, removed: usize) -> Self {
        match self {
            LinkSelection::Unselected => LinkSelection::Unselected,
            LinkSelection::Selected(index) if index == removed => LinkSelection::Unselected,
            LinkSelection::Selected(index) if index > removed => {
                LinkSelection::Selected(index - 1)
            }
            keep => keep,
        }
    }

    /// An entry was dragged from `from` to `to`.
    ///
    /// The author just interacted with the moved entry, so it becomes
    /// the selection regardless of what was selected before.
    pub fn on_reorder(self, _from: usize, to: usize) -> Self {
        LinkSelection::Selected(to)
    }

    /// The block as a whole lost editor focus; the edit form closes.
    pub fn on_block_deselected(self) -> Self {
        LinkSelection::Unselected
    }

    /// Explicitly open the edit form for the entry at `index` in a
    /// list of `len` entries.
    pub fn select(self, index: usize, len: usize) -> Result<Self> {
        ModelError::check_index(index, len)?;
        Ok(LinkSelection::Selected(index))
    }
}
