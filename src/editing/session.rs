// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Block session - manages editing state for a single team member card.
//!
//! `BlockSession` is the one owner of the member attributes and the
//! link selection. Every mutation applies a pure list operation and the
//! matching selection transition in the same call, so the selection can
//! never be observed pointing at an index the list no longer has. All
//! operations are synchronous and run to completion; there is exactly
//! one in-flight mutation at a time, driven by the host's event
//! dispatcher.

use crate::editing::drag::{self, DragOutcome};
use crate::editing::edit_types::EditType;
use crate::editing::selection::LinkSelection;
use crate::error::Result;
use crate::model::{LinkField, MediaItem, SocialLink, SocialLinkList, TeamMember};

/// Editing session for one team member block.
#[derive(Debug, Clone, Default)]
pub struct BlockSession {
    /// The block's attributes (name, bio, image, social links).
    member: TeamMember,

    /// Which social link entry's edit form is open.
    selection: LinkSelection,

    /// Tag of the most recent mutation, for host undo grouping.
    last_edit: EditType,
}

impl BlockSession {
    /// Create a session for an empty card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from persisted attributes.
    ///
    /// An image url left over as a `blob:` preview from an interrupted
    /// upload is discarded here; it can never render again.
    pub fn from_member(mut member: TeamMember) -> Self {
        if member.discard_stale_upload() {
            tracing::warn!("discarded stale blob image url from interrupted upload");
        }
        Self {
            member,
            selection: LinkSelection::Unselected,
            last_edit: EditType::Normal,
        }
    }

    /// The block's attributes.
    pub fn member(&self) -> &TeamMember {
        &self.member
    }

    /// Read-only snapshot of the social link list for rendering.
    pub fn links(&self) -> &SocialLinkList {
        &self.member.social_links
    }

    /// The selected entry's index, or `None` when no edit form is open.
    pub fn selection(&self) -> Option<usize> {
        self.selection.index()
    }

    /// The selected entry itself, if any.
    pub fn selected_link(&self) -> Option<&SocialLink> {
        self.selection
            .index()
            .and_then(|index| self.member.social_links.get(index))
    }

    /// Tag of the most recent mutation, for undo grouping.
    pub fn last_edit(&self) -> EditType {
        self.last_edit
    }

    fn finish_edit(&mut self, edit: EditType) {
        self.last_edit = edit;
        debug_assert!(
            self.selection.is_valid_for(self.member.social_links.len()),
            "selection must track list mutations"
        );
    }

    // ------------------------------------------------------------------
    // Social link operations
    // ------------------------------------------------------------------

    /// Append a new link with `default_icon` and open its edit form.
    /// Returns the new list length.
    pub fn add_link(&mut self, default_icon: &str) -> usize {
        let (links, new_len) = self.member.social_links.add(default_icon);
        self.member.social_links = links;
        self.selection = self.selection.on_add(new_len);
        self.finish_edit(EditType::Normal);
        tracing::debug!(icon = default_icon, len = new_len, "added social link");
        new_len
    }

    /// Replace one field of the entry at `index`.
    pub fn update_link(&mut self, index: usize, field: LinkField, value: &str) -> Result<()> {
        self.member.social_links = self.member.social_links.update(index, field, value)?;
        self.finish_edit(EditType::Text);
        Ok(())
    }

    /// Replace one field of the entry whose edit form is open.
    ///
    /// Returns `Ok(false)` when no form is open: the host form is
    /// unmounted then, so there is nothing to edit.
    pub fn update_selected_link(&mut self, field: LinkField, value: &str) -> Result<bool> {
        match self.selection.index() {
            Some(index) => {
                self.update_link(index, field, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the entry at `index`. The selection tracks the removal:
    /// removing the selected entry closes its form, removing an earlier
    /// entry shifts the selection down.
    pub fn remove_link(&mut self, index: usize) -> Result<()> {
        self.member.social_links = self.member.social_links.remove(index)?;
        self.selection = self.selection.on_remove(index);
        self.finish_edit(EditType::Normal);
        tracing::debug!(index, len = self.member.social_links.len(), "removed social link");
        Ok(())
    }

    /// Remove the entry whose edit form is open ("Remove Link" in the
    /// form). Returns false when no form is open.
    pub fn remove_selected_link(&mut self) -> bool {
        match self.selection.index() {
            // The selection invariant keeps the index in range, so the
            // removal cannot fail.
            Some(index) => self.remove_link(index).is_ok(),
            None => false,
        }
    }

    /// Move the entry at `from` to `to` and select it at its new
    /// position.
    pub fn reorder_link(&mut self, from: usize, to: usize) -> Result<()> {
        self.member.social_links = self.member.social_links.reorder(from, to)?;
        self.selection = self.selection.on_reorder(from, to);
        self.finish_edit(EditType::Drag);
        tracing::debug!(from, to, "reordered social links");
        Ok(())
    }

    /// Apply a finished drag gesture.
    ///
    /// Returns `Ok(false)` when the gesture resolves to nothing (entry
    /// dropped on itself, or an id no longer in the list).
    pub fn apply_drag(&mut self, outcome: DragOutcome) -> Result<bool> {
        match drag::resolve_drag(&self.member.social_links, outcome) {
            Some((from, to)) => {
                self.reorder_link(from, to)?;
                Ok(true)
            }
            None => {
                tracing::debug!(?outcome, "drag resolved to nothing");
                Ok(false)
            }
        }
    }

    /// Open the edit form for the entry at `index` (the author clicked
    /// its icon).
    pub fn select_link(&mut self, index: usize) -> Result<()> {
        self.selection = self
            .selection
            .select(index, self.member.social_links.len())?;
        Ok(())
    }

    /// The block as a whole lost editor focus; close the edit form.
    pub fn deselect_block(&mut self) {
        self.selection = self.selection.on_block_deselected();
    }

    // ------------------------------------------------------------------
    // Member attribute operations
    // ------------------------------------------------------------------

    /// Replace the member name.
    pub fn set_name(&mut self, name: &str) {
        self.member.set_name(name);
        self.finish_edit(EditType::Text);
    }

    /// Replace the member bio.
    pub fn set_bio(&mut self, bio: &str) {
        self.member.set_bio(bio);
        self.finish_edit(EditType::Text);
    }

    /// Adopt an image picked from the media library.
    pub fn set_image(&mut self, media: &MediaItem) {
        self.member.set_image(media);
        self.finish_edit(EditType::Normal);
    }

    /// Use an external image url.
    pub fn set_image_url(&mut self, url: &str) {
        self.member.set_image_url(url);
        self.finish_edit(EditType::Normal);
    }

    /// Switch the rendered size of the current image.
    pub fn set_image_size_url(&mut self, url: &str) {
        self.member.set_image_size_url(url);
        self.finish_edit(EditType::Normal);
    }

    /// Edit the current image's alt text.
    pub fn set_alt(&mut self, alt: &str) {
        self.member.set_alt(alt);
        self.finish_edit(EditType::Text);
    }

    /// Remove the image.
    pub fn remove_image(&mut self) {
        self.member.remove_image();
        self.finish_edit(EditType::Normal);
    }
}
