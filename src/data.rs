// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Block state and host-facing façade.
//!
//! `BlockState` wraps the editing session with the signals that cross
//! the host boundary: the block's editor-wide focus state, the single
//! error notice, the title-focus request that follows a first image,
//! and the persistence entry point. The host pushes focus changes and
//! media events in as plain values and reads plain values back out.
//! No callbacks, no ambient editor state.

use crate::attributes::{AttributeSink, BlockAttributes};
use crate::editing::BlockSession;
use crate::model::MediaItem;

/// State of one team member block instance.
#[derive(Debug, Clone, Default)]
pub struct BlockState {
    /// The editing session owning attributes and selection.
    pub session: BlockSession,

    /// Error message to display, if any. The block keeps at most one;
    /// a new failure replaces the previous message.
    error_message: Option<String>,

    /// Whether the block currently has editor focus.
    block_selected: bool,

    /// Set when the host should move keyboard focus to the name field;
    /// consumed by `take_title_focus_request`.
    title_focus_requested: bool,
}

impl BlockState {
    /// Create state for an empty, unfocused block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state from persisted attributes.
    pub fn from_attributes(attributes: BlockAttributes) -> Self {
        Self {
            session: BlockSession::from_member(attributes.into_member()),
            ..Self::default()
        }
    }

    /// Whether the block currently has editor focus.
    pub fn is_block_selected(&self) -> bool {
        self.block_selected
    }

    /// The host's focus signal. Losing focus closes the social link
    /// edit form; the author clicked away from the whole block.
    pub fn set_block_selected(&mut self, selected: bool) {
        if self.block_selected && !selected {
            self.session.deselect_block();
        }
        self.block_selected = selected;
    }

    // ------------------------------------------------------------------
    // Image events
    // ------------------------------------------------------------------

    /// The author picked an image from the media library.
    pub fn image_selected(&mut self, media: &MediaItem) {
        let had_image = self.session.member().image.is_some();
        self.session.set_image(media);
        self.request_title_focus_if_new(had_image);
    }

    /// The author entered an external image url.
    pub fn image_url_entered(&mut self, url: &str) {
        let had_image = self.session.member().image.is_some();
        self.session.set_image_url(url);
        self.request_title_focus_if_new(had_image);
    }

    /// The author chose a different rendered size for the image.
    pub fn image_size_chosen(&mut self, url: &str) {
        self.session.set_image_size_url(url);
    }

    /// The author edited the image's alt text.
    pub fn set_alt_text(&mut self, alt: &str) {
        self.session.set_alt(alt);
    }

    /// The author removed the image.
    pub fn remove_image(&mut self) {
        self.session.remove_image();
    }

    /// When an image first appears while the block is focused, the
    /// natural next edit is the member name, so ask the host to move
    /// keyboard focus there.
    fn request_title_focus_if_new(&mut self, had_image: bool) {
        if !had_image && self.session.member().image.is_some() && self.block_selected {
            self.title_focus_requested = true;
        }
    }

    /// Consume the pending title-focus request, if any.
    pub fn take_title_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.title_focus_requested)
    }

    // ------------------------------------------------------------------
    // Notices
    // ------------------------------------------------------------------

    /// An image selection or upload failed; replace the block's notice.
    pub fn image_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("image selection failed: {}", message);
        self.error_message = Some(message);
    }

    /// The current error notice, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Dismiss the error notice.
    pub fn clear_notice(&mut self) {
        self.error_message = None;
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Capture the block's current attributes.
    pub fn attributes(&self) -> BlockAttributes {
        BlockAttributes::from_member(self.session.member())
    }

    /// Push the current attributes into the host's persistence sink,
    /// the sole channel through which edits survive this session.
    pub fn persist_to(&self, sink: &mut dyn AttributeSink) -> anyhow::Result<()> {
        let attributes = self.attributes();
        match sink.persist(&attributes) {
            Ok(()) => {
                tracing::debug!(
                    links = attributes.sociallinks.len(),
                    "persisted block attributes"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to persist block attributes: {}", e);
                Err(e)
            }
        }
    }
}
