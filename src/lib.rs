// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Teamcard: the logical core of a team-member card block for a
//! block-based content editor.
//!
//! The crate owns the block's state (name, bio, photo, and an ordered
//! list of social links) and the selection state machine behind the
//! link edit form. Rendering, rich-text widgets, media transfer, and
//! drag gesture recognition stay in the host; they push plain values in
//! (focus changes, picked media, finished drags as id pairs) and read
//! plain values back out.
//!
//! # Example
//!
//! ```
//! use teamcard::{BlockSession, DragOutcome, LinkField};
//!
//! let mut session = BlockSession::new();
//!
//! // Adding a link opens its edit form.
//! session.add_link("wordpress");
//! let len = session.add_link("twitter");
//! assert_eq!(len, 2);
//! assert_eq!(session.selection(), Some(1));
//!
//! // The form edits the selected entry.
//! session
//!     .update_selected_link(LinkField::Link, "https://twitter.com/ada")
//!     .unwrap();
//!
//! // A finished drag arrives as a pair of stable entry ids.
//! let outcome = DragOutcome {
//!     moved: session.links().get(1).unwrap().id,
//!     over: session.links().get(0).unwrap().id,
//! };
//! session.apply_drag(outcome).unwrap();
//! assert_eq!(session.selection(), Some(0));
//! ```

pub mod attributes;
pub mod data;
pub mod editing;
pub mod error;
pub mod model;

pub use attributes::{AttributeSink, BlockAttributes};
pub use data::BlockState;
pub use editing::{BlockSession, DragOutcome, EditType, LinkSelection};
pub use error::{ModelError, Result};
pub use model::{LinkField, LinkId, MediaId, SocialLink, SocialLinkList, TeamMember};
