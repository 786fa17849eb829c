// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Block data model

pub mod link_id;
pub mod media;
pub mod member;
pub mod social;

pub use link_id::LinkId;
pub use media::{MediaId, MediaItem};
pub use member::TeamMember;
pub use social::{LinkField, SocialLink, SocialLinkList};
