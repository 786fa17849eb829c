// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for social link entries.
//!
//! Each `LinkId` is a monotonically increasing `u64` generated from a
//! global atomic counter. Ids are the identity used for drag tracking
//! and list lookups; they are assigned at entry creation and never
//! change when the entry's icon or url is edited, so editing a link
//! mid-drag cannot retarget the drag. Ids are never reused within a
//! process and are not persisted; reloading a block assigns fresh ones.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for one social link entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(u64);

static LINK_COUNTER: AtomicU64 = AtomicU64::new(1);

impl LinkId {
    /// Create a new unique link id.
    pub fn next() -> Self {
        Self(LINK_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::next()
    }
}
