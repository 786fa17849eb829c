// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! The ordered social link list and its pure operations.
//!
//! `SocialLinkList` wraps an `Arc<Vec<SocialLink>>` so it can be cheaply
//! cloned for undo snapshots. Every operation takes `&self` and returns
//! a new list; the input is never mutated, so a host can diff
//! consecutive states or keep them on a history stack. Insertion order
//! is the on-page left-to-right render order and is semantically
//! meaningful.

use crate::error::{ModelError, Result};
use crate::model::LinkId;
use std::sync::Arc;

/// One social link entry, rendered as a clickable icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Stable identity for drag tracking and lookups. Independent of
    /// the editable fields below.
    pub id: LinkId,
    /// Identifier naming an icon (e.g. "wordpress", "twitter").
    pub icon: String,
    /// Target url. May be empty while the author is still editing.
    pub link: String,
}

impl SocialLink {
    /// Create an entry with the given icon and an empty url.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            id: LinkId::next(),
            icon: icon.into(),
            link: String::new(),
        }
    }

    /// Create an entry with both fields set.
    pub fn with_link(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: LinkId::next(),
            icon: icon.into(),
            link: link.into(),
        }
    }
}

/// Which editable field of a [`SocialLink`] an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Icon,
    Link,
}

/// An ordered list of social links.
///
/// Uses `Arc<Vec<_>>` for cheap cloning; operations are copy-on-write
/// and return a new list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialLinkList {
    inner: Arc<Vec<SocialLink>>,
}

impl SocialLinkList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing entries, preserving their order.
    pub fn from_links(links: Vec<SocialLink>) -> Self {
        Self {
            inner: Arc::new(links),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&SocialLink> {
        self.inner.get(index)
    }

    /// Iterate over entries in render order.
    pub fn iter(&self) -> impl Iterator<Item = &SocialLink> {
        self.inner.iter()
    }

    /// Read-only view of the entries for rendering.
    pub fn as_slice(&self) -> &[SocialLink] {
        &self.inner
    }

    /// Find the current index of the entry with the given id.
    pub fn index_of(&self, id: LinkId) -> Option<usize> {
        self.inner.iter().position(|l| l.id == id)
    }

    /// Append a new entry with `default_icon` and an empty url.
    ///
    /// Returns the new list and its new length; the appended entry sits
    /// at `new_len - 1`.
    pub fn add(&self, default_icon: &str) -> (Self, usize) {
        let mut links = (*self.inner).clone();
        links.push(SocialLink::new(default_icon));
        let new_len = links.len();
        (Self::from_links(links), new_len)
    }

    /// Replace one field of the entry at `index`.
    ///
    /// All other entries, the target's other field, and the order are
    /// untouched. The entry keeps its id.
    pub fn update(&self, index: usize, field: LinkField, value: &str) -> Result<Self> {
        ModelError::check_index(index, self.len())?;
        let mut links = (*self.inner).clone();
        match field {
            LinkField::Icon => links[index].icon = value.to_owned(),
            LinkField::Link => links[index].link = value.to_owned(),
        }
        Ok(Self::from_links(links))
    }

    /// Remove the entry at `index`; later entries shift left by one.
    pub fn remove(&self, index: usize) -> Result<Self> {
        ModelError::check_index(index, self.len())?;
        let mut links = (*self.inner).clone();
        links.remove(index);
        Ok(Self::from_links(links))
    }

    /// Move the entry at `from` to `to`, shifting the entries between
    /// them by one position (remove then insert, not swap).
    ///
    /// `from == to` is a no-op. Untouched entries keep their relative
    /// order.
    pub fn reorder(&self, from: usize, to: usize) -> Result<Self> {
        ModelError::check_index(from, self.len())?;
        ModelError::check_index(to, self.len())?;
        if from == to {
            return Ok(self.clone());
        }
        let mut links = (*self.inner).clone();
        let moved = links.remove(from);
        links.insert(to, moved);
        Ok(Self::from_links(links))
    }
}
