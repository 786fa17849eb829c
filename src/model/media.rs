// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Host-supplied media data for the member photo.
//!
//! The crate never uploads or fetches anything; the host's media
//! library hands over a [`MediaItem`] snapshot when the author picks an
//! image. `size_options` computes the entries for the image-size
//! dropdown by intersecting the item's generated sizes with the sizes
//! the editor has registered; a generated size with no registered
//! counterpart has no display name and is skipped.

use std::collections::BTreeMap;

/// Identifier of an item in the host's media library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(pub u64);

/// One generated rendition of a media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSize {
    /// Url serving this rendition.
    pub source_url: String,
}

/// Snapshot of a media library item, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaId,
    /// Url of the full-size image.
    pub url: String,
    /// Alt text stored with the item.
    pub alt: String,
    /// Generated sizes keyed by slug ("thumbnail", "medium", ...).
    /// `BTreeMap` keeps the dropdown order stable across hosts.
    pub sizes: BTreeMap<String, MediaSize>,
}

/// An image size the editor has registered for author selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredSize {
    /// Slug matching [`MediaItem::sizes`] keys.
    pub slug: String,
    /// Display name shown in the dropdown.
    pub name: String,
}

/// One entry of the image-size dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOption {
    /// Display label (the registered size's name).
    pub label: String,
    /// Url to switch the member photo to.
    pub value: String,
}

/// Check whether a url is a local `blob:` preview rather than a
/// persisted asset. Blob urls only live as long as the editing session
/// that created them.
pub fn is_blob_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// Compute the image-size dropdown options for a media item.
///
/// Emits one option per generated size that the editor has registered,
/// labelled with the registered display name, in stable slug order.
pub fn size_options(media: &MediaItem, registered: &[RegisteredSize]) -> Vec<SizeOption> {
    let mut options = Vec::new();
    for (slug, size) in &media.sizes {
        if let Some(reg) = registered.iter().find(|r| &r.slug == slug) {
            options.push(SizeOption {
                label: reg.name.clone(),
                value: size.source_url.clone(),
            });
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media_with_sizes(sizes: &[(&str, &str)]) -> MediaItem {
        MediaItem {
            id: MediaId(7),
            url: "https://example.com/full.jpg".into(),
            alt: "portrait".into(),
            sizes: sizes
                .iter()
                .map(|(slug, url)| {
                    (
                        (*slug).to_owned(),
                        MediaSize {
                            source_url: (*url).to_owned(),
                        },
                    )
                })
                .collect(),
        }
    }

    fn registered(pairs: &[(&str, &str)]) -> Vec<RegisteredSize> {
        pairs
            .iter()
            .map(|(slug, name)| RegisteredSize {
                slug: (*slug).to_owned(),
                name: (*name).to_owned(),
            })
            .collect()
    }

    #[test]
    fn blob_urls_are_detected() {
        assert!(is_blob_url("blob:https://example.com/1234-5678"));
        assert!(!is_blob_url("https://example.com/photo.jpg"));
        assert!(!is_blob_url(""));
    }

    #[test]
    fn options_intersect_generated_and_registered() {
        let media = media_with_sizes(&[
            ("thumbnail", "https://cdn/th.jpg"),
            ("medium", "https://cdn/md.jpg"),
            ("custom-banner", "https://cdn/banner.jpg"),
        ]);
        let registered = registered(&[("thumbnail", "Thumbnail"), ("medium", "Medium")]);

        let options = size_options(&media, &registered);

        assert_eq!(
            options,
            vec![
                SizeOption {
                    label: "Medium".into(),
                    value: "https://cdn/md.jpg".into(),
                },
                SizeOption {
                    label: "Thumbnail".into(),
                    value: "https://cdn/th.jpg".into(),
                },
            ]
        );
    }

    #[test]
    fn unregistered_sizes_are_skipped() {
        let media = media_with_sizes(&[("custom-banner", "https://cdn/banner.jpg")]);
        let options = size_options(&media, &registered(&[("thumbnail", "Thumbnail")]));
        assert!(options.is_empty());
    }

    #[test]
    fn no_generated_sizes_means_no_options() {
        let media = media_with_sizes(&[]);
        let options = size_options(&media, &registered(&[("thumbnail", "Thumbnail")]));
        assert!(options.is_empty());
    }
}
