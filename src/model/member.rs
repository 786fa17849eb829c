// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! The team member block's attributes.
//!
//! `TeamMember` holds everything the block edits: name, bio, the
//! optional photo, and the social link list. Name and bio are plain
//! strings here; rich-text markup is the host's concern. Photo
//! handlers mirror the block's toolbar and inspector actions: picking
//! from the media library, entering an external url, switching the
//! rendered size, editing alt text, and removing the image.

use crate::model::media::{self, MediaItem};
use crate::model::social::SocialLinkList;
use crate::model::MediaId;

/// The member photo as stored on the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberImage {
    /// Url the block renders.
    pub url: String,
    /// Media library id. `None` for external urls and pending uploads.
    pub media_id: Option<MediaId>,
    /// Alt text.
    pub alt: String,
}

impl MemberImage {
    /// Whether this image is a local `blob:` preview that has not been
    /// committed to the media library yet.
    pub fn is_pending_upload(&self) -> bool {
        self.media_id.is_none() && media::is_blob_url(&self.url)
    }
}

/// All attributes of one team member card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamMember {
    pub name: String,
    pub bio: String,
    pub image: Option<MemberImage>,
    pub social_links: SocialLinkList,
}

impl TeamMember {
    /// Create an empty member card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the member name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the member bio.
    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = bio.into();
    }

    /// Adopt an image picked from the host's media library.
    pub fn set_image(&mut self, media: &MediaItem) {
        self.image = Some(MemberImage {
            url: media.url.clone(),
            media_id: Some(media.id),
            alt: media.alt.clone(),
        });
    }

    /// Use an external image url. The media id is dropped and the alt
    /// text cleared, since neither belongs to the new image.
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image = Some(MemberImage {
            url: url.into(),
            media_id: None,
            alt: String::new(),
        });
    }

    /// Switch the rendered size of the current image (url swap only;
    /// the image is still the same media item). No-op without an image.
    pub fn set_image_size_url(&mut self, url: impl Into<String>) {
        if let Some(image) = &mut self.image {
            image.url = url.into();
        }
    }

    /// Edit the alt text of the current image. No-op without an image.
    pub fn set_alt(&mut self, alt: impl Into<String>) {
        if let Some(image) = &mut self.image {
            image.alt = alt.into();
        }
    }

    /// Remove the image entirely (url, media id, and alt together).
    pub fn remove_image(&mut self) {
        self.image = None;
    }

    /// Drop an image whose url is a `blob:` preview with no media id.
    ///
    /// Such an image is left over from an interrupted upload (the
    /// session that owned the blob is gone) and can never render again.
    /// Returns true if an image was discarded.
    pub fn discard_stale_upload(&mut self) -> bool {
        if self.image.as_ref().is_some_and(MemberImage::is_pending_upload) {
            self.image = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn media() -> MediaItem {
        MediaItem {
            id: MediaId(42),
            url: "https://cdn/photo.jpg".into(),
            alt: "portrait".into(),
            sizes: BTreeMap::new(),
        }
    }

    #[test]
    fn set_image_adopts_library_item() {
        let mut member = TeamMember::new();
        member.set_image(&media());

        let image = member.image.unwrap();
        assert_eq!(image.url, "https://cdn/photo.jpg");
        assert_eq!(image.media_id, Some(MediaId(42)));
        assert_eq!(image.alt, "portrait");
    }

    #[test]
    fn set_image_url_drops_id_and_alt() {
        let mut member = TeamMember::new();
        member.set_image(&media());
        member.set_image_url("https://elsewhere/pic.png");

        let image = member.image.unwrap();
        assert_eq!(image.url, "https://elsewhere/pic.png");
        assert_eq!(image.media_id, None);
        assert_eq!(image.alt, "");
    }

    #[test]
    fn set_image_size_url_keeps_id_and_alt() {
        let mut member = TeamMember::new();
        member.set_image(&media());
        member.set_image_size_url("https://cdn/photo-300x300.jpg");

        let image = member.image.unwrap();
        assert_eq!(image.url, "https://cdn/photo-300x300.jpg");
        assert_eq!(image.media_id, Some(MediaId(42)));
        assert_eq!(image.alt, "portrait");
    }

    #[test]
    fn set_alt_without_image_is_noop() {
        let mut member = TeamMember::new();
        member.set_alt("unused");
        assert_eq!(member.image, None);
    }

    #[test]
    fn remove_image_clears_everything() {
        let mut member = TeamMember::new();
        member.set_image(&media());
        member.remove_image();
        assert_eq!(member.image, None);
    }

    #[test]
    fn stale_blob_upload_is_discarded() {
        let mut member = TeamMember::new();
        member.set_image_url("blob:https://editor/1234");
        assert!(member.image.as_ref().unwrap().is_pending_upload());

        assert!(member.discard_stale_upload());
        assert_eq!(member.image, None);
    }

    #[test]
    fn committed_blob_upload_is_kept() {
        // A blob url with a media id means the upload completed and the
        // host just hasn't swapped in the final url yet.
        let mut member = TeamMember::new();
        member.image = Some(MemberImage {
            url: "blob:https://editor/1234".into(),
            media_id: Some(MediaId(9)),
            alt: String::new(),
        });

        assert!(!member.discard_stale_upload());
        assert!(member.image.is_some());
    }

    #[test]
    fn plain_url_is_not_discarded() {
        let mut member = TeamMember::new();
        member.set_image_url("https://elsewhere/pic.png");
        assert!(!member.discard_stale_upload());
        assert!(member.image.is_some());
    }
}
