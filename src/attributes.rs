// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! The block's persisted attribute format.
//!
//! Attributes serialize to the JSON shape the host editor stores with
//! the block: `{name, bio, url, alt, id, sociallinks: [{icon, link}]}`.
//! `LinkId`s are session-local and deliberately absent from the wire
//! format; loading attributes assigns fresh ids. The [`AttributeSink`]
//! trait is the sole channel through which edits survive past the
//! current editing session; the host owns the actual storage.

use crate::model::member::MemberImage;
use crate::model::{MediaId, SocialLink, SocialLinkList, TeamMember};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One social link entry on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkAttr {
    pub icon: String,
    #[serde(default)]
    pub link: String,
}

/// The block's attributes as the host persists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    /// Image url; absent when the card has no photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: String,
    /// Media library id; absent for external urls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub sociallinks: Vec<SocialLinkAttr>,
}

impl BlockAttributes {
    /// Capture a member's current state as persistable attributes.
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            bio: member.bio.clone(),
            url: member.image.as_ref().map(|image| image.url.clone()),
            alt: member
                .image
                .as_ref()
                .map(|image| image.alt.clone())
                .unwrap_or_default(),
            id: member
                .image
                .as_ref()
                .and_then(|image| image.media_id)
                .map(|MediaId(id)| id),
            sociallinks: member
                .social_links
                .iter()
                .map(|link| SocialLinkAttr {
                    icon: link.icon.clone(),
                    link: link.link.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a member from persisted attributes, assigning fresh
    /// link ids.
    pub fn into_member(self) -> TeamMember {
        TeamMember {
            name: self.name,
            bio: self.bio,
            image: self.url.map(|url| MemberImage {
                url,
                media_id: self.id.map(MediaId),
                alt: self.alt,
            }),
            social_links: SocialLinkList::from_links(
                self.sociallinks
                    .into_iter()
                    .map(|attr| SocialLink::with_link(attr.icon, attr.link))
                    .collect(),
            ),
        }
    }

    /// Parse attributes from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse block attributes")
    }

    /// Serialize attributes to JSON for the host.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize block attributes")
    }
}

/// Where updated attributes go when the block is edited.
///
/// The host supplies the implementation (block attribute store,
/// autosave buffer, test capture); the core only pushes values in.
pub trait AttributeSink {
    fn persist(&mut self, attributes: &BlockAttributes) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_attribute_json() {
        let json = r#"{
            "name": "Ada Lovelace",
            "bio": "Analyst, metaphysician, founder of scientific computing.",
            "url": "https://cdn/ada.jpg",
            "alt": "Portrait of Ada Lovelace",
            "id": 42,
            "sociallinks": [
                { "icon": "wordpress", "link": "" },
                { "icon": "twitter", "link": "https://twitter.com/ada" }
            ]
        }"#;

        let attrs = BlockAttributes::from_json(json).unwrap();
        assert_eq!(attrs.name, "Ada Lovelace");
        assert_eq!(attrs.id, Some(42));
        assert_eq!(attrs.sociallinks.len(), 2);
        assert_eq!(attrs.sociallinks[1].link, "https://twitter.com/ada");
    }

    #[test]
    fn missing_fields_default() {
        let attrs = BlockAttributes::from_json("{}").unwrap();
        assert_eq!(attrs.name, "");
        assert_eq!(attrs.url, None);
        assert!(attrs.sociallinks.is_empty());
    }

    #[test]
    fn member_round_trip_preserves_logical_attributes() {
        let json = r#"{
            "name": "Ada",
            "bio": "bio",
            "url": "https://cdn/ada.jpg",
            "alt": "portrait",
            "id": 7,
            "sociallinks": [{ "icon": "wordpress", "link": "https://ada.example" }]
        }"#;

        let attrs = BlockAttributes::from_json(json).unwrap();
        let member = attrs.clone().into_member();

        let image = member.image.as_ref().unwrap();
        assert_eq!(image.url, "https://cdn/ada.jpg");
        assert_eq!(image.media_id, Some(MediaId(7)));
        assert_eq!(member.social_links.len(), 1);

        // Ids are session-local; everything else survives the trip.
        assert_eq!(BlockAttributes::from_member(&member), attrs);
    }

    #[test]
    fn member_without_image_omits_url_and_id() {
        let mut member = TeamMember::new();
        member.set_name("Ada");

        let json = BlockAttributes::from_member(&member).to_json().unwrap();
        assert!(!json.contains("\"url\""));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn invalid_json_reports_context() {
        let err = BlockAttributes::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("block attributes"));
    }
}
