// Copyright 2026 the Teamcard Authors
// SPDX-License-Identifier: Apache-2.0

//! Translating drag gesture results into list indices.
//!
//! The gesture library reports a finished drag as a pair of entry ids:
//! the entry that moved and the entry it was dropped over. Hit-testing,
//! pointer capture, and animation all live in that library; this module
//! only turns the id pair into `(from, to)` indices for
//! [`SocialLinkList::reorder`](crate::model::SocialLinkList::reorder).
//! Ids are the stable [`LinkId`]s, so editing an entry's text mid-drag
//! cannot change which entry the gesture targets.

use crate::model::{LinkId, SocialLinkList};

/// A finished drag gesture, as reported by the host's drag layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// The entry the author dragged.
    pub moved: LinkId,
    /// The entry it was dropped over.
    pub over: LinkId,
}

/// Resolve a drag outcome to `(from, to)` indices in the current list.
///
/// Returns `None` when the drag resolves to nothing: the entry was
/// dropped on itself, or either id is no longer in the list (the entry
/// was removed mid-drag). The caller treats `None` as "leave the list
/// alone".
pub fn resolve_drag(list: &SocialLinkList, outcome: DragOutcome) -> Option<(usize, usize)> {
    if outcome.moved == outcome.over {
        return None;
    }
    let from = list.index_of(outcome.moved)?;
    let to = list.index_of(outcome.over)?;
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SocialLink, SocialLinkList};

    fn list(icons: &[&str]) -> SocialLinkList {
        SocialLinkList::from_links(icons.iter().copied().map(SocialLink::new).collect())
    }

    #[test]
    fn resolves_to_current_indices() {
        let list = list(&["a", "b", "c"]);
        let outcome = DragOutcome {
            moved: list.get(0).unwrap().id,
            over: list.get(2).unwrap().id,
        };
        assert_eq!(resolve_drag(&list, outcome), Some((0, 2)));
    }

    #[test]
    fn dropping_on_itself_resolves_to_nothing() {
        let list = list(&["a", "b"]);
        let id = list.get(1).unwrap().id;
        let outcome = DragOutcome {
            moved: id,
            over: id,
        };
        assert_eq!(resolve_drag(&list, outcome), None);
    }

    #[test]
    fn stale_ids_resolve_to_nothing() {
        let list = list(&["a", "b", "c"]);
        let moved = list.get(1).unwrap().id;
        let over = list.get(2).unwrap().id;

        // The dragged entry was removed mid-drag.
        let shrunk = list.remove(1).unwrap();
        assert_eq!(
            resolve_drag(&shrunk, DragOutcome { moved, over }),
            None
        );

        // Same for the drop target.
        let shrunk = list.remove(2).unwrap();
        assert_eq!(
            resolve_drag(&shrunk, DragOutcome { moved, over }),
            None
        );
    }

    #[test]
    fn resolution_matches_index_of_after_edits() {
        // Editing a link's text must not change what the ids resolve to.
        let list = list(&["a", "b", "c"]);
        let moved = list.get(0).unwrap().id;
        let over = list.get(1).unwrap().id;

        let edited = list
            .update(0, crate::model::LinkField::Link, "https://a.example")
            .unwrap();
        assert_eq!(
            resolve_drag(&edited, DragOutcome { moved, over }),
            Some((0, 1))
        );
    }
}
