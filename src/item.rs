// SPDX-License-Identifier: MPL-2.0
//! The host-side item contract and per-presentation identity.
//!
//! A toast is driven by a single optional "current item" owned by the host.
//! The item type only needs equality and a stable id; the id is what tells
//! "the same logical toast redisplayed" apart from "a different toast".

use crate::haptics::HapticFeedback;
use std::fmt;

/// Value that identifies which toast (if any) should be shown.
///
/// Implemented by the host application's own type. The controller holds the
/// item by value but never mutates it.
pub trait ToastItem: PartialEq {
    /// Stable identity of the logical toast.
    type Id: PartialEq + Clone + fmt::Debug;

    /// Returns the identity used to compare "same toast" vs "new toast".
    fn id(&self) -> Self::Id;

    /// Haptic feedback to trigger when this item first becomes fully
    /// visible. `None` disables feedback for the item.
    fn haptic_feedback(&self) -> Option<HapticFeedback> {
        Some(HapticFeedback::Default)
    }
}

/// Unique identity of one presentation of an item.
///
/// A fresh token is generated every time an item is presented, so
/// redisplaying the same logical item still counts as a new appearance
/// (haptics re-trigger, timers start fresh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresentationToken(u64);

impl PresentationToken {
    /// Creates a new unique presentation token.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PresentationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Banner {
        id: u32,
        text: String,
    }

    impl ToastItem for Banner {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn presentation_tokens_are_unique() {
        assert_ne!(PresentationToken::new(), PresentationToken::new());
    }

    #[test]
    fn default_haptic_hint_is_selection_feedback() {
        let banner = Banner {
            id: 1,
            text: "saved".into(),
        };
        assert_eq!(banner.haptic_feedback(), Some(HapticFeedback::Default));
    }

    #[test]
    fn same_id_different_payload_is_same_identity() {
        let a = Banner {
            id: 7,
            text: "one".into(),
        };
        let b = Banner {
            id: 7,
            text: "two".into(),
        };
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }
}
