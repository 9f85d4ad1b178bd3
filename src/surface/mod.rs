// SPDX-License-Identifier: MPL-2.0
//! Overlay surface lifecycle.
//!
//! A surface is the independently-lived rendering unit hosting one toast's
//! content. Three resource strategies (in-place overlay, transient host
//! window, persistent host window) implement one [`OverlaySurface`] contract
//! produced by a [`SurfaceStrategy`]; the controller only ever talks to the
//! trait.
//!
//! Surfaces are never reused across items: every presentation gets a fresh
//! surface with a fresh [`SurfaceId`], and completion events carry that id so
//! late arrivals from a superseded surface can be recognized and dropped.

mod host_window;
mod in_place;

pub use host_window::{
    PersistentWindowStrategy, TransientWindowStrategy, WindowAllocator, WindowHandle,
};
pub use in_place::InPlaceStrategy;

use crate::config::{AnimationSpec, ToastAlignment, Transition};

/// Unique identity of one overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Creates a new unique surface id.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle stage of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceStage {
    /// Entrance animation in flight.
    Entering,
    /// Fully shown.
    Shown,
    /// Exit animation in flight.
    Exiting,
    /// Rendering container released. Terminal.
    Disposed,
}

/// Kind of rendering context a surface attaches to, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextClass {
    /// A foreground-active scene/window.
    ActiveForeground,
    /// A foreground scene that is not currently active.
    InactiveForeground,
    /// Synthetic full-screen context used when nothing better exists.
    FullScreenFallback,
}

/// Opaque handle to a host rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextHandle {
    id: u64,
    class: ContextClass,
}

impl ContextHandle {
    /// Wraps a host context id with its class.
    #[must_use]
    pub fn new(id: u64, class: ContextClass) -> Self {
        Self { id, class }
    }

    /// The host-side id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The context class this handle was resolved as.
    #[must_use]
    pub fn class(&self) -> ContextClass {
        self.class
    }
}

/// Source of host rendering contexts, queried at surface creation.
pub trait ContextProvider {
    /// The currently active foreground context, if any.
    fn active_foreground(&self) -> Option<ContextHandle>;

    /// A foreground-but-inactive context, if any.
    fn inactive_foreground(&self) -> Option<ContextHandle>;

    /// Always-available default full-screen context.
    fn fallback(&self) -> ContextHandle;
}

/// Picks the best available context: active foreground, then inactive
/// foreground, then the full-screen fallback. Presentation never fails for
/// lack of a context; worst case is degraded placement.
#[must_use]
pub fn resolve_context(provider: &dyn ContextProvider) -> ContextHandle {
    provider
        .active_foreground()
        .or_else(|| provider.inactive_foreground())
        .unwrap_or_else(|| provider.fallback())
}

/// Provider for hosts with a single always-active context.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleContext;

impl ContextProvider for SingleContext {
    fn active_foreground(&self) -> Option<ContextHandle> {
        Some(ContextHandle::new(0, ContextClass::ActiveForeground))
    }

    fn inactive_foreground(&self) -> Option<ContextHandle> {
        None
    }

    fn fallback(&self) -> ContextHandle {
        ContextHandle::new(0, ContextClass::FullScreenFallback)
    }
}

/// One toast's rendering unit.
///
/// Stage transitions only move forward: `Entering → Shown → Exiting →
/// Disposed` (with `Entering → Exiting` allowed when a toast is cleared
/// mid-entrance, and any stage may jump straight to `Disposed` when the
/// surface is superseded).
pub trait OverlaySurface {
    /// This surface's unique id.
    fn id(&self) -> SurfaceId;

    /// Current lifecycle stage.
    fn stage(&self) -> SurfaceStage;

    /// The rendering context the surface attached to.
    fn context(&self) -> ContextHandle;

    /// The screen placement the surface was created with.
    fn placement(&self) -> ToastAlignment;

    /// The content transition the surface was created with.
    fn transition(&self) -> Transition;

    /// The animation timing currently driving the surface.
    fn animation(&self) -> AnimationSpec;

    /// Marks the entrance animation finished.
    fn mark_shown(&mut self);

    /// Begins the exit animation.
    fn begin_exit(&mut self, animation: AnimationSpec);

    /// Releases the rendering container. Idempotent; safe to call while an
    /// exit animation is still in flight.
    fn dispose(&mut self);

    /// Whether the container has been released.
    fn is_disposed(&self) -> bool {
        self.stage() == SurfaceStage::Disposed
    }
}

/// Resource-management strategy that allocates surfaces.
pub trait SurfaceStrategy {
    /// Allocates a fresh surface, attaches it to the best available
    /// context, and begins its entrance animation.
    fn create(
        &mut self,
        alignment: ToastAlignment,
        transition: Transition,
        animation: AnimationSpec,
    ) -> Box<dyn OverlaySurface>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LadderProvider {
        active: Option<ContextHandle>,
        inactive: Option<ContextHandle>,
    }

    impl ContextProvider for LadderProvider {
        fn active_foreground(&self) -> Option<ContextHandle> {
            self.active
        }

        fn inactive_foreground(&self) -> Option<ContextHandle> {
            self.inactive
        }

        fn fallback(&self) -> ContextHandle {
            ContextHandle::new(99, ContextClass::FullScreenFallback)
        }
    }

    #[test]
    fn surface_ids_are_unique() {
        assert_ne!(SurfaceId::new(), SurfaceId::new());
    }

    #[test]
    fn resolve_prefers_active_foreground() {
        let provider = LadderProvider {
            active: Some(ContextHandle::new(1, ContextClass::ActiveForeground)),
            inactive: Some(ContextHandle::new(2, ContextClass::InactiveForeground)),
        };
        assert_eq!(resolve_context(&provider).id(), 1);
    }

    #[test]
    fn resolve_falls_back_to_inactive_foreground() {
        let provider = LadderProvider {
            active: None,
            inactive: Some(ContextHandle::new(2, ContextClass::InactiveForeground)),
        };
        let context = resolve_context(&provider);
        assert_eq!(context.id(), 2);
        assert_eq!(context.class(), ContextClass::InactiveForeground);
    }

    #[test]
    fn resolve_never_fails() {
        let provider = LadderProvider {
            active: None,
            inactive: None,
        };
        let context = resolve_context(&provider);
        assert_eq!(context.class(), ContextClass::FullScreenFallback);
    }
}
