// SPDX-License-Identifier: MPL-2.0
//! In-place overlay strategy.
//!
//! Attaches the toast as an overlay layer inside the host's own view tree
//! instead of allocating a separate window. This is the default strategy and
//! the one the iced runtime adapter renders (the toast is stacked above the
//! host content, aligned per configuration).

use super::{
    resolve_context, ContextHandle, ContextProvider, OverlaySurface, SingleContext, SurfaceId,
    SurfaceStage, SurfaceStrategy,
};
use crate::config::{AnimationSpec, ToastAlignment, Transition};

/// Strategy that overlays toast content on the host's view tree.
pub struct InPlaceStrategy {
    contexts: Box<dyn ContextProvider>,
}

impl InPlaceStrategy {
    /// Creates the strategy with a single always-active host context.
    #[must_use]
    pub fn new() -> Self {
        Self::with_contexts(Box::new(SingleContext))
    }

    /// Creates the strategy with a custom context provider.
    #[must_use]
    pub fn with_contexts(contexts: Box<dyn ContextProvider>) -> Self {
        Self { contexts }
    }
}

impl Default for InPlaceStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceStrategy for InPlaceStrategy {
    fn create(
        &mut self,
        alignment: ToastAlignment,
        transition: Transition,
        animation: AnimationSpec,
    ) -> Box<dyn OverlaySurface> {
        Box::new(InPlaceSurface {
            id: SurfaceId::new(),
            context: resolve_context(self.contexts.as_ref()),
            stage: SurfaceStage::Entering,
            alignment,
            transition,
            animation,
        })
    }
}

/// Overlay layer living inside the host view tree.
struct InPlaceSurface {
    id: SurfaceId,
    context: ContextHandle,
    stage: SurfaceStage,
    alignment: ToastAlignment,
    transition: Transition,
    animation: AnimationSpec,
}

impl OverlaySurface for InPlaceSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn stage(&self) -> SurfaceStage {
        self.stage
    }

    fn context(&self) -> ContextHandle {
        self.context
    }

    fn placement(&self) -> ToastAlignment {
        self.alignment
    }

    fn transition(&self) -> Transition {
        self.transition
    }

    fn animation(&self) -> AnimationSpec {
        self.animation
    }

    fn mark_shown(&mut self) {
        if self.stage == SurfaceStage::Entering {
            self.stage = SurfaceStage::Shown;
        }
    }

    fn begin_exit(&mut self, animation: AnimationSpec) {
        if matches!(self.stage, SurfaceStage::Entering | SurfaceStage::Shown) {
            self.animation = animation;
            self.stage = SurfaceStage::Exiting;
        }
    }

    fn dispose(&mut self) {
        self.stage = SurfaceStage::Disposed;
    }
}
