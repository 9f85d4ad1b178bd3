// SPDX-License-Identifier: MPL-2.0
//! Host-window surface strategies.
//!
//! Both strategies here put the toast in a window-equivalent container owned
//! by the toast layer itself, above every host view. The transient variant
//! opens a window per presentation and closes it on disposal; the persistent
//! variant opens one window lazily and keeps it across presentations, only
//! detaching the content when a surface is disposed.
//!
//! Window allocation goes through the [`WindowAllocator`] port so the
//! strategies stay independent of any concrete windowing backend.

use super::{
    resolve_context, ContextHandle, ContextProvider, OverlaySurface, SingleContext, SurfaceId,
    SurfaceStage, SurfaceStrategy,
};
use crate::config::{AnimationSpec, ToastAlignment, Transition};
use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a window-equivalent container opened for toast content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    /// Wraps a backend window id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The backend window id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Backend port that opens and closes toast windows.
pub trait WindowAllocator {
    /// Opens a content-sized window on `context`, positioned per
    /// `alignment`.
    fn open(&mut self, alignment: ToastAlignment, context: ContextHandle) -> WindowHandle;

    /// Closes a previously opened window. Closing twice must be tolerated
    /// by implementations (the strategies never do, but hosts may).
    fn close(&mut self, window: WindowHandle);
}

type SharedAllocator = Rc<RefCell<dyn WindowAllocator>>;

/// Strategy that opens a fresh window per presentation and closes it when
/// the surface is disposed.
pub struct TransientWindowStrategy {
    allocator: SharedAllocator,
    contexts: Box<dyn ContextProvider>,
}

impl TransientWindowStrategy {
    /// Creates the strategy over a window allocator, with a single
    /// always-active host context.
    #[must_use]
    pub fn new(allocator: SharedAllocator) -> Self {
        Self::with_contexts(allocator, Box::new(SingleContext))
    }

    /// Creates the strategy with a custom context provider.
    #[must_use]
    pub fn with_contexts(allocator: SharedAllocator, contexts: Box<dyn ContextProvider>) -> Self {
        Self {
            allocator,
            contexts,
        }
    }
}

impl SurfaceStrategy for TransientWindowStrategy {
    fn create(
        &mut self,
        alignment: ToastAlignment,
        transition: Transition,
        animation: AnimationSpec,
    ) -> Box<dyn OverlaySurface> {
        let context = resolve_context(self.contexts.as_ref());
        let window = self.allocator.borrow_mut().open(alignment, context);
        Box::new(WindowSurface {
            id: SurfaceId::new(),
            context,
            stage: SurfaceStage::Entering,
            alignment,
            transition,
            animation,
            window,
            allocator: Rc::clone(&self.allocator),
            close_on_dispose: true,
        })
    }
}

/// Strategy that keeps one window alive across presentations.
///
/// Each presentation still gets a fresh surface (fresh id, fresh entrance);
/// only the window resource is shared. Disposal detaches the content and
/// leaves the window for the next toast. Dropping the strategy closes the
/// window.
pub struct PersistentWindowStrategy {
    allocator: SharedAllocator,
    contexts: Box<dyn ContextProvider>,
    window: Option<WindowHandle>,
}

impl PersistentWindowStrategy {
    /// Creates the strategy over a window allocator, with a single
    /// always-active host context.
    #[must_use]
    pub fn new(allocator: SharedAllocator) -> Self {
        Self::with_contexts(allocator, Box::new(SingleContext))
    }

    /// Creates the strategy with a custom context provider.
    #[must_use]
    pub fn with_contexts(allocator: SharedAllocator, contexts: Box<dyn ContextProvider>) -> Self {
        Self {
            allocator,
            contexts,
            window: None,
        }
    }

    /// The shared window, if it has been opened.
    #[must_use]
    pub fn window(&self) -> Option<WindowHandle> {
        self.window
    }
}

impl SurfaceStrategy for PersistentWindowStrategy {
    fn create(
        &mut self,
        alignment: ToastAlignment,
        transition: Transition,
        animation: AnimationSpec,
    ) -> Box<dyn OverlaySurface> {
        let context = resolve_context(self.contexts.as_ref());
        let window = match self.window {
            Some(window) => window,
            None => {
                let window = self.allocator.borrow_mut().open(alignment, context);
                self.window = Some(window);
                window
            }
        };
        Box::new(WindowSurface {
            id: SurfaceId::new(),
            context,
            stage: SurfaceStage::Entering,
            alignment,
            transition,
            animation,
            window,
            allocator: Rc::clone(&self.allocator),
            close_on_dispose: false,
        })
    }
}

impl Drop for PersistentWindowStrategy {
    fn drop(&mut self) {
        if let Some(window) = self.window.take() {
            self.allocator.borrow_mut().close(window);
        }
    }
}

/// Surface whose container is a dedicated window.
struct WindowSurface {
    id: SurfaceId,
    context: ContextHandle,
    stage: SurfaceStage,
    alignment: ToastAlignment,
    transition: Transition,
    animation: AnimationSpec,
    window: WindowHandle,
    allocator: SharedAllocator,
    close_on_dispose: bool,
}

impl OverlaySurface for WindowSurface {
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
        if self.stage == SurfaceStage::Disposed {
            return;
        }
        self.stage = SurfaceStage::Disposed;
        if self.close_on_dispose {
            self.allocator.borrow_mut().close(self.window);
        }
    }
}

impl Drop for WindowSurface {
    fn drop(&mut self) {
        // A surface dropped without an explicit dispose still must not leak
        // its window.
        self.dispose();
    }
}
