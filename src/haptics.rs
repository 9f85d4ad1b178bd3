// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback port.
//!
//! Haptics are a side-effecting capability injected into the controller, not
//! ambient global state. The controller triggers feedback exactly once per
//! presentation, at the moment the toast becomes fully visible, and never
//! blocks the animation pipeline on it.

/// Kind of haptic feedback a toast requests on first full appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HapticFeedback {
    /// Light selection-changed feedback.
    #[default]
    Default,
    /// Notification feedback for a successful operation.
    Success,
    /// Notification feedback for a failed operation.
    Error,
    /// Notification feedback for a warning.
    Warning,
}

/// Device capability that actually produces the feedback.
///
/// Implementations wrap a platform API; the controller only ever calls
/// [`HapticEngine::trigger`], which must return promptly.
pub trait HapticEngine {
    /// Produces the requested feedback. Fire-and-forget.
    fn trigger(&mut self, feedback: HapticFeedback);
}

/// Engine that ignores every request, for hosts without a haptic device.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHaptics;

impl HapticEngine for NullHaptics {
    fn trigger(&mut self, _feedback: HapticFeedback) {}
}
