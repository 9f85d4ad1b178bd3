// SPDX-License-Identifier: MPL-2.0
//! Presentation configuration.
//!
//! Everything the host decides once, at attachment time: how long a toast
//! stays, where it sits on screen, how it animates in and out, and what a
//! tap does. Built with the same builder style as the rest of the crate.

use iced::alignment;
use std::fmt;
use std::time::Duration;

/// Screen placement of the toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastAlignment {
    Top,
    TopLeft,
    TopRight,
    #[default]
    Bottom,
    BottomLeft,
    BottomRight,
    Center,
}

impl ToastAlignment {
    /// Horizontal component for container alignment.
    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Self::TopLeft | Self::BottomLeft => alignment::Horizontal::Left,
            Self::TopRight | Self::BottomRight => alignment::Horizontal::Right,
            Self::Top | Self::Bottom | Self::Center => alignment::Horizontal::Center,
        }
    }

    /// Vertical component for container alignment.
    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => alignment::Vertical::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => alignment::Vertical::Bottom,
            Self::Center => alignment::Vertical::Center,
        }
    }
}

/// Timing curve of an entrance or exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    #[default]
    Default,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
}

/// Entrance/exit animation timing for the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Wall-clock length of the entrance animation.
    pub enter: Duration,
    /// Wall-clock length of the exit animation.
    pub exit: Duration,
    /// Curve applied to both directions.
    pub curve: Curve,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(250),
            exit: Duration::from_millis(200),
            curve: Curve::Default,
        }
    }
}

/// Edge a move transition originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Visual transition style for the toast content's appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Scale up from the alignment point.
    #[default]
    Scale,
    /// Slide in from an edge.
    Move(Edge),
    /// Cross-fade.
    Fade,
    /// Appear without a content transition (the surface still animates).
    Identity,
}

/// Complete presentation configuration for one toast attachment.
///
/// `I` is the host's item type. Defaults mirror the common case: no
/// auto-dismiss, bottom placement, scale transition, hide on tap.
pub struct ToastConfig<I> {
    duration: Option<Duration>,
    alignment: ToastAlignment,
    animation: AnimationSpec,
    transition: Transition,
    hide_on_tap: bool,
    tap_handler: Option<Box<dyn Fn(&I)>>,
}

impl<I> Default for ToastConfig<I> {
    fn default() -> Self {
        Self {
            duration: None,
            alignment: ToastAlignment::default(),
            animation: AnimationSpec::default(),
            transition: Transition::default(),
            hide_on_tap: true,
            tap_handler: None,
        }
    }
}

impl<I> fmt::Debug for ToastConfig<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastConfig")
            .field("duration", &self.duration)
            .field("alignment", &self.alignment)
            .field("animation", &self.animation)
            .field("transition", &self.transition)
            .field("hide_on_tap", &self.hide_on_tap)
            .field("has_tap_handler", &self.tap_handler.is_some())
            .finish()
    }
}

impl<I> ToastConfig<I> {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auto-dismiss delay, measured from entrance completion.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Disables auto-dismiss; the toast stays until cleared or tapped.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Sets the screen placement of the surface.
    #[must_use]
    pub fn alignment(mut self, alignment: ToastAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets entrance/exit animation timing.
    #[must_use]
    pub fn animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Sets the content appearance transition.
    #[must_use]
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Sets whether a tap with no custom handler dismisses the toast.
    #[must_use]
    pub fn hide_on_tap(mut self, hide_on_tap: bool) -> Self {
        self.hide_on_tap = hide_on_tap;
        self
    }

    /// Installs a custom tap handler. When set, tapping invokes the handler
    /// with the current item instead of dismissing.
    #[must_use]
    pub fn on_tap(mut self, handler: impl Fn(&I) + 'static) -> Self {
        self.tap_handler = Some(Box::new(handler));
        self
    }

    pub(crate) fn dismiss_after(&self) -> Option<Duration> {
        self.duration
    }

    pub(crate) fn placement(&self) -> ToastAlignment {
        self.alignment
    }

    pub(crate) fn animation_spec(&self) -> AnimationSpec {
        self.animation
    }

    pub(crate) fn transition_spec(&self) -> Transition {
        self.transition
    }

    pub(crate) fn hides_on_tap(&self) -> bool {
        self.hide_on_tap
    }

    pub(crate) fn tap_handler(&self) -> Option<&dyn Fn(&I)> {
        self.tap_handler.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behavior() {
        let config: ToastConfig<u32> = ToastConfig::new();
        assert_eq!(config.dismiss_after(), None);
        assert_eq!(config.placement(), ToastAlignment::Bottom);
        assert_eq!(config.transition_spec(), Transition::Scale);
        assert!(config.hides_on_tap());
        assert!(config.tap_handler().is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let config: ToastConfig<u32> = ToastConfig::new()
            .duration(Duration::from_secs(2))
            .alignment(ToastAlignment::TopRight)
            .animation(AnimationSpec {
                enter: Duration::from_millis(100),
                exit: Duration::from_millis(80),
                curve: Curve::Spring,
            })
            .transition(Transition::Move(Edge::Top))
            .hide_on_tap(false)
            .on_tap(|_| {});

        assert_eq!(config.dismiss_after(), Some(Duration::from_secs(2)));
        assert_eq!(config.placement(), ToastAlignment::TopRight);
        assert_eq!(config.animation_spec().curve, Curve::Spring);
        assert_eq!(config.transition_spec(), Transition::Move(Edge::Top));
        assert!(!config.hides_on_tap());
        assert!(config.tap_handler().is_some());
    }

    #[test]
    fn sticky_clears_a_previous_duration() {
        let config: ToastConfig<u32> =
            ToastConfig::new().duration(Duration::from_secs(3)).sticky();
        assert_eq!(config.dismiss_after(), None);
    }

    #[test]
    fn corner_alignments_resolve_both_axes() {
        assert_eq!(
            ToastAlignment::TopLeft.horizontal(),
            alignment::Horizontal::Left
        );
        assert_eq!(ToastAlignment::TopLeft.vertical(), alignment::Vertical::Top);
        assert_eq!(
            ToastAlignment::BottomRight.horizontal(),
            alignment::Horizontal::Right
        );
        assert_eq!(
            ToastAlignment::BottomRight.vertical(),
            alignment::Vertical::Bottom
        );
        assert_eq!(
            ToastAlignment::Center.horizontal(),
            alignment::Horizontal::Center
        );
    }
}
