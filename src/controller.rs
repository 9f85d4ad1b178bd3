// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle state machine.
//!
//! The controller owns the current item slot, one dismiss timer and at most
//! one overlay surface, and reacts to four kinds of events: item changes,
//! taps, animation completions and timer fires. All transitions happen
//! synchronously on the caller's (UI) context; deferred work is described by
//! the returned [`Effect`] values, which the runtime adapter turns into
//! delayed tasks. That split keeps the machine deterministic and fully
//! testable without a runtime.
//!
//! Every deferred completion carries the identity it was scheduled for
//! (surface id or timer token). A completion that arrives after its surface
//! or timer has been superseded fails the identity check and is dropped, so
//! stale events can never mutate the state of a newer item.

use crate::config::ToastConfig;
use crate::haptics::{HapticEngine, NullHaptics};
use crate::item::{PresentationToken, ToastItem};
use crate::surface::{InPlaceStrategy, OverlaySurface, SurfaceId, SurfaceStrategy};
use crate::timer::{DismissTimer, TimerToken};
use std::fmt;
use std::time::Duration;

/// Where the controller currently is in a toast's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationState {
    /// No surface exists, no timer pending.
    #[default]
    Idle,
    /// Surface exists, entrance animation in flight.
    Showing,
    /// Surface fully shown; timer pending if a duration is configured.
    Visible,
    /// Exit animation in flight; any timer already cancelled.
    Hiding,
}

/// Deferred work requested by a transition.
///
/// The runtime adapter schedules these; the controller never blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`PresentationController::on_show_complete`] for `surface`
    /// once the entrance animation has run.
    AwaitEntrance { surface: SurfaceId, after: Duration },
    /// Deliver [`PresentationController::on_hide_complete`] for `surface`
    /// once the exit animation has run.
    AwaitExit { surface: SurfaceId, after: Duration },
    /// Deliver [`PresentationController::on_timer_fired`] for `timer` after
    /// the auto-dismiss delay.
    ScheduleDismiss { timer: TimerToken, after: Duration },
    /// The controller cleared the item on its own (timer fire or tap
    /// dismiss); the host's binding should become `None`.
    ItemCleared,
}

/// One presentation of an item: the item plus the token that makes this
/// appearance distinct from any earlier appearance of the same identity.
struct Presented<I> {
    item: I,
    token: PresentationToken,
    haptic_fired: bool,
}

/// The toast presentation state machine.
pub struct PresentationController<I: ToastItem> {
    config: ToastConfig<I>,
    strategy: Box<dyn SurfaceStrategy>,
    haptics: Box<dyn HapticEngine>,
    state: PresentationState,
    current: Option<Presented<I>>,
    surface: Option<Box<dyn OverlaySurface>>,
    timer: DismissTimer,
}

impl<I: ToastItem> fmt::Debug for PresentationController<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("state", &self.state)
            .field("has_item", &self.current.is_some())
            .field("surface", &self.surface.as_ref().map(|s| s.id()))
            .field("timer_armed", &self.timer.is_armed())
            .finish()
    }
}

impl<I: ToastItem> PresentationController<I> {
    /// Creates a controller with the in-place overlay strategy and no
    /// haptic device.
    #[must_use]
    pub fn new(config: ToastConfig<I>) -> Self {
        Self::with_parts(config, Box::new(InPlaceStrategy::new()), Box::new(NullHaptics))
    }

    /// Creates a controller with an explicit surface strategy and haptic
    /// engine.
    #[must_use]
    pub fn with_parts(
        config: ToastConfig<I>,
        strategy: Box<dyn SurfaceStrategy>,
        haptics: Box<dyn HapticEngine>,
    ) -> Self {
        Self {
            config,
            strategy,
            haptics,
            state: PresentationState::Idle,
            current: None,
            surface: None,
            timer: DismissTimer::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// The tracked item, while one is presented or entering.
    #[must_use]
    pub fn item(&self) -> Option<&I> {
        self.current.as_ref().map(|p| &p.item)
    }

    /// The token of the current presentation, while one exists.
    #[must_use]
    pub fn presentation_token(&self) -> Option<PresentationToken> {
        self.current.as_ref().map(|p| p.token)
    }

    /// Id of the live surface, if any.
    #[must_use]
    pub fn surface_id(&self) -> Option<SurfaceId> {
        self.surface.as_ref().map(|s| s.id())
    }

    /// The presentation configuration.
    #[must_use]
    pub fn config(&self) -> &ToastConfig<I> {
        &self.config
    }

    /// Reacts to the host's bound item changing.
    ///
    /// A new identity supersedes whatever is on screen: the pending timer is
    /// cancelled, the old surface is disposed immediately (its in-flight
    /// animation events become stale no-ops) and a fresh surface starts its
    /// entrance. Passing the currently tracked identity again is a no-op.
    /// `None` begins the exit of the current toast.
    pub fn set_item(&mut self, item: Option<I>) -> Vec<Effect> {
        match item {
            Some(new) => self.present(new),
            None => {
                self.timer.cancel();
                self.current = None;
                match self.state {
                    PresentationState::Showing | PresentationState::Visible => self.begin_hide(),
                    PresentationState::Hiding | PresentationState::Idle => Vec::new(),
                }
            }
        }
    }

    /// Reacts to a tap on the visible toast.
    ///
    /// A configured tap handler wins and suppresses dismissal; otherwise
    /// `hide_on_tap` (default) dismisses immediately and reports the clear
    /// back to the host.
    pub fn on_tap(&mut self) -> Vec<Effect> {
        if !matches!(
            self.state,
            PresentationState::Showing | PresentationState::Visible
        ) {
            return Vec::new();
        }
        let Some(presented) = self.current.as_ref() else {
            return Vec::new();
        };

        if let Some(handler) = self.config.tap_handler() {
            handler(&presented.item);
            return Vec::new();
        }
        if !self.config.hides_on_tap() {
            return Vec::new();
        }

        self.timer.cancel();
        self.current = None;
        let mut effects = self.begin_hide();
        effects.push(Effect::ItemCleared);
        effects
    }

    /// Entrance animation of `surface` finished.
    ///
    /// Identity-checked: completions from superseded surfaces are dropped.
    /// On the live surface this is the `Showing → Visible` transition:
    /// haptics fire once for this presentation and the dismiss timer is
    /// armed if a duration is configured.
    pub fn on_show_complete(&mut self, surface: SurfaceId) -> Vec<Effect> {
        if self.state != PresentationState::Showing || self.surface_id() != Some(surface) {
            return Vec::new();
        }

        if let Some(live) = self.surface.as_mut() {
            live.mark_shown();
        }
        self.state = PresentationState::Visible;

        if let Some(presented) = self.current.as_mut() {
            if !presented.haptic_fired {
                presented.haptic_fired = true;
                if let Some(feedback) = presented.item.haptic_feedback() {
                    self.haptics.trigger(feedback);
                }
            }
        }

        match self.config.dismiss_after() {
            Some(after) => {
                let timer = self.timer.arm(after);
                vec![Effect::ScheduleDismiss { timer, after }]
            }
            None => Vec::new(),
        }
    }

    /// Exit animation of `surface` finished: dispose it and go idle.
    ///
    /// Identity-checked like every completion.
    pub fn on_hide_complete(&mut self, surface: SurfaceId) -> Vec<Effect> {
        if self.state != PresentationState::Hiding || self.surface_id() != Some(surface) {
            return Vec::new();
        }
        if let Some(mut live) = self.surface.take() {
            live.dispose();
        }
        self.state = PresentationState::Idle;
        Vec::new()
    }

    /// The dismiss timer identified by `timer` elapsed.
    ///
    /// The token must still match the armed slot; a fire that raced its own
    /// cancellation is a no-op. A valid fire begins the hide and reports the
    /// clear back to the host.
    pub fn on_timer_fired(&mut self, timer: TimerToken) -> Vec<Effect> {
        if !self.timer.fire(timer) {
            return Vec::new();
        }
        // The timer is only ever armed while Visible; anything else means
        // the arming discipline was violated upstream, so do nothing.
        if self.state != PresentationState::Visible {
            return Vec::new();
        }

        self.current = None;
        let mut effects = self.begin_hide();
        effects.push(Effect::ItemCleared);
        effects
    }

    fn present(&mut self, new: I) -> Vec<Effect> {
        if let Some(presented) = self.current.as_ref() {
            if presented.item.id() == new.id() {
                return Vec::new();
            }
        }

        self.timer.cancel();
        // Never wait for a hide animation; the replacement starts now and
        // the old surface's pending completions go stale.
        if let Some(mut old) = self.surface.take() {
            old.dispose();
        }

        let animation = self.config.animation_spec();
        let surface = self.strategy.create(
            self.config.placement(),
            self.config.transition_spec(),
            animation,
        );
        let id = surface.id();
        self.surface = Some(surface);
        self.current = Some(Presented {
            item: new,
            token: PresentationToken::new(),
            haptic_fired: false,
        });
        self.state = PresentationState::Showing;

        vec![Effect::AwaitEntrance {
            surface: id,
            after: animation.enter,
        }]
    }

    fn begin_hide(&mut self) -> Vec<Effect> {
        let animation = self.config.animation_spec();
        match self.surface.as_mut() {
            Some(surface) => {
                surface.begin_exit(animation);
                self.state = PresentationState::Hiding;
                vec![Effect::AwaitExit {
                    surface: surface.id(),
                    after: animation.exit,
                }]
            }
            None => {
                self.state = PresentationState::Idle;
                Vec::new()
            }
        }
    }
}
