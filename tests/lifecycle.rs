// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle scenarios driven through the public API, exercised
//! against every surface strategy. The surface contract is what the tests
//! target; the strategies only differ in how they manage the window
//! resource behind it.

use iced_toast::surface::{
    ContextClass, ContextHandle, InPlaceStrategy, PersistentWindowStrategy,
    TransientWindowStrategy, WindowAllocator, WindowHandle,
};
use iced_toast::{
    Effect, HapticFeedback, NullHaptics, PresentationController, PresentationState, SurfaceId,
    SurfaceStrategy, TimerToken, ToastConfig, ToastItem,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct Banner {
    id: u32,
    message: String,
}

impl Banner {
    fn new(id: u32, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

impl ToastItem for Banner {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn haptic_feedback(&self) -> Option<HapticFeedback> {
        Some(HapticFeedback::Success)
    }
}

#[derive(Debug, Default)]
struct LedgerAllocator {
    open: Vec<WindowHandle>,
    next_id: u64,
}

impl WindowAllocator for LedgerAllocator {
    fn open(&mut self, _: iced_toast::ToastAlignment, _: ContextHandle) -> WindowHandle {
        let handle = WindowHandle::new(self.next_id);
        self.next_id += 1;
        self.open.push(handle);
        handle
    }

    fn close(&mut self, window: WindowHandle) {
        self.open.retain(|w| *w != window);
    }
}

fn strategies() -> Vec<(&'static str, Box<dyn SurfaceStrategy>)> {
    let allocator: Rc<RefCell<LedgerAllocator>> =
        Rc::new(RefCell::new(LedgerAllocator::default()));
    vec![
        ("in_place", Box::new(InPlaceStrategy::new())),
        (
            "transient_window",
            Box::new(TransientWindowStrategy::new(allocator.clone())),
        ),
        (
            "persistent_window",
            Box::new(PersistentWindowStrategy::new(allocator)),
        ),
    ]
}

fn controller(
    config: ToastConfig<Banner>,
    strategy: Box<dyn SurfaceStrategy>,
) -> PresentationController<Banner> {
    PresentationController::with_parts(config, strategy, Box::new(NullHaptics))
}

fn entrance_surface(effects: &[Effect]) -> SurfaceId {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::AwaitEntrance { surface, .. } => Some(*surface),
            _ => None,
        })
        .expect("expected an AwaitEntrance effect")
}

fn exit_surface(effects: &[Effect]) -> SurfaceId {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::AwaitExit { surface, .. } => Some(*surface),
            _ => None,
        })
        .expect("expected an AwaitExit effect")
}

fn dismiss_timer(effects: &[Effect]) -> TimerToken {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::ScheduleDismiss { timer, .. } => Some(*timer),
            _ => None,
        })
        .expect("expected a ScheduleDismiss effect")
}

#[test]
fn auto_dismiss_runs_the_full_lifecycle_on_every_strategy() {
    for (name, strategy) in strategies() {
        let mut controller = controller(
            ToastConfig::new().duration(Duration::from_secs(2)),
            strategy,
        );

        let effects = controller.set_item(Some(Banner::new(1, "saved")));
        assert_eq!(controller.state(), PresentationState::Showing, "{name}");

        let effects = controller.on_show_complete(entrance_surface(&effects));
        assert_eq!(controller.state(), PresentationState::Visible, "{name}");

        // The dismiss window is measured from entrance completion; the
        // schedule request only appears now.
        let timer = dismiss_timer(&effects);
        let effects = controller.on_timer_fired(timer);
        assert_eq!(controller.state(), PresentationState::Hiding, "{name}");
        assert!(effects.contains(&Effect::ItemCleared), "{name}");
        assert!(controller.item().is_none(), "{name}");

        controller.on_hide_complete(exit_surface(&effects));
        assert_eq!(controller.state(), PresentationState::Idle, "{name}");
        assert!(controller.surface_id().is_none(), "{name}");
    }
}

#[test]
fn rapid_replacement_keeps_one_surface_and_fresh_timers_on_every_strategy() {
    for (name, strategy) in strategies() {
        let mut controller = controller(
            ToastConfig::new().duration(Duration::from_secs(2)),
            strategy,
        );

        let effects = controller.set_item(Some(Banner::new(1, "first")));
        let effects = controller.on_show_complete(entrance_surface(&effects));
        let first_timer = dismiss_timer(&effects);

        // B lands at t=0.5s, before A's timer fires.
        let effects = controller.set_item(Some(Banner::new(2, "second")));
        let second_surface = entrance_surface(&effects);

        // A's timer is dead: zero post-cancel invocations.
        assert!(controller.on_timer_fired(first_timer).is_empty(), "{name}");
        assert_eq!(controller.item().map(|b| b.id), Some(2), "{name}");

        // B's own timer starts from B's show-complete moment.
        let effects = controller.on_show_complete(second_surface);
        let second_timer = dismiss_timer(&effects);
        assert_ne!(first_timer, second_timer, "{name}");

        let effects = controller.on_timer_fired(second_timer);
        assert!(effects.contains(&Effect::ItemCleared), "{name}");
    }
}

#[test]
fn tap_dismiss_interrupts_the_pending_timer_on_every_strategy() {
    for (name, strategy) in strategies() {
        let mut controller = controller(
            ToastConfig::new().duration(Duration::from_secs(30)),
            strategy,
        );

        let effects = controller.set_item(Some(Banner::new(1, "tap me")));
        let effects = controller.on_show_complete(entrance_surface(&effects));
        let timer = dismiss_timer(&effects);

        // Tap long before the 30s window elapses.
        let effects = controller.on_tap();
        assert!(effects.contains(&Effect::ItemCleared), "{name}");
        assert!(controller.item().is_none(), "{name}");
        assert!(controller.on_timer_fired(timer).is_empty(), "{name}");

        controller.on_hide_complete(exit_surface(&effects));
        assert_eq!(controller.state(), PresentationState::Idle, "{name}");
    }
}

#[test]
fn immediate_clear_never_arms_a_timer_on_every_strategy() {
    for (name, strategy) in strategies() {
        let mut controller = controller(
            ToastConfig::new().duration(Duration::from_secs(2)),
            strategy,
        );

        controller.set_item(Some(Banner::new(1, "blink")));
        let effects = controller.set_item(None);

        assert_eq!(controller.state(), PresentationState::Hiding, "{name}");
        assert!(
            effects
                .iter()
                .all(|e| !matches!(e, Effect::ScheduleDismiss { .. })),
            "{name}"
        );

        controller.on_hide_complete(exit_surface(&effects));
        assert_eq!(controller.state(), PresentationState::Idle, "{name}");
    }
}

#[test]
fn transient_windows_never_leak_across_a_burst() {
    let allocator: Rc<RefCell<LedgerAllocator>> =
        Rc::new(RefCell::new(LedgerAllocator::default()));
    let mut controller = controller(
        ToastConfig::new(),
        Box::new(TransientWindowStrategy::new(allocator.clone())),
    );

    for id in 0..20 {
        controller.set_item(Some(Banner::new(id, "burst")));
        assert!(allocator.borrow().open.len() <= 1);
    }

    let effects = controller.set_item(None);
    controller.on_hide_complete(exit_surface(&effects));
    assert!(allocator.borrow().open.is_empty());
}

#[test]
fn persistent_window_survives_presentations_until_strategy_drop() {
    let allocator: Rc<RefCell<LedgerAllocator>> =
        Rc::new(RefCell::new(LedgerAllocator::default()));
    {
        let mut controller = controller(
            ToastConfig::new(),
            Box::new(PersistentWindowStrategy::new(allocator.clone())),
        );

        for id in 0..5 {
            controller.set_item(Some(Banner::new(id, "reuse")));
            assert_eq!(allocator.borrow().open.len(), 1);
        }

        let effects = controller.set_item(None);
        controller.on_hide_complete(exit_surface(&effects));
        // Idle, but the shared window is kept for the next toast.
        assert_eq!(allocator.borrow().open.len(), 1);
    }
    // Dropping the controller drops the strategy and closes the window.
    assert!(allocator.borrow().open.is_empty());
}

#[test]
fn fallback_context_still_presents() {
    struct Backgrounded;

    impl iced_toast::surface::ContextProvider for Backgrounded {
        fn active_foreground(&self) -> Option<ContextHandle> {
            None
        }

        fn inactive_foreground(&self) -> Option<ContextHandle> {
            None
        }

        fn fallback(&self) -> ContextHandle {
            ContextHandle::new(7, ContextClass::FullScreenFallback)
        }
    }

    let mut controller = controller(
        ToastConfig::new(),
        Box::new(InPlaceStrategy::with_contexts(Box::new(Backgrounded))),
    );

    let effects = controller.set_item(Some(Banner::new(1, "degraded")));
    assert_eq!(controller.state(), PresentationState::Showing);
    assert_eq!(
        entrance_surface(&effects),
        controller.surface_id().expect("surface must exist")
    );
}
