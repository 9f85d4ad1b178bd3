// SPDX-License-Identifier: MPL-2.0
//! Iced runtime adapter.
//!
//! [`Presenter`] wraps the controller for hosts built on iced: controller
//! effects become delayed [`Task`]s (entrance/exit completions and the
//! dismiss timer), runtime messages are routed back into the controller, and
//! [`Presenter::view`] stacks the toast content above the host's own view
//! per the configured alignment.
//!
//! Wire-up in a host application:
//!
//! ```ignore
//! // In the host's update:
//! Message::Toast(message) => {
//!     if matches!(message, iced_toast::runtime::Message::Cleared) {
//!         self.current_banner = None;
//!     }
//!     self.presenter.update(message).map(Message::Toast)
//! }
//! // In the host's view:
//! stack![content, self.presenter.view(|item| item.card.view()).map(Message::Toast)]
//! ```

use crate::config::ToastConfig;
use crate::controller::{Effect, PresentationController};
use crate::design_tokens::spacing;
use crate::haptics::HapticEngine;
use crate::item::ToastItem;
use crate::surface::{SurfaceId, SurfaceStrategy};
use crate::timer::TimerToken;
use iced::widget::{mouse_area, text, Container};
use iced::{Element, Length, Task};
use std::time::Duration;

/// Messages delivered back to the presenter by the iced runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The entrance animation of `SurfaceId` has run its course.
    EntranceFinished(SurfaceId),
    /// The exit animation of `SurfaceId` has run its course.
    ExitFinished(SurfaceId),
    /// The auto-dismiss delay identified by `TimerToken` elapsed.
    DismissElapsed(TimerToken),
    /// The user tapped the toast.
    Tapped,
    /// The controller cleared the item on its own; the host should set its
    /// bound item to `None` when it sees this.
    Cleared,
}

/// Controller plus iced glue.
pub struct Presenter<I: ToastItem> {
    controller: PresentationController<I>,
}

impl<I: ToastItem> Presenter<I> {
    /// Creates a presenter with the default in-place strategy and no
    /// haptics.
    #[must_use]
    pub fn new(config: ToastConfig<I>) -> Self {
        Self {
            controller: PresentationController::new(config),
        }
    }

    /// Creates a presenter around an explicit strategy and haptic engine.
    #[must_use]
    pub fn with_parts(
        config: ToastConfig<I>,
        strategy: Box<dyn SurfaceStrategy>,
        haptics: Box<dyn HapticEngine>,
    ) -> Self {
        Self {
            controller: PresentationController::with_parts(config, strategy, haptics),
        }
    }

    /// The wrapped controller, for state inspection.
    #[must_use]
    pub fn controller(&self) -> &PresentationController<I> {
        &self.controller
    }

    /// The currently presented item, if any.
    #[must_use]
    pub fn item(&self) -> Option<&I> {
        self.controller.item()
    }

    /// Forwards a host item change and schedules the resulting work.
    pub fn set_item(&mut self, item: Option<I>) -> Task<Message> {
        let effects = self.controller.set_item(item);
        self.run(effects)
    }

    /// Handles a runtime message and schedules any follow-up work.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = match message {
            Message::EntranceFinished(surface) => self.controller.on_show_complete(surface),
            Message::ExitFinished(surface) => self.controller.on_hide_complete(surface),
            Message::DismissElapsed(timer) => self.controller.on_timer_fired(timer),
            Message::Tapped => self.controller.on_tap(),
            // Host-facing notification only; nothing to route.
            Message::Cleared => Vec::new(),
        };
        self.run(effects)
    }

    /// Renders the toast overlay layer.
    ///
    /// Returns an element filling the host area with the current toast's
    /// content aligned per configuration, or an empty zero-size element
    /// when nothing is presented. Stack it above the host content.
    pub fn view<'a, F>(&'a self, content: F) -> Element<'a, Message>
    where
        F: Fn(&'a I) -> Element<'a, Message>,
    {
        match self.controller.item() {
            Some(item) => {
                let placement = self.controller.config().placement();
                let tappable = mouse_area(content(item)).on_press(Message::Tapped);
                Container::new(tappable)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(placement.horizontal())
                    .align_y(placement.vertical())
                    .padding(spacing::MD)
                    .into()
            }
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }

    fn run(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks = effects.into_iter().map(|effect| match effect {
            Effect::AwaitEntrance { surface, after } => {
                delayed(after, Message::EntranceFinished(surface))
            }
            Effect::AwaitExit { surface, after } => delayed(after, Message::ExitFinished(surface)),
            Effect::ScheduleDismiss { timer, after } => {
                delayed(after, Message::DismissElapsed(timer))
            }
            Effect::ItemCleared => Task::done(Message::Cleared),
        });
        Task::batch(tasks)
    }
}

fn delayed(after: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(after), move |()| message)
}
