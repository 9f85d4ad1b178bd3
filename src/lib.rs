// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows one transient, auto-dismissing notification banner
//! above an application's content, driven by a single optional "current
//! item" value.
//!
//! # Components
//!
//! - [`controller`] - The presentation state machine (`Idle → Showing →
//!   Visible → Hiding`) with timer/cancellation discipline
//! - [`timer`] - Cancellable single-shot dismiss timer
//! - [`surface`] - Overlay surface lifecycle and the three resource
//!   strategies (in-place overlay, transient window, persistent window)
//! - [`config`] - Duration, alignment, animation, transition, tap behavior
//! - [`haptics`] - Injected haptic feedback port
//! - [`runtime`] - Iced glue: effects become delayed tasks, messages route
//!   back into the controller
//! - [`widget`] - Ready-made pill toast card
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::{Presenter, ToastConfig};
//! use std::time::Duration;
//!
//! // Attach once with the desired behavior
//! let mut presenter = Presenter::new(
//!     ToastConfig::new().duration(Duration::from_secs(3)),
//! );
//!
//! // Present and clear from the host's update loop
//! let task = presenter.set_item(Some(banner));
//! ```
//!
//! # Design Considerations
//!
//! - Exactly one active toast; a new item always supersedes the previous
//!   one (no queue)
//! - The dismiss window starts at entrance completion, never at `set_item`
//! - Every deferred completion is identity-checked, so events from
//!   superseded surfaces and timers are dropped rather than treated as
//!   errors

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod controller;
pub mod design_tokens;
pub mod haptics;
pub mod item;
pub mod runtime;
pub mod surface;
pub mod timer;
pub mod widget;

pub use config::{AnimationSpec, Curve, Edge, ToastAlignment, ToastConfig, Transition};
pub use controller::{Effect, PresentationController, PresentationState};
pub use haptics::{HapticEngine, HapticFeedback, NullHaptics};
pub use item::{PresentationToken, ToastItem};
pub use runtime::{Message, Presenter};
pub use surface::{OverlaySurface, SurfaceId, SurfaceStrategy};
pub use timer::{DismissTimer, TimerToken};
pub use widget::{Style, ToastView};
