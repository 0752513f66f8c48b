// SPDX-License-Identifier: MPL-2.0
//! Toast notification core.
//!
//! Toasts are transient messages stacked per screen corner. Each one counts
//! down a fixed display time, pauses while hovered, and slides out when the
//! time runs out or its close control is pressed.
//!
//! # Components
//!
//! - `timer` - `TimingController`: pause-aware countdown with progress frames
//! - `toast` - `Toast` entity and its state machine
//! - `registry` - `ContainerRegistry`: one shared stacking region per corner
//! - `manager` - `Manager`: mount, hover, dismiss, unmount
//! - `notifier` - `Notifier`: public facade
//! - `presenter` - `Presenter` trait between the core and the UI
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::notifications::{Message, Notifier};
//!
//! let mut notifier = Notifier::default();
//! notifier.success("Image saved successfully")?;
//!
//! // In update():
//! notifier.update(&message);
//!
//! // In subscription(): pump every frame while toasts are active.
//! iced::time::every(Duration::from_millis(16)).map(Message::Tick)
//! ```
//!
//! # Scheduling
//!
//! Nothing here spawns timers. Scheduled work sits in a per-notifier queue and
//! runs when the host pumps it (`update(&Message::Tick(now))`, `tick`, or the
//! async [`driver`]). All of it runs on the UI thread.

mod category;
mod clock;
pub mod driver;
mod manager;
mod notifier;
mod presenter;
mod registry;
mod scheduler;
mod timer;
mod toast;

pub use category::Category;
pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{Manager, Message, Task, ToastHandle};
pub use notifier::Notifier;
pub use presenter::{Presenter, RenderOptions, SurfaceId, VisualNode};
pub use registry::{
    ContainerRegistry, ContainerSurface, HorizontalEdge, Placement, Position, SharedRegistry,
    VerticalEdge,
};
pub use scheduler::{Scheduler, TaskHandle};
pub use timer::{TimingController, TimingState};
pub use toast::{SlideDirection, Toast, ToastId, ToastState};
