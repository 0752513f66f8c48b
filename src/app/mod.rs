// SPDX-License-Identifier: MPL-2.0
//! Demo application showing toasts from several notifiers.
//!
//! Three notifiers draw into one scene: two on the configured corner, whose
//! toasts interleave in a single stack, and one on the opposite corner. Toast
//! messages are fanned out to all of them; each ignores toasts it does not
//! own.

pub mod message;
pub mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::notifications::{
    self, Category, ContainerRegistry, Notifier, Position, SharedRegistry, SystemClock,
};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::Scene;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{Element, Length, Task, Theme};
use std::path::PathBuf;
use std::rc::Rc;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    registry: SharedRegistry<Scene>,
    primary: Notifier<Scene>,
    shared: Notifier<Scene>,
    opposite: Notifier<Scene>,
    config_warning: Option<String>,
    shown: u32,
}

/// Entry point used by `main.rs` to launch the demo.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

/// Returns the corner diagonally across from `position`.
#[must_use]
pub fn opposite(position: Position) -> Position {
    match position {
        Position::TopRight => Position::BottomLeft,
        Position::TopLeft => Position::BottomRight,
        Position::BottomRight => Position::TopLeft,
        Position::BottomLeft => Position::TopRight,
    }
}

fn sample_message(category: Category) -> &'static str {
    match category {
        Category::Success => "Settings saved successfully",
        Category::Error => "Could not reach the server",
        Category::Warning => "Disk space is running low",
        Category::Info => "A new version is available",
        Category::Neutral => "Something happened",
    }
}

impl App {
    /// Loads the configuration, applies CLI overrides and creates the notifiers.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(position) = flags.position.as_deref() {
            config.position = Position::from(position);
        }
        if let Some(duration_ms) = flags.duration_ms {
            config.duration_ms = duration_ms;
        }

        let registry = ContainerRegistry::shared(Scene::new());
        let notifier = |config: Config| {
            Notifier::with_registry(config, Rc::clone(&registry), Rc::new(SystemClock))
        };
        let primary = notifier(config.clone());
        let shared = notifier(config.clone().with_show_icon(false).with_dismiss_on_click(true));
        let across = notifier(config.clone().with_position(opposite(config.position)));

        tracing::info!(
            position = %config.position,
            duration_ms = config.duration_ms,
            "toast demo started"
        );

        let app = App {
            registry,
            primary,
            shared,
            opposite: across,
            config_warning,
            shown: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toast")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn notifiers_mut(&mut self) -> [&mut Notifier<Scene>; 3] {
        [&mut self.primary, &mut self.shared, &mut self.opposite]
    }

    fn active_count(&self) -> usize {
        self.primary.active_count() + self.shared.active_count() + self.opposite.active_count()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let result = match message {
            Message::Show(category) => {
                self.primary.show(sample_message(category), category)
            }
            Message::ShowShared => {
                self.shown += 1;
                let text = format!("Shared corner toast #{}", self.shown);
                self.shared.show(text, "custom")
            }
            Message::ShowOpposite => self.opposite.info("Shown on the opposite corner"),
            Message::Toast(message) => {
                for notifier in self.notifiers_mut() {
                    notifier.update(&message);
                }
                return Task::none();
            }
            Message::Tick(now) => {
                let tick = notifications::Message::Tick(now);
                for notifier in self.notifiers_mut() {
                    notifier.update(&tick);
                }
                return Task::none();
            }
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to show toast");
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let categories = Category::STYLED.into_iter().fold(
            Row::new().spacing(spacing::XS),
            |row, category| {
                row.push(button(text(category.name())).on_press(Message::Show(category)))
            },
        );

        let others = Row::new()
            .spacing(spacing::XS)
            .push(button(text("Same corner, second notifier")).on_press(Message::ShowShared))
            .push(button(text("Opposite corner")).on_press(Message::ShowOpposite));

        let mut controls = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::LG)
            .push(text("Toast notifications").size(typography::BODY * 1.5))
            .push(categories)
            .push(others)
            .push(text(format!("{} toasts on screen", self.active_count())).size(typography::BODY));

        if let Some(warning) = &self.config_warning {
            controls = controls.push(text(format!("Config ignored: {warning}")).size(typography::BODY));
        }

        let overlay = self.registry.borrow().presenter().view().map(Message::Toast);

        Stack::new()
            .push(
                Container::new(controls)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(overlay)
            .into()
    }

    fn subscription(&self) -> iced::Subscription<Message> {
        subscription::create_tick_subscription(
            self.primary.has_active() || self.shared.has_active() || self.opposite.has_active(),
        )
    }
}
