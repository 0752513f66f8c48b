// SPDX-License-Identifier: MPL-2.0
//! Drives `Scene::view()` through a headless iced user interface.

use iced::widget::Id;
use iced::{Font, Pixels, Point, Rectangle, Size};
use iced_runtime::core::renderer::Headless;
use iced_runtime::core::widget::Operation;
use iced_runtime::core::{clipboard, mouse, Event};
use iced_runtime::user_interface::{Cache, UserInterface};
use iced_toast::config::{Config, DEFAULT_CONTAINER_CLASS};
use iced_toast::notifications::{
    Category, Message, Position, Presenter, RenderOptions, SlideDirection, SurfaceId, Toast,
    ToastId, ToastState, VisualNode,
};
use iced_toast::ui::Scene;
use std::time::Duration;

const WINDOW: Size = Size::new(800.0, 600.0);

async fn renderer() -> iced::Renderer {
    <iced::Renderer as Headless>::new(Font::DEFAULT, Pixels(16.0), Some("tiny-skia"))
        .await
        .expect("tiny-skia renderer")
}

/// Appends a shown toast to `surface` and returns its id.
fn push(scene: &mut Scene, surface: SurfaceId, message: &str) -> ToastId {
    let toast = Toast::new(
        Category::Info,
        message,
        Position::TopRight,
        Duration::from_secs(3),
    );
    let node = VisualNode::from_toast(&toast, &RenderOptions::from(&Config::default()));
    let id = node.id;
    scene.append_child(surface, node).expect("append");
    scene.set_state(id, ToastState::Visible, SlideDirection::Right);
    id
}

/// Rebuilds the overlay and moves the pointer to `at`.
fn move_pointer(
    scene: &Scene,
    renderer: &mut iced::Renderer,
    cache: Cache,
    at: Point,
) -> (Vec<Message>, Cache) {
    let mut ui = UserInterface::build(scene.view(), WINDOW, cache, renderer);
    let mut messages = Vec::new();
    let _ = ui.update(
        &[Event::Mouse(mouse::Event::CursorMoved { position: at })],
        mouse::Cursor::Available(at),
        renderer,
        &mut clipboard::Null,
        &mut messages,
    );
    (messages, ui.into_cache())
}

#[tokio::test]
async fn hover_state_follows_its_toast_when_the_stack_shifts() {
    let mut renderer = renderer().await;
    let mut scene = Scene::new();
    let surface = scene
        .mount(
            Position::TopRight,
            Position::TopRight.placement(),
            "infinity-toast-container-top-right",
        )
        .expect("mount");
    let above = push(&mut scene, surface, "above");
    let hovered = push(&mut scene, surface, "hovered");
    let below = push(&mut scene, surface, "below");

    // Sweep down the right-hand stack until the middle toast reports hover.
    let mut cache = Cache::new();
    let mut pointer = None;
    for y in (0..WINDOW.height as u32).step_by(2) {
        let at = Point::new(600.0, y as f32);
        let (messages, next) = move_pointer(&scene, &mut renderer, cache, at);
        cache = next;
        if messages.contains(&Message::HoverEntered(hovered)) {
            pointer = Some(at);
            break;
        }
    }
    let pointer = pointer.expect("middle toast never hovered");

    // The toast above finishes its exit; the stack moves up under the pointer.
    scene.remove_child(surface, above);
    let (mut seen, cache) = move_pointer(&scene, &mut renderer, cache, pointer);
    let (away, _) = move_pointer(&scene, &mut renderer, cache, Point::new(10.0, 590.0));
    seen.extend(away);

    assert!(
        seen.contains(&Message::HoverLeft(hovered)),
        "hovered toast never resumed: {seen:?}"
    );
    let entered_below = seen.contains(&Message::HoverEntered(below));
    assert!(
        entered_below || !seen.contains(&Message::HoverLeft(below)),
        "toast below left without entering: {seen:?}"
    );
}

#[derive(Default)]
struct ContainerIds(Vec<Id>);

impl Operation for ContainerIds {
    fn traverse(&mut self, operate: &mut dyn FnMut(&mut dyn Operation)) {
        operate(self);
    }

    fn container(&mut self, id: Option<&Id>, _bounds: Rectangle) {
        if let Some(id) = id {
            self.0.push(id.clone());
        }
    }
}

#[tokio::test]
async fn regions_carry_their_container_ids() {
    let mut renderer = renderer().await;
    let mut scene = Scene::new();
    for position in [Position::TopLeft, Position::BottomRight] {
        let element_id = format!("{DEFAULT_CONTAINER_CLASS}-{position}");
        let surface = scene
            .mount(position, position.placement(), &element_id)
            .expect("mount");
        push(&mut scene, surface, position.name());
    }

    let mut ui = UserInterface::build(scene.view(), WINDOW, Cache::new(), &mut renderer);
    let mut ids = ContainerIds::default();
    ui.operate(&renderer, &mut ids);

    for expected in [
        "infinity-toast-container-top-left",
        "infinity-toast-container-bottom-right",
    ] {
        assert!(
            ids.0.contains(&Id::from(expected)),
            "{expected} missing from {:?}",
            ids.0
        );
    }
}
