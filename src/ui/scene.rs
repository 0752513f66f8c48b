// SPDX-License-Identifier: MPL-2.0
//! Retained iced presenter.
//!
//! `Scene` keeps the visual nodes the lifecycle core hands it, grouped by
//! mounted region, and turns them into one overlay element per frame.
//!
//! Each region is a container carrying its mount id as a widget [`Id`], so
//! host operations can target a corner. Toasts inside a region are keyed by
//! [`ToastId`]: widget state such as hover tracking stays with its toast when
//! the stack shifts.

use crate::config::{CONTAINER_MAX_WIDTH, STACK_GAP};
use crate::error::{Error, Result};
use crate::notifications::{
    HorizontalEdge, Message, Placement, Position, Presenter, SlideDirection, SurfaceId, ToastId,
    ToastState, VerticalEdge, VisualNode,
};
use crate::ui::toast;
use iced::widget::{keyed_column, Container, Id, Stack};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
struct Region {
    id: SurfaceId,
    position: Position,
    placement: Placement,
    element_id: String,
    nodes: Vec<VisualNode>,
}

/// Toast overlay drawn by iced.
#[derive(Debug, Default)]
pub struct Scene {
    next_surface: u64,
    /// Mounted regions in mount order.
    regions: Vec<Region>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the nodes stacked at `position`, oldest first.
    #[must_use]
    pub fn nodes(&self, position: Position) -> &[VisualNode] {
        self.regions
            .iter()
            .find(|region| region.position == position)
            .map_or(&[], |region| region.nodes.as_slice())
    }

    /// Returns the widget id of the region mounted at `position`.
    #[must_use]
    pub fn element_id(&self, position: Position) -> Option<&str> {
        self.regions
            .iter()
            .find(|region| region.position == position)
            .map(|region| region.element_id.as_str())
    }

    #[must_use]
    pub fn node(&self, id: ToastId) -> Option<&VisualNode> {
        self.regions
            .iter()
            .flat_map(|region| region.nodes.iter())
            .find(|node| node.id == id)
    }

    /// Returns whether no toast is on screen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.iter().all(|region| region.nodes.is_empty())
    }

    /// Renders every region as a layer anchored to its corner.
    ///
    /// The overlay owns its data, so hosts can build it from inside a
    /// registry borrow.
    pub fn view(&self) -> Element<'static, Message> {
        let layers = self
            .regions
            .iter()
            .filter(|region| !region.nodes.is_empty())
            .map(region_view);

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn node_mut(&mut self, id: ToastId) -> Option<&mut VisualNode> {
        self.regions
            .iter_mut()
            .flat_map(|region| region.nodes.iter_mut())
            .find(|node| node.id == id)
    }
}

fn region_view(region: &Region) -> Element<'static, Message> {
    let placement = region.placement;
    let horizontal = match placement.horizontal {
        HorizontalEdge::Left => alignment::Horizontal::Left,
        HorizontalEdge::Right => alignment::Horizontal::Right,
    };
    let vertical = match placement.vertical {
        VerticalEdge::Top => alignment::Vertical::Top,
        VerticalEdge::Bottom => alignment::Vertical::Bottom,
    };

    let column = keyed_column(region.nodes.iter().map(|node| (node.id, toast::view(node))))
        .spacing(STACK_GAP)
        .width(Length::Fill)
        .max_width(CONTAINER_MAX_WIDTH);

    Container::new(column)
        .id(Id::from(region.element_id.clone()))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(placement.offset)
        .align_x(horizontal)
        .align_y(vertical)
        .into()
}

impl Presenter for Scene {
    fn mount(
        &mut self,
        position: Position,
        placement: Placement,
        element_id: &str,
    ) -> Result<SurfaceId> {
        self.next_surface += 1;
        let id = SurfaceId::new(self.next_surface);
        self.regions.push(Region {
            id,
            position,
            placement,
            element_id: element_id.to_string(),
            nodes: Vec::new(),
        });
        Ok(id)
    }

    fn append_child(&mut self, surface: SurfaceId, node: VisualNode) -> Result<()> {
        let region = self
            .regions
            .iter_mut()
            .find(|region| region.id == surface)
            .ok_or_else(|| Error::Presentation(format!("unknown surface {}", surface.raw())))?;
        region.nodes.push(node);
        Ok(())
    }

    fn remove_child(&mut self, surface: SurfaceId, id: ToastId) {
        if let Some(region) = self.regions.iter_mut().find(|region| region.id == surface) {
            region.nodes.retain(|node| node.id != id);
        }
    }

    fn set_progress(&mut self, id: ToastId, percent: f32) {
        if let Some(node) = self.node_mut(id) {
            node.progress_percent = percent.clamp(0.0, 100.0);
        }
    }

    fn set_state(&mut self, id: ToastId, state: ToastState, direction: SlideDirection) {
        if let Some(node) = self.node_mut(id) {
            node.state = state;
            node.direction = direction;
            tracing::trace!(toast = ?id, classes = ?node.classes(), "toast restyled");
        }
    }
}
