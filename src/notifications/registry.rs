// SPDX-License-Identifier: MPL-2.0
//! Shared stacking regions, one per screen corner.
//!
//! Every notifier that targets the same corner must stack into the same
//! region, so regions live in a [`ContainerRegistry`] shared through
//! [`SharedRegistry`]. A region is mounted the first time a corner is asked
//! for and is never torn down.
//!
//! [`ContainerRegistry::global`] is the process-wide registry used by
//! [`Notifier::new`](super::Notifier::new). Notifier state is single-threaded
//! (it lives with the UI loop), so "process-wide" means one registry per UI
//! thread.

use super::presenter::{Presenter, SurfaceId, VisualNode};
use super::toast::ToastId;
use crate::config::SURFACE_OFFSET;
use crate::error::{Error, Result};
use crate::ui::Scene;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::btree_map::{BTreeMap, Entry};
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Screen corner a notifier stacks its toasts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
        }
    }

    #[must_use]
    pub fn is_left(&self) -> bool {
        matches!(self, Position::TopLeft | Position::BottomLeft)
    }

    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(self, Position::TopRight | Position::TopLeft)
    }

    /// Returns the edges a region at this corner is anchored to.
    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement {
            vertical: if self.is_top() {
                VerticalEdge::Top
            } else {
                VerticalEdge::Bottom
            },
            horizontal: if self.is_left() {
                HorizontalEdge::Left
            } else {
                HorizontalEdge::Right
            },
            offset: SURFACE_OFFSET,
        }
    }
}

impl FromStr for Position {
    type Err = Infallible;

    /// Unknown names fall back to `top-right`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "top-left" => Position::TopLeft,
            "bottom-right" => Position::BottomRight,
            "bottom-left" => Position::BottomLeft,
            _ => Position::TopRight,
        })
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(position) => position,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Position::from(value.as_str())
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Where a region sits on screen: two anchored edges and a distance from each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalEdge,
    pub offset: f32,
}

/// One corner's stack of toasts, in arrival order.
#[derive(Debug, Clone)]
pub struct ContainerSurface {
    position: Position,
    placement: Placement,
    surface: SurfaceId,
    element_id: String,
    children: Vec<ToastId>,
}

impl ContainerSurface {
    fn new(
        position: Position,
        placement: Placement,
        surface: SurfaceId,
        element_id: String,
    ) -> Self {
        Self {
            position,
            placement,
            surface,
            element_id,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn surface_id(&self) -> SurfaceId {
        self.surface
    }

    /// Returns the active toasts, oldest first.
    #[must_use]
    pub fn children(&self) -> &[ToastId] {
        &self.children
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.children.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the id the region was mounted under, e.g.
    /// `infinity-toast-container-top-right`.
    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    fn push(&mut self, id: ToastId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.children.push(id);
        true
    }

    fn remove(&mut self, id: ToastId) -> bool {
        match self.children.iter().position(|child| *child == id) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Registry handle shared by every notifier drawing into the same presenter.
pub type SharedRegistry<P> = Rc<RefCell<ContainerRegistry<P>>>;

/// Maps each corner to its single stacking region.
#[derive(Debug)]
pub struct ContainerRegistry<P> {
    presenter: P,
    surfaces: BTreeMap<Position, ContainerSurface>,
}

thread_local! {
    static GLOBAL: SharedRegistry<Scene> = ContainerRegistry::shared(Scene::new());
}

impl ContainerRegistry<Scene> {
    /// Returns the process-wide registry drawing into an iced [`Scene`].
    pub fn global() -> SharedRegistry<Scene> {
        GLOBAL.with(Rc::clone)
    }
}

impl<P: Presenter> ContainerRegistry<P> {
    /// Creates an empty registry drawing into `presenter`.
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            surfaces: BTreeMap::new(),
        }
    }

    /// Creates an empty registry ready to be shared between notifiers.
    pub fn shared(presenter: P) -> SharedRegistry<P> {
        Rc::new(RefCell::new(Self::new(presenter)))
    }

    /// Returns the region for `position`, mounting it on first use.
    ///
    /// The region is mounted under `<container_class_name>-<position>`. Later
    /// callers share it whatever class name they pass.
    ///
    /// # Errors
    ///
    /// Propagates the presenter's failure to mount.
    pub fn get_or_create_surface(
        &mut self,
        position: Position,
        container_class_name: &str,
    ) -> Result<&mut ContainerSurface> {
        match self.surfaces.entry(position) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let placement = position.placement();
                let element_id = format!("{container_class_name}-{position}");
                let surface = self.presenter.mount(position, placement, &element_id)?;
                tracing::debug!(
                    %position,
                    %element_id,
                    surface = surface.raw(),
                    "mounted toast container"
                );
                Ok(entry.insert(ContainerSurface::new(position, placement, surface, element_id)))
            }
        }
    }

    /// Appends a rendered toast to the end of its corner's stack.
    ///
    /// # Errors
    ///
    /// Fails when no region is mounted at `position`, and propagates append
    /// failures from the presenter.
    pub fn append_toast(&mut self, position: Position, node: VisualNode) -> Result<()> {
        let id = node.id;
        let surface = {
            let surface = self.surfaces.get(&position).ok_or_else(|| {
                Error::Presentation(format!("no toast container mounted at {position}"))
            })?;
            if surface.contains(id) {
                return Ok(());
            }
            surface.surface_id()
        };
        self.presenter.append_child(surface, node)?;
        if let Some(surface) = self.surfaces.get_mut(&position) {
            surface.push(id);
        }
        Ok(())
    }

    /// Removes a toast from its corner's stack.
    ///
    /// Returns `false` without touching the presenter when the toast is not a
    /// child of that stack (already removed, or never appended).
    pub fn remove_toast(&mut self, position: Position, id: ToastId) -> bool {
        let Some(surface) = self.surfaces.get_mut(&position) else {
            return false;
        };
        if !surface.remove(id) {
            return false;
        }
        let surface = surface.surface_id();
        self.presenter.remove_child(surface, id);
        true
    }

    #[must_use]
    pub fn surface(&self, position: Position) -> Option<&ContainerSurface> {
        self.surfaces.get(&position)
    }

    /// Returns every mounted region in corner order.
    pub fn surfaces(&self) -> impl Iterator<Item = &ContainerSurface> {
        self.surfaces.values()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
