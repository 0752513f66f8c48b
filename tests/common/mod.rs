// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.

#![allow(dead_code)]

use iced_toast::config::Config;
use iced_toast::error::{Error, Result};
use iced_toast::notifications::{
    ContainerRegistry, ManualClock, Notifier, Placement, Position, Presenter, SharedRegistry,
    SlideDirection, SurfaceId, ToastId, ToastState, VisualNode,
};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Presenter that records every call it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub mounts: Vec<Position>,
    pub element_ids: Vec<String>,
    pub children: BTreeMap<SurfaceId, Vec<ToastId>>,
    pub removals: Vec<ToastId>,
    pub progress: Vec<(ToastId, f32)>,
    pub states: Vec<(ToastId, ToastState)>,
    pub fail_mount: bool,
}

impl Recorder {
    pub fn states_of(&self, id: ToastId) -> Vec<ToastState> {
        self.states
            .iter()
            .filter(|(toast, _)| *toast == id)
            .map(|(_, state)| *state)
            .collect()
    }

    pub fn progress_of(&self, id: ToastId) -> Vec<f32> {
        self.progress
            .iter()
            .filter(|(toast, _)| *toast == id)
            .map(|(_, percent)| *percent)
            .collect()
    }
}

impl Presenter for Recorder {
    fn mount(
        &mut self,
        position: Position,
        _placement: Placement,
        element_id: &str,
    ) -> Result<SurfaceId> {
        if self.fail_mount {
            return Err(Error::Presentation("no display".into()));
        }
        self.mounts.push(position);
        self.element_ids.push(element_id.to_string());
        let id = SurfaceId::new(self.mounts.len() as u64);
        self.children.insert(id, Vec::new());
        Ok(id)
    }

    fn append_child(&mut self, surface: SurfaceId, node: VisualNode) -> Result<()> {
        self.children
            .get_mut(&surface)
            .ok_or_else(|| Error::Presentation("unknown surface".into()))?
            .push(node.id);
        Ok(())
    }

    fn remove_child(&mut self, surface: SurfaceId, id: ToastId) {
        if let Some(children) = self.children.get_mut(&surface) {
            children.retain(|child| *child != id);
        }
        self.removals.push(id);
    }

    fn set_progress(&mut self, id: ToastId, percent: f32) {
        self.progress.push((id, percent));
    }

    fn set_state(&mut self, id: ToastId, state: ToastState, _direction: SlideDirection) {
        self.states.push((id, state));
    }
}

pub fn registry() -> SharedRegistry<Recorder> {
    ContainerRegistry::shared(Recorder::default())
}

pub fn notifier(
    config: Config,
    registry: &SharedRegistry<Recorder>,
    clock: &Rc<ManualClock>,
) -> Notifier<Recorder> {
    Notifier::with_registry(config, Rc::clone(registry), clock.clone())
}
