//! Actions collected while drawing a hierarchy frame

use super::cursor::Navigation;
use crate::host::{ComponentId, NodeId};

/// A user interaction recorded during layout and applied after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyAction {
    Navigate(Navigation),
    SetNodeActive { node: NodeId, active: bool },
    SetComponentEnabled { component: ComponentId, enabled: bool },
    /// Emission module of a particle emitter
    SetEmissionEnabled { component: ComponentId, enabled: bool },
    /// Renderer attached to a particle emitter
    SetParticleRendererEnabled { component: ComponentId, enabled: bool },
}

impl From<Navigation> for HierarchyAction {
    fn from(step: Navigation) -> Self {
        Self::Navigate(step)
    }
}
