//! Navigation cursor for the hierarchy browser

use crate::host::{ComponentId, NodeId, SceneGraph, SceneId};

/// Where the hierarchy browser currently points
///
/// Each level carries its enclosing levels, so a selected component always
/// has a selected node and a selected node always has a selected scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationCursor {
    /// Listing loaded scenes
    #[default]
    Scenes,
    /// Listing the root nodes of a scene
    Scene { scene: SceneId },
    /// Showing a node's children and components
    Node { scene: SceneId, node: NodeId },
    /// As `Node`, plus the detail pane of one component
    Component {
        scene: SceneId,
        node: NodeId,
        component: ComponentId,
    },
}

/// A single cursor movement triggered from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    EnterScene(SceneId),
    /// Back from the root-node list to the scene list
    LeaveScene,
    EnterNode(NodeId),
    /// Back from a node: to `parent` if set, otherwise to the root-node list
    LeaveNode { parent: Option<NodeId> },
    SelectComponent(ComponentId),
}

impl NavigationCursor {
    pub fn selected_scene(&self) -> Option<SceneId> {
        match *self {
            Self::Scenes => None,
            Self::Scene { scene } | Self::Node { scene, .. } | Self::Component { scene, .. } => {
                Some(scene)
            }
        }
    }

    pub fn selected_node(&self) -> Option<NodeId> {
        match *self {
            Self::Node { node, .. } | Self::Component { node, .. } => Some(node),
            _ => None,
        }
    }

    pub fn selected_component(&self) -> Option<ComponentId> {
        match *self {
            Self::Component { component, .. } => Some(component),
            _ => None,
        }
    }

    /// Apply a navigation step.
    ///
    /// Steps that need an enclosing level the cursor does not have (entering
    /// a node with no scene selected, for instance) are ignored. Returns
    /// whether the cursor changed.
    pub fn navigate(&mut self, step: Navigation) -> bool {
        let next = match (step, *self) {
            (Navigation::EnterScene(scene), _) => Self::Scene { scene },
            (Navigation::LeaveScene, _) => Self::Scenes,
            (Navigation::EnterNode(node), cursor) => match cursor.selected_scene() {
                Some(scene) => Self::Node { scene, node },
                None => return false,
            },
            (Navigation::LeaveNode { parent }, cursor) => match (cursor.selected_scene(), parent) {
                (Some(scene), Some(node)) => Self::Node { scene, node },
                (Some(scene), None) => Self::Scene { scene },
                (None, _) => return false,
            },
            (Navigation::SelectComponent(component), cursor) => {
                match (cursor.selected_scene(), cursor.selected_node()) {
                    (Some(scene), Some(node)) => Self::Component {
                        scene,
                        node,
                        component,
                    },
                    _ => return false,
                }
            }
        };

        let changed = next != *self;
        *self = next;
        changed
    }

    /// Drop any level whose host object has gone away.
    ///
    /// A scene that is unloaded or has an empty name sends the cursor back to
    /// the scene list; a destroyed node back to the scene's roots; a
    /// component no longer attached to the node back to the node view.
    pub fn resolve<G: SceneGraph + ?Sized>(&mut self, graph: &G) {
        let Some(scene) = self.selected_scene() else {
            return;
        };

        if !graph.scene(scene).is_some_and(|info| !info.name.is_empty()) {
            tracing::debug!(?scene, "hierarchy: selected scene is no longer valid");
            *self = Self::Scenes;
            return;
        }

        let Some(node) = self.selected_node() else {
            return;
        };

        if graph.node(node).is_none() {
            tracing::debug!(?node, "hierarchy: selected node was destroyed");
            *self = Self::Scene { scene };
            return;
        }

        if let Some(component) = self.selected_component()
            && !graph.components(node).iter().any(|c| c.id == component)
        {
            tracing::debug!(?component, "hierarchy: selected component was removed");
            *self = Self::Node { scene, node };
        }
    }
}
