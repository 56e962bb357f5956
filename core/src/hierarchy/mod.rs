//! Scene hierarchy browser
//!
//! Walks the host scene graph from loaded scenes down to the components of a
//! single node, toggling node and component activity live.
//!
//! # Frame model
//!
//! Each [`HierarchyBrowser::render`] call:
//!
//! 1. resolves the cursor against the host, dropping levels whose objects
//!    have disappeared,
//! 2. draws the window for that cursor, collecting [`HierarchyAction`]s,
//! 3. applies the actions to the host and the cursor.
//!
//! Layout never sees a cursor that changed mid-frame, so a child list is
//! always drawn for the node the cursor points at. Host mutations still land
//! on the same tick they were clicked.

mod actions;
mod cursor;
mod detail;
mod panel;

pub use actions::HierarchyAction;
pub use cursor::{Navigation, NavigationCursor};

use crate::host::SceneGraph;

/// Hierarchy browser state
#[derive(Debug, Default)]
pub struct HierarchyBrowser {
    /// Whether the window is drawn
    pub show: bool,
    cursor: NavigationCursor,
}

impl HierarchyBrowser {
    /// Create a hidden browser at the scene list
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle window visibility
    pub fn toggle(&mut self) {
        self.show = !self.show;
    }

    /// Current navigation position
    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// Draw one frame and apply its interactions
    pub fn render<G: SceneGraph + ?Sized>(&mut self, ctx: &egui::Context, graph: &mut G) {
        if !self.show {
            return;
        }

        self.cursor.resolve(&*graph);
        let actions = panel::show_window(ctx, &self.cursor, &*graph);
        for action in actions {
            self.apply(action, graph);
        }
    }

    /// Apply a single interaction to the cursor or the host
    pub fn apply<G: SceneGraph + ?Sized>(&mut self, action: HierarchyAction, graph: &mut G) {
        match action {
            HierarchyAction::Navigate(step) => {
                if self.cursor.navigate(step) {
                    tracing::debug!(?step, cursor = ?self.cursor, "hierarchy: navigated");
                }
            }
            HierarchyAction::SetNodeActive { node, active } => {
                tracing::debug!(?node, active, "hierarchy: set node active");
                graph.set_node_active(node, active);
            }
            HierarchyAction::SetComponentEnabled { component, enabled } => {
                tracing::debug!(?component, enabled, "hierarchy: set component enabled");
                graph.set_component_enabled(component, enabled);
            }
            HierarchyAction::SetEmissionEnabled { component, enabled } => {
                graph.set_emission_enabled(component, enabled);
            }
            HierarchyAction::SetParticleRendererEnabled { component, enabled } => {
                graph.set_particle_renderer_enabled(component, enabled);
            }
        }
    }
}
