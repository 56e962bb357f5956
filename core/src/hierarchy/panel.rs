//! Hierarchy window layout
//!
//! Draws one of the four browser modes against an already-resolved cursor.
//! Nothing here mutates the host or the cursor; interactions are returned as
//! [`HierarchyAction`]s.

use egui::{RichText, Ui};

use super::actions::HierarchyAction;
use super::cursor::{Navigation, NavigationCursor};
use super::detail;
use crate::host::{ComponentId, ComponentInfo, NodeId, NodeInfo, SceneGraph, SceneId, SceneInfo};
use crate::widgets::{boxed_column, boxed_row, dimmed};

/// Back to a scene's root list / to the scene list
pub(super) const WHITE_LEFT: &str = "\u{25C1}";
/// Back to the parent node
pub(super) const BLACK_LEFT: &str = "\u{25C0}";
/// Descend into a leaf / select a component
pub(super) const WHITE_RIGHT: &str = "\u{25B7}";
/// The currently selected component
pub(super) const BLACK_RIGHT: &str = "\u{25B6}";
/// Descend into a node that has children
pub(super) const BRANCH_RIGHT: &str = "\u{25B6}\u{25B7}";

/// Draw the hierarchy window and collect this frame's interactions
pub(super) fn show_window<G: SceneGraph + ?Sized>(
    ctx: &egui::Context,
    cursor: &NavigationCursor,
    graph: &G,
) -> Vec<HierarchyAction> {
    let mut actions = Vec::new();

    egui::Window::new("Hierarchy")
        .id(egui::Id::new("devscope_hierarchy_window"))
        .default_pos([10.0, 10.0])
        .resizable(true)
        .collapsible(true)
        .show(ctx, |ui| match *cursor {
            NavigationCursor::Scenes => scene_list(ui, graph, &mut actions),
            NavigationCursor::Scene { scene } => root_list(ui, graph, scene, &mut actions),
            NavigationCursor::Node { node, .. } => node_view(ui, graph, node, None, &mut actions),
            NavigationCursor::Component {
                node, component, ..
            } => node_view(ui, graph, node, Some(component), &mut actions),
        });

    actions
}

fn scene_list<G: SceneGraph + ?Sized>(ui: &mut Ui, graph: &G, actions: &mut Vec<HierarchyAction>) {
    let active = graph.active_scene();

    boxed_column(ui, |ui| {
        for scene in graph.loaded_scenes() {
            scene_row(ui, &scene, active == Some(scene.id), actions);
        }
        scene_row(ui, &graph.persistent_scene(), false, actions);
    });
}

fn scene_row(ui: &mut Ui, scene: &SceneInfo, active: bool, actions: &mut Vec<HierarchyAction>) {
    boxed_row(ui, |ui| {
        let name = RichText::new(&scene.name);
        ui.label(if active { name.strong() } else { name });
        if ui.button(WHITE_RIGHT).clicked() {
            actions.push(Navigation::EnterScene(scene.id).into());
        }
    });
}

fn root_list<G: SceneGraph + ?Sized>(
    ui: &mut Ui,
    graph: &G,
    scene: SceneId,
    actions: &mut Vec<HierarchyAction>,
) {
    let Some(info) = graph.scene(scene) else {
        return;
    };

    boxed_column(ui, |ui| {
        boxed_row(ui, |ui| {
            if ui.button(WHITE_LEFT).clicked() {
                actions.push(Navigation::LeaveScene.into());
            }
            ui.label(RichText::new(&info.name).strong());
        });

        for node in graph.root_nodes(scene) {
            node_row(ui, &node, actions);
        }
    });
}

fn node_view<G: SceneGraph + ?Sized>(
    ui: &mut Ui,
    graph: &G,
    node: NodeId,
    selected: Option<ComponentId>,
    actions: &mut Vec<HierarchyAction>,
) {
    let Some(node) = graph.node(node) else {
        return;
    };

    ui.horizontal_top(|ui| {
        boxed_column(ui, |ui| {
            boxed_row(ui, |ui| {
                let glyph = if node.parent.is_some() {
                    BLACK_LEFT
                } else {
                    WHITE_LEFT
                };
                if ui.button(glyph).clicked() {
                    actions.push(
                        Navigation::LeaveNode {
                            parent: node.parent,
                        }
                        .into(),
                    );
                }
                activation_checkbox(ui, &node, true, actions);
            });

            for child in graph.children(node.id) {
                node_row(ui, &child, actions);
            }
        });

        boxed_column(ui, |ui| {
            for component in graph.components(node.id) {
                component_row(ui, &component, selected == Some(component.id), actions);
            }
        });

        if let Some(component) = selected
            && let Some(detail) = graph.component_detail(component)
        {
            detail::show(ui, component, &detail, actions);
        }
    });
}

fn node_row(ui: &mut Ui, node: &NodeInfo, actions: &mut Vec<HierarchyAction>) {
    boxed_row(ui, |ui| {
        activation_checkbox(ui, node, false, actions);
        let glyph = if node.has_children() {
            BRANCH_RIGHT
        } else {
            WHITE_RIGHT
        };
        if ui.button(glyph).clicked() {
            actions.push(Navigation::EnterNode(node.id).into());
        }
    });
}

fn activation_checkbox(
    ui: &mut Ui,
    node: &NodeInfo,
    emphasized: bool,
    actions: &mut Vec<HierarchyAction>,
) {
    let mut active = node.active_self;
    let label = RichText::new(&node.name);
    let label = if emphasized { label.strong() } else { label };

    let changed = dimmed(ui, !node.active_self, |ui| ui.checkbox(&mut active, label).changed());
    if changed {
        actions.push(HierarchyAction::SetNodeActive {
            node: node.id,
            active,
        });
    }
}

fn component_row(
    ui: &mut Ui,
    component: &ComponentInfo,
    selected: bool,
    actions: &mut Vec<HierarchyAction>,
) {
    boxed_row(ui, |ui| {
        match component.enabled {
            Some(enabled) => {
                let mut value = enabled;
                let changed = dimmed(ui, !enabled, |ui| {
                    ui.checkbox(&mut value, &component.type_name).changed()
                });
                if changed {
                    actions.push(HierarchyAction::SetComponentEnabled {
                        component: component.id,
                        enabled: value,
                    });
                }
            }
            None => {
                ui.label(&component.type_name);
            }
        }

        let glyph = if selected { BLACK_RIGHT } else { WHITE_RIGHT };
        if ui.button(glyph).clicked() {
            actions.push(Navigation::SelectComponent(component.id).into());
        }
    });
}
