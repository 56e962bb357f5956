//! Component detail pane, one renderer per inspectable kind

use egui::{RichText, Ui};
use glam::Vec3;

use super::actions::HierarchyAction;
use crate::host::{ComponentDetail, ComponentId, MaterialInfo, ParticleRendererInfo};
use crate::widgets::{boxed_column, boxed_row};

/// Draw the detail pane for `component`; kinds without detail draw nothing
pub(super) fn show(
    ui: &mut Ui,
    component: ComponentId,
    detail: &ComponentDetail,
    actions: &mut Vec<HierarchyAction>,
) {
    match detail {
        ComponentDetail::Transform {
            local_position,
            local_rotation,
        } => transform(ui, *local_position, *local_rotation),
        ComponentDetail::Renderer {
            materials,
            shared_materials,
        } => renderer(ui, materials, shared_materials),
        ComponentDetail::MeshHolder { name, mesh } => mesh_holder(ui, name, mesh.as_deref()),
        ComponentDetail::ParticleEmitter {
            name,
            main_module,
            duration,
            emission_module,
            emission_enabled,
            renderer,
        } => {
            boxed_column(ui, |ui| {
                ui.label(RichText::new(name).strong());
                ui.label(main_module);
                ui.label(format!("Duration: {duration}"));

                let mut emission = *emission_enabled;
                if ui.checkbox(&mut emission, emission_module).changed() {
                    actions.push(HierarchyAction::SetEmissionEnabled {
                        component,
                        enabled: emission,
                    });
                }

                if let Some(ParticleRendererInfo { type_name, enabled }) = renderer {
                    let mut enabled = *enabled;
                    if ui.checkbox(&mut enabled, type_name).changed() {
                        actions.push(HierarchyAction::SetParticleRendererEnabled {
                            component,
                            enabled,
                        });
                    }
                }
            });
        }
        ComponentDetail::Other => {}
    }
}

fn transform(ui: &mut Ui, position: Vec3, rotation: Vec3) {
    boxed_column(ui, |ui| {
        vector_row(ui, position);
        vector_row(ui, rotation);
    });
}

fn vector_row(ui: &mut Ui, v: Vec3) {
    boxed_row(ui, |ui| {
        ui.label(format!("x: {}", v.x));
        ui.label(format!("y: {}", v.y));
        ui.label(format!("z: {}", v.z));
    });
}

fn renderer(ui: &mut Ui, materials: &[Option<MaterialInfo>], shared: &[Option<MaterialInfo>]) {
    boxed_column(ui, |ui| {
        for material in materials.iter().chain(shared).flatten() {
            ui.label(RichText::new(&material.name).strong());
            if let Some(shader) = &material.shader {
                ui.label(shader);
            }
            if let Some(texture) = &material.main_texture {
                ui.label(texture);
            }
        }
    });
}

fn mesh_holder(ui: &mut Ui, name: &str, mesh: Option<&str>) {
    boxed_column(ui, |ui| {
        ui.label(name);
        if let Some(mesh) = mesh {
            ui.label(mesh);
        }
    });
}
