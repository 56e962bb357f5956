//! Scene graph surface of the sandbox host

use super::{AssetKind, Attached, Node, SandboxComponent, SandboxHost};
use crate::host::{
    ComponentDetail, ComponentId, ComponentInfo, MaterialInfo, NodeId, NodeInfo, ObjectId,
    ParticleRendererInfo, SceneGraph, SceneId, SceneInfo,
};

impl SandboxHost {
    fn node_info(&self, id: NodeId, node: &Node) -> NodeInfo {
        NodeInfo {
            id,
            name: node.name.clone(),
            active_self: node.active,
            parent: node.parent,
            child_count: node.children.len(),
        }
    }

    fn node_infos(&self, ids: &[NodeId]) -> Vec<NodeInfo> {
        ids.iter()
            .filter_map(|id| self.nodes.get(id).map(|node| self.node_info(*id, node)))
            .collect()
    }

    fn material_info(&self, id: ObjectId) -> Option<MaterialInfo> {
        let asset = self.assets.get(&id)?;
        let AssetKind::Material {
            shader,
            main_texture,
        } = asset.kind
        else {
            return None;
        };

        Some(MaterialInfo {
            id,
            name: asset.name.clone(),
            shader: shader.and_then(|s| self.asset_name(s)).map(str::to_string),
            main_texture: main_texture
                .and_then(|t| self.asset_name(t))
                .map(str::to_string),
        })
    }

    fn material_slots(&self, slots: &[Option<ObjectId>]) -> Vec<Option<MaterialInfo>> {
        slots
            .iter()
            .map(|slot| slot.and_then(|id| self.material_info(id)))
            .collect()
    }

    /// The first particle renderer attached alongside `emitter`
    fn sibling_particle_renderer(&self, emitter: ComponentId) -> Option<ComponentId> {
        let node = self.components.get(&emitter)?.node;
        self.nodes.get(&node)?.components.iter().copied().find(|id| {
            matches!(
                self.components.get(id),
                Some(Attached {
                    component: SandboxComponent::ParticleSystemRenderer { .. },
                    ..
                })
            )
        })
    }

    pub(super) fn node_name(&self, node: NodeId) -> String {
        self.nodes
            .get(&node)
            .map(|n| n.name.clone())
            .unwrap_or_default()
    }
}

impl SceneGraph for SandboxHost {
    fn loaded_scenes(&self) -> Vec<SceneInfo> {
        self.scenes
            .iter()
            .map(|s| SceneInfo {
                id: s.id,
                name: s.name.clone(),
            })
            .collect()
    }

    fn persistent_scene(&self) -> SceneInfo {
        SceneInfo {
            id: self.persistent.id,
            name: self.persistent.name.clone(),
        }
    }

    fn active_scene(&self) -> Option<SceneId> {
        self.active_scene
    }

    fn scene(&self, id: SceneId) -> Option<SceneInfo> {
        self.scene_entry(id).map(|s| SceneInfo {
            id: s.id,
            name: s.name.clone(),
        })
    }

    fn root_nodes(&self, scene: SceneId) -> Vec<NodeInfo> {
        self.scene_entry(scene)
            .map(|s| self.node_infos(&s.roots))
            .unwrap_or_default()
    }

    fn node(&self, id: NodeId) -> Option<NodeInfo> {
        self.nodes.get(&id).map(|node| self.node_info(id, node))
    }

    fn children(&self, id: NodeId) -> Vec<NodeInfo> {
        self.nodes
            .get(&id)
            .map(|node| self.node_infos(&node.children))
            .unwrap_or_default()
    }

    fn components(&self, id: NodeId) -> Vec<ComponentInfo> {
        let Some(node) = self.nodes.get(&id) else {
            return Vec::new();
        };

        node.components
            .iter()
            .filter_map(|cid| {
                self.components.get(cid).map(|attached| ComponentInfo {
                    id: *cid,
                    type_name: attached.component.type_name().to_string(),
                    enabled: attached.component.enabled(),
                })
            })
            .collect()
    }

    fn component_detail(&self, id: ComponentId) -> Option<ComponentDetail> {
        let attached = self.components.get(&id)?;

        let detail = match &attached.component {
            SandboxComponent::Transform { position, rotation } => ComponentDetail::Transform {
                local_position: *position,
                local_rotation: *rotation,
            },
            SandboxComponent::MeshRenderer {
                materials,
                shared_materials,
                ..
            } => ComponentDetail::Renderer {
                materials: self.material_slots(materials),
                shared_materials: self.material_slots(shared_materials),
            },
            SandboxComponent::ParticleSystemRenderer {
                shared_materials, ..
            } => ComponentDetail::Renderer {
                materials: self.material_slots(shared_materials),
                shared_materials: self.material_slots(shared_materials),
            },
            SandboxComponent::MeshFilter { mesh } => ComponentDetail::MeshHolder {
                name: self.node_name(attached.node),
                mesh: mesh
                    .and_then(|m| self.asset_name(m))
                    .map(str::to_string),
            },
            SandboxComponent::ParticleSystem {
                duration,
                emission_enabled,
            } => {
                let renderer = self
                    .sibling_particle_renderer(id)
                    .and_then(|r| self.components.get(&r))
                    .map(|r| ParticleRendererInfo {
                        type_name: r.component.type_name().to_string(),
                        enabled: r.component.enabled().unwrap_or(false),
                    });

                ComponentDetail::ParticleEmitter {
                    name: self.node_name(attached.node),
                    main_module: "MainModule".to_string(),
                    duration: *duration,
                    emission_module: "EmissionModule".to_string(),
                    emission_enabled: *emission_enabled,
                    renderer,
                }
            }
            SandboxComponent::Behaviour { .. } | SandboxComponent::Plain { .. } => {
                ComponentDetail::Other
            }
        };

        Some(detail)
    }

    fn set_node_active(&mut self, id: NodeId, active: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.active = active;
        }
    }

    fn set_component_enabled(&mut self, id: ComponentId, enabled: bool) {
        if let Some(attached) = self.components.get_mut(&id) {
            attached.component.set_enabled(enabled);
        }
    }

    fn set_emission_enabled(&mut self, id: ComponentId, enabled: bool) {
        if let Some(Attached {
            component: SandboxComponent::ParticleSystem {
                emission_enabled, ..
            },
            ..
        }) = self.components.get_mut(&id)
        {
            *emission_enabled = enabled;
        }
    }

    fn set_particle_renderer_enabled(&mut self, id: ComponentId, enabled: bool) {
        let is_emitter = matches!(
            self.components.get(&id),
            Some(Attached {
                component: SandboxComponent::ParticleSystem { .. },
                ..
            })
        );
        if !is_emitter {
            return;
        }
        let Some(renderer) = self.sibling_particle_renderer(id) else {
            return;
        };
        if let Some(attached) = self.components.get_mut(&renderer) {
            attached.component.set_enabled(enabled);
        }
    }
}
