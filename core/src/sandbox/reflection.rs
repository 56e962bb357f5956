//! Reflection and memory surfaces of the sandbox host

use super::{AssetKind, SandboxComponent, SandboxHost};
use crate::host::{
    LiveObject, MaterialRef, MemoryInstrumentation, ObjectId, ObjectKind, ObjectReflection,
    ResolvedType,
};

impl SandboxHost {
    /// Index of the type named `name`, preferring one declared in `module`
    fn type_index(&self, name: &str, module: Option<&str>) -> Option<usize> {
        module
            .and_then(|module| {
                self.types
                    .iter()
                    .position(|t| t.name == name && t.module == module)
            })
            .or_else(|| self.types.iter().position(|t| t.name == name))
    }

    /// Whether instances of `type_name` are of the type at `ancestor` or inherit from it
    fn derives_from(&self, type_name: &str, ancestor: usize) -> bool {
        let mut current = self.type_index(type_name, None);
        // Bounded by the number of types so a cyclic registration cannot hang
        for _ in 0..=self.types.len() {
            let Some(index) = current else {
                return false;
            };
            if index == ancestor {
                return true;
            }
            current = self.types.get(index).and_then(|entry| {
                entry
                    .base
                    .as_deref()
                    .and_then(|base| self.type_index(base, Some(&entry.module)))
            });
        }
        false
    }

    fn material_refs(&self, slots: &[Option<ObjectId>]) -> Vec<Option<MaterialRef>> {
        slots
            .iter()
            .map(|slot| {
                slot.and_then(|id| {
                    self.asset_name(id).map(|name| MaterialRef {
                        id,
                        name: name.to_string(),
                    })
                })
            })
            .collect()
    }

    /// Every live object, ordered by id
    fn live_objects(&self) -> Vec<LiveObject> {
        let nodes = self.nodes.iter().map(|(id, node)| LiveObject {
            id: self.node_object(*id),
            type_name: "Node".to_string(),
            name: node.name.clone(),
            kind: ObjectKind::Other,
        });

        let components = self.components.iter().map(|(id, attached)| {
            let kind = match &attached.component {
                SandboxComponent::MeshRenderer {
                    shared_materials, ..
                }
                | SandboxComponent::ParticleSystemRenderer {
                    shared_materials, ..
                } => ObjectKind::Renderer {
                    shared_materials: self.material_refs(shared_materials),
                },
                _ => ObjectKind::Other,
            };
            LiveObject {
                id: self.component_object(*id),
                type_name: attached.component.type_name().to_string(),
                name: self.node_name(attached.node),
                kind,
            }
        });

        let assets = self.assets.iter().map(|(id, asset)| {
            let kind = match asset.kind {
                AssetKind::Material { shader, .. } => ObjectKind::Material {
                    shader: shader
                        .and_then(|s| self.asset_name(s))
                        .map(str::to_string),
                },
                _ => ObjectKind::Other,
            };
            LiveObject {
                id: *id,
                type_name: asset.kind.type_name().to_string(),
                name: asset.name.clone(),
                kind,
            }
        });

        let mut objects: Vec<LiveObject> = nodes.chain(components).chain(assets).collect();
        objects.sort_by_key(|o| o.id);
        objects
    }
}

impl ObjectReflection for SandboxHost {
    fn resolve_type(&self, type_name: &str, module_name: &str) -> Option<ResolvedType> {
        self.types
            .iter()
            .position(|t| t.name == type_name && t.module == module_name)
            .map(|index| ResolvedType {
                full_name: type_name.to_string(),
                key: index as u64,
            })
    }

    fn find_objects_of_type(&self, ty: &ResolvedType) -> Vec<LiveObject> {
        let Ok(ancestor) = usize::try_from(ty.key) else {
            return Vec::new();
        };
        let mut objects = self.live_objects();
        objects.retain(|o| self.derives_from(&o.type_name, ancestor));
        objects
    }
}

impl MemoryInstrumentation for SandboxHost {
    fn retained_bytes(&self, object: ObjectId) -> Option<u64> {
        if !self.instrumented {
            return None;
        }
        Some(self.retained.get(&object).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::{CORE_MODULE, GAME_MODULE};

    #[test]
    fn test_resolve_requires_matching_module() {
        let host = SandboxHost::new();
        assert!(host.resolve_type("Material", CORE_MODULE).is_some());
        assert!(host.resolve_type("Material", "Elsewhere").is_none());
        assert!(host.resolve_type("Nope", CORE_MODULE).is_none());
    }

    #[test]
    fn test_query_includes_subtypes() {
        let mut host = SandboxHost::new();
        let scene = host.add_scene("Main");
        let node = host.add_node(scene, None, "Hero");
        host.add_component(node, SandboxComponent::mesh_renderer(Vec::new()));
        host.add_component(
            node,
            SandboxComponent::ParticleSystemRenderer {
                enabled: true,
                shared_materials: Vec::new(),
            },
        );

        let renderer = host.resolve_type("Renderer", CORE_MODULE).unwrap();
        let found = host.find_objects_of_type(&renderer);
        let names: Vec<&str> = found.iter().map(|o| o.type_name.as_str()).collect();
        assert_eq!(names, ["MeshRenderer", "ParticleSystemRenderer"]);
        assert!(found.iter().all(|o| o.name == "Hero"));
    }

    #[test]
    fn test_behaviours_register_under_game_module() {
        let mut host = SandboxHost::new();
        let scene = host.add_scene("Main");
        let node = host.add_node(scene, None, "Hero");
        host.add_component(node, SandboxComponent::behaviour("PlayerController"));

        let ty = host.resolve_type("PlayerController", GAME_MODULE).unwrap();
        assert_eq!(host.find_objects_of_type(&ty).len(), 1);

        let behaviour = host.resolve_type("Behaviour", CORE_MODULE).unwrap();
        assert_eq!(host.find_objects_of_type(&behaviour).len(), 1);
    }

    #[test]
    fn test_object_covers_everything() {
        let mut host = SandboxHost::new();
        let scene = host.add_scene("Main");
        host.add_node(scene, None, "Hero"); // node + transform
        host.add_shader("Standard");

        let object = host.resolve_type("Object", CORE_MODULE).unwrap();
        assert_eq!(host.find_objects_of_type(&object).len(), 3);
    }

    #[test]
    fn test_same_name_in_another_module_is_a_distinct_type() {
        let mut host = SandboxHost::new();
        host.add_material("Skin", None, None);
        host.register_type("Material", GAME_MODULE, Some("Object"));

        let game = host.resolve_type("Material", GAME_MODULE).unwrap();
        assert!(host.find_objects_of_type(&game).is_empty());

        let core = host.resolve_type("Material", CORE_MODULE).unwrap();
        assert_ne!(game.key, core.key);
        assert_eq!(host.find_objects_of_type(&core).len(), 1);
    }

    #[test]
    fn test_game_subtype_inherits_from_game_base() {
        let mut host = SandboxHost::new();
        host.register_type("Renderer", GAME_MODULE, Some("Component"));
        host.register_type("Outline", GAME_MODULE, Some("Renderer"));
        let scene = host.add_scene("Main");
        let node = host.add_node(scene, None, "Hero");
        host.add_component(
            node,
            SandboxComponent::Plain {
                type_name: "Outline".to_string(),
            },
        );
        host.add_component(node, SandboxComponent::mesh_renderer(Vec::new()));

        let game = host.resolve_type("Renderer", GAME_MODULE).unwrap();
        let found = host.find_objects_of_type(&game);
        let names: Vec<&str> = found.iter().map(|o| o.type_name.as_str()).collect();
        assert_eq!(names, ["Outline"]);

        let core = host.resolve_type("Renderer", CORE_MODULE).unwrap();
        let found = host.find_objects_of_type(&core);
        let names: Vec<&str> = found.iter().map(|o| o.type_name.as_str()).collect();
        assert_eq!(names, ["MeshRenderer"]);
    }

    #[test]
    fn test_uninstrumented_build_reports_none() {
        let mut host = SandboxHost::new();
        let shader = host.add_shader("Standard");
        host.set_retained_bytes(shader, 64);
        assert_eq!(host.retained_bytes(shader), Some(64));

        host.set_instrumented(false);
        assert_eq!(host.retained_bytes(shader), None);
    }
}
