//! In-memory host runtime
//!
//! [`SandboxHost`] implements every host surface over plain collections.
//! It backs the test-suite and the viewer binary, and doubles as a reference
//! for what a real engine binding has to provide.
//!
//! ```rust,ignore
//! let mut host = SandboxHost::new();
//! let scene = host.add_scene("Main");
//! let player = host.add_node(scene, None, "Player");
//! let shader = host.add_shader("Standard");
//! let material = host.add_material("Skin", Some(shader), None);
//! host.add_component(player, SandboxComponent::mesh_renderer(vec![Some(material)]));
//! ```

mod graph;
mod reflection;

use glam::Vec3;
use hashbrown::HashMap;

use crate::host::{ComponentId, NodeId, ObjectId, SceneId};

/// Module every built-in sandbox type lives in
pub const CORE_MODULE: &str = "Core";
/// Module user behaviour types are registered in when not declared up front
pub const GAME_MODULE: &str = "Game";
/// Name of the persistent pseudo-scene
pub const PERSISTENT_SCENE_NAME: &str = "Persistent";

/// Built-in type tree: (name, base)
const BUILTIN_TYPES: &[(&str, Option<&str>)] = &[
    ("Object", None),
    ("Node", Some("Object")),
    ("Component", Some("Object")),
    ("Transform", Some("Component")),
    ("Behaviour", Some("Component")),
    ("Renderer", Some("Component")),
    ("MeshRenderer", Some("Renderer")),
    ("ParticleSystemRenderer", Some("Renderer")),
    ("MeshFilter", Some("Component")),
    ("ParticleSystem", Some("Component")),
    ("Material", Some("Object")),
    ("Shader", Some("Object")),
    ("Texture", Some("Object")),
    ("Mesh", Some("Object")),
];

/// A component attached to a sandbox node
#[derive(Debug, Clone, PartialEq)]
pub enum SandboxComponent {
    Transform {
        position: Vec3,
        rotation: Vec3,
    },
    /// A script-like behaviour with an enabled flag
    Behaviour {
        type_name: String,
        enabled: bool,
    },
    MeshRenderer {
        enabled: bool,
        materials: Vec<Option<ObjectId>>,
        shared_materials: Vec<Option<ObjectId>>,
    },
    MeshFilter {
        mesh: Option<ObjectId>,
    },
    ParticleSystem {
        duration: f32,
        emission_enabled: bool,
    },
    ParticleSystemRenderer {
        enabled: bool,
        shared_materials: Vec<Option<ObjectId>>,
    },
    /// Any component without an enabled flag or detail pane
    Plain {
        type_name: String,
    },
}

impl SandboxComponent {
    /// Enabled mesh renderer whose instance and shared materials are the same set
    pub fn mesh_renderer(materials: Vec<Option<ObjectId>>) -> Self {
        Self::MeshRenderer {
            enabled: true,
            shared_materials: materials.clone(),
            materials,
        }
    }

    pub fn behaviour(type_name: impl Into<String>) -> Self {
        Self::Behaviour {
            type_name: type_name.into(),
            enabled: true,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Transform { .. } => "Transform",
            Self::Behaviour { type_name, .. } | Self::Plain { type_name } => type_name.as_str(),
            Self::MeshRenderer { .. } => "MeshRenderer",
            Self::MeshFilter { .. } => "MeshFilter",
            Self::ParticleSystem { .. } => "ParticleSystem",
            Self::ParticleSystemRenderer { .. } => "ParticleSystemRenderer",
        }
    }

    fn enabled(&self) -> Option<bool> {
        match self {
            Self::Behaviour { enabled, .. }
            | Self::MeshRenderer { enabled, .. }
            | Self::ParticleSystemRenderer { enabled, .. } => Some(*enabled),
            _ => None,
        }
    }

    fn set_enabled(&mut self, value: bool) {
        match self {
            Self::Behaviour { enabled, .. }
            | Self::MeshRenderer { enabled, .. }
            | Self::ParticleSystemRenderer { enabled, .. } => *enabled = value,
            _ => {}
        }
    }
}

#[derive(Debug, Clone)]
enum AssetKind {
    Material {
        shader: Option<ObjectId>,
        main_texture: Option<ObjectId>,
    },
    Shader,
    Texture,
    Mesh,
}

impl AssetKind {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Material { .. } => "Material",
            Self::Shader => "Shader",
            Self::Texture => "Texture",
            Self::Mesh => "Mesh",
        }
    }
}

#[derive(Debug, Clone)]
struct Asset {
    name: String,
    kind: AssetKind,
}

#[derive(Debug, Clone)]
struct Scene {
    id: SceneId,
    name: String,
    roots: Vec<NodeId>,
}

#[derive(Debug, Clone)]
struct Node {
    scene: SceneId,
    name: String,
    active: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    components: Vec<ComponentId>,
}

#[derive(Debug, Clone)]
struct Attached {
    node: NodeId,
    component: SandboxComponent,
}

#[derive(Debug, Clone)]
struct TypeEntry {
    name: String,
    module: String,
    base: Option<String>,
}

/// In-memory scene graph, reflection and memory instrumentation
#[derive(Debug, Clone)]
pub struct SandboxHost {
    /// Shared id counter; scenes, nodes, components and assets never collide
    next_id: u32,
    scenes: Vec<Scene>,
    persistent: Scene,
    active_scene: Option<SceneId>,
    nodes: HashMap<NodeId, Node>,
    components: HashMap<ComponentId, Attached>,
    assets: HashMap<ObjectId, Asset>,
    types: Vec<TypeEntry>,
    retained: HashMap<ObjectId, u64>,
    instrumented: bool,
}

impl Default for SandboxHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SandboxHost {
    /// Empty host with the built-in type tree and instrumentation enabled
    pub fn new() -> Self {
        let types = BUILTIN_TYPES
            .iter()
            .map(|(name, base)| TypeEntry {
                name: (*name).to_string(),
                module: CORE_MODULE.to_string(),
                base: base.map(str::to_string),
            })
            .collect();

        Self {
            next_id: 2,
            scenes: Vec::new(),
            persistent: Scene {
                id: SceneId(1),
                name: PERSISTENT_SCENE_NAME.to_string(),
                roots: Vec::new(),
            },
            active_scene: None,
            nodes: HashMap::new(),
            components: HashMap::new(),
            assets: HashMap::new(),
            types,
            retained: HashMap::new(),
            instrumented: true,
        }
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // =========================================================================
    // Scenes and nodes
    // =========================================================================

    /// Load a new scene; the first loaded scene becomes active
    pub fn add_scene(&mut self, name: impl Into<String>) -> SceneId {
        let id = SceneId(self.allocate());
        self.scenes.push(Scene {
            id,
            name: name.into(),
            roots: Vec::new(),
        });
        if self.active_scene.is_none() {
            self.active_scene = Some(id);
        }
        id
    }

    pub fn persistent_scene_id(&self) -> SceneId {
        self.persistent.id
    }

    pub fn set_active_scene(&mut self, scene: SceneId) {
        self.active_scene = Some(scene);
    }

    /// Unload a scene and destroy every node in it
    pub fn unload_scene(&mut self, scene: SceneId) {
        let Some(index) = self.scenes.iter().position(|s| s.id == scene) else {
            return;
        };
        let removed = self.scenes.remove(index);
        for root in removed.roots {
            self.destroy_subtree(root);
        }
        if self.active_scene == Some(scene) {
            self.active_scene = self.scenes.first().map(|s| s.id);
        }
    }

    /// Create an active node with a default transform.
    ///
    /// With `parent` set the node joins the parent's scene regardless of `scene`.
    pub fn add_node(
        &mut self,
        scene: SceneId,
        parent: Option<NodeId>,
        name: impl Into<String>,
    ) -> NodeId {
        let id = NodeId(self.allocate());
        let scene = parent
            .and_then(|p| self.nodes.get(&p))
            .map_or(scene, |p| p.scene);

        match parent {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(&parent) {
                    parent.children.push(id);
                }
            }
            None => {
                if let Some(entry) = self.scene_entry_mut(scene) {
                    entry.roots.push(id);
                }
            }
        }

        self.nodes.insert(
            id,
            Node {
                scene,
                name: name.into(),
                active: true,
                parent,
                children: Vec::new(),
                components: Vec::new(),
            },
        );

        self.add_component(
            id,
            SandboxComponent::Transform {
                position: Vec3::ZERO,
                rotation: Vec3::ZERO,
            },
        );
        id
    }

    /// Destroy a node, its descendants and their components
    pub fn destroy_node(&mut self, node: NodeId) {
        let Some(entry) = self.nodes.get(&node) else {
            return;
        };
        let (scene, parent) = (entry.scene, entry.parent);

        match parent {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(&parent) {
                    parent.children.retain(|c| *c != node);
                }
            }
            None => {
                if let Some(entry) = self.scene_entry_mut(scene) {
                    entry.roots.retain(|r| *r != node);
                }
            }
        }

        self.destroy_subtree(node);
    }

    fn destroy_subtree(&mut self, node: NodeId) {
        let Some(entry) = self.nodes.remove(&node) else {
            return;
        };
        for component in entry.components {
            self.components.remove(&component);
        }
        for child in entry.children {
            self.destroy_subtree(child);
        }
    }

    fn scene_entry(&self, scene: SceneId) -> Option<&Scene> {
        if scene == self.persistent.id {
            return Some(&self.persistent);
        }
        self.scenes.iter().find(|s| s.id == scene)
    }

    fn scene_entry_mut(&mut self, scene: SceneId) -> Option<&mut Scene> {
        if scene == self.persistent.id {
            return Some(&mut self.persistent);
        }
        self.scenes.iter_mut().find(|s| s.id == scene)
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Attach a component to a node.
    ///
    /// Behaviour types that were never registered are registered under
    /// [`GAME_MODULE`] as subtypes of `Behaviour`.
    pub fn add_component(&mut self, node: NodeId, component: SandboxComponent) -> ComponentId {
        let id = ComponentId(self.allocate());

        if let SandboxComponent::Behaviour { type_name, .. } = &component
            && !self.types.iter().any(|t| t.name == *type_name)
        {
            let type_name = type_name.clone();
            self.register_type(type_name, GAME_MODULE, Some("Behaviour"));
        }

        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.components.push(id);
        }
        self.components.insert(id, Attached { node, component });
        id
    }

    /// Set a node transform's local position and euler rotation
    pub fn set_transform(&mut self, node: NodeId, position: Vec3, rotation: Vec3) {
        let Some(entry) = self.nodes.get(&node) else {
            return;
        };
        for id in entry.components.clone() {
            if let Some(Attached {
                component: SandboxComponent::Transform {
                    position: p,
                    rotation: r,
                },
                ..
            }) = self.components.get_mut(&id)
            {
                *p = position;
                *r = rotation;
                return;
            }
        }
    }

    // =========================================================================
    // Assets
    // =========================================================================

    pub fn add_shader(&mut self, name: impl Into<String>) -> ObjectId {
        self.add_asset(name.into(), AssetKind::Shader)
    }

    pub fn add_texture(&mut self, name: impl Into<String>) -> ObjectId {
        self.add_asset(name.into(), AssetKind::Texture)
    }

    pub fn add_mesh(&mut self, name: impl Into<String>) -> ObjectId {
        self.add_asset(name.into(), AssetKind::Mesh)
    }

    pub fn add_material(
        &mut self,
        name: impl Into<String>,
        shader: Option<ObjectId>,
        main_texture: Option<ObjectId>,
    ) -> ObjectId {
        self.add_asset(
            name.into(),
            AssetKind::Material {
                shader,
                main_texture,
            },
        )
    }

    fn add_asset(&mut self, name: String, kind: AssetKind) -> ObjectId {
        let id = ObjectId(u64::from(self.allocate()));
        self.assets.insert(id, Asset { name, kind });
        id
    }

    fn asset_name(&self, id: ObjectId) -> Option<&str> {
        self.assets.get(&id).map(|a| a.name.as_str())
    }

    // =========================================================================
    // Types and memory
    // =========================================================================

    /// Register a type so it can be resolved and matched by instance queries
    pub fn register_type(
        &mut self,
        name: impl Into<String>,
        module: impl Into<String>,
        base: Option<&str>,
    ) {
        self.types.push(TypeEntry {
            name: name.into(),
            module: module.into(),
            base: base.map(str::to_string),
        });
    }

    /// Object id a component is reported under by instance queries
    pub fn component_object(&self, component: ComponentId) -> ObjectId {
        ObjectId(u64::from(component.0))
    }

    /// Object id a node is reported under by instance queries
    pub fn node_object(&self, node: NodeId) -> ObjectId {
        ObjectId(u64::from(node.0))
    }

    pub fn set_retained_bytes(&mut self, object: ObjectId, bytes: u64) {
        self.retained.insert(object, bytes);
    }

    /// Simulate a build with or without memory instrumentation
    pub fn set_instrumented(&mut self, instrumented: bool) {
        self.instrumented = instrumented;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SceneGraph;

    #[test]
    fn test_first_scene_becomes_active() {
        let mut host = SandboxHost::new();
        assert_eq!(host.active_scene(), None);
        let main = host.add_scene("Main");
        host.add_scene("Additive");
        assert_eq!(host.active_scene(), Some(main));
    }

    #[test]
    fn test_nodes_get_a_transform() {
        let mut host = SandboxHost::new();
        let scene = host.add_scene("Main");
        let node = host.add_node(scene, None, "Root");
        let components = host.components(node);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].type_name, "Transform");
        assert_eq!(components[0].enabled, None);
    }

    #[test]
    fn test_child_joins_parent_scene() {
        let mut host = SandboxHost::new();
        let main = host.add_scene("Main");
        let other = host.add_scene("Other");
        let root = host.add_node(main, None, "Root");
        let child = host.add_node(other, Some(root), "Child");

        assert_eq!(host.root_nodes(main).len(), 1);
        assert!(host.root_nodes(other).is_empty());
        assert_eq!(host.node(child).and_then(|n| n.parent), Some(root));
    }

    #[test]
    fn test_destroy_node_removes_subtree() {
        let mut host = SandboxHost::new();
        let scene = host.add_scene("Main");
        let root = host.add_node(scene, None, "Root");
        let child = host.add_node(scene, Some(root), "Child");
        let grandchild = host.add_node(scene, Some(child), "Grandchild");

        host.destroy_node(child);

        assert!(host.node(child).is_none());
        assert!(host.node(grandchild).is_none());
        assert_eq!(host.node(root).map(|n| n.child_count), Some(0));
    }

    #[test]
    fn test_unload_scene_moves_active_scene() {
        let mut host = SandboxHost::new();
        let main = host.add_scene("Main");
        let other = host.add_scene("Other");
        let root = host.add_node(main, None, "Root");

        host.unload_scene(main);

        assert!(host.scene(main).is_none());
        assert!(host.node(root).is_none());
        assert_eq!(host.active_scene(), Some(other));
    }
}
