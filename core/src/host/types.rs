//! Plain data handed across the host boundary
//!
//! Handles are opaque `Copy` ids minted by the host. The overlay never owns
//! host objects; it holds ids and asks the host for fresh snapshots each frame.

use glam::Vec3;

/// Identifies a loaded scene (or the persistent pseudo-scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub u32);

/// Identifies a node in the scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Identifies a component attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

/// Identifies any live engine object (materials, meshes, components...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Snapshot of a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInfo {
    pub id: SceneId,
    /// Scene name; an empty name marks a scene with no valid identity
    pub name: String,
}

/// Snapshot of a node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    pub id: NodeId,
    pub name: String,
    /// The node's own active flag (ignores inactive ancestors)
    pub active_self: bool,
    /// Parent node, `None` for scene roots
    pub parent: Option<NodeId>,
    pub child_count: usize,
}

impl NodeInfo {
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }
}

/// Snapshot of a component in a node's component list
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInfo {
    pub id: ComponentId,
    pub type_name: String,
    /// `Some` when the component carries an enabled flag
    pub enabled: Option<bool>,
}

/// A material as seen from a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialInfo {
    pub id: ObjectId,
    pub name: String,
    pub shader: Option<String>,
    pub main_texture: Option<String>,
}

/// The attached particle renderer of an emitter
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRendererInfo {
    pub type_name: String,
    pub enabled: bool,
}

/// Type-specific detail for the component detail pane
///
/// Closed over the kinds the browser knows how to inspect. Hosts map
/// anything else to [`ComponentDetail::Other`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentDetail {
    Transform {
        local_position: Vec3,
        /// Local rotation as euler angles in degrees
        local_rotation: Vec3,
    },
    Renderer {
        /// Per-instance materials; `None` entries are empty slots
        materials: Vec<Option<MaterialInfo>>,
        shared_materials: Vec<Option<MaterialInfo>>,
    },
    MeshHolder {
        name: String,
        mesh: Option<String>,
    },
    ParticleEmitter {
        name: String,
        main_module: String,
        duration: f32,
        emission_module: String,
        emission_enabled: bool,
        renderer: Option<ParticleRendererInfo>,
    },
    Other,
}

/// Result of resolving a `(type name, module name)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedType {
    /// Fully qualified type name as the host reports it
    pub full_name: String,
    /// Host-specific key identifying the type; instance queries match on it
    pub key: u64,
}

/// A shared material reference held by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRef {
    pub id: ObjectId,
    pub name: String,
}

/// Type-specific facts the lister annotates rows with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Material {
        shader: Option<String>,
    },
    Renderer {
        /// Shared material slots; `None` entries are empty
        shared_materials: Vec<Option<MaterialRef>>,
    },
    Other,
}

/// A live object returned by an instance query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveObject {
    pub id: ObjectId,
    /// Runtime type name of the instance (may be a subtype of the query)
    pub type_name: String,
    pub name: String,
    pub kind: ObjectKind,
}
