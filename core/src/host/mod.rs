//! Host runtime surfaces consumed by the overlay
//!
//! The overlay does not store or own scene data. Each frame it asks the host
//! for snapshots through these traits and issues mutations back through them.
//!
//! - [`SceneGraph`] - scenes, nodes, components and their live flags
//! - [`ObjectReflection`] - type lookup and live-instance queries
//! - [`MemoryInstrumentation`] - optional retained-size reporting

mod types;

pub use types::*;

/// Live scene graph of the host application
pub trait SceneGraph {
    /// All currently loaded scenes, in load order
    fn loaded_scenes(&self) -> Vec<SceneInfo>;

    /// The pseudo-scene holding objects that survive scene transitions
    fn persistent_scene(&self) -> SceneInfo;

    /// The scene new objects are created in, if any
    fn active_scene(&self) -> Option<SceneId>;

    /// Look up a scene; `None` once it has been unloaded
    fn scene(&self, id: SceneId) -> Option<SceneInfo>;

    /// Top-level nodes of a scene, in hierarchy order
    fn root_nodes(&self, scene: SceneId) -> Vec<NodeInfo>;

    /// Look up a node; `None` once it has been destroyed
    fn node(&self, id: NodeId) -> Option<NodeInfo>;

    /// Direct children of a node, in sibling order
    fn children(&self, id: NodeId) -> Vec<NodeInfo>;

    /// Components attached to a node, in attachment order
    fn components(&self, id: NodeId) -> Vec<ComponentInfo>;

    /// Inspectable detail for a component; `None` once it has been destroyed
    fn component_detail(&self, id: ComponentId) -> Option<ComponentDetail>;

    /// Set a node's own active flag
    fn set_node_active(&mut self, id: NodeId, active: bool);

    /// No-op for components without an enabled flag
    fn set_component_enabled(&mut self, id: ComponentId, enabled: bool);

    /// No-op unless `id` is a particle emitter
    fn set_emission_enabled(&mut self, id: ComponentId, enabled: bool);

    /// No-op unless `id` is a particle emitter with an attached renderer
    fn set_particle_renderer_enabled(&mut self, id: ComponentId, enabled: bool);
}

/// Reflection over live engine objects
pub trait ObjectReflection {
    /// Resolve a type by name within a module
    fn resolve_type(&self, type_name: &str, module_name: &str) -> Option<ResolvedType>;

    /// Every live instance of `ty` (subtypes included, hidden objects included)
    ///
    /// The order is host-defined but must be stable for the duration of the call.
    fn find_objects_of_type(&self, ty: &ResolvedType) -> Vec<LiveObject>;
}

/// Retained-size reporting for live objects
pub trait MemoryInstrumentation {
    /// Retained bytes of one live object
    ///
    /// Returns `None` when instrumentation is not available in this build.
    fn retained_bytes(&self, object: ObjectId) -> Option<u64>;
}

/// Instrumentation for builds without memory accounting
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInstrumentation;

impl MemoryInstrumentation for NoInstrumentation {
    fn retained_bytes(&self, _object: ObjectId) -> Option<u64> {
        None
    }
}
