//! Sample world shown by the viewer

use devscope_core::SandboxComponent;
use devscope_core::SandboxHost;
use devscope_core::host::ObjectId;
use glam::Vec3;

/// Build a small world touching every component kind the browser inspects
pub fn build_world() -> SandboxHost {
    let mut host = SandboxHost::new();
    let mut sized = Vec::new();

    let standard = host.add_shader("Standard");
    let unlit = host.add_shader("Unlit/Color");
    let particles = host.add_shader("Particles/Additive");
    let checker = host.add_texture("Checker");
    let bark = host.add_texture("BarkAlbedo");
    let cube = host.add_mesh("Cube");
    let tree = host.add_mesh("TreeLOD0");
    sized.extend([standard, unlit, particles, checker, bark, cube, tree]);

    let ground = host.add_material("Ground", Some(standard), Some(checker));
    let trunk = host.add_material("Trunk", Some(standard), Some(bark));
    let leaves = host.add_material("Leaves", Some(unlit), None);
    let sparks = host.add_material("Sparks", Some(particles), None);
    let unnamed = host.add_material("", Some(unlit), None);
    sized.extend([ground, trunk, leaves, sparks, unnamed]);

    let main = host.add_scene("Forest");
    host.add_scene("UI");

    let terrain = host.add_node(main, None, "Terrain");
    host.add_component(terrain, SandboxComponent::MeshFilter { mesh: Some(cube) });
    let renderer =
        host.add_component(terrain, SandboxComponent::mesh_renderer(vec![Some(ground)]));
    sized.push(host.component_object(renderer));

    let grove = host.add_node(main, None, "Grove");
    for (i, x) in [-4.0_f32, 0.0, 4.0].into_iter().enumerate() {
        let oak = host.add_node(main, Some(grove), format!("Oak{i}"));
        host.set_transform(oak, Vec3::new(x, 0.0, 2.0), Vec3::new(0.0, 30.0 * i as f32, 0.0));
        host.add_component(oak, SandboxComponent::MeshFilter { mesh: Some(tree) });
        let renderer = host.add_component(
            oak,
            SandboxComponent::mesh_renderer(vec![Some(trunk), Some(leaves)]),
        );
        sized.push(host.component_object(renderer));
        sized.push(host.node_object(oak));
    }

    let campfire = host.add_node(main, None, "Campfire");
    host.set_transform(campfire, Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO);
    host.add_component(
        campfire,
        SandboxComponent::ParticleSystem {
            duration: 5.0,
            emission_enabled: true,
        },
    );
    host.add_component(
        campfire,
        SandboxComponent::ParticleSystemRenderer {
            enabled: true,
            shared_materials: vec![Some(sparks)],
        },
    );
    host.add_component(campfire, SandboxComponent::behaviour("FlickerLight"));

    let player = host.add_node(main, None, "Player");
    host.add_component(player, SandboxComponent::behaviour("PlayerController"));
    host.add_component(
        player,
        SandboxComponent::Plain {
            type_name: "AudioListener".to_string(),
        },
    );

    let persistent = host.persistent_scene_id();
    let manager = host.add_node(persistent, None, "GameManager");
    host.add_component(manager, SandboxComponent::behaviour("SaveSystem"));

    for (i, object) in sized.into_iter().enumerate() {
        host.set_retained_bytes(object, sample_size(i, object));
    }
    host
}

/// Deterministic spread of sizes from a few hundred bytes to a few megabytes
fn sample_size(index: usize, object: ObjectId) -> u64 {
    let seed = (index as u64 + 1).wrapping_mul(2_654_435_761) ^ object.0;
    256 + seed % (4 * 1024 * 1024)
}
