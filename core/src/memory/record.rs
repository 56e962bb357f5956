//! Rows of the object list

use hashbrown::HashSet;

use crate::host::{LiveObject, ObjectKind};

/// One live object as listed by the memory lister
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    /// Instance name; may be empty
    pub display_name: String,
    pub type_name: String,
    pub retained_bytes: u64,
    /// Position in the host's instance query
    pub discovery_index: usize,
    /// Shader name for materials, first shared material for renderers
    pub annotation: Option<String>,
    /// Renderer referencing more than one distinct shared material
    pub annotation_flagged: bool,
}

impl ObjectRecord {
    /// Build a row from a live object and its retained size
    pub fn from_live(discovery_index: usize, object: &LiveObject, retained_bytes: u64) -> Self {
        let (annotation, annotation_flagged) = annotate(&object.kind);
        Self {
            display_name: object.name.clone(),
            type_name: object.type_name.clone(),
            retained_bytes,
            discovery_index,
            annotation,
            annotation_flagged,
        }
    }

    /// Whether the name should be shown as the `<No Name>` placeholder
    pub fn is_unnamed(&self) -> bool {
        self.display_name.trim().is_empty()
    }
}

fn annotate(kind: &ObjectKind) -> (Option<String>, bool) {
    match kind {
        ObjectKind::Material { shader } => (shader.clone(), false),
        ObjectKind::Renderer { shared_materials } => {
            let Some(first) = shared_materials.first().and_then(Option::as_ref) else {
                return (None, false);
            };
            let distinct: HashSet<_> = shared_materials.iter().flatten().map(|m| m.id).collect();
            (Some(first.name.clone()), distinct.len() > 1)
        }
        ObjectKind::Other => (None, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MaterialRef, ObjectId};

    fn material(id: u64, name: &str) -> Option<MaterialRef> {
        Some(MaterialRef {
            id: ObjectId(id),
            name: name.to_string(),
        })
    }

    fn renderer(shared_materials: Vec<Option<MaterialRef>>) -> LiveObject {
        LiveObject {
            id: ObjectId(1),
            type_name: "MeshRenderer".to_string(),
            name: "Hero".to_string(),
            kind: ObjectKind::Renderer { shared_materials },
        }
    }

    #[test]
    fn test_material_annotated_with_shader() {
        let object = LiveObject {
            id: ObjectId(7),
            type_name: "Material".to_string(),
            name: "Skin".to_string(),
            kind: ObjectKind::Material {
                shader: Some("Standard".to_string()),
            },
        };
        let record = ObjectRecord::from_live(3, &object, 2048);
        assert_eq!(record.annotation.as_deref(), Some("Standard"));
        assert!(!record.annotation_flagged);
        assert_eq!(record.discovery_index, 3);
        assert_eq!(record.retained_bytes, 2048);
    }

    #[test]
    fn test_material_without_shader_has_no_annotation() {
        let object = LiveObject {
            id: ObjectId(7),
            type_name: "Material".to_string(),
            name: "Skin".to_string(),
            kind: ObjectKind::Material { shader: None },
        };
        assert_eq!(ObjectRecord::from_live(0, &object, 0).annotation, None);
    }

    #[test]
    fn test_renderer_with_one_material_not_flagged() {
        let record = ObjectRecord::from_live(0, &renderer(vec![material(10, "Skin")]), 0);
        assert_eq!(record.annotation.as_deref(), Some("Skin"));
        assert!(!record.annotation_flagged);
    }

    #[test]
    fn test_renderer_with_two_distinct_materials_flagged() {
        let record = ObjectRecord::from_live(
            0,
            &renderer(vec![material(10, "Skin"), material(11, "Cloth")]),
            0,
        );
        assert_eq!(record.annotation.as_deref(), Some("Skin"));
        assert!(record.annotation_flagged);
    }

    #[test]
    fn test_renderer_repeating_one_material_not_flagged() {
        let record = ObjectRecord::from_live(
            0,
            &renderer(vec![material(10, "Skin"), material(10, "Skin")]),
            0,
        );
        assert!(!record.annotation_flagged);
    }

    #[test]
    fn test_renderer_with_empty_first_slot_has_no_annotation() {
        let record = ObjectRecord::from_live(0, &renderer(vec![None, material(10, "Skin")]), 0);
        assert_eq!(record.annotation, None);
        assert!(!record.annotation_flagged);
    }

    #[test]
    fn test_blank_names_are_unnamed() {
        let mut object = renderer(Vec::new());
        object.name = "   ".to_string();
        assert!(ObjectRecord::from_live(0, &object, 0).is_unnamed());
    }
}
