//! Slotmap-backed arenas for scene entities
//!
//! Keys are stable for the lifetime of the arena, so they serve both as
//! shared-ownership handles (material dedup compares keys, not values) and
//! as the source of the run-local identity integers used by token
//! resolution.

use slotmap::{new_key_type, Key, SlotMap};

use super::{Material, RenderSurface};

new_key_type! {
    /// Stable handle to a scene node
    pub struct NodeKey;

    /// Stable handle to a render surface
    pub struct SurfaceKey;

    /// Stable handle to a material
    pub struct MaterialKey;
}

/// A node in the character hierarchy
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Simple (non-qualified) node name
    pub name: String,
    /// Parent back-reference, `None` for a root
    pub parent: Option<NodeKey>,
    /// Children in insertion order
    pub children: Vec<NodeKey>,
    /// Render surface attached to this node, if any
    pub surface: Option<SurfaceKey>,
}

/// Owning store for one character's scene entities
///
/// The hierarchy forms a tree; nodes hold back-references to parents and
/// forward lists of children so traversal needs no global index.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeKey, SceneNode>,
    surfaces: SlotMap<SurfaceKey, RenderSurface>,
    materials: SlotMap<MaterialKey, Material>,
}

impl Scene {
    /// Create an empty scene
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent`, or as a root when `parent` is `None`
    pub fn add_node(&mut self, name: impl Into<String>, parent: Option<NodeKey>) -> NodeKey {
        let key = self.nodes.insert(SceneNode {
            name: name.into(),
            parent,
            children: Vec::new(),
            surface: None,
        });
        if let Some(parent_key) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent_key) {
                parent_node.children.push(key);
            }
        }
        key
    }

    /// Register a material and return its handle
    ///
    /// Sharing a material between surfaces means sharing the returned key.
    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    /// Attach a render surface to `node`
    pub fn attach_surface(&mut self, node: NodeKey, surface: RenderSurface) -> SurfaceKey {
        let key = self.surfaces.insert(surface);
        if let Some(node) = self.nodes.get_mut(node) {
            node.surface = Some(key);
        }
        key
    }

    /// Look up a node
    #[must_use]
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Look up a render surface
    #[must_use]
    pub fn surface(&self, key: SurfaceKey) -> Option<&RenderSurface> {
        self.surfaces.get(key)
    }

    /// Look up a material
    #[must_use]
    pub fn material(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    /// Run-local identity integer for a surface
    ///
    /// Stable within one arena, meaningless across runs.
    #[must_use]
    pub fn surface_identity(key: SurfaceKey) -> u64 {
        key.data().as_ffi()
    }

    /// Run-local identity integer for a material
    #[must_use]
    pub fn material_identity(key: MaterialKey) -> u64 {
        key.data().as_ffi()
    }

    /// Depth-first collection of all surfaces at or below `root`
    ///
    /// Children are visited in insertion order. Callers must not assume
    /// anything beyond completeness of the returned set; the order is a
    /// traversal artifact, not part of the export contract.
    #[must_use]
    pub fn surfaces_under(&self, root: NodeKey) -> Vec<(NodeKey, SurfaceKey)> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            if let Some(surface) = node.surface {
                found.push((key, surface));
            }
            // Reversed push so the first child is visited first
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        found
    }

    /// Number of nodes in the scene
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of render surfaces in the scene
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Number of materials in the scene
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_wires_children() {
        let mut scene = Scene::new();
        let root = scene.add_node("root", None);
        let a = scene.add_node("a", Some(root));
        let b = scene.add_node("b", Some(root));

        let root_node = scene.node(root).unwrap();
        assert_eq!(root_node.children, vec![a, b]);
        assert_eq!(scene.node(a).unwrap().parent, Some(root));
        assert_eq!(scene.node(b).unwrap().parent, Some(root));
    }

    #[test]
    fn test_surfaces_under_finds_all_depths() {
        let mut scene = Scene::new();
        let root = scene.add_node("root", None);
        let mid = scene.add_node("mid", Some(root));
        let leaf = scene.add_node("leaf", Some(mid));
        let sibling = scene.add_node("sibling", Some(root));

        scene.attach_surface(root, RenderSurface::new("s_root", vec![]));
        scene.attach_surface(leaf, RenderSurface::new("s_leaf", vec![]));
        scene.attach_surface(sibling, RenderSurface::new("s_sibling", vec![]));

        let found = scene.surfaces_under(root);
        assert_eq!(found.len(), 3);

        let nodes: Vec<NodeKey> = found.iter().map(|(node, _)| *node).collect();
        assert!(nodes.contains(&root));
        assert!(nodes.contains(&leaf));
        assert!(nodes.contains(&sibling));
    }

    #[test]
    fn test_surfaces_under_depth_first_order() {
        let mut scene = Scene::new();
        let root = scene.add_node("root", None);
        let first = scene.add_node("first", Some(root));
        let second = scene.add_node("second", Some(root));
        let first_child = scene.add_node("first_child", Some(first));

        scene.attach_surface(first, RenderSurface::new("s_first", vec![]));
        scene.attach_surface(first_child, RenderSurface::new("s_first_child", vec![]));
        scene.attach_surface(second, RenderSurface::new("s_second", vec![]));

        let names: Vec<String> = scene
            .surfaces_under(root)
            .iter()
            .map(|(_, s)| scene.surface(*s).unwrap().name.clone())
            .collect();
        assert_eq!(names, vec!["s_first", "s_first_child", "s_second"]);
    }

    #[test]
    fn test_surfaces_under_empty_hierarchy() {
        let mut scene = Scene::new();
        let root = scene.add_node("root", None);
        assert!(scene.surfaces_under(root).is_empty());
    }

    #[test]
    fn test_identity_is_stable_within_arena() {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::new("M", "S"));
        assert_eq!(Scene::material_identity(mat), Scene::material_identity(mat));
    }
}
