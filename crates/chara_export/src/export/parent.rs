//! Ancestor-chain search for a stable scope label

use crate::scene::{NodeKey, Scene};

/// Name prefixes marking a node as a scoping boundary
///
/// `ca_slot` = outfit slot, `ct_` = clothing template, `p_cf_body` = body
/// root. Any single match stops the walk.
const ANCHOR_PREFIXES: [&str; 3] = ["ca_slot", "ct_", "p_cf_body"];

/// True when `name` marks an anchor node
fn is_anchor(name: &str) -> bool {
    ANCHOR_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Resolves the logical parent label for a scene node
///
/// Walks the ancestor chain upward, recording the current node's name at
/// each step, and stops at the first anchor-prefixed name. Without a match
/// the root's name is returned. The result is a stable scope label used for
/// disambiguation, not a full path.
pub struct ParentResolver;

impl ParentResolver {
    /// Resolve the scope label for `node`
    ///
    /// Never fails: a node with no ancestors resolves to its own name, and a
    /// stale key resolves to an empty label.
    #[must_use]
    pub fn resolve(scene: &Scene, node: NodeKey) -> String {
        let mut label = String::new();
        let mut current = Some(node);
        while let Some(key) = current {
            let Some(node) = scene.node(key) else {
                break;
            };
            label = node.name.clone();
            if is_anchor(&label) {
                break;
            }
            current = node.parent;
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stops_at_slot_anchor() {
        let mut scene = Scene::new();
        let root = scene.add_node("chara_root", None);
        let slot = scene.add_node("ca_slot03", Some(root));
        let mid = scene.add_node("accessory", Some(slot));
        let leaf = scene.add_node("mesh", Some(mid));

        assert_eq!(ParentResolver::resolve(&scene, leaf), "ca_slot03");
    }

    #[test]
    fn test_resolve_matches_all_anchor_prefixes() {
        let mut scene = Scene::new();
        let root = scene.add_node("chara_root", None);
        let ct = scene.add_node("ct_clothesTop", Some(root));
        let body = scene.add_node("p_cf_body_00", Some(root));
        let under_ct = scene.add_node("a", Some(ct));
        let under_body = scene.add_node("b", Some(body));

        assert_eq!(ParentResolver::resolve(&scene, under_ct), "ct_clothesTop");
        assert_eq!(ParentResolver::resolve(&scene, under_body), "p_cf_body_00");
    }

    #[test]
    fn test_resolve_falls_back_to_root_name() {
        let mut scene = Scene::new();
        let root = scene.add_node("chara_root", None);
        let mid = scene.add_node("no_anchor_here", Some(root));
        let leaf = scene.add_node("mesh", Some(mid));

        assert_eq!(ParentResolver::resolve(&scene, leaf), "chara_root");
    }

    #[test]
    fn test_resolve_node_that_is_its_own_anchor() {
        let mut scene = Scene::new();
        let root = scene.add_node("chara_root", None);
        let slot = scene.add_node("ca_slot01", Some(root));

        assert_eq!(ParentResolver::resolve(&scene, slot), "ca_slot01");
    }

    #[test]
    fn test_resolve_parentless_node_returns_own_name() {
        let mut scene = Scene::new();
        let lone = scene.add_node("orphan", None);

        assert_eq!(ParentResolver::resolve(&scene, lone), "orphan");
    }
}
