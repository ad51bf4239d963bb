//! Collision-resistant document tokens

/// Parent labels with this prefix are stable across runs and usable as
/// human-readable qualifiers
const STABLE_SCOPE_PREFIX: &str = "ca_slot";

/// Computes document tokens for surfaces and materials
///
/// Dual policy: objects scoped under an outfit slot get a stable
/// `name@slot` token (slot names survive re-runs), everything else falls
/// back to an opaque `name#identity` token that is unique only within one
/// run. Readability is preferred whenever the structure allows it.
pub struct TokenResolver;

impl TokenResolver {
    /// Build the document token for an object
    ///
    /// `identity` is the run-local arena identity used only by the fallback
    /// branch.
    #[must_use]
    pub fn token(simple_name: &str, parent_label: &str, identity: u64) -> String {
        if parent_label.starts_with(STABLE_SCOPE_PREFIX) {
            format!("{simple_name}@{parent_label}")
        } else {
            format!("{simple_name}#{identity}")
        }
    }
}
