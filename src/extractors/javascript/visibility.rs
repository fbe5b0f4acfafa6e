//! Access level derivation for JavaScript members
//!
//! JavaScript has no visibility modifiers, so privacy is inferred from the
//! leading-underscore naming convention.

use crate::extractors::base::Access;

/// Derive access in priority order: constructor → static → private → public
pub fn derive_access(name: &str, is_constructor: bool, is_static: bool) -> Access {
    if is_constructor {
        Access::Constructor
    } else if is_static {
        Access::Static
    } else if name.starts_with('_') {
        Access::Private
    } else {
        Access::Public
    }
}
