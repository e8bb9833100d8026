//! Runtime surface for generated code.
//!
//! ## Crate layout
//! - `core`: pure model, type-reference renderer, and synthesizer.
//! - `build`: the build-script driver (consume as a build-dependency).
//! - `macros`: the `#[reflect]` marker attribute, re-exported here.
//!
//! Generated units reference this crate by absolute path, so it is the only
//! runtime dependency a consumer needs; the `syn`-heavy driver stays out of
//! the runtime tree.

pub use reflectgen_macros::reflect;

use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// PropertyTypes
///
/// Shape of the generated `PROPERTY_TYPES` member: property name → rendered
/// type reference, in source declaration order.
///

pub type PropertyTypes = &'static [(&'static str, &'static str)];

/// Linear lookup of a property's rendered type reference.
#[must_use]
pub fn property_type(types: PropertyTypes, name: &str) -> Option<&'static str> {
    types
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, ty)| *ty)
}

///
/// UnknownProperty
///
/// Returned by the generated accessor when the requested name is not one of
/// the type's public properties. Always carries the offending name; the
/// accessor never falls back to a default value.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown property '{name}'")]
pub struct UnknownProperty {
    name: String,
}

impl UnknownProperty {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The offending property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{PropertyTypes, UnknownProperty, property_type, reflect};
}
