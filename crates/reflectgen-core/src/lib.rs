//! Pure generation core: the annotated-type model, the type-reference
//! renderer, and the declaration synthesizer.
//!
//! Everything here is a pure function of its input. File I/O, source
//! parsing, and marker matching live in `reflectgen-build`; this crate can
//! be driven in parallel and cached by content hash of its inputs.

pub mod model;
pub mod render;
pub mod synth;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        model::{AnnotatedType, GeneratedUnit, Property, PropertyList, TypeRef, Visibility},
        synth::{SynthError, synthesize},
    };
}
