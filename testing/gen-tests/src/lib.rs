//! End-to-end fixtures for the generation pipeline: `build.rs` runs the
//! real driver over `src/models.rs` and the tests exercise the generated
//! members at runtime.

pub mod models;
