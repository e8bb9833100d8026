//! Build-time driver: parse source files, extract marker-annotated types,
//! and synthesize one generated unit per type.
//!
//! Consumed from a consumer crate's `build.rs`:
//!
//! ```no_run
//! fn main() {
//!     reflectgen_build::generate("src/models.rs", "my_crate.models")
//!         .expect("reflectgen codegen failed");
//! }
//! ```
//!
//! Each unit lands in `OUT_DIR` as `<namespace>.<TypeName>.rs` and is spliced
//! back into the declaring module with `include!`.

mod extract;

pub use extract::extract_str;

use reflectgen_core::{
    model::GeneratedUnit,
    synth::{SynthError, synthesize},
};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("failed to read '{path}'")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}'")]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] syn::Error),

    #[error("OUT_DIR is not set; call generate() from a build script")]
    MissingOutDir,

    #[error(transparent)]
    Synth(#[from] SynthError),
}

/// Extract and synthesize every annotated type in one source string.
pub fn generate_str(source: &str, namespace: &str) -> Result<Vec<GeneratedUnit>, BuildError> {
    let types = extract_str(source, namespace)?;

    types
        .iter()
        .map(|ty| synthesize(ty).map_err(BuildError::from))
        .collect()
}

/// Extract and synthesize every annotated type in one source file.
pub fn generate_file(
    path: impl AsRef<Path>,
    namespace: &str,
) -> Result<Vec<GeneratedUnit>, BuildError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    generate_str(&source, namespace)
}

/// Recursively generate units for every `.rs` file under a directory.
///
/// Namespaces follow the file layout: directories and file stems append a
/// segment, while `lib.rs`, `main.rs`, and `mod.rs` add none. Files are
/// visited in sorted order so output is stable run after run.
pub fn generate_dir(
    dir: impl AsRef<Path>,
    namespace: &str,
) -> Result<Vec<GeneratedUnit>, BuildError> {
    let mut units = Vec::new();
    generate_dir_inner(dir.as_ref(), namespace, &mut units)?;

    Ok(units)
}

fn generate_dir_inner(
    dir: &Path,
    namespace: &str,
    units: &mut Vec<GeneratedUnit>,
) -> Result<(), BuildError> {
    let entries = fs::read_dir(dir).map_err(|source| BuildError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(|source| BuildError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            let Some(segment) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            generate_dir_inner(&path, &extract::child_namespace(namespace, segment), units)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let ns = if matches!(stem, "lib" | "main" | "mod") {
                namespace.to_string()
            } else {
                extract::child_namespace(namespace, stem)
            };
            units.extend(generate_file(&path, &ns)?);
        }
    }

    Ok(())
}

/// Build-script entry: generate units for `src` (a file or a directory,
/// relative to the consumer's manifest directory) and write them to
/// `OUT_DIR`, registering the input for re-run tracking.
pub fn generate(src: impl AsRef<Path>, namespace: &str) -> Result<(), BuildError> {
    let src = src.as_ref();
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or(BuildError::MissingOutDir)?;

    println!("cargo:rerun-if-changed={}", src.display());

    let units = if src.is_dir() {
        generate_dir(src, namespace)?
    } else {
        generate_file(src, namespace)?
    };

    write_units(&out_dir, &units)
}

/// Write each unit to `<out_dir>/<key>.rs`.
pub fn write_units(out_dir: &Path, units: &[GeneratedUnit]) -> Result<(), BuildError> {
    for unit in units {
        let path = out_dir.join(format!("{}.rs", unit.key));
        fs::write(&path, &unit.content).map_err(|source| BuildError::Write {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "
        use std::fmt;

        #[reflect]
        pub struct Person {
            pub name: String,
            pub age: i32,
        }

        pub struct Bystander {
            pub ignored: bool,
        }
    ";

    #[test]
    fn one_unit_per_annotated_type() {
        let units = generate_str(SOURCE, "app").unwrap();

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].key, "app.Person");
        assert!(units[0].content.contains("impl Person {"));
        assert!(units[0].content.contains("(\"name\", \"String\"),"));
        assert!(units[0].content.contains("\"age\" => Ok(&self.age),"));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = generate_str(SOURCE, "app").unwrap();
        let second = generate_str(SOURCE, "app").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_property_names_surface_as_build_errors() {
        let err = generate_str(
            "#[reflect] pub struct Broken { pub x: u8, pub x: u8 }",
            "app",
        );

        assert!(matches!(
            err,
            Err(BuildError::Synth(SynthError::DuplicateProperty { .. }))
        ));
    }

    #[test]
    fn parse_failures_are_reported() {
        assert!(matches!(
            generate_str("pub struct {", "app"),
            Err(BuildError::Parse(_))
        ));
    }
}
