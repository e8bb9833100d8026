use crate::{
    model::{AnnotatedType, GeneratedUnit},
    render,
};
use std::fmt::Write;
use thiserror::Error as ThisError;

///
/// SynthError
///

#[derive(Debug, ThisError)]
pub enum SynthError {
    #[error("duplicate public property '{name}' on type '{type_name}'")]
    DuplicateProperty { type_name: String, name: String },
}

/// Synthesize the augmenting source unit for one annotated type.
///
/// The unit opens an anonymous `const` scope (modules cannot be re-opened;
/// the `include!` site supplies the namespace context), replays the captured
/// import directives, and re-opens the type with an `impl` block holding the
/// two generated members:
///
/// - `PROPERTY_TYPES`: name → rendered type reference, declaration order;
/// - `get_value`: match dispatch over the known names, returning the live
///   field as `&dyn Any` or `UnknownProperty` for anything else.
///
/// Both members carry the type's own declared visibility, so the generated
/// surface reaches exactly as far as the hand-written type does.
pub fn synthesize(ty: &AnnotatedType) -> Result<GeneratedUnit, SynthError> {
    if let Some(name) = ty.properties.first_duplicate() {
        return Err(SynthError::DuplicateProperty {
            type_name: ty.name.clone(),
            name: name.to_string(),
        });
    }

    let vis = match render::visibility_literal(ty.visibility) {
        "" => String::new(),
        literal => format!("{literal} "),
    };

    let mut out = String::new();
    out.push_str("#[allow(unused_imports)]\n");
    out.push_str("const _: () = {\n");

    for import in &ty.imports {
        let _ = writeln!(out, "    {import}");
    }
    out.push('\n');

    let _ = writeln!(out, "    impl {} {{", ty.name);

    let _ = writeln!(
        out,
        "        {vis}const PROPERTY_TYPES: &'static [(&'static str, &'static str)] = &["
    );
    for property in &ty.properties {
        let _ = writeln!(
            out,
            "            (\"{}\", \"{}\"),",
            property.name,
            render::type_ref(&property.ty)
        );
    }
    out.push_str("        ];\n");
    out.push('\n');

    let _ = writeln!(
        out,
        "        {vis}fn get_value(&self, name: &str) -> Result<&dyn ::core::any::Any, ::reflectgen::UnknownProperty> {{"
    );
    out.push_str("            match name {\n");
    for property in &ty.properties {
        let _ = writeln!(
            out,
            "                \"{0}\" => Ok(&self.{0}),",
            property.name
        );
    }
    out.push_str("                _ => Err(::reflectgen::UnknownProperty::new(name)),\n");
    out.push_str("            }\n");
    out.push_str("        }\n");

    out.push_str("    }\n");
    out.push_str("};\n");

    Ok(GeneratedUnit {
        key: ty.key(),
        content: out,
    })
}
