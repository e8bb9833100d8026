use crate::model::{TypeRef, Visibility};

/// Render a semantic type description as embeddable type-reference text.
///
/// Named types render their simple name only: generated code sits in the
/// declaring module's scope and resolves short names through the copied
/// import directives. Arrays append one `[]` suffix per dimension.
///
/// Total over any description the host can produce.
#[must_use]
pub fn type_ref(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Array(elem) => format!("{}[]", type_ref(elem)),
        TypeRef::Named { path, args } => {
            let simple = path.last().map_or("", String::as_str);

            if args.is_empty() {
                simple.to_string()
            } else {
                let args = args.iter().map(type_ref).collect::<Vec<_>>().join(", ");
                format!("{simple}<{args}>")
            }
        }
        TypeRef::Verbatim(text) => text.clone(),
    }
}

/// Textual keyword for a declared visibility. Private renders empty, so a
/// degraded input still produces compilable output.
#[must_use]
pub const fn visibility_literal(vis: Visibility) -> &'static str {
    match vis {
        Visibility::Private => "",
        Visibility::Protected => "pub(super)",
        Visibility::Internal => "pub(crate)",
        Visibility::ProtectedInternal => "pub(in crate)",
        Visibility::Public => "pub",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn named_types_render_their_simple_name() {
        let ty = TypeRef::named(&["std", "string", "String"]);

        assert_eq!(type_ref(&ty), "String");
    }

    #[test]
    fn generic_arguments_render_recursively() {
        let ty = TypeRef::Named {
            path: vec!["std".to_string(), "vec".to_string(), "Vec".to_string()],
            args: vec![TypeRef::named(&["std", "string", "String"])],
        };

        assert_eq!(type_ref(&ty), "Vec<String>");
    }

    #[test]
    fn arrays_compose_one_suffix_per_dimension() {
        let ty = TypeRef::array(TypeRef::array(TypeRef::named(&["u8"])));

        assert_eq!(type_ref(&ty), "u8[][]");
    }

    #[test]
    fn verbatim_passes_through_unchanged() {
        let ty = TypeRef::Verbatim("& 'static str".to_string());

        assert_eq!(type_ref(&ty), "& 'static str");
    }

    #[test]
    fn empty_path_renders_empty_rather_than_failing() {
        let ty = TypeRef::Named {
            path: Vec::new(),
            args: Vec::new(),
        };

        assert_eq!(type_ref(&ty), "");
    }

    #[test]
    fn visibility_literals() {
        assert_eq!(visibility_literal(Visibility::Private), "");
        assert_eq!(visibility_literal(Visibility::Protected), "pub(super)");
        assert_eq!(visibility_literal(Visibility::Internal), "pub(crate)");
        assert_eq!(
            visibility_literal(Visibility::ProtectedInternal),
            "pub(in crate)"
        );
        assert_eq!(visibility_literal(Visibility::Public), "pub");
    }

    proptest! {
        #[test]
        fn last_segment_wins(segments in prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,8}", 1..5)) {
            let ty = TypeRef::Named { path: segments.clone(), args: Vec::new() };

            prop_assert_eq!(type_ref(&ty), segments.last().unwrap().clone());
        }

        #[test]
        fn array_depth_adds_suffixes(depth in 0_usize..6) {
            let mut ty = TypeRef::named(&["u8"]);
            for _ in 0..depth {
                ty = TypeRef::array(ty);
            }

            prop_assert_eq!(type_ref(&ty), format!("u8{}", "[]".repeat(depth)));
        }
    }
}
