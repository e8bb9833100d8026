use reflectgen_core::model::{AnnotatedType, Property, PropertyList, TypeRef, Visibility};
use std::fmt::Write;
use syn::{Fields, File, GenericArgument, Item, ItemStruct, ItemUse, PathArguments, UseTree};

/// Attribute name that opts a type into generation.
const MARKER: &str = "reflect";

/// Extract every annotated type from one source string.
///
/// `namespace` is the dotted namespace of the compilation unit itself;
/// inline modules extend it with their own name. Marker matching is coarse
/// on purpose: anything carrying the attribute that is not a struct is
/// skipped silently.
pub fn extract_str(source: &str, namespace: &str) -> Result<Vec<AnnotatedType>, syn::Error> {
    let file: File = syn::parse_file(source)?;

    let mut out = Vec::new();
    walk_items(&file.items, namespace, &[], &mut out);

    Ok(out)
}

/// Join a namespace segment onto a (possibly empty) dotted namespace.
#[must_use]
pub fn child_namespace(namespace: &str, segment: &str) -> String {
    if namespace.is_empty() {
        segment.to_string()
    } else {
        format!("{namespace}.{segment}")
    }
}

fn walk_items(items: &[Item], namespace: &str, inherited: &[String], out: &mut Vec<AnnotatedType>) {
    // Use items anywhere in the scope are in scope for the whole scope.
    let mut imports = inherited.to_vec();
    imports.extend(items.iter().filter_map(|item| match item {
        Item::Use(item_use) => Some(use_directive(item_use)),
        _ => None,
    }));

    for item in items {
        match item {
            Item::Struct(item_struct) if has_marker(&item_struct.attrs) => {
                out.push(annotated_type(item_struct, namespace, &imports));
            }
            Item::Mod(item_mod) => {
                if let Some((_, content)) = &item_mod.content {
                    let ns = child_namespace(namespace, &item_mod.ident.to_string());
                    walk_items(content, &ns, &imports, out);
                }
            }
            _ => {}
        }
    }
}

fn has_marker(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == MARKER)
    })
}

fn annotated_type(item: &ItemStruct, namespace: &str, imports: &[String]) -> AnnotatedType {
    let mut properties = PropertyList::default();

    if let Fields::Named(named) = &item.fields {
        for field in &named.named {
            if !matches!(field.vis, syn::Visibility::Public(_)) {
                continue;
            }
            let ident = field.ident.as_ref().expect("named field");
            properties.push(Property {
                name: ident.to_string(),
                ty: type_ref(&field.ty),
            });
        }
    }

    AnnotatedType {
        namespace: namespace.to_string(),
        name: item.ident.to_string(),
        visibility: visibility(&item.vis),
        properties,
        imports: imports.to_vec(),
    }
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(restricted) => {
            if restricted.path.is_ident("crate") {
                Visibility::Internal
            } else if restricted.path.is_ident("super") {
                Visibility::Protected
            } else if restricted.path.is_ident("self") {
                Visibility::Private
            } else {
                // Lossy: `pub(in path)` keeps no path segments and renders
                // as `pub(in crate)`. The type's own visibility still gates
                // how far the generated members reach.
                Visibility::ProtectedInternal
            }
        }
        syn::Visibility::Inherited => Visibility::Private,
    }
}

fn type_ref(ty: &syn::Type) -> TypeRef {
    match ty {
        syn::Type::Array(array) => TypeRef::Array(Box::new(type_ref(&array.elem))),
        syn::Type::Slice(slice) => TypeRef::Array(Box::new(type_ref(&slice.elem))),
        syn::Type::Path(path) if path.qself.is_none() => {
            let segments = path
                .path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect();

            let args = path.path.segments.last().map_or_else(Vec::new, |segment| {
                match &segment.arguments {
                    PathArguments::AngleBracketed(angle) => angle
                        .args
                        .iter()
                        .filter_map(|arg| match arg {
                            GenericArgument::Type(inner) => Some(type_ref(inner)),
                            _ => None,
                        })
                        .collect(),
                    _ => Vec::new(),
                }
            });

            TypeRef::Named {
                path: segments,
                args,
            }
        }
        other => TypeRef::Verbatim(quote::quote!(#other).to_string()),
    }
}

/// Canonical text for one use item. Visibility qualifiers are dropped: the
/// directive is replayed inside the generated unit's own scope, where only
/// plain `use` items are legal.
fn use_directive(item: &ItemUse) -> String {
    let mut text = String::from("use ");
    if item.leading_colon.is_some() {
        text.push_str("::");
    }
    render_use_tree(&item.tree, &mut text);
    text.push(';');

    text
}

fn render_use_tree(tree: &UseTree, out: &mut String) {
    match tree {
        UseTree::Path(path) => {
            let _ = write!(out, "{}::", path.ident);
            render_use_tree(&path.tree, out);
        }
        UseTree::Name(name) => {
            let _ = write!(out, "{}", name.ident);
        }
        UseTree::Rename(rename) => {
            let _ = write!(out, "{} as {}", rename.ident, rename.rename);
        }
        UseTree::Glob(_) => out.push('*'),
        UseTree::Group(group) => {
            out.push('{');
            for (index, item) in group.items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                render_use_tree(item, out);
            }
            out.push('}');
        }
    }
}
