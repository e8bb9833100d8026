use serde::Serialize;
use std::collections::HashSet;

///
/// Visibility
///
/// Declared visibility of an annotated type, as captured from source.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub enum Visibility {
    #[default]
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
}

///
/// TypeRef
///
/// Semantic description of a property type, detached from the host parser.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum TypeRef {
    /// A named type: path segments plus any generic type arguments.
    Named { path: Vec<String>, args: Vec<TypeRef> },

    /// An array or slice over an element type; nests once per dimension.
    Array(Box<TypeRef>),

    /// Any other category, carried as its default textual form.
    Verbatim(String),
}

impl TypeRef {
    #[must_use]
    pub fn named(path: &[&str]) -> Self {
        Self::Named {
            path: path.iter().map(ToString::to_string).collect(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn array(elem: Self) -> Self {
        Self::Array(Box::new(elem))
    }
}

///
/// Property
///
/// One public property: a valid identifier plus its type reference.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub ty: TypeRef,
}

///
/// PropertyList
///
/// Public properties in source declaration order. The order is preserved
/// verbatim into the generated mapping and dispatch.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct PropertyList {
    pub properties: Vec<Property>,
}

impl PropertyList {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// First name that appears more than once, in declaration order.
    #[must_use]
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::new();

        self.properties
            .iter()
            .find(|p| !seen.insert(p.name.as_str()))
            .map(|p| p.name.as_str())
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

///
/// AnnotatedType
///
/// The unit of work: one marker-carrying type as captured from the host's
/// item tree. Constructed once per matched declaration, immutable, and
/// discarded after its unit is produced.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct AnnotatedType {
    /// Dotted namespace, empty at the crate root.
    pub namespace: String,
    pub name: String,
    pub visibility: Visibility,
    pub properties: PropertyList,
    /// Import directives in scope at the original declaration, in order.
    pub imports: Vec<String>,
}

impl AnnotatedType {
    /// Unit key: `namespace.TypeName`, or just the name at the crate root.
    #[must_use]
    pub fn key(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

///
/// GeneratedUnit
///
/// One self-contained block of synthesized source text, keyed by the type
/// it augments.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct GeneratedUnit {
    pub key: String,
    pub content: String,
}
