//! Type classification and type descriptions.
//!
//! A [`TypeShape`] is the closed set of forms the description rules care about. The
//! host-shaped [`TypeSyntax`] is lowered into one at the boundary; everything below
//! matches on the shape exhaustively.

use crate::type_syntax::TypeSyntax;
use std::fmt;

/// Marker name that is always described as a list.
const ENUMERABLE_MARKER: &str = "IEnumerable";

/// The classified shape of a type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A predefined keyword type
    Primitive(String),
    /// A bare identifier
    SimpleName(String),
    /// A dotted name, kept as its full text
    QualifiedName(String),
    /// A generic container with its type arguments
    Generic {
        /// Container identifier
        container: String,
        /// Type arguments in declared order
        arguments: Vec<TypeShape>,
    },
    /// An array of the element shape
    Array(Box<TypeShape>),
    /// Anything else, kept as raw text
    Unknown(String),
}

impl From<&TypeSyntax> for TypeShape {
    fn from(ty: &TypeSyntax) -> Self {
        match ty {
            TypeSyntax::Predefined(keyword) => TypeShape::Primitive(keyword.clone()),
            TypeSyntax::Identifier(name) => TypeShape::SimpleName(name.clone()),
            TypeSyntax::Qualified(_) => TypeShape::QualifiedName(ty.to_string()),
            TypeSyntax::Generic { name, arguments } => TypeShape::Generic {
                container: name.clone(),
                arguments: arguments.iter().map(TypeShape::from).collect(),
            },
            TypeSyntax::Array(element) => {
                TypeShape::Array(Box::new(TypeShape::from(element.as_ref())))
            }
            TypeSyntax::Nullable(_) | TypeSyntax::Other(_) => TypeShape::Unknown(ty.to_string()),
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Primitive(text)
            | TypeShape::SimpleName(text)
            | TypeShape::QualifiedName(text)
            | TypeShape::Unknown(text) => write!(f, "{}", text),
            TypeShape::Generic { container, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{}<{}>", container, arguments.join(", "))
            }
            TypeShape::Array(element) => write!(f, "{}[]", element),
        }
    }
}

/// Describes a type as a short sentence such as `An int.` or `A list of Customer.`.
///
/// # Arguments
///
/// * `shape` - The classified type to describe
///
/// # Returns
///
/// A sentence fragment ending in a period.
pub fn describe(shape: &TypeShape) -> String {
    match shape {
        TypeShape::Primitive(text)
        | TypeShape::SimpleName(text)
        | TypeShape::QualifiedName(text)
        | TypeShape::Unknown(text) => general_description(text),
        TypeShape::Array(element) => format!("An array of {}", element_name(element)),
        TypeShape::Generic { container, arguments } => match arguments.first() {
            Some(first) if container.contains("ReadOnlyCollection") => {
                format!("A read only collection of {}", element_name(first))
            }
            Some(first) if container == ENUMERABLE_MARKER || container.contains("List") => {
                format!("A list of {}", element_name(first))
            }
            _ => general_description(container),
        },
    }
}

/// Picks `An` for a vowel-initial noun phrase and `A` otherwise.
///
/// The check is purely orthographic on the first character.
pub fn article(noun_phrase: &str) -> &'static str {
    match noun_phrase.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "An",
        _ => "A",
    }
}

fn general_description(noun_phrase: &str) -> String {
    format!("{} {}.", article(noun_phrase), noun_phrase)
}

/// The bare name used after a fixed lead-in such as `A list of`, with a closing period.
fn element_name(shape: &TypeShape) -> String {
    match shape {
        TypeShape::Primitive(name) | TypeShape::SimpleName(name) => format!("{}.", name),
        TypeShape::Generic { container, .. } => format!("{}.", container),
        other => format!("{}.", other),
    }
}
