//! Documentation prose.
//!
//! Pure functions from names, types and a few semantic facts to the sentences that go
//! inside documentation elements.

use crate::accessors::AccessorVisibility;
use crate::config::Resources;
use crate::declaration::ContainingType;
use crate::doc::Inline;
use crate::naming::{normalize, normalize_words, phrase, split, third_person};
use crate::oracle::{ReturnSymbol, SemanticOracle};
use crate::type_shape::{describe, TypeShape};
use crate::type_syntax::TypeSyntax;

/// Summary for a method or delegate: `GetValue` → `Gets value.`
///
/// The first word keeps its casing; the rest are lower-cased. With `inflect_verb` the
/// first word is put in the third person.
pub fn method_summary(name: &str, inflect_verb: bool) -> String {
    let mut words = normalize_words(&split(name), false, false);
    if inflect_verb {
        if let Some(first) = words.first_mut() {
            *first = third_person(first);
        }
    }
    format!("{}.", words.join(" "))
}

/// Description of a parameter.
///
/// Boolean parameters read `If true, <words>.`; everything else reads `The <words>.`.
pub fn parameter_text(name: &str, is_boolean: bool) -> String {
    if is_boolean {
        format!("If true, {}.", phrase(name, true))
    } else {
        common_text(name, false)
    }
}

/// Description of a type parameter.
///
/// A lone single-letter name reads `The type of T.`; otherwise a leading single-letter
/// word is dropped and the rest reads `The type of the <words>.`.
pub fn type_parameter_text(name: &str) -> String {
    let words = split(name);
    match words.as_slice() {
        [only] if only.chars().count() == 1 => format!("The type of {}.", only.to_uppercase()),
        _ => format!("The type of the {}.", normalize(&words, true, true)),
    }
}

/// Summary for a property.
///
/// Starts with `Gets` or `Gets or sets` depending on setter visibility. Boolean properties
/// continue with `a value indicating whether`, moving an `is` word in front of the last
/// remaining word.
pub fn property_summary(name: &str, visibility: AccessorVisibility, is_boolean: bool) -> String {
    let mut summary = accessor_prefix(visibility).to_string();

    if is_boolean {
        summary.push_str(" a value indicating whether ");
        summary.push_str(&relocate_is(normalize_words(&split(name), true, false)).join(" "));
    } else {
        summary.push_str(" the ");
        summary.push_str(&phrase(name, true));
    }

    summary.push('.');
    summary
}

/// Summary for an indexer: `Gets the element at the specified index.`
pub fn indexer_summary(visibility: AccessorVisibility, resources: &Resources) -> String {
    format!("{} {}.", accessor_prefix(visibility), resources.indexer_summary_tail)
}

/// Summary for an event: `Occurs when <words>.`
pub fn event_summary(name: &str, resources: &Resources) -> String {
    format!("{}{}.", resources.event_prefix, phrase(name, true))
}

/// `The <words>.` summary used for types, fields and non-boolean parameters.
pub fn common_text(name: &str, skip_leading_single_char: bool) -> String {
    format!("The {}.", normalize(&split(name), true, skip_leading_single_char))
}

/// Summary for an enum member: the split name with its first word untouched.
pub fn enum_member_summary(name: &str) -> String {
    format!("{}.", phrase(name, false))
}

/// Summary for a constructor or destructor, referencing the containing type.
///
/// `Initializes a new instance of the <see cref="Name"/> class.`
pub fn constructor_summary(
    containing: &ContainingType,
    is_destructor: bool,
    resources: &Resources,
) -> Vec<Inline> {
    let lead = if is_destructor {
        &resources.destructor_lead
    } else {
        &resources.constructor_lead
    };

    vec![
        Inline::text(lead.clone()),
        Inline::See(type_cref(containing)),
        Inline::text(format!(" {}.", containing.kind.as_str())),
    ]
}

/// Description of a return value, or `None` when no return documentation applies.
///
/// Awaitable types get a fixed sentence referencing the task type; `void` and types the
/// oracle cannot resolve get nothing; anything else is described by its type shape.
pub fn return_content(
    return_type: &TypeSyntax,
    oracle: &dyn SemanticOracle,
    resources: &Resources,
) -> Option<Vec<Inline>> {
    match oracle.resolve_return_type(return_type)? {
        ReturnSymbol::Void => None,
        ReturnSymbol::Awaitable { generic } => {
            let cref = if generic {
                &resources.generic_task_cref
            } else {
                &resources.task_cref
            };
            Some(vec![
                Inline::text(resources.task_return_lead.clone()),
                Inline::See(cref.clone()),
                Inline::text(resources.task_return_trail.clone()),
            ])
        }
        ReturnSymbol::Value => Some(vec![Inline::Text(return_text(return_type))]),
    }
}

/// Describes a return type by its shape, ignoring semantic facts.
pub fn return_text(return_type: &TypeSyntax) -> String {
    describe(&TypeShape::from(return_type))
}

/// Cross-reference form of a type: `Result<int, string>` becomes `Result{int,string}`.
pub fn type_reference(ty: &TypeSyntax) -> String {
    ty.to_string()
        .replace(", ", ",")
        .replace('<', "{")
        .replace('>', "}")
}

fn accessor_prefix(visibility: AccessorVisibility) -> &'static str {
    if visibility.setter_visible {
        "Gets or sets"
    } else {
        "Gets"
    }
}

/// Moves the first `is` word to just before the last remaining word.
fn relocate_is(mut words: Vec<String>) -> Vec<String> {
    if let Some(position) = words.iter().position(|w| w == "is") {
        let is_word = words.remove(position);
        let target = words.len().saturating_sub(1);
        words.insert(target, is_word);
    }
    words
}

fn type_cref(containing: &ContainingType) -> String {
    if containing.type_parameters.is_empty() {
        containing.name.clone()
    } else {
        format!("{}{{{}}}", containing.name, containing.type_parameters.join(","))
    }
}
