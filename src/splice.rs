//! Inserting a missing `<param>` element into an existing documentation comment.
//!
//! The new element goes where declaration order says it belongs: right after the last
//! documented parameter that precedes it, or before the first documented parameter that
//! follows it. When no parameter is documented yet it follows the last type parameter,
//! then the summary, then the first element of the comment.

use crate::assembler::Assembler;
use crate::declaration::Declaration;
use crate::doc::{DocComment, DocNode, DocNodeKind};
use crate::error::{Error, Result};
use log::debug;

/// Where a new element is placed relative to an existing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Insert the element and then a line break in front of the node at this index.
    Before(usize),
    /// Insert a line break and then the element after the node at this index.
    After(usize),
}

/// Finds the anchor for documenting the parameter at `target_index`.
///
/// The new element goes in front of the first documented parameter declared after the
/// target. Documented parameters declared before it, and names the declaration does not
/// know, are walked past so the new element lands after the last of them.
///
/// # Arguments
///
/// * `comment` - The existing documentation comment
/// * `declared` - Parameter names in declaration order
/// * `target_index` - Position of the parameter to document
///
/// # Errors
///
/// Returns [`Error::EmptyDocumentation`] if the comment has no element to anchor to.
pub fn resolve_anchor(
    comment: &DocComment,
    declared: &[&str],
    target_index: usize,
) -> Result<Anchor> {
    let mut last_matched = None;

    for (index, node) in comment.nodes().iter().enumerate() {
        if node.kind() != DocNodeKind::Param {
            continue;
        }
        let Some(name) = node.name() else {
            continue;
        };

        match declared.iter().position(|declared_name| *declared_name == name) {
            Some(position) if position > target_index => return Ok(Anchor::Before(index)),
            _ => last_matched = Some(index),
        }
    }

    if let Some(index) = last_matched {
        return Ok(Anchor::After(index));
    }

    comment
        .positions(DocNodeKind::TypeParam)
        .last()
        .or_else(|| comment.positions(DocNodeKind::Summary).next())
        .or_else(|| comment.nodes().iter().position(DocNode::is_content))
        .map(Anchor::After)
        .ok_or(Error::EmptyDocumentation)
}

/// Returns a copy of `comment` with `node` placed at `anchor`.
pub fn splice(comment: &DocComment, anchor: Anchor, node: DocNode) -> DocComment {
    match anchor {
        Anchor::Before(index) => comment.with_inserted(index, [node, DocNode::NewLine]),
        Anchor::After(index) => comment.with_inserted(index + 1, [DocNode::NewLine, node]),
    }
}

/// Documents one parameter of `declaration` in `comment`.
///
/// # Errors
///
/// - [`Error::UnknownParameter`] if the declaration has no parameter with that name
/// - [`Error::ParameterAlreadyDocumented`] if the comment already has a param element for it
/// - [`Error::EmptyDocumentation`] if there is nothing to anchor the new element to
pub fn insert_parameter(
    assembler: &Assembler<'_>,
    declaration: &Declaration,
    comment: &DocComment,
    parameter: &str,
) -> Result<DocComment> {
    let target_index = declaration
        .parameter_index(parameter)
        .ok_or_else(|| Error::UnknownParameter(parameter.to_string()))?;

    if comment.documents_parameter(parameter) {
        return Err(Error::ParameterAlreadyDocumented(parameter.to_string()));
    }

    let declared: Vec<&str> = declaration.parameters.iter().map(|p| p.name.as_str()).collect();
    let anchor = resolve_anchor(comment, &declared, target_index)?;
    debug!("Documenting parameter `{}` of `{}` at {:?}", parameter, declaration.name, anchor);

    let node = assembler.parameter_node(&declaration.parameters[target_index]);
    Ok(splice(comment, anchor, node))
}

/// Documents every undocumented parameter of `declaration`, in declaration order.
///
/// Either every missing parameter is inserted or the original comment is left as it was
/// and the first failure is returned.
pub fn insert_missing_parameters(
    assembler: &Assembler<'_>,
    declaration: &Declaration,
    comment: &DocComment,
) -> Result<DocComment> {
    let mut updated = comment.clone();
    for parameter in &declaration.parameters {
        if updated.documents_parameter(&parameter.name) {
            continue;
        }
        updated = insert_parameter(assembler, declaration, &updated, &parameter.name)?;
    }
    Ok(updated)
}
