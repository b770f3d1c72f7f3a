//! Builds complete documentation comments for undocumented declarations.

use crate::accessors;
use crate::composer;
use crate::config::Settings;
use crate::declaration::{Declaration, DeclarationKind, Parameter};
use crate::doc::{DocComment, DocNode};
use crate::error::{Error, Result};
use crate::oracle::SemanticOracle;
use log::debug;

/// Documentation comment builder.
///
/// Holds no state beyond its settings and oracle, so assembling the same declaration
/// twice yields identical comments.
pub struct Assembler<'a> {
    settings: &'a Settings,
    oracle: &'a dyn SemanticOracle,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler.
    ///
    /// # Arguments
    ///
    /// * `settings` - Phrases and generation switches
    /// * `oracle` - Resolves return types for return documentation
    pub fn new(settings: &'a Settings, oracle: &'a dyn SemanticOracle) -> Self {
        Self { settings, oracle }
    }

    /// Builds the full documentation comment for a declaration.
    ///
    /// The layout is summary, type parameters, parameters, returns and exceptions, each
    /// element after the first preceded by a line break.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedDeclarationKind`] for operators, conversion operators and
    ///   namespaces
    /// - [`Error::CoveredByInheritDoc`] for overriding or interface-implementing methods
    ///   and properties
    /// - [`Error::MissingContainingType`] for constructors and destructors without a
    ///   containing type
    pub fn assemble(&self, declaration: &Declaration) -> Result<DocComment> {
        debug!("Assembling documentation for {} `{}`", declaration.kind, declaration.name);

        let resources = &self.settings.resources;
        let mut comment = DocComment::new();

        match declaration.kind {
            DeclarationKind::Method | DeclarationKind::Delegate => {
                if declaration.kind == DeclarationKind::Method
                    && declaration.is_covered_by_inheritdoc()
                {
                    return Err(Error::CoveredByInheritDoc(declaration.name.clone()));
                }

                comment.push_element(DocNode::summary(composer::method_summary(
                    &declaration.name,
                    self.settings.inflect_method_verbs,
                )));
                self.push_type_parameters(&mut comment, &declaration.type_parameters);
                self.push_parameters(&mut comment, &declaration.parameters);
                self.push_returns(&mut comment, declaration);

                if declaration.kind == DeclarationKind::Method {
                    for thrown in declaration.thrown_exception_types() {
                        comment.push_element(DocNode::exception(composer::type_reference(thrown)));
                    }
                }
            }
            DeclarationKind::Constructor | DeclarationKind::Destructor => {
                let containing = declaration
                    .containing_type
                    .as_ref()
                    .ok_or_else(|| Error::MissingContainingType(declaration.name.clone()))?;

                comment.push_element(DocNode::Summary {
                    content: composer::constructor_summary(
                        containing,
                        declaration.kind == DeclarationKind::Destructor,
                        resources,
                    ),
                });
                self.push_parameters(&mut comment, &declaration.parameters);
            }
            DeclarationKind::Property => {
                if declaration.is_covered_by_inheritdoc() {
                    return Err(Error::CoveredByInheritDoc(declaration.name.clone()));
                }

                let visibility =
                    accessors::analyze(&declaration.accessors, declaration.accessibility);
                comment.push_element(DocNode::summary(composer::property_summary(
                    &declaration.name,
                    visibility,
                    declaration.value_type.as_ref().is_some_and(|ty| ty.is_boolean()),
                )));
            }
            DeclarationKind::Indexer => {
                let visibility =
                    accessors::analyze(&declaration.accessors, declaration.accessibility);
                comment.push_element(DocNode::summary(composer::indexer_summary(
                    visibility,
                    resources,
                )));
                self.push_parameters(&mut comment, &declaration.parameters);
                comment.push_element(DocNode::returns(resources.indexer_returns.clone()));
            }
            DeclarationKind::Event => {
                comment.push_element(DocNode::summary(composer::event_summary(
                    &declaration.name,
                    resources,
                )));
            }
            DeclarationKind::Class | DeclarationKind::Struct | DeclarationKind::Interface => {
                let is_interface = declaration.kind == DeclarationKind::Interface;
                comment.push_element(DocNode::summary(composer::common_text(
                    &declaration.name,
                    is_interface,
                )));
                self.push_type_parameters(&mut comment, &declaration.type_parameters);
            }
            DeclarationKind::Enum | DeclarationKind::Field => {
                comment.push_element(DocNode::summary(composer::common_text(
                    &declaration.name,
                    false,
                )));
            }
            DeclarationKind::EnumMember => {
                comment.push_element(DocNode::summary(composer::enum_member_summary(
                    &declaration.name,
                )));
            }
            DeclarationKind::Operator
            | DeclarationKind::ConversionOperator
            | DeclarationKind::Namespace => {
                return Err(Error::UnsupportedDeclarationKind(declaration.kind));
            }
        }

        debug!("Assembled {} nodes for `{}`", comment.len(), declaration.name);
        Ok(comment)
    }

    /// Builds the param element for one parameter.
    pub fn parameter_node(&self, parameter: &Parameter) -> DocNode {
        DocNode::param(
            parameter.name.clone(),
            composer::parameter_text(&parameter.name, parameter.ty.is_boolean()),
        )
    }

    fn push_type_parameters(&self, comment: &mut DocComment, type_parameters: &[String]) {
        for name in type_parameters {
            comment.push_element(DocNode::type_param(
                name.clone(),
                composer::type_parameter_text(name),
            ));
        }
    }

    fn push_parameters(&self, comment: &mut DocComment, parameters: &[Parameter]) {
        for parameter in parameters {
            comment.push_element(self.parameter_node(parameter));
        }
    }

    fn push_returns(&self, comment: &mut DocComment, declaration: &Declaration) {
        let Some(return_type) = &declaration.return_type else {
            return;
        };

        match composer::return_content(return_type, self.oracle, &self.settings.resources) {
            Some(content) => comment.push_element(DocNode::Returns { content }),
            None => debug!("No return documentation for `{}` ({})", declaration.name, return_type),
        }
    }
}
