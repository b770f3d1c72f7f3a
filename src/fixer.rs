//! Fix requests and their outcomes.
//!
//! A [`FixRequest`] pairs a declaration with the kind of fix the host wants: a complete
//! comment for an undocumented declaration, or missing `<param>` elements for an
//! existing one. [`Fixer::apply`] never fails; a fix that cannot be produced comes back
//! as a [`FixOutcome`] that is not offered, with the reason.

use crate::assembler::Assembler;
use crate::config::Settings;
use crate::declaration::Declaration;
use crate::doc::DocComment;
use crate::error::Result;
use crate::oracle::SemanticOracle;
use crate::render::render;
use crate::splice;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// The fix a host asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fix", rename_all = "snake_case")]
pub enum FixKind {
    /// Generate a full comment for an undocumented declaration
    Document,
    /// Add one missing `<param>` element to an existing comment
    DocumentParameter {
        parameter: String,
        existing: DocComment,
    },
    /// Add every missing `<param>` element to an existing comment
    DocumentParameters { existing: DocComment },
}

/// One fix request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRequest {
    /// Identifier echoed back in the outcome
    #[serde(default)]
    pub id: Option<String>,
    /// Leading whitespace of the declaration, repeated on every generated line
    #[serde(default)]
    pub indentation: String,
    #[serde(flatten)]
    pub fix: FixKind,
    pub declaration: Declaration,
}

/// Result of one fix request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the declaration the request was about
    pub declaration: String,
    /// Whether a fix is offered
    pub offered: bool,
    /// Why no fix is offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The fixed documentation comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<DocComment>,
    /// The fixed comment rendered as documentation trivia
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Applies fix requests with one set of settings and one oracle.
pub struct Fixer<'a> {
    settings: &'a Settings,
    assembler: Assembler<'a>,
}

impl<'a> Fixer<'a> {
    pub fn new(settings: &'a Settings, oracle: &'a dyn SemanticOracle) -> Self {
        Self {
            settings,
            assembler: Assembler::new(settings, oracle),
        }
    }

    /// Computes the fixed comment for a request.
    ///
    /// # Errors
    ///
    /// Returns the reason the fix cannot be produced; see [`Assembler::assemble`] and
    /// [`splice::insert_parameter`].
    pub fn fix(&self, request: &FixRequest) -> Result<DocComment> {
        let declaration = &request.declaration;
        match &request.fix {
            FixKind::Document => self.assembler.assemble(declaration),
            FixKind::DocumentParameter { parameter, existing } => {
                splice::insert_parameter(&self.assembler, declaration, existing, parameter)
            }
            FixKind::DocumentParameters { existing } => {
                splice::insert_missing_parameters(&self.assembler, declaration, existing)
            }
        }
    }

    /// Applies a request, turning failures into an outcome that is not offered.
    pub fn apply(&self, request: &FixRequest) -> FixOutcome {
        let declaration = request.declaration.name.clone();

        match self.fix(request) {
            Ok(comment) => {
                debug!("Fix offered for `{}`", declaration);
                let text = render(
                    &comment,
                    self.settings.line_ending.as_str(),
                    &request.indentation,
                );
                FixOutcome {
                    id: request.id.clone(),
                    declaration,
                    offered: true,
                    reason: None,
                    comment: Some(comment),
                    text: Some(text),
                }
            }
            Err(e) => {
                warn!("No fix offered for `{}`: {}", declaration, e);
                FixOutcome {
                    id: request.id.clone(),
                    declaration,
                    offered: false,
                    reason: Some(e.to_string()),
                    comment: None,
                    text: None,
                }
            }
        }
    }

    /// Applies every request in order.
    pub fn apply_all(&self, requests: &[FixRequest]) -> Vec<FixOutcome> {
        requests.iter().map(|request| self.apply(request)).collect()
    }
}
