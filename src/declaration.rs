//! Declaration descriptors.
//!
//! A [`Declaration`] is everything the generator needs to know about one member or type,
//! as handed over by the host: its kind, name, signature pieces, accessor facts and a
//! reduced view of its body.

use crate::accessors::{Accessibility, AccessorList};
use crate::type_syntax::TypeSyntax;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration kinds the host can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Method,
    Delegate,
    Constructor,
    Destructor,
    Property,
    Indexer,
    Event,
    Class,
    Interface,
    Struct,
    Enum,
    EnumMember,
    Field,
    Operator,
    ConversionOperator,
    Namespace,
}

impl DeclarationKind {
    /// Lower-case display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Method => "method",
            DeclarationKind::Delegate => "delegate",
            DeclarationKind::Constructor => "constructor",
            DeclarationKind::Destructor => "destructor",
            DeclarationKind::Property => "property",
            DeclarationKind::Indexer => "indexer",
            DeclarationKind::Event => "event",
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::EnumMember => "enum member",
            DeclarationKind::Field => "field",
            DeclarationKind::Operator => "operator",
            DeclarationKind::ConversionOperator => "conversion operator",
            DeclarationKind::Namespace => "namespace",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A formal parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Declared type
    #[serde(rename = "type")]
    pub ty: TypeSyntax,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeSyntax>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Kind of the type that declares a constructor or destructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainingTypeKind {
    #[default]
    Class,
    Struct,
    Record,
}

impl ContainingTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainingTypeKind::Class => "class",
            ContainingTypeKind::Struct => "struct",
            ContainingTypeKind::Record => "record",
        }
    }
}

/// The type enclosing a constructor or destructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainingType {
    pub name: String,
    #[serde(default)]
    pub kind: ContainingTypeKind,
    #[serde(default)]
    pub type_parameters: Vec<String>,
}

/// A statement in a member body, reduced to what throw discovery needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// `throw expr;` or a bare `throw;`
    Throw {
        #[serde(default)]
        expression: Option<Expression>,
    },
    /// A nested block (loop bodies, branches, `try` blocks)
    Block { statements: Vec<Statement> },
    /// An expression statement
    Expression { expression: Expression },
    /// Anything without nested statements
    Other,
}

/// An expression, reduced to what throw discovery needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    /// `new T(...)`
    ObjectCreation {
        #[serde(rename = "type")]
        ty: TypeSyntax,
    },
    /// A reference to a local, parameter or field
    Identifier { name: String },
    /// A lambda or anonymous method with its own body
    Lambda { body: Vec<Statement> },
    Other,
}

/// Everything the generator knows about one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type of methods and delegates
    #[serde(default)]
    pub return_type: Option<TypeSyntax>,
    /// Value type of properties, indexers, fields and events
    #[serde(default, rename = "type")]
    pub value_type: Option<TypeSyntax>,
    /// Effective accessibility of the declaration
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub accessors: AccessorList,
    /// Enclosing type, required for constructors and destructors
    #[serde(default)]
    pub containing_type: Option<ContainingType>,
    #[serde(default)]
    pub body: Vec<Statement>,
    #[serde(default)]
    pub is_override: bool,
    /// Interface named by an explicit interface implementation
    #[serde(default)]
    pub explicit_interface: Option<String>,
    #[serde(default)]
    pub implements_interface_member: bool,
}

impl Declaration {
    /// Creates a declaration with only a kind and a name.
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: None,
            value_type: None,
            accessibility: Accessibility::Public,
            accessors: AccessorList::default(),
            containing_type: None,
            body: Vec::new(),
            is_override: false,
            explicit_interface: None,
            implements_interface_member: false,
        }
    }

    pub fn with_type_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<TypeSyntax>) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn with_return_type(mut self, ty: impl Into<TypeSyntax>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn with_value_type(mut self, ty: impl Into<TypeSyntax>) -> Self {
        self.value_type = Some(ty.into());
        self
    }

    pub fn with_accessors(mut self, accessors: AccessorList) -> Self {
        self.accessors = accessors;
        self
    }

    pub fn with_containing_type(mut self, containing_type: ContainingType) -> Self {
        self.containing_type = Some(containing_type);
        self
    }

    pub fn with_body(mut self, body: Vec<Statement>) -> Self {
        self.body = body;
        self
    }

    /// Whether the documentation comes from an overridden or implemented member.
    pub fn is_covered_by_inheritdoc(&self) -> bool {
        self.is_override || self.explicit_interface.is_some() || self.implements_interface_member
    }

    /// Position of the named parameter in declaration order; the first match wins.
    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    /// Exception types created directly by `throw new T(...)` statements in the body.
    ///
    /// Statements are visited in source order, descending into blocks and lambda bodies.
    /// Re-throws and thrown variables are not reported. Duplicates are kept.
    pub fn thrown_exception_types(&self) -> Vec<&TypeSyntax> {
        let mut thrown = Vec::new();
        collect_thrown(&self.body, &mut thrown);
        thrown
    }
}

fn collect_thrown<'a>(statements: &'a [Statement], thrown: &mut Vec<&'a TypeSyntax>) {
    for statement in statements {
        match statement {
            Statement::Throw { expression } => {
                if let Some(expression) = expression {
                    if let Expression::ObjectCreation { ty } = expression {
                        thrown.push(ty);
                    }
                    collect_in_expression(expression, thrown);
                }
            }
            Statement::Block { statements } => collect_thrown(statements, thrown),
            Statement::Expression { expression } => collect_in_expression(expression, thrown),
            Statement::Other => {}
        }
    }
}

fn collect_in_expression<'a>(expression: &'a Expression, thrown: &mut Vec<&'a TypeSyntax>) {
    if let Expression::Lambda { body } = expression {
        collect_thrown(body, thrown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throw_new(ty: &str) -> Statement {
        Statement::Throw {
            expression: Some(Expression::ObjectCreation { ty: TypeSyntax::parse(ty) }),
        }
    }

    #[test]
    fn test_thrown_exception_types_in_source_order() {
        let declaration = Declaration::new(DeclarationKind::Method, "Run").with_body(vec![
            throw_new("ArgumentNullException"),
            Statement::Block {
                statements: vec![Statement::Other, throw_new("InvalidOperationException")],
            },
            throw_new("ArgumentNullException"),
        ]);

        let thrown: Vec<String> = declaration
            .thrown_exception_types()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            thrown,
            vec!["ArgumentNullException", "InvalidOperationException", "ArgumentNullException"]
        );
    }

    #[test]
    fn test_rethrows_and_variables_are_ignored() {
        let declaration = Declaration::new(DeclarationKind::Method, "Run").with_body(vec![
            Statement::Throw { expression: None },
            Statement::Throw {
                expression: Some(Expression::Identifier { name: "error".to_string() }),
            },
        ]);
        assert!(declaration.thrown_exception_types().is_empty());
    }

    #[test]
    fn test_throws_inside_lambdas_are_found() {
        let declaration = Declaration::new(DeclarationKind::Method, "Run").with_body(vec![
            Statement::Expression {
                expression: Expression::Lambda {
                    body: vec![throw_new("TimeoutException")],
                },
            },
        ]);
        assert_eq!(declaration.thrown_exception_types().len(), 1);
    }

    #[test]
    fn test_inheritdoc_coverage() {
        let mut declaration = Declaration::new(DeclarationKind::Method, "Dispose");
        assert!(!declaration.is_covered_by_inheritdoc());
        declaration.explicit_interface = Some("IDisposable".to_string());
        assert!(declaration.is_covered_by_inheritdoc());
    }

    #[test]
    fn test_deserialize_declaration() {
        let yaml = r#"
kind: method
name: TryParse
type_parameters: [T]
parameters:
  - name: text
    type: string
  - name: strict
    type: bool?
return_type: bool
body:
  - kind: block
    statements:
      - kind: throw
        expression:
          kind: object_creation
          type: FormatException
"#;
        let declaration: Declaration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(declaration.kind, DeclarationKind::Method);
        assert_eq!(declaration.parameters.len(), 2);
        assert!(declaration.parameters[1].ty.is_boolean());
        assert_eq!(declaration.parameter_index("strict"), Some(1));
        assert_eq!(declaration.thrown_exception_types().len(), 1);
        assert_eq!(declaration.accessibility, Accessibility::Public);
    }
}
