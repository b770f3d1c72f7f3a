//! Host-shaped type references.
//!
//! A [`TypeSyntax`] mirrors the node kinds a host tree uses for type references. Hosts
//! can build one directly, or descriptors can carry the type as surface text which is
//! parsed here. Parsing never fails: text that does not match the grammar is kept as
//! [`TypeSyntax::Other`].

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Keywords the host treats as predefined types.
pub const PREDEFINED_KEYWORDS: &[&str] = &[
    "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "nint",
    "nuint", "long", "ulong", "short", "ushort", "object", "string", "void",
];

/// A type reference as the host syntax tree shapes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeSyntax {
    /// A predefined keyword type such as `int` or `bool`
    Predefined(String),
    /// A bare identifier such as `Customer`
    Identifier(String),
    /// A dotted name; each segment is an identifier or generic name
    Qualified(Vec<TypeSyntax>),
    /// A generic name such as `List<int>`
    Generic {
        /// The container identifier
        name: String,
        /// Type arguments in declared order
        arguments: Vec<TypeSyntax>,
    },
    /// An array of the element type
    Array(Box<TypeSyntax>),
    /// A nullable wrapper around the element type
    Nullable(Box<TypeSyntax>),
    /// Anything else, kept as raw text
    Other(String),
}

impl TypeSyntax {
    /// Parses surface text into a type reference, falling back to [`TypeSyntax::Other`].
    pub fn parse(text: &str) -> Self {
        let mut parser = TypeParser::new(text);
        match parser.parse_type() {
            Some(ty) if parser.at_end() => ty,
            _ => TypeSyntax::Other(text.trim().to_string()),
        }
    }

    /// Returns true for the predefined `bool` keyword or a nullable wrapper around it.
    pub fn is_boolean(&self) -> bool {
        match self {
            TypeSyntax::Predefined(keyword) => keyword == "bool",
            TypeSyntax::Nullable(element) => {
                matches!(element.as_ref(), TypeSyntax::Predefined(keyword) if keyword == "bool")
            }
            _ => false,
        }
    }

    /// Returns true for the predefined `void` keyword.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeSyntax::Predefined(keyword) if keyword == "void")
    }

    /// The right-most simple name, without type arguments.
    ///
    /// `System.Threading.Tasks.Task<int>` yields `Task`. Arrays, nullables and raw text
    /// have no simple name.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            TypeSyntax::Identifier(name) | TypeSyntax::Generic { name, .. } => Some(name),
            TypeSyntax::Qualified(segments) => segments.last().and_then(TypeSyntax::simple_name),
            _ => None,
        }
    }

    /// Returns true when the right-most name carries type arguments.
    pub fn is_generic(&self) -> bool {
        match self {
            TypeSyntax::Generic { .. } => true,
            TypeSyntax::Qualified(segments) => segments.last().is_some_and(TypeSyntax::is_generic),
            _ => false,
        }
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSyntax::Predefined(text)
            | TypeSyntax::Identifier(text)
            | TypeSyntax::Other(text) => {
                write!(f, "{}", text)
            }
            TypeSyntax::Qualified(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
            TypeSyntax::Generic { name, arguments } => {
                write!(f, "{}<", name)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ">")
            }
            TypeSyntax::Array(element) => write!(f, "{}[]", element),
            TypeSyntax::Nullable(element) => write!(f, "{}?", element),
        }
    }
}

impl FromStr for TypeSyntax {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeSyntax::parse(s))
    }
}

impl From<String> for TypeSyntax {
    fn from(text: String) -> Self {
        TypeSyntax::parse(&text)
    }
}

impl From<&str> for TypeSyntax {
    fn from(text: &str) -> Self {
        TypeSyntax::parse(text)
    }
}

impl From<TypeSyntax> for String {
    fn from(ty: TypeSyntax) -> Self {
        ty.to_string()
    }
}

/// Recursive-descent parser over the type grammar:
///
/// ```text
/// type    := named suffix*
/// named   := segment ('.' segment)*
/// segment := IDENT ('<' type (',' type)* '>')?
/// suffix  := '[' ','* ']' | '?'
/// ```
///
/// Nesting, counting both type arguments and suffixes, is capped at [`MAX_NESTING`];
/// deeper input does not parse.
struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

/// Deepest nesting of type arguments and suffixes a reference may have.
const MAX_NESTING: usize = 64;

impl<'a> TypeParser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_raw() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek_raw(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.peek_raw()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    fn identifier(&mut self) -> Option<String> {
        let c = self.peek()?;
        if !(c.is_alphabetic() || c == '_' || c == '@') {
            return None;
        }

        let start = self.pos;
        while let Some(c) = self.peek_raw() {
            if c.is_alphanumeric() || c == '_' || (c == '@' && self.pos == start) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        Some(self.src[start..self.pos].to_string())
    }

    fn parse_type(&mut self) -> Option<TypeSyntax> {
        let mut ty = self.parse_named()?;
        let mut suffixes = 0;

        loop {
            if self.depth + suffixes >= MAX_NESTING && matches!(self.peek(), Some('?' | '[')) {
                return None;
            }

            if self.eat('?') {
                ty = TypeSyntax::Nullable(Box::new(ty));
                suffixes += 1;
            } else if self.eat('[') {
                while self.eat(',') {}
                if !self.eat(']') {
                    return None;
                }
                ty = TypeSyntax::Array(Box::new(ty));
                suffixes += 1;
            } else {
                return Some(ty);
            }
        }
    }

    fn parse_named(&mut self) -> Option<TypeSyntax> {
        let first = self.parse_segment()?;
        if let TypeSyntax::Predefined(_) = first {
            return Some(first);
        }

        let mut segments = vec![first];
        while self.eat('.') {
            match self.parse_segment()? {
                TypeSyntax::Predefined(_) => return None,
                segment => segments.push(segment),
            }
        }

        if segments.len() == 1 {
            segments.pop()
        } else {
            Some(TypeSyntax::Qualified(segments))
        }
    }

    fn parse_segment(&mut self) -> Option<TypeSyntax> {
        let name = self.identifier()?;

        if !self.eat('<') {
            if PREDEFINED_KEYWORDS.contains(&name.as_str()) {
                return Some(TypeSyntax::Predefined(name));
            }
            return Some(TypeSyntax::Identifier(name));
        }

        if self.depth >= MAX_NESTING {
            return None;
        }

        self.depth += 1;
        let arguments = self.parse_arguments();
        self.depth -= 1;

        Some(TypeSyntax::Generic {
            name,
            arguments: arguments?,
        })
    }

    fn parse_arguments(&mut self) -> Option<Vec<TypeSyntax>> {
        let mut arguments = vec![self.parse_type()?];
        while self.eat(',') {
            arguments.push(self.parse_type()?);
        }
        if !self.eat('>') {
            return None;
        }
        Some(arguments)
    }
}
