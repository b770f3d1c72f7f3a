//! Semantic facts about return types.
//!
//! Symbol resolution belongs to the host. The generator only needs to know whether a
//! return type resolves at all, whether it is `void`, and whether it is an awaitable
//! future type.

use crate::type_syntax::TypeSyntax;

/// What a return type resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnSymbol {
    /// The `void` type; no return documentation is produced
    Void,
    /// A task-like type representing deferred completion
    Awaitable {
        /// Whether the awaitable carries a result type argument
        generic: bool,
    },
    /// Any other resolved type
    Value,
}

/// Resolves return types to [`ReturnSymbol`]s.
///
/// Returning `None` means the type could not be resolved, in which case return
/// documentation is skipped.
pub trait SemanticOracle {
    /// Classifies a return type reference.
    fn resolve_return_type(&self, return_type: &TypeSyntax) -> Option<ReturnSymbol>;
}

/// Oracle that classifies by naming convention alone.
///
/// A type whose right-most simple name is one of the configured awaitable names is an
/// awaitable; `void` is void; raw text that could not be parsed does not resolve.
#[derive(Debug, Clone)]
pub struct ConventionOracle {
    awaitable_types: Vec<String>,
}

impl ConventionOracle {
    /// Creates an oracle recognising the given awaitable type names.
    pub fn new(awaitable_types: Vec<String>) -> Self {
        Self { awaitable_types }
    }

    fn is_awaitable(&self, return_type: &TypeSyntax) -> bool {
        return_type
            .simple_name()
            .is_some_and(|name| self.awaitable_types.iter().any(|candidate| candidate == name))
    }
}

impl Default for ConventionOracle {
    fn default() -> Self {
        Self::new(vec!["Task".to_string(), "ValueTask".to_string()])
    }
}

impl SemanticOracle for ConventionOracle {
    fn resolve_return_type(&self, return_type: &TypeSyntax) -> Option<ReturnSymbol> {
        match return_type {
            TypeSyntax::Other(_) => None,
            ty if ty.is_void() => Some(ReturnSymbol::Void),
            ty if self.is_awaitable(ty) => Some(ReturnSymbol::Awaitable {
                generic: ty.is_generic(),
            }),
            _ => Some(ReturnSymbol::Value),
        }
    }
}
