//! Accessor visibility for properties and indexers.
//!
//! Decides whether documentation should say `Gets` or `Gets or sets`, based on the
//! declared accessibility of each accessor and of the property itself.

use serde::{Deserialize, Serialize};

/// Declared or effective accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    /// `public`
    #[default]
    Public,
    /// `protected internal`
    #[serde(rename = "protected_internal")]
    ProtectedOrInternal,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// `private protected`
    #[serde(rename = "private_protected")]
    ProtectedAndInternal,
    /// `private`
    Private,
}

impl Accessibility {
    /// Visible outside the declaring assembly, to callers or to derived types.
    fn is_externally_visible(self) -> bool {
        matches!(
            self,
            Accessibility::Public | Accessibility::ProtectedOrInternal | Accessibility::Protected
        )
    }

    /// Written with the `private` keyword (`private` or `private protected`).
    fn is_private_keyword(self) -> bool {
        matches!(self, Accessibility::Private | Accessibility::ProtectedAndInternal)
    }
}

/// One accessor as declared, with its explicit accessibility modifier if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessorDecl {
    /// Explicit modifier on the accessor; `None` inherits the property's accessibility
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
}

/// The accessors a property or indexer declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessorList {
    /// The `get` accessor
    #[serde(default, rename = "get")]
    pub getter: Option<AccessorDecl>,
    /// The `set` accessor
    #[serde(default, rename = "set")]
    pub setter: Option<AccessorDecl>,
    /// Whether the member is expression-bodied (an implicit getter)
    #[serde(default)]
    pub expression_body: bool,
}

/// Which accessors show up in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessorVisibility {
    /// Whether the getter is visible
    pub getter_visible: bool,
    /// Whether the setter is visible
    pub setter_visible: bool,
}

impl AccessorVisibility {
    /// Getter only.
    pub fn read_only() -> Self {
        Self {
            getter_visible: true,
            setter_visible: false,
        }
    }

    /// Getter and setter.
    pub fn read_write() -> Self {
        Self {
            getter_visible: true,
            setter_visible: true,
        }
    }
}

/// Works out accessor visibility for a property or indexer.
///
/// # Arguments
///
/// * `accessors` - The declared accessors
/// * `member_accessibility` - The effective accessibility of the property itself
pub fn analyze(
    accessors: &AccessorList,
    member_accessibility: Accessibility,
) -> AccessorVisibility {
    let (getter, setter) = match (accessors.getter, accessors.setter) {
        (Some(getter), Some(setter)) => (getter, setter),
        (getter, setter) => {
            return if getter.is_some() || accessors.expression_body {
                AccessorVisibility::read_only()
            } else {
                AccessorVisibility {
                    getter_visible: false,
                    setter_visible: setter.is_some(),
                }
            };
        }
    };

    if getter.accessibility.is_none() && setter.accessibility.is_none() {
        return AccessorVisibility::read_write();
    }

    if getter.accessibility.is_some_and(Accessibility::is_private_keyword) {
        return AccessorVisibility {
            getter_visible: false,
            setter_visible: true,
        };
    }

    if setter.accessibility.is_some_and(Accessibility::is_private_keyword) {
        return AccessorVisibility::read_only();
    }

    if !member_accessibility.is_externally_visible() {
        // No accessor is explicitly private, so both are as visible as the member.
        return AccessorVisibility::read_write();
    }

    AccessorVisibility {
        getter_visible: getter
            .accessibility
            .unwrap_or(member_accessibility)
            .is_externally_visible(),
        setter_visible: setter
            .accessibility
            .unwrap_or(member_accessibility)
            .is_externally_visible(),
    }
}
