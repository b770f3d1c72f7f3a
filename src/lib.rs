//! docfill - XML documentation comments for undocumented C# declarations.
//!
//! Given a description of a declaration (its kind, name, parameters, types, accessors and a
//! reduced view of its body), this library composes a complete `///` documentation comment,
//! or inserts missing `<param>` elements into an existing one at the position declaration
//! order calls for. Text is produced from naming conventions alone: identifiers are split
//! into words, cased, and placed into fixed English templates.
//!
//! # Architecture
//!
//! 1. [`naming`] - Splits identifiers into words and normalizes their casing
//! 2. [`type_syntax`] / [`type_shape`] - Type references and their prose descriptions
//! 3. [`oracle`] - Semantic facts about return types
//! 4. [`accessors`] - Which property accessors are visible
//! 5. [`composer`] - Summary, parameter and return sentences
//! 6. [`assembler`] - Complete comments per declaration kind
//! 7. [`splice`] - Inserting missing parameter documentation
//! 8. [`fixer`] - Fix requests and outcomes
//! 9. [`render`] - Documentation trivia text
//!
//! # Example Usage
//!
//! ```
//! use docfill::{
//!     assembler::Assembler,
//!     config::Settings,
//!     declaration::{Declaration, DeclarationKind},
//!     oracle::ConventionOracle,
//!     render::render,
//! };
//!
//! let settings = Settings::default();
//! let oracle = ConventionOracle::default();
//! let assembler = Assembler::new(&settings, &oracle);
//!
//! let declaration = Declaration::new(DeclarationKind::Method, "GetValue")
//!     .with_parameter("key", "string")
//!     .with_return_type("int");
//! let comment = assembler.assemble(&declaration).unwrap();
//!
//! let text = render(&comment, "\n", "");
//! assert!(text.contains("/// Gets value."));
//! assert!(text.contains("<returns>An int.</returns>"));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod accessors;
pub mod assembler;
pub mod cli;
pub mod composer;
pub mod config;
pub mod declaration;
pub mod doc;
pub mod error;
pub mod fixer;
pub mod loader;
pub mod naming;
pub mod oracle;
pub mod render;
pub mod scanner;
pub mod serializer;
pub mod splice;
pub mod type_shape;
pub mod type_syntax;
