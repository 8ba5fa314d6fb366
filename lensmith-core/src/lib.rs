//! # lensmith-core
//!
//! Synthesizes one lens per stored field of an immutable record type.
//!
//! The pipeline is a small compiler pass over one declaration at a time:
//!
//! 1. [`classify`](member::classify) turns a raw member into a [`Member`]
//!    (storage kind, read visibility, write visibility).
//! 2. [`scan`](declaration::scan) collects the members of a record-like
//!    declaration in source order.
//! 3. [`build_arguments`](arguments::build_arguments) lays out the labeled
//!    reconstruction call for the field being replaced.
//! 4. [`emit`](emit::emit) packages a getter and a setter into a
//!    [`SynthesizedLens`].
//! 5. [`expand_declaration`] drives the above and never fails: unsupported
//!    input yields fewer (or zero) lenses.
//!
//! Raw declarations come from the Swift-like [`syntax`] parser or from any
//! other front end that builds [`RawDeclaration`] values directly, such as the
//! `lensmith-derive` crate.
//!
//! ## Example
//!
//! ```rust
//! use lensmith_core::{GeneratorConfig, expand_source};
//!
//! let source = r"
//! @Lenses
//! struct Point {
//!     public let x: Int
//!     public private(set) var y: Int
//!     var length: Int { x + y }
//! }
//! ";
//!
//! let lenses = expand_source(source, &GeneratorConfig::default());
//! assert_eq!(lenses.len(), 2);
//! assert!(lenses[0].starts_with("public static let xLens = Lens<Point, Int>("));
//! assert!(lenses[1].starts_with("private static let yLens = Lens<Point, Int>("));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod arguments;
pub mod config;
pub mod declaration;
pub mod driver;
pub mod emit;
pub mod error;
pub mod member;
pub mod render;
pub mod syntax;
pub mod visibility;

pub use arguments::{ArgumentValue, ReconstructionArgument, build_arguments};
pub use config::GeneratorConfig;
pub use declaration::{Declaration, scan};
pub use driver::{expand_declaration, expand_source};
pub use emit::{SynthesizedLens, emit};
pub use error::{ConfigError, ParseError};
pub use member::{Member, StorageKind, classify};
pub use syntax::{
    AccessorBlock, Binding, DeclarationKind, Modifier, RawDeclaration, RawMember, RawVariable,
    parse_declaration, parse_declarations,
};
pub use visibility::Visibility;
