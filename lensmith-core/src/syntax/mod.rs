//! Structural input to the pipeline.
//!
//! [`RawDeclaration`] and its members are the only shape the classifier and
//! scanner consume. The [`parse_declarations`] reader builds them from
//! Swift-like source text; other front ends may build them directly.

mod ast;
mod lexer;
mod parser;

pub use ast::{
    AccessorBlock, Binding, DeclarationKind, Modifier, RawDeclaration, RawMember, RawVariable,
};
pub(crate) use parser::parse_declarations_until_error;
pub use parser::{parse_declaration, parse_declarations};
