//! Core data model shared by the renum loader and generator:
//! - `unit` - loaded packages, source files, and the semantic definition table
//! - `repr` - underlying basic representations of enum-style types
//! - `ast` - helpers over the tree-sitter Go syntax tree
//! - `golit` - Go literal parsing and rendering

pub mod ast;
pub mod golit;
pub mod repr;
pub mod unit;

#[cfg(test)]
mod golit_tests;

pub use repr::Repr;
pub use unit::{ConstValue, Def, Package, SourceFile, Val};
