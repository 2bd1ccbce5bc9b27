//! Loaded program units and their semantic definition table.

use std::path::PathBuf;

use arborium_tree_sitter as tree_sitter;
use indexmap::IndexMap;

use crate::repr::Repr;

/// Exact value of a type-checked constant.
///
/// Integers are held as `i128`, wide enough for every fixed-width Go
/// constant, so rendering back to decimal text is lossless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Val {
    Int(i128),
    Str(String),
    Bool(bool),
}

/// Resolved representation and value of a declared constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Def {
    pub repr: Repr,
    pub val: Val,
}

/// One parsed source file. The tree is immutable after loading.
pub struct SourceFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: tree_sitter::Tree,
}

impl SourceFile {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

/// A loaded package: parsed files plus the evaluated definition table.
/// Built once by the loader and read-only afterwards.
pub struct Package {
    pub name: String,
    pub files: Vec<SourceFile>,
    /// Constant name -> resolved definition, in declaration order.
    pub defs: IndexMap<String, Def>,
    /// Whether any file in the package is a `_test.go` file.
    pub has_test_files: bool,
}

impl Package {
    /// External test packages (`foo_test`) sort after ordinary ones.
    pub fn is_test_only(&self) -> bool {
        self.name.ends_with("_test")
    }
}

/// A constant matched for one target type: symbolic name, representation,
/// and the exact literal text used as the generated map key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstValue {
    pub name: String,
    pub repr: Repr,
    pub literal: String,
}
