//! Go package loading: parse source files, group them into packages, and
//! evaluate top-level declarations into the semantic definition table.
//!
//! Loading one directory yields one package per package clause found in it
//! (a directory can hold `foo` and `foo_test`). Files are parsed with the
//! tree-sitter Go grammar; constant values are evaluated by `eval` and named
//! types resolved to their underlying basic kinds by `types`.

use std::path::{Path, PathBuf};

use arborium_tree_sitter as tree_sitter;
use indexmap::IndexMap;

use renum_core::{Package, SourceFile, ast};

mod eval;
mod types;


pub use types::TypeTable;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no Go files in {}", .0.display())]
    NoGoFiles(PathBuf),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Load every package found at `path`.
///
/// A directory loads all its `.go` files (non-recursive, like a Go package
/// directory); a file path loads just that file. Files are processed in
/// name order so the resulting packages are deterministic.
pub fn load(path: &Path) -> Result<Vec<Package>> {
    let file_paths = go_files(path)?;
    if file_paths.is_empty() {
        return Err(LoadError::NoGoFiles(path.to_path_buf()));
    }

    let mut parser = go_parser();

    // Group parsed files by package clause, preserving first-seen order.
    let mut grouped: IndexMap<String, Vec<SourceFile>> = IndexMap::new();
    for file_path in file_paths {
        let source = std::fs::read_to_string(&file_path).map_err(|source| LoadError::Io {
            path: file_path.clone(),
            source,
        })?;
        let tree = parser
            .parse(&source, None)
            .expect("failed to parse source");
        let name = ast::package_name(tree.root_node(), &source)
            .unwrap_or_default()
            .to_string();
        grouped.entry(name).or_default().push(SourceFile {
            path: file_path,
            source,
            tree,
        });
    }

    let mut packages = Vec::with_capacity(grouped.len());
    for (name, files) in grouped {
        let has_test_files = files.iter().any(|f| {
            f.path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with("_test.go"))
        });
        let type_table = TypeTable::collect(&files);
        let defs = eval::package_defs(&files, &type_table);
        packages.push(Package {
            name,
            files,
            defs,
            has_test_files,
        });
    }
    Ok(packages)
}

fn go_parser() -> tree_sitter::Parser {
    let language: tree_sitter::Language = arborium_go::language().into();
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .expect("failed to set language");
    parser
}

/// The `.go` files designated by `path`, sorted by file name.
fn go_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let entries = std::fs::read_dir(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_path = entry.path();
        if file_path.is_file() && file_path.extension().is_some_and(|ext| ext == "go") {
            files.push(file_path);
        }
    }
    files.sort();
    Ok(files)
}
