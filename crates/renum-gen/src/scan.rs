//! Declaration scanning: locate constants bound to a target type.

use arborium_tree_sitter::Node;

use renum_core::{ConstValue, Package, SourceFile, ast};

use crate::extract;
use crate::{Error, Result};

/// Scan every file of `pkg` for constants of `type_name`, in file order.
pub fn package_values(pkg: &Package, type_name: &str) -> Result<Vec<ConstValue>> {
    let mut values = Vec::new();
    for file in &pkg.files {
        values.extend(file_values(file, pkg, type_name)?);
    }
    Ok(values)
}

/// Scan one file's top-level const groups for constants of `type_name`.
///
/// Returns matches in declaration order. Each call produces a fresh list;
/// no state is carried between scans. Constants of other types are simply
/// skipped, and an absent type yields an empty list, not an error.
pub fn file_values(file: &SourceFile, pkg: &Package, type_name: &str) -> Result<Vec<ConstValue>> {
    let mut values = Vec::new();
    let root = file.root();
    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        if decl.kind() != ast::CONST_DECL {
            continue;
        }
        scan_group(decl, file, pkg, type_name, &mut values)?;
    }
    Ok(values)
}

fn scan_group(
    decl: Node<'_>,
    file: &SourceFile,
    pkg: &Package,
    type_name: &str,
    values: &mut Vec<ConstValue>,
) -> Result<()> {
    let mut current_type = String::new();
    let mut specs = decl.walk();
    for spec in decl.named_children(&mut specs) {
        if spec.kind() != ast::CONST_SPEC {
            continue;
        }

        let spec_type = ast::resolve_spec_type(spec, &file.source, &current_type);
        current_type = spec_type.carried;

        let Some(member_type) = spec_type.member else {
            continue;
        };
        if member_type != type_name {
            continue;
        }

        let mut cursor = spec.walk();
        for name_node in spec.children_by_field_name("name", &mut cursor) {
            let name = ast::text(name_node, &file.source);
            if name == "_" {
                continue;
            }
            // A matched name must have a definition; anything else is a
            // desync between the scanner and the semantic model.
            let def = pkg
                .defs
                .get(name)
                .ok_or_else(|| Error::MissingDef(name.to_string()))?;
            values.push(extract::const_value(name, def));
        }
    }
    Ok(())
}
