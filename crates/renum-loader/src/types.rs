//! Named-type resolution to underlying basic kinds.

use arborium_tree_sitter::Node;
use indexmap::IndexMap;

use renum_core::{Repr, SourceFile, ast};

/// Named type -> referenced type name, collected from the top-level `type`
/// declarations of a package. Resolution follows chains of named types
/// until a predeclared basic kind is reached.
pub struct TypeTable {
    named: IndexMap<String, String>,
}

impl TypeTable {
    pub fn collect(files: &[SourceFile]) -> TypeTable {
        let mut named = IndexMap::new();
        for file in files {
            let root = file.root();
            let mut cursor = root.walk();
            for decl in root.named_children(&mut cursor) {
                if decl.kind() != ast::TYPE_DECL {
                    continue;
                }
                let mut specs = decl.walk();
                for spec in decl.named_children(&mut specs) {
                    if spec.kind() != ast::TYPE_SPEC && spec.kind() != ast::TYPE_ALIAS {
                        continue;
                    }
                    collect_spec(spec, &file.source, &mut named);
                }
            }
        }
        TypeTable { named }
    }

    /// Underlying basic kind of `name`, or `None` when the chain does not
    /// end in a basic type (struct underlyings, unknown names, cycles).
    pub fn resolve(&self, name: &str) -> Option<Repr> {
        let mut current = name;
        for _ in 0..=self.named.len() {
            if let Some(repr) = Repr::from_basic_name(current) {
                return Some(repr);
            }
            current = self.named.get(current)?;
        }
        None
    }
}

fn collect_spec(spec: Node<'_>, source: &str, named: &mut IndexMap<String, String>) {
    let Some(name) = spec.child_by_field_name("name") else {
        return;
    };
    let Some(target) = spec.child_by_field_name("type") else {
        return;
    };
    // Only bare named targets can lead to a basic kind.
    if target.kind() != ast::TYPE_IDENT && target.kind() != ast::IDENT {
        return;
    }
    named.insert(
        ast::text(name, source).to_string(),
        ast::text(target, source).to_string(),
    );
}
