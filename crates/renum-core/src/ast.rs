//! Helpers over the tree-sitter Go syntax tree.
//!
//! Node kind names follow the tree-sitter-go grammar. Only the handful of
//! kinds the loader and scanner care about are named here.

use arborium_tree_sitter::Node;

pub const CONST_DECL: &str = "const_declaration";
pub const CONST_SPEC: &str = "const_spec";
pub const TYPE_DECL: &str = "type_declaration";
pub const TYPE_SPEC: &str = "type_spec";
pub const TYPE_ALIAS: &str = "type_alias";
pub const TYPE_IDENT: &str = "type_identifier";
pub const IDENT: &str = "identifier";
pub const CALL_EXPR: &str = "call_expression";
pub const PACKAGE_CLAUSE: &str = "package_clause";

/// Source text of a node.
pub fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes())
        .expect("node range within source")
}

/// Declared type of one spec in a const group, under Go's defaulting rules.
///
/// `member` is the type the line's constants are bound to (`None` when the
/// spec cannot re-resolve a type and is skipped); `carried` is the type that
/// flows into the next spec of the same group.
pub struct SpecType {
    pub member: Option<String>,
    pub carried: String,
}

/// Resolve the type of `spec` given the type carried from earlier group
/// members:
/// - an explicit annotation with a bare type name sets the carried type;
/// - an untyped spec with no initializer continues the carried type
///   (sequential `iota` constants);
/// - an untyped spec whose initializer is a one-argument conversion call of
///   a bare name re-types the group to that name;
/// - any other untyped initializer clears the carried type.
pub fn resolve_spec_type(spec: Node<'_>, source: &str, current: &str) -> SpecType {
    if let Some(ty) = spec.child_by_field_name("type") {
        if ty.kind() == TYPE_IDENT || ty.kind() == IDENT {
            let name = text(ty, source).to_string();
            return SpecType {
                member: Some(name.clone()),
                carried: name,
            };
        }
        // Composite type expression: not an enum candidate, but it does not
        // disturb the carried type either.
        return SpecType {
            member: None,
            carried: current.to_string(),
        };
    }

    let Some(values) = spec.child_by_field_name("value") else {
        return SpecType {
            member: Some(current.to_string()),
            carried: current.to_string(),
        };
    };

    if let Some(first) = values.named_child(0) {
        if first.kind() == CALL_EXPR {
            if let Some(name) = conversion_callee(first, source) {
                return SpecType {
                    member: Some(name.to_string()),
                    carried: name.to_string(),
                };
            }
        }
    }

    SpecType {
        member: None,
        carried: String::new(),
    }
}

/// The bare name invoked by a single-argument conversion-style call, if any.
pub fn conversion_callee<'s>(call: Node<'_>, source: &'s str) -> Option<&'s str> {
    let fun = call.child_by_field_name("function")?;
    if fun.kind() != IDENT {
        return None;
    }
    let args = call.child_by_field_name("arguments")?;
    if args.named_child_count() != 1 {
        return None;
    }
    Some(text(fun, source))
}

/// Name from the file's package clause, if present.
pub fn package_name<'s>(root: Node<'_>, source: &'s str) -> Option<&'s str> {
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == PACKAGE_CLAUSE)?;
    clause.named_child(0).map(|ident| text(ident, source))
}
