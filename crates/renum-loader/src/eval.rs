//! Constant evaluation: builds the semantic definition table.
//!
//! Evaluates top-level `const` groups with Go's defaulting rules: `iota`
//! counting declaration specs, implicit repetition of the previous
//! expression list, and the declared-type carryover shared with the
//! scanner. Integer arithmetic runs in `i128`, which holds every
//! fixed-width Go constant exactly; complement results are truncated to
//! the declared type's width the way Go evaluates typed operands.

use arborium_tree_sitter::Node;
use indexmap::IndexMap;

use renum_core::{Def, Repr, SourceFile, Val, ast, golit};

use crate::types::TypeTable;

pub fn package_defs(files: &[SourceFile], types: &TypeTable) -> IndexMap<String, Def> {
    let mut defs = IndexMap::new();
    for file in files {
        let root = file.root();
        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            if decl.kind() == ast::CONST_DECL {
                eval_group(decl, &file.source, types, &mut defs);
            }
        }
    }
    defs
}

fn eval_group(
    decl: Node<'_>,
    source: &str,
    types: &TypeTable,
    defs: &mut IndexMap<String, Def>,
) {
    let mut current_type = String::new();
    let mut prev_values: Option<Node<'_>> = None;
    let mut iota: i128 = 0;

    let mut cursor = decl.walk();
    for spec in decl.named_children(&mut cursor) {
        if spec.kind() != ast::CONST_SPEC {
            continue;
        }

        let spec_type = ast::resolve_spec_type(spec, source, &current_type);
        let declared = match spec_type.member.as_deref() {
            Some("") | None => None,
            Some(name) => types.resolve(name),
        };

        let own_values = spec.child_by_field_name("value");
        if own_values.is_some() {
            prev_values = own_values;
        }
        // An untyped spec with no initializer repeats the previous
        // expression list at the current iota.
        let values = own_values.or(prev_values);

        eval_spec(spec, values, &spec_type, declared, iota, source, defs);
        current_type = spec_type.carried;
        iota += 1;
    }
}

fn eval_spec(
    spec: Node<'_>,
    values: Option<Node<'_>>,
    spec_type: &ast::SpecType,
    declared: Option<Repr>,
    iota: i128,
    source: &str,
    defs: &mut IndexMap<String, Def>,
) {
    let mut cursor = spec.walk();
    for (idx, name_node) in spec.children_by_field_name("name", &mut cursor).enumerate() {
        let name = ast::text(name_node, source);
        if name == "_" {
            continue;
        }
        let Some(val) = values
            .and_then(|list| list.named_child(u32::try_from(idx).ok()?))
            .and_then(|expr| eval_expr(expr, declared, iota, source, defs))
        else {
            continue;
        };
        let Some(repr) = member_repr(spec_type, declared, &val) else {
            continue;
        };
        defs.insert(name.to_string(), Def { repr, val });
    }
}

/// Representation of a member: the declared type's underlying kind when the
/// spec carries one, otherwise the value's default kind.
fn member_repr(spec_type: &ast::SpecType, declared: Option<Repr>, val: &Val) -> Option<Repr> {
    match spec_type.member.as_deref() {
        Some("") | None => Some(match val {
            Val::Int(_) => Repr::Int,
            Val::Str(_) => Repr::String,
            Val::Bool(_) => Repr::Bool,
        }),
        Some(_) => declared,
    }
}

fn eval_expr(
    expr: Node<'_>,
    declared: Option<Repr>,
    iota: i128,
    source: &str,
    defs: &IndexMap<String, Def>,
) -> Option<Val> {
    match expr.kind() {
        "int_literal" => golit::parse_int(ast::text(expr, source)).map(Val::Int),
        "interpreted_string_literal" | "raw_string_literal" => {
            golit::unquote(ast::text(expr, source)).map(Val::Str)
        }
        "rune_literal" => rune_value(ast::text(expr, source)).map(Val::Int),
        // Predeclared constants are their own node kinds, not identifiers.
        "iota" => Some(Val::Int(iota)),
        "true" => Some(Val::Bool(true)),
        "false" => Some(Val::Bool(false)),
        "identifier" => defs
            .get(ast::text(expr, source))
            .map(|def| def.val.clone()),
        "parenthesized_expression" => {
            eval_expr(expr.named_child(0)?, declared, iota, source, defs)
        }
        "unary_expression" => {
            let op = ast::text(expr.child_by_field_name("operator")?, source);
            let operand = expr.child_by_field_name("operand")?;
            let Val::Int(n) = eval_expr(operand, declared, iota, source, defs)? else {
                return None;
            };
            match op {
                "-" => n.checked_neg().map(Val::Int),
                "+" => Some(Val::Int(n)),
                "^" => Some(Val::Int(truncate(!n, declared))),
                _ => None,
            }
        }
        "binary_expression" => {
            let op = ast::text(expr.child_by_field_name("operator")?, source);
            let lhs = eval_expr(expr.child_by_field_name("left")?, declared, iota, source, defs)?;
            let rhs = eval_expr(expr.child_by_field_name("right")?, declared, iota, source, defs)?;
            eval_binary(op, lhs, rhs, declared)
        }
        // Conversion-style call: the value is the converted operand's value.
        kind if kind == ast::CALL_EXPR => {
            ast::conversion_callee(expr, source)?;
            let args = expr.child_by_field_name("arguments")?;
            eval_expr(args.named_child(0)?, declared, iota, source, defs)
        }
        _ => None,
    }
}

fn eval_binary(op: &str, lhs: Val, rhs: Val, declared: Option<Repr>) -> Option<Val> {
    if let (Val::Str(a), Val::Str(b)) = (&lhs, &rhs) {
        return (op == "+").then(|| Val::Str(format!("{a}{b}")));
    }
    let (Val::Int(a), Val::Int(b)) = (lhs, rhs) else {
        return None;
    };
    let result = match op {
        "+" => a.checked_add(b)?,
        "-" => a.checked_sub(b)?,
        "*" => a.checked_mul(b)?,
        "/" => a.checked_div(b)?,
        "%" => a.checked_rem(b)?,
        "<<" => a.checked_shl(u32::try_from(b).ok()?)?,
        ">>" => a.checked_shr(u32::try_from(b).ok()?)?,
        "|" => a | b,
        "&" => a & b,
        "^" => a ^ b,
        "&^" => truncate(a & !b, declared),
        _ => return None,
    };
    Some(Val::Int(result))
}

/// Truncate a complemented value to the declared integer type's width.
/// Untyped results pass through; platform-width kinds evaluate at 64 bits,
/// which is what the generated code targets.
fn truncate(n: i128, declared: Option<Repr>) -> i128 {
    let Some(repr) = declared else { return n };
    let Some(signed) = repr.is_signed() else { return n };
    let width = repr.bit_width().unwrap_or(64);
    let masked = n & ((1i128 << width) - 1);
    if signed && masked >> (width - 1) != 0 {
        masked - (1i128 << width)
    } else {
        masked
    }
}

/// Value of a rune literal token, quotes included.
fn rune_value(lit: &str) -> Option<i128> {
    let body = lit.strip_prefix('\'')?.strip_suffix('\'')?;
    // Reuse string unquoting for the escape forms.
    let decoded = golit::unquote(&format!("\"{}\"", body.replace('"', "\\\"")))?;
    let mut chars = decoded.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c as i128)
}
