//! Canonical literal text for matched definitions.

use renum_core::{ConstValue, Def, Val, golit};

/// Pair a matched constant's name with its representation and exact
/// literal rendering.
pub fn const_value(name: &str, def: &Def) -> ConstValue {
    ConstValue {
        name: name.to_string(),
        repr: def.repr,
        literal: literal_text(&def.val),
    }
}

/// Exact canonical form: decimal for integers, Go-quoted for strings.
/// Lossless for every type-checked constant value.
pub fn literal_text(val: &Val) -> String {
    match val {
        Val::Int(n) => n.to_string(),
        Val::Str(s) => golit::quote(s),
        Val::Bool(b) => b.to_string(),
    }
}
