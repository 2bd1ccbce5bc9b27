//! Rendering of the generated artifact: banner, package clause, and one
//! lookup block per found type.

use renum_core::ConstValue;

/// Banner and package clause opening a generated file.
pub fn header(out: &mut String, argv: &str, pkg_name: &str) {
    out.push_str(&format!(
        "// Code generated by \"renum {argv}\"; DO NOT EDIT.\n"
    ));
    out.push('\n');
    out.push_str(&format!("package {pkg_name}"));
    out.push('\n');
}

/// Append the reverse-lookup map and accessor for `type_name`.
///
/// Callers guarantee `values` is non-empty and that all entries share one
/// representation; entries are emitted in discovery order.
pub fn lookup_block(out: &mut String, type_name: &str, values: &[ConstValue]) {
    let base = values[0].repr.go_name();

    out.push('\n');
    out.push_str(&format!(
        "var _{type_name}Values = map[{base}]{type_name}{{"
    ));
    for value in values {
        out.push_str(&format!("\n\t{}: {},", value.literal, value.name));
    }
    out.push_str("\n}");
    out.push('\n');

    out.push_str(&format!(
        "\nfunc Get{type_name}(x {base}) ({type_name}, bool) {{"
    ));
    out.push_str(&format!("\n\tval, ok := _{type_name}Values[x]"));
    out.push_str("\n\treturn val, ok");
    out.push_str("\n}\n");
}
