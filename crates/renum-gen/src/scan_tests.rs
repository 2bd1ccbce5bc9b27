use indoc::indoc;

use renum_core::{Package, Repr};

use crate::scan::{file_values, package_values};

fn load_pkg(source: &str) -> Package {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("fixture.go"), source).expect("write fixture");
    let mut pkgs = renum_loader::load(dir.path()).expect("load");
    assert_eq!(pkgs.len(), 1);
    pkgs.remove(0)
}

#[test]
fn finds_all_members_of_a_typed_group() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Status int

        const (
            StatusPending Status = iota
            StatusActive
            StatusInactive
        )
    "#});

    let values = package_values(&pkg, "Status").expect("scan");
    assert_eq!(values.len(), 3);
    assert_eq!(values[0].name, "StatusPending");
    assert_eq!(values[0].literal, "0");
    assert_eq!(values[1].name, "StatusActive");
    assert_eq!(values[1].literal, "1");
    assert_eq!(values[2].name, "StatusInactive");
    assert_eq!(values[2].literal, "2");
    assert!(values.iter().all(|v| v.repr == Repr::Int));
}

#[test]
fn skips_other_types_in_the_same_file() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Color int
        type Shape int

        const (
            Red  Color = 1
            Blue Color = 2
        )

        const Circle Shape = 10
    "#});

    let values = package_values(&pkg, "Color").expect("scan");
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].name, "Red");
    assert_eq!(values[1].name, "Blue");
}

#[test]
fn tracks_type_switch_mid_group() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Color int
        type Shape int

        const (
            Red    Color = 1
            Green
            Circle Shape = 10
            Square
        )
    "#});

    let colors = package_values(&pkg, "Color").expect("scan");
    assert_eq!(
        colors.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
        ["Red", "Green"]
    );
    let shapes = package_values(&pkg, "Shape").expect("scan");
    assert_eq!(
        shapes.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
        ["Circle", "Square"]
    );
}

#[test]
fn conversion_initializer_sets_the_group_type() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Code int

        const (
            Accepted = Code(202)
            Teapot   = Code(418)
        )
    "#});

    let values = package_values(&pkg, "Code").expect("scan");
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].literal, "202");
    assert_eq!(values[1].literal, "418");
}

#[test]
fn blank_members_are_skipped() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Slot int

        const (
            _ Slot = iota
            SlotOne
            SlotTwo
        )
    "#});

    let values = package_values(&pkg, "Slot").expect("scan");
    assert_eq!(
        values.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
        ["SlotOne", "SlotTwo"]
    );
    assert_eq!(values[0].literal, "1");
}

#[test]
fn absent_type_yields_empty_not_error() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Color int

        const Red Color = 1
    "#});

    let values = package_values(&pkg, "Nope").expect("scan");
    assert!(values.is_empty());
}

#[test]
fn each_scan_starts_fresh() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Color int

        const (
            Red  Color = 1
            Blue Color = 2
        )
    "#});

    let first = file_values(&pkg.files[0], &pkg, "Color").expect("scan");
    let second = file_values(&pkg.files[0], &pkg, "Color").expect("scan");
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn untyped_initializer_clears_the_carried_type() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Color int

        const (
            Red      Color = 1
            Unrelated = 99
            Orphan
        )
    "#});

    let values = package_values(&pkg, "Color").expect("scan");
    assert_eq!(
        values.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
        ["Red"]
    );
}

#[test]
fn matched_name_without_definition_is_fatal() {
    // A constant of a type with no basic underlying kind never gets a
    // semantic definition; matching it anyway is a scanner/model desync.
    let pkg = load_pkg(indoc! {r#"
        package demo

        type Weird struct{ x int }

        const Bad Weird = 1
    "#});

    let err = package_values(&pkg, "Weird").expect_err("should fail");
    assert!(matches!(err, crate::Error::MissingDef(ref name) if name == "Bad"));
    assert_eq!(err.to_string(), "no value for constant Bad");
}

#[test]
fn string_values_keep_exact_punctuation() {
    let pkg = load_pkg(indoc! {r#"
        package demo

        type MimeType string

        const (
            JSON MimeType = "application/json"
            HTML MimeType = "text/html"
        )
    "#});

    let values = package_values(&pkg, "MimeType").expect("scan");
    assert_eq!(values[0].literal, "\"application/json\"");
    assert_eq!(values[1].literal, "\"text/html\"");
    assert!(values.iter().all(|v| v.repr == Repr::String));
}
