//! Alias documents: resolution by filename transform, name substitution,
//! and the self-reference/missing-target guards.

mod common;

use common::{function_doc, generate_from};

fn alias_doc(alias: &str, target: &str) -> String {
    format!(
        r#"<refentry xmlns="http://docbook.org/ns/docbook">
 <refnamediv>
  <refname>{alias}</refname>
  <refpurpose>Alias of <function>{target}</function></refpurpose>
 </refnamediv>
 <refsect1 role="description">
  <para>This function is an alias of <function>{target}</function>.</para>
 </refsect1>
</refentry>
"#
    )
}

#[test]
fn alias_reuses_the_target_signature_under_its_own_name() {
    let target = function_doc("str_frob", "input", "string", "Frobnicates str_frob style.");
    let alias = alias_doc("str_zap", "str_frob");
    let (rendered, _dir) = generate_from(&[
        ("reference/strings/str-frob.xml", &target),
        ("reference/strings/str-zap.xml", &alias),
    ]);

    assert!(rendered.text.contains("function str_frob($input){}"));
    assert!(rendered.text.contains("function str_zap($input){}"));
}

#[test]
fn alias_substitutes_its_name_in_the_description() {
    let target = function_doc("str_frob", "input", "string", "Frobnicates str_frob style.");
    let alias = alias_doc("str_zap", "str_frob");
    let (rendered, _dir) = generate_from(&[
        ("reference/strings/str-frob.xml", &target),
        ("reference/strings/str-zap.xml", &alias),
    ]);

    assert!(rendered.text.contains("Frobnicates str_zap style."));
}

#[test]
fn missing_alias_target_contributes_nothing() {
    let alias = alias_doc("str_zap", "str_gone");
    let (rendered, _dir) = generate_from(&[("reference/strings/str-zap.xml", &alias)]);

    assert!(!rendered.text.contains("function str_zap"));
}

#[test]
fn self_referential_alias_contributes_nothing() {
    // The filename transform of the "target" points back at this very file.
    let alias = alias_doc("str_zap", "str_zap");
    let (rendered, _dir) = generate_from(&[("reference/strings/str-zap.xml", &alias)]);

    assert!(!rendered.text.contains("function str_zap"));
}

#[test]
fn mutually_referential_aliases_terminate_without_output() {
    let a = alias_doc("first_fn", "second_fn");
    let b = alias_doc("second_fn", "first_fn");
    let (rendered, _dir) = generate_from(&[
        ("reference/strings/first-fn.xml", &a),
        ("reference/strings/second-fn.xml", &b),
    ]);

    assert!(!rendered.text.contains("function first_fn"));
    assert!(!rendered.text.contains("function second_fn"));
}
