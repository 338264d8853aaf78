//! Predefined variable extraction: descriptions, the deprecated-suffix
//! convention and superglobal membership.

mod common;

use common::generate_from;

#[test]
fn variable_entry_renders_an_array_stub_with_description() {
    let doc = r#"<reference xmlns="http://docbook.org/ns/docbook" xmlns:phpdoc="http://php.net/ns/phpdoc">
 <phpdoc:varentry>
  <refnamediv>
   <refname>$GLOBALS</refname>
   <refpurpose>References all variables available in global scope</refpurpose>
  </refnamediv>
 </phpdoc:varentry>
</reference>
"#;
    let (rendered, _dir) = generate_from(&[("language/predefined/globals.xml", doc)]);

    assert!(rendered.text.contains("$GLOBALS = array();"));
    assert!(
        rendered
            .text
            .contains("References all variables available in global scope")
    );
}

#[test]
fn names_without_the_variable_sigil_are_ignored() {
    let doc = r#"<reference xmlns="http://docbook.org/ns/docbook" xmlns:phpdoc="http://php.net/ns/phpdoc">
 <phpdoc:varentry>
  <refnamediv>
   <refname>php_errormsg</refname>
   <refpurpose>The previous error message</refpurpose>
  </refnamediv>
 </phpdoc:varentry>
</reference>
"#;
    let (rendered, _dir) = generate_from(&[("language/predefined/errormsg.xml", doc)]);

    assert!(!rendered.text.contains("php_errormsg = array();"));
}

#[test]
fn deprecated_suffix_is_stripped_and_annotated() {
    let doc = r#"<reference xmlns="http://docbook.org/ns/docbook" xmlns:phpdoc="http://php.net/ns/phpdoc">
 <phpdoc:varentry>
  <refnamediv>
   <refname>$HTTP_POST_VARS [deprecated]</refname>
   <refpurpose>HTTP POST variables</refpurpose>
  </refnamediv>
 </phpdoc:varentry>
</reference>
"#;
    let (rendered, _dir) = generate_from(&[("language/predefined/httppost.xml", doc)]);

    assert!(rendered.text.contains("$HTTP_POST_VARS = array();"));
    assert!(!rendered.text.contains("[deprecated]"));
    assert!(rendered.text.contains("@deprecated"));
}

#[test]
fn superglobal_membership_is_annotated() {
    let entry = r#"<reference xmlns="http://docbook.org/ns/docbook" xmlns:phpdoc="http://php.net/ns/phpdoc">
 <phpdoc:varentry>
  <refnamediv>
   <refname>$_SERVER</refname>
   <refpurpose>Server and execution environment information</refpurpose>
  </refnamediv>
 </phpdoc:varentry>
</reference>
"#;
    let list = r#"<reference xmlns="http://docbook.org/ns/docbook" xmlns:phpdoc="http://php.net/ns/phpdoc">
 <phpdoc:varentry xml:id="language.variables.superglobals">
  <simplelist>
   <member><varname>$_SERVER</varname></member>
  </simplelist>
 </phpdoc:varentry>
</reference>
"#;
    let (rendered, _dir) = generate_from(&[
        ("language/predefined/server.xml", entry),
        ("language/predefined/superglobals.xml", list),
    ]);

    assert!(rendered.text.contains("$_SERVER = array();"));
    assert!(rendered.text.contains("@superglobal"));
}
