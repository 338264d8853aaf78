#![allow(dead_code)]

use std::fs;

use phpdoc_stubgen::emit::Rendered;
use phpdoc_stubgen::generator;

/// Write fixture documents into a temp tree and run the full pipeline
/// over it.  The `dir()` injection is disabled so the output contains
/// only what the fixtures contribute.
pub fn generate_from(files: &[(&str, &str)]) -> (Rendered, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for (rel_path, content) in files {
        let full = dir.path().join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create dirs");
        }
        fs::write(&full, content).expect("failed to write fixture");
    }
    let rendered = generator::generate(&[dir.path().to_path_buf()], false);
    (rendered, dir)
}

/// A minimal reference entry documenting one free function.
pub fn function_doc(name: &str, param: &str, param_type: &str, desc: &str) -> String {
    format!(
        r#"<refentry xml:id="function.{id}" xmlns="http://docbook.org/ns/docbook">
 <refnamediv>
  <refname>{name}</refname>
  <refpurpose>{desc}</refpurpose>
 </refnamediv>
 <refsect1 role="description">
  <para>{desc}</para>
  <methodsynopsis>
   <type>int</type><methodname>{name}</methodname>
   <methodparam><type>{param_type}</type><parameter>{param}</parameter></methodparam>
  </methodsynopsis>
 </refsect1>
</refentry>
"#,
        id = name.replace('_', "-"),
        name = name,
        param = param,
        param_type = param_type,
        desc = desc,
    )
}
