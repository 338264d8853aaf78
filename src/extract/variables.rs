//! Predefined-variable entries (`$GLOBALS`, `$_SERVER`, ...) and the
//! superglobal membership list.

use roxmltree::Document;

use super::xml;
use crate::registry::Registry;

const DEPRECATED_SUFFIX: &str = " [deprecated]";
const SUPERGLOBALS_ID: &str = "language.variables.superglobals";

pub fn extract(doc: &Document, registry: &mut Registry) {
    let root = doc.root_element();

    for varentry in xml::descendants(root, "varentry") {
        for refnamediv in xml::descendants(varentry, "refnamediv") {
            let purpose = xml::first_child(refnamediv, "refpurpose")
                .map(xml::text)
                .unwrap_or_default();
            for refname in xml::children(refnamediv, "refname") {
                let mut name = xml::text(refname);
                if !name.starts_with('$') {
                    continue;
                }
                let deprecated = if let Some(stripped) = name.strip_suffix(DEPRECATED_SUFFIX) {
                    name = stripped.to_string();
                    true
                } else {
                    false
                };
                let entry = registry.upsert_variable(&name);
                entry.deprecated = deprecated;
                entry.description = purpose.clone();
            }
        }
    }

    // The superglobals overview lists the member names separately from
    // the per-variable entries.
    for varentry in xml::descendants(root, "varentry")
        .filter(|v| xml::xml_id(*v) == Some(SUPERGLOBALS_ID))
    {
        for member in xml::descendants(varentry, "member") {
            for varname in xml::children(member, "varname") {
                registry.mark_superglobal(&xml::text(varname));
            }
        }
    }
}
