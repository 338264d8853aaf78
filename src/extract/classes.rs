//! Reserved-class lists and class synopsis extraction.

use roxmltree::Document;

use super::xml;
use crate::registry::Registry;

/// Section-id prefix under which the language reference documents its
/// reserved/well-known classes.
const RESERVED_CLASSES_PREFIX: &str = "reserved.classes";

/// Extract class name + description pairs from the reserved-classes
/// sections.
pub fn extract_reserved(doc: &Document, interface_doc: bool, registry: &mut Registry) {
    for sect2 in xml::descendants(doc.root_element(), "sect2") {
        if !xml::xml_id(sect2).is_some_and(|id| id.starts_with(RESERVED_CLASSES_PREFIX)) {
            continue;
        }
        for varlist in xml::children(sect2, "variablelist") {
            for entry in xml::children(varlist, "varlistentry") {
                let Some(name) = xml::first_child(entry, "term")
                    .and_then(|term| xml::first_child(term, "classname"))
                    .map(xml::text)
                else {
                    continue;
                };
                if name.is_empty() {
                    continue;
                }
                let key = registry.upsert_class(&name, interface_doc);
                if let Some(listitem) = xml::first_child(entry, "listitem")
                    && let Some(class) = registry.classes.get_mut(&key)
                {
                    class.description = xml::inner_markup(listitem);
                }
            }
        }
    }
}

/// Extract class names, `extends`/`implements` relationships and extra
/// description sections from class synopses.
///
/// The parent/interface markers are resolved with document-wide queries:
/// a synopsis page describes exactly one class, so any `ooclass` marked
/// `extends` and any `oointerface` in the document belong to it.
pub fn extract_synopsis(doc: &Document, interface_doc: bool, registry: &mut Registry) {
    let root = doc.root_element();

    for info in xml::descendants(root, "classsynopsisinfo") {
        let name = xml::first_child(info, "ooclass")
            .and_then(|ooclass| xml::first_child(ooclass, "classname"))
            .map(xml::text)
            .unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let key = registry.upsert_class(&name, interface_doc);

        let mut extends = None;
        for ooclass in xml::descendants(root, "ooclass") {
            let modifier = xml::first_child(ooclass, "modifier")
                .map(xml::text)
                .unwrap_or_default();
            if modifier == "extends"
                && let Some(parent) = xml::first_child(ooclass, "classname")
            {
                extends = Some(xml::text(parent));
            }
        }

        let implements: Vec<String> = xml::descendants(root, "oointerface")
            .filter_map(|iface| xml::first_child(iface, "interfacename"))
            .map(xml::text)
            .collect();

        // Sections whose id is prefixed by the class name hold additional
        // description paragraphs.
        let mut extra_desc = String::new();
        for section in xml::descendants(root, "section") {
            if !xml::xml_id(section).is_some_and(|id| id.starts_with(&key)) {
                continue;
            }
            for para in xml::children(section, "para") {
                extra_desc.push('\n');
                extra_desc.push_str(&xml::text(para));
            }
        }

        if let Some(class) = registry.classes.get_mut(&key) {
            if extends.is_some() {
                class.extends = extends;
            }
            class.description.push_str(&extra_desc);
        }
        for interface in implements {
            registry.add_implements(&key, interface);
        }
    }
}
