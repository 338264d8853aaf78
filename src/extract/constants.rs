//! Constant extraction.
//!
//! The corpus uses three mutually exclusive table layouts, attempted in
//! priority order: (a) the term/constant definition list found in most
//! files, (b) the entry table used by the big `constants.xml` appendix,
//! and (c) the row table used by `commandline.xml`.  A document matching
//! none of them contributes no constants.  Types default to `integer`
//! when undeclared; a constant seen earlier is never overwritten.

use roxmltree::Document;

use super::xml;
use crate::registry::Registry;

const DEFAULT_TYPE: &str = "integer";

pub fn extract(doc: &Document, file_name: &str, registry: &mut Registry) {
    let root = doc.root_element();

    // Layout (a): term/constant definition list, a direct child of the
    // document root.
    if let Some(varlist) = xml::first_child(root, "variablelist") {
        for entry in xml::children(varlist, "varlistentry") {
            let Some(term) = xml::first_child(entry, "term") else {
                continue;
            };
            let Some(constant) = xml::first_child(term, "constant") else {
                continue;
            };
            let mut name = xml::text(constant);
            if name.is_empty() {
                continue;
            }
            // Some terms read `NAME=value`; only the name is wanted.
            if let Some(pos) = name.find('=')
                && pos > 0
            {
                name.truncate(pos);
            }
            let ctype = xml::first_child(term, "type")
                .or_else(|| xml::first_child(term, "link"))
                .map(xml::text)
                .unwrap_or_default();
            registry.register_constant(&name, &ctype);
        }
        return;
    }

    // Layout (b): the constants.xml appendix stores name, value and
    // comment as consecutive table entries.
    if file_name == "constants.xml" && xml::descendants(root, "constant").next().is_some() {
        let entries: Vec<_> = xml::descendants(root, "entry").collect();
        for (i, entry) in entries.iter().enumerate() {
            let Some(constant) = xml::first_child(*entry, "constant") else {
                continue;
            };
            let name = xml::text(constant);
            if name.is_empty() {
                continue;
            }
            match xml::first_child(*entry, "type") {
                Some(ctype) => {
                    // The entry after the value holds the comment, when it
                    // carries no further structure of its own.
                    if let Some(comment_entry) = entries.get(i + 2)
                        && !xml::has_element_children(*comment_entry)
                    {
                        registry
                            .register_constant_comment(&name, &xml::inner_markup(*comment_entry));
                    }
                    registry.register_constant(&name, &xml::text(ctype));
                }
                None => registry.register_constant(&name, DEFAULT_TYPE),
            }
        }
        return;
    }

    // Layout (c): commandline.xml rows put the constant in column 0 and
    // the comment in column 1.
    if file_name == "commandline.xml" {
        for row in xml::descendants(root, "row") {
            let cells: Vec<_> = xml::children(row, "entry").collect();
            let Some(first) = cells.first() else {
                continue;
            };
            let Some(constant) = xml::first_child(*first, "constant") else {
                continue;
            };
            let name = xml::text(constant).trim().to_string();
            if name.is_empty() {
                continue;
            }
            let ctype = xml::first_child(constant, "type")
                .map(xml::text)
                .unwrap_or_else(|| DEFAULT_TYPE.to_string());
            if let Some(second) = cells.get(1)
                && let Some(para) = xml::first_child(*second, "para")
            {
                registry.register_constant_comment(&name, &xml::inner_markup(para));
            }
            registry.register_constant(&name, &ctype);
        }
    }
}
