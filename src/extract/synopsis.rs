//! Reference-entry synopses: the primary description, field synopses
//! (properties) and method synopses (free functions and class methods),
//! including parameter extraction and name sanitization.

use roxmltree::Node;

use super::xml;
use crate::registry::Registry;
use crate::types::{FunctionRecord, ParameterRecord, PropertyRecord};

/// Bare names that are language constructs or pseudo-functions rather
/// than callable functions; their documents must not produce stubs.
const REJECTED_BARE_NAMES: &[&str] = &[
    "__halt_compiler",
    "exit",
    "die",
    "eval",
    "echo",
    "print",
    "array",
    "list",
    "isset",
    "unset",
    "empty",
];

/// Concatenate the descriptive paragraphs of the main reference section,
/// skipping the boilerplate paragraphs that merely note the
/// procedural-vs-object-oriented calling style duplicate.
pub fn documentation(refsect1: Node) -> String {
    let mut descs = Vec::new();
    for para in xml::children(refsect1, "para") {
        let text = xml::inner_markup(para);
        let lower = text.to_lowercase();
        if lower.contains("procedural style")
            || lower.contains("procedure style")
            || lower.contains("object oriented style")
        {
            continue;
        }
        descs.push(text);
    }
    descs.join("\n\n")
}

/// Extract property records from the field synopses of the reference
/// section's class synopsis.  Returns whether any synopsis was present.
pub fn extract_fields(
    refsect1: Node,
    desc: &str,
    interface_doc: bool,
    registry: &mut Registry,
) -> bool {
    let Some(classsynopsis) = xml::first_child(refsect1, "classsynopsis") else {
        return false;
    };
    let class = xml::first_child(classsynopsis, "ooclass")
        .and_then(|ooclass| xml::first_child(ooclass, "classname"))
        .map(xml::text)
        .unwrap_or_default();

    let mut found = false;
    for synopsis in xml::children(classsynopsis, "fieldsynopsis") {
        let name = xml::first_child(synopsis, "varname")
            .map(xml::text)
            .unwrap_or_default();
        let type_hint = xml::first_child(synopsis, "type")
            .map(xml::text)
            .unwrap_or_default();
        registry.add_property(
            &class,
            interface_doc,
            PropertyRecord {
                name,
                type_hint,
                description: desc.to_string(),
            },
        );
        found = true;
    }
    found
}

/// Extract function/method records from the reference section's method
/// synopses: every direct synopsis describes a free function, and the
/// class synopsis's first method synopsis describes a class method.
/// Returns whether any synopsis was present (even one whose name was
/// rejected — presence is what rules out the alias fallback).
pub fn extract_methods(
    doc_root: Node,
    refsect1: Node,
    desc: &str,
    func_overload: Option<&str>,
    interface_doc: bool,
    registry: &mut Registry,
) -> bool {
    let mut found = false;

    for synopsis in xml::children(refsect1, "methodsynopsis") {
        add_method("global", synopsis, doc_root, desc, func_overload, interface_doc, registry);
        found = true;
    }

    if let Some(classsynopsis) = xml::first_child(refsect1, "classsynopsis")
        && let Some(synopsis) = xml::first_child(classsynopsis, "methodsynopsis")
    {
        let class = xml::first_child(classsynopsis, "ooclass")
            .and_then(|ooclass| xml::first_child(ooclass, "classname"))
            .map(xml::text)
            .unwrap_or_default();
        add_method(&class, synopsis, doc_root, desc, func_overload, interface_doc, registry);
        found = true;
    }

    found
}

/// Port of the method-entry rules: split qualified names, reject
/// keywords/broken names, normalize vendor class prefixes, claim the
/// identity exactly once and record the function with its parameters.
fn add_method(
    class: &str,
    synopsis: Node,
    doc_root: Node,
    desc: &str,
    func_overload: Option<&str>,
    interface_doc: bool,
    registry: &mut Registry,
) -> bool {
    let mut class = class.to_string();
    let mut function = xml::first_child(synopsis, "methodname")
        .map(xml::text)
        .unwrap_or_default();

    if let Some(pos) = function.find("::") {
        class = function[..pos].to_string();
        function = function[pos + 2..].to_string();
    } else if let Some(pos) = function.find("->") {
        class = function[..pos].to_string();
        function = function[pos + 2..].to_string();
    } else if REJECTED_BARE_NAMES.contains(&function.as_str()) {
        return false;
    }

    if function.contains('-') || class.contains('-') {
        return false;
    }
    // Both trip bugs in the downstream lexer.
    if function == "isSet" || function == "clone" {
        return false;
    }
    if let Some(rest) = class.strip_prefix("DOM") {
        class = format!("Dom{rest}");
    }
    class = class.trim().to_string();
    if class == "imagick" {
        class = "Imagick".to_string();
    }

    let emitted_name = func_overload.unwrap_or(&function).to_string();
    if !registry.try_claim_function(&class, &emitted_name) {
        return false;
    }

    let mut parameters = extract_parameters(synopsis);
    attach_parameter_descriptions(doc_root, &mut parameters);

    let return_type = xml::first_child(synopsis, "type")
        .map(xml::text)
        .unwrap_or_default();
    let description = match func_overload {
        Some(alias) => desc.replace(&function, alias),
        None => desc.to_string(),
    };

    registry.add_function(
        &class,
        interface_doc,
        FunctionRecord {
            name: emitted_name,
            parameters,
            return_type,
            description,
        },
    );
    true
}

fn extract_parameters(synopsis: Node) -> Vec<ParameterRecord> {
    let mut parameters = Vec::new();
    for param in xml::children(synopsis, "methodparam") {
        let Some(parameter) = xml::first_child(param, "parameter") else {
            continue;
        };
        let raw_name = xml::text(parameter);
        let trimmed = raw_name.trim();
        if trimmed.is_empty() || trimmed == "..." {
            continue;
        }
        parameters.push(ParameterRecord {
            name: sanitize_parameter_name(&raw_name),
            type_hint: xml::first_child(param, "type")
                .map(xml::text)
                .unwrap_or_default(),
            description: String::new(),
            by_ref: parameter.attribute("role") == Some("reference"),
        });
    }
    parameters
}

/// Match the parameters section's entries to the synopsis parameters by
/// position; entries past the synopsis parameter list (variadic tails)
/// are ignored.
fn attach_parameter_descriptions(doc_root: Node, parameters: &mut [ParameterRecord]) {
    let mut i = 0;
    for refsect1 in xml::children(doc_root, "refsect1")
        .filter(|r| r.attribute("role") == Some("parameters"))
    {
        for entry in xml::descendants(refsect1, "varlistentry") {
            if i >= parameters.len() {
                continue;
            }
            let mut desc = String::new();
            if let Some(listitem) = xml::first_child(entry, "listitem") {
                for para in xml::children(listitem, "para") {
                    desc.push_str(&xml::inner_markup(para));
                    desc.push('\n');
                }
            }
            parameters[i].description = desc;
            i += 1;
        }
    }
}

/// Strip markers the emitted PHP grammar cannot carry in a parameter
/// name: `/` and `-` are removed, surrounding whitespace and `*`/`&`
/// markers trimmed, and a leading digit prefixed with `_`.
fn sanitize_parameter_name(raw: &str) -> String {
    let name = raw.replace(['/', '-'], "");
    let name = name.trim();
    let name = name.trim_matches('*');
    let mut name = name.trim_matches('&').to_string();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
