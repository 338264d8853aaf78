//! Post-extraction assembly: corpus fixups, deterministic ordering,
//! skip-lists, scoped-constant placement and interface demotion.
//!
//! The assembler turns the registry into the exact sequence of
//! declarations the emitter renders; nothing is re-ordered after this
//! point.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::registry::Registry;
use crate::types::{FunctionRecord, ParameterRecord, PropertyRecord, VariableEntry};

/// Classes that exist in the documentation but cannot be declared:
/// placeholders (`self`, `parent`, `static`) and classes stubbed
/// elsewhere.  Compared against the lower-cased registry key.
pub const SKIP_CLASSES: &[&str] = &[
    "self",
    "parent",
    "__php_incomplete_class",
    "php_user_filter",
    "static",
];

/// Documented free functions that do not actually exist as callables.
pub const SKIP_FUNCTIONS: &[&str] = &["delete"];

/// Documented method names that are keywords and cannot be declared.
pub const SKIP_METHODS: &[&str] = &["list", "declare", "do", "echo", "function"];

/// The pseudo-class whose functions are emitted at the top level.
pub const GLOBAL_CLASS: &str = "global";

/// The base class hoisted to the front of the class ordering so every
/// later `extends` clause has its parent already declared.
const FIRST_CLASS: &str = "exception";

/// The one class whose upstream documentation is too broken to emit as
/// member comments.
const UNDOCUMENTED_CLASS: &str = "directory";

/// A constant ready for emission.
#[derive(Debug, Clone)]
pub struct Constant {
    pub name: String,
    /// PHP initializer literal inferred from the declared type.
    pub initializer: &'static str,
    pub comment: Option<String>,
}

/// A class with its members ordered and filtered for emission.
#[derive(Debug, Clone)]
pub struct AssembledClass {
    /// Lower-cased registry key; [`GLOBAL_CLASS`] for free functions.
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub is_interface: bool,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    /// Scoped constants that named this class as their owner.
    pub constants: Vec<Constant>,
    pub properties: Vec<PropertyRecord>,
    pub functions: Vec<FunctionRecord>,
    /// Suppress member doc blocks (the `directory` workaround).
    pub suppress_member_docs: bool,
}

/// The fully ordered emission model.
#[derive(Debug, Clone, Default)]
pub struct StubModel {
    pub variables: Vec<(String, VariableEntry)>,
    pub classes: Vec<AssembledClass>,
    pub free_constants: Vec<Constant>,
}

/// Corpus fixups applied between extraction and assembly:
/// every scoped constant's owner gets a class entry (with the `imagick`
/// casing remap), and — outside debug runs — the `dir()` function, whose
/// upstream documentation is unparseable, is injected by hand.
pub fn apply_fixups(registry: &mut Registry, inject_dir_stub: bool) {
    let owners: Vec<String> = registry
        .constants
        .keys()
        .filter_map(|name| name.split_once("::").map(|(owner, _)| owner))
        .filter(|owner| !owner.is_empty())
        .map(|owner| {
            if owner == "imagick" {
                "Imagick".to_string()
            } else {
                owner.to_string()
            }
        })
        .collect();
    for owner in owners {
        registry.upsert_class(&owner, false);
    }

    if inject_dir_stub {
        registry.add_function(
            GLOBAL_CLASS,
            false,
            FunctionRecord {
                name: "dir".to_string(),
                parameters: vec![ParameterRecord {
                    name: "path".to_string(),
                    type_hint: "string".to_string(),
                    description: String::new(),
                    by_ref: false,
                }],
                return_type: "Directory".to_string(),
                description: "Return an instance of the Directory class".to_string(),
            },
        );
    }
}

/// The PHP initializer literal for a constant of the declared type.
/// Undeclared or unknown types default to an integer.
pub fn const_type_value(ctype: &str) -> &'static str {
    match ctype {
        "integer" | "int" => "0",
        "string" => "''",
        "bool" => "false",
        "float" => "0.0",
        _ => "0",
    }
}

/// Case-insensitive natural ordering: digit runs compare by numeric
/// value, everything else by lower-cased code point.
pub fn natcasecmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let mut x = i;
            let mut y = j;
            while x < a.len() && a[x].is_ascii_digit() {
                x += 1;
            }
            while y < b.len() && b[y].is_ascii_digit() {
                y += 1;
            }
            let run_a: String = a[i..x].iter().collect();
            let run_b: String = b[j..y].iter().collect();
            let num_a = run_a.trim_start_matches('0');
            let num_b = run_b.trim_start_matches('0');
            let ord = num_a
                .len()
                .cmp(&num_b.len())
                .then_with(|| num_a.cmp(num_b));
            if ord != Ordering::Equal {
                return ord;
            }
            i = x;
            j = y;
        } else {
            let ord = a[i].cmp(&b[j]);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

/// Order and filter the registry into the emission model.
pub fn assemble(registry: &Registry) -> StubModel {
    let mut variables: Vec<(String, VariableEntry)> = registry
        .variables
        .iter()
        .map(|(name, entry)| (name.clone(), entry.clone()))
        .collect();
    variables.sort_by(|a, b| natcasecmp(&a.0, &b.0));

    // Split scoped constants out to their owning class (matched
    // case-insensitively); the rest stay free-standing.
    let mut constant_names: Vec<&String> = registry.constants.keys().collect();
    constant_names.sort_by(|a, b| natcasecmp(a, b));

    let mut scoped: HashMap<String, Vec<Constant>> = HashMap::new();
    let mut free_constants = Vec::new();
    for name in constant_names {
        let initializer = const_type_value(&registry.constants[name]);
        match name.split_once("::") {
            Some((owner, constant)) if !owner.is_empty() => {
                scoped.entry(owner.to_lowercase()).or_default().push(Constant {
                    name: constant.to_string(),
                    initializer,
                    comment: None,
                });
            }
            _ => free_constants.push(Constant {
                name: name.clone(),
                initializer,
                comment: registry.constant_comments.get(name).cloned(),
            }),
        }
    }

    let mut keys: Vec<&String> = registry.classes.keys().collect();
    keys.sort_by(|a, b| natcasecmp(a, b));
    if let Some(pos) = keys.iter().position(|key| key.as_str() == FIRST_CLASS) {
        let first = keys.remove(pos);
        keys.insert(0, first);
    }

    let mut classes = Vec::new();
    for key in keys {
        if SKIP_CLASSES.contains(&key.as_str()) {
            continue;
        }
        let record = &registry.classes[key];
        let global = key == GLOBAL_CLASS;

        let mut properties = record.properties.clone();
        properties.sort_by(|a, b| natcasecmp(&a.name, &b.name));

        let mut functions: Vec<FunctionRecord> = record
            .functions
            .iter()
            .filter(|f| {
                if global {
                    !SKIP_FUNCTIONS.contains(&f.name.as_str())
                } else {
                    !SKIP_METHODS.contains(&f.name.as_str())
                }
            })
            .cloned()
            .collect();
        functions.sort_by(|a, b| natcasecmp(&a.name, &b.name));

        classes.push(AssembledClass {
            key: key.clone(),
            display_name: record.display_name.clone(),
            description: record.description.clone(),
            // A class that implements interfaces cannot itself be emitted
            // as an interface.
            is_interface: record.is_interface && record.implements.is_empty(),
            extends: record.extends.clone(),
            implements: record.implements.clone(),
            constants: if global {
                Vec::new()
            } else {
                scoped.remove(key).unwrap_or_default()
            },
            properties,
            functions,
            suppress_member_docs: key == UNDOCUMENTED_CLASS,
        });
    }

    StubModel {
        variables,
        classes,
        free_constants,
    }
}
