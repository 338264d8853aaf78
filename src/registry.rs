//! The entity registry: shared mutable state populated by the document
//! extractors during a single pass over the documentation tree.
//!
//! Merge precedence is enforced here rather than at the call sites:
//! classes are upserted and never deleted, constants are first-seen-wins,
//! and function identities are claimed exactly once through
//! [`Registry::try_claim_function`].

use std::collections::{HashMap, HashSet};

use crate::types::{ClassRecord, FunctionRecord, PropertyRecord, VariableEntry};

#[derive(Debug, Default)]
pub struct Registry {
    /// Lower-cased class name → class record.
    pub classes: HashMap<String, ClassRecord>,
    /// Constant name (possibly `Class::NAME` scoped) → declared type.
    pub constants: HashMap<String, String>,
    /// Constant name → inline comment markup, for the table layouts that
    /// carry one.
    pub constant_comments: HashMap<String, String>,
    /// Variable name (with `$` sigil) → entry.
    pub variables: HashMap<String, VariableEntry>,
    /// Lower-cased `Class::method` or bare function name → version string
    /// where the symbol was introduced.
    pub versions: HashMap<String, String>,
    /// Already-claimed function identities (`class::name`, lower-cased).
    seen_functions: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update the class entry for `name` and return its
    /// registry key (the lower-cased name).
    ///
    /// A mixed-case mention updates the display name; `interface_doc`
    /// can only set the interface flag, never clear it.
    pub fn upsert_class(&mut self, name: &str, interface_doc: bool) -> String {
        let key = name.to_lowercase();
        match self.classes.get_mut(&key) {
            Some(class) => {
                if key != name {
                    class.display_name = name.to_string();
                }
                if interface_doc {
                    class.is_interface = true;
                }
            }
            None => {
                self.classes.insert(
                    key.clone(),
                    ClassRecord {
                        display_name: name.to_string(),
                        is_interface: interface_doc,
                        ..ClassRecord::default()
                    },
                );
            }
        }
        key
    }

    /// Register a constant's declared type.  First-seen wins: later
    /// documents never overwrite an existing constant's type.
    pub fn register_constant(&mut self, name: &str, ctype: &str) {
        self.constants
            .entry(name.to_string())
            .or_insert_with(|| ctype.to_string());
    }

    pub fn register_constant_comment(&mut self, name: &str, comment: &str) {
        if !comment.is_empty() {
            self.constant_comments
                .insert(name.to_string(), comment.to_string());
        }
    }

    /// Get or create the variable entry for `name`.
    pub fn upsert_variable(&mut self, name: &str) -> &mut VariableEntry {
        self.variables.entry(name.to_string()).or_default()
    }

    pub fn mark_superglobal(&mut self, name: &str) {
        self.upsert_variable(name).superglobal = true;
    }

    pub fn record_version(&mut self, name: &str, from: &str) {
        self.versions.insert(name.to_lowercase(), from.to_string());
    }

    /// Claim the identity `class::function` (case-insensitive).  Returns
    /// false when an earlier document already claimed it, in which case
    /// the caller must drop its definition.
    pub fn try_claim_function(&mut self, class: &str, function: &str) -> bool {
        self.seen_functions
            .insert(format!("{}::{}", class.to_lowercase(), function.to_lowercase()))
    }

    pub fn add_property(&mut self, class: &str, interface_doc: bool, property: PropertyRecord) {
        let key = self.upsert_class(class, interface_doc);
        if let Some(record) = self.classes.get_mut(&key) {
            record.properties.push(property);
        }
    }

    pub fn add_function(&mut self, class: &str, interface_doc: bool, function: FunctionRecord) {
        let key = self.upsert_class(class, interface_doc);
        if let Some(record) = self.classes.get_mut(&key) {
            record.functions.push(function);
        }
    }

    /// Append an interface name to a class's `implements` list, keeping
    /// the list an ordered set.
    pub fn add_implements(&mut self, class_key: &str, interface: String) {
        if let Some(record) = self.classes.get_mut(class_key)
            && !record.implements.contains(&interface)
        {
            record.implements.push(interface);
        }
    }
}
