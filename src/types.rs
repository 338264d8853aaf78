//! Data types for the extracted documentation model.
//!
//! These are owned records built up while reading the documentation
//! tree; none of them keep references into the parsed XML documents.

/// A single function/method parameter extracted from a method synopsis.
#[derive(Debug, Clone, Default)]
pub struct ParameterRecord {
    /// The parameter name WITHOUT the `$` sigil, sanitized: `/` and `-`
    /// removed, `*`/`&` markers trimmed, a leading digit prefixed with `_`.
    pub name: String,
    /// Declared type (e.g. "string", "int"), possibly empty.
    pub type_hint: String,
    /// Free-text description from the parameters section, possibly empty.
    pub description: String,
    /// Whether the parameter is passed by reference.
    pub by_ref: bool,
}

/// A free function or class method.
#[derive(Debug, Clone)]
pub struct FunctionRecord {
    /// The emitted name.  For alias documents this is the alias name, not
    /// the name found in the aliased synopsis.
    pub name: String,
    pub parameters: Vec<ParameterRecord>,
    /// Declared return type, possibly empty.
    pub return_type: String,
    /// Free-text description, possibly empty.
    pub description: String,
}

/// A class property from a field synopsis.
#[derive(Debug, Clone)]
pub struct PropertyRecord {
    /// The property name WITHOUT the `$` sigil.
    pub name: String,
    /// Declared type, possibly empty.
    pub type_hint: String,
    pub description: String,
}

/// A class (or interface) accumulated across every document that
/// mentions it.  Keyed in the registry by the lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct ClassRecord {
    /// Original-casing name used in the emitted declaration.  First-seen
    /// casing wins, but a later mixed-case mention replaces an all-lower
    /// first sighting.
    pub display_name: String,
    pub description: String,
    /// Set when any contributing document was an interface reference.
    /// Never cleared; the assembler demotes interfaces that carry an
    /// `implements` list.
    pub is_interface: bool,
    /// Single parent class, when the synopsis declares one.
    pub extends: Option<String>,
    /// Implemented interface names, in first-seen order, deduplicated.
    pub implements: Vec<String>,
    pub properties: Vec<PropertyRecord>,
    pub functions: Vec<FunctionRecord>,
}

/// A predefined variable such as `$GLOBALS` or `$_SERVER`.
#[derive(Debug, Clone, Default)]
pub struct VariableEntry {
    pub description: String,
    /// Set when the documented name carried the ` [deprecated]` suffix.
    pub deprecated: bool,
    /// Set when the name appears in the superglobals member list.
    pub superglobal: bool,
}
