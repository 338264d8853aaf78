//! Document extraction: dispatches one documentation file to the
//! shape-specific extractors and merges their results into the registry.
//!
//! Dispatch is structural, not declared: every document is probed for
//! variable entries, constant tables and class synopses, and a document
//! carrying a top-level reference section additionally contributes
//! descriptions, properties and method signatures.  Documents that match
//! nothing contribute nothing — that is a policy, not an error.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::registry::Registry;

pub mod classes;
pub mod constants;
pub mod synopsis;
pub mod variables;
pub mod xml;

/// Sections that are structurally broken in the corpus and must be
/// excised before parsing.
const REMOVED_SECTIONS: &[&str] = &[
    "apd.installwin32",
    "intl.intldateformatter-constants.calendartypes",
];

/// Markers whose joint presence in the raw text flags an interface
/// reference document.  Checked before entity stripping, which would
/// remove the second one.
const CLASSREF_MARKER: &str = "<phpdoc:classref";
const INTERFACE_SYNOPSIS_MARKER: &str = "&reftitle.interfacesynopsis;";

/// Named entity references are not resolvable without the corpus DTD;
/// the three the plain-text pipeline understands are protected, all
/// others are dropped outright.
static ENTITY_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:(&amp;|&gt;|&lt;)|&[A-Za-z.0-9_-]+;)").unwrap());

static REMOVED_SECTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REMOVED_SECTIONS
        .iter()
        .map(|id| {
            let open = regex::escape(&format!("<section xml:id=\"{id}\">"));
            Regex::new(&format!("(?s){open}.*?</section>")).unwrap()
        })
        .collect()
});

/// Extract one document into the registry.  Returns whether anything was
/// contributed; unreadable or structurally irrelevant documents yield
/// `false` without surfacing an error.
pub fn extract_file(path: &Path, registry: &mut Registry) -> bool {
    let mut visited = HashSet::new();
    extract_file_inner(path, None, registry, &mut visited)
}

fn extract_file_inner(
    path: &Path,
    func_overload: Option<&str>,
    registry: &mut Registry,
    visited: &mut HashSet<PathBuf>,
) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
        return false;
    };
    if !file_name.ends_with(".xml") || file_name.starts_with("entities.") {
        return false;
    }
    // Alias chains are bounded: a document already being extracted is
    // never entered again.
    if !visited.insert(path.to_path_buf()) {
        return false;
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            debug!("skipping unreadable {}: {err}", path.display());
            return false;
        }
    };

    let interface_doc =
        raw.contains(CLASSREF_MARKER) && raw.contains(INTERFACE_SYNOPSIS_MARKER);

    let mut cleaned = ENTITY_REF.replace_all(&raw, "$1").into_owned();
    for pattern in REMOVED_SECTION_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }

    info!("reading documentation from {}", path.display());

    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = true;
    let doc = match roxmltree::Document::parse_with_options(&cleaned, options) {
        Ok(doc) => doc,
        Err(err) => {
            debug!("skipping unparseable {}: {err}", path.display());
            return false;
        }
    };

    // The version-metadata document is a flat map, nothing else applies.
    if file_name == "versions.xml" {
        extract_versions(&doc, registry);
        return true;
    }

    variables::extract(&doc, registry);
    constants::extract(&doc, &file_name, registry);
    classes::extract_reserved(&doc, interface_doc, registry);
    classes::extract_synopsis(&doc, interface_doc, registry);

    // Function/method/property content requires a reference section.
    let root = doc.root_element();
    let Some(refsect1) = xml::first_child(root, "refsect1") else {
        return false;
    };

    let desc = synopsis::documentation(refsect1);

    let mut added = false;
    added |= synopsis::extract_fields(refsect1, &desc, interface_doc, registry);
    added |= synopsis::extract_methods(root, refsect1, &desc, func_overload, interface_doc, registry);

    if !added
        && let Some((alias_name, base_name)) = alias_target(root)
    {
        // A pure alias document: extract the aliased document under this
        // document's name.
        let base_file = path.with_file_name(format!("{}.xml", base_name.replace('_', "-")));
        if base_file == path || !base_file.exists() {
            warn!(
                "alias {} has no resolvable target {}",
                path.display(),
                base_file.display()
            );
            return false;
        }
        return extract_file_inner(&base_file, Some(&alias_name), registry, visited);
    }

    added
}

/// The document declares itself a pure alias when its purpose line names
/// the aliased function.  Returns `(alias name, aliased function name)`.
fn alias_target(root: roxmltree::Node) -> Option<(String, String)> {
    let refnamediv = xml::first_child(root, "refnamediv")?;
    let refpurpose = xml::first_child(refnamediv, "refpurpose")?;
    let base = xml::first_child(refpurpose, "function").map(xml::text)?;
    let alias = xml::first_child(refnamediv, "refname").map(xml::text)?;
    if base.is_empty() || alias.is_empty() {
        return None;
    }
    Some((alias, base))
}

/// `versions.xml`: a flat list of `<function name="..." from="..."/>`
/// elements mapping each function to the version that introduced it.
fn extract_versions(doc: &roxmltree::Document, registry: &mut Registry) {
    for function in xml::children(doc.root_element(), "function") {
        if let Some(name) = function.attribute("name") {
            let from = function.attribute("from").unwrap_or_default();
            registry.record_version(name, from);
        }
    }
}
