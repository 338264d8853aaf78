//! End-to-end generation: walk, extract, assemble, emit.

use std::path::PathBuf;

use crate::assemble;
use crate::emit::{self, Rendered};
use crate::extract;
use crate::registry::Registry;
use crate::walker;

/// Run the whole extraction pipeline over the given document roots and
/// render the stub file.  Generation itself cannot fail: documents that
/// cannot be read or parsed simply contribute nothing.
pub fn generate(roots: &[PathBuf], inject_dir_stub: bool) -> Rendered {
    let mut registry = Registry::new();
    for file in walker::collect_files(roots) {
        extract::extract_file(&file, &mut registry);
    }
    assemble::apply_fixups(&mut registry, inject_dir_stub);
    let model = assemble::assemble(&registry);
    emit::render(&model, &registry.versions)
}
