//! Rendering of the assembled model as PHP stub declarations.
//!
//! Pure: the emitter walks the model in the order the assembler fixed
//! and appends text; the only bookkeeping is the running declaration
//! count reported in the final summary.

use std::collections::HashMap;
use std::fmt::Write;

use crate::assemble::{GLOBAL_CLASS, StubModel};
use crate::comment::render_comment;

pub const FILE_HEADER: &str =
    "<?php\n// THIS FILE IS GENERATED\n// WARNING! All changes made in this file will be lost!\n\n";

const INDENT: &str = "    ";

/// The generated artifact text plus its declaration count.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub declarations: usize,
}

pub fn render(model: &StubModel, versions: &HashMap<String, String>) -> Rendered {
    let mut out = String::from(FILE_HEADER);
    let mut count = 0usize;

    for (name, var) in &model.variables {
        count += 1;
        let mut more = Vec::new();
        if var.deprecated {
            more.push("@deprecated".to_string());
        }
        if var.superglobal {
            more.push("@superglobal".to_string());
        }
        out.push_str(&render_comment(&var.description, &more, ""));
        let _ = writeln!(out, "{name} = array();\n");
    }

    for class in &model.classes {
        let global = class.key == GLOBAL_CLASS;
        let indent = if global { "" } else { INDENT };

        if !global {
            out.push_str(&render_comment(&class.description, &[], ""));
            out.push_str(if class.is_interface { "interface " } else { "class " });
            out.push_str(&class.display_name);
            if let Some(extends) = &class.extends {
                let _ = write!(out, " extends {extends}");
            }
            if !class.implements.is_empty() {
                let _ = write!(out, " implements {}", class.implements.join(", "));
            }
            out.push_str(" {\n");
            count += 1;

            for constant in &class.constants {
                let _ = writeln!(out, "{INDENT}const {} = {};", constant.name, constant.initializer);
                count += 1;
            }
        }

        for property in &class.properties {
            if !class.suppress_member_docs {
                let mut more = Vec::new();
                if !property.type_hint.is_empty() {
                    more.push(format!("@var {}", property.type_hint));
                }
                out.push_str(&render_comment(&property.description, &more, indent));
            }
            let _ = writeln!(out, "{indent}var ${};", property.name);
            count += 1;
        }

        for function in &class.functions {
            if !class.suppress_member_docs {
                let mut more = Vec::new();
                for param in &function.parameters {
                    more.push(format!(
                        "@param {} ${} {}",
                        param.type_hint,
                        param.name,
                        param.description.trim()
                    ));
                }
                if !function.return_type.is_empty() {
                    more.push(format!("@return {}", function.return_type));
                }
                let version_key = if global {
                    function.name.to_lowercase()
                } else {
                    format!("{}::{}", class.key, function.name.to_lowercase())
                };
                if let Some(version) = versions.get(&version_key) {
                    more.push(format!("@since {version}"));
                }
                out.push_str(&render_comment(&function.description, &more, indent));
            }
            let _ = write!(out, "{indent}function {}(", function.name);
            for (i, param) in function.parameters.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if param.by_ref {
                    out.push('&');
                }
                out.push('$');
                out.push_str(&param.name);
            }
            out.push(')');
            // Interface members are signature-only.
            out.push_str(if class.is_interface { ";" } else { "{}" });
            out.push_str("\n\n");
            count += 1;
        }

        if !global {
            out.push_str("}\n");
        }
    }

    for constant in &model.free_constants {
        if let Some(comment) = &constant.comment {
            out.push_str(&render_comment(comment, &[], ""));
        }
        let _ = writeln!(out, "define('{}', {});", constant.name, constant.initializer);
        count += 1;
    }

    Rendered {
        text: out,
        declarations: count,
    }
}
