//! C++ header exporter.
//!
//! Layout, with tab indentation:
//!
//! ```text
//! #pragma once
//!
//! #include <cstddef>
//! ...
//!
//! namespace Assets {
//!
//!     namespace {
//!
//!         std::map<std::string, std::vector<unsigned char> > data = {
//!             { "icons/logo.png", {
//!                     0x89, 0x50, 0x4e, 0x47,
//!                 }
//!             },
//!         };
//!     }
//!
//!     inline const char* get(const char* name) { ... }
//!
//!     inline std::size_t size(const char* name) { ... }
//! }
//! ```

use std::fmt::Write as _;

use super::{byte_lines, indent, is_identifier};
use crate::error::{BindataError, Result};
use crate::table::ResourceTable;
use crate::types::ExportConfig;

const INDENT: &str = "\t";

const HEADERS: &[&str] = &["<cstddef>", "<map>", "<string>", "<vector>"];

const KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "co_await", "co_return",
    "co_yield", "compl", "concept", "const", "const_cast", "consteval", "constexpr", "constinit",
    "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
    "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
    "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr",
    "operator", "or", "or_eq", "private", "protected", "public", "register", "reinterpret_cast",
    "requires", "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast",
    "std", "struct", "switch", "template", "this", "thread_local", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
];

/// Names declared next to the table; the table can't reuse them.
const ACCESSORS: &[&str] = &["get", "size"];

/// Export the table as a C++ header.
pub fn export(table: &ResourceTable, config: &ExportConfig) -> Result<String> {
    validate_namespace(&config.namespace)?;
    validate_table_name(&config.table_name)?;

    let map = config.table_name.as_str();
    let mut out = String::new();

    out.push_str("#pragma once\n\n");
    for header in HEADERS {
        let _ = writeln!(out, "#include {}", header);
    }
    out.push('\n');

    let _ = writeln!(out, "namespace {} {{", config.namespace);
    out.push('\n');

    indent(&mut out, 1, INDENT);
    out.push_str("namespace {\n");
    out.push('\n');

    define_map(&mut out, table, config, 2);

    indent(&mut out, 1, INDENT);
    out.push_str("}\n");
    out.push('\n');

    define_getter(&mut out, map, 1);

    if config.size_accessor {
        out.push('\n');
        define_sizeof(&mut out, map, 1);
    }

    out.push_str("}\n");
    Ok(out)
}

fn define_map(out: &mut String, table: &ResourceTable, config: &ExportConfig, level: usize) {
    indent(out, level, INDENT);
    let _ = writeln!(
        out,
        "std::map<std::string, std::vector<unsigned char> > {} = {{",
        config.table_name
    );

    for resource in table.iter() {
        indent(out, level + 1, INDENT);
        let _ = writeln!(out, "{{ {}, {{", string_literal(&resource.identifier));
        byte_lines(out, &resource.data, config.bytes_per_line, level + 3, INDENT);
        indent(out, level + 2, INDENT);
        out.push_str("}\n");
        indent(out, level + 1, INDENT);
        out.push_str("},\n");
    }

    indent(out, level, INDENT);
    out.push_str("};\n");
}

fn define_getter(out: &mut String, map: &str, level: usize) {
    indent(out, level, INDENT);
    out.push_str("inline const char* get(const char* name) {\n");
    indent(out, level + 1, INDENT);
    let _ = writeln!(out, "auto it = {}.find(name);", map);
    indent(out, level + 1, INDENT);
    let _ = writeln!(
        out,
        "return it == {}.end() ? nullptr : reinterpret_cast<const char*>(it->second.data());",
        map
    );
    indent(out, level, INDENT);
    out.push_str("}\n");
}

fn define_sizeof(out: &mut String, map: &str, level: usize) {
    indent(out, level, INDENT);
    out.push_str("inline std::size_t size(const char* name) {\n");
    indent(out, level + 1, INDENT);
    let _ = writeln!(out, "auto it = {}.find(name);", map);
    indent(out, level + 1, INDENT);
    let _ = writeln!(out, "return it == {}.end() ? 0 : it->second.size();", map);
    indent(out, level, INDENT);
    out.push_str("}\n");
}

/// Quote `s` as a C++ string literal.
///
/// Control characters use three-digit octal escapes, which can't swallow a
/// following digit the way `\x` escapes do.
fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '?' => out.push_str("\\?"),
            c if (c as u32) < 0x20 || c == '\x7f' => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(BindataError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: "namespace must not be empty",
        });
    }
    for part in namespace.split("::") {
        validate_name(part).map_err(|_| BindataError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: "expected a C++ identifier or '::'-separated identifiers",
        })?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if !is_identifier(name) || KEYWORDS.contains(&name) {
        return Err(BindataError::InvalidNamespace {
            namespace: name.to_string(),
            reason: "not a usable C++ identifier",
        });
    }
    Ok(())
}

fn validate_table_name(name: &str) -> Result<()> {
    validate_name(name)?;
    if ACCESSORS.contains(&name) {
        return Err(BindataError::InvalidNamespace {
            namespace: name.to_string(),
            reason: "table name clashes with a generated accessor",
        });
    }
    Ok(())
}
