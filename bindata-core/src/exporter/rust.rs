//! Rust module exporter.
//!
//! Emits a `pub mod` with a static `(&str, &[u8])` slice and lookup functions
//! mirroring the C++ accessors: `get` returns `None` and `size` returns zero for
//! unknown identifiers.

use std::fmt::Write as _;

use super::{byte_lines, indent, is_identifier};
use crate::error::{BindataError, Result};
use crate::table::ResourceTable;
use crate::types::ExportConfig;

const INDENT: &str = "    ";

const KEYWORDS: &[&str] = &[
    "_", "Self", "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
    "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
    // reserved
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Export the table as a Rust module.
pub fn export(table: &ResourceTable, config: &ExportConfig) -> Result<String> {
    validate(&config.namespace, "expected a single Rust identifier")?;
    validate(&config.table_name, "table name must be a Rust identifier")?;

    let statik = config.table_name.to_uppercase();
    let mut out = String::new();

    out.push_str("// @generated by bindata. Do not edit.\n\n");
    let _ = writeln!(out, "pub mod {} {{", config.namespace);

    indent(&mut out, 1, INDENT);
    let _ = writeln!(out, "static {}: &[(&str, &[u8])] = &[", statik);
    for resource in table.iter() {
        indent(&mut out, 2, INDENT);
        let _ = writeln!(out, "({:?}, &[", resource.identifier);
        byte_lines(&mut out, &resource.data, config.bytes_per_line, 3, INDENT);
        indent(&mut out, 2, INDENT);
        out.push_str("]),\n");
    }
    indent(&mut out, 1, INDENT);
    out.push_str("];\n\n");

    indent(&mut out, 1, INDENT);
    out.push_str("/// Bytes of the named resource, `None` when absent.\n");
    indent(&mut out, 1, INDENT);
    out.push_str("pub fn get(name: &str) -> Option<&'static [u8]> {\n");
    indent(&mut out, 2, INDENT);
    let _ = writeln!(
        out,
        "{}.iter().find(|(id, _)| *id == name).map(|(_, data)| *data)",
        statik
    );
    indent(&mut out, 1, INDENT);
    out.push_str("}\n");

    if config.size_accessor {
        out.push('\n');
        indent(&mut out, 1, INDENT);
        out.push_str("/// Size of the named resource in bytes, zero when absent.\n");
        indent(&mut out, 1, INDENT);
        out.push_str("pub fn size(name: &str) -> usize {\n");
        indent(&mut out, 2, INDENT);
        out.push_str("get(name).map_or(0, <[u8]>::len)\n");
        indent(&mut out, 1, INDENT);
        out.push_str("}\n");
    }

    out.push_str("}\n");
    Ok(out)
}

fn validate(name: &str, reason: &'static str) -> Result<()> {
    if !is_identifier(name) || KEYWORDS.contains(&name) {
        return Err(BindataError::InvalidNamespace {
            namespace: name.to_string(),
            reason,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CollisionPolicy, Resource};
    use std::path::PathBuf;

    fn table(entries: Vec<(&str, Vec<u8>)>) -> ResourceTable {
        let resources = entries.into_iter().map(|(id, data)| Resource {
            identifier: id.to_string(),
            source: PathBuf::from(id),
            data,
        });
        ResourceTable::from_resources(resources, CollisionPolicy::LastWins)
            .unwrap()
            .0
    }

    #[test]
    fn test_export_exact_layout() {
        let table = table(vec![("icons/logo.png", vec![0x00, 0x1f, 0xff])]);
        let output = export(&table, &ExportConfig::new("assets")).unwrap();

        let expected = r#"// @generated by bindata. Do not edit.

pub mod assets {
    static DATA: &[(&str, &[u8])] = &[
        ("icons/logo.png", &[
            0x00, 0x1f, 0xff,
        ]),
    ];

    /// Bytes of the named resource, `None` when absent.
    pub fn get(name: &str) -> Option<&'static [u8]> {
        DATA.iter().find(|(id, _)| *id == name).map(|(_, data)| *data)
    }

    /// Size of the named resource in bytes, zero when absent.
    pub fn size(name: &str) -> usize {
        get(name).map_or(0, <[u8]>::len)
    }
}
"#;
        assert_eq!(output, expected);
    }

    mod generated {
        include!("../../tests/fixtures/assets.rs");
    }

    #[test]
    fn test_fixture_matches_exporter() {
        let table = table(vec![
            ("icons/logo.png", vec![0x00, 0x1f, 0xff]),
            ("readme.txt", b"hi".to_vec()),
        ]);
        let output = export(&table, &ExportConfig::new("assets")).unwrap();
        assert_eq!(output, include_str!("../../tests/fixtures/assets.rs"));
    }

    #[test]
    fn test_generated_module_lookups() {
        assert_eq!(
            generated::assets::get("icons/logo.png"),
            Some(&[0x00u8, 0x1f, 0xff][..])
        );
        assert_eq!(generated::assets::size("readme.txt"), 2);
        assert_eq!(generated::assets::get("missing"), None);
        assert_eq!(generated::assets::size("missing"), 0);
    }

    #[test]
    fn test_export_escapes_identifiers() {
        let table = table(vec![("odd \"name\"\\x", vec![1])]);
        let output = export(&table, &ExportConfig::new("assets")).unwrap();
        assert!(output.contains(r#"("odd \"name\"\\x", &["#));
    }

    #[test]
    fn test_export_empty_table() {
        let output = export(&ResourceTable::new(), &ExportConfig::new("assets")).unwrap();
        assert!(output.contains("static DATA: &[(&str, &[u8])] = &[\n    ];\n"));
    }

    #[test]
    fn test_export_without_size_accessor() {
        let config = ExportConfig {
            size_accessor: false,
            ..ExportConfig::new("assets")
        };
        let output = export(&table(vec![("a", vec![1])]), &config).unwrap();
        assert!(output.contains("pub fn get("));
        assert!(!output.contains("pub fn size("));
    }

    #[test]
    fn test_rejects_reserved_words() {
        for bad in ["box", "final", "macro", "try", "yield", "abstract", "virtual", "_", "Self"] {
            let result = export(&ResourceTable::new(), &ExportConfig::new(bad));
            assert!(
                matches!(result, Err(BindataError::InvalidNamespace { .. })),
                "namespace {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_path_namespace() {
        for bad in ["game::assets", "mod", "my-assets"] {
            let result = export(&ResourceTable::new(), &ExportConfig::new(bad));
            assert!(matches!(result, Err(BindataError::InvalidNamespace { .. })));
        }
    }
}
