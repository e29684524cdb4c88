//! Generate command - walk the resource roots and write the embedded table.
//!
//! Settings come from the command line first and `.bindatarc.toml` second.
//! `dirs`, `output` and `namespace` must be provided by one of the two.

use anyhow::{bail, Context, Result};
use bindata_core::exporter::{self, WriteStatus};
use bindata_core::loader::SkippedFile;
use bindata_core::table::Collision;
use bindata_core::{
    build_table, BuildOptions, CollisionPolicy, ExportConfig, ScanOptions, Target,
};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::BindataConfig;
use crate::output::{Output, OutputFormat, TableDisplay};

/// Parse and validate bytes-per-line (must be at least 1)
fn parse_bytes_per_line(s: &str) -> std::result::Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value == 0 {
        return Err("bytes per line must be at least 1".to_string());
    }
    Ok(value)
}

/// Command-line options for a generation run.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Resource directory to embed (repeatable)
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dirs: Vec<PathBuf>,

    /// File to write the generated source to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Namespace (C++) or module (Rust) exposing the data
    #[arg(short, long, value_name = "NAME")]
    pub namespace: Option<String>,

    /// Target language: cpp or rust [default: from output extension]
    #[arg(short, long, value_name = "LANG")]
    pub target: Option<Target>,

    /// Glob to exclude, gitignore syntax (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Honor .gitignore and .ignore files inside the roots
    #[arg(long)]
    pub gitignore: bool,

    /// Duplicate identifier policy: last-wins, first-wins or error [default: last-wins]
    #[arg(long, value_name = "POLICY")]
    pub on_collision: Option<CollisionPolicy>,

    /// Also write a JSON manifest of the embedded entries
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Only emit the `get` accessor
    #[arg(long)]
    pub no_size_accessor: bool,

    /// Bytes per line in generated literals [default: 16]
    #[arg(long, value_name = "N", value_parser = parse_bytes_per_line)]
    pub bytes_per_line: Option<usize>,
}

/// Fully resolved settings for a run.
#[derive(Debug)]
pub struct Settings {
    pub build: BuildOptions,
    pub export: ExportConfig,
    pub target: Target,
    pub output: PathBuf,
    pub manifest: Option<PathBuf>,
}

impl Settings {
    /// Merge CLI arguments over the config file.
    ///
    /// Fails when a required setting is given by neither.
    pub fn resolve(args: GenerateArgs, config: BindataConfig) -> Result<Self> {
        let generator = config.generator;

        let roots = if args.dirs.is_empty() {
            generator.dirs
        } else {
            args.dirs
        };
        if roots.is_empty() {
            bail!("Missing required option --dir (or [generator].dirs in the config file)");
        }

        let Some(output) = args.output.or(generator.output) else {
            bail!("Missing required option --output (or [generator].output in the config file)");
        };

        let Some(namespace) = args.namespace.or(generator.namespace) else {
            bail!(
                "Missing required option --namespace (or [generator].namespace in the config file)"
            );
        };

        let target = args
            .target
            .or(generator.target)
            .unwrap_or_else(|| Target::from_output_path(&output));

        let mut exclude = config.scanner.exclude;
        exclude.extend(args.exclude);

        let defaults = ExportConfig::default();
        let export = ExportConfig {
            namespace,
            table_name: config.emit.table_name.unwrap_or(defaults.table_name),
            bytes_per_line: args
                .bytes_per_line
                .or(config.emit.bytes_per_line)
                .unwrap_or(defaults.bytes_per_line),
            size_accessor: !args.no_size_accessor
                && config.emit.size_accessor.unwrap_or(defaults.size_accessor),
        };

        Ok(Self {
            build: BuildOptions {
                roots,
                scan: ScanOptions {
                    exclude,
                    respect_gitignore: args.gitignore || config.scanner.respect_gitignore,
                },
                on_collision: args
                    .on_collision
                    .or(generator.on_collision)
                    .unwrap_or_default(),
            },
            export,
            target,
            output,
            manifest: args.manifest.or(generator.manifest),
        })
    }
}

/// Summary of a generation run.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub output: String,
    pub target: String,
    pub namespace: String,
    pub status: WriteStatus,
    pub entries: usize,
    pub total_bytes: usize,
    pub files_found: usize,
    pub skipped: Vec<SkippedFile>,
    pub collisions: Vec<Collision>,
    pub missing_roots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    pub duration_ms: f64,
}

impl TableDisplay for GenerateReport {
    fn to_table(&self) -> String {
        let mut output = String::new();

        let verb = match self.status {
            WriteStatus::Written => "Wrote",
            WriteStatus::Unchanged => "Unchanged",
        };
        output.push_str(&format!(
            "{} {} {} ({} entries, {} bytes, {})\n",
            "SUCCESS:".green().bold(),
            verb,
            self.output.cyan(),
            self.entries,
            self.total_bytes,
            self.target
        ));

        output.push_str(&format!(
            "  {:<14} {}\n",
            "Namespace:".cyan(),
            self.namespace
        ));
        output.push_str(&format!(
            "  {:<14} {}\n",
            "Files found:".cyan(),
            self.files_found
        ));

        if !self.skipped.is_empty() {
            output.push_str(&format!(
                "  {:<14} {}\n",
                "Skipped:".cyan(),
                self.skipped.len()
            ));
        }

        if let Some(manifest) = &self.manifest {
            output.push_str(&format!("  {:<14} {}\n", "Manifest:".cyan(), manifest));
        }

        for root in &self.missing_roots {
            output.push_str(&format!(
                "  {} No such directory {}\n",
                "WARN:".yellow(),
                root
            ));
        }

        for collision in &self.collisions {
            output.push_str(&format!(
                "  {} '{}' kept {}, dropped {}\n",
                "WARN:".yellow(),
                collision.identifier,
                collision.kept.display(),
                collision.dropped.display()
            ));
        }

        output.trim_end().to_string()
    }
}

/// Run a generation and report the result.
pub fn run(settings: &Settings, format: OutputFormat, quiet: bool) -> Result<()> {
    debug!("Resolved settings: {:?}", settings);

    let built = build_table(&settings.build).context("Failed to build resource table")?;

    let source = exporter::export(&built.table, &settings.export, settings.target)
        .context("Failed to generate source")?;

    let status = exporter::write_if_changed(&settings.output, source.as_bytes())
        .with_context(|| format!("Failed to write output: {}", settings.output.display()))?;
    info!("{} is {:?}", settings.output.display(), status);

    if let Some(manifest_path) = &settings.manifest {
        let manifest = exporter::json::export(&built.table, true)?;
        exporter::write_if_changed(manifest_path, manifest.as_bytes()).with_context(|| {
            format!("Failed to write manifest: {}", manifest_path.display())
        })?;
    }

    if quiet {
        return Ok(());
    }

    let stats = built.stats;
    let report = GenerateReport {
        output: settings.output.display().to_string(),
        target: settings.target.to_string(),
        namespace: settings.export.namespace.clone(),
        status,
        entries: stats.entries,
        total_bytes: stats.total_bytes,
        files_found: stats.files_found,
        skipped: stats.skipped,
        collisions: stats.collisions,
        missing_roots: stats
            .missing_roots
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        manifest: settings
            .manifest
            .as_ref()
            .map(|p| p.display().to_string()),
        duration_ms: stats.duration_ms,
    };

    Output::new(report, format).render()
}
