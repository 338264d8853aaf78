use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phpdoc_stubgen::{generator, validate};

/// Subdirectories of a phpdoc checkout that hold extractable reference
/// documentation.
const PHPDOC_SUBDIRS: &[&str] = &["reference", "features", "appendices", "language/predefined"];

/// Generate PHP stub declarations (phpfunctions.php) from the phpdoc
/// DocBook XML sources.
///
/// Check out the documentation first, e.g.:
/// git clone https://github.com/php/doc-en.git ./phpdoc-en
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a phpdoc checkout; with --debug, the files/directories to
    /// process instead.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Process the given files/directories only and print the generated
    /// text to stdout instead of writing the output file.
    #[arg(long)]
    debug: bool,

    /// Output path for the generated stub file.
    #[arg(short, long, default_value = "phpfunctions.php")]
    output: PathBuf,

    /// External PHP parser used to check the generated file; skipped when
    /// not found on PATH.
    #[arg(long, default_value = "php-parser")]
    validator: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let roots: Vec<PathBuf> = if cli.debug {
        for path in &cli.paths {
            if !path.exists() {
                bail!("bad argument: {}", path.display());
            }
        }
        cli.paths.clone()
    } else {
        let root = &cli.paths[0];
        if !root.exists() {
            bail!("phpdoc path not found: {}", root.display());
        }
        PHPDOC_SUBDIRS.iter().map(|sub| root.join(sub)).collect()
    };

    let rendered = generator::generate(&roots, !cli.debug);

    if cli.debug {
        println!("{}", rendered.text);
    } else {
        println!("saving {} file", cli.output.display());
        std::fs::write(&cli.output, &rendered.text)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
        validate::validate(&cli.output, &cli.validator)?;
        println!("done");
    }

    println!("wrote {} declarations", rendered.declarations);
    Ok(())
}
