//! insert-example-code CLI
//!
//! Copies DocBook XML files to a single output file, splicing in example
//! source listings wherever a "Source Code" marker line appears.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use example_inserter::Inserter;
use std::path::PathBuf;

const USAGE: &str =
    "Usage: insert-example-code <examples_base_dir> <input_xml_files>... <output_xml_file>";

#[derive(Parser, Debug)]
#[command(name = "insert-example-code")]
#[command(version)]
#[command(about = "Insert example source listings into DocBook XML")]
struct Cli {
    /// Directory under which the example subdirectories live
    examples_base_dir: PathBuf,

    /// Input XML files, followed by the output XML file as the last argument
    #[arg(required = true, num_args = 2.., value_name = "XML_FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            // Too few arguments; the build invokes this positionally, so a
            // short usage line on stdout beats clap's stderr diagnostics.
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let mut files = cli.files;
    let output = files.pop().context("missing output file")?;
    let inputs = files;

    let inserter = Inserter::new();
    inserter
        .insert_example_code(&cli.examples_base_dir, &inputs, &output)
        .with_context(|| format!("Failed to build: {}", output.display()))?;

    Ok(())
}
