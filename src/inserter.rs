//! Example-code insertion pass

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::codec::{split_lines, Codec, InsertError};
use crate::marker::{
    MarkerSyntax, DEFAULT_HEADER_SUFFIX, DEFAULT_IMPL_SUFFIX, END_SENTINEL, START_SENTINEL,
};

/// First line not part of the leading comment in a source file.
/// The comment typically holds copyright and license text.
static SOURCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[#\w]").expect("source start pattern is valid"));

/// Configuration for the inserter
#[derive(Debug, Clone)]
pub struct InserterConfig {
    /// Which marker tag syntax triggers an insertion
    pub syntax: MarkerSyntax,
    /// How file bytes are read and validated
    pub codec: Codec,
    /// Suffix identifying header files (listed first)
    pub header_suffix: String,
    /// Suffix identifying implementation files (listed second)
    pub impl_suffix: String,
}

impl Default for InserterConfig {
    fn default() -> Self {
        Self {
            syntax: MarkerSyntax::XLink,
            codec: Codec::Lossless,
            header_suffix: DEFAULT_HEADER_SUFFIX.to_string(),
            impl_suffix: DEFAULT_IMPL_SUFFIX.to_string(),
        }
    }
}

/// Splices example source listings into XML documents.
///
/// Input documents are copied to the output verbatim, line by line. Whenever
/// a line matches the configured marker syntax, a sentinel-delimited block
/// listing the referenced example directory is appended directly after it.
pub struct Inserter {
    config: InserterConfig,
}

impl Inserter {
    /// Create an inserter with the default configuration
    pub fn new() -> Self {
        Self::with_config(InserterConfig::default())
    }

    /// Create an inserter with a custom configuration
    pub fn with_config(config: InserterConfig) -> Self {
        Self { config }
    }

    /// Copy `inputs` to `output` in order, appending a source listing after
    /// every marker line.
    ///
    /// The output file is created (truncating any existing content) before
    /// the first input is read; on error a partially written output may be
    /// left behind.
    pub fn insert_example_code(
        &self,
        examples_base_dir: &Path,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Result<(), InsertError> {
        let mut out = OutputDoc::create(output)?;

        for input in inputs {
            let data = self.config.codec.read(input)?;
            for line in split_lines(&data) {
                out.write(line)?;

                if let Some(subdir) = self.config.syntax.match_line(line) {
                    let source_directory = examples_base_dir.join(subdir);
                    self.insert_sources(&source_directory, &mut out)?;
                }
            }
        }

        out.flush()
    }

    /// Write one sentinel-delimited listing block for `directory`.
    ///
    /// Headers are listed before implementation files, each group sorted by
    /// name. A missing directory, or one without matching files, produces an
    /// empty region rather than an error.
    fn insert_sources(&self, directory: &Path, out: &mut OutputDoc) -> Result<(), InsertError> {
        out.write_str(START_SENTINEL)?;
        out.write(b"\n")?;

        let mut sources = list_sources(directory, &self.config.header_suffix)?;
        sources.extend(list_sources(directory, &self.config.impl_suffix)?);

        for source in &sources {
            self.write_listing(source, out)?;
        }

        out.write_str(END_SENTINEL)?;
        out.write(b"\n")
    }

    /// Emit the filename label and `<programlisting>` block for one source
    /// file, dropping its leading comment.
    fn write_listing(&self, source: &Path, out: &mut OutputDoc) -> Result<(), InsertError> {
        let data = self.config.codec.read(source)?;
        let basename = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        out.write_str(&format!(
            "<para>File: <filename>{}</filename></para>\n",
            basename
        ))?;
        out.write_str("<programlisting>\n<![CDATA[")?;

        let mut state = ScanState::SkippingHeader;
        for line in split_lines(&data) {
            if state == ScanState::SkippingHeader {
                if !SOURCE_START.is_match(line) {
                    continue;
                }
                state = ScanState::Copying;
            }
            out.write(line)?;
        }

        out.write_str("]]></programlisting>\n")
    }
}

impl Default for Inserter {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-file scan for dropping the leading comment. Once copying starts
/// there is no transition back; blank lines and later comments are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SkippingHeader,
    Copying,
}

/// List files in `directory` ending with `suffix`, sorted by name.
fn list_sources(directory: &Path, suffix: &str) -> Result<Vec<PathBuf>, InsertError> {
    let pattern = directory.join(format!("*{}", suffix));
    let pattern = pattern.to_string_lossy();

    let matches = glob::glob(&pattern).map_err(|source| InsertError::BadPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in matches {
        let path = entry.map_err(|err| {
            let path = err.path().to_path_buf();
            InsertError::Io {
                path,
                source: err.into_error(),
            }
        })?;
        sources.push(path);
    }

    // Sort for reproducible build output regardless of file-system order.
    sources.sort();
    Ok(sources)
}

/// Buffered output document; write failures carry the document path.
struct OutputDoc {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputDoc {
    fn create(path: &Path) -> Result<Self, InsertError> {
        let file = File::create(path).map_err(|source| InsertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), InsertError> {
        self.writer
            .write_all(bytes)
            .map_err(|source| InsertError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn write_str(&mut self, text: &str) -> Result<(), InsertError> {
        self.write(text.as_bytes())
    }

    fn flush(&mut self) -> Result<(), InsertError> {
        self.writer.flush().map_err(|source| InsertError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
