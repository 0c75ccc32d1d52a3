//! Common utilities shared across CLI commands.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;

use crate::config::FaConfig;
use crate::vdom::Document;
use crate::vdom::parse::{InputFormat, from_markdown, parse_fragment};

/// Files never picked up from a directory walk.
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A document source named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `-`: a single document read from stdin.
    Stdin,
    /// A file, with the directory it was found under when walked.
    File { path: PathBuf, root: Option<PathBuf> },
}

impl Input {
    fn file(path: PathBuf) -> Self {
        Self::File { path, root: None }
    }

    /// Format from `--format`, else the file extension, else HTML.
    pub fn format(&self, forced: Option<InputFormat>) -> InputFormat {
        forced
            .or_else(|| match self {
                Self::Stdin => None,
                Self::File { path, .. } => InputFormat::from_path(path),
            })
            .unwrap_or(InputFormat::Html)
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("failed to read stdin")?;
                Ok(content)
            }
            Self::File { path, .. } => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Output path relative to an output directory: the path below the
    /// walked root (or the bare file name) with an `.html` extension.
    pub fn output_name(&self) -> PathBuf {
        match self {
            Self::Stdin => PathBuf::from("stdin.html"),
            Self::File { path, root } => {
                let rel = root
                    .as_deref()
                    .and_then(|root| path.strip_prefix(root).ok())
                    .map(Path::to_path_buf)
                    .or_else(|| path.file_name().map(PathBuf::from))
                    .unwrap_or_else(|| path.clone());
                rel.with_extension("html")
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve CLI paths into inputs, in the order given.
///
/// No paths means stdin. Directories are walked recursively and contribute
/// their HTML and Markdown files in sorted order. Explicit files are taken
/// as-is when `--format` is given, otherwise they need a known extension.
pub fn collect_inputs(paths: &[PathBuf], forced: Option<InputFormat>) -> Result<Vec<Input>> {
    if paths.is_empty() {
        return Ok(vec![Input::Stdin]);
    }

    let mut inputs = Vec::new();
    let mut stdin_seen = false;

    for path in paths {
        if path.as_os_str() == "-" {
            if stdin_seen {
                bail!("`-` (stdin) can only be given once");
            }
            stdin_seen = true;
            inputs.push(Input::Stdin);
        } else if path.is_file() {
            if forced.is_none() && InputFormat::from_path(path).is_none() {
                bail!(
                    "Not a supported input file: {} (use --format to force one)",
                    path.display()
                );
            }
            inputs.push(Input::file(path.clone()));
        } else if path.is_dir() {
            inputs.extend(collect_dir_files(path).into_iter().map(|file| Input::File {
                path: file,
                root: Some(path.clone()),
            }));
        } else {
            bail!("Path not found: {}", path.display());
        }
    }

    Ok(inputs)
}

/// Collect supported files under `dir`, sorted for stable output.
pub fn collect_dir_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .filter(|p| InputFormat::from_path(p).is_some())
        .collect()
}

/// Parse `content` as a document of the given format.
pub fn parse_document(content: &str, format: InputFormat, config: &FaConfig) -> Result<Document> {
    match format {
        InputFormat::Html => Ok(parse_fragment(content)?),
        InputFormat::Markdown => Ok(from_markdown(content, &config.render.markdown)),
    }
}

/// Read and parse one input.
pub fn load_document(
    input: &Input,
    forced: Option<InputFormat>,
    config: &FaConfig,
) -> Result<(InputFormat, Document)> {
    let format = input.format(forced);
    let content = input.read()?;
    let doc = parse_document(&content, format, config)
        .with_context(|| format!("failed to parse {input}"))?;
    Ok((format, doc))
}
