//! Render command implementation.
//!
//! Rewrites shortcodes in every input in parallel. Without `--output` the
//! rendered HTML goes to stdout in input order; with it each input becomes
//! an `.html` file under the output directory.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use super::common::{Input, collect_inputs, load_document};
use crate::cli::args::RenderArgs;
use crate::config::FaConfig;
use crate::logger::ProgressLine;
use crate::pipeline::process;
use crate::utils::plural_count;
use crate::vdom::parse::InputFormat;
use crate::log;

/// Execute render command
pub fn run_render(args: &RenderArgs, config: &FaConfig) -> Result<()> {
    let inputs = collect_inputs(&args.paths, args.format)?;
    crate::debug!("render"; "rendering {}", plural_count(inputs.len(), "input"));

    match &args.output {
        Some(dir) => render_to_dir(&inputs, dir, args.format, config),
        None => render_to_stdout(&inputs, args.format, config),
    }
}

/// Render one input to an HTML string.
pub fn render_input(
    input: &Input,
    format: Option<InputFormat>,
    config: &FaConfig,
) -> Result<(InputFormat, String)> {
    let (format, doc) = load_document(input, format, config)?;
    Ok((format, process(doc, config)))
}

fn render_to_stdout(inputs: &[Input], format: Option<InputFormat>, config: &FaConfig) -> Result<()> {
    // Collecting an indexed parallel iterator keeps input order
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| render_input(input, format, config))
        .collect();

    let mut stdout = std::io::stdout().lock();
    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok((_, html)) => {
                stdout.write_all(html.as_bytes())?;
                if !html.ends_with('\n') {
                    writeln!(stdout)?;
                }
            }
            Err(e) => {
                log!("error"; "{}: {:#}", input, e);
                failed += 1;
            }
        }
    }
    stdout.flush()?;

    finish(failed)
}

fn render_to_dir(
    inputs: &[Input],
    dir: &Path,
    format: Option<InputFormat>,
    config: &FaConfig,
) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let html_count = inputs
        .iter()
        .filter(|input| input.format(format) == InputFormat::Html)
        .count();
    let progress = ProgressLine::new(
        "render",
        &[
            (InputFormat::Html.name(), html_count),
            (InputFormat::Markdown.name(), inputs.len() - html_count),
        ],
    );

    let results: Vec<Result<()>> = inputs
        .par_iter()
        .map(|input| -> Result<()> {
            let (format, html) = render_input(input, format, config)?;
            write_output(input, dir, &html)?;
            progress.inc(format.name());
            Ok(())
        })
        .collect();

    progress.finish();

    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        if let Err(e) = result {
            log!("error"; "{}: {:#}", input, e);
            failed += 1;
        }
    }

    let written = inputs.len() - failed;
    log!("render"; "wrote {} to {}", plural_count(written, "file"), dir.display());
    finish(failed)
}

/// Write rendered HTML for `input` under `dir`, refusing to clobber the source.
fn write_output(input: &Input, dir: &Path, html: &str) -> Result<()> {
    let target = dir.join(input.output_name());

    if let Input::File { path, .. } = input
        && same_file(path, &target)
    {
        bail!("refusing to overwrite the input file {}", path.display());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, html).with_context(|| format!("failed to write {}", target.display()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn finish(failed: usize) -> Result<()> {
    if failed > 0 {
        bail!("failed to render {}", plural_count(failed, "input"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::IconArgs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(paths: Vec<PathBuf>, output: Option<PathBuf>) -> RenderArgs {
        RenderArgs {
            paths,
            output,
            icons: IconArgs::default(),
            format: None,
        }
    }

    #[test]
    fn test_render_input_markdown() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "# Hi :fa-solid:hand:\n").unwrap();

        let input = Input::File { path, root: None };
        let (format, html) = render_input(&input, None, &FaConfig::default()).unwrap();

        assert_eq!(format, InputFormat::Markdown);
        assert_eq!(
            html,
            r#"<h1>Hi <i class="fa-solid fa-hand" aria-hidden="true"></i></h1>"#
        );
    }

    #[test]
    fn test_render_to_dir_mirrors_tree() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("guide")).unwrap();
        fs::write(src.path().join("index.html"), "<p>:fa-regular:heart:</p>").unwrap();
        fs::write(src.path().join("guide/start.md"), "Go :fa-solid:rocket:\n").unwrap();

        let args = args(vec![src.path().to_path_buf()], Some(out.path().to_path_buf()));
        run_render(&args, &FaConfig::default()).unwrap();

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert_eq!(
            index,
            r#"<p><i class="fa-regular fa-heart" aria-hidden="true"></i></p>"#
        );
        let start = fs::read_to_string(out.path().join("guide/start.html")).unwrap();
        assert!(start.contains(r#"<i class="fa-solid fa-rocket" aria-hidden="true"></i>"#));
    }

    #[test]
    fn test_render_to_dir_continues_after_failure() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let good = src.path().join("good.html");
        let bad = src.path().join("bad.html");
        fs::write(&good, "<p>:fa-solid:check:</p>").unwrap();
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();

        let args = args(vec![bad, good], Some(out.path().to_path_buf()));
        let err = run_render(&args, &FaConfig::default()).unwrap_err();
        assert!(err.to_string().contains("1 input"));

        assert_eq!(
            fs::read_to_string(out.path().join("good.html")).unwrap(),
            r#"<p><i class="fa-solid fa-check" aria-hidden="true"></i></p>"#
        );
        assert!(!out.path().join("bad.html").exists());
    }

    #[test]
    fn test_render_refuses_to_overwrite_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<p>:fa-solid:x:</p>").unwrap();

        let args = args(vec![path.clone()], Some(dir.path().to_path_buf()));
        assert!(run_render(&args, &FaConfig::default()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>:fa-solid:x:</p>");
    }
}
