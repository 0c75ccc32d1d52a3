//! Scan command implementation.
//!
//! Reports the shortcodes `render` would replace, as JSON:
//!
//! ```json
//! [
//!   {
//!     "path": "docs/index.md",
//!     "format": "markdown",
//!     "icons": [
//!       { "shortcode": ":fa-solid:coffee:", "style": "solid", "icon": "coffee",
//!         "classes": ["fa-solid", "fa-coffee"] }
//!     ]
//!   }
//! ]
//! ```

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;

use super::common::{Input, collect_inputs, load_document};
use crate::cli::args::ScanArgs;
use crate::config::FaConfig;
use crate::log;
use crate::pipeline::{FoundIcon, collect_shortcodes};
use crate::utils::plural_count;
use crate::vdom::parse::InputFormat;

/// Result for a single scanned input
#[derive(Debug, Serialize)]
pub struct FileScanResult {
    pub path: String,
    pub format: InputFormat,
    pub icons: Vec<FoundIcon>,
}

/// Execute scan command
pub fn run_scan(args: &ScanArgs, config: &FaConfig) -> Result<()> {
    let inputs = collect_inputs(&args.paths, args.format)?;
    log!("scan"; "scanning {}", plural_count(inputs.len(), "file"));

    let mut results = Vec::with_capacity(inputs.len());
    let mut failed = 0;
    for (input, result) in inputs.iter().zip(scan_inputs(&inputs, args.format, config)) {
        match result {
            Ok(result) => results.push(result),
            Err(e) => {
                log!("error"; "{}: {:#}", input, e);
                failed += 1;
            }
        }
    }

    crate::debug_do! {
        for result in &results {
            crate::debug!("scan"; "{}: {}", result.path, plural_count(result.icons.len(), "shortcode"));
        }
    }

    let total: usize = results.iter().map(|r| r.icons.len()).sum();
    log!("scan"; "found {}", plural_count(total, "shortcode"));

    output_results(&results, args)?;

    if failed > 0 {
        bail!("failed to scan {}", plural_count(failed, "input"));
    }
    Ok(())
}

/// Scan every input in parallel. Results line up with `inputs`.
pub fn scan_inputs(
    inputs: &[Input],
    format: Option<InputFormat>,
    config: &FaConfig,
) -> Vec<Result<FileScanResult>> {
    inputs
        .par_iter()
        .map(|input| -> Result<FileScanResult> {
            let (format, doc) = load_document(input, format, config)?;
            Ok(FileScanResult {
                path: input.to_string(),
                format,
                icons: collect_shortcodes(&doc, config),
            })
        })
        .collect()
}

fn output_results(results: &[FileScanResult], args: &ScanArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("scan"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
