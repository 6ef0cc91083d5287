//! Multi-document summarization
//!
//! Documents are summarized one after another with the same
//! [`Summarizer`], so word similarities computed for one document are
//! reused by the next. A failing document is logged and reported in its
//! outcome; the remaining documents are still processed.

use std::fs;
use std::path::{Path, PathBuf};

use super::runner::{Summarizer, Summary};
use crate::errors::Result;
use crate::types::SummaryConfig;

/// Outcome of one document in a batch
#[derive(Debug)]
pub struct BatchOutcome {
    pub document: PathBuf,
    /// Where the summary was written, if an output directory was given
    pub output: Option<PathBuf>,
    pub result: Result<Summary>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summarize every document, optionally writing `<output_dir>/<file name>`
pub fn summarize_batch<P: AsRef<Path>>(
    summarizer: &mut Summarizer,
    documents: &[P],
    config: &SummaryConfig,
    output_dir: Option<&Path>,
) -> Vec<BatchOutcome> {
    documents
        .iter()
        .map(|document| {
            let document = document.as_ref();
            let _span = tracing::info_span!("document", path = %document.display()).entered();

            let mut output = None;
            let result = summarizer
                .summarize_file(document, config)
                .and_then(|summary| {
                    if let Some(dir) = output_dir {
                        let target = dir.join(document.file_name().unwrap_or(document.as_os_str()));
                        write_summary(&target, &summary)?;
                        output = Some(target);
                    }
                    Ok(summary)
                });

            match &result {
                Ok(summary) => tracing::info!(
                    units = summary.units.len(),
                    kept = summary.selected.len(),
                    "summarized"
                ),
                Err(err) => tracing::warn!(error = %err, "document skipped"),
            }

            BatchOutcome {
                document: document.to_path_buf(),
                output,
                result,
            }
        })
        .collect()
}

fn write_summary(target: &Path, summary: &Summary) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, format!("{summary}\n"))?;
    Ok(())
}
