use crate::converter::{DicomJsonConfig, DicomJsonConverter};
use crate::error::ExtractError;
use crate::extractor::extract_file;
use camino::{Utf8Path, Utf8PathBuf};
use futures::{StreamExt, stream};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Outcome of [run_batch].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of DICOM files whose metadata was written.
    pub converted: usize,
    /// Number of DICOM files which could not be converted.
    pub failed: usize,
}

/// Extract the metadata of every `*.dcm` file directly inside `source_dir`
/// to a JSON file of the same name in `output_dir`.
///
/// Files are converted in parallel, at most `threads` at a time. A file which fails
/// to convert is logged and counted, and does not stop the others.
pub async fn run_batch(
    source_dir: Utf8PathBuf,
    output_dir: Utf8PathBuf,
    config: DicomJsonConfig,
    threads: NonZeroUsize,
) -> std::io::Result<BatchSummary> {
    let files = list_dicom_files(&source_dir).await?;
    fs_err::tokio::create_dir_all(&output_dir).await?;
    tracing::info!(
        event = "batch_start",
        source_dir = source_dir.as_str(),
        output_dir = output_dir.as_str(),
        files = files.len()
    );

    let converter = Arc::new(DicomJsonConverter::new(config));
    let output_dir = Arc::new(output_dir);
    let summary = stream::iter(files)
        .map(|input| {
            let converter = Arc::clone(&converter);
            let output_dir = Arc::clone(&output_dir);
            tokio::task::spawn_blocking(move || convert_one(&input, &output_dir, &converter))
        })
        .buffer_unordered(threads.get())
        .fold(BatchSummary::default(), |mut summary, joined| async move {
            match joined {
                Ok(Ok(_)) => summary.converted += 1,
                Ok(Err(_)) => summary.failed += 1,
                Err(e) => {
                    tracing::error!(event = "extract", error = e.to_string());
                    summary.failed += 1
                }
            }
            summary
        })
        .await;

    tracing::info!(
        event = "batch_done",
        converted = summary.converted,
        failed = summary.failed
    );
    Ok(summary)
}

/// Wraps [extract_file] with logging.
fn convert_one(
    input: &Utf8Path,
    output_dir: &Utf8Path,
    converter: &DicomJsonConverter,
) -> Result<Utf8PathBuf, ExtractError> {
    match extract_file(input, output_dir, converter) {
        Ok(path) => {
            tracing::info!(event = "extract", input = input.as_str(), output = path.as_str());
            Ok(path)
        }
        Err(e) => {
            tracing::error!(event = "extract", input = input.as_str(), error = e.to_string());
            Err(e)
        }
    }
}

/// List the files directly inside `dir` which have the extension `.dcm` (any case).
pub async fn list_dicom_files(dir: &Utf8Path) -> std::io::Result<Vec<Utf8PathBuf>> {
    let mut entries = fs_err::tokio::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        match Utf8PathBuf::from_path_buf(entry.path()) {
            Ok(path) if is_dcm(&path) => files.push(path),
            Ok(_) => {}
            Err(path) => tracing::warn!(event = "list", skipped = %path.display(), "non-UTF-8 path"),
        }
    }
    files.sort();
    Ok(files)
}

fn is_dcm(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dcm"))
}
