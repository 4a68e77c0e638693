use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{SiteError, io_error, page::generate_page, template::PageTemplate};

/// Source extensions treated as Markdown, compared case-insensitively.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// One Markdown source and the HTML file it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of a site build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages written, in source order.
    pub written: Vec<PathBuf>,
    /// Sources that failed to convert, with the reason. Only filled when
    /// failures are skipped rather than fatal.
    pub skipped: Vec<(PathBuf, String)>,
    /// Static files copied into the output directory.
    pub assets_copied: usize,
}

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Finds every Markdown file under `content_dir` and maps it to an `.html`
/// path at the same relative location under `output_dir`.
pub fn collect_pages(content_dir: &Path, output_dir: &Path) -> Result<Vec<PageJob>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingContentDir(content_dir.to_path_buf()));
    }

    let mut jobs = Vec::new();
    scan_directory_recursive(content_dir, output_dir, &mut jobs)?;
    jobs.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(jobs)
}

fn scan_directory_recursive(
    dir: &Path,
    output_dir: &Path,
    jobs: &mut Vec<PageJob>,
) -> Result<(), SiteError> {
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();
        let destination = output_dir.join(entry.file_name());

        if path.is_dir() {
            scan_directory_recursive(&path, &destination, jobs)?;
        } else if is_markdown(&path) {
            jobs.push(PageJob {
                source: path,
                destination: destination.with_extension("html"),
            });
        }
    }

    Ok(())
}

/// Converts and writes every page.
///
/// Pages are converted in parallel. A page that fails to convert aborts the
/// build unless `keep_going` is set, in which case it is logged and recorded
/// in the report. I/O failures always abort.
pub fn generate_pages(
    jobs: &[PageJob],
    template: &PageTemplate,
    base_path: &str,
    keep_going: bool,
) -> Result<BuildReport, SiteError> {
    let results: Vec<Result<PathBuf, SiteError>> = jobs
        .par_iter()
        .map(|job| write_page(job, template, base_path))
        .collect();

    let mut report = BuildReport::default();
    for result in results {
        match result {
            Ok(written) => report.written.push(written),
            Err(SiteError::Conversion { path, source }) if keep_going => {
                log::warn!("Skipping {}: {source}", path.display());
                report.skipped.push((path, source.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

fn write_page(job: &PageJob, template: &PageTemplate, base_path: &str) -> Result<PathBuf, SiteError> {
    log::debug!("Generating {} -> {}", job.source.display(), job.destination.display());

    let markdown = fs::read_to_string(&job.source).map_err(io_error(&job.source))?;
    let page = generate_page(&markdown, template, base_path).map_err(|source| {
        SiteError::Conversion {
            path: job.source.clone(),
            source,
        }
    })?;

    if let Some(parent) = job.destination.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(&job.destination, page).map_err(io_error(&job.destination))?;

    log::info!("Wrote {}", job.destination.display());
    Ok(job.destination.clone())
}
