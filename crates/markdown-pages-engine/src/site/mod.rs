//! # Site Generation
//!
//! File-system glue around the conversion core: static asset copying, the
//! content tree walk, and template substitution. Nothing in `parsing`,
//! `html` or `document` depends on this module.

pub mod assets;
pub mod generate;
pub mod page;
pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::ConversionError;

pub use assets::{copy_static, reset_output_dir};
pub use generate::{BuildReport, PageJob, collect_pages, generate_pages, is_markdown};
pub use page::generate_page;
pub use template::{PageTemplate, rewrite_root_links};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Content directory not found: {}", .0.display())]
    MissingContentDir(PathBuf),

    #[error("Static directory not found: {}", .0.display())]
    MissingStaticDir(PathBuf),

    #[error("Refusing to build into {} because it overlaps {}", .output.display(), .input.display())]
    UnsafeOutputDir { output: PathBuf, input: PathBuf },

    #[error("Failed to convert {}: {source}", .path.display())]
    Conversion {
        path: PathBuf,
        source: ConversionError,
    },
}

pub(crate) fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Everything a full site build needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    pub base_path: String,
    pub keep_going: bool,
}

/// Cleans the output directory, copies static assets, then generates every page.
///
/// Nothing is deleted until both input directories are known to exist and to
/// lie outside the output directory.
pub fn build_site(options: &SiteOptions) -> Result<BuildReport, SiteError> {
    if !options.content_dir.is_dir() {
        return Err(SiteError::MissingContentDir(options.content_dir.clone()));
    }
    if !options.static_dir.is_dir() {
        return Err(SiteError::MissingStaticDir(options.static_dir.clone()));
    }
    for input in [&options.content_dir, &options.static_dir] {
        ensure_disjoint(&options.output_dir, input)?;
    }

    let template_source =
        fs::read_to_string(&options.template_path).map_err(io_error(&options.template_path))?;
    let template = PageTemplate::new(template_source);
    if !template.has_placeholders() {
        log::warn!(
            "Template {} is missing {} or {}",
            options.template_path.display(),
            PageTemplate::TITLE,
            PageTemplate::CONTENT
        );
    }

    reset_output_dir(&options.output_dir)?;
    let assets_copied = copy_static(&options.static_dir, &options.output_dir)?;

    let jobs = collect_pages(&options.content_dir, &options.output_dir)?;
    log::info!("Generating {} pages", jobs.len());

    let mut report = generate_pages(&jobs, &template, &options.base_path, options.keep_going)?;
    report.assets_copied = assets_copied;
    Ok(report)
}

/// Fails if `output` and `input` are the same directory or one holds the other.
fn ensure_disjoint(output: &Path, input: &Path) -> Result<(), SiteError> {
    let resolved_output = resolve(output)?;
    let resolved_input = resolve(input)?;
    if resolved_input.starts_with(&resolved_output) || resolved_output.starts_with(&resolved_input)
    {
        return Err(SiteError::UnsafeOutputDir {
            output: output.to_path_buf(),
            input: input.to_path_buf(),
        });
    }
    Ok(())
}

/// Absolute form of `path` with symlinks resolved as far as the path exists.
fn resolve(path: &Path) -> Result<PathBuf, SiteError> {
    let absolute = std::path::absolute(path).map_err(io_error(path))?;
    let mut existing = absolute.as_path();
    let mut missing = vec![];
    loop {
        if let Ok(canonical) = fs::canonicalize(existing) {
            return Ok(missing
                .iter()
                .rev()
                .fold(canonical, |resolved, name| resolved.join(name)));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => return Ok(absolute.clone()),
        }
    }
}
