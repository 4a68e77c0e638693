//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use markdown_pages_config::Config;
use std::path::PathBuf;

/// Builds a static site from a tree of Markdown pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the whole site into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Convert one Markdown file and print the HTML fragment
    #[command(visible_alias = "r")]
    Render {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Write a default pages.toml
    #[command(visible_alias = "i")]
    Init {
        /// Config file path
        #[arg(short = 'C', long, default_value = Config::FILE_NAME, value_hint = clap::ValueHint::FilePath)]
        config: PathBuf,
    },
}

/// Build settings. Anything given here wins over the config file.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Config file path
    #[arg(short = 'C', long, default_value = Config::FILE_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Markdown source directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Static asset directory
    #[arg(short, long = "static", value_hint = clap::ValueHint::DirPath)]
    pub static_dir: Option<PathBuf>,

    /// Output directory, cleaned before building
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Page template
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub template: Option<PathBuf>,

    /// URL prefix for root-relative links, e.g. /my-repo/
    #[arg(short, long)]
    pub base_path: Option<String>,

    /// Skip pages that fail to convert
    #[arg(short, long)]
    pub keep_going: bool,
}

impl BuildArgs {
    /// Overlays the flags that were given onto `config`.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(content) = &self.content {
            config.content_dir = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(template) = &self.template {
            config.template = template.clone();
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }
        config.keep_going |= self.keep_going;
        config
    }
}
