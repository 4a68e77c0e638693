mod args;

use anyhow::{Context, Result, bail};
use args::{BuildArgs, Cli, Commands};
use clap::Parser;
use markdown_pages_config::Config;
use markdown_pages_engine::{BuildReport, SiteOptions, build_site, extract_title, markdown_to_html};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match &cli.command {
        Commands::Build { build_args } => {
            let report = run_build(build_args)?;
            println!(
                "Wrote {} pages, skipped {}, copied {} static files",
                report.written.len(),
                report.skipped.len(),
                report.assets_copied
            );
            for (path, reason) in &report.skipped {
                eprintln!("skipped {}: {reason}", path.display());
            }
        }
        Commands::Render { file } => println!("{}", run_render(file)?),
        Commands::Init { config } => {
            run_init(config)?;
            println!("Created {}", config.display());
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG, when set, wins over the flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Reads the config file (defaults if there is none) and applies the flags.
fn resolve_config(build_args: &BuildArgs) -> Result<Config> {
    let config = match Config::load_from_path(&build_args.config)? {
        Some(config) => {
            log::info!("Loaded config from {}", build_args.config.display());
            config
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                build_args.config.display()
            );
            Config::default()
        }
    };
    Ok(build_args.apply_to(config))
}

fn site_options(config: Config) -> SiteOptions {
    SiteOptions {
        content_dir: config.content_dir,
        static_dir: config.static_dir,
        output_dir: config.output_dir,
        template_path: config.template,
        base_path: config.base_path,
        keep_going: config.keep_going,
    }
}

fn run_build(build_args: &BuildArgs) -> Result<BuildReport> {
    let options = site_options(resolve_config(build_args)?);
    log::debug!("Building with {options:?}");
    build_site(&options)
        .with_context(|| format!("Failed to build site into {}", options.output_dir.display()))
}

fn run_render(file: &Path) -> Result<String> {
    let markdown = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    if let Some(title) = extract_title(&markdown) {
        log::debug!("Title: {title}");
    }
    markdown_to_html(&markdown).with_context(|| format!("Failed to convert {}", file.display()))
}

fn run_init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }
    Config::default()
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn build_args_for(root: &Path) -> BuildArgs {
        let config_path = root.join("pages.toml");
        let config_path = config_path.to_str().unwrap();
        let cli =
            Cli::try_parse_from(["markdown-pages", "build", "--config", config_path]).unwrap();
        match cli.command {
            Commands::Build { build_args } => build_args,
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn init_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pages.toml");

        run_init(&config_path).unwrap();

        assert_eq!(
            Config::load_from_path(&config_path).unwrap(),
            Some(Config::default())
        );
        assert!(run_init(&config_path).is_err());
    }

    #[test]
    fn missing_config_file_means_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = resolve_config(&build_args_for(temp_dir.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn build_uses_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("pages/index.md"), "# Home\n\n[About](/about.html)").unwrap();
        fs::write(root.join("assets/site.css"), "body {}").unwrap();
        fs::write(root.join("page.html"), "{{ Title }}|{{ Content }}").unwrap();
        let config = Config {
            content_dir: root.join("pages"),
            static_dir: root.join("assets"),
            output_dir: root.join("out"),
            template: root.join("page.html"),
            base_path: "/site/".to_string(),
            keep_going: false,
        };
        config.save_to_path(root.join("pages.toml")).unwrap();

        let report = run_build(&build_args_for(root)).unwrap();

        assert_eq!(report.written, vec![root.join("out/index.html")]);
        assert_eq!(report.assets_copied, 1);
        assert_eq!(
            fs::read_to_string(root.join("out/index.html")).unwrap(),
            r#"Home|<div><h1>Home</h1><p><a href="/site/about.html">About</a></p></div>"#
        );
    }

    #[test]
    fn render_prints_fragment() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("note.md");
        fs::write(&file, "Some `code` here").unwrap();

        assert_eq!(
            run_render(&file).unwrap(),
            "<div><p>Some <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn render_reports_unclosed_markup() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("bad.md");
        fs::write(&file, "this **never closes").unwrap();

        let err = run_render(&file).unwrap_err();

        assert!(err.to_string().contains("bad.md"));
    }
}
