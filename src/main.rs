use clap::{Parser, Subcommand};
use log::LevelFilter;
use mdsite::{config, logging, output, site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Static site generator for markdown documents")]
#[command(long_about = "\
Static site generator for markdown documents

Every *.md file under the content directory whose front matter has a `slug`
becomes a page. The slug decides where the page lands:

  slug          source               output                      url
  index         any                  dist/index.html             /
  contact/      any                  dist/contact/index.html     /contact/
  hello         blog/post.md         dist/blog/hello/index.html  /blog/hello
  hello         post.md              dist/hello/index.html       /hello

Documents without a slug are skipped. Every page shares one template and a
navigation bar listing all pages.

Content structure:

  content/
  ├── about.md                     # ---\\nslug: index\\n---  → /
  └── blog/
      └── post.md                  # ---\\nslug: hello\\n---  → /blog/hello
  templates/
  ├── base.html                    # {title} {content} {navigation} {description}
  ├── style.css                    # Copied to the output root
  └── favicon.ico ...              # Copied to the output root

Run 'mdsite gen-config' to generate a documented mdsite.toml.")]
#[command(version)]
struct Cli {
    /// Config file (optional; stock defaults when absent)
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    /// Content directory (overrides config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Page template (overrides config)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Also append log output to this file (overrides config)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Exit with failure if any document fails
    #[arg(long, global = true)]
    strict: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site (default)
    Build,
    /// Resolve every document and list the pages without writing anything
    Check,
    /// Print a stock mdsite.toml with all options documented
    GenConfig,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn site_config(&self) -> Result<config::SiteConfig, config::ConfigError> {
        let mut site_config = config::load_config(&self.config)?;
        if let Some(source) = &self.source {
            site_config.content_root = source.clone();
        }
        if let Some(output) = &self.output {
            site_config.output_root = output.clone();
        }
        if let Some(template) = &self.template {
            site_config.template = template.clone();
        }
        if let Some(log_file) = &self.log_file {
            site_config.log_file = Some(log_file.clone());
        }
        if self.strict {
            site_config.strict = true;
        }
        site_config.validate()?;
        Ok(site_config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.as_ref().unwrap_or(&Command::Build);

    if let Command::GenConfig = command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let site_config = cli.site_config()?;
    logging::init(cli.log_level(), site_config.log_file.as_deref())?;

    match command {
        Command::Build => {
            let result = site::build_site(&site_config);
            output::print_build_summary(&result, &site_config.output_root);
            if site_config.strict && result.has_errors() {
                return Err(format!("build finished with {} errors", result.errors).into());
            }
        }
        Command::Check => {
            let scanned = site::check_site(&site_config)?;
            output::print_check_output(
                &scanned,
                &site_config.content_root,
                &site_config.output_root,
            );
            if site_config.strict && scanned.errors > 0 {
                return Err(format!("check found {} errors", scanned.errors).into());
            }
        }
        Command::GenConfig => {}
    }

    Ok(())
}
