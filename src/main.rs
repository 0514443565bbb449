use blogconf::config::SiteConfig;
use blogconf::{check, export, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "blogconf")]
#[command(about = "Load and export the blog's generator settings")]
#[command(long_about = "\
Load and export the blog's generator settings

All settings are fixed except the extra header, which is read from
_nb_header.html in the site root. Loading fails if that file is missing.

Site layout:

  ./
  ├── _nb_header.html          # Injected into every page <head>
  └── content/
      ├── images/              # Copied verbatim
      └── notebooks/           # Copied verbatim; notebook sources
  ../pelican-themes/pelican-bootstrap3/
  ../pelican-plugins/

Run 'blogconf show' to print the settings the generator reads.")]
#[command(version = version_string())]
struct Cli {
    /// Site root containing _nb_header.html
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the loaded settings
    Show {
        #[arg(long, value_enum, default_value_t = export::Format::Settings)]
        format: export::Format,
    },
    /// Summarize the loaded settings
    Summary,
    /// Report referenced directories that do not exist
    Check,
    /// Print the extra header verbatim
    Header,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SiteConfig::load(&cli.root)?;

    match cli.command {
        Command::Show { format } => {
            println!("{}", export::render(&config, format)?);
        }
        Command::Summary => {
            output::print_summary(&config);
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let report = check::check(&config, &cli.root);
            output::print_check(&report);
        }
        Command::Header => {
            print!("{}", config.extra_header);
        }
    }

    Ok(())
}
