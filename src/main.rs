use clap::{Parser, Subcommand};
use folio::{animation, config, content, generate, output, pages};
use std::path::PathBuf;

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
#[command(name = "folio")]
#[command(about = "Static generator for a personal portfolio site")]
#[command(long_about = "\
Static generator for a personal portfolio site

Renders the About, Projects and Uses pages into plain HTML with an animated
page shell. Page content is compiled in; the source directory only holds
configuration and static assets.

Source structure:

  site/
  ├── config.toml                  # Site config (optional)
  └── public/                      # Copied to the output root
      ├── infosys-logo.png         # Images referenced by the content
      └── ...

Output structure:

  dist/
  ├── index.html                   # Redirect to /about/
  ├── about/index.html
  ├── projects/index.html
  ├── uses/index.html
  ├── style.<hash>.css
  └── site.webmanifest

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory (config.toml and public/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Validate config, content and assets without building
    Check,
    /// Print the entrance animation timelines
    Timeline,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Building {} \u{2192} {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&cli.source, &cli.output, &site_config)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            generate::check(&cli.source, &site_config)?;
            let block_counts: Vec<(&str, usize)> = content::PAGES
                .iter()
                .zip(pages::block_counts())
                .map(|(page, (_, blocks))| (page.title, blocks))
                .collect();
            output::print_check_output(&block_counts, content::referenced_images().len());
            println!("==> Content is valid");
        }
        Command::Timeline => {
            output::print_timelines(animation::TIMELINES);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
