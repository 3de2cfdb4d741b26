use std::path::PathBuf;

use anyhow::{Context, Result};
use article_catalog::{
    build_site, detail_page, listing_page, Catalog, DetailPage, SectionTitles, SiteConfig,
};
use clap::{Parser, Subcommand};

/// Render the article catalog to HTML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Article collection (JSON array of records)
    #[arg(short, long, global = true, default_value = "straipsniai.json")]
    data: PathBuf,

    /// Site configuration (JSON); built-in defaults otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Section heading table (JSON object), overrides the configured one
    #[arg(short, long, global = true)]
    titles: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the listing page
    List,
    /// Print the detail page for a page address such as `straipsnis.html?id=3`
    Show {
        #[arg(short, long)]
        address: String,
    },
    /// Write the listing page and every detail page into a directory
    Build {
        #[arg(short, long, default_value = "site")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    let titles = match &args.titles {
        Some(path) => SectionTitles::load(path)?,
        None => config.section_titles()?,
    };
    let catalog = Catalog::load(&args.data)
        .with_context(|| format!("loading articles from {}", args.data.display()))?;

    match args.command {
        Command::List => print!("{}", listing_page(&catalog, &config)),
        Command::Show { address } => match detail_page(&address, &catalog, &titles, &config) {
            DetailPage::Document(document) => print!("{document}"),
            DetailPage::Redirect(location) => eprintln!("redirect: {location}"),
        },
        Command::Build { out } => {
            let report = build_site(&catalog, &titles, &config, &out)?;
            println!(
                "Wrote {} pages to {}.",
                report.pages_written(),
                out.display()
            );
        }
    }

    Ok(())
}
