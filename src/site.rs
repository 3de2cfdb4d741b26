//! Whole pages and a static build of the catalog.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::detail::{render_detail, DetailOutcome};
use crate::error::{Error, Result};
use crate::listing::render_listing;
use crate::section_titles::SectionTitles;
use crate::view::{escape, Container};

pub const LISTING_TITLE: &str = "Straipsniai";

/// Minimal HTML document around one rendering container.
pub fn page_document(title: &str, container: &Container) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"lt\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        container.outer_html()
    )
}

pub fn listing_page(catalog: &Catalog, config: &SiteConfig) -> String {
    let mut container = Container::new(&config.listing_container);
    render_listing(catalog.articles(), config, &mut container);
    page_document(LISTING_TITLE, &container)
}

/// A rendered detail page, or where the visitor should be sent instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPage {
    Document(String),
    Redirect(String),
}

pub fn detail_page(
    page_address: &str,
    catalog: &Catalog,
    titles: &SectionTitles,
    config: &SiteConfig,
) -> DetailPage {
    let mut container = Container::new(&config.detail_container);
    match render_detail(page_address, catalog, titles, config, &mut container) {
        DetailOutcome::Redirect(location) => DetailPage::Redirect(location),
        DetailOutcome::Rendered(id) => {
            let title = catalog
                .find(id)
                .map_or(LISTING_TITLE, |article| article.title.as_str());
            DetailPage::Document(page_document(title, &container))
        }
        DetailOutcome::NotFound(_) => {
            DetailPage::Document(page_document(LISTING_TITLE, &container))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildReport {
    pub listing: PathBuf,
    pub details: Vec<PathBuf>,
}

impl BuildReport {
    pub fn pages_written(&self) -> usize {
        self.details.len() + 1
    }
}

fn progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>5}/{len:5} {msg} {eta}",
    )?
    .progress_chars("##-"))
}

/// `out_dir/name`, as long as `name` is a plain file name that stays
/// inside `out_dir`.
fn page_path(out_dir: &Path, name: &str) -> Result<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(out_dir.join(name)),
        _ => Err(Error::InvalidArgument(format!(
            "page file name {name:?} would leave {}",
            out_dir.display()
        ))),
    }
}

fn write_page(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Writes the listing page and one detail snapshot per article into
/// `out_dir`. Snapshots are named `<detail stem>-<id>.html` and hold what
/// the detail page renders for `<detail page>?id=<id>`.
pub fn build_site(
    catalog: &Catalog,
    titles: &SectionTitles,
    config: &SiteConfig,
    out_dir: impl AsRef<Path>,
) -> Result<BuildReport> {
    let out_dir = out_dir.as_ref();
    if out_dir.is_file() {
        return Err(Error::InvalidArgument(format!(
            "output path {} is a file",
            out_dir.display()
        )));
    }
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    let listing = page_path(out_dir, config.listing_file())?;
    write_page(&listing, &listing_page(catalog, config))?;

    let bar = ProgressBar::new(catalog.len() as u64);
    bar.set_message("Rendering article pages");
    bar.set_style(progress_style()?);

    let mut details = Vec::with_capacity(catalog.len());
    let mut written = HashSet::new();
    for article in catalog.articles() {
        // A repeated id addresses the earlier article; its page already exists.
        if !written.insert(article.id) {
            tracing::warn!(id = article.id, "duplicate article id, skipped");
            bar.inc(1);
            continue;
        }
        let address = config.detail_href(article.id);
        match detail_page(&address, catalog, titles, config) {
            DetailPage::Document(document) => {
                let name = format!("{}-{}.html", config.detail_stem(), article.id);
                let path = page_path(out_dir, &name)?;
                write_page(&path, &document)?;
                details.push(path);
            }
            // An id of zero cannot be addressed; the page would redirect.
            DetailPage::Redirect(_) => {
                tracing::warn!(id = article.id, "article id is not addressable, skipped");
            }
        }
        bar.inc(1);
    }
    bar.finish_with_message("Done rendering article pages.");

    let report = BuildReport { listing, details };
    tracing::info!(
        out_dir = %out_dir.display(),
        pages = report.pages_written(),
        "site build finished"
    );
    Ok(report)
}
