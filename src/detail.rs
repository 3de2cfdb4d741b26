use crate::address::{self, RequestedId};
use crate::article::{Article, ArticleId};
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::listing::keyword_tags;
use crate::section_titles::SectionTitles;
use crate::view::{Container, Element, Node};

pub const NOT_FOUND_MESSAGE: &str = "Straipsnis nerastas.";

/// What the detail page did for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The article view is in the container.
    Rendered(ArticleId),
    /// The container holds the not-found message.
    NotFound(RequestedId),
    /// No usable id; navigate to this page. The container is untouched.
    Redirect(String),
}

/// Runs the detail page once for `page_address`.
pub fn render_detail(
    page_address: &str,
    catalog: &Catalog,
    titles: &SectionTitles,
    config: &SiteConfig,
    container: &mut Container,
) -> DetailOutcome {
    let Some(requested) = address::article_id(page_address) else {
        tracing::debug!(page_address, "no article id, redirecting to listing");
        return DetailOutcome::Redirect(config.listing_page.clone());
    };

    let found = match requested {
        RequestedId::Id(id) => catalog.find(id),
        RequestedId::OutOfRange => None,
    };
    match found {
        Some(article) => {
            container.replace_with(&[article_view(article, titles).into()]);
            DetailOutcome::Rendered(article.id)
        }
        None => {
            tracing::debug!(?requested, "article not found");
            container.replace_with(&[not_found_message().into()]);
            DetailOutcome::NotFound(requested)
        }
    }
}

pub fn not_found_message() -> Element {
    Element::new("p").text(NOT_FOUND_MESSAGE)
}

fn meta_line(label: &str, value: impl Into<Node>) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(format!("{label}:")))
        .text(" ")
        .child(value)
}

/// Full article view: metadata, abstract, keywords, then body sections in
/// document order. Link fields are left out entirely when empty.
pub fn article_view(article: &Article, titles: &SectionTitles) -> Element {
    let doi = article.doi().map(|doi| {
        meta_line(
            "DOI",
            Element::new("a")
                .attr("href", doi)
                .attr("target", "_blank")
                .text(doi),
        )
    });
    let pdf = article.pdf_file().map(|pdf| {
        meta_line(
            "PDF",
            Element::new("a")
                .attr("href", pdf)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text("Atidaryti originalų PDF"),
        )
    });
    let translation = article.full_translation().map(|link| {
        meta_line(
            "Pilnas vertimas",
            Element::new("a")
                .attr("href", link)
                .text("Skaityti pilną lietuvišką vertimą"),
        )
    });

    let meta = Element::new("div")
        .class("meta-info")
        .child(meta_line("Autoriai", article.authors.as_str()))
        .child(meta_line("Institucija", article.institution.as_str()))
        .child(meta_line("Metai", article.year.to_string()))
        .child(meta_line("Šaltinis", article.source.as_str()))
        .optional_child(doi)
        .optional_child(pdf)
        .optional_child(translation);

    let keywords = Element::new("div")
        .class("raktiniai-zodziai")
        .child(Element::new("strong").text("Raktiniai žodžiai:"))
        .children(keyword_tags(&article.keywords));

    let sections = article.body.iter().flat_map(|(key, text)| {
        [
            Element::new("h2").text(titles.resolve(key)),
            Element::new("p").text(text.as_str()),
        ]
    });

    Element::new("article")
        .class("straipsnio-turinys")
        .child(Element::new("h1").text(article.title.as_str()))
        .child(meta)
        .child(Element::new("h2").text("Santrauka"))
        .child(Element::new("p").text(article.paper_abstract.as_str()))
        .child(keywords)
        .children(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn sample() -> Article {
        let mut body = IndexMap::new();
        body.insert("ivadinė_dalis".to_string(), "Įvadas.".to_string());
        body.insert("gydymo_metodai".to_string(), "Metodai.".to_string());
        Article {
            id: 4,
            title: "Psichoterapijos metodai PTSS gydymui".to_string(),
            authors: "Ulrich Schnyder".to_string(),
            year: 2015,
            institution: "Zuricho universitetas".to_string(),
            source: "European Journal of Psychotraumatology".to_string(),
            paper_abstract: "Kas jiems bendra?".to_string(),
            doi: None,
            pdf_file: None,
            full_translation: None,
            keywords: vec!["PTSS".to_string()],
            body,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![sample()])
    }

    fn run(address: &str, container: &mut Container) -> DetailOutcome {
        render_detail(
            address,
            &catalog(),
            &SectionTitles::default(),
            &SiteConfig::default(),
            container,
        )
    }

    #[test]
    fn missing_id_redirects_without_rendering() {
        let mut container = Container::new("straipsnis-container");
        let outcome = run("straipsnis.html", &mut container);
        assert_eq!(outcome, DetailOutcome::Redirect("index.html".to_string()));
        assert!(container.is_empty());
    }

    #[test]
    fn unknown_id_shows_only_the_message() {
        let mut container = Container::new("straipsnis-container");
        let outcome = run("straipsnis.html?id=99", &mut container);
        assert_eq!(outcome, DetailOutcome::NotFound(RequestedId::Id(99)));
        assert_eq!(container.inner_html(), "<p>Straipsnis nerastas.</p>");
    }

    #[test]
    fn known_id_renders_the_article() {
        let mut container = Container::new("straipsnis-container");
        let outcome = run("straipsnis.html?id=4", &mut container);
        assert_eq!(outcome, DetailOutcome::Rendered(4));
        let html = container.inner_html();
        assert!(html.starts_with(
            "<article class=\"straipsnio-turinys\"><h1>Psichoterapijos metodai PTSS gydymui</h1>"
        ));
        assert!(html.contains("<h2>Įvadinė dalis</h2><p>Įvadas.</p><h2>Gydymo Metodai</h2><p>Metodai.</p>"));
    }

    #[test]
    fn hex_id_renders_the_article() {
        let mut container = Container::new("straipsnis-container");
        assert_eq!(
            run("straipsnis.html?id=0x4", &mut container),
            DetailOutcome::Rendered(4)
        );
        assert!(container.inner_html().contains("<h1>Psichoterapijos metodai PTSS gydymui</h1>"));
    }

    #[test]
    fn oversized_id_is_not_found_rather_than_redirected() {
        let mut container = Container::new("straipsnis-container");
        let outcome = run("straipsnis.html?id=99999999999999999999999", &mut container);
        assert_eq!(outcome, DetailOutcome::NotFound(RequestedId::OutOfRange));
        assert_eq!(container.inner_html(), "<p>Straipsnis nerastas.</p>");
    }

    #[test]
    fn absent_links_leave_no_meta_lines() {
        let html = Node::from(article_view(&sample(), &SectionTitles::default())).render();
        assert!(!html.contains("DOI:"));
        assert!(!html.contains("PDF:"));
        assert!(!html.contains("Pilnas vertimas:"));
        assert!(html.contains("<p><strong>Šaltinis:</strong> European Journal of Psychotraumatology</p>"));
    }

    #[test]
    fn present_links_render_as_anchors() {
        let mut article = sample();
        article.doi = Some("https://x".to_string());
        article.pdf_file = Some("pdf/4.pdf".to_string());
        article.full_translation = Some("straipsnis-4-pilnas.html".to_string());
        let html = Node::from(article_view(&article, &SectionTitles::default())).render();
        assert!(html.contains(
            r#"<p><strong>DOI:</strong> <a href="https://x" target="_blank">https://x</a></p>"#
        ));
        assert!(html.contains(
            r#"<a href="pdf/4.pdf" target="_blank" rel="noopener noreferrer">Atidaryti originalų PDF</a>"#
        ));
        assert!(html.contains(
            r#"<p><strong>Pilnas vertimas:</strong> <a href="straipsnis-4-pilnas.html">Skaityti pilną lietuvišką vertimą</a></p>"#
        ));
    }

    #[test]
    fn empty_doi_is_treated_as_absent() {
        let mut article = sample();
        article.doi = Some(String::new());
        let html = Node::from(article_view(&article, &SectionTitles::default())).render();
        assert!(!html.contains("DOI:"));
    }

    #[test]
    fn metadata_block_order() {
        let html = Node::from(article_view(&sample(), &SectionTitles::default())).render();
        assert_eq!(
            html.split("<div class=\"meta-info\">").nth(1).and_then(|rest| rest.split("</div>").next()),
            Some(concat!(
                "<p><strong>Autoriai:</strong> Ulrich Schnyder</p>",
                "<p><strong>Institucija:</strong> Zuricho universitetas</p>",
                "<p><strong>Metai:</strong> 2015</p>",
                "<p><strong>Šaltinis:</strong> European Journal of Psychotraumatology</p>"
            ))
        );
    }
}
