use crate::article::Article;
use crate::config::SiteConfig;
use crate::view::{Container, Element, Node};

/// One `keyword-tag` span per keyword, in the article's order.
pub(crate) fn keyword_tags(keywords: &[String]) -> impl Iterator<Item = Element> + '_ {
    keywords
        .iter()
        .map(|keyword| Element::new("span").class("keyword-tag").text(keyword.as_str()))
}

/// Summary card for the listing page.
pub fn article_card(article: &Article, config: &SiteConfig) -> Element {
    Element::new("div")
        .class("straipsnis-card")
        .child(Element::new("h3").text(article.title.as_str()))
        .child(Element::new("p").class("autoriai").text(article.authors.as_str()))
        .child(Element::new("p").class("metai").text(format!("{} m.", article.year)))
        .child(
            Element::new("p")
                .class("santrauka")
                .text(article.paper_abstract.as_str()),
        )
        .child(
            Element::new("div")
                .class("raktiniai-zodziai")
                .children(keyword_tags(&article.keywords)),
        )
        .child(
            Element::new("a")
                .attr("href", config.detail_href(article.id))
                .class("skaityti-btn")
                .text("Skaityti daugiau"),
        )
}

/// Replaces the container content with a card per article, in collection
/// order. Nothing is filtered or sorted.
pub fn render_listing(articles: &[Article], config: &SiteConfig, container: &mut Container) {
    let cards: Vec<Node> = articles
        .iter()
        .map(|article| article_card(article, config).into())
        .collect();
    container.replace_with(&cards);
    tracing::debug!(
        container = container.id(),
        cards = cards.len(),
        "rendered article listing"
    );
}
