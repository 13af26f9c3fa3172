//! Reads repository cards out of a trending page.
//!
//! Every field has its own lookup returning `Option`; the defaults for a
//! missing node are applied in [`RepositoryExtractor::summarize`].

use crate::core::RepositorySummary;
use crate::utils::error::{Result, TrendingError};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const CONTAINER: &str = "article.Box-row";
const HEADING_LINK: &str = "h2.h3 a";
const AUTHOR: &str = "span.text-normal";
const STARGAZERS: &str = r#"a[href*="/stargazers"]"#;
const TODAY_STARS: &str = ".d-inline-block.float-sm-right";
const LANGUAGE: &str = r#"[itemprop="programmingLanguage"]"#;
const DESCRIPTION: &str = "p.color-fg-muted";

/// Appended to the origin when a card has no heading link target.
pub const MISSING_HREF: &str = "undefined";

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| TrendingError::SelectorError {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Concatenated text of every match below `card`, trimmed.
/// `None` when nothing matches.
fn joined_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let mut matched = false;
    let mut text = String::new();
    for element in card.select(selector) {
        matched = true;
        text.extend(element.text());
    }
    matched.then(|| text.trim().to_string())
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub struct RepositoryExtractor {
    container: Selector,
    heading_link: Selector,
    author: Selector,
    stargazers: Selector,
    today_stars: Selector,
    language: Selector,
    description: Selector,
    digits: Regex,
    origin: String,
}

impl RepositoryExtractor {
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        Ok(Self {
            container: parse_selector(CONTAINER)?,
            heading_link: parse_selector(HEADING_LINK)?,
            author: parse_selector(AUTHOR)?,
            stargazers: parse_selector(STARGAZERS)?,
            today_stars: parse_selector(TODAY_STARS)?,
            language: parse_selector(LANGUAGE)?,
            description: parse_selector(DESCRIPTION)?,
            digits: Regex::new(r"\d+")?,
            origin: origin.into(),
        })
    }

    /// Extracts every card in document order. A page without cards
    /// yields an empty list.
    pub fn extract(&self, html: &str) -> Vec<RepositorySummary> {
        let document = Html::parse_document(html);
        document
            .select(&self.container)
            .map(|card| self.summarize(card))
            .collect()
    }

    pub fn summarize(&self, card: ElementRef<'_>) -> RepositorySummary {
        let href = self.href(card);
        RepositorySummary {
            name: self.name(card).unwrap_or_default(),
            description: self.description(card).unwrap_or_default(),
            url: format!("{}{}", self.origin, href.as_deref().unwrap_or(MISSING_HREF)),
            author: self.author(card).unwrap_or_default(),
            language: self.language(card).unwrap_or_default(),
            stars: self.stars(card).unwrap_or_default(),
            today_stars: self.today_stars(card).unwrap_or(0),
        }
    }

    pub fn name(&self, card: ElementRef<'_>) -> Option<String> {
        joined_text(card, &self.heading_link)
    }

    /// `href` of the first heading link.
    pub fn href(&self, card: ElementRef<'_>) -> Option<String> {
        card.select(&self.heading_link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string)
    }

    pub fn author(&self, card: ElementRef<'_>) -> Option<String> {
        joined_text(card, &self.author).map(|author| author.replacen(" /", "", 1))
    }

    /// Text of the last stargazers link with thousands separators removed.
    /// Left as text, not parsed.
    pub fn stars(&self, card: ElementRef<'_>) -> Option<String> {
        card.select(&self.stargazers)
            .last()
            .map(|link| element_text(link).replace(',', ""))
    }

    /// First run of digits in the "stars today" badge.
    pub fn today_stars(&self, card: ElementRef<'_>) -> Option<u64> {
        let text = joined_text(card, &self.today_stars)?;
        self.digits
            .find(&text)
            .and_then(|digits| digits.as_str().parse().ok())
    }

    pub fn language(&self, card: ElementRef<'_>) -> Option<String> {
        joined_text(card, &self.language)
    }

    pub fn description(&self, card: ElementRef<'_>) -> Option<String> {
        joined_text(card, &self.description)
    }
}

/// Parses `html` and extracts its repository cards, prefixing links with `origin`.
pub fn extract_repositories(html: &str, origin: &str) -> Result<Vec<RepositorySummary>> {
    let extractor = RepositoryExtractor::new(origin)?;
    Ok(extractor.extract(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/trending.html");
    const ORIGIN: &str = "https://github.com";

    fn card(inner: &str) -> String {
        format!(r#"<html><body><article class="Box-row">{}</article></body></html>"#, inner)
    }

    fn extract_one(inner: &str) -> RepositorySummary {
        let mut repos = extract_repositories(&card(inner), ORIGIN).unwrap();
        assert_eq!(repos.len(), 1);
        repos.remove(0)
    }

    #[test]
    fn test_fixture_cards_in_document_order() {
        let repos = extract_repositories(FIXTURE, ORIGIN).unwrap();
        assert_eq!(repos.len(), 3);

        let urls: Vec<&str> = repos.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/rust-lang/rust",
                "https://github.com/python/cpython",
                "https://github.com/octo-org/dotfiles",
            ]
        );
    }

    #[test]
    fn test_fixture_first_card_fields() {
        let repos = extract_repositories(FIXTURE, ORIGIN).unwrap();
        let rust = &repos[0];

        assert!(rust.name.starts_with("rust-lang /"));
        assert!(rust.name.ends_with("rust"));
        assert_eq!(rust.author, "rust-lang");
        assert_eq!(
            rust.description,
            "Empowering everyone to build reliable and efficient software."
        );
        assert_eq!(rust.language, "Rust");
        assert_eq!(rust.stars, "101234");
        assert_eq!(rust.today_stars, 56);
    }

    #[test]
    fn test_fixture_card_without_optional_fields() {
        let repos = extract_repositories(FIXTURE, ORIGIN).unwrap();
        let dotfiles = &repos[2];

        assert_eq!(dotfiles.author, "octo-org");
        assert_eq!(dotfiles.language, "");
        assert_eq!(dotfiles.description, "");
        assert_eq!(dotfiles.stars, "7");
        assert_eq!(dotfiles.today_stars, 0);
    }

    #[test]
    fn test_stars_strips_commas_and_stays_text() {
        let repo = extract_one(r#"<a href="/a/b/stargazers"> 1,234 </a>"#);
        assert_eq!(repo.stars, "1234");
    }

    #[test]
    fn test_stars_uses_last_stargazers_link() {
        let repo = extract_one(
            r#"<a href="/a/b/stargazers">9</a><a href="/x/y/stargazers/you_know">2,000,000</a>"#,
        );
        assert_eq!(repo.stars, "2000000");
    }

    #[test]
    fn test_today_stars_takes_first_digit_run() {
        let repo = extract_one(
            r#"<span class="d-inline-block float-sm-right">56 stars today</span>"#,
        );
        assert_eq!(repo.today_stars, 56);

        // 千分位逗號會截斷數字
        let repo = extract_one(
            r#"<span class="d-inline-block float-sm-right">1,203 stars this week</span>"#,
        );
        assert_eq!(repo.today_stars, 1);
    }

    #[test]
    fn test_today_stars_without_digits_is_zero() {
        let repo = extract_one(
            r#"<span class="d-inline-block float-sm-right">no stars today</span>"#,
        );
        assert_eq!(repo.today_stars, 0);
    }

    #[test]
    fn test_missing_href_appends_undefined() {
        let repo = extract_one(r#"<h2 class="h3"><a>orphan</a></h2>"#);
        assert_eq!(repo.name, "orphan");
        assert_eq!(repo.url, "https://github.comundefined");

        let repo = extract_one("<p>nothing here</p>");
        assert_eq!(repo.url, "https://github.comundefined");
        assert_eq!(repo.name, "");
    }

    #[test]
    fn test_href_is_not_normalized() {
        let repo = extract_one(r#"<h2 class="h3"><a href="//weird">w</a></h2>"#);
        assert_eq!(repo.url, "https://github.com//weird");
    }

    #[test]
    fn test_author_removes_only_first_separator() {
        let repo = extract_one(r#"<span class="text-normal"> a / b / </span>"#);
        assert_eq!(repo.author, "a b /");
    }

    #[test]
    fn test_page_without_cards_is_empty() {
        let repos = extract_repositories("<html><body><h1>Oops</h1></body></html>", ORIGIN).unwrap();
        assert!(repos.is_empty());

        let repos = extract_repositories("", ORIGIN).unwrap();
        assert!(repos.is_empty());
    }

    #[test]
    fn test_field_lookups_report_absence() {
        let extractor = RepositoryExtractor::new(ORIGIN).unwrap();
        let document = Html::parse_document(&card("<div></div>"));
        let selector = Selector::parse(CONTAINER).unwrap();
        let node = document.select(&selector).next().unwrap();

        assert_eq!(extractor.name(node), None);
        assert_eq!(extractor.href(node), None);
        assert_eq!(extractor.stars(node), None);
        assert_eq!(extractor.today_stars(node), None);
        assert_eq!(extractor.language(node), None);
        assert_eq!(extractor.description(node), None);
    }
}
