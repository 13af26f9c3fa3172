use crate::core::Query;

/// Builds the trending page address for `query`.
///
/// Filters are concatenated as-is: a language containing `/` or `?`
/// produces a different path or query string.
pub fn build_trending_url(base_url: &str, query: &Query) -> String {
    let mut url = base_url.to_string();

    if let Some(language) = query.language.as_deref().filter(|l| !l.is_empty()) {
        url.push('/');
        url.push_str(language);
    }

    if let Some(since) = query.since {
        url.push_str("?since=");
        url.push_str(since.as_str());
    }

    url
}
