#[cfg(test)]
#[path = "share_link_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use url::form_urlencoded;
use url::Url;

use super::Page;

/// Flat string key/value form of session state, as it appears in a URL
/// query string. Keys are independent and order-irrelevant on decode;
/// order is kept stable on encode for readable links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn parse(query: &str) -> QueryPairs {
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| return (key.to_string(), value.to_string()))
            .collect::<Vec<(String, String)>>();

        return QueryPairs(pairs);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        return self
            .0
            .iter()
            .find(|(candidate, _)| return candidate == key)
            .map(|(_, value)| return value.as_str());
    }

    pub fn push(&mut self, pair: (String, String)) {
        self.0.push(pair);
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            serializer.append_pair(key, value);
        }

        return serializer.finish();
    }
}

/// A shareable link: hash route plus encoded query, `<base>#/<page>?<query>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLink {
    pub page: Page,
    pub query: QueryPairs,
}

impl ShareLink {
    pub fn new(page: Page, query: QueryPairs) -> ShareLink {
        return ShareLink { page, query };
    }

    /// Accepts a full URL or a bare `#/page?query` fragment. Routing sits
    /// outside the defensive decode contract, so an unrecognized route is
    /// an error rather than a default.
    pub fn parse(link: &str) -> Result<ShareLink> {
        let fragment = if let Some(stripped) = link.strip_prefix('#') {
            stripped.to_string()
        } else if link.starts_with('/') {
            link.to_string()
        } else {
            let parsed = Url::parse(link)?;
            match parsed.fragment() {
                Some(fragment) => fragment.to_string(),
                None => bail!(format!("No viewer route found in link {link}")),
            }
        };

        let (route, query) = match fragment.split_once('?') {
            Some((route, query)) => (route, query),
            None => (fragment.as_str(), ""),
        };

        let page = match Page::parse(route.trim_start_matches('/')) {
            Some(page) => page,
            None => bail!(format!("Unknown viewer route {route}")),
        };

        return Ok(ShareLink::new(page, QueryPairs::parse(query)));
    }

    pub fn to_url(&self, base_url: &str) -> String {
        let page = &self.page;
        let query = self.query.to_query_string();

        return format!("{base_url}#/{page}?{query}");
    }
}
