use reqwest::StatusCode;
use url::Url;

use crate::{error::*, http};

/// Resolve `link` against `base`. Already absolute links are returned as they are.
pub fn join_url(base: &Url, link: &str) -> Result<Url> {
    base.join(link).map_err(|e| Error::InvalidSyntaxUrl {
        url: link.to_owned(),
        source: e,
    })
}

/// `true` when `link` has no scheme of its own (e.g. `/2022/about`, `style.css`, `#x`).
pub fn is_relative_link(link: &str) -> bool {
    matches!(
        Url::parse(link.trim()),
        Err(url::ParseError::RelativeUrlWithoutBase)
    )
}

pub async fn read_ok_body(resp: http::Response, requested_url: &Url) -> Result<String> {
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(Error::UnexpectedResponseCode {
            got: status,
            expected: StatusCode::OK,
            requested_url: requested_url.to_string(),
        });
    }
    Ok(resp.text().await?)
}

pub async fn fetch_text(c: &http::Client, url: &Url) -> Result<String> {
    let resp = c.get(url.clone()).send().await?;
    self::read_ok_body(resp, url).await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_join_url() {
        let root = Url::parse("https://adventofcode.com").unwrap();

        let url = join_url(&root, "/2022/about").unwrap();
        assert_eq!(url.as_str(), "https://adventofcode.com/2022/about");

        let url = join_url(&root, "static/style.css").unwrap();
        assert_eq!(url.as_str(), "https://adventofcode.com/static/style.css");

        // If `link` is already fully qualified, `base` is ignored:
        let url = join_url(&root, "https://example.com/x").unwrap();
        assert_eq!(url.as_str(), "https://example.com/x");
    }

    #[test]
    fn test_is_relative_link() {
        assert!(is_relative_link("/2022/day/1/input"));
        assert!(is_relative_link("style.css"));
        assert!(is_relative_link("#part2"));
        assert!(is_relative_link("//cdn.example.com/x.js"));
        assert!(!is_relative_link("https://adventofcode.com/2022"));
        assert!(!is_relative_link("mailto:someone@example.com"));
    }
}
