//! Random release codenames.

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

const CODENAME_URL: &str = "https://futureboy.us/lookup/codename.pl?count=1";

static CODENAME_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<P><B>(.*?)</B></P>").expect("invalid regex"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]+>").expect("invalid regex"));

/// Extracts the first codename from the generator's HTML page.
fn parse_codename(html: &str) -> Option<String> {
    let block = CODENAME_BLOCK.find(html)?;
    let name = HTML_TAG.replace_all(block.as_str(), "");
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Fetches a random codename.
fn fetch_codename() -> Result<String> {
    // Create a tokio runtime for the request
    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        let body = client
            .get(CODENAME_URL)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let name = parse_codename(&body).context("no codename in response")?;
        Ok::<_, anyhow::Error>(name)
    })
}

/// Looks up a release codename, logging instead of failing.
pub fn lookup() -> Option<String> {
    match fetch_codename() {
        Ok(name) => {
            info!(%name, "picked release codename");
            Some(name)
        }
        Err(e) => {
            warn!("release codename lookup failed: {e:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codename() {
        let html = "<HTML><BODY><H1>Codenames</H1>\n<P><B>Crimson Wombat</B></P>\n</BODY></HTML>";
        assert_eq!(parse_codename(html), Some("Crimson Wombat".to_string()));
    }

    #[test]
    fn test_parse_codename_first_block() {
        let html = "<P><B>First One</B></P><P><B>Second One</B></P>";
        assert_eq!(parse_codename(html), Some("First One".to_string()));
    }

    #[test]
    fn test_parse_codename_strips_nested_tags() {
        let html = "<P><B><I>Quiet</I> Harbor</B></P>";
        assert_eq!(parse_codename(html), Some("Quiet Harbor".to_string()));
    }

    #[test]
    fn test_parse_codename_missing() {
        assert_eq!(parse_codename("<P>nothing here</P>"), None);
        assert_eq!(parse_codename("<P><B> </B></P>"), None);
    }
}
