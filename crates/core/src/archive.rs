//! Archive link parameters for `{{Cite tweet}}`.
//!
//! Covers the two archives the wiki uses: Wayback Machine snapshots and
//! archive.today's "share as wikicode" output.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use url::Url;

const WAYBACK_PATH_PREFIX: &str = "/web/";

/// Build `|archive-url=` and `|archive-date=` params from a snapshot URL.
///
/// Snapshot URLs look like
/// `https://web.archive.org/web/20240102123456/https://x.com/...`; the first
/// eight digits of the timestamp are the archive date.
pub fn wayback_cite_params(snapshot_url: &str) -> Result<String> {
    let date = wayback_archive_date(snapshot_url)?;
    Ok(format!(
        "\n|archive-url={}\n|archive-date={}",
        snapshot_url, date
    ))
}

/// Archive date of a snapshot URL, as `YYYY-MM-DD`.
///
/// Accepts a full snapshot URL or just its path, as read from the page
/// location.
pub fn wayback_archive_date(snapshot_url: &str) -> Result<String> {
    let malformed = || Error::MalformedArchiveUrl(snapshot_url.to_string());

    let path = if snapshot_url.starts_with('/') {
        snapshot_url.to_string()
    } else {
        Url::parse(snapshot_url)
            .map_err(|_| malformed())?
            .path()
            .to_string()
    };

    let timestamp = path
        .strip_prefix(WAYBACK_PATH_PREFIX)
        .and_then(|rest| rest.get(..8))
        .ok_or_else(malformed)?;
    let date = NaiveDate::parse_from_str(timestamp, "%Y%m%d").map_err(|_| malformed())?;

    Ok(date.format("%Y-%m-%d").to_string())
}

/// Rewrite archive.today's wikicode into the wiki's citation style.
///
/// archive.today emits `^ ` list markers and padded `archiveurl`/`archivedate`
/// params; the wiki wants hyphenated params, each on its own line.
pub fn clean_archive_today_wikicode(wikicode: &str) -> String {
    wikicode
        .replace("^ ", "")
        .replace(" | archiveurl  = ", "|archive-url=")
        .replace(" | archivedate = ", "|archive-date=")
        .replace(" }}", "\n}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wayback_cite_params() {
        let url = "https://web.archive.org/web/20240102123456/https://x.com/boku__yaba/status/1";
        assert_eq!(
            wayback_cite_params(url).unwrap(),
            format!("\n|archive-url={}\n|archive-date=2024-01-02", url)
        );
    }

    #[test]
    fn test_wayback_date_from_path() {
        assert_eq!(
            wayback_archive_date("/web/20231231000000/https://x.com/").unwrap(),
            "2023-12-31"
        );
    }

    #[test]
    fn test_wayback_rejects_other_urls() {
        assert!(matches!(
            wayback_archive_date("https://archive.ph/abcde"),
            Err(Error::MalformedArchiveUrl(_))
        ));
        assert!(wayback_archive_date("https://web.archive.org/web/2024/").is_err());
        assert!(wayback_archive_date("https://web.archive.org/web/2024abcd0000/").is_err());
        assert!(wayback_archive_date("").is_err());
        assert!(wayback_archive_date("/web/20241399000000/https://x.com/").is_err());
    }

    #[test]
    fn test_wayback_date_from_path_with_archived_url() {
        // The archived target URL has its own "://" after the timestamp
        assert_eq!(
            wayback_archive_date("/web/20240615083000/https://x.com/boku__yaba/status/1").unwrap(),
            "2024-06-15"
        );
        assert_eq!(
            wayback_cite_params("/web/20240615083000/https://x.com/").unwrap(),
            "\n|archive-url=/web/20240615083000/https://x.com/\n|archive-date=2024-06-15"
        );
    }

    #[test]
    fn test_clean_archive_today_wikicode() {
        let input = "^ {{cite web | url = https://x.com/a/status/1 | archiveurl  = https://archive.ph/xyz | archivedate = 2024-01-02 }}";
        assert_eq!(
            clean_archive_today_wikicode(input),
            "{{cite web | url = https://x.com/a/status/1|archive-url=https://archive.ph/xyz|archive-date=2024-01-02\n}}"
        );
    }

    #[test]
    fn test_clean_archive_today_leaves_other_text() {
        assert_eq!(clean_archive_today_wikicode("plain"), "plain");
    }
}
