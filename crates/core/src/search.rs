//! Per-chapter post search links for the wiki's search list page.
//!
//! Given the release dates of consecutive chapters, builds a numbered wiki
//! list with one search per chapter window for each official account.

use crate::error::{Error, Result};
use chrono::{Days, NaiveDate};

/// Account whose search heads each chapter's item.
const AUTHOR_ACCOUNT: &str = "lovely_pig328";

/// Account searched for every chapter.
const SERIES_ACCOUNT: &str = "boku__yaba";

/// Account searched once the anime account existed.
const ANIME_ACCOUNT: &str = "bokuyaba_anime";

/// Every tenth chapter gets an anchor for deep links.
const ANCHOR_INTERVAL: usize = 10;

/// Builds the wikitext list of chapter searches.
#[derive(Debug, Clone)]
pub struct SearchListGenerator {
    /// First chapter window that also searches the anime account.
    anime_account_since: NaiveDate,
}

impl Default for SearchListGenerator {
    fn default() -> Self {
        Self {
            anime_account_since: NaiveDate::from_ymd_opt(2022, 7, 10).unwrap_or_default(),
        }
    }
}

impl SearchListGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one ISO 8601 date per line, skipping blank lines.
    pub fn parse_dates(text: &str) -> Result<Vec<NaiveDate>> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                NaiveDate::parse_from_str(line, "%Y-%m-%d")
                    .map_err(|_| Error::MalformedDate(line.to_string()))
            })
            .collect()
    }

    /// Generate the list for chapters released on `dates`, in order.
    ///
    /// Chapter `n` spans `dates[n - 1]` to `dates[n]`, so `n` dates give
    /// `n - 1` items. Each line ends with a newline.
    pub fn generate(&self, dates: &[NaiveDate]) -> String {
        let mut output = String::new();

        for (i, window) in dates.windows(2).enumerate() {
            let (from, to) = (window[0], window[1]);
            let chapter = i + 1;

            output.push_str(&format!(
                "# {}{}\n",
                anchor(chapter),
                search_url(AUTHOR_ACCOUNT, from, to)
            ));
            output.push_str(&format!("#* {}\n", search_url(SERIES_ACCOUNT, from, to)));
            if from >= self.anime_account_since {
                output.push_str(&format!("#* {}\n", search_url(ANIME_ACCOUNT, from, to)));
            }
        }

        log::debug!("Generated searches for {} chapters", dates.len().saturating_sub(1));
        output
    }
}

/// Live search for an account's posts between two dates.
///
/// The window is padded by a day on each side so posts near midnight in
/// other time zones are not missed.
pub fn search_url(account: &str, from: NaiveDate, to: NaiveDate) -> String {
    let since = from.checked_sub_days(Days::new(1)).unwrap_or(from);
    let until = to.checked_add_days(Days::new(1)).unwrap_or(to);
    format!(
        "https://x.com/search?q=(from%3A{})%20since%3A{}%20until%3A{}&src=typed_query&f=live",
        account,
        since.format("%Y-%m-%d"),
        until.format("%Y-%m-%d")
    )
}

fn anchor(chapter: usize) -> String {
    if chapter % ANCHOR_INTERVAL == 0 {
        format!("{{{{anchor|{}}}}} ", chapter)
    } else {
        String::new()
    }
}
