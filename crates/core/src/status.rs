//! Post URL paths.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

const POST_HOST: &str = "https://twitter.com";
const EMBED_PROXY_HOST: &str = "https://vxtwitter.com";

/// A parsed `/<user>/status/<number>` path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPath {
    /// The path as given.
    pub path: String,

    /// Author handle.
    pub user: String,

    /// Post identifier.
    pub number: String,
}

impl StatusPath {
    /// Parse a post path such as `/boku__yaba/status/1790000000000000000`.
    ///
    /// Trailing segments (`/photo/1`, `/analytics`) are allowed.
    pub fn parse(path: &str) -> Result<Self> {
        let malformed = || Error::MalformedStatusPath(path.to_string());

        let parts: Vec<&str> = path.split('/').collect();
        match parts.as_slice() {
            ["", user, "status", number, ..] if !user.is_empty() && !number.is_empty() => {
                Ok(Self {
                    path: path.to_string(),
                    user: user.to_string(),
                    number: number.to_string(),
                })
            }
            _ => Err(malformed()),
        }
    }

    /// Canonical link to the post.
    pub fn post_url(&self) -> String {
        format!("{}{}", POST_HOST, self.path)
    }

    /// Link through an embed proxy, for sharing posts outside the wiki.
    pub fn embed_proxy_url(&self) -> String {
        format!("{}{}", EMBED_PROXY_HOST, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_path() {
        let status = StatusPath::parse("/boku__yaba/status/1790000000000000000").unwrap();
        assert_eq!(status.user, "boku__yaba");
        assert_eq!(status.number, "1790000000000000000");
        assert_eq!(
            status.post_url(),
            "https://twitter.com/boku__yaba/status/1790000000000000000"
        );
        assert_eq!(
            status.embed_proxy_url(),
            "https://vxtwitter.com/boku__yaba/status/1790000000000000000"
        );
    }

    #[test]
    fn test_parse_with_trailing_segments() {
        let status = StatusPath::parse("/pig_man1209/status/42/photo/1").unwrap();
        assert_eq!(status.user, "pig_man1209");
        assert_eq!(status.number, "42");
    }

    #[test]
    fn test_parse_rejects_non_status_paths() {
        for path in ["/boku__yaba", "/boku__yaba/likes/1", "//status/1", "/a/status/", ""] {
            assert!(
                matches!(StatusPath::parse(path), Err(Error::MalformedStatusPath(_))),
                "path {:?}",
                path
            );
        }
    }
}
