use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::github_searcher::DEFAULT_API_URL;

/// Interactive GitHub repository search with debounced queries and a pager.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = "Search GitHub repositories from the terminal. Each line typed is the new content of the search box; keystrokes are debounced, results are shown 20 per page, and :page N switches pages."
)]
pub struct Args {
    /// Repository search endpoint.
    #[clap(long, env = "GITHUB_SEARCH_API_URL", default_value = DEFAULT_API_URL, value_parser = Url::parse)]
    pub api_url: Url,

    /// Debounce window for search-box changes, in milliseconds.
    #[clap(short, long, env = "GITHUB_SEARCH_DEBOUNCE_MS", default_value = "700", value_name = "MS")]
    pub debounce_ms: u64,

    /// Initial content of the search box.
    #[clap(short, long)]
    pub query: Option<String>,
}

impl Args {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["github-repo-searching"]).unwrap();
        assert_eq!(args.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(args.debounce(), Duration::from_millis(700));
        assert_eq!(args.query, None);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "github-repo-searching",
            "--api-url",
            "http://localhost:8080/search/repositories",
            "-d",
            "250",
            "-q",
            "tokio",
        ])
        .unwrap();
        assert_eq!(args.api_url.host_str(), Some("localhost"));
        assert_eq!(args.debounce(), Duration::from_millis(250));
        assert_eq!(args.query.as_deref(), Some("tokio"));
    }

    #[test]
    fn rejects_bad_url() {
        assert!(Args::try_parse_from(["github-repo-searching", "--api-url", "not a url"]).is_err());
    }
}
