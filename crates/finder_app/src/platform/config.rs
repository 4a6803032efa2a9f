use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use finder_engine::{FetchSettings, DEFAULT_ENDPOINT, MAX_POST_COUNT};
use finder_logging::{LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;

/// Find Hashnode blogs of any host.
#[derive(Debug, Parser)]
#[command(name = "finder", version, about)]
pub struct Cli {
    /// Publication host to search right away (e.g. snehafarkya.hashnode.dev).
    #[arg(long)]
    pub host: Option<String>,

    /// GraphQL endpoint to query.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Number of most recent posts to fetch.
    #[arg(
        long,
        default_value_t = 20,
        value_parser = clap::value_parser!(u16).range(1..=MAX_POST_COUNT as i64)
    )]
    pub posts: u16,

    /// Request timeout in seconds.
    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Where to write the log; the terminal itself is taken by the UI.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable logging entirely.
    #[arg(long, conflicts_with = "log_file")]
    pub no_log: bool,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything the application needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub initial_host: Option<String>,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        if self.no_log {
            LogDestination::Off
        } else {
            LogDestination::File(self.log_file.clone())
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            fetch: FetchSettings {
                endpoint: self.endpoint.clone(),
                request_timeout: Duration::from_secs(self.timeout_secs),
                post_count: usize::from(self.posts),
                ..FetchSettings::default()
            },
            initial_host: self
                .host
                .as_deref()
                .map(str::trim)
                .filter(|host| !host.is_empty())
                .map(ToOwned::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fetch_settings() {
        let cli = Cli::try_parse_from(["finder"]).unwrap();
        let config = cli.app_config();

        assert_eq!(config.fetch.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.fetch.post_count, 20);
        assert_eq!(config.fetch.request_timeout, Duration::from_secs(30));
        assert_eq!(config.initial_host, None);
        assert_eq!(
            cli.log_destination(),
            LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "finder",
            "--host",
            " blog.example.com ",
            "--endpoint",
            "http://localhost:4000/graphql",
            "--posts",
            "10",
            "--timeout-secs",
            "5",
            "--no-log",
            "-v",
        ])
        .unwrap();
        let config = cli.app_config();

        assert_eq!(config.initial_host.as_deref(), Some("blog.example.com"));
        assert_eq!(config.fetch.endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.fetch.post_count, 10);
        assert_eq!(config.fetch.request_timeout, Duration::from_secs(5));
        assert_eq!(cli.log_destination(), LogDestination::Off);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn post_count_is_bounded() {
        assert!(Cli::try_parse_from(["finder", "--posts", "0"]).is_err());
        assert!(Cli::try_parse_from(["finder", "--posts", "51"]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["finder", "--timeout-secs", "0"]).is_err());
        let cli = Cli::try_parse_from(["finder", "--timeout-secs", "1"]).unwrap();
        assert_eq!(cli.app_config().fetch.request_timeout, Duration::from_secs(1));
    }
}
