//! CLI tool for producing BokuYaba wiki citations from posts.

use anyhow::{Context, Result};
use bokuyaba_core::archive::{clean_archive_today_wikicode, wayback_cite_params};
use bokuyaba_core::{
    mdy_to_iso, CitationConfig, CitationOutputs, CitationPipeline, CitationRequest, DateExpander,
    SearchListGenerator, StatusPath,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Produce {{Cite tweet}} markup and teaser prose for the BokuYaba wiki.
#[derive(Parser, Debug)]
#[command(name = "bokuyaba-cite")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file overriding the built-in tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a citation for a post
    Cite {
        /// Author handle
        #[arg(short, long, required_unless_present_any = ["request", "status"])]
        user: Option<String>,

        /// Post number
        #[arg(short, long, required_unless_present_any = ["request", "status"])]
        number: Option<String>,

        /// Post path such as /boku__yaba/status/123, instead of --user and --number
        #[arg(short, long, conflicts_with_all = ["user", "number", "request"])]
        status: Option<String>,

        /// Japanese post text (read from stdin if omitted)
        #[arg(short, long, conflicts_with = "request")]
        title: Option<String>,

        /// JSON file holding a full citation request
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// English translation of the post text
        #[arg(long, default_value = "")]
        translation: String,

        /// What to print
        #[arg(short, long, value_enum, default_value_t = OutputFormat::All)]
        format: OutputFormat,
    },

    /// Expand an abbreviated post timestamp
    ExpandDate {
        /// Timestamp such as "3:00 PM · Jan 2, 2024"
        timestamp: String,
    },

    /// Convert a prose date such as "January 2nd, 2024" to ISO 8601
    MdyToIso {
        /// Date as written in a chapter article
        date: String,
    },

    /// Build the chapter search list from ISO release dates, one per line
    Searches {
        /// File of release dates (read from stdin if omitted)
        dates: Option<PathBuf>,
    },

    /// Show links for a post path and whether its author is recognized
    Status {
        /// Post path such as /boku__yaba/status/123
        path: String,
    },

    /// Print archive params for a Wayback Machine snapshot URL
    Wayback {
        /// Snapshot URL
        url: String,
    },

    /// Clean up archive.today wikicode read from stdin
    ArchiveToday,

    /// Print the effective configuration as JSON
    PrintConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Footnote, list item and teaser
    All,
    /// Footnote only
    Ref,
    /// Sandbox list item only
    List,
    /// Teaser prose only
    Teaser,
    /// All outputs as JSON
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Cite {
            user,
            number,
            status,
            title,
            request,
            translation,
            format,
        } => {
            let request = match (request, status) {
                (Some(path), _) => read_request(&path)?,
                (None, Some(path)) => {
                    let status = StatusPath::parse(&path)?;
                    build_request(Some(status.user), Some(status.number), title)?
                }
                (None, None) => build_request(user, number, title)?,
            };
            if !config.is_recognized_author(&request.user) {
                log::warn!("{} is not a recognized author", request.user);
            }
            let pipeline = CitationPipeline::new(config)?;
            let outputs = pipeline.run(&request, &translation)?;
            print!("{}", render(&outputs, format)?);
        }
        Command::ExpandDate { timestamp } => {
            let expander = DateExpander::from_config(config);
            println!("{}", expander.expand(&timestamp)?);
        }
        Command::MdyToIso { date } => {
            println!("{}", mdy_to_iso(&date)?);
        }
        Command::Searches { dates } => {
            let text = match dates {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => read_stdin()?,
            };
            let dates = SearchListGenerator::parse_dates(&text)?;
            print!("{}", SearchListGenerator::new().generate(&dates));
        }
        Command::Status { path } => {
            let status = StatusPath::parse(&path)?;
            println!("{}", status.post_url());
            if config.is_recognized_author(&status.user) {
                println!("recognized author: {}", status.user);
            } else {
                println!("{}", status.embed_proxy_url());
            }
        }
        Command::Wayback { url } => {
            println!("{}", wayback_cite_params(&url)?);
        }
        Command::ArchiveToday => {
            let wikicode = read_stdin()?;
            print!("{}", clean_archive_today_wikicode(&wikicode));
        }
        Command::PrintConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Load configuration from a JSON file, or use the defaults.
fn load_config(path: Option<&Path>) -> Result<CitationConfig> {
    let Some(path) = path else {
        return Ok(CitationConfig::default());
    };
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = CitationConfig::from_json_str(&data)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Read a citation request from a JSON file.
fn read_request(path: &Path) -> Result<CitationRequest> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Build a request from command-line fields, reading the title from stdin
/// when it was not given.
fn build_request(
    user: Option<String>,
    number: Option<String>,
    title: Option<String>,
) -> Result<CitationRequest> {
    let title = match title {
        Some(title) => title,
        None => read_stdin()?,
    };
    Ok(CitationRequest::new(user.unwrap_or_default(), number.unwrap_or_default()).with_text(title))
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

/// Render outputs in the requested format, with a trailing newline.
fn render(outputs: &CitationOutputs, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::All => format!(
            "{}\n\n{}\n\n{}",
            outputs.ref_tag, outputs.list_item, outputs.teaser.prose
        ),
        OutputFormat::Ref => outputs.ref_tag.clone(),
        OutputFormat::List => outputs.list_item.clone(),
        OutputFormat::Teaser => outputs.teaser.prose.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(outputs)?,
    };
    Ok(format!("{}\n", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs() -> CitationOutputs {
        let pipeline = CitationPipeline::with_defaults().unwrap();
        let request = CitationRequest::new("boku__yaba", "1").with_text("第5話");
        pipeline.run(&request, "Chapter 5").unwrap()
    }

    #[test]
    fn test_render_ref() {
        let text = render(&outputs(), OutputFormat::Ref).unwrap();
        assert_eq!(
            text,
            "<ref>{{Cite tweet\n|user=boku__yaba |number=1 |title=第5話 |translation=Chapter 5\n}}</ref>\n"
        );
    }

    #[test]
    fn test_render_all_has_three_blocks() {
        let text = render(&outputs(), OutputFormat::All).unwrap();
        assert!(text.starts_with("<ref>"));
        assert!(text.contains("\n\n* {{Cite tweet"));
        assert!(text.contains("The latest episode"));
        assert!(text.ends_with("</ref>\n"));
    }

    #[test]
    fn test_render_json() {
        let text = render(&outputs(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["teaser"]["category"], "main-series");
        assert!(value["citation"].as_str().unwrap().starts_with("{{Cite tweet"));
    }

    #[test]
    fn test_build_request_with_title() {
        let request =
            build_request(Some("u".into()), Some("1".into()), Some("t".into())).unwrap();
        assert_eq!(request.user, "u");
        assert_eq!(request.raw_title(), "t");
    }

    #[test]
    fn test_load_default_config() {
        assert_eq!(load_config(None).unwrap(), CitationConfig::default());
    }

    #[test]
    fn test_args_parse_searches_without_file() {
        let args = Args::try_parse_from(["bokuyaba-cite", "searches"]).unwrap();
        assert!(matches!(args.command, Command::Searches { dates: None }));
    }

    #[test]
    fn test_args_parse_cite_with_status() {
        let args = Args::try_parse_from([
            "bokuyaba-cite",
            "cite",
            "--status",
            "/boku__yaba/status/1",
            "--title",
            "第5話",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Cite { status: Some(_), .. }));
    }
}
