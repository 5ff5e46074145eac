use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use sloka_analyzer::{
    AnalyzeRequest, Analyzer, AnalyzerConfig, SandhiRuleSet, DEFAULT_DATASET_URL,
};
use sloka_lexicon::{encode_dictionary, samasa_examples, Lexicon};
use sloka_protocol::{Dictionary, DictionaryEntry, SamasaKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Sanskrit sentence analyzer")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "SLOKA_CONFIG")]
    config: Option<PathBuf>,

    /// Sandhi dataset CSV (overrides the config file)
    #[arg(long, global = true, value_name = "URL", env = "SLOKA_DATASET_URL")]
    dataset_url: Option<String>,

    /// Compiled lexicon layered under the built-in dictionary
    #[arg(long, global = true, value_name = "FILE", env = "SLOKA_LEXICON")]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse one sentence and print the result as JSON
    Analyze {
        text: String,
        /// Skip the sandhi dataset even if one is configured
        #[arg(long)]
        offline: bool,
    },
    /// Fetch the sandhi dataset and list the rules learned from it
    Rules {
        /// Show at most this many rules
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Compile a JSON dictionary into an rkyv archive
    CompileLexicon {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Search headwords, meanings and synonyms
    Search { query: String },
    /// List the six compound categories with examples
    SamasaTypes,
    /// Table sizes and pattern counts
    Stats,
}

/// Accepted input shapes for `compile-lexicon`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LexiconSource {
    Document(Dictionary),
    Entries(Vec<DictionaryEntry>),
}

impl LexiconSource {
    fn into_dictionary(self) -> Dictionary {
        match self {
            LexiconSource::Document(dict) => dict,
            LexiconSource::Entries(entries) => Dictionary { version: 1, entries },
        }
    }
}

#[derive(Serialize)]
struct RuleRow<'a> {
    pattern: &'a str,
    confidence: usize,
    score: f32,
    kind: &'a str,
    examples: Vec<&'a str>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    let config = load_config(&cli)?;

    match cli.command {
        Command::Analyze { text, offline } => {
            let analyzer = if offline {
                Analyzer::from_config(&config)?
            } else {
                Analyzer::bootstrap(&config).await?
            };

            let request = AnalyzeRequest::new(text)?;
            match analyzer.run(&request) {
                Ok(result) => print_json(&result)?,
                Err(err) => {
                    print_json(&err.to_response())?;
                    anyhow::bail!("analysis failed with status {}", err.status_code());
                }
            }
        }
        Command::Rules { limit } => {
            let url = config.dataset.url.as_deref().unwrap_or(DEFAULT_DATASET_URL);
            let rules = SandhiRuleSet::fetch(url, &config.dataset)
                .await
                .with_context(|| format!("loading sandhi dataset from {}", url))?;
            info!(rows = rules.rows_read(), skipped = rules.rows_skipped(), "dataset parsed");

            let rows: Vec<RuleRow> = rules
                .rules()
                .iter()
                .take(limit)
                .map(|rule| RuleRow {
                    pattern: &rule.pattern,
                    confidence: rule.confidence,
                    score: rule.score(),
                    kind: &rule.kind,
                    examples: rule.examples.iter().map(|e| e.result.as_str()).collect(),
                })
                .collect();
            print_json(&rows)?;
        }
        Command::CompileLexicon { input, output } => compile_lexicon(&input, &output)?,
        Command::Search { query } => {
            let analyzer = Analyzer::from_config(&config)?;
            print_json(&analyzer.lexicon().search(&query))?;
        }
        Command::SamasaTypes => {
            for kind in SamasaKind::ALL {
                let (example, vigraha) = kind.example();
                println!("{} - {}", kind.label(), kind.description());
                println!("    {} = {}", example, vigraha);
                println!("    {}", samasa_examples(kind).join(", "));
            }
        }
        Command::Stats => {
            let analyzer = Analyzer::from_config(&config)?;
            print_json(&analyzer.stats())?;
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Config file, then flag / environment overrides. A config path given
/// explicitly must exist.
fn load_config(cli: &Cli) -> anyhow::Result<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file {} does not exist", path.display());
            AnalyzerConfig::load(path).with_context(|| format!("reading config {}", path.display()))?
        }
        None => AnalyzerConfig::default(),
    };

    if let Some(url) = &cli.dataset_url {
        config.dataset.url = Some(url.clone());
    }
    if let Some(path) = &cli.lexicon {
        config.lexicon.path = Some(path.clone());
    }
    Ok(config)
}

fn compile_lexicon(input: &Path, output: &Path) -> anyhow::Result<()> {
    info!(input = %input.display(), "reading dictionary JSON");
    let json = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let dict = serde_json::from_str::<LexiconSource>(&json)
        .context("input is neither a dictionary document nor a list of entries")?
        .into_dictionary();

    let layered = Lexicon::builtin().layered(dict.clone());
    info!(
        version = dict.version,
        entries = dict.entries.len(),
        new_headwords = layered.len() - Lexicon::builtin().len(),
        "compiling dictionary"
    );

    let bytes = encode_dictionary(&dict)?;
    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;

    println!("Wrote {} entries ({} bytes) to {}", dict.entries.len(), bytes.len(), output.display());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_source_shapes() {
        let list = r#"[{ "word": "नदी", "meaning": "सरित्" }]"#;
        let dict = serde_json::from_str::<LexiconSource>(list).unwrap().into_dictionary();
        assert_eq!(dict.version, 1);
        assert_eq!(dict.entries[0].word, "नदी");

        let doc = r#"{ "version": 4, "entries": [{ "word": "नदी", "meaning": "सरित्", "synonyms": ["तटिनी"] }] }"#;
        let dict = serde_json::from_str::<LexiconSource>(doc).unwrap().into_dictionary();
        assert_eq!(dict.version, 4);
        assert_eq!(dict.entries[0].synonyms, vec!["तटिनी"]);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "sloka-cli",
            "--dataset-url",
            "https://example.org/sandhi.csv",
            "--lexicon",
            "extra.rkyv",
            "stats",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.dataset.url.as_deref(), Some("https://example.org/sandhi.csv"));
        assert_eq!(config.lexicon.path, Some(PathBuf::from("extra.rkyv")));
        assert!(matches!(cli.command, Command::Stats));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = Cli::try_parse_from(["sloka-cli", "--config", "/nonexistent/sloka.toml", "stats"]).unwrap();

        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sloka.toml"), "{}", err);
    }
}
