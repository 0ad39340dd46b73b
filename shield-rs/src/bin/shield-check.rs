//! CLI tool for analyzing a solicitation text
//!
//! # Usage
//!
//! ```bash
//! # Analyze text from the command line
//! shield-check "URGENT! Send gift cards now."
//!
//! # Analyze text from stdin
//! cat solicitation.txt | shield-check
//!
//! # Try a remote analyze endpoint first, fall back to the local engine
//! shield-check --remote http://127.0.0.1:8787 "text to analyze"
//!
//! # Take the remote endpoint from a config file
//! shield-check --config shield.toml "text to analyze"
//!
//! # Raw JSON verdict
//! shield-check --json "text to analyze"
//! ```

use clap::Parser;
use shield_rs::client::RemoteAnalyzer;
use shield_rs::config::ShieldConfig;
use shield_rs::scoring::ScamScorer;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "shield-check")]
#[command(about = "Analyze a charity solicitation text for scam signals", long_about = None)]
struct Cli {
    /// Text to analyze; reads stdin when omitted
    text: Option<String>,

    /// Analyze endpoint to try first, falling back to the local engine
    #[arg(short, long)]
    remote: Option<String>,

    /// Config file providing the remote endpoint settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Round-trip bound for the remote attempt, in seconds
    #[arg(long, default_value_t = 6)]
    timeout: u64,

    /// Print the raw JSON verdict
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if text.trim().is_empty() {
        eprintln!("Nothing to analyze: empty text");
        std::process::exit(1);
    }

    // --remote wins over the config file; with neither, score locally
    let analyzer = match (cli.remote, cli.config) {
        (Some(remote), _) => Some(RemoteAnalyzer::with_timeout(
            remote,
            Duration::from_secs(cli.timeout),
        )),
        (None, Some(path)) => {
            let config = ShieldConfig::from_file(&path)?;
            config.validate()?;
            RemoteAnalyzer::from_config(&config.remote)
        }
        (None, None) => None,
    };

    let verdict = match analyzer {
        Some(analyzer) => analyzer.analyze(&text).await?,
        None => ScamScorer::default().score(&text)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!("{} (confidence {}%)", verdict.label, verdict.score);
        println!("Signals:");
        for reason in &verdict.reasons {
            println!("  - {}", reason);
        }
    }

    Ok(())
}
