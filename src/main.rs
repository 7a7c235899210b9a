use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use mystic::{Character, CharacterClient, config::Config, harvest};
use tracing::error;

#[derive(Parser)]
#[command(name = "mystic", about = "Character records from the Lord of the Mysteries wiki")]
struct Cli {
    /// Character names, e.g. "klein moretti"
    #[arg(required_unless_present = "file")]
    names: Vec<String>,

    /// Extract from a saved HTML page instead of fetching
    #[arg(long, requires = "url", conflicts_with = "names")]
    file: Option<PathBuf>,

    /// Source URL recorded for --file
    #[arg(long)]
    url: Option<String>,

    /// Article URL prefix (overrides MYSTIC_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Characters fetched at once (overrides MYSTIC_CONCURRENCY)
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_record(character: &Character, pretty: bool) -> Result<()> {
    let line = if pretty {
        serde_json::to_string_pretty(character)?
    } else {
        serde_json::to_string(character)?
    };
    println!("{line}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(concurrency) = cli.concurrency {
        config = config.with_concurrency(concurrency);
    }
    let client = CharacterClient::new(config);

    if let (Some(path), Some(url)) = (&cli.file, &cli.url) {
        let html = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let character = client.from_html(&html, url)?;
        print_record(&character, cli.pretty)?;
        return Ok(ExitCode::SUCCESS);
    }

    let concurrency = client.config().concurrency();
    let mut failed = false;
    for (name, result) in harvest(&client, cli.names, concurrency).await {
        match result {
            Ok(character) => print_record(&character, cli.pretty)?,
            Err(err) => {
                error!(name = %name, "{err}");
                failed = true;
            }
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
