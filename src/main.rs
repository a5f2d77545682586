use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use phonoverse::{ClientConfig, TranslationClient, DEFAULT_MOOD};

const CONFIG_CANDIDATES: &[&str] = &["conf.yaml", "conf.json"];

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Text to translate.
    #[arg(required_unless_present_any = ["languages", "moods"])]
    text: Option<String>,

    /// Source language code.
    #[arg(required_unless_present_any = ["languages", "moods"])]
    from: Option<String>,

    /// Target language code.
    #[arg(required_unless_present_any = ["languages", "moods"])]
    to: Option<String>,

    /// Style of the translation.
    #[arg(default_value = DEFAULT_MOOD)]
    mood: String,

    /// Config file (YAML, or JSON by extension). Must load when given.
    #[arg(long, env = "CONFIG_PATH")]
    config: Option<String>,

    /// List supported language codes and exit.
    #[arg(long, conflicts_with = "moods")]
    languages: bool,

    /// List supported moods and exit.
    #[arg(long)]
    moods: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("phonoverse=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::resolve(args.config.as_deref(), CONFIG_CANDIDATES)?;
    let client = TranslationClient::from_config(&config)?;

    if args.languages {
        for code in client.get_supported_languages() {
            println!("{}", code);
        }
        return Ok(());
    }
    if args.moods {
        for mood in client.get_supported_moods() {
            println!("{}", mood);
        }
        return Ok(());
    }

    match (args.text, args.from, args.to) {
        (Some(text), Some(from), Some(to)) => {
            run_translate(&client, &text, &from, &to, &args.mood).await
        }
        _ => anyhow::bail!("text, source and target language are required"),
    }
}

async fn run_translate(
    client: &TranslationClient,
    text: &str,
    from: &str,
    to: &str,
    mood: &str,
) -> Result<()> {
    info!("Translating {} -> {} via {}", from, to, client.base_url());
    let result = client.translate(text, from, to, mood).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
