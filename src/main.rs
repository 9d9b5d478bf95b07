mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use popularity_sim::config::ScoringConfig;
use popularity_sim::{format_float, ArticleInput, PopularityScorer};
use std::io::{self, Read};
use std::path::Path;

#[derive(Parser)]
#[command(name = "popularity-sim", about = "News article popularity scorer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Score(ScoreArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ScoreArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Pre-joined full text; overrides title/description.
    #[arg(long, conflicts_with_all = ["title", "description"])]
    text: Option<String>,
    #[arg(long)]
    details: bool,
    /// Emit the result as JSON in the API response shape.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Score(ScoreArgs::default()));

    match command {
        Command::Score(args) => run_score(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_score(args: ScoreArgs) -> Result<(), String> {
    let text = resolve_text(&args)?;
    let (config, _) = ScoringConfig::load(None)?;
    let scorer = PopularityScorer::from_config(&config)?;
    let output = scorer.score(&text);

    if args.json {
        let response = api::ApiScoreResponse::from_output(output, false, Vec::new());
        let payload = serde_json::to_string_pretty(&response)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!(
        "Popularity score: {} ({})",
        format_float(output.score, 3),
        output.tier.label()
    );

    if args.details {
        println!("\nSignals:");
        for (name, value) in output.signals.entries() {
            println!("  {}: {}", name, format_float(value, 3));
        }
    } else {
        println!(
            "Signals: emotion {} | urgency {} | lexical richness {} | readability {} | length balance {} | subjectivity {}",
            format_float(output.signals.emotion, 3),
            format_float(output.signals.urgency, 0),
            format_float(output.signals.lexical_richness, 3),
            format_float(output.signals.readability, 3),
            format_float(output.signals.length_balance, 1),
            format_float(output.signals.subjectivity, 3)
        );
    }

    Ok(())
}

fn resolve_text(args: &ScoreArgs) -> Result<String, String> {
    if let Some(text) = &args.text {
        if !text.trim().is_empty() {
            return Ok(text.clone());
        }
    }

    if args.title.is_some() || args.description.is_some() {
        let title = args.title.clone().unwrap_or_default();
        let description = args.description.clone().unwrap_or_default();
        return Ok(ArticleInput::new(title, description).full_text());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing article text: pass --title/--description, --text, or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
