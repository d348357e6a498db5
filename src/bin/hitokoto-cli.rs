use clap::{Parser, Subcommand};
use hitokoto::quota::{today_string, DEFAULT_DAILY_LIMIT};
use hitokoto::share::TerminalClipboard;
use hitokoto::{EpisodeClient, FileStore, GenerationSession};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "hitokoto-cli", version, about = "今日のひとこと terminal client")]
struct Cli {
    /// Server hosting /api/generate-episode
    #[arg(long, env = "HITOKOTO_SERVER", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// File used as the local usage store
    #[arg(long, env = "HITOKOTO_STORE_PATH", default_value = "data/usage.json")]
    store: PathBuf,

    #[arg(long, env = "DAILY_LIMIT", default_value_t = DEFAULT_DAILY_LIMIT)]
    limit: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show today's remaining generations
    Status,
    /// Generate a new episode
    Generate {
        /// Print a share link for the result
        #[arg(long)]
        share: bool,
        /// Copy the result to the terminal clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let cli = Cli::parse();
    let today = today_string();
    let store = FileStore::open(&cli.store)?;
    let mut session = GenerationSession::load(EpisodeClient::new(&cli.server), store, &today, cli.limit)?;

    match cli.command {
        Command::Status => {
            println!("{} ({})", session.quota().date(), session.store().path().display());
            print_remaining(&session);
        }
        Command::Generate { share, copy } => {
            let outcome = session.generate(&today).await.map(str::to_owned);
            match outcome {
                Ok(episode) => println!("{episode}"),
                Err(err) => {
                    eprintln!("{err}");
                    print_remaining(&session);
                    std::process::exit(1);
                }
            }
            print_remaining(&session);

            if share {
                if let Some(url) = session.share_url() {
                    println!("{url}");
                }
            }
            if copy {
                let mut clipboard = TerminalClipboard::new(std::io::stdout());
                if let Some(ack) = session.copy_to_clipboard(&mut clipboard)? {
                    println!("{ack}");
                }
            }
        }
    }

    Ok(())
}

fn print_remaining(session: &GenerationSession<FileStore>) {
    let quota = session.quota();
    println!("今日の残り回数: {}/{}", quota.remaining(), quota.limit());
}
