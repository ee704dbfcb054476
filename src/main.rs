use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use trueshuffle::{
    cli::{self, ShuffleRequest},
    config, error,
    shuffle::Strategy,
    types::PkceToken,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// List devices available for playback
    Devices,

    /// Shuffle a playlist and play or save the queue
    Shuffle(ShuffleOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only show playlists whose name contains this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShuffleOptions {
    /// Playlist id, or `liked` for your liked songs
    #[clap(long)]
    pub playlist: String,

    /// Device id to start playback on; prints the queue only when omitted
    #[clap(long)]
    pub device: Option<String>,

    /// Number of tracks in the queue
    #[clap(long)]
    pub cap: Option<usize>,

    /// unbiased, batch, spread, contributor, partition or rearrange
    #[clap(long, default_value = "contributor")]
    pub strategy: Strategy,

    /// Window size of the batch shuffle (defaults to a tenth of the playlist)
    #[clap(long)]
    pub window: Option<usize>,

    /// Seed for a reproducible shuffle
    #[clap(long)]
    pub seed: Option<u64>,

    /// Fetch tracks from Spotify even if they are cached
    #[clap(long)]
    pub no_cache: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists(opt) => cli::list_playlists(opt.search).await,
        Command::Devices => cli::list_devices().await,
        Command::Shuffle(opt) => {
            cli::shuffle(ShuffleRequest {
                playlist: opt.playlist,
                device: opt.device,
                cap: opt.cap,
                strategy: opt.strategy,
                window: opt.window,
                seed: opt.seed,
                use_cache: !opt.no_cache,
            })
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
