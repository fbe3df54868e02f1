use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use artscout::{cli, config, discovery, error};

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
    /// Discover small artists related to a set of seed artists
    Discover(DiscoverOptions),

    /// Run the OAuth web service for top tracks and playlists
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct DiscoverOptions {
    /// Seed artist URIs (spotify:artist:<id>); malformed entries are skipped
    #[clap(required = true)]
    pub seed_uris: Vec<String>,

    /// Requested maximum number of recommended tracks
    #[clap(long, default_value_t = 100)]
    pub limit: u32,

    /// Upstream popularity cap for recommended tracks
    #[clap(long, default_value_t = 30)]
    pub max_popularity: u8,

    /// Keep artists at or below this popularity (0-100)
    #[clap(long, default_value_t = discovery::DEFAULT_POPULARITY_THRESHOLD)]
    pub popularity_threshold: u8,

    /// Keep artists at or below this follower count
    #[clap(long, default_value_t = discovery::DEFAULT_FOLLOWER_THRESHOLD)]
    pub follower_threshold: u64,
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
        Command::Discover(opt) => {
            let config = load_config();
            cli::discover(
                &config,
                opt.seed_uris,
                opt.limit,
                opt.max_popularity,
                opt.popularity_threshold,
                opt.follower_threshold,
            )
            .await
        }
        Command::Serve => {
            let config = load_config();
            cli::serve(config).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

fn load_config() -> config::Config {
    match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Cannot load configuration. Err: {}", e);
        }
    }
}
