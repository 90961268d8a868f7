use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_arena::game::GameConfig;
use snake_arena::modes::{PlayMode, WatchMode};

#[derive(Parser)]
#[command(name = "snake-arena")]
#[command(version, about = "Grid snake with a greedy autopilot")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "solo")]
    mode: Mode,

    /// Override the square grid size for the chosen mode
    #[arg(long)]
    size: Option<usize>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Steer a single snake yourself
    Solo,
    /// Race the heuristic agent on a larger board
    Versus,
    /// Spectate the agent playing alone
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.mode {
        Mode::Solo => GameConfig::solo(),
        Mode::Versus => GameConfig::versus(),
        Mode::Watch => GameConfig::watch(),
    };
    if let Some(size) = cli.size {
        config = config.with_grid_size(size);
    }

    match cli.mode {
        Mode::Solo | Mode::Versus => {
            let mut mode = PlayMode::new(config);
            mode.run().await?;
        }
        Mode::Watch => {
            let mut mode = WatchMode::new(config);
            mode.run().await?;
        }
    }

    Ok(())
}
