use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use arcade_snake::app::App;
use arcade_snake::audio::AudioPlayer;
use arcade_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "arcade-snake")]
#[command(version, about = "Grid snake arcade game for the terminal")]
struct Cli {
    /// Directory holding the sound assets
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Run without sound
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Acquire the audio device and assets before touching the terminal, so
    // a failure aborts with a readable diagnostic.
    let audio = if cli.mute {
        None
    } else {
        Some(AudioPlayer::load(&cli.assets)?)
    };

    let mut app = App::new(GameConfig::default(), audio);
    app.run().await
}
