use std::path::PathBuf;

use bobsphere_game::Game;
use bobsphere_input::KeyEvent;
use bobsphere_kernel::{FrameInput, MotionConfig, MotionFeatures, Script, replay_scene};
use bobsphere_render::{DebugTextRenderer, LogSurface};
use bobsphere_server::ServerConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bobsphere", about = "Bobbing sphere demo: asset host and headless loop")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Serve the prebuilt bundle with entry document fallback
    Serve {
        /// Port to listen on (defaults to $PORT, then 8081)
        #[arg(short, long)]
        port: Option<u16>,
        /// Bundle directory
        #[arg(long, default_value = "dist")]
        root: PathBuf,
    },
    /// Replay a frame script twice and check the runs match bit for bit
    Replay {
        /// JSON frame script; a built-in session is used when omitted
        script: Option<PathBuf>,
        /// JSON motion config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print every frame sample
        #[arg(long)]
        samples: bool,
    },
    /// Drive the game loop headless at a fixed frame delta
    Run {
        /// Number of frames to run
        #[arg(short, long, default_value = "600")]
        frames: u64,
        /// Milliseconds per frame
        #[arg(short, long, default_value = "16.0")]
        delta_ms: f64,
        /// JSON motion config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Only bob; no squash, movement or boost
        #[arg(long)]
        bob_only: bool,
        /// Release the boost key every N frames (0 = never)
        #[arg(long, default_value = "0")]
        boost_every: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("bobsphere v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", bobsphere_input::crate_info());
            println!("kernel: {}", bobsphere_kernel::crate_info());
            println!("render: {}", bobsphere_render::crate_info());
            println!("game: {}", bobsphere_game::crate_info());
            println!("server: {}", bobsphere_server::crate_info());
        }
        Commands::Serve { port, root } => {
            let config = match port {
                Some(port) => ServerConfig {
                    port,
                    ..ServerConfig::default()
                },
                None => ServerConfig::from_env()?,
            }
            .with_root(root);
            bobsphere_server::serve(config).await?;
        }
        Commands::Replay {
            script,
            config,
            samples,
        } => {
            let config = load_config(config)?;
            let frames = match script {
                Some(path) => Script::from_json_file(&path)?.frames,
                None => demo_session(),
            };
            println!("Replay: {} frames", frames.len());
            tracing::info!(frames = frames.len(), "replaying script twice");

            let (scene1, run1) = replay_scene(config, &frames)?;
            let (scene2, run2) = replay_scene(config, &frames)?;

            if samples {
                for s in &run1 {
                    println!(
                        "#{:<5} phase={:.6} pos=({:.4}, {:.4}, {:.4}) speed={:.6}",
                        s.frame, s.phase, s.x, s.y, s.z, s.vertical_speed
                    );
                }
            }
            if let Some(last) = run1.last() {
                println!(
                    "Final: phase={:.6} pos=({:.4}, {:.4}, {:.4}) speed={:.6}",
                    last.phase, last.x, last.y, last.z, last.vertical_speed
                );
            }

            let matched = run1.len() == run2.len()
                && run1.iter().zip(&run2).all(|(a, b)| a.bit_eq(b))
                && scene1.state_hash() == scene2.state_hash();
            println!("State hash: {:#x}", scene1.state_hash());
            println!("Match: {}", if matched { "OK" } else { "MISMATCH" });
            if !matched {
                anyhow::bail!("replay diverged");
            }
        }
        Commands::Run {
            frames,
            delta_ms,
            config,
            bob_only,
            boost_every,
        } => {
            let mut config = load_config(config)?;
            if bob_only {
                config.features = MotionFeatures::bob_only();
            }

            let mut game = Game::builder()
                .config(config)
                .display(LogSurface::default())
                .renderer(DebugTextRenderer::new())
                .build()?;

            tracing::info!(frames, delta_ms, "running headless");
            let mut last = String::new();
            for i in 1..=frames {
                if boost_every > 0 && i % boost_every == 0 {
                    game.queue_key(KeyEvent::up("Space"));
                }
                last = game.frame(delta_ms);
            }
            tracing::info!(state_hash = game.scene().state_hash(), "run finished");
            print!("{last}");
            println!("{} fps", game.fps().round() as u64);
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<MotionConfig> {
    Ok(match path {
        Some(path) => MotionConfig::from_json_file(path)?,
        None => MotionConfig::default(),
    })
}

/// Hold left for a second, then forward with a boost, then let go.
fn demo_session() -> Vec<FrameInput> {
    let mut frames = vec![FrameInput::with_events(16.0, vec![KeyEvent::down("KeyA")])];
    frames.extend((0..60).map(|_| FrameInput::idle(16.0)));
    frames.push(FrameInput::with_events(
        16.0,
        vec![KeyEvent::up("KeyA"), KeyEvent::down("KeyW")],
    ));
    frames.push(FrameInput::with_events(16.0, vec![KeyEvent::up("Space")]));
    frames.extend((0..60).map(|_| FrameInput::idle(16.0)));
    frames.push(FrameInput::with_events(16.0, vec![KeyEvent::up("KeyW")]));
    frames
}
