//! Brick Breaker headless runner
//!
//! Drives a session on an in-process frame queue and logs the result.
//! The browser build is driven from JavaScript through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use brick_breaker::{
        FrameDriver, GameConfig, GameHost, GameOutcome, ManualScheduler, RenderSnapshot,
    };

    #[derive(Parser)]
    #[command(about = "Run a brick breaker session headless")]
    struct Cli {
        /// JSON config file (missing fields use defaults)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Stop after this many frames
        #[arg(long, default_value_t = 100_000)]
        max_frames: u64,
        /// Play with no input instead of the autopilot
        #[arg(long)]
        manual: bool,
    }

    /// Logs progress instead of painting
    struct LogHost {
        last_score: u32,
        last_lives: u32,
    }

    impl GameHost for LogHost {
        fn present(&mut self, snapshot: &RenderSnapshot) {
            if snapshot.score != self.last_score || snapshot.lives != self.last_lives {
                log::info!("Score: {}  Lives: {}", snapshot.score, snapshot.lives);
                self.last_score = snapshot.score;
                self.last_lives = snapshot.lives;
            }
        }

        fn on_win(&mut self) {
            log::info!("YOU WIN, CONGRATS!");
        }

        fn on_loss(&mut self) {
            log::info!("GAME OVER");
        }
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        let cli = Cli::parse();

        let config = match cli.config {
            Some(path) => match GameConfig::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("{}: {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
            },
            None => GameConfig::default(),
        };

        let host = LogHost {
            last_score: 0,
            last_lives: config.lives,
        };
        let mut driver = FrameDriver::new(ManualScheduler::new(), host);
        driver.input_mut().set_autopilot(!cli.manual);
        if let Err(e) = driver.restart(config) {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }

        match driver.run(cli.max_frames) {
            Ok(Some(GameOutcome::InProgress)) => {
                log::info!("Stopped after {} frames", cli.max_frames);
                driver.stop();
                ExitCode::SUCCESS
            }
            Ok(outcome) => {
                log::info!("Session ended: {:?}", outcome);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start
}
