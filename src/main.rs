//! Asteroid Drift entry point
//!
//! Runs a headless session driven by a simple autopilot, then reports the
//! outcome. Useful for tuning experiments and smoke tests.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use glam::Vec2;

    use asteroid_drift::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_MS};
    use asteroid_drift::input::{InputState, Key};
    use asteroid_drift::renderer::{Palette, TextCanvas, draw_frame};
    use asteroid_drift::sim::{GameState, Viewport};
    use asteroid_drift::{Session, Tuning};

    /// Play Asteroid Drift headlessly with an autopilot
    #[derive(Debug, Parser)]
    #[command(version, about)]
    struct Args {
        /// Run seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Frames to simulate before stopping
        #[arg(long, default_value_t = 3600)]
        frames: u32,
        #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = parse_extent)]
        width: f32,
        #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = parse_extent)]
        height: f32,
        /// Runs to play; each game over is followed by a restart until spent
        #[arg(long, default_value_t = 1)]
        runs: u32,
        /// Scripted key press as FRAME:CODE (e.g. `120:Space`), repeatable
        #[arg(long = "press", value_parser = parse_press)]
        presses: Vec<Press>,
        /// Leave the ship to the scripted presses alone
        #[arg(long)]
        no_autopilot: bool,
        /// JSON file overriding gameplay constants
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Print the final state as JSON
        #[arg(long)]
        snapshot: bool,
        /// Print the final frame as text, this many columns wide
        #[arg(long)]
        ascii: Option<usize>,
        /// Colorize the text frame
        #[arg(long)]
        color: bool,
    }

    /// A key pressed and released around one frame
    #[derive(Debug, Clone, Copy)]
    struct Press {
        frame: u32,
        key: Key,
    }

    fn parse_press(arg: &str) -> Result<Press, String> {
        let (frame, code) = arg
            .split_once(':')
            .ok_or_else(|| format!("expected FRAME:CODE, got `{arg}`"))?;
        let frame = frame.parse().map_err(|e| format!("bad frame `{frame}`: {e}"))?;
        let key = Key::from_code(code).ok_or_else(|| format!("unknown key code `{code}`"))?;
        Ok(Press { frame, key })
    }

    fn parse_extent(arg: &str) -> Result<f32, String> {
        let value: f32 = arg.parse().map_err(|e| format!("`{arg}`: {e}"))?;
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(format!("`{arg}` is not a positive size"))
        }
    }

    /// Fire every this many frames while lined up
    const FIRE_EVERY: u64 = 8;
    /// Heading error (radians) under which the autopilot shoots
    const AIM_TOLERANCE: f32 = 0.2;

    /// Turn toward the nearest asteroid and shoot when roughly aligned
    fn autopilot(state: &GameState, input: &mut InputState) {
        for key in [Key::TurnLeft, Key::TurnRight, Key::Thrust] {
            input.key_up(key);
        }

        let ship = state.player.position;
        let Some(target) = state
            .asteroids
            .iter()
            .min_by(|a, b| a.position.distance(ship).total_cmp(&b.position.distance(ship)))
        else {
            // Nothing to shoot: drift back toward the middle
            if ship.distance(state.viewport.center()) > 100.0 {
                input.key_down(Key::Thrust);
            }
            return;
        };

        let to_target = target.position - ship;
        let error = Vec2::from_angle(state.player.rotation).angle_to(to_target);
        if error > AIM_TOLERANCE {
            input.key_down(Key::TurnRight);
        } else if error < -AIM_TOLERANCE {
            input.key_down(Key::TurnLeft);
        } else if state.frame % FIRE_EVERY == 0 {
            input.key_down(Key::Fire);
        }
    }

    fn load_tuning(path: Option<&PathBuf>) -> Tuning {
        match path {
            Some(path) => match Tuning::load(path) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::warn!("{e}; using default tuning");
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    fn clock_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    pub fn run() {
        let args = Args::parse();
        let tuning = load_tuning(args.tuning.as_ref());
        let seed = args.seed.unwrap_or_else(clock_seed);
        let viewport = Viewport::new(args.width, args.height);

        let mut session = Session::new(seed, viewport, tuning);
        let mut input = InputState::default();

        let mut presses = args.presses.clone();
        presses.sort_by_key(|p| p.frame);
        let mut pending = presses.into_iter().peekable();

        let mut frames = 0;
        let mut runs = 1;
        while frames < args.frames {
            if session.is_running() {
                if !args.no_autopilot {
                    autopilot(session.state(), &mut input);
                }
            } else if runs < args.runs {
                input.key_down(Key::Restart);
            }

            let mut released = Vec::new();
            while let Some(press) = pending.next_if(|p| p.frame <= frames) {
                input.key_down(press.key);
                released.push(press.key);
            }

            if !session.is_running() {
                if !input.restart_pending() {
                    break;
                }
                runs += 1;
            }
            frames += session.advance(FRAME_MS, &mut input);
            for key in released {
                input.key_up(key);
            }
        }

        let state = session.state();
        log::info!(
            "Stopped after {} frames: score {}, {} asteroids, {:?}",
            state.frame,
            state.score.value,
            state.asteroids.len(),
            state.phase
        );
        println!("score: {}", state.score.value);
        println!("frames: {}", state.frame);
        println!("runs: {runs}");

        if let Some(cols) = args.ascii {
            let rows = ((cols as f32) * args.height / args.width / 2.0).ceil().max(1.0) as usize;
            let mut canvas = TextCanvas::new(cols, rows).with_ansi(args.color);
            draw_frame(state, session.tuning(), &Palette::default(), &mut canvas);
            print!("{canvas}");
        }

        if args.snapshot {
            match serde_json::to_string_pretty(state) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Snapshot failed: {e}"),
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Asteroid Drift (headless) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the deliverable on wasm
}
