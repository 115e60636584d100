//! Headless host: pours sand at the top centre, runs a fixed number of
//! frames, and prints the final grid as text.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::ops::ControlFlow;
    use std::path::PathBuf;

    use clap::Parser;
    use sandfall::config::SimConfig;
    use sandfall::error::SimError;
    use sandfall::host::{FrameDriver, HostEvent};
    use sandfall::{GridView, Simulation};

    #[derive(Parser, Debug)]
    #[command(name = "sandfall-headless", about = "Run the sand simulation without a window")]
    struct Args {
        /// JSON file with simulation settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Frames to run
        #[arg(long, default_value_t = 200)]
        ticks: u32,

        /// Frames during which sand is poured
        #[arg(long, default_value_t = 120)]
        pour: u32,

        /// Seed for a reproducible run (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Cell size in pixels, clamped to [1, 20]
        #[arg(long)]
        cell_size: Option<u32>,

        /// Screen width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Screen height in pixels
        #[arg(long)]
        height: Option<u32>,
    }

    fn config_from(args: &Args) -> Result<SimConfig, SimError> {
        let mut config = match &args.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig {
                screen_width: 320,
                screen_height: 200,
                initial_fill_all: false,
                ..SimConfig::default()
            },
        };
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if let Some(cell_size) = args.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(width) = args.width {
            config.screen_width = width;
        }
        if let Some(height) = args.height {
            config.screen_height = height;
        }
        Ok(config)
    }

    fn ascii(view: &GridView<'_>) -> String {
        let mut out = String::with_capacity(view.rows() * (view.columns() + 1));
        for row in view.cells().chunks(view.columns().max(1)) {
            out.extend(row.iter().map(|c| if c.occupied { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }

    pub fn run() -> Result<(), SimError> {
        env_logger::init();
        let args = Args::parse();
        let config = config_from(&args)?;
        let mut sim = Simulation::new(&config);
        let mut driver = FrameDriver::new();

        let dims = sim.dimensions();
        log::info!(
            "running {} frames on a {}x{} grid (cell size {})",
            args.ticks,
            dims.rows,
            dims.columns,
            dims.cell_size
        );

        let pour_x = config.screen_width as f32 / 2.0;
        let pour_y = dims.cell_size as f32 / 2.0;
        let mut events = vec![
            HostEvent::PointerMoved {
                x: pour_x,
                y: pour_y,
            },
            HostEvent::PointerDown,
        ];
        for frame in 0..args.ticks {
            if frame == args.pour {
                events.push(HostEvent::PointerUp);
            }
            if let ControlFlow::Break(()) = driver.frame(&mut sim, events.drain(..)) {
                break;
            }
        }

        let view = sim.snapshot();
        print!("{}", ascii(&view));
        println!("occupied: {}", view.occupied_count());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), sandfall::error::SimError> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
