//! Headless replay of the projection demo.
//!
//! Feeds a scripted pointer session into a `ShapeController` and logs every
//! frame, the way a canvas shell would drive it once per tick.
//!
//! Usage:
//! ```text
//! cargo run --example trace                 # default (rectangle)
//! cargo run --example trace -- polygon      # drag a hexagon around
//! cargo run --example trace -- sweep        # rotate the line around a pivot
//! RUST_LOG=vecproj=trace cargo run --example trace
//! ```

mod scripts;

use tracing::{info, warn};
use vecproj::scene::{ControllerConfig, ShapeController};
use vecproj::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=vecproj=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trace=info".parse().unwrap_or_default())
        .add_directive("vecproj=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "rectangle".to_owned());
    let Some(script) = scripts::lookup(&name) else {
        warn!(%name, available = ?scripts::SCRIPTS, "unknown script");
        return Ok(());
    };

    let config = ControllerConfig::default();
    info!(script = %name, interval = ?config.tick_interval, "replaying");
    let mut controller = ShapeController::new(config)?;

    for (tick, step) in script.iter().enumerate() {
        step.apply(&mut controller)?;
        let frame = controller.tick()?;
        info!(tick, "{}", frame.status_text());
        if let Some(e) = frame.extrema {
            info!(
                tick,
                near = ?(e.near.vertex.x, e.near.vertex.y),
                far = ?(e.far.vertex.x, e.far.vertex.y),
                "{}",
                frame.extent_text()
            );
        }
    }
    Ok(())
}
