//! Sparkles entry point
//!
//! Headless native host: runs the scene into a triangle mesh at the configured
//! frame rate. Pass a settings JSON path as the first argument.

use sparkles::Settings;
use sparkles::frame::run;
use sparkles::platform::FrameClock;
use sparkles::renderer::MeshCanvas;
use sparkles::sim::SimState;

fn main() {
    env_logger::init();

    if let Err(err) = try_main() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn try_main() -> sparkles::Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::warn!("No settings file given, using the default scene");
            Settings::default()
        }
    };

    log::info!(
        "{} starting: {}x{} arena, {} fps",
        settings.title,
        settings.width,
        settings.height,
        settings.fps
    );

    let mut state = SimState::new(&settings)?;
    let mut canvas = MeshCanvas::new();
    let mut clock = FrameClock::new(settings.fps);

    let frames = run(
        &mut state,
        &mut canvas,
        &mut clock,
        &settings.palette,
        settings.max_frames,
        |_| false,
    );

    log::info!(
        "Stopped after {} frames ({} vertices in the last frame)",
        frames,
        canvas.vertices().len()
    );
    Ok(())
}
