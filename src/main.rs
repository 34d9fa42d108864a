use clap::Parser;

use pixel_gallery::cli::Cli;
use pixel_gallery::config::AppConfig;
use pixel_gallery::context::DisplayContext;
use pixel_gallery::platform::WinitPlatform;
use pixel_gallery::scene::{SceneHost, ScenePreset};
use pixel_gallery::{frame_loop, loader};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Failures are logged, not surfaced through the exit status.
    if let Err(err) = run(cli) {
        log::error!("{err:#}");
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(&cli)?;

    let mut platform = WinitPlatform;
    let mut context = DisplayContext::initialize(&mut platform, &config.window)?;

    let gallery = match config.scene.0 {
        ScenePreset::Gallery => match loader::load_gallery(&config.media) {
            Ok(gallery) => Some(gallery),
            Err(err) => {
                // Fail-stop: no fallback media, but teardown still runs.
                context.shutdown();
                return Err(err.into());
            }
        },
        ScenePreset::Geometry => None,
    };

    let size = context.window().inner_size();
    let width = size.width.max(1);
    let height = size.height.max(1);

    log::info!(
        "running {:?} scene at {width}x{height} - arrows to browse, close window to quit",
        config.scene.0
    );

    let summary = {
        let (events, presenter) = context.parts_mut();
        let mut host = SceneHost::new(config.scene.0, gallery.as_ref(), width, height, presenter);
        frame_loop::run(events, &mut host)
    };

    log::info!(
        "finished after {} frames, {} signals",
        summary.frames,
        summary.signals
    );

    // Resources go first, then the context unwinds target/window/subsystem.
    drop(gallery);
    context.shutdown();
    Ok(())
}
