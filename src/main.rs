mod config;
mod error;
mod reader;
mod services;
mod surface;

use canvas::controller::CanvasController;
use tracing::{error, info};

use crate::config::HostConfig;
use crate::error::HostError;
use crate::surface::{ScrollbarObserver, TracingSurface};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "touchcanvas failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env();
    config.validate()?;

    let mut controller = CanvasController::try_new(config.controller)?;
    controller.add_observer(Box::new(ScrollbarObserver::new()));
    controller.set_document_size(config.document);
    controller.resize(config.viewport);
    controller.attach_surface(Box::new(TracingSurface::new(None)));

    info!(
        viewport_width = config.viewport.width,
        viewport_height = config.viewport.height,
        document_width = config.document.width,
        document_height = config.document.height,
        tick_ms = config.controller.motion.tick_interval_ms,
        "touchcanvas reading events from stdin"
    );

    let (handle, task) = services::controller::spawn_controller_task(controller, config.event_queue_capacity);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let forwarded = reader::pump(stdin, &handle).await?;
    let last = handle.snapshot().await?;
    drop(handle);

    let controller = task.await.map_err(|e| HostError::Io(std::io::Error::other(e)))?;
    info!(
        forwarded,
        x = controller.offset().x,
        y = controller.offset().y,
        zoom = last.zoom,
        "input closed; touchcanvas stopped"
    );
    Ok(())
}
