use tokio::sync::watch;

use wakeline::error::AppResult;
use wakeline::scene::{RenderBinder, Scene};

use super::model::UiData;

/// Publishes scenes to the render task through a watch channel.
pub(crate) struct UiBinder {
    tx: watch::Sender<UiData>,
    overlay: UiData,
}

impl UiBinder {
    pub(crate) const fn new(tx: watch::Sender<UiData>, overlay: UiData) -> Self {
        Self { tx, overlay }
    }

    /// Replaces the status/filter part of the next published frame.
    pub(crate) fn set_overlay(&mut self, overlay: UiData) {
        self.overlay = overlay;
    }
}

impl RenderBinder for UiBinder {
    fn bind(&mut self, scene: &Scene) -> AppResult<()> {
        let mut frame = self.overlay.clone();
        frame.scene = Some(scene.clone());
        // The render task may already be gone during shutdown.
        drop(self.tx.send(frame));
        Ok(())
    }
}
