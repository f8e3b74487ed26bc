use std::path::PathBuf;

use zplkit::{init_logging, DesignerController, PrintDensity, SettingsStore, BUILD_DATE, VERSION};

const VIEWPORT_WIDTH: f64 = 1200.0;
const VIEWPORT_HEIGHT: f64 = 800.0;

fn open_store(path: Option<PathBuf>) -> SettingsStore {
    let opened = match path {
        Some(path) => SettingsStore::open(path),
        None => SettingsStore::open_default(),
    };
    match opened {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("Falling back to default settings: {}", e);
            SettingsStore::in_memory()
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("ZPLKit {} (built {})", VERSION, BUILD_DATE);

    let store = open_store(std::env::args_os().nth(1).map(PathBuf::from));
    if let Some(path) = store.path() {
        tracing::info!("Settings: {}", path.display());
    }

    let mut designer = DesignerController::new(store, VIEWPORT_WIDTH, VIEWPORT_HEIGHT)?;
    let scale = designer.fit_to_view();

    let canvas = designer.canvas();
    let space = canvas.space();
    tracing::info!(
        "Label {:.1}x{:.1} mm at {} dpi ({}), {} grid lines, fit scale {:.3}",
        space.width_mm(),
        space.height_mm(),
        space.dpi(),
        PrintDensity::from_dpi(space.dpi()),
        canvas.grid().line_handles().len(),
        scale
    );
    for tick in designer.horizontal_ruler().lock().ticks().iter().filter(|t| t.major) {
        tracing::debug!(
            "Ruler {} at {} px",
            tick.label.as_deref().unwrap_or_default(),
            tick.position_px
        );
    }

    designer.shutdown()?;
    Ok(())
}
