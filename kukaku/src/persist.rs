use kukaku_ipc::{CanvasInfo, LayoutDocument};
use std::fs;
use std::io;
use std::path::Path;

use crate::core::{CanvasLayout, LayoutModel, Size, StoredLayout, ZoneRect};
use crate::error::{PersistError, Result};
use crate::screen::ScreenInfo;
use crate::settings::Settings;

pub const PERSIST_ERROR_TITLE: &str = "Error persisting canvas layout";

/// Surface for failures the user has to see.
pub trait Notifier {
    fn show_error(&self, title: &str, error: &dyn std::error::Error);
}

/// Reports failures on stderr, for the command line front end.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show_error(&self, title: &str, error: &dyn std::error::Error) {
        eprintln!("{}: {}", title, error);
    }
}

impl CanvasLayout {
    /// The screen size to record as "designed for".
    ///
    /// An edited or rescaled layout takes the live display; otherwise the
    /// previously stored value is kept.
    pub fn persisted_screen(&self, screen: &dyn ScreenInfo) -> Option<Size> {
        if self.is_modified() || self.is_scaled() {
            screen.resolution()
        } else {
            self.design_screen()
        }
    }

    pub fn to_document(&self, screen: &dyn ScreenInfo) -> LayoutDocument {
        let work_area = self.reference_work_area();
        let (screen_width, screen_height) = self
            .persisted_screen(screen)
            .map(|s| (s.width, s.height))
            .unwrap_or((0, 0));

        let info = CanvasInfo {
            ref_width: work_area.width,
            ref_height: work_area.height,
            screen_width,
            screen_height,
            zones: self.zones().iter().map(|&z| z.into()).collect(),
        };

        LayoutDocument::canvas(&self.id(), self.name(), info)
    }
}

/// Overwrites `path` with `doc`, creating missing parent directories.
pub fn write_document(path: &Path, doc: &LayoutDocument) -> std::result::Result<(), PersistError> {
    let json = doc.to_json()?;
    let write = |path: &Path| -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json.as_bytes())
    };
    write(path).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `layout` to the applied layout file. Never fails: errors are
/// logged and handed to `notifier`, and `false` is returned.
pub fn persist_layout(
    layout: &CanvasLayout,
    settings: &Settings,
    screen: &dyn ScreenInfo,
    notifier: &dyn Notifier,
) -> bool {
    let doc = layout.to_document(screen);
    let path = &settings.applied_layout_path;

    match write_document(path, &doc) {
        Ok(()) => {
            tracing::info!(
                "Layout '{}' {} saved to {}",
                doc.name,
                doc.uuid,
                path.display()
            );
            true
        }
        Err(e) => {
            tracing::error!("{}: {}", PERSIST_ERROR_TITLE, e);
            notifier.show_error(PERSIST_ERROR_TITLE, &e);
            false
        }
    }
}

pub fn layout_from_document(doc: LayoutDocument, current: Size) -> Result<CanvasLayout> {
    let id = doc.id()?;
    if doc.info.has_negative_geometry() {
        tracing::warn!(
            "Layout '{}' has negative zone geometry and will be rejected by the engine",
            doc.name
        );
    }

    let stored = StoredLayout {
        id,
        name: doc.name,
        zones: doc.info.zones.iter().map(|&z| ZoneRect::from(z)).collect(),
        work_area: Size::new(doc.info.ref_width, doc.info.ref_height),
        design_screen: doc.info.screen_size().map(|(w, h)| Size::new(w, h)),
    };
    Ok(CanvasLayout::restore(stored, current))
}

/// Reads a persisted layout and fits it to the `current` work area.
pub fn load_layout(path: &Path, current: Size) -> Result<CanvasLayout> {
    let contents = fs::read_to_string(path)?;
    let doc = LayoutDocument::from_json(&contents)?;
    let layout = layout_from_document(doc, current)?;
    tracing::info!(
        "Layout '{}' loaded from {} ({} zones)",
        layout.name(),
        path.display(),
        layout.zones().len()
    );
    Ok(layout)
}

/// Consumes the applied layout file the way the tiling engine does: the file
/// is removed once read, whether or not it parsed.
pub fn take_applied_layout(path: &Path, current: Size) -> Result<Option<CanvasLayout>> {
    if !path.exists() {
        return Ok(None);
    }

    let result = load_layout(path, current);
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!("Failed to remove {}: {}", path.display(), e);
    }
    result.map(Some)
}
