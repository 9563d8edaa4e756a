pub mod core;
pub mod error;
pub mod event;
pub mod persist;
pub mod screen;
pub mod settings;

pub use crate::core::{CanvasLayout, LayoutModel, LayoutType, Size, StoredLayout, ZoneRect};
pub use error::{LayoutError, PersistError};
pub use event::LayoutEvent;
pub use persist::{Notifier, StderrNotifier};
pub use screen::{FixedScreen, ScreenInfo};
pub use settings::Settings;
