mod layout;
mod rect;
pub mod scale;

pub use layout::{CanvasLayout, LayoutModel, LayoutType, StoredLayout};
pub use rect::{Size, ZoneRect};
