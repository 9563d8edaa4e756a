pub mod guid;
pub mod layout;

pub use guid::{format_guid, parse_guid};
pub use layout::{CanvasInfo, LayoutDocument, SchemaError, ZoneGeometry, CANVAS_TYPE};
