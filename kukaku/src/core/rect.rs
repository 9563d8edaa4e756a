use kukaku_ipc::ZoneGeometry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One zone of a layout, in work-area pixels with a top-left origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ZoneRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<ZoneGeometry> for ZoneRect {
    fn from(g: ZoneGeometry) -> Self {
        Self::new(g.x, g.y, g.width, g.height)
    }
}

impl From<ZoneRect> for ZoneGeometry {
    fn from(r: ZoneRect) -> Self {
        ZoneGeometry {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

/// Dimensions of a work area or a whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = String;

    /// Parses `WIDTHxHEIGHT`, e.g. `2560x1440`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = w
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid width: {}", w))?;
        let height = h
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid height: {}", h))?;
        if width <= 0 || height <= 0 {
            return Err(format!("dimensions must be positive: {}", s));
        }
        Ok(Self { width, height })
    }
}
