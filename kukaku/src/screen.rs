use crate::core::Size;

/// Source of the physical resolution of the display hosting the editor.
pub trait ScreenInfo {
    /// `None` when no display can be resolved yet.
    fn resolution(&self) -> Option<Size>;
}

/// A screen whose resolution is known up front, e.g. from settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedScreen(pub Option<Size>);

impl ScreenInfo for FixedScreen {
    fn resolution(&self) -> Option<Size> {
        self.0
    }
}

pub fn designed_for_label(screen: Option<Size>) -> String {
    match screen {
        Some(size) => format!("Designed for {} x {}", size.width, size.height),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(
            designed_for_label(Some(Size::new(3840, 2160))),
            "Designed for 3840 x 2160"
        );
        assert_eq!(designed_for_label(None), "");
    }

    #[test]
    fn test_fixed_screen() {
        assert_eq!(FixedScreen(None).resolution(), None);
        let size = Size::new(1920, 1200);
        assert_eq!(FixedScreen(Some(size)).resolution(), Some(size));
    }
}
