use std::sync::mpsc;
use uuid::Uuid;

use super::{scale, Size, ZoneRect};
use crate::error::{LayoutError, Result};
use crate::event::{LayoutEvent, Observers};
use crate::persist::{self, Notifier};
use crate::screen::{designed_for_label, ScreenInfo};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutType {
    Blank,
    Grid,
    Canvas,
}

impl LayoutType {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutType::Blank => "blank",
            LayoutType::Grid => "grid",
            LayoutType::Canvas => "canvas",
        }
    }
}

/// What every layout kind offers to the editor.
pub trait LayoutModel {
    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
    fn layout_type(&self) -> LayoutType;
    /// Human readable "designed for" description, empty when unknown.
    fn screen_info(&self) -> String;
    /// A fresh copy for editing, with a new id and no history.
    fn duplicate(&self, work_area: Size) -> Self
    where
        Self: Sized;
    /// Best-effort save. Failures are reported through `notifier`.
    fn persist(&self, settings: &Settings, screen: &dyn ScreenInfo, notifier: &dyn Notifier)
        -> bool;
}

/// A layout as it was read from storage, before it is fitted to the
/// current work area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLayout {
    pub id: Uuid,
    pub name: String,
    pub zones: Vec<ZoneRect>,
    pub work_area: Size,
    pub design_screen: Option<Size>,
}

/// Free-form layout made of independent zone rectangles.
#[derive(Debug)]
pub struct CanvasLayout {
    id: Uuid,
    name: String,
    zones: Vec<ZoneRect>,
    reference_work_area: Size,
    design_screen: Option<Size>,
    is_scaled: bool,
    is_modified: bool,
    observers: Observers,
}

impl CanvasLayout {
    /// A blank layout authored against `work_area`.
    pub fn new(name: impl Into<String>, work_area: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            zones: Vec::new(),
            reference_work_area: work_area,
            design_screen: None,
            is_scaled: false,
            is_modified: false,
            observers: Observers::default(),
        }
    }

    /// Rebuilds a stored layout for the `current` work area, rescaling its
    /// zones when the work area changed size but kept its orientation.
    pub fn restore(stored: StoredLayout, current: Size) -> Self {
        let StoredLayout {
            id,
            name,
            zones,
            work_area,
            design_screen,
        } = stored;

        let mut layout = Self {
            id,
            name,
            zones: Vec::new(),
            reference_work_area: work_area,
            design_screen,
            is_scaled: false,
            is_modified: false,
            observers: Observers::default(),
        };

        if scale::should_scale(work_area, current) {
            layout.zones = scale::scale_zones(&zones, work_area, current);
            // Scaled geometry is a different layout as far as the engine is concerned.
            layout.id = Uuid::new_v4();
            layout.reference_work_area = current;
            layout.is_scaled = true;
            tracing::info!(
                "Layout '{}' scaled from {} to {}: {} -> {}",
                layout.name,
                work_area,
                current,
                id,
                layout.id
            );
        } else {
            layout.zones = zones;
        }

        layout
    }

    pub fn zones(&self) -> &[ZoneRect] {
        &self.zones
    }

    pub fn reference_work_area(&self) -> Size {
        self.reference_work_area
    }

    pub fn design_screen(&self) -> Option<Size> {
        self.design_screen
    }

    pub fn is_scaled(&self) -> bool {
        self.is_scaled
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<LayoutEvent> {
        self.observers.subscribe()
    }

    pub fn add_zone(&mut self, zone: ZoneRect) {
        self.zones.push(zone);
        tracing::debug!("Zone added to '{}': {:?}", self.name, zone);
        self.update_layout();
    }

    pub fn remove_zone_at(&mut self, index: usize) -> Result<ZoneRect> {
        if index >= self.zones.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.zones.len(),
            });
        }
        let zone = self.zones.remove(index);
        tracing::debug!("Zone {} removed from '{}': {:?}", index, self.name, zone);
        self.update_layout();
        Ok(zone)
    }

    /// Replaces `target`'s zones with a copy of this layout's zones. Nothing
    /// else on `target` changes.
    pub fn restore_to(&self, target: &mut CanvasLayout) {
        target.zones.clear();
        target.zones.extend_from_slice(&self.zones);
    }

    fn update_layout(&mut self) {
        self.is_modified = true;
        self.observers.notify(LayoutEvent::ZonesChanged {
            layout_id: self.id,
            zone_count: self.zones.len(),
        });
    }
}

impl LayoutModel for CanvasLayout {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn layout_type(&self) -> LayoutType {
        LayoutType::Canvas
    }

    fn screen_info(&self) -> String {
        designed_for_label(self.design_screen)
    }

    fn duplicate(&self, work_area: Size) -> Self {
        let mut layout = CanvasLayout::new(self.name.clone(), work_area);
        layout.zones = self.zones.clone();
        layout
    }

    fn persist(
        &self,
        settings: &Settings,
        screen: &dyn ScreenInfo,
        notifier: &dyn Notifier,
    ) -> bool {
        persist::persist_layout(self, settings, screen, notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(zones: Vec<ZoneRect>, work_area: Size) -> StoredLayout {
        StoredLayout {
            id: Uuid::new_v4(),
            name: "Halves".to_string(),
            zones,
            work_area,
            design_screen: Some(Size::new(1920, 1080)),
        }
    }

    fn halves() -> Vec<ZoneRect> {
        vec![
            ZoneRect::new(0, 0, 960, 1080),
            ZoneRect::new(960, 0, 960, 1080),
        ]
    }

    #[test]
    fn test_new_layout_is_empty() {
        let layout = CanvasLayout::new("Fresh", Size::new(1920, 1080));
        assert!(layout.zones().is_empty());
        assert!(!layout.is_modified());
        assert!(!layout.is_scaled());
        assert_eq!(layout.reference_work_area(), Size::new(1920, 1080));
        assert_eq!(layout.screen_info(), "");
    }

    #[test]
    fn test_restore_on_same_work_area_keeps_id_and_zones() {
        let input = stored(halves(), Size::new(1920, 1080));
        let id = input.id;
        let layout = CanvasLayout::restore(input, Size::new(1920, 1080));

        assert_eq!(layout.id(), id);
        assert_eq!(layout.zones(), halves().as_slice());
        assert!(!layout.is_scaled());
        assert_eq!(layout.reference_work_area(), Size::new(1920, 1080));
        assert_eq!(layout.screen_info(), "Designed for 1920 x 1080");
    }

    #[test]
    fn test_restore_rescales_to_larger_landscape() {
        let input = stored(vec![ZoneRect::new(0, 0, 960, 1080)], Size::new(1920, 1080));
        let id = input.id;
        let layout = CanvasLayout::restore(input, Size::new(2560, 1440));

        assert_eq!(layout.zones(), &[ZoneRect::new(0, 0, 1280, 1440)]);
        assert_ne!(layout.id(), id);
        assert!(layout.is_scaled());
        assert!(!layout.is_modified());
        assert_eq!(layout.reference_work_area(), Size::new(2560, 1440));
        assert_eq!(layout.design_screen(), Some(Size::new(1920, 1080)));
    }

    #[test]
    fn test_restore_does_not_rescale_on_rotation() {
        let input = stored(halves(), Size::new(1920, 1080));
        let id = input.id;
        let layout = CanvasLayout::restore(input, Size::new(1080, 1920));

        assert_eq!(layout.id(), id);
        assert_eq!(layout.zones(), halves().as_slice());
        assert!(!layout.is_scaled());
        assert_eq!(layout.reference_work_area(), Size::new(1920, 1080));
    }

    #[test]
    fn test_add_zone_marks_modified_and_notifies() {
        let mut layout = CanvasLayout::new("Fresh", Size::new(1920, 1080));
        let events = layout.subscribe();

        layout.add_zone(ZoneRect::new(0, 0, 100, 100));
        layout.add_zone(ZoneRect::new(50, 50, 100, 100));

        assert!(layout.is_modified());
        assert_eq!(layout.zones().len(), 2);
        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(
            received.last(),
            Some(&LayoutEvent::ZonesChanged {
                layout_id: layout.id(),
                zone_count: 2,
            })
        );
        assert_eq!(received.len(), 2);
    }

    #[test]
    fn test_remove_zone_at() {
        let mut layout = CanvasLayout::restore(
            stored(halves(), Size::new(1920, 1080)),
            Size::new(1920, 1080),
        );
        let events = layout.subscribe();

        let removed = layout.remove_zone_at(0).unwrap();

        assert_eq!(removed, ZoneRect::new(0, 0, 960, 1080));
        assert_eq!(layout.zones(), &[ZoneRect::new(960, 0, 960, 1080)]);
        assert!(layout.is_modified());
        assert!(events.try_recv().is_ok());
    }

    #[test]
    fn test_remove_out_of_range_leaves_zones_unchanged() {
        let mut empty = CanvasLayout::new("Empty", Size::new(1920, 1080));
        let err = empty.remove_zone_at(0).unwrap_err();
        assert!(matches!(err, LayoutError::IndexOutOfRange { index: 0, len: 0 }));
        assert!(!empty.is_modified());

        let mut layout = CanvasLayout::restore(
            stored(halves(), Size::new(1920, 1080)),
            Size::new(1920, 1080),
        );
        let err = layout.remove_zone_at(2).unwrap_err();
        assert!(matches!(err, LayoutError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(layout.zones(), halves().as_slice());
    }

    #[test]
    fn test_modified_stays_set() {
        let mut layout = CanvasLayout::new("Fresh", Size::new(1920, 1080));
        layout.add_zone(ZoneRect::new(0, 0, 10, 10));
        layout.remove_zone_at(0).unwrap();
        assert!(layout.zones().is_empty());
        assert!(layout.is_modified());
        let _ = layout.remove_zone_at(0);
        assert!(layout.is_modified());
    }

    #[test]
    fn test_duplicate_is_fresh_and_independent() {
        let mut original =
            CanvasLayout::restore(stored(halves(), Size::new(1920, 1080)), Size::new(2560, 1440));
        original.add_zone(ZoneRect::new(1, 2, 3, 4));

        let mut copy = original.duplicate(Size::new(1280, 720));

        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.name(), original.name());
        assert_eq!(copy.zones(), original.zones());
        assert!(!copy.is_modified());
        assert!(!copy.is_scaled());
        assert_eq!(copy.design_screen(), None);
        assert_eq!(copy.reference_work_area(), Size::new(1280, 720));

        copy.add_zone(ZoneRect::new(9, 9, 9, 9));
        assert_eq!(original.zones().len(), 3);
        original.remove_zone_at(0).unwrap();
        assert_eq!(copy.zones().len(), 4);
    }

    #[test]
    fn test_restore_to_copies_only_zones() {
        let mut target = CanvasLayout::restore(
            stored(halves(), Size::new(1920, 1080)),
            Size::new(1920, 1080),
        );
        let target_id = target.id();
        let mut edited = target.duplicate(Size::new(1920, 1080));
        edited.remove_zone_at(1).unwrap();
        edited.add_zone(ZoneRect::new(0, 540, 1920, 540));

        edited.restore_to(&mut target);

        assert_eq!(
            target.zones(),
            &[ZoneRect::new(0, 0, 960, 1080), ZoneRect::new(0, 540, 1920, 540)]
        );
        assert_eq!(target.id(), target_id);
        assert!(!target.is_modified());
        assert_eq!(target.design_screen(), Some(Size::new(1920, 1080)));

        edited.add_zone(ZoneRect::new(5, 5, 5, 5));
        assert_eq!(target.zones().len(), 2);
    }
}
