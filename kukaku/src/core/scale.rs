use super::{Size, ZoneRect};

/// Whether zones authored for `last` should be stretched to `current`.
///
/// Only a change in size within the same orientation qualifies. A square
/// work area on either side never does.
pub fn should_scale(last: Size, current: Size) -> bool {
    last != current
        && ((last.is_portrait() && current.is_portrait())
            || (last.is_landscape() && current.is_landscape()))
}

/// Proportionally maps every zone from `last` to `current`, truncating each
/// field toward zero. `last` must have positive dimensions.
pub fn scale_zones(zones: &[ZoneRect], last: Size, current: Size) -> Vec<ZoneRect> {
    let width_factor = current.width as f64 / last.width as f64;
    let height_factor = current.height as f64 / last.height as f64;

    zones
        .iter()
        .map(|zone| ZoneRect {
            x: (zone.x as f64 * width_factor) as i32,
            y: (zone.y as f64 * height_factor) as i32,
            width: (zone.width as f64 * width_factor) as i32,
            height: (zone.height as f64 * height_factor) as i32,
        })
        .collect()
}
