//! Seat layout geometry
//!
//! Pure coordinate arithmetic over the sections/seats the backend serves.
//! The shell owns rendering; this module answers "where does this seat
//! draw", "which seat was clicked", and "what delta did this drag
//! produce". Drag deltas are reported, never applied locally.

use crate::status::{BadgeColor, StatusMeta};
use shared::models::{Seat, SeatSection};
use std::collections::HashSet;

/// Unscaled click radius around a seat center
pub const SEAT_HIT_RADIUS: f32 = 12.0;

/// Draw instructions for one seat
#[derive(Debug, Clone, PartialEq)]
pub struct SeatGlyph {
    pub seat_id: i64,
    pub label: String,
    /// Scaled absolute position
    pub x: f32,
    pub y: f32,
    pub color: BadgeColor,
    pub selected: bool,
}

/// A resolved click on a seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatHit {
    pub section_id: i64,
    pub seat_id: i64,
    pub label: String,
}

/// A section drag reported back to the caller in unscaled units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    pub section_id: i64,
    pub dx: f32,
    pub dy: f32,
}

/// Scaled absolute position of a seat within its section
pub fn seat_position(section: &SeatSection, seat: &Seat, zoom: f32) -> (f32, f32) {
    (
        (section.offset_x + seat.position_x) * zoom,
        (section.offset_y + seat.position_y) * zoom,
    )
}

/// Produce draw instructions for every seat in a section
///
/// The "selected" highlight is derived from the caller's label set; the
/// layout itself holds no selection state.
pub fn seat_glyphs(section: &SeatSection, zoom: f32, selected: &HashSet<String>) -> Vec<SeatGlyph> {
    section
        .seats
        .iter()
        .map(|seat| {
            let (x, y) = seat_position(section, seat, zoom);
            SeatGlyph {
                seat_id: seat.id,
                label: seat.label.clone(),
                x,
                y,
                color: seat.occupant_status.badge_color(),
                selected: selected.contains(&seat.label),
            }
        })
        .collect()
}

/// Resolve a click at scaled coordinates to the nearest seat within the
/// hit radius, if any
pub fn hit_test(sections: &[SeatSection], zoom: f32, x: f32, y: f32) -> Option<SeatHit> {
    let radius = SEAT_HIT_RADIUS * zoom;
    let mut best: Option<(f32, SeatHit)> = None;

    for section in sections {
        for seat in &section.seats {
            let (sx, sy) = seat_position(section, seat, zoom);
            let distance = ((sx - x).powi(2) + (sy - y).powi(2)).sqrt();
            if distance > radius {
                continue;
            }
            if best.as_ref().is_none_or(|(d, _)| distance < *d) {
                best = Some((
                    distance,
                    SeatHit {
                        section_id: section.id,
                        seat_id: seat.id,
                        label: seat.label.clone(),
                    },
                ));
            }
        }
    }
    best.map(|(_, hit)| hit)
}

/// Convert a drag from scaled screen coordinates back to unscaled units
pub fn drag_delta(
    section_id: i64,
    from: (f32, f32),
    to: (f32, f32),
    zoom: f32,
) -> DragDelta {
    DragDelta {
        section_id,
        dx: (to.0 - from.0) / zoom,
        dy: (to.1 - from.1) / zoom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OccupantStatus, SectionKind};

    fn section() -> SeatSection {
        SeatSection {
            id: 1,
            label: "T1".to_string(),
            kind: SectionKind::Table,
            offset_x: 100.0,
            offset_y: 50.0,
            seats: vec![
                Seat {
                    id: 11,
                    label: "T1-1".to_string(),
                    position_x: 0.0,
                    position_y: 0.0,
                    capacity: 1,
                    occupant_status: OccupantStatus::Free,
                },
                Seat {
                    id: 12,
                    label: "T1-2".to_string(),
                    position_x: 40.0,
                    position_y: 0.0,
                    capacity: 1,
                    occupant_status: OccupantStatus::Occupied,
                },
            ],
        }
    }

    #[test]
    fn test_positions_scale_with_zoom() {
        let section = section();
        assert_eq!(seat_position(&section, &section.seats[1], 1.0), (140.0, 50.0));
        assert_eq!(seat_position(&section, &section.seats[1], 2.0), (280.0, 100.0));
    }

    #[test]
    fn test_glyph_colors_follow_occupancy() {
        let glyphs = seat_glyphs(&section(), 1.0, &HashSet::new());
        assert_eq!(glyphs[0].color, BadgeColor::Green);
        assert_eq!(glyphs[1].color, BadgeColor::Red);
    }

    #[test]
    fn test_selection_from_caller_set() {
        let selected: HashSet<String> = ["T1-2".to_string()].into();
        let glyphs = seat_glyphs(&section(), 1.0, &selected);
        assert!(!glyphs[0].selected);
        assert!(glyphs[1].selected);
    }

    #[test]
    fn test_hit_test_picks_nearest_within_radius() {
        let sections = vec![section()];
        let hit = hit_test(&sections, 1.0, 138.0, 51.0).unwrap();
        assert_eq!(hit.seat_id, 12);
        assert!(hit_test(&sections, 1.0, 500.0, 500.0).is_none());
    }

    #[test]
    fn test_drag_delta_unscales() {
        let delta = drag_delta(1, (10.0, 10.0), (30.0, 50.0), 2.0);
        assert_eq!(delta.dx, 10.0);
        assert_eq!(delta.dy, 20.0);
    }
}
