//! Seating Model (sections and seats for the layout canvas)

use serde::{Deserialize, Serialize};

/// Occupancy status of a single seat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OccupantStatus {
    #[default]
    Free,
    Reserved,
    Occupied,
}

/// Section rendering kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    #[default]
    Table,
    Counter,
}

/// Seat entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub label: String,
    /// Position relative to the owning section, unscaled units
    pub position_x: f32,
    pub position_y: f32,
    pub capacity: i32,
    pub occupant_status: OccupantStatus,
}

impl Seat {
    /// Whether the seat can be picked as a preference
    pub fn is_free(&self) -> bool {
        self.occupant_status == OccupantStatus::Free
    }
}

/// Seat section entity (a table or counter with its seats)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatSection {
    pub id: i64,
    pub label: String,
    pub kind: SectionKind,
    /// Absolute section offset, unscaled units
    pub offset_x: f32,
    pub offset_y: f32,
    pub seats: Vec<Seat>,
}
