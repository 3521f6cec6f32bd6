//! Heart-rate zone and discipline display metadata.
//!
//! Sessions arrive with time already bucketed into the five HR zones, so
//! there is no zone derivation here - just the shared constants the
//! aggregator indexes by and the colors the presentation layer renders with.

use serde::{Deserialize, Serialize};

/// Number of heart-rate zones (Z1 easiest .. Z5 hardest).
pub const ZONE_COUNT: usize = 5;

/// Zone display labels, in index order.
pub const ZONE_NAMES: [&str; ZONE_COUNT] = ["Z1", "Z2", "Z3", "Z4", "Z5"];

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Heart rate zone colors for the stacked zone chart.
pub const HR_ZONE_COLORS: [Color; ZONE_COUNT] = [
    Color::new(128, 128, 128), // Z1: Gray (Recovery)
    Color::new(0, 128, 255),   // Z2: Blue (Aerobic)
    Color::new(0, 200, 100),   // Z3: Green (Tempo)
    Color::new(255, 200, 0),   // Z4: Yellow (Threshold)
    Color::new(255, 50, 50),   // Z5: Red (Maximum)
];

/// Discipline colors for the weekly hours / TSS bar charts.
pub const DISCIPLINE_COLORS: [Color; 4] = [
    Color::new(0x00, 0x66, 0xFF), // Swim: blue
    Color::new(0x00, 0x00, 0x99), // Bike: navy
    Color::new(0xFF, 0x33, 0xCC), // Run: pink
    Color::new(0x99, 0x99, 0x99), // Other: gray
];
