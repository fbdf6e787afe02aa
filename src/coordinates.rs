//! Map grid cells to latitude/longitude labels.
//!
//! Row 0 lies at 60°25'N and column 0 at 21°55'E; every cell spans five
//! arc minutes, latitude decreasing southwards.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::common::Cell;

const ORIGIN_LATITUDE: f64 = 60.0 + 25.0 / 60.0;
const ORIGIN_LONGITUDE: f64 = 21.0 + 55.0 / 60.0;
const CELL_MINUTES: f64 = 5.0;

/// Human-readable position of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Latitude of row `y` in decimal degrees.
pub fn latitude_degrees(y: usize) -> f64 {
    ORIGIN_LATITUDE - (y as f64 * CELL_MINUTES / 60.0)
}

/// Longitude of column `x` in decimal degrees.
pub fn longitude_degrees(x: usize) -> f64 {
    ORIGIN_LONGITUDE + (x as f64 * CELL_MINUTES / 60.0)
}

/// Label for `cell`, e.g. `60°25'N` / `21°55'E` for the top-left corner.
pub fn to_coordinates(cell: Cell) -> Coordinates {
    Coordinates {
        latitude: format_degrees(latitude_degrees(cell.y), 'N'),
        longitude: format_degrees(longitude_degrees(cell.x), 'E'),
    }
}

// Minutes are rounded without carrying into the degrees, so a value just
// below a whole degree prints as 60'.
fn format_degrees(degrees: f64, hemisphere: char) -> String {
    let whole = libm::floor(degrees);
    let minutes = libm::round((degrees % 1.0) * 60.0);
    format!("{}°{}'{}", whole as i64, minutes as i64, hemisphere)
}
