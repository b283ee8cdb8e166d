//! Geographic positions and the textual pair format.
//!
//! A [`Position`] is the typed coordinate the picker works with. The store
//! only ever sees the formatted string, produced by [`Position::format_pair`]:
//! two decimal numbers joined by comma-space, with whatever precision the
//! `f64` default formatting yields.

use std::{fmt, str::FromStr};

use crate::error::ParsePositionError;

/// Latitude clamp for cursor movement and map display.
///
/// Web-mercator style maps degenerate near the poles; the picker never lets
/// the cursor past this line.
pub const MAX_DISPLAY_LAT: f64 = 85.0;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Latitude in decimal degrees, north positive.
    pub lat: f64,
    /// Longitude in decimal degrees, east positive.
    pub lon: f64,
}

impl Position {
    /// Create a position from decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Format as the shared `"<lat>, <lon>"` pair.
    ///
    /// This is the exact value written into the
    /// [`crate::LocationStore`]; no rounding or padding is applied.
    pub fn format_pair(&self) -> String {
        format!("{}, {}", self.lat, self.lon)
    }

    /// Clamp latitude to the displayable band and wrap longitude into
    /// `[-180, 180)`.
    ///
    /// Used for cursor movement so panning east past the antimeridian
    /// continues on the other side while panning north stops at the edge of
    /// the map.
    pub fn normalized(self) -> Self {
        Self {
            lat: self.lat.clamp(-MAX_DISPLAY_LAT, MAX_DISPLAY_LAT),
            lon: wrap_longitude(self.lon),
        }
    }

    /// Offset by the given deltas and normalize the result.
    pub fn offset(self, dlat: f64, dlon: f64) -> Self {
        Self { lat: self.lat + dlat, lon: self.lon + dlon }.normalized()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parse `"<lat>,<lon>"` (whitespace around either component ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| ParsePositionError::MissingSeparator(s.to_string()))?;
        let lat = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParsePositionError::InvalidLatitude(lat_str.trim().to_string()))?;
        let lon = lon_str
            .trim()
            .parse::<f64>()
            .map_err(|_| ParsePositionError::InvalidLongitude(lon_str.trim().to_string()))?;
        Ok(Self { lat, lon })
    }
}

/// Wrap a longitude into `[-180, 180)`.
fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pair_matches_display() {
        let pos = Position::new(37.422, -122.0841);
        assert_eq!(pos.format_pair(), "37.422, -122.0841");
        assert_eq!(pos.to_string(), pos.format_pair());
    }

    #[test]
    fn format_pair_keeps_integral_values_short() {
        assert_eq!(Position::new(0.0, 10.0).format_pair(), "0, 10");
    }

    #[test]
    fn parse_round_trips() {
        let pos: Position = "37.422, -122.0841".parse().unwrap();
        assert_eq!(pos, Position::new(37.422, -122.0841));
    }

    #[test]
    fn parse_without_space() {
        let pos: Position = "1.5,-2.5".parse().unwrap();
        assert_eq!(pos, Position::new(1.5, -2.5));
    }

    #[test]
    fn parse_missing_separator() {
        let err = "37.422".parse::<Position>().unwrap_err();
        assert!(matches!(err, ParsePositionError::MissingSeparator(_)));
    }

    #[test]
    fn parse_bad_components() {
        assert!(matches!(
            "north, 0".parse::<Position>(),
            Err(ParsePositionError::InvalidLatitude(_))
        ));
        assert!(matches!(
            "0, east".parse::<Position>(),
            Err(ParsePositionError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn normalized_clamps_latitude() {
        assert_eq!(Position::new(90.0, 0.0).normalized().lat, MAX_DISPLAY_LAT);
        assert_eq!(Position::new(-90.0, 0.0).normalized().lat, -MAX_DISPLAY_LAT);
    }

    #[test]
    fn normalized_wraps_longitude() {
        assert_eq!(Position::new(0.0, 190.0).normalized().lon, -170.0);
        assert_eq!(Position::new(0.0, -190.0).normalized().lon, 170.0);
        assert_eq!(Position::new(0.0, 170.0).normalized().lon, 170.0);
    }

    #[test]
    fn offset_moves_and_normalizes() {
        let pos = Position::new(84.0, 179.0).offset(5.0, 2.0);
        assert_eq!(pos.lat, MAX_DISPLAY_LAT);
        assert_eq!(pos.lon, -179.0);
    }
}
