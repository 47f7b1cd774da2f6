use crate::codec::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use crate::coord::Coordinate;
use geo_types::{Coord, Point, Rect};

/// The rectangular region denoted by a decoded plus code.
///
/// Bounds are in degrees. `code_length` counts significant digits only;
/// the separator and any padding are excluded.
///
/// # Example
///
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("7FG49Q00+")?;
/// assert_eq!(area.code_length, 6);
/// assert!(area.contains(&(20.375, 2.775)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeArea {
    /// Southern latitude bound.
    pub lat_lo: f64,
    /// Western longitude bound.
    pub lng_lo: f64,
    /// Northern latitude bound.
    pub lat_hi: f64,
    /// Eastern longitude bound.
    pub lng_hi: f64,
    /// Number of significant digits in the code.
    pub code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(
        lat_lo: f64,
        lng_lo: f64,
        lat_hi: f64,
        lng_hi: f64,
        code_length: usize,
    ) -> Self {
        Self {
            lat_lo,
            lng_lo,
            lat_hi,
            lng_hi,
            code_length,
        }
    }

    /// Latitude of the cell centre, capped at the pole.
    pub fn lat_center(&self) -> f64 {
        (self.lat_lo + (self.lat_hi - self.lat_lo) / 2.0).min(LATITUDE_MAX)
    }

    /// Longitude of the cell centre, capped at the antimeridian.
    pub fn lng_center(&self) -> f64 {
        (self.lng_lo + (self.lng_hi - self.lng_lo) / 2.0).min(LONGITUDE_MAX)
    }

    /// Centre of the cell as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.lng_center(), self.lat_center())
    }

    /// Cell height in degrees.
    pub fn height(&self) -> f64 {
        self.lat_hi - self.lat_lo
    }

    /// Cell width in degrees.
    pub fn width(&self) -> f64 {
        self.lng_hi - self.lng_lo
    }

    /// The cell as a rectangle (x = longitude, y = latitude), suitable for
    /// spatial operations or GeoJSON/WKT export.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.lng_lo,
                y: self.lat_lo,
            },
            Coord {
                x: self.lng_hi,
                y: self.lat_hi,
            },
        )
    }

    /// Whether the location falls inside the cell, boundary included.
    pub fn contains(&self, location: &impl Coordinate) -> bool {
        let lat = location.lat();
        let lng = location.lng();
        self.lat_lo <= lat && lat <= self.lat_hi && self.lng_lo <= lng && lng <= self.lng_hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let area = CodeArea::new(20.35, 2.75, 20.4, 2.8, 6);
        assert!((area.lat_center() - 20.375).abs() < 1e-12);
        assert!((area.lng_center() - 2.775).abs() < 1e-12);

        let point = area.center();
        assert!((point.x() - 2.775).abs() < 1e-12);
        assert!((point.y() - 20.375).abs() < 1e-12);
    }

    #[test]
    fn test_center_capped_at_pole() {
        let area = CodeArea::new(89.95, 0.0, 90.05, 0.05, 4);
        assert_eq!(area.lat_center(), 90.0);
    }

    #[test]
    fn test_dimensions() {
        let area = CodeArea::new(20.35, 2.75, 20.4, 2.8, 6);
        assert!((area.height() - 0.05).abs() < 1e-12);
        assert!((area.width() - 0.05).abs() < 1e-12);

        let rect = area.to_rect();
        assert!((rect.min().x - 2.75).abs() < 1e-12);
        assert!((rect.max().y - 20.4).abs() < 1e-12);
    }

    #[test]
    fn test_contains() {
        let area = CodeArea::new(20.35, 2.75, 20.4, 2.8, 6);
        assert!(area.contains(&(20.375, 2.775)));
        assert!(area.contains(&(20.35, 2.75)));
        assert!(area.contains(&(20.4, 2.8)));
        assert!(!area.contains(&(20.41, 2.775)));
        assert!(!area.contains(&(20.375, 2.71)));
    }
}
