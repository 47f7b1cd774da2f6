use crate::codec::constants::{
    GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES, LATITUDE_MAX, LONGITUDE_MAX, PAIR_CODE_LENGTH,
    PAIR_RESOLUTIONS,
};
use crate::error::OlcError;
use geo_types::Point;

/// Trait for types that can provide a latitude/longitude position.
///
/// Implemented for `(f64, f64)` tuples, read as `(latitude, longitude)`,
/// and for `geo_types::Point<f64>`, read as x = longitude, y = latitude.
/// This allows functions to accept either type.
pub trait Coordinate {
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
    /// Returns the longitude in degrees.
    fn lng(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lng(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}

/// Clips a latitude into the range -90 to 90 degrees.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.max(-LATITUDE_MAX).min(LATITUDE_MAX)
}

/// Wraps a longitude into the range [-180, 180). The result is never
/// exactly 180.
pub fn normalize_longitude(longitude: f64) -> f64 {
    // A non-finite value would never leave the loops.
    if !longitude.is_finite() {
        return longitude;
    }
    let mut longitude = longitude;
    while longitude < -LONGITUDE_MAX {
        longitude += 2.0 * LONGITUDE_MAX;
    }
    while longitude >= LONGITUDE_MAX {
        longitude -= 2.0 * LONGITUDE_MAX;
    }
    longitude
}

/// Cell height in degrees for a code of the given length.
///
/// A reading at exactly 90 degrees latitude is moved south by this amount
/// before encoding so that the code decodes to a cell that still touches
/// the pole.
pub(crate) fn latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        20f64.powf((code_length as f64 / -2.0 + 2.0).floor())
    } else {
        20f64.powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
    }
}

/// Returns the (latitude, longitude) cell size in degrees for a code of
/// the given length.
///
/// Lengths follow the encoding rules: even values from 2 to 10, or any
/// value of 11 and above.
pub fn resolution_for_length(code_length: usize) -> Result<(f64, f64), OlcError> {
    if code_length < 2 || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(OlcError::InvalidCodeLength(code_length));
    }
    if code_length <= PAIR_CODE_LENGTH {
        let resolution = PAIR_RESOLUTIONS[code_length / 2 - 1];
        Ok((resolution, resolution))
    } else {
        let refinements = (code_length - PAIR_CODE_LENGTH) as i32;
        Ok((
            GRID_SIZE_DEGREES / (GRID_ROWS as f64).powi(refinements),
            GRID_SIZE_DEGREES / (GRID_COLUMNS as f64).powi(refinements),
        ))
    }
}
