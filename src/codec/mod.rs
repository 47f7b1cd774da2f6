pub mod constants;
mod grid;
mod pair;

use crate::area::CodeArea;
use crate::coord::{clip_latitude, latitude_precision, normalize_longitude, Coordinate};
use crate::error::OlcError;
use crate::validate::is_full;
use constants::{digit_value, LATITUDE_MAX, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR};

/// Encodes a location into a plus code with the requested number of
/// digits.
///
/// Legal lengths are even values from 2 to 10, or any value of 11 and
/// above; the default precision of 10 digits identifies an area of
/// roughly 14x14 meters. Latitudes outside -90 to 90 are clipped and
/// longitudes are wrapped into -180 to 180.
///
/// # Example
///
/// ```
/// use olc_rs::encode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// // From a (latitude, longitude) tuple
/// assert_eq!(encode(&(20.375, 2.775), 6)?, "7FG49Q00+");
/// // From a point (x = longitude, y = latitude)
/// let point = olc_rs::geo_types::Point::new(8.0000625, 47.0000625);
/// assert_eq!(encode(&point, 11)?, "8FVC2222+22G");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`OlcError::InvalidCodeLength`] if the length is below 2, or odd and
/// below 10.
pub fn encode(location: &impl Coordinate, code_length: usize) -> Result<String, OlcError> {
    if code_length < 2 || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(OlcError::InvalidCodeLength(code_length));
    }

    let mut latitude = clip_latitude(location.lat());
    let longitude = normalize_longitude(location.lng());

    // The pole sits on the upper edge of the last row of cells; nudge it
    // south by one cell so the code decodes to a cell that contains it.
    if latitude == LATITUDE_MAX {
        latitude -= latitude_precision(code_length);
    }

    let mut code = pair::encode_pairs(latitude, longitude, code_length.min(PAIR_CODE_LENGTH));
    if code_length > PAIR_CODE_LENGTH {
        code.push_str(&grid::encode_grid(
            latitude,
            longitude,
            code_length - PAIR_CODE_LENGTH,
        ));
    }
    Ok(code)
}

/// Decodes a full plus code into the area it denotes.
///
/// # Example
///
/// ```
/// use olc_rs::decode;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let area = decode("7FG49Q00+")?;
/// assert!((area.lat_lo - 20.35).abs() < 1e-10);
/// assert!((area.lng_lo - 2.75).abs() < 1e-10);
/// assert_eq!(area.code_length, 6);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`OlcError::InvalidCode`] if the string is not a valid full code.
pub fn decode(code: &str) -> Result<CodeArea, OlcError> {
    if !is_full(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }

    let digits: Vec<usize> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .map(|c| digit_value(c).ok_or_else(|| OlcError::InvalidCode(code.to_string())))
        .collect::<Result<_, _>>()?;

    let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
    let pair_area = pair::decode_pairs(&digits[..pair_digits]);
    if digits.len() <= PAIR_CODE_LENGTH {
        return Ok(pair_area);
    }

    // The grid area is in cell-local coordinates; translate it by the
    // pair area's south-west corner.
    let refined = grid::decode_grid(&digits[PAIR_CODE_LENGTH..]);
    Ok(CodeArea::new(
        pair_area.lat_lo + refined.lat_lo,
        pair_area.lng_lo + refined.lng_lo,
        pair_area.lat_lo + refined.lat_hi,
        pair_area.lng_lo + refined.lng_hi,
        pair_area.code_length + refined.code_length,
    ))
}
