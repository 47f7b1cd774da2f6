use crate::codec::constants::{
    CODE_PRECISION_NORMAL, LATITUDE_MAX, MIN_TRIMMABLE_CODE_LENGTH, PADDING_CHARACTER,
    PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
use crate::codec::{decode, encode};
use crate::coord::{clip_latitude, normalize_longitude, Coordinate};
use crate::error::OlcError;
use crate::validate::{is_full, is_short};

/// Removes leading digits from a full code, relative to a nearby reference
/// location.
///
/// The more of the trailing digits a reference location pins down on its
/// own, the more leading digits can go: 4, 6 or 8 of them, depending on
/// how close the reference is to the code's centre. A reference too far
/// away returns the code unchanged.
///
/// # Example
///
/// ```
/// use olc_rs::shorten;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let short = shorten("9C3W9QCJ+2VX", &(51.3708675, -1.217765625))?;
/// assert_eq!(short, "CJ+2VX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`OlcError::InvalidCode`] - not a valid full code
/// - [`OlcError::CannotShortenPadded`] - the code contains padding
/// - [`OlcError::CodeTooShort`] - fewer than 6 digits
pub fn shorten(code: &str, reference: &impl Coordinate) -> Result<String, OlcError> {
    if !is_full(code) {
        return Err(OlcError::InvalidCode(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(OlcError::CannotShortenPadded(code.to_string()));
    }
    let code = code.to_uppercase();
    let code_area = decode(&code)?;
    if code_area.code_length < MIN_TRIMMABLE_CODE_LENGTH {
        return Err(OlcError::CodeTooShort(code_area.code_length));
    }

    let latitude = clip_latitude(reference.lat());
    let longitude = normalize_longitude(reference.lng());
    let range = (code_area.lat_center() - latitude)
        .abs()
        .max((code_area.lng_center() - longitude).abs());

    // Trim as many leading pairs as the reference distance allows. The 0.3
    // factor, rather than 0.5, keeps references near a cell edge from
    // recovering into a neighbouring prefix.
    for i in (1..=PAIR_RESOLUTIONS.len() - 2).rev() {
        if range < PAIR_RESOLUTIONS[i] * 0.3 {
            return Ok(code[(i + 1) * 2..].to_string());
        }
    }
    Ok(code)
}

/// Recovers the full code nearest to a reference location from a short
/// code.
///
/// The missing leading digits are taken from the reference location, and
/// the result is moved by one cell when the naive candidate ends up more
/// than half a cell away from the reference. A full code is returned
/// unchanged apart from case.
///
/// # Example
///
/// ```
/// use olc_rs::recover_nearest;
///
/// # fn main() -> Result<(), olc_rs::OlcError> {
/// let full = recover_nearest("CJ+2VX", &(51.3708675, -1.217765625))?;
/// assert_eq!(full, "9C3W9QCJ+2VX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`OlcError::InvalidCode`] if the string is neither a short nor a full
/// code.
pub fn recover_nearest(
    short_code: &str,
    reference: &impl Coordinate,
) -> Result<String, OlcError> {
    if !is_short(short_code) {
        if is_full(short_code) {
            return Ok(short_code.to_uppercase());
        }
        return Err(OlcError::InvalidCode(short_code.to_string()));
    }

    let reference_latitude = clip_latitude(reference.lat());
    let reference_longitude = normalize_longitude(reference.lng());
    let short_code = short_code.to_uppercase();

    let separator = match short_code.find(SEPARATOR) {
        Some(index) => index,
        None => return Err(OlcError::InvalidCode(short_code)),
    };
    let padding_length = SEPARATOR_POSITION - separator;
    // Height and width in degrees of the area the trimmed digits spanned.
    let resolution = 20f64.powf(2.0 - padding_length as f64 / 2.0);
    let half_resolution = resolution / 2.0;

    // Pad the short code with digits taken from the reference location and
    // decode the resulting candidate.
    let prefix = encode(
        &(reference_latitude, reference_longitude),
        CODE_PRECISION_NORMAL,
    )?;
    let candidate = format!("{}{}", &prefix[..padding_length], short_code);
    let code_area = decode(&candidate)?;

    let mut latitude = code_area.lat_center();
    let mut longitude = code_area.lng_center();

    // When the candidate centre is more than half a cell from the
    // reference, the matching cell one step over is closer. Latitude steps
    // must not cross the poles; longitude wraps on re-encoding.
    if reference_latitude + half_resolution < latitude && latitude - resolution >= -LATITUDE_MAX {
        latitude -= resolution;
    } else if reference_latitude - half_resolution > latitude
        && latitude + resolution <= LATITUDE_MAX
    {
        latitude += resolution;
    }
    if reference_longitude + half_resolution < longitude {
        longitude -= resolution;
    } else if reference_longitude - half_resolution > longitude {
        longitude += resolution;
    }

    encode(&(latitude, longitude), code_area.code_length)
}
