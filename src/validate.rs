use crate::codec::constants::{
    digit_value, ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR,
    SEPARATOR_POSITION,
};

/// Checks whether the string is a structurally valid plus code, full or
/// short.
///
/// Validation never fails with an error; malformed input is simply not a
/// code.
///
/// # Example
///
/// ```
/// use olc_rs::is_valid;
///
/// assert!(is_valid("8FVC2222+22"));
/// assert!(is_valid("8fvc2222+"));
/// assert!(!is_valid("8FVC2222+2"));
/// assert!(!is_valid("8FVC2222"));
/// ```
pub fn is_valid(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 2 {
        return false;
    }

    // Exactly one separator, at an even index no later than position 8.
    let mut separators = chars.iter().enumerate().filter(|&(_, &c)| c == SEPARATOR);
    let separator = match separators.next() {
        Some((index, _)) => index,
        None => return false,
    };
    if separators.next().is_some() {
        return false;
    }
    if separator > SEPARATOR_POSITION || separator % 2 == 1 {
        return false;
    }

    if let Some(pad) = chars.iter().position(|&c| c == PADDING_CHARACTER) {
        // Short codes cannot be padded.
        if separator < SEPARATOR_POSITION {
            return false;
        }
        // A code cannot start with padding.
        if pad == 0 {
            return false;
        }
        // A single run of even length, and nothing after the separator.
        let run = chars[pad..]
            .iter()
            .take_while(|&&c| c == PADDING_CHARACTER)
            .count();
        if chars[pad + run..].contains(&PADDING_CHARACTER) {
            return false;
        }
        if run % 2 == 1 || run > SEPARATOR_POSITION - 2 {
            return false;
        }
        if chars.last() != Some(&SEPARATOR) {
            return false;
        }
    }

    // A lone digit after the separator cannot refine the cell.
    if chars.len() - separator == 2 {
        return false;
    }

    chars
        .iter()
        .all(|&c| c == SEPARATOR || c == PADDING_CHARACTER || digit_value(c).is_some())
}

/// Checks whether the string is a valid short code.
///
/// A short code carries the separator earlier than position 8 and needs a
/// reference location to be recovered into a full code.
///
/// # Example
///
/// ```
/// use olc_rs::is_short;
///
/// assert!(is_short("CJ+2VX"));
/// assert!(!is_short("9C3W9QCJ+2VX"));
/// ```
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    match code.chars().position(|c| c == SEPARATOR) {
        Some(index) => index < SEPARATOR_POSITION,
        None => false,
    }
}

/// Checks whether the string is a valid full code, decodable without a
/// reference location.
///
/// # Example
///
/// ```
/// use olc_rs::is_full;
///
/// assert!(is_full("9C3W9QCJ+2VX"));
/// assert!(!is_full("CJ+2VX"));
/// ```
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }
    // The first digit pair may not decode beyond the pole or the
    // antimeridian.
    let mut chars = code.chars();
    if let Some(first) = chars.next() {
        if let Some(value) = digit_value(first) {
            if (value * ENCODING_BASE) as f64 >= LATITUDE_MAX * 2.0 {
                return false;
            }
        }
    }
    if let Some(second) = chars.next() {
        if let Some(value) = digit_value(second) {
            if (value * ENCODING_BASE) as f64 >= LONGITUDE_MAX * 2.0 {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_full_codes() {
        assert!(is_valid("8FWC2345+G6"));
        assert!(is_valid("8FWC2345+G6G"));
        assert!(is_valid("8fwc2345+"));
        assert!(is_valid("8FWCX400+"));
        assert!(is_valid("8F000000+"));
        assert!(is_valid("CFX30000+"));
    }

    #[test]
    fn test_valid_short_codes() {
        assert!(is_valid("WC2345+G6"));
        assert!(is_valid("2345+G6"));
        assert!(is_valid("45+G6"));
        assert!(is_valid("+G6"));
    }

    #[test]
    fn test_invalid_codes() {
        assert!(!is_valid(""));
        assert!(!is_valid("+"));
        assert!(!is_valid("G+"));
        // A single digit after the separator.
        assert!(!is_valid("8FWC2345+G"));
        assert!(!is_valid("WC2345+G"));
        // Characters outside the digit set.
        assert!(!is_valid("8FWC2_45+G6"));
        assert!(!is_valid("8FWC2\u{3b7}45+G6"));
        assert!(!is_valid("8FWC2345+G6+"));
        assert!(!is_valid("8FWC2345G6"));
    }

    #[test]
    fn test_invalid_padding() {
        // Padding must end the digits before the separator.
        assert!(!is_valid("8FWC2300+G6"));
        // Short codes cannot be padded.
        assert!(!is_valid("WC2300+"));
        assert!(!is_valid("230000+"));
        // Odd pad run.
        assert!(!is_valid("8FWC2000+"));
        // Two pad runs.
        assert!(!is_valid("8F0W0000+"));
    }

    #[test]
    fn test_fully_padded_code_rejected() {
        // Padding may not begin at the first digit, so a code that is all
        // padding is not valid even though encode never emits one.
        assert!(!is_valid("00000000+"));
    }

    #[test]
    fn test_is_short() {
        assert!(is_short("WC2345+G6"));
        assert!(is_short("+2VX"));
        assert!(!is_short("8FWC2345+G6"));
        assert!(!is_short("8FWC2345+G"));
    }

    #[test]
    fn test_is_full() {
        assert!(is_full("8FWC2345+G6"));
        assert!(is_full("8fwc2345+"));
        assert!(!is_full("WC2345+G6"));
        assert!(!is_full("8FWC2345+G"));
    }

    #[test]
    fn test_is_full_rejects_out_of_range_first_pair() {
        // First digit would place the latitude at or above 90.
        assert!(!is_full("F2222222+"));
        assert!(!is_full("X2222222+"));
        // Second digit would place the longitude at or above 180.
        assert!(!is_full("2W222222+"));
        assert!(!is_full("2X222222+"));
        // Both remain structurally valid strings.
        assert!(is_valid("F2222222+"));
        assert!(is_valid("2W222222+"));
    }
}
