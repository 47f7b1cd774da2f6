use super::constants::{
    digit_at, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, PAIR_RESOLUTIONS, SEPARATOR,
    SEPARATOR_POSITION,
};
use crate::area::CodeArea;

/// Encodes the leading digits of a code as latitude/longitude pairs.
///
/// Digits are taken alternately from latitude and longitude, one base-20
/// digit each per place value. The separator is inserted after eight
/// digits and shorter codes are padded out to the separator position.
/// Inputs must already be clipped and normalized.
pub(crate) fn encode_pairs(latitude: f64, longitude: f64, code_length: usize) -> String {
    let mut code = String::new();
    let mut adjusted_latitude = latitude + LATITUDE_MAX;
    let mut adjusted_longitude = longitude + LONGITUDE_MAX;

    let mut digit_count = 0;
    while digit_count < code_length {
        let place_value = PAIR_RESOLUTIONS[digit_count / 2];

        let digit = (adjusted_latitude / place_value).floor();
        adjusted_latitude -= digit * place_value;
        code.push(digit_at(digit as usize));
        digit_count += 1;

        let digit = (adjusted_longitude / place_value).floor();
        adjusted_longitude -= digit * place_value;
        code.push(digit_at(digit as usize));
        digit_count += 1;

        if digit_count == SEPARATOR_POSITION && digit_count < code_length {
            code.push(SEPARATOR);
        }
    }

    while code.len() < SEPARATOR_POSITION {
        code.push(PADDING_CHARACTER);
    }
    if code.len() == SEPARATOR_POSITION {
        code.push(SEPARATOR);
    }
    code
}

/// Decodes a sequence of pair digit values into the area they denote.
pub(crate) fn decode_pairs(digits: &[usize]) -> CodeArea {
    let (lat_lo, lat_hi) = decode_axis(digits, 0);
    let (lng_lo, lng_hi) = decode_axis(digits, 1);
    CodeArea::new(
        lat_lo - LATITUDE_MAX,
        lng_lo - LONGITUDE_MAX,
        lat_hi - LATITUDE_MAX,
        lng_hi - LONGITUDE_MAX,
        digits.len(),
    )
}

/// Sums the digits of one axis in the shifted positive domain. Offset 0
/// reads the latitude digits, offset 1 the longitude digits.
fn decode_axis(digits: &[usize], offset: usize) -> (f64, f64) {
    let mut value = 0.0;
    let mut i = 0;
    while i * 2 + offset < digits.len() {
        value += digits[i * 2 + offset] as f64 * PAIR_RESOLUTIONS[i];
        i += 1;
    }
    (value, value + PAIR_RESOLUTIONS[i - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::constants::digit_value;

    fn digits(code: &str) -> Vec<usize> {
        code.chars().filter_map(digit_value).collect()
    }

    #[test]
    fn test_encode_pairs_pads_short_codes() {
        assert_eq!(encode_pairs(20.375, 2.775, 6), "7FG49Q00+");
        assert_eq!(encode_pairs(20.375, 2.775, 2), "7F000000+");
    }

    #[test]
    fn test_encode_pairs_full_length() {
        assert_eq!(encode_pairs(47.0000625, 8.0000625, 10), "8FVC2222+22");
        assert_eq!(
            encode_pairs(20.3701125, 2.782234375, 10),
            "7FG49QCJ+2V"
        );
    }

    #[test]
    fn test_encode_pairs_at_the_south_west_corner() {
        assert_eq!(encode_pairs(-90.0, -180.0, 10), "22222222+22");
    }

    #[test]
    fn test_decode_pairs() {
        let area = decode_pairs(&digits("7FG49Q"));
        assert!((area.lat_lo - 20.35).abs() < 1e-10);
        assert!((area.lng_lo - 2.75).abs() < 1e-10);
        assert!((area.lat_hi - 20.4).abs() < 1e-10);
        assert!((area.lng_hi - 2.8).abs() < 1e-10);
        assert_eq!(area.code_length, 6);
    }

    #[test]
    fn test_decode_pairs_inverts_encode() {
        let area = decode_pairs(&digits("8FVC2222"));
        assert!(area.lat_lo <= 47.0000625 && 47.0000625 < area.lat_hi);
        assert!(area.lng_lo <= 8.0000625 && 8.0000625 < area.lng_hi);
        assert_eq!(area.code_length, 8);
    }
}
