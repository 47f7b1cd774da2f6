//! # olc-rs
//!
//! Rust implementation of the Open Location Code ("plus code") system:
//! a short alphanumeric code for every rectangular cell on Earth, with
//! shortening and recovery relative to a nearby reference location.
//!
//! Codes are built from a 20-digit alphabet. The first ten digits encode
//! latitude and longitude in base-20 pairs; digits beyond the tenth refine
//! the cell through a 4x5 grid. A `+` separator follows the eighth digit
//! and `0` padding fills codes shorter than eight digits.
//!
//! ## Core functions
//!
//! **Encode and decode:**
//!
//! ```
//! use olc_rs::{decode, encode};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! // From a (latitude, longitude) tuple
//! let code = encode(&(20.375, 2.775), 6)?;
//! assert_eq!(code, "7FG49Q00+");
//!
//! // From a geo_types point (x = longitude, y = latitude)
//! let point = olc_rs::geo_types::Point::new(8.0000625, 47.0000625);
//! assert_eq!(encode(&point, 11)?, "8FVC2222+22G");
//!
//! let area = decode(&code)?;
//! assert!(area.contains(&(20.375, 2.775)));
//! # Ok(())
//! # }
//! ```
//!
//! **Shorten and recover:**
//!
//! ```
//! use olc_rs::{recover_nearest, shorten};
//!
//! # fn main() -> Result<(), olc_rs::OlcError> {
//! let reference = (51.3708675, -1.217765625);
//! let short = shorten("9C3W9QCJ+2VX", &reference)?;
//! assert_eq!(short, "CJ+2VX");
//! assert_eq!(recover_nearest(&short, &reference)?, "9C3W9QCJ+2VX");
//! # Ok(())
//! # }
//! ```
//!
//! **Validate:**
//!
//! ```
//! use olc_rs::{is_full, is_short, is_valid};
//!
//! assert!(is_valid("8FVC2222+22"));
//! assert!(is_full("8FVC2222+22"));
//! assert!(is_short("CJ+2VX"));
//! ```
//!
//! ## API Reference
//!
//! For people used to Open Location Code libraries in other languages,
//! here is the mapping to olc-rs.
//!
//! ### Codec functions
//!
//! | Concept                    | olc-rs                                 |
//! | :------------------------- | :------------------------------------- |
//! | Location to code           | `encode`                               |
//! | Code to area               | `decode`                               |
//! | Validate any code          | `is_valid`                             |
//! | Validate short code        | `is_short`                             |
//! | Validate full code         | `is_full`                              |
//! | Shorten near a reference   | `shorten`                              |
//! | Recover near a reference   | `recover_nearest`                      |
//! | Cell size for a length     | `resolution_for_length`                |
//! | Clip a latitude            | `clip_latitude`                        |
//! | Wrap a longitude           | `normalize_longitude`                  |
//!
//! ### Area inspection
//!
//! | Concept                    | olc-rs                                 |
//! | :------------------------- | :------------------------------------- |
//! | Bounds                     | `CodeArea` public fields               |
//! | Centre                     | `CodeArea::lat_center` / `lng_center`  |
//! | Centre as a point          | `CodeArea::center`                     |
//! | Cell size                  | `CodeArea::height` / `width`           |
//! | Cell as a rectangle        | `CodeArea::to_rect`                    |
//! | Containment test           | `CodeArea::contains`                   |
//!
//! ### Geometry functions
//!
//! | Concept                    | olc-rs                                 |
//! | :------------------------- | :------------------------------------- |
//! | Parse WKT/GeoJSON          | `parse_geometry`                       |
//! | Geometry to codes          | `codes_for_geometry`                   |
//! | Line to covering codes     | `codes_along_line`                     |
//!
//! ### CSV functions
//!
//! | Concept                    | olc-rs                                 |
//! | :------------------------- | :------------------------------------- |
//! | CSV to plus-code CSV       | `csv_to_code_csv`                      |
//! | CSV config (geometry)      | `CsvCodeConfig::new`                   |
//! | CSV config (coords)        | `CsvCodeConfig::from_coords`           |
//!
//! ### Constants
//!
//! | Concept                    | olc-rs                                 |
//! | :------------------------- | :------------------------------------- |
//! | Digit alphabet             | `ALPHABET`                             |
//! | Default precision          | `CODE_PRECISION_NORMAL`                |
//! | Pair resolution table      | `PAIR_RESOLUTIONS`                     |
//! | Grid dimensions            | `GRID_ROWS`, `GRID_COLUMNS`            |

mod area;
mod codec;
mod coord;
mod error;
mod geom;
mod io;
mod shorten;
mod validate;

pub use area::CodeArea;
pub use codec::constants::{
    ALPHABET, CODE_PRECISION_NORMAL, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, GRID_SIZE_DEGREES,
    LATITUDE_MAX, LONGITUDE_MAX, MIN_TRIMMABLE_CODE_LENGTH, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
pub use codec::{decode, encode};
pub use coord::{clip_latitude, normalize_longitude, resolution_for_length, Coordinate};
pub use error::OlcError;
pub use geom::{codes_along_line, codes_for_geometry, parse_geojson, parse_geometry, parse_wkt};
pub use io::{csv_to_code_csv, CoordinateSource, CsvCodeConfig, CsvToCodes, GeometryFormat};
pub use shorten::{recover_nearest, shorten};
pub use validate::{is_full, is_short, is_valid};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), OlcError> {
        let location = (51.3701125, -1.217765625);
        let code = encode(&location, 11)?;
        assert_eq!(code, "9C3W9QCJ+2VX");

        let area = decode(&code)?;
        assert!(area.contains(&location));
        assert_eq!(area.code_length, 11);

        let reference = (51.3708675, -1.217765625);
        let short = shorten(&code, &reference)?;
        assert_eq!(short, "CJ+2VX");
        assert!(is_short(&short));

        let recovered = recover_nearest(&short, &reference)?;
        assert_eq!(recovered, code);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_points() -> Result<(), OlcError> {
        let pt = point! { x: 2.775, y: 20.375 };
        assert_eq!(encode(&pt, 6)?, encode(&(20.375, 2.775), 6)?);

        let center = decode("7FG49Q00+")?.center();
        assert_eq!(encode(&center, 6)?, "7FG49Q00+");
        Ok(())
    }

    #[test]
    fn test_validator_partition() {
        let samples = [
            "8FVC2222+22",
            "8FVC2222+22G",
            "7FG49Q00+",
            "CFX30000+",
            "CJ+2VX",
            "+2VX",
            "F2222222+",
            "2W222222+",
            "8FVC2222+2",
            "00000000+",
            "",
            "not a code",
        ];
        for code in samples {
            // A code is never both short and full, and being either
            // implies validity.
            assert!(
                !(is_short(code) && is_full(code)),
                "{code} is both short and full"
            );
            if is_short(code) || is_full(code) {
                assert!(is_valid(code), "{code} is short or full but not valid");
            }
        }
    }

    #[test]
    fn test_longitude_wrap_produces_identical_codes() -> Result<(), OlcError> {
        for multiple in [-720.0, -360.0, 360.0, 720.0] {
            assert_eq!(
                encode(&(51.3701125, -1.217765625 + multiple), 10)?,
                encode(&(51.3701125, -1.217765625), 10)?
            );
        }
        Ok(())
    }

    #[test]
    fn test_poles_stay_in_range() -> Result<(), OlcError> {
        let north = decode(&encode(&(90.0, 0.0), 10)?)?;
        assert!(north.lat_hi <= 90.0 + 1e-10);

        let south = decode(&encode(&(-90.0, 0.0), 10)?)?;
        assert!(south.lat_lo >= -90.0 - 1e-10);
        Ok(())
    }

    #[test]
    fn test_geometry_workflow() -> Result<(), OlcError> {
        let geom = parse_geometry("POINT(2.775 20.375)")?;
        let codes = codes_for_geometry(geom, 6)?;
        assert_eq!(codes, vec!["7FG49Q00+".to_string()]);

        let area = decode(&codes[0])?;
        let rect = area.to_rect();
        assert!((rect.width() - 0.05).abs() < 1e-10);
        Ok(())
    }
}
