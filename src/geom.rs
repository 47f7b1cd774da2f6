use crate::codec::encode;
use crate::coord::resolution_for_length;
use crate::error::OlcError;
use geo::Centroid;
use geo_types::{Geometry, LineString};
use geojson::GeoJson;
use std::collections::HashSet;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, OlcError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, OlcError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| OlcError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| OlcError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| OlcError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| OlcError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(OlcError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, OlcError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| OlcError::GeometryParseError(e.to_string()))?;

    wkt.try_into()
        .map_err(|_| OlcError::GeometryParseError("Failed to convert WKT to geometry".to_string()))
}

/// Produces the plus codes representing an arbitrary `geo_types::Geometry`.
///
/// Points and polygon centroids produce a single code; lines and
/// collections may produce many.
pub fn codes_for_geometry(
    geometry: Geometry<f64>,
    code_length: usize,
) -> Result<Vec<String>, OlcError> {
    match geometry {
        Geometry::Point(point) => Ok(vec![encode(&point, code_length)?]),
        Geometry::MultiPoint(points) => {
            let mut codes = Vec::new();
            for point in points.0 {
                codes.push(encode(&point, code_length)?);
            }
            Ok(codes)
        }
        Geometry::LineString(line) => codes_along_line(&line, code_length),
        Geometry::MultiLineString(lines) => {
            let mut codes = Vec::new();
            for line in lines.0 {
                codes.extend(codes_along_line(&line, code_length)?);
            }
            Ok(codes)
        }
        Geometry::Polygon(polygon) => match polygon.centroid() {
            Some(centroid) => Ok(vec![encode(&centroid, code_length)?]),
            None => Ok(vec![]),
        },
        Geometry::MultiPolygon(polygons) => {
            let mut codes = Vec::new();
            for polygon in polygons.0 {
                if let Some(centroid) = polygon.centroid() {
                    codes.push(encode(&centroid, code_length)?);
                }
            }
            Ok(codes)
        }
        Geometry::GeometryCollection(collection) => {
            let mut codes = Vec::new();
            for geometry in collection.0 {
                codes.extend(codes_for_geometry(geometry, code_length)?);
            }
            Ok(codes)
        }
        _ => Err(OlcError::GeometryParseError(
            "Unsupported geometry type".to_string(),
        )),
    }
}

/// Produces the plus codes of the cells a line passes through.
///
/// Samples points along each segment at half the cell size and returns
/// the unique codes in first-seen order. Line coordinates are x =
/// longitude, y = latitude.
pub fn codes_along_line(line: &LineString, code_length: usize) -> Result<Vec<String>, OlcError> {
    let (lat_size, lng_size) = resolution_for_length(code_length)?;
    let step_size = lat_size.min(lng_size) * 0.5;

    let mut seen: HashSet<String> = HashSet::new();
    let mut codes: Vec<String> = Vec::new();

    for window in line.0.windows(2) {
        let start = &window[0];
        let end = &window[1];

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let segment_length = (dx * dx + dy * dy).sqrt();
        let steps = (segment_length / step_size).ceil() as usize;

        for i in 0..=steps {
            let t = if steps == 0 {
                0.0
            } else {
                i as f64 / steps as f64
            };
            let lng = start.x + t * dx;
            let lat = start.y + t * dy;

            let code = encode(&(lat, lng), code_length)?;
            if seen.insert(code.clone()) {
                codes.push(code);
            }
        }
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{polygon, Point, Rect};

    #[test]
    fn test_parse_geojson_point() -> Result<(), OlcError> {
        let json = r#"{"type":"Point","coordinates":[2.775,20.375]}"#;
        let geom = parse_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - 2.775).abs() < 0.001);
                assert!((pt.y() - 20.375).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), OlcError> {
        let geom = parse_geometry("POINT(2.775 20.375)")?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - 2.775).abs() < 0.001);
                assert!((pt.y() - 20.375).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geometry_rejects_feature_collections() {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        assert!(matches!(
            parse_geometry(json),
            Err(OlcError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_parse_geometry_rejects_garbage() {
        assert!(parse_geometry("not a geometry").is_err());
    }

    #[test]
    fn test_codes_for_point() -> Result<(), OlcError> {
        let geom = Geometry::Point(Point::new(2.775, 20.375));
        let codes = codes_for_geometry(geom, 6)?;
        assert_eq!(codes, vec!["7FG49Q00+".to_string()]);
        Ok(())
    }

    #[test]
    fn test_codes_for_polygon_uses_centroid() -> Result<(), OlcError> {
        let poly = polygon![
            (x: 2.77, y: 20.37),
            (x: 2.78, y: 20.37),
            (x: 2.78, y: 20.38),
            (x: 2.77, y: 20.38),
            (x: 2.77, y: 20.37),
        ];
        let codes = codes_for_geometry(Geometry::Polygon(poly), 6)?;
        assert_eq!(codes, vec!["7FG49Q00+".to_string()]);
        Ok(())
    }

    #[test]
    fn test_codes_along_line_covers_crossed_cells() -> Result<(), OlcError> {
        // Spans three 0.05 degree cells in longitude.
        let line = LineString::from(vec![(2.72, 20.36), (2.83, 20.36)]);
        let codes = codes_along_line(&line, 6)?;

        assert!(codes.len() >= 3);
        assert!(codes.contains(&"7FG49Q00+".to_string()));
        for code in &codes {
            assert_eq!(code.len(), 9);
        }
        Ok(())
    }

    #[test]
    fn test_codes_along_line_dedupes_within_a_cell() -> Result<(), OlcError> {
        let line = LineString::from(vec![(2.771, 20.371), (2.779, 20.379)]);
        let codes = codes_along_line(&line, 6)?;
        assert_eq!(codes, vec!["7FG49Q00+".to_string()]);
        Ok(())
    }

    #[test]
    fn test_codes_for_empty_line() -> Result<(), OlcError> {
        let line = LineString::new(vec![]);
        assert!(codes_along_line(&line, 6)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_codes_for_unsupported_geometry() {
        let rect = Rect::new((0.0, 0.0), (1.0, 1.0));
        assert!(matches!(
            codes_for_geometry(Geometry::Rect(rect), 6),
            Err(OlcError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_codes_for_geometry_collection() -> Result<(), OlcError> {
        use geo_types::GeometryCollection;

        let gc = GeometryCollection::new_from(vec![
            Geometry::Point(Point::new(2.775, 20.375)),
            Geometry::Point(Point::new(8.0000625, 47.0000625)),
        ]);
        let codes = codes_for_geometry(Geometry::GeometryCollection(gc), 10)?;
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[1], "8FVC2222+22");
        Ok(())
    }
}
