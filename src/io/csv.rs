use crate::codec::{decode, encode};
use crate::error::OlcError;
use crate::geom::{codes_for_geometry, parse_geometry};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

enum SourceIndices {
    Geometry(usize),
    Coordinates { lat_idx: usize, lng_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate latitude and longitude columns
    CoordinateColumns {
        lat_column: String,
        lng_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvCodeConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub code_length: usize,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvCodeConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use olc_rs::CsvCodeConfig;
    ///
    /// let config = CsvCodeConfig::new("geometry", 10);
    /// ```
    pub fn new(geometry_column: impl Into<String>, code_length: usize) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            code_length,
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use olc_rs::CsvCodeConfig;
    ///
    /// let config = CsvCodeConfig::from_coords("Latitude", "Longitude", 10);
    /// ```
    pub fn from_coords(
        lat_column: impl Into<String>,
        lng_column: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lat_column: lat_column.into(),
                lng_column: lng_column.into(),
            },
            exclude_columns: Vec::new(),
            code_length,
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the code's cell rectangle in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToCodes {
    fn to_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCodeConfig,
    ) -> Result<(), OlcError>;
}

impl<P: AsRef<Path>> CsvToCodes for P {
    fn to_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCodeConfig,
    ) -> Result<(), OlcError> {
        csv_to_code_csv(self, output_path, config)
    }
}

fn cell_to_wkt(code: &str) -> Result<String, OlcError> {
    use wkt::ToWkt;
    Ok(decode(code)?.to_rect().to_polygon().wkt_string())
}

fn cell_to_geojson(code: &str) -> Result<String, OlcError> {
    let polygon = decode(code)?.to_rect().to_polygon();
    Ok(geojson::Geometry::from(&polygon).to_string())
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file
/// with plus codes.
///
/// Streams output to minimize memory usage for large files. Rows with
/// line geometry can produce several output rows, one per covered cell.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use olc_rs::{csv_to_code_csv, CsvCodeConfig};
///
/// let config = CsvCodeConfig::new("Geo Shape", 10)
///     .exclude(vec!["Geo Point".into()]);
///
/// csv_to_code_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use olc_rs::{csv_to_code_csv, CsvCodeConfig};
///
/// let config = CsvCodeConfig::from_coords("Latitude", "Longitude", 10);
///
/// csv_to_code_csv("bus_stops.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_code_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvCodeConfig,
) -> Result<(), OlcError> {
    let file = File::open(csv_path).map_err(|e| OlcError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| OlcError::CsvError(e.to_string()))?
        .clone();

    // Resolve the source columns; they are always excluded from the output.
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            if col.is_empty() {
                return Err(OlcError::CsvError(
                    "Geometry column name cannot be empty".to_string(),
                ));
            }
            let idx = headers.iter().position(|h| h == col).ok_or_else(|| {
                OlcError::CsvError(format!("Geometry column '{}' not found", col))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(idx);
            (SourceIndices::Geometry(idx), exclude)
        }
        CoordinateSource::CoordinateColumns {
            lat_column,
            lng_column,
        } => {
            if lat_column.is_empty() {
                return Err(OlcError::CsvError(
                    "Latitude column name cannot be empty".to_string(),
                ));
            }
            if lng_column.is_empty() {
                return Err(OlcError::CsvError(
                    "Longitude column name cannot be empty".to_string(),
                ));
            }
            let lat_idx = headers.iter().position(|h| h == lat_column).ok_or_else(|| {
                OlcError::CsvError(format!("Latitude column '{}' not found", lat_column))
            })?;
            let lng_idx = headers.iter().position(|h| h == lng_column).ok_or_else(|| {
                OlcError::CsvError(format!("Longitude column '{}' not found", lng_column))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(lat_idx);
            exclude.insert(lng_idx);
            (SourceIndices::Coordinates { lat_idx, lng_idx }, exclude)
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| OlcError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["plus_code"];
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| OlcError::CsvError(e.to_string()))?;

    for result in reader.records() {
        let record = result.map_err(|e| OlcError::CsvError(e.to_string()))?;

        let codes = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    OlcError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                codes_for_geometry(geom, config.code_length)?
            }
            SourceIndices::Coordinates { lat_idx, lng_idx } => {
                let lat_str = record
                    .get(*lat_idx)
                    .ok_or_else(|| {
                        OlcError::CsvError(format!("Missing latitude column at index {}", lat_idx))
                    })?
                    .trim();
                let lng_str = record
                    .get(*lng_idx)
                    .ok_or_else(|| {
                        OlcError::CsvError(format!("Missing longitude column at index {}", lng_idx))
                    })?
                    .trim();

                let lat: f64 = lat_str.parse().map_err(|_| {
                    OlcError::CsvError(format!("Invalid latitude: '{}'", lat_str))
                })?;
                let lng: f64 = lng_str.parse().map_err(|_| {
                    OlcError::CsvError(format!("Invalid longitude: '{}'", lng_str))
                })?;

                vec![encode(&(lat, lng), config.code_length)?]
            }
        };

        for code in codes {
            let mut row: Vec<String> = vec![code.clone()];

            if let Some(format) = config.include_cell_geometry {
                let geom_str = match format {
                    GeometryFormat::Wkt => cell_to_wkt(&code)?,
                    GeometryFormat::GeoJson => cell_to_geojson(&code)?,
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| OlcError::CsvError(e.to_string()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| OlcError::CsvError(e.to_string()))?;

    Ok(())
}
