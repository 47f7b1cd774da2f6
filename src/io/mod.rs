pub mod csv;

pub use csv::{csv_to_code_csv, CoordinateSource, CsvCodeConfig, CsvToCodes, GeometryFormat};
