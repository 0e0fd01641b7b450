mod csv_import;
mod detect;

pub(crate) use csv_import::{CsvImporter, SchemaProfile};
pub(crate) use detect::detect_schema;
