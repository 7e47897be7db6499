pub mod csv;
pub mod json;
pub mod xml;

pub use self::csv::{CsvExporter, CsvImportSummary, CsvImporter};
pub use self::json::{JsonExporter, JsonImporter, FORMAT_VERSION};
pub use self::xml::XmlExporter;
