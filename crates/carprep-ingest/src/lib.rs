//! Listing ingestion: CSV loading into Polars and CSV output.

pub mod csv;
pub mod error;

pub use csv::{ListingCsvOptions, mark_missing_extras, read_listings_csv, write_listings_csv};
pub use error::{IngestError, Result};
