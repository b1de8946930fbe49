//! Cleaning and feature engineering for used-car listing tables.
//!
//! This crate turns a raw, scraped listings [`DataFrame`](polars::prelude::DataFrame)
//! into a numeric, model-ready table:
//!
//! - **filter**: drop rows with empty strings or zero-valued required fields
//! - **normalize**: coerce price, registration year and mileage to `Int64`
//! - **extra**: expand the free-text equipment column into indicator columns
//! - **encode**: one-hot encode the top-K values of categorical columns
//! - **pipeline**: run the stages in order from [`CleaningOptions`]

pub mod encode;
pub mod error;
pub mod extra;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod values;

pub use encode::{
    CategoryBucket, CategoryCount, TopCategories, one_hot_encode_top_k, rank_categories,
};
pub use error::{CleanError, Result, Stage};
pub use extra::{Vocabulary, discover_vocabulary, expand_extra_features};
pub use filter::{drop_empty_rows, drop_zero_rows};
pub use normalize::normalize_integer_columns;
pub use options::{CleaningOptions, DEFAULT_EXTRA_COLUMN, TopCategorySpec};
pub use pipeline::{CleanOutcome, CleanSummary, CleaningPipeline, EncodedColumn, clean_listings};
