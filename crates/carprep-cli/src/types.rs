use std::path::PathBuf;

use carprep_core::CleanSummary;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub summary: CleanSummary,
}

#[derive(Debug)]
pub struct VocabularyResult {
    pub input: PathBuf,
    pub extra_column: String,
    pub source_row: usize,
    pub density: f64,
    pub features: Vec<String>,
    pub duplicates: Vec<String>,
}
