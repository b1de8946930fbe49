use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use carprep_cli::types::{CleanResult, VocabularyResult};
use carprep_core::{CleaningOptions, CleaningPipeline};
use carprep_ingest::{ListingCsvOptions, read_listings_csv, write_listings_csv};

use crate::cli::{CleanArgs, VocabularyArgs};

pub fn run_defaults() -> Result<()> {
    let json = CleaningOptions::default()
        .to_json_pretty()
        .context("serialize default options")?;
    println!("{json}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    let mut options = load_options(args.config.as_deref(), args.extra_column.as_deref())?;
    if args.keep_empty_rows {
        options = options.with_drop_empty_rows(false);
    }

    // =========================================================================
    // Ingest
    // =========================================================================
    let csv_options = ListingCsvOptions::new(options.extra_column.as_str());
    let df = read_listings_csv(&args.input, &csv_options)
        .with_context(|| format!("read listings {}", args.input.display()))?;

    // =========================================================================
    // Clean
    // =========================================================================
    let pipeline = CleaningPipeline::new(options);
    let outcome = pipeline
        .run(df)
        .with_context(|| format!("clean listings {}", args.input.display()))?;
    let mut data = outcome.data;

    // =========================================================================
    // Output
    // =========================================================================
    if let Some(path) = &args.output {
        write_listings_csv(&mut data, path)
            .with_context(|| format!("write cleaned listings {}", path.display()))?;
        info!(path = %path.display(), rows = data.height(), "wrote cleaned listings");
    }

    Ok(CleanResult {
        input: args.input.clone(),
        output: args.output.clone(),
        summary: outcome.summary,
    })
}

pub fn run_vocabulary(args: &VocabularyArgs) -> Result<VocabularyResult> {
    let span = info_span!("vocabulary", input = %args.input.display());
    let _guard = span.enter();

    let options = load_options(args.config.as_deref(), args.extra_column.as_deref())?;
    let csv_options = ListingCsvOptions::new(options.extra_column.as_str());
    let df = read_listings_csv(&args.input, &csv_options)
        .with_context(|| format!("read listings {}", args.input.display()))?;
    let pipeline = CleaningPipeline::new(options);
    let vocabulary = pipeline
        .discover(&df)
        .with_context(|| format!("discover features in {}", args.input.display()))?;

    Ok(VocabularyResult {
        input: args.input.clone(),
        extra_column: pipeline.options().extra_column.clone(),
        source_row: vocabulary.source_row(),
        density: vocabulary.density(),
        features: vocabulary.names().to_vec(),
        duplicates: vocabulary
            .duplicate_tokens()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

fn load_options(config: Option<&Path>, extra_column: Option<&str>) -> Result<CleaningOptions> {
    let mut options = match config {
        Some(path) => CleaningOptions::from_json_file(path)
            .with_context(|| format!("load options {}", path.display()))?,
        None => CleaningOptions::default(),
    };
    if let Some(column) = extra_column {
        if column.trim().is_empty() {
            return Err(anyhow!("--extra-column must not be empty"));
        }
        options = options.with_extra_column(column);
    }
    Ok(options)
}
