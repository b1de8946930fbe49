//! End-to-end tests for the cleaning pipeline.

use polars::prelude::*;

use carprep_core::{
    CleanError, CleaningOptions, CleaningPipeline, Stage, TopCategorySpec, clean_listings,
};

fn raw_listings() -> DataFrame {
    DataFrame::new(vec![
        Series::new("price".into(), vec!["42000", "", "0", "31000", "27500", "19900"]).into(),
        Series::new("model".into(), vec!["Gol", "Onix", "Ka", "Gol", "0", "HB20"]).into(),
        Series::new("mileage".into(), vec!["50000", "1", "20000", "80000", "1000", "0"]).into(),
        Series::new("regdate".into(), vec!["2015", "2018", "2019", "2012", "2020", "2017"]).into(),
        Series::new(
            "extra".into(),
            vec![
                Some("Ar condicionado, Alarme, Trava elétrica"),
                Some("Alarme"),
                None,
                None,
                Some("Alarme"),
                Some("Trava elétrica"),
            ],
        )
        .into(),
        Series::new("financial".into(), vec!["Sim", "Não", "Sim", "Não", "Sim", "Sim"]).into(),
        Series::new("brand".into(), vec!["VW", "GM", "FORD", "VW", "FIAT", "HYUNDAI"]).into(),
        Series::new("cartype".into(), vec!["Hatch", "Hatch", "Sedan", "Hatch", "Sedan", "Hatch"]).into(),
        Series::new("gearbox".into(), vec!["Manual", "Manual", "Manual", "Manual", "Manual", "Automático"]).into(),
        Series::new("motorpower".into(), vec!["1.0", "1.4", "1.0", "1.6", "1.0", "1.6"]).into(),
        Series::new("fuel".into(), vec!["Flex", "Flex", "Flex", "Flex", "Gasolina", "Flex"]).into(),
        Series::new("car_steering".into(), vec!["Hidráulica", "Elétrica", "Mecânica", "Hidráulica", "Elétrica", "Hidráulica"]).into(),
        Series::new("carcolor".into(), vec!["Prata", "Preto", "Branco", "Prata", "Prata", "Preto"]).into(),
        Series::new("exchange".into(), vec!["Aceita", "Não aceita", "Aceita", "Aceita", "Aceita", "Aceita"]).into(),
    ])
    .unwrap()
}

#[test]
fn default_pipeline_produces_numeric_table() {
    let outcome = clean_listings(raw_listings()).unwrap();
    let df = &outcome.data;

    // row 1 has an empty price, row 2 a zero price, row 4 a zero model, row 5 zero mileage
    assert_eq!(df.height(), 2);
    assert_eq!(outcome.summary.input_rows, 6);
    assert_eq!(outcome.summary.rows_after_empty_filter, 5);
    assert_eq!(outcome.summary.rows_after_zero_filter, 2);
    assert_eq!(outcome.summary.dropped_rows(), 4);

    for name in ["price", "mileage", "regdate"] {
        assert_eq!(df.column(name).unwrap().dtype(), &DataType::Int64);
    }
    for name in [
        "extra",
        "model",
        "financial",
        "brand",
        "cartype",
        "gearbox",
        "motorpower",
        "fuel",
        "car_steering",
        "carcolor",
        "exchange",
    ] {
        assert!(df.column(name).is_err(), "{name} should be encoded away");
    }

    assert_eq!(
        outcome.summary.features,
        vec!["Ar condicionado", "Alarme", "Trava elétrica"]
    );
    let alarm: Vec<Option<f64>> = df
        .column("Alarme")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(alarm, vec![Some(1.0), Some(0.0)]);

    let gol: Vec<Option<i64>> = df
        .column("model_Gol")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(gol, vec![Some(1), Some(1)]);
    assert_eq!(outcome.summary.encoded.len(), 10);
    assert_eq!(outcome.summary.output_columns, df.width());
}

#[test]
fn encoded_summary_tracks_other_bucket() {
    let options = CleaningOptions::default()
        .with_nonzero_columns(["price"])
        .with_integer_columns(Vec::<String>::new())
        .with_top_categories(vec![TopCategorySpec::new("brand", 1)]);

    let outcome = CleaningPipeline::new(options).run(raw_listings()).unwrap();

    let brand = &outcome.summary.encoded[0];
    assert_eq!(brand.column, "brand");
    assert_eq!(brand.retained[0].value, "VW");
    assert_eq!(brand.other_rows, outcome.data.height() - 2);
    assert!(outcome.data.column("brand_VW").is_ok());
    assert!(outcome.data.column("fuel").is_ok());
}

#[test]
fn stage_errors_abort_the_run() {
    let options = CleaningOptions::default()
        .with_top_categories(vec![TopCategorySpec::new("doors", 2)]);

    let err = CleaningPipeline::new(options)
        .run(raw_listings())
        .unwrap_err();

    assert_eq!(err.stage(), Some(Stage::TopCategory));
}

#[test]
fn non_numeric_regdate_aborts() {
    let mut df = raw_listings();
    df.with_column(Series::new(
        "regdate".into(),
        vec!["2015", "2018", "2019", "antigo", "2020", "2017"],
    ))
    .unwrap();

    let err = clean_listings(df).unwrap_err();

    assert!(matches!(err, CleanError::NonNumericValue { ref column, .. } if column == "regdate"));
}

#[test]
fn discover_uses_filtered_rows() {
    let pipeline = CleaningPipeline::default();
    let mut df = raw_listings();
    // the longest listing sits on a row that the zero filter removes
    df.with_column(Series::new(
        "extra".into(),
        vec![
            Some("Alarme"),
            None,
            Some("Ar condicionado, Alarme, Trava elétrica, Som"),
            Some("Som"),
            None,
            None,
        ],
    ))
    .unwrap();

    let vocabulary = pipeline.discover(&df).unwrap();

    assert_eq!(vocabulary.source_row(), 0);
    assert_eq!(vocabulary.names(), vec!["Alarme"]);
}

#[test]
fn disabling_empty_filter_keeps_empty_price_until_normalization() {
    let options = CleaningOptions::default().with_drop_empty_rows(false);

    let err = CleaningPipeline::new(options)
        .run(raw_listings())
        .unwrap_err();

    assert!(matches!(err, CleanError::NonNumericValue { ref column, row: 1, .. } if column == "price"));
}
