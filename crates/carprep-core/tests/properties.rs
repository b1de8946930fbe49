//! Property tests for filter, discovery and encoding invariants.

use polars::prelude::{DataFrame, NamedFrom, Series};
use proptest::prelude::*;

use carprep_core::{
    CategoryBucket, discover_vocabulary, drop_zero_rows, one_hot_encode_top_k,
};

fn listing_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        3 => "[A-E]{1,3}(, [A-E]{1,3}){0,4}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn zero_filter_leaves_no_zero(prices in prop::collection::vec(0i64..4, 0..40)) {
        let df = DataFrame::new(vec![Series::new("price".into(), prices.clone()).into()]).unwrap();

        let out = drop_zero_rows(&df, &["price"]).unwrap();

        prop_assert!(out.height() <= df.height());
        let kept: Vec<i64> = out.column("price").unwrap().i64().unwrap().into_no_null_iter().collect();
        let expected: Vec<i64> = prices.into_iter().filter(|price| *price != 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn discovery_picks_last_densest_listing(
        listings in prop::collection::vec(listing_strategy(), 1..20)
    ) {
        prop_assume!(listings.iter().any(Option::is_some));
        let df = DataFrame::new(vec![Series::new("extra".into(), listings.clone()).into()]).unwrap();

        let first = discover_vocabulary(&df, "extra").unwrap();
        let second = discover_vocabulary(&df, "extra").unwrap();
        prop_assert_eq!(&first, &second);

        let densities: Vec<usize> = listings
            .iter()
            .map(|listing| listing.as_ref().map_or(0, |text| text.chars().count()))
            .collect();
        let best = densities.iter().copied().max().unwrap();
        let expected_row = densities.iter().rposition(|density| *density == best).unwrap();
        prop_assert_eq!(first.source_row(), expected_row);
    }

    #[test]
    fn one_hot_rows_hold_at_most_one_flag(
        labels in prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 1..40),
        top_k in 0usize..6,
    ) {
        let mut df = DataFrame::new(vec![Series::new("brand".into(), labels.clone()).into()]).unwrap();
        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let categories = one_hot_encode_top_k(&mut df, "brand", top_k).unwrap();

        prop_assert!(df.column("brand").is_err());
        prop_assert_eq!(df.width(), top_k.min(distinct.len()));
        let columns: Vec<Vec<i64>> = df
            .get_columns()
            .iter()
            .map(|column| column.i64().unwrap().into_no_null_iter().collect())
            .collect();
        for row in 0..labels.len() {
            let flags: i64 = columns.iter().map(|values| values[row]).sum();
            prop_assert!(flags <= 1);
            let is_other = matches!(categories.buckets()[row], CategoryBucket::Other);
            prop_assert_eq!(flags == 0, is_other);
        }
    }
}
