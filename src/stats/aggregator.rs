use std::collections::{HashMap, HashSet};

use crate::listing::{Field, RecordSet};
use crate::stats::types::{Bucket, Distribution, Metrics};

/// Read-only aggregation over a record set
pub struct Aggregator<'a> {
    records: &'a RecordSet,
}

impl<'a> Aggregator<'a> {
    pub fn new(records: &'a RecordSet) -> Self {
        Self { records }
    }

    /// Group the records by the text of `field` and count each group
    pub fn distribution(&self, field: Field) -> Distribution {
        let mut positions: HashMap<Option<&str>, usize> = HashMap::new();
        let mut buckets: Vec<Bucket> = Vec::new();

        for listing in self.records.iter() {
            let value = listing.get(field);
            match positions.get(&value) {
                Some(&position) => buckets[position].count += 1,
                None => {
                    positions.insert(value, buckets.len());
                    buckets.push(Bucket {
                        name: value.map(str::to_string),
                        count: 1,
                    });
                }
            }
        }

        Distribution::new(field, buckets)
    }

    /// Average price, distinct brands and record count
    ///
    /// Listings whose price is missing or not a number are left out of the
    /// average. The mean is kept as a running value, so it stays finite for
    /// any set of finite prices.
    pub fn metrics(&self) -> Metrics {
        let mut mean = 0.0;
        let mut priced_bikes = 0usize;
        let mut brands = HashSet::new();

        for listing in self.records.iter() {
            if let Some(price) = listing.price() {
                priced_bikes += 1;
                let n = priced_bikes as f64;
                mean += price / n - mean / n;
            }
            if let Some(brand) = listing.get(Field::Brand) {
                brands.insert(brand);
            }
        }

        let average_price = (priced_bikes > 0).then_some(mean);

        Metrics {
            average_price,
            priced_bikes,
            total_brands: brands.len(),
            total_bikes: self.records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::parser::parse;
    use crate::test_utils::test_helpers::{listings, scenario_records};
    use proptest::prelude::*;

    #[test]
    fn test_city_distribution_scenario() {
        let records = scenario_records();
        let dist = Aggregator::new(&records).distribution(Field::City);

        let pairs: Vec<_> = dist.buckets().iter().map(|b| (b.label(), b.count)).collect();
        assert_eq!(pairs, vec![("Delhi", 2), ("Mumbai", 1)]);
    }

    #[test]
    fn test_brand_distribution_scenario() {
        let records = scenario_records();
        let dist = Aggregator::new(&records).distribution(Field::Brand);

        let pairs: Vec<_> = dist.buckets().iter().map(|b| (b.label(), b.count)).collect();
        assert_eq!(pairs, vec![("Hero", 1), ("Honda", 2)]);
    }

    #[test]
    fn test_distribution_counts_missing_values() {
        let records = listings(&[
            &[(Field::Owner, "First Owner")],
            &[],
            &[(Field::Owner, "First Owner")],
            &[],
        ]);
        let dist = Aggregator::new(&records).distribution(Field::Owner);

        assert_eq!(dist.count("First Owner"), 2);
        assert_eq!(dist.missing(), 2);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_distribution_of_empty_set() {
        let records = RecordSet::empty();
        let dist = Aggregator::new(&records).distribution(Field::City);
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
    }

    #[test]
    fn test_average_price_scenario() {
        let records = parse("price,brand\n100,Hero\n200,Honda\n300,Hero\n")
            .unwrap()
            .records;
        let metrics = Aggregator::new(&records).metrics();

        assert_eq!(metrics.average_price, Some(200.0));
        assert_eq!(metrics.priced_bikes, 3);
        assert_eq!(metrics.total_brands, 2);
        assert_eq!(metrics.total_bikes, 3);
    }

    #[test]
    fn test_metrics_of_empty_set() {
        let records = RecordSet::empty();
        let metrics = Aggregator::new(&records).metrics();

        assert_eq!(metrics.average_price, None);
        assert_eq!(metrics.average_price_display(), "N/A");
        assert_eq!(metrics.total_brands, 0);
        assert_eq!(metrics.total_bikes, 0);
    }

    #[test]
    fn test_unusable_prices_are_excluded_from_average() {
        let records = listings(&[
            &[(Field::Price, "100")],
            &[(Field::Price, "call")],
            &[],
            &[(Field::Price, "300")],
        ]);
        let metrics = Aggregator::new(&records).metrics();

        assert_eq!(metrics.average_price, Some(200.0));
        assert_eq!(metrics.priced_bikes, 2);
        assert_eq!(metrics.total_bikes, 4);
    }

    #[test]
    fn test_no_usable_price_gives_no_average() {
        let records = listings(&[&[(Field::Price, "n/a")], &[(Field::Brand, "Hero")]]);
        let metrics = Aggregator::new(&records).metrics();

        assert_eq!(metrics.average_price, None);
        assert_eq!(metrics.total_brands, 1);
    }

    #[test]
    fn test_average_of_huge_prices_stays_finite() {
        let records = listings(&[&[(Field::Price, "1e308")], &[(Field::Price, "1e308")]]);
        let metrics = Aggregator::new(&records).metrics();

        assert_eq!(metrics.average_price, Some(1e308));
        assert_ne!(metrics.average_price_display(), "N/A");
    }

    #[test]
    fn test_missing_brand_is_not_a_brand() {
        let records = listings(&[&[(Field::Brand, "Hero")], &[], &[(Field::Brand, "Hero")]]);
        assert_eq!(Aggregator::new(&records).metrics().total_brands, 1);
    }

    // =========================================================================
    // Property-Based Tests
    // =========================================================================

    fn arb_records() -> impl Strategy<Value = RecordSet> {
        let city = prop::option::of(prop::sample::select(vec!["Delhi", "Mumbai", "Pune", "Agra"]));
        let price = prop::option::of(0u32..1_000_000);
        prop::collection::vec((city, price), 0..60).prop_map(|rows| {
            rows.into_iter()
                .map(|(city, price)| {
                    let mut listing = crate::listing::Listing::new();
                    if let Some(city) = city {
                        listing.set(Field::City, city);
                    }
                    if let Some(price) = price {
                        listing.set(Field::Price, price.to_string());
                    }
                    listing
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_distribution_counts_sum_to_record_count(records in arb_records()) {
            for field in Field::ALL {
                let dist = Aggregator::new(&records).distribution(field);
                prop_assert_eq!(dist.total(), records.len());
            }
        }

        #[test]
        fn prop_distribution_names_are_distinct(records in arb_records()) {
            let dist = Aggregator::new(&records).distribution(Field::City);
            let names: HashSet<_> = dist.buckets().iter().map(|b| b.name.clone()).collect();
            prop_assert_eq!(names.len(), dist.len());
        }

        #[test]
        fn prop_average_lies_within_price_range(records in arb_records()) {
            let metrics = Aggregator::new(&records).metrics();
            let prices: Vec<f64> = records.iter().filter_map(|l| l.price()).collect();

            match metrics.average_price {
                None => prop_assert!(prices.is_empty()),
                Some(avg) => {
                    let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
                    let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                    prop_assert!(avg >= min - 1e-6 && avg <= max + 1e-6);
                }
            }
            prop_assert_eq!(metrics.total_bikes, records.len());
        }
    }
}
