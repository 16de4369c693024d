use super::models::{PriceSummary, SearchResultSet};

/// Scan a result set for `price.unit.amount` values and report the lowest.
///
/// Records without a usable amount are skipped silently; they still count
/// towards `results_count`.
pub fn extract_lowest_price(results: &SearchResultSet<'_>) -> PriceSummary {
    let mut results_count = 0;
    let mut prices = Vec::new();

    for record in results.records() {
        results_count += 1;
        if let Some(amount) = record.amount() {
            prices.push(amount);
        }
    }

    PriceSummary {
        lowest_price: prices.iter().copied().reduce(f64::min),
        prices_found: prices.len(),
        prices,
        results_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn summarize(value: &Value) -> PriceSummary {
        extract_lowest_price(&SearchResultSet::from_value(value))
    }

    fn listing(amount: Value) -> Value {
        json!({"name": "listing", "price": {"unit": {"amount": amount}}})
    }

    #[test]
    fn test_lowest_of_two_numeric_prices() {
        let summary = summarize(&json!({
            "results": [
                {"price": {"unit": {"amount": 120}}},
                {"price": {"unit": {"amount": 85.5}}}
            ]
        }));

        assert_eq!(summary.lowest_price, Some(85.5));
        assert_eq!(summary.prices, vec![120.0, 85.5]);
        assert_eq!(summary.prices_found, 2);
        assert_eq!(summary.results_count, 2);
    }

    #[test]
    fn test_record_without_price_is_counted_but_skipped() {
        let summary = summarize(&json!({"results": [{"name": "no price field"}]}));

        assert_eq!(summary.lowest_price, None);
        assert_eq!(summary.prices_found, 0);
        assert_eq!(summary.results_count, 1);
    }

    #[test]
    fn test_bare_empty_sequence() {
        let summary = summarize(&json!([]));

        assert_eq!(summary.lowest_price, None);
        assert_eq!(summary.results_count, 0);
        assert_eq!(summary.prices_found, 0);
    }

    #[test]
    fn test_null_amount_skipped_and_string_amount_parsed() {
        let summary = summarize(&json!({
            "results": [
                {"price": {"unit": {"amount": null}}},
                {"price": {"unit": {"amount": "99.99"}}}
            ]
        }));

        assert_eq!(summary.lowest_price, Some(99.99));
        assert_eq!(summary.prices_found, 1);
        assert_eq!(summary.results_count, 2);
    }

    #[test]
    fn test_unexpected_top_level_shape_is_empty() {
        let shapes = [json!("unexpected string"), json!(42), json!(true)];
        for value in shapes {
            let summary = summarize(&value);
            assert_eq!(summary.results_count, 0);
            assert_eq!(summary.prices_found, 0);
            assert_eq!(summary.lowest_price, None);
        }
    }

    #[test]
    fn test_bare_sequence_of_listings() {
        let summary = summarize(&json!([
            listing(json!(210)),
            {"name": "sold out"},
            listing(json!("175.25")),
            listing(json!("call us")),
        ]));

        assert_eq!(summary.prices, vec![210.0, 175.25]);
        assert_eq!(summary.lowest_price, Some(175.25));
        assert_eq!(summary.results_count, 4);
    }

    #[test]
    fn test_zero_is_a_valid_lowest_price() {
        let summary = summarize(&json!([listing(json!(0)), listing(json!(40))]));

        assert_eq!(summary.lowest_price, Some(0.0));
    }

    #[test]
    fn test_summary_invariants_hold_for_mixed_input() {
        let inputs = [
            json!([]),
            json!({"results": []}),
            json!([listing(json!(3)), listing(json!(1)), listing(json!(2))]),
            json!({"results": [listing(Value::Null), {"x": 1}, listing(json!("7"))]}),
            json!([listing(json!(-5.5)), listing(json!("-5.5")), "junk", 17]),
        ];

        for input in &inputs {
            let summary = summarize(input);

            assert_eq!(summary.prices_found, summary.prices.len());
            assert!(summary.prices_found <= summary.results_count);

            match summary.lowest_price {
                None => assert!(summary.prices.is_empty()),
                Some(lowest) => {
                    assert!(summary.prices.contains(&lowest));
                    assert!(summary.prices.iter().all(|p| lowest <= *p));
                }
            }
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let input = json!({"results": [listing(json!(64)), listing(json!("12.5")), {}]});
        let results = SearchResultSet::from_value(&input);

        let first = extract_lowest_price(&results);
        let second = extract_lowest_price(&results);
        assert_eq!(first, second);
    }
}
