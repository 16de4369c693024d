use serde::Serialize;
use serde_json::{Map, Value};

/// Path to a listing's nightly amount inside a scraped record.
const AMOUNT_PATH: [&str; 3] = ["price", "unit", "amount"];

/// Raw scraper output, classified once at the boundary.
///
/// Scrapers return either `{"results": [...]}` or a bare list; anything else
/// is treated as an empty result set.
#[derive(Debug, Clone, Copy)]
pub enum SearchResultSet<'a> {
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    Other,
}

impl<'a> SearchResultSet<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(map),
            Value::Array(items) => Self::Sequence(items),
            _ => Self::Other,
        }
    }

    /// Listing records in encounter order.
    ///
    /// A mapping without a `results` list yields no records.
    pub fn records(&self) -> impl Iterator<Item = ListingRecord<'a>> {
        let items: &'a [Value] = match *self {
            Self::Mapping(map) => map
                .get("results")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            Self::Sequence(items) => items,
            Self::Other => &[],
        };
        items.iter().map(ListingRecord)
    }
}

/// One scraped search result. Shape is not trusted.
#[derive(Debug, Clone, Copy)]
pub struct ListingRecord<'a>(pub &'a Value);

impl ListingRecord<'_> {
    /// `price.unit.amount` as a number, if present and numeric.
    pub fn amount(&self) -> Option<f64> {
        lookup(self.0, &AMOUNT_PATH).and_then(parse_amount)
    }
}

/// Walk nested objects by key. Non-objects and missing keys yield `None`.
fn lookup<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    let mut current = value;
    for key in path {
        current = current.get(*key)?;
    }
    Some(current)
}

/// Numbers are taken as-is, strings are parsed. Non-finite values are dropped
/// so they can never win the minimum or leak into JSON output.
fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}

/// Lowest-price summary of one result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    pub lowest_price: Option<f64>,
    pub prices: Vec<f64>,
    pub results_count: usize,
    pub prices_found: usize,
}
