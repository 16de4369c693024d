//! Canned scraper output.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const SEARCH_URL: &str = "https://www.airbnb.co.uk/s/London/homes?checkin=2025-06-01&checkout=2025-06-04";

/// One listing in the shape the Airbnb scraper returns.
pub fn listing(name: &str, amount: Value) -> Value {
    json!({
        "name": name,
        "url": format!("https://www.airbnb.co.uk/rooms/{}", name.len()),
        "price": {
            "label": "per night",
            "unit": {"amount": amount, "currency_symbol": "£", "qualifier": "night"}
        }
    })
}

/// `{"results": [...]}` with two priced listings, lowest 85.5.
pub fn two_priced_results() -> Value {
    json!({
        "results": [
            {"price": {"unit": {"amount": 120}}},
            {"price": {"unit": {"amount": 85.5}}}
        ]
    })
}

/// A bare list where only some listings carry a usable price.
pub fn mixed_listings() -> Value {
    json!([
        listing("Canal boat", json!(149)),
        {"name": "Unpriced cottage"},
        listing("Studio", json!("92.40")),
        listing("Penthouse", Value::Null),
        listing("Mews house", json!("price on request")),
    ])
}
