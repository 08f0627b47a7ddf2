//! Response normalization for the Alpha Vantage `query` endpoint
//!
//! The provider's bodies are loosely shaped: arrays go missing, numbers
//! arrive as strings, and throttling is reported as a 200 with a notice
//! object. Everything here is total over the top-level shape; only a
//! malformed top-movers item is an error.

use crate::error::{AppError, Result};
use crate::provider::types::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const NOTICE_KEYS: [&str; 3] = ["Note", "Information", "Error Message"];

/// Parse the body, yielding `None` unless the root is a JSON object
fn root_object(body: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            if let Some(notice) = provider_notice(&map) {
                tracing::warn!("Provider notice: {}", notice);
            }
            Some(map)
        }
        Ok(_) => {
            tracing::warn!("Response root is not an object");
            None
        }
        Err(e) => {
            tracing::warn!("Response is not valid JSON: {}", e);
            None
        }
    }
}

/// Throttling or error message the provider embeds in an otherwise empty body
pub fn provider_notice(map: &Map<String, Value>) -> Option<&str> {
    NOTICE_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
}

/// Text of a string or other scalar value
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_field(item: &Map<String, Value>, list: &str, index: usize, field: &str) -> Result<String> {
    item.get(field).and_then(scalar_text).ok_or_else(|| {
        AppError::Decode(format!("{}[{}]: missing or non-scalar field `{}`", list, index, field))
    })
}

fn ticker_item(list: &str, index: usize, value: &Value) -> Result<TickerChangeItem> {
    let item = value
        .as_object()
        .ok_or_else(|| AppError::Decode(format!("{}[{}]: expected an object", list, index)))?;

    Ok(TickerChangeItem {
        ticker: required_field(item, list, index, "ticker")?,
        price: required_field(item, list, index, "price")?,
        change_amount: required_field(item, list, index, "change_amount")?,
        change_percentage: required_field(item, list, index, "change_percentage")?,
        volume: required_field(item, list, index, "volume")?,
    })
}

fn ticker_list(root: &Map<String, Value>, list: &str) -> Result<Vec<TickerChangeItem>> {
    match root.get(list) {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, value)| ticker_item(list, index, value))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Normalize a `TOP_GAINERS_LOSERS` body
///
/// Missing lists are empty; an item missing any of its five fields fails
/// the whole parse.
pub fn parse_top_movers(body: &str) -> Result<TopMoversResponse> {
    let Some(root) = root_object(body) else {
        return Ok(TopMoversResponse::default());
    };

    Ok(TopMoversResponse {
        metadata: root.get("metadata").and_then(scalar_text),
        last_updated: root.get("last_updated").and_then(scalar_text),
        top_gainers: ticker_list(&root, "top_gainers")?,
        top_losers: ticker_list(&root, "top_losers")?,
        most_actively_traded: ticker_list(&root, "most_actively_traded")?,
    })
}

/// Normalize an `OVERVIEW` body; every field is optional
pub fn parse_overview(body: &str) -> StockOverview {
    let Some(root) = root_object(body) else {
        return StockOverview::default();
    };
    let field = |key: &str| root.get(key).and_then(scalar_text);

    StockOverview {
        name: field("Name"),
        description: field("Description"),
        sector: field("Sector"),
        industry: field("Industry"),
        market_capitalization: field("MarketCapitalization"),
        pe_ratio: field("PERatio"),
        beta: field("Beta"),
        dividend_yield: field("DividendYield"),
        profit_margin: field("ProfitMargin"),
        week52_high: field("52WeekHigh"),
        week52_low: field("52WeekLow"),
    }
}

/// Normalize a `TIME_SERIES_*` body whose series sits under `series_key`
pub fn parse_time_series(body: &str, series_key: &str) -> TimeSeries {
    let Some(root) = root_object(body) else {
        return TimeSeries::default();
    };

    let Some(Value::Object(buckets)) = root.get(series_key) else {
        tracing::debug!("No `{}` in response", series_key);
        return TimeSeries::default();
    };

    let entries = buckets
        .iter()
        .filter_map(|(timestamp, bucket)| {
            let fields: BTreeMap<String, String> = bucket
                .as_object()?
                .iter()
                .filter_map(|(label, value)| Some((label.clone(), scalar_text(value)?)))
                .collect();
            Some((timestamp.clone(), fields))
        })
        .collect();

    TimeSeries { entries }
}

/// Normalize a `SYMBOL_SEARCH` body; missing keys become empty strings
pub fn parse_symbol_search(body: &str) -> Vec<SymbolMatch> {
    let Some(root) = root_object(body) else {
        return Vec::new();
    };

    let Some(Value::Array(matches)) = root.get("bestMatches") else {
        return Vec::new();
    };

    matches
        .iter()
        .map(|entry| {
            let field = |key: &str| {
                entry
                    .get(key)
                    .and_then(scalar_text)
                    .unwrap_or_default()
            };

            SymbolMatch {
                symbol: field("1. symbol"),
                name: field("2. name"),
                kind: field("3. type"),
                region: field("4. region"),
                currency: field("8. currency"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json(ticker: &str) -> String {
        format!(
            r#"{{"ticker":"{}","price":"10.5","change_amount":"1.5","change_percentage":"16.67%","volume":"12345"}}"#,
            ticker
        )
    }

    #[test]
    fn test_top_movers_keeps_counts_and_order() {
        let body = format!(
            r#"{{"metadata":"Top gainers, losers, and most actively traded US tickers",
                "last_updated":"2024-05-10 16:15:59 US/Eastern",
                "top_gainers":[{},{},{}],
                "top_losers":[{},{}],
                "most_actively_traded":[]}}"#,
            item_json("AAA"),
            item_json("BBB"),
            item_json("CCC"),
            item_json("XXX"),
            item_json("YYY")
        );

        let movers = parse_top_movers(&body).unwrap();
        let gainers: Vec<&str> = movers.top_gainers.iter().map(|i| i.ticker.as_str()).collect();
        let losers: Vec<&str> = movers.top_losers.iter().map(|i| i.ticker.as_str()).collect();

        assert_eq!(gainers, vec!["AAA", "BBB", "CCC"]);
        assert_eq!(losers, vec!["XXX", "YYY"]);
        assert!(movers.most_actively_traded.is_empty());
        assert_eq!(movers.last_updated.as_deref(), Some("2024-05-10 16:15:59 US/Eastern"));

        let first = &movers.top_gainers[0];
        assert_eq!(first.price, "10.5");
        assert_eq!(first.change_amount, "1.5");
        assert_eq!(first.change_percentage, "16.67%");
        assert_eq!(first.volume, "12345");
    }

    #[test]
    fn test_top_movers_missing_losers_is_empty() {
        let body = format!(r#"{{"top_gainers":[{}]}}"#, item_json("AAA"));
        let movers = parse_top_movers(&body).unwrap();

        assert_eq!(movers.top_gainers.len(), 1);
        assert!(movers.top_losers.is_empty());
        assert!(movers.most_actively_traded.is_empty());
        assert!(movers.metadata.is_none());
    }

    #[test]
    fn test_top_movers_non_array_list_is_empty() {
        let movers = parse_top_movers(r#"{"top_gainers":"none","top_losers":null}"#).unwrap();
        assert!(movers.top_gainers.is_empty());
        assert!(movers.top_losers.is_empty());
    }

    #[test]
    fn test_top_movers_missing_item_field_fails() {
        let body = r#"{"top_gainers":[{"ticker":"AAA","price":"1","change_amount":"0.1","change_percentage":"10%"}]}"#;
        let err = parse_top_movers(body).unwrap_err();

        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_top_movers_numeric_fields_accepted() {
        let body = r#"{"top_losers":[{"ticker":"AAA","price":1.25,"change_amount":-0.5,"change_percentage":"-28.57%","volume":900}]}"#;
        let movers = parse_top_movers(body).unwrap();

        assert_eq!(movers.top_losers[0].price, "1.25");
        assert_eq!(movers.top_losers[0].volume, "900");
    }

    #[test]
    fn test_top_movers_wrong_root_is_default() {
        assert_eq!(parse_top_movers("[]").unwrap(), TopMoversResponse::default());
        assert_eq!(parse_top_movers("").unwrap(), TopMoversResponse::default());
        assert_eq!(parse_top_movers("null").unwrap(), TopMoversResponse::default());
    }

    #[test]
    fn test_throttle_notice_parses_as_empty() {
        let body = r#"{"Information":"Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}"#;
        assert_eq!(parse_top_movers(body).unwrap(), TopMoversResponse::default());

        let map: Map<String, Value> = serde_json::from_str(body).unwrap();
        assert!(provider_notice(&map).unwrap().starts_with("Thank you"));
    }

    #[test]
    fn test_overview_optional_fields() {
        let body = r#"{"Symbol":"IBM","Name":"International Business Machines","Sector":"TECHNOLOGY",
                       "PERatio":"22.5","52WeekHigh":"199.18","Beta":0.71,"Description":null}"#;
        let overview = parse_overview(body);

        assert_eq!(overview.name.as_deref(), Some("International Business Machines"));
        assert_eq!(overview.sector.as_deref(), Some("TECHNOLOGY"));
        assert_eq!(overview.pe_ratio.as_deref(), Some("22.5"));
        assert_eq!(overview.week52_high.as_deref(), Some("199.18"));
        assert_eq!(overview.beta.as_deref(), Some("0.71"));
        assert!(overview.description.is_none());
        assert!(overview.week52_low.is_none());
        assert!(overview.industry.is_none());
    }

    #[test]
    fn test_overview_wrong_root_is_default() {
        assert_eq!(parse_overview("\"IBM\""), StockOverview::default());
        assert_eq!(parse_overview("{}"), StockOverview::default());
    }

    #[test]
    fn test_time_series_under_key() {
        let body = r#"{
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (Daily)": {
                "2024-05-10": {"1. open": "167.1", "4. close": "167.15"},
                "2024-05-09": {"1. open": "167.5", "4. close": "166.27"},
                "2024-05-08": "garbage"
            }
        }"#;
        let series = parse_time_series(body, "Time Series (Daily)");

        assert_eq!(series.len(), 2);
        let keys: Vec<&String> = series.entries.keys().collect();
        assert_eq!(keys, vec!["2024-05-09", "2024-05-10"]);
        assert_eq!(series.entries["2024-05-10"]["4. close"], "167.15");
    }

    #[test]
    fn test_time_series_wrong_key_is_empty() {
        let body = r#"{"Time Series (Daily)": {"2024-05-10": {"4. close": "1"}}}"#;
        assert!(parse_time_series(body, "Monthly Time Series").is_empty());
        assert!(parse_time_series("not json", "Monthly Time Series").is_empty());
    }

    #[test]
    fn test_symbol_search_partial_keys() {
        let body = r#"{"bestMatches":[{"1. symbol":"IBM","2. name":"IBM Corp"}]}"#;
        let matches = parse_symbol_search(body);

        assert_eq!(
            matches,
            vec![SymbolMatch {
                symbol: "IBM".to_string(),
                name: "IBM Corp".to_string(),
                kind: String::new(),
                region: String::new(),
                currency: String::new(),
            }]
        );
    }

    #[test]
    fn test_symbol_search_full_entry() {
        let body = r#"{"bestMatches":[{"1. symbol":"TSCO.LON","2. name":"Tesco PLC","3. type":"Equity",
            "4. region":"United Kingdom","5. marketOpen":"08:00","6. marketClose":"16:30",
            "7. timezone":"UTC+01","8. currency":"GBX","9. matchScore":"0.7273"}]}"#;
        let matches = parse_symbol_search(body);

        assert_eq!(matches[0].kind, "Equity");
        assert_eq!(matches[0].region, "United Kingdom");
        assert_eq!(matches[0].currency, "GBX");
    }

    #[test]
    fn test_symbol_search_never_fails() {
        assert!(parse_symbol_search("{}").is_empty());
        assert!(parse_symbol_search(r#"{"bestMatches":null}"#).is_empty());
        assert!(parse_symbol_search("oops").is_empty());

        let matches = parse_symbol_search(r#"{"bestMatches":[42]}"#);
        assert_eq!(matches, vec![SymbolMatch::default()]);
    }
}
