//! Domain models shared by the services and the watchlist store

use crate::provider::types::TickerChangeItem;
use serde::{Deserialize, Serialize};

/// A stock as shown in lists, details and watchlists
///
/// Equality is structural over all fields; watchlists rely on it to
/// suppress duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// Display string such as `+1.23%`
    pub change: String,
}

impl Stock {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        change: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change: change.into(),
        }
    }

    /// Map a top-movers entry; the provider has no company name there, so the
    /// ticker doubles as the name.
    pub fn from_ticker(item: &TickerChangeItem) -> Self {
        Self {
            symbol: item.ticker.clone(),
            name: item.ticker.clone(),
            price: item
                .price
                .trim()
                .parse()
                .ok()
                .filter(|price: &f64| price.is_finite())
                .unwrap_or(0.0),
            change: item.change_percentage.clone(),
        }
    }

    /// Prices must be finite to compare equal to themselves and to survive
    /// a JSON round trip
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite()
    }

    /// Whether the change should render as an upward move
    pub fn is_rising(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// A user-named list of stocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub stocks: Vec<Stock>,
}

impl Watchlist {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stocks: Vec::new(),
        }
    }

    pub fn contains(&self, stock: &Stock) -> bool {
        self.stocks.contains(stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(price: &str, change: &str) -> TickerChangeItem {
        TickerChangeItem {
            ticker: "NVDA".to_string(),
            price: price.to_string(),
            change_amount: "1.5".to_string(),
            change_percentage: change.to_string(),
            volume: "1000".to_string(),
        }
    }

    #[test]
    fn test_from_ticker() {
        let stock = Stock::from_ticker(&ticker("120.45", "+3.21%"));
        assert_eq!(stock.symbol, "NVDA");
        assert_eq!(stock.name, "NVDA");
        assert_eq!(stock.price, 120.45);
        assert_eq!(stock.change, "+3.21%");
        assert!(stock.is_rising());
    }

    #[test]
    fn test_from_ticker_bad_price_falls_back_to_zero() {
        let stock = Stock::from_ticker(&ticker("n/a", "-0.5%"));
        assert_eq!(stock.price, 0.0);
        assert!(!stock.is_rising());
    }

    #[test]
    fn test_from_ticker_non_finite_price_falls_back_to_zero() {
        for raw in ["NaN", "inf", "-inf", "infinity"] {
            let stock = Stock::from_ticker(&ticker(raw, "+0.1%"));
            assert_eq!(stock.price, 0.0, "price {}", raw);
            assert!(stock.has_valid_price());
            assert_eq!(stock, stock.clone());
        }
    }

    #[test]
    fn test_watchlist_json_shape() {
        let json = r#"[{"id":1,"name":"Tech"},{"id":2,"name":"Banks","stocks":[{"symbol":"JPM","name":"JPM","price":201.5,"change":"+0.4%"}]}]"#;
        let lists: Vec<Watchlist> = serde_json::from_str(json).unwrap();

        assert!(lists[0].stocks.is_empty());
        assert!(lists[1].contains(&Stock::new("JPM", "JPM", 201.5, "+0.4%")));
        assert!(!lists[1].contains(&Stock::new("JPM", "JPM", 201.6, "+0.4%")));
    }
}
