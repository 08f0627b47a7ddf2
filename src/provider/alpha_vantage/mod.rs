//! Alpha Vantage quote provider adapter

pub mod parse;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::provider::types::*;
use crate::provider::QuoteProvider;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use url::Url;

/// Alpha Vantage provider implementation
pub struct AlphaVantageClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    intraday_interval: String,
}

impl AlphaVantageClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint()?,
            api_key: config.api_key.clone(),
            intraday_interval: config.intraday_interval.clone(),
        })
    }

    /// Build a `GET query?function=...` request; the API key goes last
    fn request(&self, function: &str, params: &[(&str, &str)]) -> RequestBuilder {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        query.push(("function", function));
        query.extend_from_slice(params);
        query.push(("apikey", self.api_key.as_str()));

        self.client.get(self.endpoint.clone()).query(&query)
    }

    /// Issue one request and return the raw body
    async fn fetch(&self, function: &str, params: &[(&str, &str)]) -> Result<String> {
        tracing::debug!("GET {} function={} params={:?}", self.endpoint, function, params);

        let response = self
            .request(function, params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    fn id(&self) -> &'static str {
        "alphavantage"
    }

    fn name(&self) -> &'static str {
        "Alpha Vantage"
    }

    async fn top_movers(&self) -> Result<TopMoversResponse> {
        let body = self.fetch("TOP_GAINERS_LOSERS", &[]).await?;
        parse::parse_top_movers(&body)
    }

    async fn overview(&self, symbol: &str) -> Result<StockOverview> {
        let body = self.fetch("OVERVIEW", &[("symbol", symbol)]).await?;
        Ok(parse::parse_overview(&body))
    }

    async fn time_series(&self, symbol: &str, kind: TimeSeriesKind) -> Result<TimeSeries> {
        let body = match kind {
            TimeSeriesKind::Intraday => {
                self.fetch(
                    kind.function(),
                    &[("symbol", symbol), ("interval", self.intraday_interval.as_str())],
                )
                .await?
            }
            TimeSeriesKind::Daily | TimeSeriesKind::Monthly => {
                self.fetch(kind.function(), &[("symbol", symbol)]).await?
            }
        };

        Ok(parse::parse_time_series(
            &body,
            &kind.response_key(&self.intraday_interval),
        ))
    }

    async fn search_symbols(&self, keywords: &str) -> Result<Vec<SymbolMatch>> {
        let body = self.fetch("SYMBOL_SEARCH", &[("keywords", keywords)]).await?;
        Ok(parse::parse_symbol_search(&body))
    }
}
