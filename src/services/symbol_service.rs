//! Symbol Service
//!
//! Handles symbol search against the quote provider.

use crate::error::Result;
use crate::provider::types::SymbolMatch;
use crate::state::AppState;
use tracing::info;

/// Shortest query that is sent to the provider
pub const MIN_QUERY_LEN: usize = 2;

/// Symbol service for business logic
pub struct SymbolService;

impl SymbolService {
    /// Search symbols by keywords
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] characters return no matches
    /// without a request; the text is sent as typed. Concurrent searches are not ordered against each
    /// other; the caller keeps whichever result it applies last.
    pub async fn search(state: &AppState, keywords: &str) -> Result<Vec<SymbolMatch>> {
        if keywords.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        info!("SymbolService::search - keywords={}", keywords);

        let matches = state.provider.search_symbols(keywords).await?;
        info!("{} matches for {}", matches.len(), keywords);

        Ok(matches)
    }
}
