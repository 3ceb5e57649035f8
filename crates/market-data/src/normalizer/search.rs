//! Search adapter: raw search matches to canonical [`SymbolMatch`] records.

use crate::models::SymbolMatch;
use crate::provider::models::SearchResponse;

/// Map raw search quotes 1:1 into canonical matches.
///
/// Rows without a symbol are dropped; the display name falls back from short
/// name to long name to the symbol itself.
pub fn normalize_search(raw: SearchResponse) -> Vec<SymbolMatch> {
    raw.quotes
        .into_iter()
        .filter_map(|quote| {
            let symbol = quote.symbol?;
            let name = quote
                .shortname
                .or(quote.longname)
                .unwrap_or_else(|| symbol.clone());

            Some(SymbolMatch {
                symbol,
                name,
                instrument_type: quote.quote_type.unwrap_or_default(),
                market: quote.market.unwrap_or_default(),
                currency: quote.currency,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::models::SearchQuote;

    #[test]
    fn test_maps_fields_one_to_one() {
        let raw = SearchResponse {
            quotes: vec![SearchQuote {
                symbol: Some("AAPL".to_string()),
                shortname: Some("Apple Inc.".to_string()),
                longname: Some("Apple Incorporated".to_string()),
                quote_type: Some("EQUITY".to_string()),
                market: Some("us_market".to_string()),
                currency: Some("USD".to_string()),
            }],
        };

        let matches = normalize_search(raw);

        assert_eq!(
            matches,
            vec![SymbolMatch {
                symbol: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                instrument_type: "EQUITY".to_string(),
                market: "us_market".to_string(),
                currency: Some("USD".to_string()),
            }]
        );
    }

    #[test]
    fn test_name_falls_back_to_long_name_then_symbol() {
        let raw = SearchResponse {
            quotes: vec![
                SearchQuote {
                    symbol: Some("SHOP.TO".to_string()),
                    longname: Some("Shopify Inc.".to_string()),
                    ..Default::default()
                },
                SearchQuote {
                    symbol: Some("XYZ".to_string()),
                    ..Default::default()
                },
            ],
        };

        let matches = normalize_search(raw);

        assert_eq!(matches[0].name, "Shopify Inc.");
        assert_eq!(matches[1].name, "XYZ");
    }

    #[test]
    fn test_rows_without_symbol_are_dropped() {
        let raw = SearchResponse {
            quotes: vec![
                SearchQuote {
                    shortname: Some("Nameless".to_string()),
                    ..Default::default()
                },
                SearchQuote {
                    symbol: Some("AAPL".to_string()),
                    ..Default::default()
                },
            ],
        };

        let matches = normalize_search(raw);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].symbol, "AAPL");
    }

    #[test]
    fn test_empty_response_maps_to_empty_list() {
        assert!(normalize_search(SearchResponse::default()).is_empty());
    }
}
