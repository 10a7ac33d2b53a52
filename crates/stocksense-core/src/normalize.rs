use std::collections::BTreeMap;

use crate::{AnalysisError, PricePoint, PriceSeries};

/// Normalize raw provider price records into a canonical series.
///
/// Records may arrive unsorted and may repeat a timestamp; the
/// latest-received record per timestamp wins. Fails when fewer than
/// `min_points` distinct points remain, since no configured indicator
/// could compute on the result.
pub fn normalize_series(
    raw: Vec<PricePoint>,
    min_points: usize,
) -> Result<PriceSeries, AnalysisError> {
    let provided = raw.len();

    let mut by_timestamp: BTreeMap<_, PricePoint> = BTreeMap::new();
    for point in raw {
        by_timestamp.insert(point.ts, point);
    }

    let distinct = by_timestamp.len();
    if distinct < min_points {
        return Err(AnalysisError::InsufficientData {
            context: "price series",
            required: min_points,
            // Report the deduplicated count when duplicates were dropped,
            // otherwise the raw count the caller sent.
            provided: distinct.min(provided),
        });
    }

    Ok(PriceSeries::from_sorted(
        by_timestamp.into_values().collect(),
    ))
}
