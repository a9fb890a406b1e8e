// src/services/category_resolver.rs
// DOCUMENTATION: Category resolution and deduplication pipeline
// PURPOSE: Run a keyword's search plan upstream and merge results into
// one deduplicated, category-labeled place listing

use crate::errors::ScoutError;
use crate::models::{Location, PlaceRecord};
use crate::services::google_maps_client::{NearbySearch, RawPlace};
use crate::services::search_plan::{plan_for, SubQuerySpec};
use indexmap::IndexMap;

/// Resolves a user keyword into a deduplicated place listing.
///
/// Labeling policy is search-driven: every place takes the category its
/// sub-query declares, with one fixed override (places tagged "bakery"
/// upstream are labeled "cafe"). Sub-queries run sequentially in plan
/// order; when the same place recurs, the later sub-query replaces the
/// stored record in place, so its category wins while the result keeps
/// its first-insertion position.
pub struct CategoryResolver<'a, C: NearbySearch> {
    upstream: &'a C,
    /// When true, a failed sub-query is logged and skipped instead of
    /// failing the whole request. Default is fail-fast.
    partial_results: bool,
}

impl<'a, C: NearbySearch> CategoryResolver<'a, C> {
    pub fn new(upstream: &'a C, partial_results: bool) -> Self {
        Self {
            upstream,
            partial_results,
        }
    }

    /// Resolve a keyword around a point into normalized place records.
    pub async fn resolve(
        &self,
        keyword: &str,
        location: Location,
    ) -> Result<Vec<PlaceRecord>, ScoutError> {
        if keyword.trim().is_empty() {
            return Err(ScoutError::InvalidArgument(
                "Keyword is required".to_string(),
            ));
        }

        let plan = plan_for(keyword);
        let mut merged: IndexMap<String, PlaceRecord> = IndexMap::new();
        let mut failed_sub_queries = 0usize;

        for spec in &plan {
            let places = match self
                .upstream
                .nearby_search(location, spec.radius, &spec.keyword, spec.place_type.as_deref())
                .await
            {
                Ok(places) => places,
                Err(e) if self.partial_results => {
                    log::warn!(
                        "Sub-query '{}' failed, continuing without it: {}",
                        spec.keyword,
                        e
                    );
                    failed_sub_queries += 1;
                    continue;
                }
                Err(e) => return Err(ScoutError::SearchUnavailable(e.to_string())),
            };

            for raw in places {
                let record = normalize(raw, spec);
                // IndexMap::insert replaces the value but keeps the
                // original insertion position, which is exactly the
                // "later sub-query wins" precedence we need.
                merged.insert(record.dedup_key(), record);
            }
        }

        if failed_sub_queries == plan.len() {
            return Err(ScoutError::SearchUnavailable(
                "all sub-queries failed".to_string(),
            ));
        }

        Ok(merged.into_values().collect())
    }
}

/// Normalize a raw upstream place into the client-facing record shape.
fn normalize(raw: RawPlace, spec: &SubQuerySpec) -> PlaceRecord {
    let category = if raw.types.iter().any(|t| t == "bakery") {
        "cafe".to_string()
    } else {
        spec.category.clone()
    };

    PlaceRecord {
        name: raw.name.unwrap_or_else(|| "N/A".to_string()),
        address: raw.vicinity.unwrap_or_else(|| "N/A".to_string()),
        rating: raw.rating,
        total_ratings: raw.user_ratings_total.unwrap_or(0),
        open_now: raw.opening_hours.as_ref().and_then(|h| h.open_now),
        place_id: raw.place_id,
        location: raw.geometry.map(|g| g.location).unwrap_or_default(),
        category,
        icon: raw.icon,
        icon_base: raw.icon_mask_base_uri,
        icon_bg: raw.icon_background_color,
        price_level: raw.price_level,
        types: raw.types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::google_maps_client::{RawGeometry, RawOpeningHours, UpstreamError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct RecordedCall {
        keyword: String,
        radius: u32,
        place_type: Option<String>,
    }

    /// In-memory upstream: canned results per sub-query keyword, plus a
    /// call log for asserting the issued plan.
    struct FakeUpstream {
        responses: HashMap<String, Result<Vec<RawPlace>, String>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl FakeUpstream {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_places(mut self, keyword: &str, places: Vec<RawPlace>) -> Self {
            self.responses.insert(keyword.to_string(), Ok(places));
            self
        }

        fn with_failure(mut self, keyword: &str) -> Self {
            self.responses
                .insert(keyword.to_string(), Err("boom".to_string()));
            self
        }

        fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NearbySearch for FakeUpstream {
        async fn nearby_search(
            &self,
            _location: Location,
            radius: u32,
            keyword: &str,
            place_type: Option<&str>,
        ) -> Result<Vec<RawPlace>, UpstreamError> {
            self.calls.lock().unwrap().push(RecordedCall {
                keyword: keyword.to_string(),
                radius,
                place_type: place_type.map(|t| t.to_string()),
            });

            match self.responses.get(keyword) {
                Some(Ok(places)) => Ok(places.clone()),
                Some(Err(msg)) => Err(UpstreamError::Api {
                    status: "UNKNOWN_ERROR".to_string(),
                    message: msg.clone(),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    fn raw_place(place_id: Option<&str>, name: &str, types: &[&str]) -> RawPlace {
        RawPlace {
            name: Some(name.to_string()),
            vicinity: Some("Av. Larco 345".to_string()),
            rating: Some(4.2),
            user_ratings_total: Some(50),
            opening_hours: Some(RawOpeningHours {
                open_now: Some(true),
                weekday_text: None,
            }),
            place_id: place_id.map(|s| s.to_string()),
            geometry: Some(RawGeometry {
                location: Location {
                    lat: -12.12,
                    lng: -77.03,
                },
            }),
            icon: None,
            icon_mask_base_uri: None,
            icon_background_color: None,
            price_level: Some(1),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_keyword_is_rejected() {
        let upstream = FakeUpstream::new();
        let resolver = CategoryResolver::new(&upstream, false);

        let err = resolver.resolve("  ", Location::default()).await.unwrap_err();
        assert!(matches!(err, ScoutError::InvalidArgument(_)));
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_keyword_issues_exactly_one_sub_query() {
        let upstream =
            FakeUpstream::new().with_places("laundry", vec![raw_place(Some("a"), "Lavandería", &[])]);
        let resolver = CategoryResolver::new(&upstream, false);

        let results = resolver
            .resolve("laundry", Location::default())
            .await
            .unwrap();

        let calls = upstream.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].keyword, "laundry");
        assert_eq!(calls[0].radius, 1000);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, "laundry");
    }

    #[tokio::test]
    async fn test_food_categories_are_drawn_from_fixed_set() {
        let upstream = FakeUpstream::new()
            .with_places("bakery", vec![raw_place(Some("b1"), "Panadería", &["bakery"])])
            .with_places("cafe", vec![raw_place(Some("c1"), "Café Verde", &["cafe"])])
            .with_places(
                "restaurant",
                vec![raw_place(Some("r1"), "La Mar", &["restaurant"])],
            )
            .with_places(
                "fast food",
                vec![raw_place(Some("f1"), "Bembos", &["restaurant"])],
            );
        let resolver = CategoryResolver::new(&upstream, false);

        let results = resolver.resolve("food", Location::default()).await.unwrap();

        assert_eq!(results.len(), 4);
        for record in &results {
            assert!(
                ["cafe", "restaurant", "fast_food"].contains(&record.category.as_str()),
                "unexpected category {}",
                record.category
            );
        }
    }

    #[tokio::test]
    async fn test_bakery_tagged_places_are_labeled_cafe() {
        let upstream = FakeUpstream::new().with_places(
            "restaurant",
            vec![raw_place(Some("x"), "Pan y Más", &["bakery", "food"])],
        );
        let resolver = CategoryResolver::new(&upstream, false);

        let results = resolver
            .resolve("restaurant", Location::default())
            .await
            .unwrap();
        assert_eq!(results[0].category, "cafe");
    }

    #[tokio::test]
    async fn test_duplicate_place_id_keeps_later_sub_query_category() {
        // Same place found via both "hostel" and "hotel"; "lodging" order
        // means the later sub-query's label must win while the record
        // keeps its first-insertion position.
        let upstream = FakeUpstream::new()
            .with_places(
                "hostel",
                vec![
                    raw_place(Some("dup"), "Casa Nómada", &["lodging"]),
                    raw_place(Some("other"), "Backpackers Inn", &["lodging"]),
                ],
            )
            .with_places("hotel", vec![raw_place(Some("dup"), "Casa Nómada", &["lodging"])]);
        let resolver = CategoryResolver::new(&upstream, false);

        let results = resolver.resolve("hostel", Location::default()).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].place_id.as_deref(), Some("dup"));
        assert_eq!(results[0].category, "hotel");
        assert_eq!(results[1].place_id.as_deref(), Some("other"));
    }

    #[tokio::test]
    async fn test_places_without_place_id_dedup_by_name_and_address() {
        let upstream = FakeUpstream::new()
            .with_places("hostel", vec![raw_place(None, "Sin ID Hostal", &[])])
            .with_places("hotel", vec![raw_place(None, "Sin ID Hostal", &[])]);
        let resolver = CategoryResolver::new(&upstream, false);

        let results = resolver.resolve("hostel", Location::default()).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, "hotel");
    }

    #[tokio::test]
    async fn test_sub_query_failure_aborts_request_by_default() {
        let upstream = FakeUpstream::new()
            .with_places("hostel", vec![raw_place(Some("a"), "Casa Nómada", &[])])
            .with_failure("hotel");
        let resolver = CategoryResolver::new(&upstream, false);

        let err = resolver
            .resolve("hostel", Location::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::SearchUnavailable(_)));
    }

    #[tokio::test]
    async fn test_partial_results_mode_skips_failed_sub_queries() {
        let upstream = FakeUpstream::new()
            .with_places("hostel", vec![raw_place(Some("a"), "Casa Nómada", &[])])
            .with_failure("hotel")
            .with_places("lodging", vec![raw_place(Some("b"), "Hotel B", &[])]);
        let resolver = CategoryResolver::new(&upstream, true);

        let results = resolver.resolve("hostel", Location::default()).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_partial_results_mode_still_errors_when_everything_fails() {
        let upstream = FakeUpstream::new().with_failure("laundry");
        let resolver = CategoryResolver::new(&upstream, true);

        let err = resolver
            .resolve("laundry", Location::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::SearchUnavailable(_)));
    }
}
