// src/services/search_plan.rs
// DOCUMENTATION: Keyword-to-sub-query expansion
// PURPOSE: Map a user keyword to the ordered upstream sub-queries to run

/// Keywords that get the wider 2000m default radius when searched directly
const WIDE_RADIUS_KEYWORDS: [&str; 3] = ["supermarket", "food", "restaurant"];

/// One upstream nearby-search call issued while resolving a user keyword
/// DOCUMENTATION: Plan order matters: when the same place shows up in
/// more than one sub-query, the later sub-query's category wins.
#[derive(Debug, Clone, PartialEq)]
pub struct SubQuerySpec {
    /// Text sent to the upstream nearby search
    pub keyword: String,
    /// Category label assigned to places this sub-query returns
    pub category: String,
    /// Search radius in meters
    pub radius: u32,
    /// Optional upstream type filter
    pub place_type: Option<String>,
}

impl SubQuerySpec {
    fn new(keyword: &str, category: &str, radius: u32, place_type: Option<&str>) -> Self {
        Self {
            keyword: keyword.to_string(),
            category: category.to_string(),
            radius,
            place_type: place_type.map(|t| t.to_string()),
        }
    }
}

/// Build the ordered search plan for a user keyword.
///
/// Compound keywords (food, supermarket, pharmacy, hostel, sim) expand to
/// several sub-queries covering their underlying categories; everything
/// else runs a single sub-query with the keyword as its own category.
/// Matching is case-insensitive.
pub fn plan_for(keyword: &str) -> Vec<SubQuerySpec> {
    match keyword.to_lowercase().as_str() {
        // Bakeries are surfaced under the food search but labeled as cafes
        "food" => vec![
            SubQuerySpec::new("bakery", "cafe", 2000, Some("bakery")),
            SubQuerySpec::new("cafe", "cafe", 2000, None),
            SubQuerySpec::new("restaurant", "restaurant", 2000, None),
            SubQuerySpec::new("fast food", "fast_food", 2000, None),
        ],
        "supermarket" => vec![
            SubQuerySpec::new("supermarket", "supermarket", 2000, Some("supermarket")),
            SubQuerySpec::new(
                "convenience store",
                "convenience store",
                2000,
                Some("convenience_store"),
            ),
            SubQuerySpec::new("local market", "local market", 2000, Some("farmers_market")),
        ],
        "pharmacy" => vec![
            SubQuerySpec::new("pharmacy", "pharmacy", 1000, Some("pharmacy")),
            SubQuerySpec::new("drugstore", "pharmacy", 1000, Some("drugstore")),
        ],
        // Slightly bigger radius for accommodations
        "hostel" => vec![
            SubQuerySpec::new("hostel", "hostel", 1500, None),
            SubQuerySpec::new("hotel", "hotel", 1500, None),
            SubQuerySpec::new("lodging", "lodging", 1500, None),
        ],
        "sim" => vec![
            SubQuerySpec::new("sim card", "sim", 1000, None),
            SubQuerySpec::new("mobile phone store", "sim", 1000, None),
        ],
        other => {
            let radius = if WIDE_RADIUS_KEYWORDS.contains(&other) {
                2000
            } else {
                1000
            };
            vec![SubQuerySpec::new(other, other, radius, None)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_keyword_gets_single_sub_query() {
        let plan = plan_for("laundry");
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].keyword, "laundry");
        assert_eq!(plan[0].category, "laundry");
        assert_eq!(plan[0].radius, 1000);
        assert!(plan[0].place_type.is_none());
    }

    #[test]
    fn test_wide_radius_keywords() {
        assert_eq!(plan_for("restaurant")[0].radius, 2000);
        assert_eq!(plan_for("atm")[0].radius, 1000);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert_eq!(plan_for("FOOD"), plan_for("food"));
        assert_eq!(plan_for("Hostel").len(), 3);
    }

    #[test]
    fn test_food_plan_labels() {
        let plan = plan_for("food");
        let labels: Vec<&str> = plan.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(labels, vec!["cafe", "cafe", "restaurant", "fast_food"]);
        // The bakery sub-query is declared first so later labels win
        assert_eq!(plan[0].keyword, "bakery");
        assert_eq!(plan[0].place_type.as_deref(), Some("bakery"));
    }

    #[test]
    fn test_hostel_plan_uses_accommodation_radius() {
        let plan = plan_for("hostel");
        assert!(plan.iter().all(|s| s.radius == 1500));
        let labels: Vec<&str> = plan.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(labels, vec!["hostel", "hotel", "lodging"]);
    }

    #[test]
    fn test_supermarket_plan_type_filters() {
        let plan = plan_for("supermarket");
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[1].place_type.as_deref(), Some("convenience_store"));
        assert_eq!(plan[2].category, "local market");
    }
}
