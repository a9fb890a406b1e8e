// src/services/place_details.rs
// DOCUMENTATION: Place details presentation logic
// PURPOSE: Turn an upstream details result into photo URLs and "about" lines

use crate::services::google_maps_client::{GoogleMapsClient, PlaceDetails};
use crate::services::hours;

/// Maximum number of photo URLs returned per place
const MAX_PHOTOS: usize = 6;

/// Width requested for place photos
const PHOTO_MAX_WIDTH: u32 = 600;

/// Map a price level (0-4) to its display label.
pub fn price_level_label(level: i32) -> &'static str {
    match level {
        0 => "Free",
        1 => "Inexpensive",
        2 => "Moderate",
        3 => "Expensive",
        4 => "Very Expensive",
        _ => "N/A",
    }
}

/// Build up to [`MAX_PHOTOS`] photo URLs from a details result.
pub fn build_photo_urls(client: &GoogleMapsClient, details: &PlaceDetails) -> Vec<String> {
    details
        .photos
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|photo| photo.photo_reference.as_deref())
        .take(MAX_PHOTOS)
        .map(|reference| client.photo_url(reference, PHOTO_MAX_WIDTH))
        .collect()
}

/// Build the ordered "about" lines for a place.
///
/// Order is fixed: editorial summary, price level, website, phone,
/// compacted opening hours, rating summary. Lines whose source field is
/// absent upstream are skipped.
pub fn build_about(details: &PlaceDetails) -> Vec<String> {
    let mut about = Vec::new();

    if let Some(summary) = details
        .editorial_summary
        .as_ref()
        .and_then(|s| s.overview.as_deref())
    {
        if !summary.is_empty() {
            about.push(format!("📝 {}", summary));
        }
    }

    if let Some(level) = details.price_level {
        about.push(format!("💲 Price Level: {}", price_level_label(level)));
    }

    if let Some(website) = &details.website {
        about.push(format!("🌐 Website: {}", website));
    }

    if let Some(phone) = &details.formatted_phone_number {
        about.push(format!("📞 Phone: {}", phone));
    }

    if let Some(weekday_text) = details
        .opening_hours
        .as_ref()
        .and_then(|h| h.weekday_text.as_deref())
    {
        if !weekday_text.is_empty() {
            about.push(hours::compact(weekday_text));
        }
    }

    if let (Some(rating), Some(total)) = (details.rating, details.user_ratings_total) {
        about.push(format!("⭐ {}/5 from {} reviews", rating, total));
    }

    about
}
