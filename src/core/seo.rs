//! schema.org structured data for the landing page

use serde::Serialize;

use super::content::{ADVERTISED_RATING, BRAND_NAME, FEATURES, PAGE_DESCRIPTION};
use super::testimonials::{MAX_RATING, Rating, TestimonialStore};

pub const CANONICAL_URL: &str = "https://travelai.pro/";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebApplication<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    application_category: &'static str,
    operating_system: &'static str,
    description: &'static str,
    url: &'a str,
    feature_list: Vec<&'static str>,
    aggregate_rating: AggregateRating,
    review: Vec<Review>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregateRating {
    #[serde(rename = "@type")]
    kind: &'static str,
    rating_value: &'static str,
    best_rating: u8,
    review_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Review {
    #[serde(rename = "@type")]
    kind: &'static str,
    author: Person,
    review_body: &'static str,
    review_rating: ReviewRating,
}

#[derive(Debug, Serialize)]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRating {
    #[serde(rename = "@type")]
    kind: &'static str,
    rating_value: Rating,
    best_rating: u8,
}

/// JSON-LD document describing the app and its testimonials
pub fn structured_data(store: &TestimonialStore, url: &str) -> serde_json::Value {
    let review: Vec<Review> = store
        .iter()
        .map(|record| Review {
            kind: "Review",
            author: Person {
                kind: "Person",
                name: record.name,
            },
            review_body: record.text,
            review_rating: ReviewRating {
                kind: "Rating",
                rating_value: record.rating,
                best_rating: MAX_RATING,
            },
        })
        .collect();

    let document = WebApplication {
        context: "https://schema.org",
        kind: "WebApplication",
        name: BRAND_NAME,
        application_category: "TravelApplication",
        operating_system: "Web",
        description: PAGE_DESCRIPTION,
        url,
        feature_list: FEATURES.iter().map(|f| f.title).collect(),
        aggregate_rating: AggregateRating {
            kind: "AggregateRating",
            rating_value: ADVERTISED_RATING,
            best_rating: MAX_RATING,
            review_count: review.len(),
        },
        review,
    };

    serde_json::to_value(&document).unwrap_or(serde_json::Value::Null)
}

/// Structured data rendered as the body of a `<script type="application/ld+json">`
pub fn structured_data_script(store: &TestimonialStore, url: &str) -> String {
    // `</` inside a script body would end the element early
    structured_data(store, url).to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_header() {
        let json = structured_data(&TestimonialStore::builtin(), CANONICAL_URL);
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "WebApplication");
        assert_eq!(json["name"], BRAND_NAME);
        assert_eq!(json["url"], CANONICAL_URL);
        assert_eq!(json["featureList"].as_array().unwrap().len(), FEATURES.len());
    }

    #[test]
    fn test_one_review_per_testimonial() {
        let store = TestimonialStore::builtin();
        let json = structured_data(&store, CANONICAL_URL);
        let reviews = json["review"].as_array().unwrap();
        assert_eq!(reviews.len(), store.len().get());
        assert_eq!(reviews[0]["author"]["name"], "Priya Sharma");
        assert_eq!(reviews[0]["reviewRating"]["ratingValue"], 5);
        assert_eq!(json["aggregateRating"]["reviewCount"], store.len().get());
    }

    #[test]
    fn test_script_body_escapes_closing_tags() {
        let body = structured_data_script(&TestimonialStore::builtin(), "https://x.test/</script>");
        assert!(!body.contains("</"));
        assert!(body.starts_with('{'));
    }
}
