use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DELIVERY_SPEED: &str = "Standard";

/// Product categories accepted by the scoring service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Furniture,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Furniture,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Furniture => "Furniture",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Packaging {
    Plastic,
    Cardboard,
    Recycled,
}

impl Packaging {
    pub const ALL: [Packaging; 3] = [Packaging::Plastic, Packaging::Cardboard, Packaging::Recycled];

    pub fn name(&self) -> &'static str {
        match self {
            Packaging::Plastic => "Plastic",
            Packaging::Cardboard => "Cardboard",
            Packaging::Recycled => "Recycled",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryMethod {
    Air,
    Sea,
    Road,
}

impl DeliveryMethod {
    pub const ALL: [DeliveryMethod; 3] =
        [DeliveryMethod::Air, DeliveryMethod::Sea, DeliveryMethod::Road];

    pub fn name(&self) -> &'static str {
        match self {
            DeliveryMethod::Air => "Air",
            DeliveryMethod::Sea => "Sea",
            DeliveryMethod::Road => "Road",
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_by_name!(Category, Packaging, DeliveryMethod);

/// Request body for both scoring endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub category: Category,
    pub origin_country: String,
    pub weight_kg: f64,
    pub packaging: Packaging,
    pub delivery_method: DeliveryMethod,
    pub delivery_distance_km: f64,
    #[serde(default = "default_delivery_speed")]
    pub delivery_speed: String,
}

fn default_delivery_speed() -> String {
    DEFAULT_DELIVERY_SPEED.to_string()
}

/// Body of `POST /get-alternatives`: either a full product or a catalog id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativesRequest {
    ProductInput(ProductInput),
    ProductIdInput { product_id: i64 },
}

impl AlternativesRequest {
    pub fn for_product(input: ProductInput) -> Self {
        Self::ProductInput(input)
    }

    pub fn for_catalog_id(product_id: i64) -> Self {
        Self::ProductIdInput { product_id }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub carbon_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub product_name: String,
    pub carbon_score: f64,
    pub category: String,
    pub origin_country: String,
    pub delivery_method: String,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub delivery_distance_km: Option<f64>,
    #[serde(default)]
    pub delivery_speed: Option<String>,
    #[serde(default)]
    pub is_predicted_score: bool,
}

/// Catalog entry the service echoes back when asked about a known product id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub product_id: i64,
    pub product_name: String,
    pub carbon_score: f64,
    pub category: String,
    pub origin_country: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub packaging: Option<String>,
    pub delivery_method: String,
    #[serde(default)]
    pub delivery_distance_km: Option<f64>,
    #[serde(default)]
    pub delivery_speed: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativesResult {
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub original_product_id: Option<i64>,
    #[serde(default)]
    pub original_product_details: Option<CatalogProduct>,
    #[serde(default)]
    pub original_product_carbon_score: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Formats a carbon score the way every result panel shows it.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_input() -> ProductInput {
        ProductInput {
            category: Category::Electronics,
            origin_country: "China".to_string(),
            weight_kg: 2.5,
            packaging: Packaging::Cardboard,
            delivery_method: DeliveryMethod::Air,
            delivery_distance_km: 500.0,
            delivery_speed: DEFAULT_DELIVERY_SPEED.to_string(),
        }
    }

    #[test]
    fn product_input_serializes_with_service_field_names() {
        let value = serde_json::to_value(sample_input()).unwrap();
        assert_eq!(
            value,
            json!({
                "category": "Electronics",
                "origin_country": "China",
                "weight_kg": 2.5,
                "packaging": "Cardboard",
                "delivery_method": "Air",
                "delivery_distance_km": 500.0,
                "delivery_speed": "Standard",
            })
        );
    }

    #[test]
    fn missing_delivery_speed_defaults_to_standard() {
        let input: ProductInput = serde_json::from_value(json!({
            "category": "Food",
            "origin_country": "Peru",
            "weight_kg": 1.0,
            "packaging": "Recycled",
            "delivery_method": "Sea",
            "delivery_distance_km": 9000,
        }))
        .unwrap();
        assert_eq!(input.delivery_speed, "Standard");
    }

    #[test]
    fn alternatives_request_wraps_payload_under_tag() {
        let wrapped = serde_json::to_value(AlternativesRequest::for_product(sample_input())).unwrap();
        assert_eq!(wrapped["product_input"]["origin_country"], "China");

        let by_id = serde_json::to_value(AlternativesRequest::for_catalog_id(1001)).unwrap();
        assert_eq!(by_id, json!({ "product_id_input": { "product_id": 1001 } }));
    }

    #[test]
    fn alternatives_result_accepts_minimal_and_full_payloads() {
        let minimal: AlternativesResult = serde_json::from_value(json!({
            "alternatives": [{
                "product_name": "EcoPhone",
                "carbon_score": 4.2,
                "category": "Electronics",
                "origin_country": "Germany",
                "delivery_method": "Road",
            }]
        }))
        .unwrap();
        assert_eq!(minimal.alternatives.len(), 1);
        assert!(minimal.message.is_none());
        assert!(!minimal.alternatives[0].is_predicted_score);

        let full: AlternativesResult = serde_json::from_value(json!({
            "original_product_id": 7,
            "original_product_details": {
                "product_id": 7,
                "product_name": "Desk",
                "carbon_score": 30.0,
                "category": "Furniture",
                "origin_country": "Sweden",
                "weight_kg": 20.0,
                "packaging": "Cardboard",
                "delivery_method": "Sea",
                "delivery_distance_km": 1200,
                "delivery_speed": "Standard",
            },
            "original_product_carbon_score": 30.0,
            "alternatives": [],
            "message": "No greener alternatives found in the catalog.",
        }))
        .unwrap();
        assert_eq!(full.original_product_id, Some(7));
        assert_eq!(
            full.original_product_details.map(|p| p.product_name),
            Some("Desk".to_string())
        );
        assert!(full.alternatives.is_empty());
    }

    #[test]
    fn score_formats_to_two_decimals() {
        assert_eq!(format_score(12.345), "12.35");
        assert_eq!(format_score(3.0), "3.00");
        assert_eq!(format_score(0.004), "0.00");
    }
}
