use dioxus::prelude::*;

use crate::domain::{format_score, Alternative, AlternativesResult, CatalogProduct};
use crate::ui::theme;

#[component]
pub fn AlternativesList(result: AlternativesResult) -> Element {
    let AlternativesResult {
        alternatives,
        message,
        ..
    } = result;

    rsx! {
        section {
            class: "space-y-3",
            h3 { class: "{theme::section_title()}", "Greener Alternatives" }
            if alternatives.is_empty() {
                p { class: "text-sm text-slate-400", "No greener alternatives found." }
            } else {
                ul {
                    class: "space-y-3",
                    for (idx, alternative) in alternatives.into_iter().enumerate() {
                        AlternativeCard { key: "{idx}", alternative }
                    }
                }
            }
            if let Some(message) = message {
                p { class: "{theme::text_muted()}", "{message}" }
            }
        }
    }
}

#[component]
fn AlternativeCard(alternative: Alternative) -> Element {
    let score = format_score(alternative.carbon_score);
    rsx! {
        li {
            class: "{theme::result_panel()}",
            h4 { class: "text-sm font-semibold text-slate-100", "{alternative.product_name}" }
            p { class: "mt-1 text-sm text-slate-300", "Carbon Score: {score}" }
            p { class: "text-sm text-slate-300", "Category: {alternative.category}" }
            p { class: "text-sm text-slate-300", "Origin: {alternative.origin_country}" }
            p { class: "text-sm text-slate-300", "Delivery: {alternative.delivery_method}" }
            if let Some(packaging) = alternative.packaging.clone() {
                p { class: "{theme::text_muted()}", "Packaging: {packaging}" }
            }
        }
    }
}

/// Details of the catalog product a lookup was made for.
#[component]
pub fn CatalogProductCard(product: CatalogProduct) -> Element {
    let score = format_score(product.carbon_score);
    let weight = product
        .weight_kg
        .map(|kg| format!("{kg} kg"))
        .unwrap_or_else(|| "n/a".to_string());
    rsx! {
        div {
            class: "{theme::panel()}",
            h3 { class: "{theme::section_title()}", "Catalog product #{product.product_id}" }
            p { class: "mt-2 text-sm font-semibold text-slate-100", "{product.product_name}" }
            p { class: "text-sm text-slate-300", "Carbon Score: {score}" }
            p { class: "text-sm text-slate-300", "Category: {product.category}" }
            p { class: "text-sm text-slate-300", "Origin: {product.origin_country}" }
            p { class: "text-sm text-slate-300", "Delivery: {product.delivery_method}" }
            p { class: "{theme::text_muted()}", "Weight: {weight}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eco_phone() -> Alternative {
        Alternative {
            product_name: "EcoPhone".to_string(),
            carbon_score: 4.256,
            category: "Electronics".to_string(),
            origin_country: "Germany".to_string(),
            delivery_method: "Road".to_string(),
            product_id: Some(7),
            weight_kg: Some(0.2),
            packaging: Some("Recycled".to_string()),
            delivery_distance_km: None,
            delivery_speed: None,
            is_predicted_score: false,
        }
    }

    #[test]
    fn alternative_shows_name_score_category_origin_and_delivery() {
        let result = AlternativesResult {
            alternatives: vec![eco_phone()],
            ..AlternativesResult::default()
        };
        let html = dioxus_ssr::render_element(rsx! { AlternativesList { result } });

        assert!(html.contains("EcoPhone"));
        assert!(html.contains("Carbon Score: 4.26"));
        assert!(html.contains("Category: Electronics"));
        assert!(html.contains("Origin: Germany"));
        assert!(html.contains("Delivery: Road"));
        assert!(html.contains("Packaging: Recycled"));
        assert!(!html.contains("No greener alternatives found."));
    }

    #[test]
    fn empty_list_shows_note_and_service_message() {
        let result = AlternativesResult {
            message: Some("Nothing greener in this category".to_string()),
            ..AlternativesResult::default()
        };
        let html = dioxus_ssr::render_element(rsx! { AlternativesList { result } });

        assert!(html.contains("No greener alternatives found."));
        assert!(html.contains("Nothing greener in this category"));
    }
}
