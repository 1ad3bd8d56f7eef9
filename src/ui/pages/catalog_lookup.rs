use dioxus::prelude::*;

use crate::{
    domain::{lookup_catalog_alternatives, SubmissionState, SubmitOutcome},
    infra::carbon_api::CarbonApiClient,
    ui::{
        components::{
            alternatives::{AlternativesList, CatalogProductCard},
            score_card::ScoreCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

/// Finds greener alternatives for a product the service already knows by id.
#[component]
pub fn CatalogLookupPage() -> Element {
    let client = use_context::<Option<CarbonApiClient>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut product_id = use_signal(String::new);
    let lookup = use_signal(SubmissionState::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(client) = client.clone() else {
            push_toast(toasts, ToastKind::Error, "Scoring service is not configured.");
            return;
        };
        let raw = product_id();
        let mut store = lookup;
        spawn(async move {
            if lookup_catalog_alternatives(&client, &mut store, &raw).await
                == SubmitOutcome::Completed
            {
                let message = format!("Alternatives loaded for product {raw}.");
                push_toast(toasts, ToastKind::Success, message);
            }
        });
    };

    let state = lookup();
    let details = state
        .alternatives
        .as_ref()
        .and_then(|result| result.original_product_details.clone());

    rsx! {
        section {
            class: "{theme::panel()} space-y-4",
            h2 { class: "{theme::section_title()}", "Catalog Lookup" }
            p { class: "text-sm text-slate-400", "Already have a product from the catalog? Enter its id to compare it directly." }
            form {
                class: "flex items-end gap-3",
                onsubmit: on_submit,
                div { class: "flex-1",
                    label { class: "{theme::label_class()}", r#for: "catalog_product_id", "Product ID" }
                    input {
                        class: "{theme::input_class(false)}",
                        id: "catalog_product_id",
                        inputmode: "numeric",
                        value: product_id(),
                        oninput: move |evt| product_id.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_secondary()}",
                    r#type: "submit",
                    disabled: state.loading,
                    if state.loading { "Searching..." } else { "Find Alternatives" }
                }
            }

            if let Some(error) = state.error.clone() {
                div { class: "{theme::error_region()}", role: "alert", "{error}" }
            }

            if let Some(product) = details {
                CatalogProductCard { product }
            } else if let Some(score) = state.score.clone() {
                ScoreCard {
                    title: "Original Carbon Score",
                    score: score.carbon_score,
                    caption: Some("Reported by the scoring service".to_string()),
                }
            }

            if let Some(result) = state.alternatives.clone() {
                AlternativesList { result }
            }
        }
    }
}
