use dioxus::prelude::*;

use crate::{
    domain::{
        submit_product, Category, DeliveryMethod, FormField, Packaging, ProductForm,
        SubmissionState, SubmitOutcome,
    },
    infra::carbon_api::CarbonApiClient,
    ui::{
        components::{
            alternatives::AlternativesList,
            field::{SelectField, TextField},
            score_card::ScoreCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const DELIVERY_SPEEDS: [&str; 2] = ["Standard", "Express"];

#[component]
pub fn CarbonScorePage() -> Element {
    let client = use_context::<Option<CarbonApiClient>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut form = use_signal(ProductForm::default);
    let submission = use_signal(SubmissionState::default);

    let on_field = move |(field, raw): (FormField, String)| {
        if let Err(err) = form.with_mut(|f| f.set_field(field, &raw)) {
            push_toast(toasts, ToastKind::Warning, err.to_string());
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(client) = client.clone() else {
            push_toast(
                toasts,
                ToastKind::Error,
                "Scoring service is not configured; check the API URL.",
            );
            return;
        };
        let snapshot = form();
        let mut store = submission;
        spawn(async move {
            if submit_product(&client, &mut store, &snapshot).await == SubmitOutcome::Completed {
                push_toast(toasts, ToastKind::Success, "Carbon score calculated.");
            }
        });
    };

    let current = form();
    let state = submission();
    let weight_invalid = current.weight_kg.is_invalid();
    let distance_invalid = current.delivery_distance_km.is_invalid();
    let button_label = if state.loading {
        "Calculating..."
    } else {
        "Calculate Carbon Score"
    };

    rsx! {
        div { class: "space-y-6",
            section {
                class: "{theme::panel()}",
                h2 { class: "mb-4 text-xl font-semibold text-slate-100", "Calculate Product Carbon Score" }
                form {
                    class: "space-y-4",
                    onsubmit: on_submit,
                    SelectField {
                        field: FormField::Category,
                        name: "category",
                        options: Category::ALL.iter().map(|c| c.name()).collect::<Vec<_>>(),
                        value: current.value_of(FormField::Category),
                        on_change: on_field,
                    }
                    TextField {
                        field: FormField::OriginCountry,
                        name: "origin_country",
                        value: current.value_of(FormField::OriginCountry),
                        on_change: on_field,
                    }
                    TextField {
                        field: FormField::WeightKg,
                        name: "weight_kg",
                        value: current.value_of(FormField::WeightKg),
                        numeric: true,
                        invalid: weight_invalid,
                        on_change: on_field,
                    }
                    SelectField {
                        field: FormField::Packaging,
                        name: "packaging",
                        options: Packaging::ALL.iter().map(|p| p.name()).collect::<Vec<_>>(),
                        value: current.value_of(FormField::Packaging),
                        on_change: on_field,
                    }
                    SelectField {
                        field: FormField::DeliveryMethod,
                        name: "delivery_method",
                        options: DeliveryMethod::ALL.iter().map(|d| d.name()).collect::<Vec<_>>(),
                        value: current.value_of(FormField::DeliveryMethod),
                        on_change: on_field,
                    }
                    TextField {
                        field: FormField::DeliveryDistanceKm,
                        name: "delivery_distance_km",
                        value: current.value_of(FormField::DeliveryDistanceKm),
                        numeric: true,
                        invalid: distance_invalid,
                        on_change: on_field,
                    }
                    SelectField {
                        field: FormField::DeliverySpeed,
                        name: "delivery_speed",
                        options: DELIVERY_SPEEDS.to_vec(),
                        value: current.value_of(FormField::DeliverySpeed),
                        on_change: on_field,
                    }
                    button {
                        class: "{theme::btn_primary()}",
                        r#type: "submit",
                        disabled: state.loading,
                        "{button_label}"
                    }
                }
            }

            if let Some(error) = state.error.clone() {
                div { class: "{theme::error_region()}", role: "alert", "{error}" }
            }

            if let Some(score) = state.score.clone() {
                ScoreCard {
                    title: "Carbon Score Result",
                    score: score.carbon_score,
                    caption: None,
                }
            }

            if let Some(result) = state.alternatives.clone() {
                AlternativesList { result }
            }
        }
    }
}
