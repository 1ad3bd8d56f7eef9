use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    infra::carbon_api::CarbonApiClient,
    ui::{
        components::{
            status_badge::ServiceStatus,
            toast::{push_toast, Toast, ToastKind, ToastMessage},
        },
        pages::{CarbonScorePage, CatalogLookupPage},
        shell::Shell,
    },
    util::{assets, config::AppConfig},
};

#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let client = use_hook(build_client);
    use_context_provider(|| client.clone().ok());

    let status = use_signal(|| ServiceStatus::Checking);
    use_context_provider(|| status);

    let _health = use_resource(move || {
        let client = client.clone();
        async move { check_service(client, status, toasts).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell {
            CarbonScorePage {}
            CatalogLookupPage {}
        }
        Toast {}
    }
}

fn build_client() -> Result<CarbonApiClient, String> {
    let config = AppConfig::load();
    config
        .api_config()
        .and_then(CarbonApiClient::new)
        .map_err(|err| {
            warn!("Cannot build scoring client for {}: {err}", config.api_base_url);
            format!("Invalid scoring service URL {}: {err}", config.api_base_url)
        })
}

async fn check_service(
    client: Result<CarbonApiClient, String>,
    mut status: Signal<ServiceStatus>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let client = match client {
        Ok(client) => client,
        Err(message) => {
            push_toast(toasts, ToastKind::Error, message.clone());
            status.set(ServiceStatus::Offline(message));
            return;
        }
    };

    match client.check_health().await {
        Ok(health) => {
            info!("Scoring service at {} is up: {}", client.config().base_url(), health.message);
            status.set(ServiceStatus::Online(health.message));
        }
        Err(err) => {
            warn!("Scoring service at {} unreachable: {err}", client.config().base_url());
            push_toast(
                toasts,
                ToastKind::Warning,
                "Scoring service is not reachable yet; submissions may fail.",
            );
            status.set(ServiceStatus::Offline(err.to_string()));
        }
    }
}
