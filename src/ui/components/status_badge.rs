use dioxus::prelude::*;

/// Reachability of the scoring service, as last checked.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceStatus {
    Checking,
    Online(String),
    Offline(String),
}

#[component]
pub fn StatusBadge(status: ServiceStatus) -> Element {
    let (label, title, color) = match &status {
        ServiceStatus::Checking => (
            "Checking",
            "Contacting the scoring service...".to_string(),
            "bg-slate-700/40 text-slate-300 border-slate-600/60",
        ),
        ServiceStatus::Online(message) => (
            "Online",
            message.clone(),
            "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ),
        ServiceStatus::Offline(reason) => (
            "Offline",
            reason.clone(),
            "bg-rose-500/10 text-rose-300 border-rose-500/40",
        ),
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            title: "{title}",
            "Scoring service: {label}"
        }
    }
}
