use dioxus::prelude::*;

use crate::ui::components::status_badge::{ServiceStatus, StatusBadge};
use crate::util::version::{version_label, APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let status = use_context::<Signal<ServiceStatus>>();
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-emerald-900/40 bg-emerald-950/60 px-6 py-6",
                div { class: "mx-auto flex max-w-3xl items-center justify-between gap-4",
                    div {
                        h1 { class: "text-2xl font-semibold tracking-tight text-emerald-200", "{APP_NAME}" }
                        p { class: "mt-1 text-sm text-slate-400", "{APP_TAGLINE}" }
                    }
                    StatusBadge { status: status() }
                }
            }
            main { class: "mx-auto max-w-3xl px-6 py-10 space-y-8",
                {children}
            }
            footer { class: "border-t border-slate-900 py-6 text-center text-xs text-slate-500",
                "{APP_NAME} · {version}"
            }
        }
    }
}
