//! Shared class strings so the form, results and catalog panels look alike.

// ============================================
// FORM STYLES
// ============================================

pub fn label_class() -> &'static str {
    "block mb-1 text-xs font-semibold uppercase text-slate-500"
}

pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "w-full rounded-lg border border-rose-500 bg-slate-950 px-3 py-2 text-sm text-slate-100"
    } else {
        "w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100"
    }
}

pub fn btn_primary() -> &'static str {
    "w-full rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-500 disabled:bg-slate-700"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-emerald-500/40 px-4 py-2 text-sm font-semibold text-emerald-200 hover:bg-emerald-500/10 disabled:opacity-50"
}

// ============================================
// PANEL STYLES
// ============================================

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40 p-6"
}

pub fn result_panel() -> &'static str {
    "rounded-xl border border-emerald-500/40 bg-emerald-500/10 p-4"
}

pub fn error_region() -> &'static str {
    "rounded-xl border border-rose-500/40 bg-rose-500/10 p-4 text-sm text-rose-100"
}

pub fn section_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

pub fn text_muted() -> &'static str {
    "text-xs text-slate-500"
}
