use dioxus::prelude::*;

use crate::domain::format_score;
use crate::ui::theme;

#[component]
pub fn ScoreCard(title: String, score: f64, caption: Option<String>) -> Element {
    let display = format_score(score);
    rsx! {
        div {
            class: "{theme::result_panel()}",
            h3 { class: "{theme::section_title()}", "{title}" }
            p { class: "mt-2 score-value text-emerald-300", "{display}" }
            if let Some(caption) = caption {
                p { class: "mt-1 {theme::text_muted()}", "{caption}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_renders_with_two_decimals() {
        let html = dioxus_ssr::render_element(rsx! {
            ScoreCard { title: "Carbon Score Result", score: 12.345, caption: None }
        });
        assert!(html.contains("Carbon Score Result"));
        assert!(html.contains("12.35"));
        assert!(!html.contains("12.345"));
    }
}
