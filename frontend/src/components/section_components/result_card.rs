use common::{section_result::SectionResultCard, text_highlight::HighlightTextSpan};
use dioxus::prelude::*;


#[component]
pub fn ResultCard(result: ReadSignal<SectionResultCard>) -> Element {
    let result = result.read();
    let card = &result.card;

    rsx! {
        div {
            class: "x-result-card",
            div {
                class: "x-result-card-title",
                HighlightedText { spans: result.title_spans.clone() }
            }
            if !card.subtitle.is_empty() {
                div { class: "x-result-card-subtitle", "{card.subtitle}" }
            }
            if !card.summary.is_empty() {
                div {
                    class: "x-result-card-summary",
                    HighlightedText { spans: result.summary_spans.clone() }
                }
            }
            if !card.tags.is_empty() {
                div {
                    class: "x-result-card-tags",
                    for (i, tag) in card.tags.iter().enumerate() {
                        span { key: "{i}", class: "x-result-card-tag", "{tag}" }
                    }
                }
            }
        }
    }
}

#[component]
fn HighlightedText(spans: Vec<HighlightTextSpan>) -> Element {
    rsx! {
        for (i, part) in spans.iter().enumerate() {
            if part.is_highlighted {
                mark { key: "{i}", "{part.text}" }
            } else {
                span { key: "{i}", "{part.text}" }
            }
        }
    }
}
