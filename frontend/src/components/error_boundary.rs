//! Error boundaries for page and component failures.

use dioxus::prelude::*;

use crate::routes::Route;

/// Catches anything a page throws and offers a way back to the section index.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        class: "x-error-panel",
                        h1 { "Something went wrong" }
                        p { "While rendering: {boundary_name}" }
                        Link { to: Route::HomePage {}, "Back to all sections" }
                        pre { "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-retry-button",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-panel x-error-panel-small",
            h2 { "Could not load this part of the page" }
            pre { "{error_txt}" }
            {children}
        }
    }
}
