//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        // load every section before the first request instead of on it
        if let Err(e) = backend::catalog::get_catalog().await {
            dioxus::logger::tracing::error!("failed to load department catalog: {:#?}", e);
        }

        Ok(dioxus::server::router(App)
            .route("/_download_section/{section}", axum::routing::get(backend::server_extra::download_section::download_section))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    if res.status().is_server_error() {
                        dioxus::logger::tracing::warn!("{} -> {}", path, res.status());
                    }
                    res
                },
            )))
    });
}
