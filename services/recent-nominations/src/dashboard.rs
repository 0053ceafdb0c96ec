//! Web dashboard with JSON API endpoints

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::presenter::{recent_nominations, NominationCard};
use crate::view::ViewHandle;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub view: ViewHandle,
}

/// Build the dashboard axum router
pub fn build_router(view: ViewHandle) -> Router {
    let dashboard_state = DashboardState { view };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/nominations", get(nominations_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_card(card: &NominationCard) -> String {
    let (color, bg) = card.status_color.css();
    format!(
        r#"<div class="card" data-key="{key}" style="position: relative; min-width: 350px; border-radius: 10px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); padding: 16px; margin-bottom: 1rem;">
            <div style="display: flex; align-items: center;">
                <img src="{avatar}" alt="" width="48" height="48" style="border-radius: 50%; margin-right: 16px;">
                <div>
                    <h3 style="margin: 0; font-size: 16px;">{name}</h3>
                    <div style="font-size: 14px; color: #555;">By: {by}</div>
                    <div style="font-size: 14px; color: #555;">For: {for_name}</div>
                    <div style="font-size: 12px; color: #999;">{date}</div>
                </div>
            </div>
            <span class="tag tag-{token}" style="position: absolute; top: 16px; right: 16px; font-size: 12px; border-radius: 8px; padding: 0.1em 0.6em; color: {color}; background-color: {bg};">{label}</span>
        </div>"#,
        key = escape(&card.key),
        avatar = escape(&card.avatar_url),
        name = escape(&card.name),
        by = escape(&card.nominated_by),
        for_name = escape(&card.nominated_for),
        date = escape(&card.created_on),
        token = card.status_color.token(),
        color = color,
        bg = bg,
        label = escape(&card.status_label),
    )
}

async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let view = dashboard.view.read().await;

    let content = if view.loading {
        r#"<p class="spinner">Loading...</p>"#.to_string()
    } else {
        recent_nominations(&view.nominations)
            .iter()
            .map(render_card)
            .collect::<String>()
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Recent Nominations</title>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
    <p class="heading">Recent Nominations</p>
    <div class="custom-content-area col">{content}</div>
</body>
</html>"#,
        content = content,
    );

    Html(html)
}

async fn nominations_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let view = dashboard.view.read().await;

    axum::Json(serde_json::json!({
        "loading": view.loading,
        "nominations": recent_nominations(&view.nominations),
    }))
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
