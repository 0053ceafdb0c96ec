//! Nomination card component

use crate::api::NominationCardResponse;
use crate::components::status_tag::StatusTag;
use leptos::prelude::*;

/// Avatar, nominee, nominator, date and status of a single nomination
#[component]
pub fn NominationCard(card: NominationCardResponse) -> impl IntoView {
    view! {
        <div
            class="card"
            style="position: relative; min-width: 350px; border-radius: 10px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); padding: 16px; margin-bottom: 1rem;"
        >
            <div style="display: flex; align-items: center;">
                <img
                    src=card.avatar_url
                    alt=""
                    width="48"
                    height="48"
                    style="border-radius: 50%; margin-right: 16px;"
                />
                <div>
                    <h3 style="margin: 0; font-size: 16px;">{card.name}</h3>
                    <div style="font-size: 14px; color: #555;">"By: "{card.nominated_by}</div>
                    <div style="font-size: 14px; color: #555;">"For: "{card.nominated_for}</div>
                    <div style="font-size: 12px; color: #999;">{card.created_on}</div>
                </div>
            </div>
            <StatusTag label=card.status_label color=card.status_color />
        </div>
    }
}
