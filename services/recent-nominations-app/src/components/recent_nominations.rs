//! Recent nominations list component

use crate::api::RecentNominationsResponse;
use crate::components::nomination_card::NominationCard;
use leptos::prelude::*;
use std::time::Duration;

/// Delay between requests while the server is still loading
const POLL_INTERVAL: Duration = Duration::from_millis(750);

/// Fetches /api/nominations and shows each nomination as a card
#[component]
pub fn RecentNominations() -> impl IntoView {
    let nominations = Resource::new(
        || (),
        |_| async move { fetch_nominations().await.unwrap_or_default() },
    );

    Effect::new(move |_| {
        if let Some(delay) = nominations.get().as_ref().and_then(refetch_delay) {
            set_timeout(move || nominations.refetch(), delay);
        }
    });

    view! {
        <p class="heading">"Recent Nominations"</p>
        <Suspense fallback=move || view! { <p class="spinner">"Loading..."</p> }>
            {move || {
                nominations.get().map(|data| {
                    if data.loading {
                        view! { <p class="spinner">"Loading..."</p> }.into_any()
                    } else {
                        view! {
                            <div class="custom-content-area col">
                                {data.nominations.into_iter().map(|card| {
                                    view! { <NominationCard card=card /> }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                })
            }}
        </Suspense>
    }
}

/// Keep asking until the server reports the load has settled
fn refetch_delay(data: &RecentNominationsResponse) -> Option<Duration> {
    data.loading.then_some(POLL_INTERVAL)
}

async fn fetch_nominations() -> Result<RecentNominationsResponse, String> {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}/api/nominations", origin);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        Ok(RecentNominationsResponse::default())
    }
}
