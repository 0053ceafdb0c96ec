//! Main App component

use crate::components::recent_nominations::RecentNominations;
use leptos::prelude::*;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <RecentNominations />
        </main>
    }
}
