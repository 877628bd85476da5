//! Section progress dots with connectors between them.

use leptos::prelude::*;

use crate::state::navigation::{NavigationState, Section};

#[component]
pub fn ProgressIndicator() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();
    let last = Section::ALL.len() - 1;

    view! {
        <nav class="progress" aria-label="Sections">
            {Section::ALL
                .into_iter()
                .enumerate()
                .map(|(index, section)| {
                    view! {
                        <div class="progress__step">
                            <span
                                class="progress__dot"
                                class:progress__dot--active=move || nav.with(|n| n.dot_active(index))
                                title=section.label()
                            ></span>
                            <Show when=move || index < last>
                                <span
                                    class="progress__connector"
                                    class:progress__connector--filled=move || nav.with(|n| n.connector_filled(index))
                                ></span>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
