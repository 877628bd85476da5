//! Floating continue button that steps through the sections.

use leptos::prelude::*;

use crate::state::navigation::NavigationState;
use crate::util::sections::scroll_to;

/// Continue to the next section; on the last one, back to home.
#[component]
pub fn SectionNavigation() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavigationState>>();

    let is_last = move || nav.with(|n| n.current.is_last());
    let on_continue = move |_| {
        let target = nav.with_untracked(NavigationState::continue_target);
        scroll_to(target);
    };

    view! {
        <div class="section-nav">
            <button
                class="btn section-nav__continue"
                class:section-nav__continue--home=is_last
                on:click=on_continue
            >
                <span class="section-nav__label">{move || nav.with(NavigationState::continue_label)}</span>
                <span class="section-nav__icon" aria-hidden="true">
                    {move || if is_last() { "⌂" } else { "›" }}
                </span>
            </button>
        </div>
    }
}
