//! The single portfolio page: scroll-snapped sections with navigation chrome.
//!
//! ARCHITECTURE
//! ============
//! The `<main>` element is the scroll container. Once it mounts, an
//! intersection observer rooted on it keeps `NavigationState` in sync with
//! the section in view. Small screens pin the body so the continue button is
//! the only way between sections.

use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::home_section::HomeSection;
use crate::components::portfolio_section::PortfolioSection;
use crate::components::progress_indicator::ProgressIndicator;
use crate::components::section_navigation::SectionNavigation;
use crate::components::skills_section::SkillsSection;
use crate::state::navigation::NavigationState;
use crate::util::scroll_lock;

#[component]
pub fn FolioPage() -> impl IntoView {
    let nav = RwSignal::new(NavigationState::default());
    provide_context(nav);

    let container_ref = NodeRef::<leptos::html::Main>::new();
    let mobile = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<web_sys::IntersectionObserver>);
        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            let installed = crate::util::sections::observe_sections(&container, move |batch| {
                let mut next = nav.get_untracked();
                if let Some(section) = next.observe(&batch) {
                    log::debug!("section in view: {}", section.id());
                    nav.set(next);
                }
            });
            if installed.is_none() {
                log::warn!("section tracking disabled");
            }
            if let Some(previous) = observer.try_update_value(|slot| std::mem::replace(slot, installed)).flatten() {
                previous.disconnect();
            }
        });
        on_cleanup(move || {
            if let Some(active) = observer.try_update_value(Option::take).flatten() {
                active.disconnect();
            }
        });

        Effect::new(move || mobile.set(crate::util::viewport::is_mobile()));
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            let now = crate::util::viewport::is_mobile();
            if mobile.get_untracked() != now {
                mobile.set(now);
            }
        });
        on_cleanup(move || resize.remove());
    }

    Effect::new(move || scroll_lock::apply(mobile.get()));
    on_cleanup(move || scroll_lock::apply(false));

    view! {
        <main class="folio" class:folio--mobile-locked=move || mobile.get() node_ref=container_ref>
            <div class="folio__noise" aria-hidden="true"></div>
            <ProgressIndicator/>
            <SectionNavigation/>
            <HomeSection/>
            <SkillsSection/>
            <PortfolioSection/>
            <ContactSection/>
        </main>
    }
}
