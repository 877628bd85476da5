//! Home section: profile photo carousel, greeting, bio, and badges.

use leptos::prelude::*;

use crate::content::{BIO, GREETING_PREFIX, HOME_BADGES, PROFILE_PHOTOS, ROLE, SUBTITLE};
use crate::state::home::{HomeState, WAVE_MS};

#[component]
pub fn HomeSection() -> impl IntoView {
    let home = RwSignal::new(HomeState::default());

    let photo_index = move || home.with(|h| h.photo_index);
    let photo_src = move || PROFILE_PHOTOS.get(photo_index()).copied().unwrap_or_default();

    let on_photo_click = move |_| home.update(|h| h.cycle_photo(PROFILE_PHOTOS.len()));

    let on_name_click = move |_| {
        let mut started = false;
        home.update(|h| started = h.toggle_name());
        if started {
            schedule_wave_end(home);
        }
    };

    view! {
        <section id="home" class="section section--home">
            <div class="section__ambient"></div>
            <div class="home">
                <button class="home__photo" on:click=on_photo_click title="Next photo">
                    <img class="home__photo-img" src=photo_src alt="Profile photo"/>
                    <span class="home__photo-dots">
                        {(0..PROFILE_PHOTOS.len())
                            .map(|i| {
                                view! {
                                    <span
                                        class="home__photo-dot"
                                        class:home__photo-dot--active=move || photo_index() == i
                                    ></span>
                                }
                            })
                            .collect_view()}
                    </span>
                </button>

                <div class="home__text">
                    <p class="home__role">{ROLE}</p>
                    <h1 class="home__greeting">
                        {GREETING_PREFIX}
                        <span class="home__name" role="presentation" on:click=on_name_click>
                            {move || home.with(|h| h.display_name())}
                        </span>
                        <Show when=move || home.with(|h| h.waving)>
                            <span class="home__wave">"👋"</span>
                        </Show>
                        <br/>
                        <span class="home__subtitle">{SUBTITLE}</span>
                    </h1>
                    <p class="home__bio">{BIO}</p>
                    <div class="home__badges">
                        {HOME_BADGES
                            .iter()
                            .map(|badge| view! { <span class="home__badge">{*badge}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn schedule_wave_end(home: RwSignal<HomeState>) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(WAVE_MS, move || home.update(HomeState::end_wave)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (home, WAVE_MS);
    }
}
