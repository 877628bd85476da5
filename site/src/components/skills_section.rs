//! Skills section: tab switcher over the jigsaw board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `SkillsState` context for its subtree. The board component reads
//! it; the tab buttons replace the board through `SkillsState::select`.

use leptos::prelude::*;

use crate::components::puzzle_board::PuzzleBoard;
use crate::content::LABEL_SKILL_SET;
use crate::state::skills::{SkillTab, SkillsState};
use crate::util::color::rgba;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let initial = match SkillsState::new(SkillTab::default()) {
        Ok(state) => state,
        Err(e) => {
            leptos::logging::warn!("skills board unavailable: {e}");
            return view! {
                <section id="skills" class="section section--skills">
                    <p class="section__error">"Skills are unavailable right now."</p>
                </section>
            }
            .into_any();
        }
    };
    let skills = RwSignal::new(initial);
    provide_context(skills);

    let active = move || skills.with(|s| s.tab);
    let select = move |tab: SkillTab| {
        skills.update(|s| match s.select(tab) {
            Ok(true) => leptos::logging::log!("skills tab: {}", tab.key()),
            Ok(false) => {}
            Err(e) => leptos::logging::warn!("skills tab {} rejected: {e}", tab.key()),
        });
    };

    view! {
        <section id="skills" class="section section--skills">
            <div
                class="section__ambient"
                style=move || format!("background-color: {};", rgba(active().accent(), 0.08))
            ></div>
            <div class="skills">
                <h2 class="section__eyebrow">{LABEL_SKILL_SET}</h2>
                <div class="skills__tabs" role="tablist">
                    {SkillTab::ALL
                        .into_iter()
                        .map(|tab| {
                            let is_active = move || active() == tab;
                            view! {
                                <button
                                    class="skills__tab"
                                    class:skills__tab--active=is_active
                                    role="tab"
                                    aria-selected=move || is_active().to_string()
                                    style=move || {
                                        if is_active() {
                                            format!("background-color: {};", tab.accent())
                                        } else {
                                            String::new()
                                        }
                                    }
                                    on:click=move |_| select(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="skills__board">
                    <PuzzleBoard/>
                </div>
            </div>
        </section>
    }
    .into_any()
}
