//! Contact section: social profile links.

use leptos::prelude::*;

use crate::content::{LABEL_GET_IN_TOUCH, LABEL_LETS_WORK, SOCIAL_LINKS};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section section--contact">
            <div class="contact">
                <p class="section__eyebrow">{LABEL_GET_IN_TOUCH}</p>
                <h2 class="section__title">{LABEL_LETS_WORK}</h2>
                <ul class="contact__socials">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        class="contact__social"
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.name
                                        title=link.name
                                    >
                                        <span class="contact__social-glyph">{link.glyph}</span>
                                        <span class="contact__social-name">{link.name}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
