//! Portfolio section: rows of horizontally scrolling project cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each row keeps its own hover state and scroll position. Scroll and media
//! rules live in `util::gallery`; this module only wires them to the DOM.

use leptos::prelude::*;

use crate::content::{LABEL_ARTSTATION, LABEL_PORTFOLIO, LABEL_SELECTED_WORK, PORTFOLIO_ROWS, Project, ProjectRow};
use crate::util::color::rgba;
use crate::util::gallery::{CardMedia, MediaKind, RowHover, ScrollDirection, card_media, media_kind};

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id="portfolio" class="section section--portfolio">
            <div class="portfolio">
                <header class="portfolio__header">
                    <p class="section__eyebrow">{LABEL_SELECTED_WORK}</p>
                    <h2 class="section__title">{LABEL_PORTFOLIO}</h2>
                </header>
                <div class="portfolio__rows">
                    {PORTFOLIO_ROWS.iter().map(|row| view! { <GalleryRow row=row/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GalleryRow(row: &'static ProjectRow) -> impl IntoView {
    let hover = RwSignal::new(RowHover::default());
    let strip_ref = NodeRef::<leptos::html::Div>::new();

    let scroll = move |direction: ScrollDirection| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = strip_ref.get_untracked() {
                crate::util::gallery::scroll_row(&el, direction.delta(), true);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (direction, strip_ref);
        }
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(left) = crate::util::gallery::wheel_to_horizontal(ev.delta_x(), ev.delta_y()) else {
                return;
            };
            ev.prevent_default();
            if let Some(el) = strip_ref.get_untracked() {
                crate::util::gallery::scroll_row(&el, left, false);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="gallery-row">
            <div class="gallery-row__header">
                <h3 class="gallery-row__title">{row.category}</h3>
                <div class="gallery-row__arrows">
                    <button class="gallery-row__arrow" title="Scroll left" on:click=move |_| scroll(ScrollDirection::Left)>
                        "‹"
                    </button>
                    <button class="gallery-row__arrow" title="Scroll right" on:click=move |_| scroll(ScrollDirection::Right)>
                        "›"
                    </button>
                </div>
            </div>
            <div
                class="gallery-row__strip"
                node_ref=strip_ref
                on:wheel=on_wheel
                on:mouseleave=move |_| hover.update(RowHover::leave_row)
            >
                {row
                    .projects
                    .iter()
                    .map(|project| {
                        let hovered = Signal::derive(move || hover.with(|h| h.is_hovered(project.id)));
                        view! {
                            <div on:mouseenter=move |_| hover.update(|h| h.enter(project.id))>
                                <ProjectCard project=project hovered=hovered/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, hovered: Signal<bool>) -> impl IntoView {
    let media_style = format!(
        "background: linear-gradient(135deg, {} 0%, {} 100%);",
        rgba(project.color, 0.08),
        rgba(project.color, 0.02)
    );
    let tag_style = format!(
        "background: {}; border-color: {};",
        rgba(project.color, 0.06),
        rgba(project.color, 0.12)
    );

    view! {
        <article class="project-card" class:project-card--hovered=move || hovered.get()>
            <div class="project-card__media" style=media_style>
                {media_view(project)}
                <Show when=move || hovered.get()>
                    <div class="project-card__overlay">
                        <p class="project-card__description">{project.description}</p>
                        <a
                            class="project-card__link"
                            href=project.artstation.unwrap_or("#")
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {LABEL_ARTSTATION}
                            " ↗"
                        </a>
                    </div>
                </Show>
            </div>
            <div class="project-card__body">
                <h4 class="project-card__title">{project.title}</h4>
                <div class="project-card__tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="project-card__tag" style=tag_style.clone()>{*tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

fn media_view(project: &'static Project) -> AnyView {
    match card_media(project) {
        CardMedia::Strip(items) => view! {
            <div class="project-card__strip">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, &src)| {
                        view! {
                            <div class="project-card__strip-item">
                                {media_element(src, media_kind(src), format!("{} {}", project.title, i + 1))}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        CardMedia::Single { url, kind } => media_element(url, kind, project.title.to_owned()),
        CardMedia::Placeholder { color } => view! {
            <div class="project-card__placeholder" style=format!("color: {};", rgba(color, 0.25))>
                <svg width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1">
                    <rect x="3" y="3" width="18" height="18" rx="2"></rect>
                    <path d="m9 8 6 4-6 4V8Z"></path>
                </svg>
            </div>
        }
        .into_any(),
    }
}

fn media_element(src: &'static str, kind: MediaKind, alt: String) -> AnyView {
    match kind {
        MediaKind::Video => view! {
            <video class="project-card__video" src=src autoplay=true loop=true muted=true playsinline=true></video>
        }
        .into_any(),
        MediaKind::Image => view! { <img class="project-card__image" src=src alt=alt loading="lazy"/> }.into_any(),
    }
}
