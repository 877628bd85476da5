//! Jigsaw board for the selected skills tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `SkillsState::board` as absolutely positioned SVG pieces and feeds
//! pointer input back into the `puzzle` engine. Pointer events are captured
//! on the board element so a fast drag never loses its piece.
//!
//! DESIGN
//! ======
//! The engine works in board space. Each handler converts client coordinates
//! through a `BoardView` built from the board's bounding rect, then applies
//! the returned actions: pointer capture on grab, a timed dismissal of the
//! solved overlay on completion.

use leptos::prelude::*;

use puzzle::board::Action;
use puzzle::consts::{PADDING, PIECE_H, PIECE_W};
use puzzle::coords::visual_origin;

use crate::content::{LABEL_COLLECT, LABEL_SCATTER, LABEL_SOLVED, SkillPiece};
use crate::state::skills::{SkillTab, SkillsState};
use crate::util::color::rgba;

#[cfg(feature = "hydrate")]
use puzzle::coords::{BoardView, Point};
#[cfg(feature = "hydrate")]
use puzzle::drag::Button;

const PIECE_BOX_W: f64 = PIECE_W + PADDING * 2.0;
const PIECE_BOX_H: f64 = PIECE_H + PADDING * 2.0;

/// Board for the current tab plus its Scatter/Collect button.
#[component]
pub fn PuzzleBoard() -> impl IntoView {
    let skills = expect_context::<RwSignal<SkillsState>>();
    let board_ref = NodeRef::<leptos::html::Div>::new();

    // Rebuild the piece views only when the tab changes.
    let tab = Memo::new(move |_| skills.with(|s| s.tab));

    let board_style = move || {
        let layout = skills.with(|s| s.board.layout());
        format!("width: {}px; height: {}px;", layout.width, layout.height)
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(point) = board_point(&ev, board_ref, skills) else {
                    return;
                };
                let button = Button::from_dom(ev.button());
                let mut actions = Vec::new();
                skills.update(|s| actions = s.board.pointer_down(point, button));
                if actions.iter().any(|a| matches!(a, Action::Grabbed { .. })) {
                    ev.prevent_default();
                    if let Some(el) = board_ref.get_untracked() {
                        let _ = el.set_pointer_capture(ev.pointer_id());
                    }
                }
                apply_actions(&actions, skills);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if skills.with_untracked(|s| s.board.dragging().is_none()) {
                    return;
                }
                let Some(point) = board_point(&ev, board_ref, skills) else {
                    return;
                };
                skills.update(|s| {
                    s.board.pointer_move(point);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if skills.with_untracked(|s| s.board.dragging().is_none()) {
                    return;
                }
                if let Some(el) = board_ref.get_untracked() {
                    let _ = el.release_pointer_capture(ev.pointer_id());
                }
                let mut actions = Vec::new();
                skills.update(|s| actions = s.board.pointer_up());
                apply_actions(&actions, skills);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_toggle = move |_| {
        let mut rng = scatter_rng();
        let mut actions = Vec::new();
        skills.update(|s| actions = s.board.toggle(&mut rng));
        apply_actions(&actions, skills);
    };

    let accent = move || tab.get().accent();
    let scattered = move || skills.with(|s| s.board.is_scattered());
    let flashing = move || skills.with(|s| s.board.is_flashing());

    view! {
        <div class="puzzle">
            <div class="puzzle__frame">
                <div
                    class="puzzle__board"
                    node_ref=board_ref
                    style=board_style
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up.clone()
                    on:pointercancel=on_pointer_up
                >
                    <Show when=scattered>
                        {move || ghost_slots(tab.get(), skills)}
                    </Show>
                    {move || {
                        let tab = tab.get();
                        let pieces = skills.with_untracked(|s| {
                            (0..s.board.pieces().len())
                                .filter_map(|index| s.skill_at(index).map(|skill| (index, skill)))
                                .collect::<Vec<_>>()
                        });
                        pieces
                            .into_iter()
                            .map(|(index, skill)| piece_view(index, skill, tab, skills))
                            .collect_view()
                    }}
                    <Show when=flashing>
                        <div class="puzzle__solved">
                            <span class="puzzle__solved-label" style=move || format!("color: {};", accent())>
                                {LABEL_SOLVED}
                            </span>
                        </div>
                    </Show>
                </div>
            </div>
            <button
                class="btn puzzle__toggle"
                style=move || format!("border-color: {};", rgba(accent(), 0.4))
                on:click=on_toggle
            >
                {move || if scattered() { LABEL_COLLECT } else { LABEL_SCATTER }}
            </button>
        </div>
    }
}

/// Dashed outlines marking each piece's target while the board is scattered.
fn ghost_slots(tab: SkillTab, skills: RwSignal<SkillsState>) -> impl IntoView {
    let border = rgba(tab.accent(), 0.15);
    let targets = skills.with_untracked(|s| s.board.pieces().iter().map(|p| p.correct).collect::<Vec<_>>());
    targets
        .into_iter()
        .map(|target| {
            let style = format!(
                "left: {}px; top: {}px; width: {PIECE_W}px; height: {PIECE_H}px; border-color: {border};",
                target.x, target.y
            );
            view! { <div class="puzzle__ghost" style=style></div> }
        })
        .collect_view()
}

fn piece_view(index: usize, skill: &'static SkillPiece, tab: SkillTab, skills: RwSignal<SkillsState>) -> impl IntoView {
    let outline = skills.with_untracked(|s| s.board.piece(index).map(|p| p.outline.to_svg()).unwrap_or_default());
    let fill = rgba(skill.color, 0.28);
    let stroke = rgba(skill.color, 0.3);
    let badge_fill = rgba(skill.color, 0.15);
    let badge_stroke = rgba(skill.color, 0.25);
    let view_box = format!("{} {} {PIECE_BOX_W} {PIECE_BOX_H}", -PADDING, -PADDING);

    let locked = move || skills.with(|s| s.board.piece(index).is_some_and(|p| p.locked));
    let dragging = move || skills.with(|s| s.board.dragging() == Some(index));

    let style = move || {
        skills.with(|s| {
            let Some(piece) = s.board.piece(index) else {
                return String::new();
            };
            let origin = visual_origin(piece.position);
            let transition = if s.board.dragging() == Some(index) { "none" } else { "left 0.3s ease, top 0.3s ease" };
            format!(
                "left: {}px; top: {}px; width: {PIECE_BOX_W}px; height: {PIECE_BOX_H}px; z-index: {}; transition: {transition};",
                origin.x,
                origin.y,
                s.board.z_index(index) + 1,
            )
        })
    };

    let glow_style = move || format!("filter: drop-shadow(0 0 8px {});", rgba(tab.accent(), 0.25));
    let glow_outline = outline.clone();
    let stroke_outline = outline.clone();

    view! {
        <div
            class="puzzle-piece"
            class:puzzle-piece--locked=locked
            class:puzzle-piece--dragging=dragging
            style=style
            data-skill=skill.id
        >
            <svg
                width=PIECE_BOX_W.to_string()
                height=PIECE_BOX_H.to_string()
                viewBox=view_box
                style=move || if locked() { glow_style() } else { String::new() }
            >
                <path d=outline fill=fill></path>
                <path d=stroke_outline fill="none" stroke=stroke stroke-width="1.5"></path>
                <rect x="35" y="22" width="40" height="40" rx="8" fill=badge_fill stroke=badge_stroke></rect>
                <text x="55" y="47" text-anchor="middle" class="puzzle-piece__icon" fill=skill.color>
                    {skill.icon}
                </text>
                <text x="55" y="82" text-anchor="middle" class="puzzle-piece__name">
                    {skill.name}
                </text>
                <Show when=locked>
                    <path d=glow_outline.clone() fill="none" stroke=skill.color stroke-width="2" opacity="0.4"></path>
                </Show>
            </svg>
        </div>
    }
}

/// React to engine actions that need the browser: logging and the solved timer.
fn apply_actions(actions: &[Action], skills: RwSignal<SkillsState>) {
    for action in actions {
        match *action {
            Action::Solved { flash } => {
                leptos::logging::log!("puzzle solved: {}", skills.with_untracked(|s| s.tab.key()));
                schedule_flash_dismissal(flash, skills);
            }
            Action::Scattered => {
                leptos::logging::log!("puzzle scattered: {}", skills.with_untracked(|s| s.tab.key()));
            }
            _ => {}
        }
    }
}

fn schedule_flash_dismissal(flash: u32, skills: RwSignal<SkillsState>) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(puzzle::consts::SOLVED_FLASH_MS, move || {
            skills.update(|s| {
                s.board.dismiss_flash(flash);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (flash, skills);
    }
}

/// Fresh randomness for a scatter. The browser seeds from `Math.random`.
fn scatter_rng() -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    #[cfg(feature = "hydrate")]
    {
        rand::rngs::SmallRng::seed_from_u64(js_sys::Math::random().to_bits())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        rand::rngs::SmallRng::seed_from_u64(0)
    }
}

#[cfg(feature = "hydrate")]
fn board_point(
    ev: &leptos::ev::PointerEvent,
    board_ref: NodeRef<leptos::html::Div>,
    skills: RwSignal<SkillsState>,
) -> Option<Point> {
    let el = board_ref.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    let logical_width = skills.with_untracked(|s| s.board.layout().width);
    let view = BoardView::from_rect(rect.left(), rect.top(), rect.width(), logical_width);
    Some(view.client_to_board(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))))
}
