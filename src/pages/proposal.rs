use wasm_bindgen_futures::spawn_local;
use web_sys::{js_sys, HtmlElement};
use yew::prelude::*;

use crate::assets;
use crate::components::celebration::CelebrationEffect;
use crate::components::garden::FloatingGarden;
use crate::components::heart_burst::HeartBurst;
use crate::config::{HEART_BURST_MS, SCREEN_FADE_SECS, SCREEN_FADE_SLIDE_PX};
use crate::evade::escape_position;
use crate::state::{ProposalState, MESSAGES, STEP_ACCEPTED, STEP_DECISION};

fn page_css() -> String {
    format!(
        r#"
.screen-enter {{
    animation: screen-enter {fade}s ease both;
}}
.screen-exit {{
    animation: screen-exit {fade}s ease both;
}}
@keyframes screen-enter {{
    from {{ opacity: 0; transform: translateY({slide}px); }}
    to {{ opacity: 1; transform: translateY(0); }}
}}
@keyframes screen-exit {{
    from {{ opacity: 1; transform: translateY(0); }}
    to {{ opacity: 0; transform: translateY(-{slide}px); }}
}}
.screen {{
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    gap: 1.5rem;
}}
.message {{
    font-size: 1.75rem;
    margin: 0;
}}
.question {{
    font-size: 1.875rem;
    font-weight: bold;
    margin: 1rem 0 0;
}}
.portrait {{
    border-radius: 1rem;
    box-shadow: 0 25px 50px -12px rgba(61, 43, 61, 0.4);
    max-width: 100%;
    height: auto;
}}
.decision-zone {{
    position: relative;
    width: 100%;
    height: 6rem;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}}
"#,
        fade = SCREEN_FADE_SECS,
        slide = SCREEN_FADE_SLIDE_PX
    )
}

/// Delay before the screen swap, letting the outgoing screen fade out.
/// The jump into the accepted screen replaces its subtree outright, so the
/// celebration starts together with the terminal entrance.
fn exit_delay_ms(next_step: u8) -> u32 {
    if next_step == STEP_ACCEPTED {
        0
    } else {
        (SCREEN_FADE_SECS * 1000.0) as u32
    }
}

fn no_button_style(position: Option<(f64, f64)>) -> String {
    match position {
        Some((x, y)) => format!("position: absolute; left: {x:.0}px; top: {y:.0}px;"),
        None => String::new(),
    }
}

#[function_component(ProposalPage)]
pub fn proposal_page() -> Html {
    let state = use_state(ProposalState::new);
    let heart_burst = use_state(|| false);
    let no_position = use_state(|| None::<(f64, f64)>);
    let shown_step = use_state(|| 0u8);
    let leaving = use_state(|| false);
    let decision_zone_ref = use_node_ref();
    let no_button_ref = use_node_ref();

    // Hold the outgoing screen through its fade before swapping the subtree.
    {
        let shown_step = shown_step.clone();
        let leaving = leaving.clone();
        use_effect_with_deps(
            move |step: &u8| {
                let step = *step;
                if *shown_step != step {
                    let delay = exit_delay_ms(step);
                    if delay == 0 {
                        shown_step.set(step);
                    } else {
                        leaving.set(true);
                        let shown_step = shown_step.clone();
                        let leaving = leaving.clone();
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(delay).await;
                            shown_step.set(step);
                            leaving.set(false);
                        });
                    }
                }
                || ()
            },
            state.step(),
        );
    }

    let on_advance = {
        let state = state.clone();
        let heart_burst = heart_burst.clone();
        Callback::from(move |_: MouseEvent| {
            if !state.can_advance() {
                return;
            }
            state.set(state.advance());
            heart_burst.set(true);
            let heart_burst = heart_burst.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(HEART_BURST_MS).await;
                heart_burst.set(false);
            });
        })
    };

    let on_accept = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.accept()))
    };

    let relocate_decline = {
        let state = state.clone();
        let no_position = no_position.clone();
        let decision_zone_ref = decision_zone_ref.clone();
        let no_button_ref = no_button_ref.clone();
        Callback::from(move |_: ()| {
            // Missing refs mean the button simply holds still this time.
            let (Some(zone), Some(button)) = (
                decision_zone_ref.cast::<HtmlElement>(),
                no_button_ref.cast::<HtmlElement>(),
            ) else {
                return;
            };
            let zone_rect = zone.get_bounding_client_rect();
            let button_rect = button.get_bounding_client_rect();
            let (x, y) = escape_position(
                &mut || js_sys::Math::random(),
                zone_rect.width(),
                zone_rect.height(),
                button_rect.width(),
                button_rect.height(),
            );
            no_position.set(Some((x, y)));
            state.set(state.decline());
        })
    };
    let on_no_hover = {
        let relocate = relocate_decline.clone();
        Callback::from(move |_: MouseEvent| relocate.emit(()))
    };
    let on_no_touch = {
        let relocate = relocate_decline;
        Callback::from(move |_: TouchEvent| relocate.emit(()))
    };

    let step = *shown_step;
    let screen = if step < STEP_DECISION {
        html! {
            <>
                <p class="message">{ MESSAGES[step as usize] }</p>
                <div style="position: relative;">
                    <button class="btn btn-accept" onclick={on_advance}>{ "Next 💌" }</button>
                    if *heart_burst {
                        <HeartBurst />
                    }
                </div>
            </>
        }
    } else if step == STEP_DECISION {
        html! {
            <>
                if let Some(image) = assets::find(assets::QUESTION_IMAGE_ID) {
                    <img
                        class="portrait"
                        src={image.image_url.clone()}
                        alt={image.description.clone()}
                        data-ai-hint={image.image_hint.clone()}
                        width={image.width.to_string()}
                        height={image.height.to_string()}
                    />
                }
                <h2 class="question">{ "Will you be my Valentine?" }</h2>
                <div class="decision-zone" ref={decision_zone_ref.clone()}>
                    <button
                        class="btn btn-accept"
                        style={format!("font-size: {}; transition: all 0.3s;", state.accept_size())}
                        onclick={on_accept}
                    >
                        { "Yes, I will!" }
                    </button>
                    <button
                        ref={no_button_ref.clone()}
                        class="btn btn-decline"
                        style={no_button_style(*no_position)}
                        onmouseenter={on_no_hover}
                        ontouchstart={on_no_touch}
                    >
                        { state.decline_message() }
                    </button>
                </div>
            </>
        }
    } else {
        html! {
            <>
                <CelebrationEffect />
                if let Some(image) = assets::find(assets::SUCCESS_IMAGE_ID) {
                    <img
                        class="portrait"
                        src={image.image_url.clone()}
                        alt={image.description.clone()}
                        data-ai-hint={image.image_hint.clone()}
                        width={image.width.to_string()}
                        height={image.height.to_string()}
                    />
                }
                <h2 class="question">{ "YAY! See you on Feb 14th!" }</h2>
                <p class="message">{ "You've made me the happiest person alive! 🎉" }</p>
            </>
        }
    };

    html! {
        <main class="proposal-page">
            <style>{ page_css() }</style>
            <FloatingGarden />
            <div class="love-card">
                // Keyed so each step swaps in a fresh subtree and per-screen
                // animations cannot leak across screens.
                <div
                    class={classes!("screen", if *leaving { "screen-exit" } else { "screen-enter" })}
                    key={step.to_string()}
                >
                    { screen }
                </div>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn screen_swaps_wait_for_the_outgoing_fade() {
        for next_step in 1..=STEP_DECISION {
            assert_eq!(
                exit_delay_ms(next_step),
                (SCREEN_FADE_SECS * 1000.0) as u32
            );
        }
    }

    #[test]
    fn acceptance_replaces_the_screen_immediately() {
        assert_eq!(exit_delay_ms(STEP_ACCEPTED), 0);
    }
}
