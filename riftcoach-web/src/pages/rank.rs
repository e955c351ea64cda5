use riftcoach_core::{Division, Tier};
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct RankStepProps {
    pub on_submit: Callback<(Tier, Option<Division>)>,
    pub on_back: Callback<()>,
}

impl PartialEq for RankStepProps {
    fn eq(&self, _other: &Self) -> bool {
        // Always re-render; callbacks are not comparable
        false
    }
}

// Carousel starts on Gold, the middle of the ladder.
const START_INDEX: usize = 3;

#[function_component(RankStep)]
pub fn rank_step(props: &RankStepProps) -> Html {
    let tier_index = use_state(|| START_INDEX);
    let selected_tier = use_state(|| None::<Tier>);
    let selected_division = use_state(|| None::<Division>);

    let focused = Tier::ALL[*tier_index];

    let shift_tier = |delta: isize| {
        let tier_index = tier_index.clone();
        let selected_tier = selected_tier.clone();
        let selected_division = selected_division.clone();
        Callback::from(move |_| {
            let next = tier_index
                .saturating_add_signed(delta)
                .min(Tier::ALL.len() - 1);
            tier_index.set(next);
            // moving the carousel abandons the picks made for the
            // previously focused tier
            selected_tier.set(None);
            selected_division.set(None);
        })
    };
    let on_prev = shift_tier(-1);
    let on_next = shift_tier(1);

    let on_pick_tier = {
        let selected_tier = selected_tier.clone();
        Callback::from(move |_| selected_tier.set(Some(focused)))
    };

    let can_submit = selected_tier.is_some_and(|tier| tier.is_apex() || selected_division.is_some());

    let on_continue = {
        let selected_tier = selected_tier.clone();
        let selected_division = selected_division.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |_| {
            if let Some(tier) = *selected_tier {
                cb.emit((tier, *selected_division));
            }
        })
    };

    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let division_row = if selected_tier.is_some_and(|tier| !tier.is_apex()) {
        html! {
            <div class="division-row" role="radiogroup" aria-label="Division">
                { for Division::ALL.iter().map(|division| {
                    let is_picked = *selected_division == Some(*division);
                    let on_pick = {
                        let selected_division = selected_division.clone();
                        let division = *division;
                        Callback::from(move |_| selected_division.set(Some(division)))
                    };
                    html! {
                        <button
                            type="button"
                            role="radio"
                            aria-checked={is_picked.to_string()}
                            class={classes!("retro-btn-secondary", "division-btn", is_picked.then_some("selected"))}
                            onclick={on_pick}
                        >
                            { division.as_str() }
                        </button>
                    }
                }) }
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <section class="panel wizard-step" data-testid="rank-step">
            <h2>{ "Select your target rank" }</h2>
            <div class="tier-carousel">
                <button
                    type="button"
                    class="retro-btn-secondary carousel-nav"
                    onclick={on_prev}
                    disabled={*tier_index == 0}
                    aria-label="Previous tier"
                >
                    { "<" }
                </button>
                <div class="tier-strip">
                    { if *tier_index > 0 {
                        html! { <span class="tier-neighbor muted">{ Tier::ALL[*tier_index - 1].label() }</span> }
                    } else { Html::default() } }
                    <button
                        type="button"
                        class={classes!("tier-focus", (*selected_tier == Some(focused)).then_some("selected"))}
                        onclick={on_pick_tier}
                        data-testid="tier-focus"
                    >
                        { focused.label() }
                    </button>
                    { if *tier_index + 1 < Tier::ALL.len() {
                        html! { <span class="tier-neighbor muted">{ Tier::ALL[*tier_index + 1].label() }</span> }
                    } else { Html::default() } }
                </div>
                <button
                    type="button"
                    class="retro-btn-secondary carousel-nav"
                    onclick={on_next}
                    disabled={*tier_index + 1 == Tier::ALL.len()}
                    aria-label="Next tier"
                >
                    { ">" }
                </button>
            </div>
            { division_row }
            <div class="controls">
                <button class="retro-btn-secondary" onclick={on_back} data-testid="rank-back">
                    { "Back" }
                </button>
                <button
                    class="retro-btn-primary"
                    onclick={on_continue}
                    disabled={!can_submit}
                    data-testid="rank-continue"
                >
                    { "Continue" }
                </button>
            </div>
        </section>
    }
}
