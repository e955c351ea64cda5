use std::rc::Rc;

use riftcoach_core::{CHAMPION_ROSTER, ChampionCatalog, MAX_CHAMPIONS, PickList, toggle_pick};
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct ChampionStepProps {
    pub catalog: Rc<ChampionCatalog>,
    /// Disables submission while either analysis phase is in flight.
    pub busy: bool,
    pub on_submit: Callback<Vec<String>>,
    pub on_skip: Callback<()>,
    pub on_back: Callback<()>,
}

impl PartialEq for ChampionStepProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog) && self.busy == other.busy
    }
}

/// Icon asset path for a catalog slug.
fn icon_src(slug: &str) -> String {
    format!("/lol/15.22.1/img/champion/{slug}.png")
}

#[function_component(ChampionStep)]
pub fn champion_step(props: &ChampionStepProps) -> Html {
    let picks = use_state(PickList::default);
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let on_submit = {
        let picks = picks.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |_| {
            if !picks.is_empty() {
                cb.emit(picks.to_vec());
            }
        })
    };
    let on_skip = {
        let cb = props.on_skip.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let needle = query.to_lowercase();
    let catalog = props.catalog.clone();

    html! {
        <section class="panel wizard-step" data-testid="champion-step">
            <h2>{ "Select your champions" }</h2>
            <p class="muted">{ "Choose the champions you want coaching for" }</p>
            <p class="muted">{ format!("{} selected", picks.len()) }</p>
            <input
                type="text"
                class="champion-search"
                placeholder="Search champions..."
                value={(*query).clone()}
                oninput={on_search}
                aria-label="Search champions"
            />
            <div class="champion-grid" role="listbox" aria-label="Champions">
                { for CHAMPION_ROSTER
                    .iter()
                    .filter(|name| name.to_lowercase().contains(&needle))
                    .map(|name| {
                        let is_picked = picks.iter().any(|pick| pick == name);
                        let at_cap = !is_picked && picks.len() >= MAX_CHAMPIONS;
                        let on_toggle = {
                            let picks = picks.clone();
                            Callback::from(move |_| {
                                picks.set(toggle_pick(&picks, name, MAX_CHAMPIONS));
                            })
                        };
                        let icon = catalog.slug_for(name).map_or_else(
                            || html! { <span class="champion-fallback" aria-hidden="true">{ "?" }</span> },
                            |slug| html! { <img class="champion-icon" src={icon_src(slug)} alt="" /> },
                        );
                        html! {
                            <button
                                type="button"
                                aria-pressed={is_picked.to_string()}
                                class={classes!("champion-tile", is_picked.then_some("selected"))}
                                onclick={on_toggle}
                                disabled={at_cap}
                            >
                                { icon }
                                <span class="champion-name">{ *name }</span>
                            </button>
                        }
                    })
                }
            </div>
            <div class="controls">
                <button class="retro-btn-secondary" onclick={on_back} data-testid="champion-back">
                    { "Back" }
                </button>
                <button
                    class="retro-btn-secondary"
                    onclick={on_skip}
                    disabled={props.busy}
                    data-testid="champion-skip"
                >
                    { "Skip" }
                </button>
                <button
                    class="retro-btn-primary"
                    onclick={on_submit}
                    disabled={picks.is_empty() || props.busy}
                    data-testid="champion-continue"
                >
                    { "Get Coaching" }
                </button>
            </div>
        </section>
    }
}
