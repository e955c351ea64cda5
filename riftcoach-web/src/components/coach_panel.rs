use std::rc::Rc;

use riftcoach_core::{ChampionCatalog, Phase};
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct CoachPanelProps {
    pub coach: Phase<String>,
    /// Primary champion pick, used for the coach avatar.
    pub champion: Option<String>,
    pub catalog: Rc<ChampionCatalog>,
}

impl PartialEq for CoachPanelProps {
    fn eq(&self, other: &Self) -> bool {
        self.coach == other.coach
            && self.champion == other.champion
            && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

fn avatar(champion: Option<&str>, catalog: &ChampionCatalog) -> Html {
    let icon = champion.and_then(|name| catalog.slug_for(name)).map_or_else(
        || html! { <span class="coach-avatar-fallback" aria-hidden="true">{ "?" }</span> },
        |slug| {
            html! {
                <img
                    class="coach-avatar-icon"
                    src={format!("/lol/15.22.1/img/champion/{slug}.png")}
                    alt={champion.unwrap_or_default().to_string()}
                />
            }
        },
    );
    html! { <div class="coach-avatar">{ icon }</div> }
}

#[function_component(CoachPanel)]
pub fn coach_panel(props: &CoachPanelProps) -> Html {
    let body = match &props.coach {
        Phase::Idle => html! {
            <p class="muted" data-testid="coach-hint">
                { "Select a champion and press Get Coaching to get tailored advice." }
            </p>
        },
        Phase::Pending => html! {
            <p class="muted" data-testid="coach-pending">
                { "Summoning your coach from the Rift…" }
            </p>
        },
        Phase::Failed(message) => html! {
            <p class="error-text" data-testid="coach-error">{ message.clone() }</p>
        },
        Phase::Succeeded(text) => html! {
            <div class="coach-bubble-row" data-testid="coach-text">
                { avatar(props.champion.as_deref(), &props.catalog) }
                <div class="coach-bubble">{ text.clone() }</div>
            </div>
        },
    };

    html! {
        <section class="panel coach-panel" data-testid="coach-panel">
            <h2>{ "Personalized coaching" }</h2>
            { body }
        </section>
    }
}
