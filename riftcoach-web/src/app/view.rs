use yew::prelude::*;

use riftcoach_core::WizardStep;

use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::coach_panel::CoachPanel;
use crate::components::compare_panel::ComparePanel;
use crate::pages::champion::ChampionStep;
use crate::pages::identity::IdentityStep;
use crate::pages::rank::RankStep;
use crate::pages::role::RoleStep;

/// Render the step the wizard is on. Steps one to three stand alone;
/// the terminal step shows the champion picker beside the comparison
/// panel and the coaching bubble.
pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let body = match *state.step {
        WizardStep::Identity => html! {
            <IdentityStep on_submit={handlers.submit_identity.clone()} />
        },
        WizardStep::Rank => html! {
            <RankStep
                on_submit={handlers.submit_rank.clone()}
                on_back={handlers.back.clone()}
            />
        },
        WizardStep::Role => html! {
            <RoleStep
                on_submit={handlers.submit_roles.clone()}
                on_skip={handlers.skip_roles.clone()}
                on_back={handlers.back.clone()}
            />
        },
        WizardStep::Champion => render_analysis_step(state, &handlers),
    };

    html! {
        <main id="main" role="main" class="wizard-shell">
            { body }
        </main>
    }
}

fn render_analysis_step(state: &AppState, handlers: &AppHandlers) -> Html {
    let selection = (*state.selection).clone();
    let analysis = (*state.analysis).clone();
    let busy = analysis.compare.is_pending() || analysis.coach.is_pending();

    let on_sample_input = {
        let sample_input = state.sample_input.clone();
        Callback::from(move |text: String| sample_input.set(AttrValue::from(text)))
    };

    html! {
        <div class="analysis-grid">
            <div class="analysis-side">
                <ChampionStep
                    catalog={(*state.catalog).clone()}
                    busy={busy}
                    on_submit={handlers.submit_champions.clone()}
                    on_skip={handlers.skip_champions.clone()}
                    on_back={handlers.back.clone()}
                />
                <CoachPanel
                    coach={analysis.coach.clone()}
                    champion={selection.champions.first().cloned()}
                    catalog={(*state.catalog).clone()}
                />
            </div>
            <ComparePanel
                selection={selection}
                compare={analysis.compare}
                sample_input={(*state.sample_input).clone()}
                {on_sample_input}
                on_sample_commit={handlers.commit_sample_size.clone()}
            />
        </div>
    }
}
