use riftcoach_core::{Division, Tier, WizardEvent};
use yew::prelude::*;

use crate::app::state::AppState;

/// The wizard callbacks, bundled once per render so the step views
/// never touch the state handles directly.
#[derive(Clone)]
pub struct AppHandlers {
    pub submit_identity: Callback<String>,
    pub submit_rank: Callback<(Tier, Option<Division>)>,
    pub submit_roles: Callback<Vec<String>>,
    pub skip_roles: Callback<()>,
    pub submit_champions: Callback<Vec<String>>,
    pub skip_champions: Callback<()>,
    pub commit_sample_size: Callback<String>,
    pub back: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        let submit_identity = {
            let state = state.clone();
            Callback::from(move |name: String| state.dispatch(WizardEvent::SubmitIdentity(name)))
        };
        let submit_rank = {
            let state = state.clone();
            Callback::from(move |(tier, division): (Tier, Option<Division>)| {
                state.dispatch(WizardEvent::SubmitRank { tier, division });
            })
        };
        let submit_roles = {
            let state = state.clone();
            Callback::from(move |roles: Vec<String>| {
                state.dispatch(WizardEvent::SubmitRoles(roles));
            })
        };
        let skip_roles = {
            let state = state.clone();
            Callback::from(move |()| state.dispatch(WizardEvent::SkipRoles))
        };
        let submit_champions = {
            let state = state.clone();
            Callback::from(move |champions: Vec<String>| {
                state.dispatch(WizardEvent::SubmitChampions(champions));
            })
        };
        let skip_champions = {
            let state = state.clone();
            Callback::from(move |()| state.dispatch(WizardEvent::SkipChampions))
        };
        let commit_sample_size = {
            let state = state.clone();
            Callback::from(move |input: String| {
                state.dispatch(WizardEvent::CommitSampleSize(input));
            })
        };
        let back = {
            let state = state.clone();
            Callback::from(move |()| state.dispatch(WizardEvent::Back))
        };

        Self {
            submit_identity,
            submit_rank,
            submit_roles,
            skip_roles,
            submit_champions,
            skip_champions,
            commit_sample_size,
            back,
        }
    }
}
