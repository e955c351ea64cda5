use std::rc::Rc;

use riftcoach_core::{
    Analysis, ChampionCatalog, Effect, SampleSize, Selection, WizardEvent, WizardStep, apply,
};
use yew::prelude::*;

use crate::app::analysis::run_analysis;

/// Every piece of session state, one handle per concern. The wizard's
/// Selection is only ever replaced through [`AppState::dispatch`].
#[derive(Clone)]
pub struct AppState {
    pub step: UseStateHandle<WizardStep>,
    pub selection: UseStateHandle<Selection>,
    pub analysis: UseStateHandle<Analysis>,
    pub catalog: UseStateHandle<Rc<ChampionCatalog>>,
    /// Edit-in-progress text of the sample-size field; committed into
    /// the Selection on blur.
    pub sample_input: UseStateHandle<AttrValue>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        step: use_state(|| WizardStep::Identity),
        selection: use_state(Selection::new),
        analysis: use_state(Analysis::new),
        catalog: use_state(|| Rc::new(ChampionCatalog::default())),
        sample_input: use_state(|| AttrValue::from(SampleSize::DEFAULT.to_string())),
    }
}

impl AppState {
    /// Feed one wizard event through the core state machine and apply
    /// the accepted transition to the handles. Rejected events are
    /// logged and change nothing; the step views already disable the
    /// controls that would produce them.
    pub fn dispatch(&self, event: WizardEvent) {
        match apply(*self.step, &self.selection, event) {
            Ok(transition) => {
                if transition.effect == Some(Effect::RunCompare) {
                    run_analysis(self.analysis.clone(), &transition.selection);
                }
                self.sample_input.set(AttrValue::from(
                    transition.selection.sample_size.get().to_string(),
                ));
                self.step.set(transition.step);
                self.selection.set(transition.selection);
            }
            Err(err) => log::warn!("wizard event rejected: {err}"),
        }
    }
}
