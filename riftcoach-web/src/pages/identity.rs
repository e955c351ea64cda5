use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct IdentityStepProps {
    pub on_submit: Callback<String>,
}

impl PartialEq for IdentityStepProps {
    fn eq(&self, _other: &Self) -> bool {
        // Always re-render; callbacks are not comparable
        false
    }
}

#[function_component(IdentityStep)]
pub fn identity_step(props: &IdentityStepProps) -> Html {
    let name = use_state(String::new);

    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = name.trim().to_string();
            if !trimmed.is_empty() {
                cb.emit(trimmed);
            }
        })
    };

    html! {
        <section class="panel wizard-step" data-testid="identity-step">
            <h1 class="wizard-title">{ "RiftCoach" }</h1>
            <p class="muted">{ "Personalized coaching from your recent ranked games" }</p>
            <form class="identity-form" {onsubmit}>
                <input
                    type="text"
                    class="identity-input"
                    placeholder="Enter your Riot ID, e.g. GraceXing#NA1"
                    value={(*name).clone()}
                    {oninput}
                    aria-label="Riot ID"
                />
                <button
                    type="submit"
                    class="retro-btn-primary"
                    disabled={name.trim().is_empty()}
                    data-testid="identity-continue"
                >
                    { "Start your climb" }
                </button>
            </form>
        </section>
    }
}
