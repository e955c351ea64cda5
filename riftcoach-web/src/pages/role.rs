use riftcoach_core::{MAX_ROLES, PickList, Role, toggle_pick};
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct RoleStepProps {
    pub on_submit: Callback<Vec<String>>,
    pub on_skip: Callback<()>,
    pub on_back: Callback<()>,
}

impl PartialEq for RoleStepProps {
    fn eq(&self, _other: &Self) -> bool {
        // Always re-render; callbacks are not comparable
        false
    }
}

const fn role_icon(role: Role) -> &'static str {
    match role {
        Role::Top => "⚔️",
        Role::Jungle => "🌲",
        Role::Mid => "⭐",
        Role::Adc => "🏹",
        Role::Support => "🛡️",
    }
}

#[function_component(RoleStep)]
pub fn role_step(props: &RoleStepProps) -> Html {
    let picks = use_state(PickList::default);

    let on_continue = {
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

    html! {
        <section class="panel wizard-step" data-testid="role-step">
            <h2>{ "Select your roles" }</h2>
            <p class="muted">{ "Choose 1-2 roles you want to improve in" }</p>
            <p class="muted">{ format!("{}/{} selected", picks.len(), MAX_ROLES) }</p>
            <div class="role-grid">
                { for Role::ALL.iter().map(|role| {
                    let name = role.name();
                    let position = picks.iter().position(|pick| pick == name);
                    let on_toggle = {
                        let picks = picks.clone();
                        Callback::from(move |_| picks.set(toggle_pick(&picks, name, MAX_ROLES)))
                    };
                    html! {
                        <button
                            type="button"
                            aria-pressed={position.is_some().to_string()}
                            class={classes!("role-tile", position.is_some().then_some("selected"))}
                            onclick={on_toggle}
                            data-testid={format!("role-{}", name.to_ascii_lowercase())}
                        >
                            <span class="role-icon" aria-hidden="true">{ role_icon(*role) }</span>
                            <span class="role-name">{ name }</span>
                            { match position {
                                Some(0) => html! { <span class="pick-badge">{ "PRIMARY" }</span> },
                                Some(_) => html! { <span class="pick-badge">{ "SECONDARY" }</span> },
                                None => Html::default(),
                            } }
                        </button>
                    }
                }) }
            </div>
            <div class="controls">
                <button class="retro-btn-secondary" onclick={on_back} data-testid="role-back">
                    { "Back" }
                </button>
                <button class="retro-btn-secondary" onclick={on_skip} data-testid="role-skip">
                    { "Skip" }
                </button>
                <button
                    class="retro-btn-primary"
                    onclick={on_continue}
                    disabled={picks.is_empty()}
                    data-testid="role-continue"
                >
                    { "Continue" }
                </button>
            </div>
        </section>
    }
}
