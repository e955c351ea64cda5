use riftcoach_core::{
    ComparisonReport, MetricRow, Phase, SampleSize, Selection, Standing, compare_summaries,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ComparePanelProps {
    pub selection: Selection,
    pub compare: Phase<ComparisonReport>,
    /// Edit-in-progress sample-size text, owned by the app state.
    pub sample_input: AttrValue,
    pub on_sample_input: Callback<String>,
    /// Emits the field text to commit on blur.
    pub on_sample_commit: Callback<String>,
}

const fn standing_class(standing: Standing) -> &'static str {
    match standing {
        Standing::Better => "delta-better",
        Standing::Worse => "delta-worse",
        Standing::Even => "delta-even",
    }
}

fn metric_tile(row: &MetricRow, cohort_label: &str) -> Html {
    html! {
        <div class="metric-tile" data-testid={format!("metric-{}", row.key)}>
            <div class="metric-label">{ row.label }</div>
            <div class="metric-values">
                <div class="metric-side">
                    <div class="muted">{ "You" }</div>
                    <div class="metric-value">{ row.player.clone() }</div>
                </div>
                <div class="metric-side">
                    <div class="muted">{ cohort_label.to_string() }</div>
                    <div class="metric-value">{ row.cohort.clone() }</div>
                </div>
            </div>
            <div class={classes!("metric-delta", standing_class(row.standing))}>
                { row.delta.clone() }
            </div>
        </div>
    }
}

fn result_view(selection: &Selection, report: &ComparisonReport) -> Html {
    let rank_label = selection
        .rank
        .map(|rank| rank.to_string())
        .unwrap_or_default();
    let role_part = selection
        .roles
        .first()
        .map(|role| format!(" in {role}"))
        .unwrap_or_default();
    let champion_part = selection
        .champions
        .first()
        .map(|champion| format!(" on {champion}"))
        .unwrap_or_default();
    let rows = compare_summaries(&report.player_summary, &report.rank_summary);
    let raw = serde_json::to_string_pretty(report).unwrap_or_default();

    html! {
        <>
            <p class="compare-header" data-testid="compare-header">
                { format!(
                    "Comparing {} to {rank_label} players{role_part}{champion_part}.",
                    selection.riot_id,
                ) }
            </p>
            <div class="metric-grid">
                { for rows.iter().map(|row| metric_tile(row, &rank_label)) }
            </div>
            <details class="raw-json">
                <summary class="muted">{ "Debug: show raw comparison JSON" }</summary>
                <pre>{ raw }</pre>
            </details>
        </>
    }
}

#[function_component(ComparePanel)]
pub fn compare_panel(props: &ComparePanelProps) -> Html {
    let oninput = {
        let cb = props.on_sample_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onblur = {
        let cb = props.on_sample_commit.clone();
        Callback::from(move |e: FocusEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };

    let body = match &props.compare {
        Phase::Idle => html! {
            <p class="muted" data-testid="compare-hint">
                { "Select your champion, then press Get Coaching to run the comparison." }
            </p>
        },
        Phase::Pending => html! {
            <p class="compare-pending" data-testid="compare-pending">
                { "Analyzing your games…" }
            </p>
        },
        Phase::Failed(message) => html! {
            <p class="error-text" data-testid="compare-error">{ message.clone() }</p>
        },
        Phase::Succeeded(report) => result_view(&props.selection, report),
    };

    html! {
        <section class="panel compare-panel" data-testid="compare-panel">
            <h2>{ "Compare yourself to a target rank" }</h2>
            <div class="sample-size">
                <label for="sample-size">{ "Number of recent ranked games to analyze" }</label>
                <p class="muted">
                    { "We'll fetch this many of your most recent Ranked Solo/Duo games." }
                </p>
                <input
                    id="sample-size"
                    type="number"
                    min={SampleSize::MIN.to_string()}
                    max={SampleSize::MAX.to_string()}
                    step="1"
                    value={props.sample_input.clone()}
                    {oninput}
                    {onblur}
                />
            </div>
            { body }
        </section>
    }
}
