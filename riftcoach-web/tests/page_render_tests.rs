use std::rc::Rc;

use futures::executor::block_on;
use riftcoach_core::{
    ChampionCatalog, ComparisonReport, Division, Phase, Rank, Selection, Tier,
};
use riftcoach_web::components::coach_panel::{CoachPanel, CoachPanelProps};
use riftcoach_web::components::compare_panel::{ComparePanel, ComparePanelProps};
use riftcoach_web::pages::champion::{ChampionStep, ChampionStepProps};
use riftcoach_web::pages::identity::{IdentityStep, IdentityStepProps};
use riftcoach_web::pages::rank::{RankStep, RankStepProps};
use riftcoach_web::pages::role::{RoleStep, RoleStepProps};
use yew::{AttrValue, Callback, LocalServerRenderer};

const CATALOG_JSON: &str = r#"{
    "data": {
        "Ahri": { "id": "Ahri", "name": "Ahri" },
        "MonkeyKing": { "id": "MonkeyKing", "name": "Wukong" }
    }
}"#;

fn report() -> ComparisonReport {
    serde_json::from_value(serde_json::json!({
        "riot_id": "GraceXing#NA1",
        "tier": "DIAMOND",
        "division": "II",
        "player_summary": { "win_rate": 0.55, "avg_kda": 3.1 },
        "rank_summary": { "win_rate": 0.50, "avg_kda": 3.4 },
    }))
    .unwrap()
}

fn selection() -> Selection {
    let mut selection = Selection::new();
    selection.riot_id = "GraceXing#NA1".to_string();
    selection.rank = Some(Rank::new(Tier::Diamond, Some(Division::II)));
    selection.roles = ["Mid".to_string()].into_iter().collect();
    selection.champions = ["Ahri".to_string()].into_iter().collect();
    selection
}

fn compare_panel_props(compare: Phase<ComparisonReport>) -> ComparePanelProps {
    ComparePanelProps {
        selection: selection(),
        compare,
        sample_input: AttrValue::from("20"),
        on_sample_input: Callback::noop(),
        on_sample_commit: Callback::noop(),
    }
}

#[test]
fn identity_step_renders_the_intro_form() {
    let html = block_on(
        LocalServerRenderer::<IdentityStep>::with_props(IdentityStepProps {
            on_submit: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("RiftCoach"));
    assert!(html.contains("Start your climb"));
    assert!(html.contains("disabled"));
}

#[test]
fn rank_step_starts_focused_on_gold() {
    let html = block_on(
        LocalServerRenderer::<RankStep>::with_props(RankStepProps {
            on_submit: Callback::noop(),
            on_back: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Gold"));
    // the neighbors fade in beside the focused tier
    assert!(html.contains("Silver"));
    assert!(html.contains("Platinum"));
    // no tier picked yet, so no division row and a disabled continue
    assert!(!html.contains("division-row"));
}

#[test]
fn role_step_lists_the_five_roles() {
    let html = block_on(
        LocalServerRenderer::<RoleStep>::with_props(RoleStepProps {
            on_submit: Callback::noop(),
            on_skip: Callback::noop(),
            on_back: Callback::noop(),
        })
        .render(),
    );
    for name in ["Top", "Jungle", "Mid", "ADC", "Support"] {
        assert!(html.contains(name), "missing role tile {name}");
    }
    assert!(html.contains("0/2 selected"));
    assert!(html.contains("Skip"));
}

#[test]
fn champion_step_uses_catalog_icons_and_fallbacks() {
    let catalog = Rc::new(ChampionCatalog::from_json(CATALOG_JSON).unwrap());
    let html = block_on(
        LocalServerRenderer::<ChampionStep>::with_props(ChampionStepProps {
            catalog,
            busy: false,
            on_submit: Callback::noop(),
            on_skip: Callback::noop(),
            on_back: Callback::noop(),
        })
        .render(),
    );
    // a cataloged champion gets an icon, Wukong through its asset slug
    assert!(html.contains("/lol/15.22.1/img/champion/Ahri.png"));
    assert!(html.contains("/lol/15.22.1/img/champion/MonkeyKing.png"));
    // everyone else renders the plain tile
    assert!(html.contains("Teemo"));
    assert!(html.contains("champion-fallback"));
    assert!(html.contains("Get Coaching"));
}

#[test]
fn champion_step_disables_submission_while_busy() {
    let html = block_on(
        LocalServerRenderer::<ChampionStep>::with_props(ChampionStepProps {
            catalog: Rc::new(ChampionCatalog::default()),
            busy: true,
            on_submit: Callback::noop(),
            on_skip: Callback::noop(),
            on_back: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Get Coaching"));
    assert!(html.contains("disabled"));
}

#[test]
fn compare_panel_idle_shows_the_hint() {
    let html = block_on(
        LocalServerRenderer::<ComparePanel>::with_props(compare_panel_props(Phase::Idle)).render(),
    );
    assert!(html.contains("Compare yourself to a target rank"));
    assert!(html.contains("press Get Coaching"));
    assert!(!html.contains("Analyzing your games"));
}

#[test]
fn compare_panel_pending_and_failed_states_render_their_messages() {
    let pending = block_on(
        LocalServerRenderer::<ComparePanel>::with_props(compare_panel_props(Phase::Pending))
            .render(),
    );
    assert!(pending.contains("Analyzing your games"));

    let failed = block_on(
        LocalServerRenderer::<ComparePanel>::with_props(compare_panel_props(Phase::Failed(
            "no matches found for GraceXing#NA1".to_string(),
        )))
        .render(),
    );
    assert!(failed.contains("no matches found for GraceXing#NA1"));
    // a failed round shows no stale metric tiles
    assert!(!failed.contains("metric-tile"));
}

#[test]
fn compare_panel_success_renders_metric_rows() {
    let html = block_on(
        LocalServerRenderer::<ComparePanel>::with_props(compare_panel_props(Phase::Succeeded(
            report(),
        )))
        .render(),
    );
    assert!(html.contains("Comparing GraceXing#NA1 to DIAMOND II players in Mid on Ahri."));
    assert!(html.contains("55.0%"));
    assert!(html.contains("+5.0% vs rank average"));
    assert!(html.contains("-0.30 vs rank average"));
    assert!(html.contains("Debug: show raw comparison JSON"));
}

#[test]
fn coach_panel_tracks_its_phase_independently() {
    let catalog = Rc::new(ChampionCatalog::from_json(CATALOG_JSON).unwrap());

    let pending = block_on(
        LocalServerRenderer::<CoachPanel>::with_props(CoachPanelProps {
            coach: Phase::Pending,
            champion: Some("Ahri".to_string()),
            catalog: catalog.clone(),
        })
        .render(),
    );
    assert!(pending.contains("Summoning your coach from the Rift"));

    let failed = block_on(
        LocalServerRenderer::<CoachPanel>::with_props(CoachPanelProps {
            coach: Phase::Failed("Coach request failed with status 502".to_string()),
            champion: Some("Ahri".to_string()),
            catalog: catalog.clone(),
        })
        .render(),
    );
    assert!(failed.contains("Coach request failed with status 502"));

    let succeeded = block_on(
        LocalServerRenderer::<CoachPanel>::with_props(CoachPanelProps {
            coach: Phase::Succeeded("Ward the river before objectives.".to_string()),
            champion: Some("Ahri".to_string()),
            catalog,
        })
        .render(),
    );
    assert!(succeeded.contains("Ward the river before objectives."));
    assert!(succeeded.contains("/lol/15.22.1/img/champion/Ahri.png"));
}
