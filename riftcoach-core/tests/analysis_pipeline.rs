//! Exercises the compare-then-coach pipeline the way the async driver
//! drives it, without any transport.
use riftcoach_core::{Analysis, CoachRequest, ComparisonReport, Phase, compare_summaries};
use serde_json::json;

fn report() -> ComparisonReport {
    serde_json::from_value(json!({
        "riot_id": "GraceXing#NA1",
        "tier": "DIAMOND",
        "division": "II",
        "player_summary": {
            "win_rate": 0.55,
            "avg_kda": 3.1,
            "avg_vision_per_min": 1.21,
        },
        "rank_summary": {
            "win_rate": 0.50,
            "avg_kda": 3.4,
        },
        "delta": { "win_rate": 0.05 },
    }))
    .unwrap()
}

#[test]
fn happy_path_chains_coach_exactly_once() {
    let mut analysis = Analysis::new();
    assert!(analysis.start_compare());
    assert!(analysis.compare.is_pending());
    assert!(analysis.coach.is_idle());

    let job = analysis.finish_compare(Ok(report())).expect("chained job");

    // coach is already pending from the chain; nothing can start a
    // second run for the same round
    assert!(analysis.coach.is_pending());
    assert!(!analysis.start_coach());

    analysis.finish_coach(Ok("Ward the river before objectives.".to_string()));
    assert_eq!(
        analysis.coach.value().map(String::as_str),
        Some("Ward the river before objectives.")
    );
    assert_eq!(analysis.compare.value(), Some(&report()));
    assert_eq!(job, report());
}

#[test]
fn the_chained_job_carries_the_entire_response() {
    let mut analysis = Analysis::new();
    assert!(analysis.start_compare());
    let job = analysis.finish_compare(Ok(report())).unwrap();

    let body = serde_json::to_value(CoachRequest::from(job)).unwrap();
    // opaque echoed fields ride along unmodified
    assert_eq!(body["comparison_json"]["riot_id"], "GraceXing#NA1");
    assert_eq!(body["comparison_json"]["delta"]["win_rate"], 0.05);
}

#[test]
fn guard_rejects_overlapping_compare_rounds() {
    let mut analysis = Analysis::new();
    assert!(analysis.start_compare());
    // a second submission while in flight must not create a request
    assert!(!analysis.start_compare());
    assert!(analysis.compare.is_pending());

    let _ = analysis.finish_compare(Ok(report()));
    analysis.finish_coach(Ok(String::new()));

    // the next round starts clean
    assert!(analysis.start_compare());
    assert!(analysis.compare.is_pending());
    assert!(analysis.coach.is_idle());
}

#[test]
fn compare_failure_shows_no_stale_data_and_never_coaches() {
    let mut analysis = Analysis::new();
    assert!(analysis.start_compare());
    let _ = analysis.finish_compare(Ok(report()));
    analysis.finish_coach(Ok("old advice".to_string()));

    // second run fails: both prior outcomes are gone, coach untouched
    assert!(analysis.start_compare());
    let job = analysis.finish_compare(Err("Compare request failed with status 500".to_string()));
    assert_eq!(job, None);
    assert_eq!(
        analysis.compare.error(),
        Some("Compare request failed with status 500")
    );
    assert_eq!(analysis.coach, Phase::Idle);
}

#[test]
fn coach_failure_is_isolated_from_the_compare_panel() {
    let mut analysis = Analysis::new();
    assert!(analysis.start_compare());
    let _ = analysis.finish_compare(Ok(report()));
    analysis.finish_coach(Err("Coach request failed with status 502".to_string()));

    // both messages observable at once, compare result intact
    assert_eq!(analysis.compare.value(), Some(&report()));
    assert_eq!(
        analysis.coach.error(),
        Some("Coach request failed with status 502")
    );
}

#[test]
fn comparator_consumes_the_report_in_parallel_with_coaching() {
    let report = report();
    let rows = compare_summaries(&report.player_summary, &report.rank_summary);

    // vision is missing from the cohort side, so only two rows render
    let keys: Vec<_> = rows.iter().map(|row| row.key).collect();
    assert_eq!(keys, ["win_rate", "avg_kda"]);
    assert_eq!(rows[0].delta, "+5.0% vs rank average");
    assert_eq!(rows[1].delta, "-0.30 vs rank average");
}
