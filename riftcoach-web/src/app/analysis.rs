//! Async driver for the compare-then-coach pipeline.
//!
//! All sequencing decisions live in the core [`Analysis`] machine; this
//! module only performs the HTTP calls it is told to and writes each
//! state change back through the handle.
use riftcoach_core::{Analysis, CompareRequest, Selection};
use yew::UseStateHandle;

/// Start a compare round for the given selection. A round already in
/// flight wins; the resubmission is dropped without a request.
pub fn run_analysis(handle: UseStateHandle<Analysis>, selection: &Selection) {
    let mut analysis = (*handle).clone();
    if !analysis.start_compare() {
        log::info!("compare already in flight; ignoring resubmission");
        return;
    }
    let Some(request) = CompareRequest::from_selection(selection) else {
        log::error!("compare submitted without a completed rank step");
        return;
    };
    handle.set(analysis.clone());
    spawn_round(handle, analysis, request);
}

#[cfg(target_arch = "wasm32")]
fn spawn_round(handle: UseStateHandle<Analysis>, mut analysis: Analysis, request: CompareRequest) {
    use riftcoach_core::CoachRequest;

    wasm_bindgen_futures::spawn_local(async move {
        match crate::api::post_compare(&request).await {
            Ok(report) => {
                // compare success unconditionally chains the coach call
                if let Some(job) = analysis.finish_compare(Ok(report)) {
                    handle.set(analysis.clone());
                    let outcome = crate::api::post_coach(&CoachRequest::from(job)).await;
                    analysis.finish_coach(outcome);
                    handle.set(analysis);
                }
            }
            Err(message) => {
                let _ = analysis.finish_compare(Err(message));
                handle.set(analysis);
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_round(_handle: UseStateHandle<Analysis>, _analysis: Analysis, _request: CompareRequest) {
    // transport is browser-only; server rendering shows the pending state
}
