use yew::prelude::*;

use crate::app::state::AppState;

/// Fetch the champion catalog once when the app mounts. The catalog is
/// cosmetic: a failed or slow fetch leaves the default empty catalog in
/// place and no wizard step waits on it.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let catalog = app_state.catalog.clone();
    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = crate::api::fetch_champion_catalog().await;
            catalog.set(std::rc::Rc::new(loaded));
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = catalog;
        || {}
    });
}
