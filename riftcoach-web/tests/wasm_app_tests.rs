#![cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;
use yew::Renderer;

use riftcoach_web::app::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn app_boots_on_the_identity_step() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = document();

    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert!(
        doc.query_selector("[data-testid='identity-step']")
            .expect("query identity step")
            .is_some(),
        "the wizard must open on the identity question"
    );
    // later steps stay unmounted until their transitions fire
    assert!(
        doc.query_selector("[data-testid='rank-step']")
            .expect("query rank step")
            .is_none()
    );
}
