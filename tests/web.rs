#![cfg(all(target_arch = "wasm32", feature = "web"))]

use select_unique::prelude::*;
use select_unique::web::WebDom;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r#"
<select class="unique"><option></option><option>A</option><option>B</option><option>C</option></select>
<select class="unique"><option></option><option>A</option><option>B</option><option>C</option></select>
"#;

fn setup() -> Vec<web_sys::HtmlSelectElement> {
    let body = WebDom::document().unwrap().body().unwrap();
    body.set_inner_html(MARKUP);

    WebDom::query_all("select.unique")
        .unwrap()
        .into_iter()
        .map(|element| element.dyn_into().unwrap())
        .collect()
}

fn values(select: &web_sys::HtmlSelectElement) -> Vec<String> {
    WebDom::options(select)
        .iter()
        .map(|option| option.value())
        .collect()
}

fn change(select: &web_sys::HtmlSelectElement, value: &str) {
    select.set_value(value);
    let event = web_sys::Event::new("change").unwrap();
    select.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn rejects_non_selects() {
    setup();

    let error = SyncGroup::<WebDom>::new(WebDom::query_all("option").unwrap(), Config::new())
        .err()
        .unwrap();
    assert_eq!(
        error.to_string(),
        "Only selection widgets are accepted, found OPTION"
    );

    let error = SyncGroup::<WebDom>::new(WebDom::query_all("nothing").unwrap(), Config::new())
        .err()
        .unwrap();
    assert_eq!(error.to_string(), "No selection widgets found");
}

#[wasm_bindgen_test]
fn change_events_keep_selects_unique() {
    let selects = setup();
    let bound = SyncGroup::<WebDom>::new(WebDom::query_all("select.unique").unwrap(), Config::new())
        .unwrap()
        .bind()
        .unwrap();

    change(&selects[0], "B");
    assert_eq!(values(&selects[1]), vec!["", "A", "C"]);

    change(&selects[1], "C");
    assert_eq!(values(&selects[0]), vec!["", "A", "B"]);
    assert_eq!(selects[0].value(), "B");

    change(&selects[0], "");
    assert_eq!(values(&selects[1]), vec!["", "A", "B", "C"]);
    assert_eq!(selects[1].value(), "C");

    assert_eq!(bound.selected(), vec![Choice::new("C", "C")]);
}
