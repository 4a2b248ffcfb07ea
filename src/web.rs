//!
//! Select widgets in the browser.
//!

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlOptionElement, HtmlSelectElement};

use crate::error::Error;
use crate::{ChangeHandler, Dom};

mod subscription;

pub use subscription::WebSubscription;

pub struct WebDom;

impl WebDom {
    pub fn document() -> Result<web_sys::Document, Error> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Host("no document".to_string()))
    }

    /// Every element in the document matching a CSS selector, in document order.
    pub fn query_all(selector: &str) -> Result<Vec<Element>, Error> {
        let node_list = Self::document()?.query_selector_all(selector)?;

        Ok((0..node_list.length())
            .filter_map(|index| node_list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl Dom for WebDom {
    type Node = Element;
    type Select = HtmlSelectElement;
    type OptionElement = HtmlOptionElement;
    type Subscription = WebSubscription;

    fn as_select(node: &Element) -> Option<HtmlSelectElement> {
        node.dyn_ref::<HtmlSelectElement>().cloned()
    }

    fn describe(node: &Element) -> String {
        node.tag_name()
    }

    fn same_select(a: &HtmlSelectElement, b: &HtmlSelectElement) -> bool {
        a == b
    }

    fn options(select: &HtmlSelectElement) -> Vec<HtmlOptionElement> {
        let options = select.options();

        (0..options.length())
            .filter_map(|index| options.item(index))
            .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
            .collect()
    }

    fn selected_index(select: &HtmlSelectElement) -> Option<usize> {
        match select.selected_index() {
            index if index < 0 => None,
            index => Some(index as usize),
        }
    }

    fn value(option: &HtmlOptionElement) -> String {
        option.value()
    }

    fn label(option: &HtmlOptionElement) -> String {
        option.text()
    }

    fn clone_option(option: &HtmlOptionElement) -> Result<HtmlOptionElement, Error> {
        option
            .clone_node_with_deep(true)?
            .dyn_into::<HtmlOptionElement>()
            .map_err(|node| Error::Host(format!("clone is not an option: {:?}", node)))
    }

    fn remove_option(select: &HtmlSelectElement, index: usize) -> Result<(), Error> {
        select.remove_with_index(index as i32);
        Ok(())
    }

    fn replace_options(
        select: &HtmlSelectElement,
        options: Vec<HtmlOptionElement>,
        selected: Option<usize>,
    ) -> Result<(), Error> {
        select.set_length(0);

        // Detached options may report themselves selected, so set every flag.
        for (index, option) in options.iter().enumerate() {
            option.set_selected(Some(index) == selected);
            select.add_with_html_option_element(option)?;
        }

        select.set_selected_index(selected.map(|index| index as i32).unwrap_or(-1));
        Ok(())
    }

    fn on_change(
        select: &HtmlSelectElement,
        handler: ChangeHandler,
    ) -> Result<WebSubscription, Error> {
        subscription::subscribe(select, "change", handler)
    }
}

impl From<wasm_bindgen::JsValue> for Error {
    fn from(js_error: wasm_bindgen::JsValue) -> Self {
        Error::Host(
            js_error
                .as_string()
                .unwrap_or_else(|| format!("{:?}", js_error)),
        )
    }
}
