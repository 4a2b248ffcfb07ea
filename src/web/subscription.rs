use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::Error;
use crate::ChangeHandler;

///
/// An event listener installed on a select.
/// The listener is removed again when this is dropped.
///
pub struct WebSubscription {
    target: web_sys::EventTarget,
    event_type: &'static str,
    web_closure: Closure<dyn Fn()>,
}

pub fn subscribe(
    target: &web_sys::EventTarget,
    event_type: &'static str,
    handler: ChangeHandler,
) -> Result<WebSubscription, Error> {
    let web_closure = Closure::wrap(Box::new(move || {
        if let Err(error) = handler() {
            wasm_bindgen::throw_str(&error.to_string());
        }
    }) as Box<dyn Fn()>);

    target.add_event_listener_with_callback(event_type, web_closure.as_ref().unchecked_ref())?;

    Ok(WebSubscription {
        target: target.clone(),
        event_type,
        web_closure,
    })
}

impl Drop for WebSubscription {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.web_closure.as_ref().unchecked_ref(),
        );

        if removed.is_err() {
            tracing::warn!(event_type = self.event_type, "failed to remove listener");
        }
    }
}
