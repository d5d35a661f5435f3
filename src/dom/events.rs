// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners are attached with Closure::forget(); each render attaches a fresh
// set, so handlers must only read shared state, never own it.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, InputEvent, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Input handler receiving the input's `name` attribute and current value
pub fn on_named_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String, String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: InputEvent| {
        if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(input.name(), input.value());
        }
    }) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Form submit handler; the default navigation is always prevented
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
