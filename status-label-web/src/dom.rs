use crate::mount::MountError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Retrieve the document of the current browser window.
///
/// # Errors
/// Returns [`MountError::NoDocument`] outside of a browser context.
pub fn document() -> Result<Document, MountError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)
}

/// Look up the element a component should be mounted into.
///
/// # Errors
/// Returns an error when there is no document or no element with `id`.
pub fn element_by_id(id: &str) -> Result<Element, MountError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))
}

/// Text for a value thrown or rejected across the wasm boundary.
///
/// `Error` objects give their message, plain strings are used as-is, and any
/// other value falls back to its debug form.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
