//! Mounting the status label into a host page.
use crate::components::StatusLabel;
use crate::dom;
use status_label_core::StatusLabelInput;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("no element with id {0:?}")]
    MissingElement(String),
    #[error("invalid status label props: {0}")]
    InvalidProps(String),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// Decode host props (`status`, `title`, `buttonLabel`) from a JavaScript value.
///
/// # Errors
/// Returns [`MountError::InvalidProps`] if the value is not an object.
pub fn props_from_js(value: JsValue) -> Result<StatusLabelInput, MountError> {
    serde_wasm_bindgen::from_value(value).map_err(|err| {
        let message = dom::js_error_message(&err.into());
        MountError::InvalidProps(message)
    })
}

/// Render a status label into the element with `element_id`.
///
/// # Errors
/// Fails when the element is missing or the props cannot be decoded.
#[wasm_bindgen(js_name = mountStatusLabel)]
pub fn mount_status_label(element_id: &str, props: JsValue) -> Result<(), JsValue> {
    let input = props_from_js(props)?;
    let root = dom::element_by_id(element_id)?;
    log::debug!("mounting status label into #{element_id}");
    yew::Renderer::<StatusLabel>::with_root_and_props(root, input.into()).render();
    Ok(())
}
