//! Server-side rendering of the status label to HTML strings.
use crate::components::{StatusLabel, StatusLabelProps};
use status_label_core::StatusLabelInput;
use yew::LocalServerRenderer;

/// Render the component with explicit props.
#[allow(clippy::future_not_send)] // `LocalServerRenderer` is tied to the current thread.
pub async fn render_props(props: StatusLabelProps) -> String {
    LocalServerRenderer::<StatusLabel>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// Render host props with the default classifier.
#[allow(clippy::future_not_send)]
pub async fn render_status_label(input: StatusLabelInput) -> String {
    render_props(input.into()).await
}
