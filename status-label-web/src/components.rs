pub mod status_label;

pub use status_label::{Classifier, Props as StatusLabelProps, StatusLabel};
