use status_label_core::{Badge, StatusClassTable, StatusClassifier, StatusLabelInput, StatusValue};
use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;

thread_local! {
    static DEFAULT_CLASSIFIER: Classifier = Classifier::new(StatusClassTable::default_config());
}

/// Shared handle to the classifier used for badge classes.
///
/// Compared by pointer so props stay cheap to diff.
#[derive(Clone)]
pub struct Classifier(Rc<dyn StatusClassifier>);

impl Classifier {
    pub fn new(classifier: impl StatusClassifier + 'static) -> Self {
        Self(Rc::new(classifier))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.with(Clone::clone)
    }
}

impl PartialEq for Classifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl StatusClassifier for Classifier {
    fn status_class(&self, status: &str, context: &str) -> String {
        self.0.status_class(status, context)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub status: StatusValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub button_label: Option<AttrValue>,
    #[prop_or_default]
    pub classifier: Classifier,
}

impl From<StatusLabelInput> for Props {
    fn from(input: StatusLabelInput) -> Self {
        Self {
            status: input.status,
            title: input.title.map(AttrValue::from),
            button_label: input.button_label.map(AttrValue::from),
            classifier: Classifier::default(),
        }
    }
}

/// Keys for the rendered items: titles when every badge has a distinct one,
/// positions otherwise.
fn item_keys(badges: &[Badge]) -> Vec<String> {
    let mut seen = HashSet::new();
    let titled = badges
        .iter()
        .all(|badge| badge.title.as_deref().is_some_and(|t| seen.insert(t)));
    if titled {
        badges
            .iter()
            .filter_map(|badge| badge.title.clone())
            .collect()
    } else {
        (0..badges.len()).map(|idx| idx.to_string()).collect()
    }
}

fn badge_item(badge: &Badge, key: String) -> Html {
    html! {
        <li key={key} class={badge.class.clone()}>
            if let Some(prefix) = badge.title_prefix() {
                <span class="status-list-title">{ prefix }</span>
            }
            { badge.text.clone() }
        </li>
    }
}

#[function_component(StatusLabel)]
pub fn status_label(props: &Props) -> Html {
    let Some(badges) = status_label_core::badges_for(
        &props.status,
        props.title.as_deref(),
        props.button_label.as_deref(),
        &props.classifier,
    ) else {
        return html! {};
    };
    let keys = item_keys(&badges);

    html! {
        <ul class="status-list">
            { for badges.iter().zip(keys).map(|(badge, key)| badge_item(badge, key)) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use status_label_core::StatusEntry;
    use yew::LocalServerRenderer;

    fn badge(title: Option<&str>) -> Badge {
        Badge {
            class: "c".into(),
            title: title.map(str::to_string),
            text: "t".into(),
        }
    }

    #[test]
    fn distinct_titles_are_used_as_keys() {
        let keys = item_keys(&[badge(Some("a")), badge(Some("b"))]);
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn missing_or_repeated_titles_fall_back_to_positions() {
        assert_eq!(item_keys(&[badge(Some("a")), badge(None)]), vec!["0", "1"]);
        assert_eq!(
            item_keys(&[badge(Some("a")), badge(Some("a"))]),
            vec!["0", "1"]
        );
    }

    #[test]
    fn default_classifier_is_shared() {
        assert!(Classifier::default() == Classifier::default());
        let custom = Classifier::new(|status: &str, _: &str| status.to_string());
        assert!(custom != Classifier::default());
        assert!(custom == custom.clone());
    }

    #[test]
    fn repeated_titles_still_render_every_badge() {
        let props = Props {
            status: StatusValue::Entries(vec![
                StatusEntry::titled("released", "Same"),
                StatusEntry::titled("deleted", "Same"),
            ]),
            title: None,
            button_label: None,
            classifier: Classifier::default(),
        };
        let html = block_on(LocalServerRenderer::<StatusLabel>::with_props(props).render());
        assert!(html.contains("released") && html.contains("deleted"), "{html}");
    }
}
