use proptest::prelude::*;
use serde_json::json;
use status_label_core::{
    Badge, LABEL_CONTEXT, StatusClassTable, StatusClassifier, StatusLabelInput, badges,
};

fn decode(props: serde_json::Value) -> StatusLabelInput {
    serde_json::from_value(props).expect("props decode")
}

/// Composite entries as `(status, title)` pairs with distinct titles where present.
fn composite_entries() -> impl Strategy<Value = Vec<(String, Option<String>)>> {
    prop::collection::btree_map(
        "[A-Za-z][A-Za-z0-9 ]{0,11}",
        (".*", any::<bool>()),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(title, (status, titled))| (status, titled.then_some(title)))
            .collect()
    })
}

proptest! {
    #[test]
    fn single_status_text_and_class_follow_the_classifier(status in ".*") {
        let table = StatusClassTable::shared();
        let out = badges(&decode(json!({ "status": &status })), table).unwrap();
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(&out[0].text, &status);
        prop_assert_eq!(&out[0].class, &table.status_class(&status, LABEL_CONTEXT));
        prop_assert!(out[0].title.is_none());
    }

    #[test]
    fn button_label_overrides_displayed_text(status in ".*", label in ".+") {
        let table = StatusClassTable::shared();
        let input = decode(json!({ "status": &status, "buttonLabel": &label }));
        let out = badges(&input, table).unwrap();
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(&out[0].text, &label);
        prop_assert_eq!(&out[0].class, &table.status_class(&status, LABEL_CONTEXT));
    }

    #[test]
    fn title_is_rendered_as_prefix(status in ".*", title in ".+") {
        let input = decode(json!({ "status": &status, "title": &title }));
        let out = badges(&input, StatusClassTable::shared()).unwrap();
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(out[0].title_prefix(), Some(format!("{title}: ")));
        prop_assert_eq!(&out[0].text, &status);
    }

    #[test]
    fn composite_list_keeps_length_order_titles_and_classes(entries in composite_entries()) {
        let table = StatusClassTable::shared();
        let raw: Vec<serde_json::Value> = entries
            .iter()
            .map(|(status, title)| match title {
                Some(title) => json!({ "status": status, "title": title }),
                None => json!({ "status": status }),
            })
            .collect();
        let input = decode(json!({ "status": raw, "buttonLabel": "never shown" }));
        let out = badges(&input, table).unwrap();
        prop_assert_eq!(out.len(), entries.len());
        for (badge, (status, title)) in out.iter().zip(&entries) {
            prop_assert_eq!(&badge.text, status);
            prop_assert_eq!(&badge.class, &table.status_class(status, LABEL_CONTEXT));
            prop_assert_eq!(&badge.title, title);
        }
    }
}

#[test]
fn empty_composite_list_has_zero_badges() {
    let out = badges(&decode(json!({ "status": [] })), StatusClassTable::shared());
    assert_eq!(out, Some(Vec::new()));
}

#[test]
fn composite_list_preserves_order_titles_and_classes() {
    let table = StatusClassTable::default_config();
    let input = decode(json!({
        "status": [
            { "status": "released", "title": "ENCODE" },
            { "status": "in progress", "title": "Roadmap" },
            { "status": "deleted" },
            { "status": "archived", "title": "Mirror" }
        ],
        "buttonLabel": "never used"
    }));
    let out = badges(&input, &table).unwrap();
    let expected = [
        ("released", Some("ENCODE")),
        ("in progress", Some("Roadmap")),
        ("deleted", None),
        ("archived", Some("Mirror")),
    ];
    assert_eq!(out.len(), expected.len());
    for (badge, (status, title)) in out.iter().zip(expected) {
        assert_eq!(
            badge,
            &Badge {
                class: table.status_class(status, LABEL_CONTEXT),
                title: title.map(str::to_string),
                text: status.to_string(),
            }
        );
    }
}

#[test]
fn numeric_entry_title_is_rendered_as_prefix() {
    let input = decode(json!({ "status": [{ "status": "released", "title": 3 }] }));
    let out = badges(&input, StatusClassTable::shared()).unwrap();
    assert_eq!(out[0].title_prefix().as_deref(), Some("3: "));
    assert_eq!(out[0].text, "released");
}

#[test]
fn spacing_variants_share_a_class() {
    let table = StatusClassTable::shared();
    let a = badges(&decode(json!({ "status": "Content Error" })), table).unwrap();
    let b = badges(&decode(json!({ "status": "Content  Error" })), table).unwrap();
    assert_eq!(a[0].class, b[0].class);
}

#[test]
fn unsupported_types_render_nothing() {
    for status in [json!(42), json!(false), json!(null), json!({ "status": "released" })] {
        let out = badges(&decode(json!({ "status": status })), StatusClassTable::shared());
        assert_eq!(out, None);
    }
}
