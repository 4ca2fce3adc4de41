use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use status_label_core::{Badge, StatusClassifier, StatusLabelInput, badges};
use std::path::Path;
use std::time::Instant;

/// A named props document with the badges it should produce.
///
/// `expect: null` means the label renders nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub props: StatusLabelInput,
    #[serde(default)]
    pub expect: Option<Vec<Badge>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixtureResult {
    pub name: String,
    pub passed: bool,
    pub failures: Vec<String>,
    pub elapsed_micros: u64,
}

pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixtures {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse fixtures {}", path.display()))
}

fn describe(out: Option<&[Badge]>) -> String {
    out.map_or_else(
        || "no output".to_string(),
        |list| format!("{} badge(s)", list.len()),
    )
}

fn compare(expected: Option<&[Badge]>, actual: Option<&[Badge]>) -> Vec<String> {
    let (Some(expected), Some(actual)) = (expected, actual) else {
        if expected.is_some() != actual.is_some() {
            return vec![format!(
                "expected {}, got {}",
                describe(expected),
                describe(actual)
            )];
        }
        return Vec::new();
    };

    let mut failures = Vec::new();
    if expected.len() != actual.len() {
        failures.push(format!(
            "expected {} badge(s), got {}",
            expected.len(),
            actual.len()
        ));
    }
    for (idx, (want, got)) in expected.iter().zip(actual).enumerate() {
        if want.class != got.class {
            failures.push(format!(
                "badge {idx}: class {:?} != expected {:?}",
                got.class, want.class
            ));
        }
        if want.title != got.title {
            failures.push(format!(
                "badge {idx}: title {:?} != expected {:?}",
                got.title, want.title
            ));
        }
        if want.text != got.text {
            failures.push(format!(
                "badge {idx}: text {:?} != expected {:?}",
                got.text, want.text
            ));
        }
    }
    failures
}

pub fn run_fixture<C>(fixture: &Fixture, classifier: &C) -> FixtureResult
where
    C: StatusClassifier + ?Sized,
{
    let started = Instant::now();
    let actual = badges(&fixture.props, classifier);
    let failures = compare(fixture.expect.as_deref(), actual.as_deref());
    let elapsed_micros = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    log::debug!(
        "fixture {} -> {} ({} failure(s))",
        fixture.name,
        describe(actual.as_deref()),
        failures.len()
    );
    FixtureResult {
        name: fixture.name.clone(),
        passed: failures.is_empty(),
        failures,
        elapsed_micros,
    }
}

pub fn run_fixtures<C>(fixtures: &[Fixture], classifier: &C) -> Vec<FixtureResult>
where
    C: StatusClassifier + ?Sized,
{
    fixtures
        .iter()
        .map(|fixture| run_fixture(fixture, classifier))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use status_label_core::StatusClassTable;

    fn fixture(json: &str) -> Fixture {
        serde_json::from_str(json).expect("fixture json")
    }

    #[test]
    fn matching_fixture_passes() {
        let fx = fixture(
            r#"{
                "name": "simple",
                "props": { "status": "released", "title": "File" },
                "expect": [{ "class": "label-status-released", "title": "File", "text": "released" }]
            }"#,
        );
        let result = run_fixture(&fx, &StatusClassTable::default());
        assert!(result.passed, "{:?}", result.failures);
    }

    #[test]
    fn null_expectation_matches_unsupported_status() {
        let fx = fixture(r#"{ "name": "number", "props": { "status": 42 }, "expect": null }"#);
        assert!(run_fixture(&fx, &StatusClassTable::default()).passed);
    }

    #[test]
    fn mismatches_are_reported_per_field() {
        let fx = fixture(
            r#"{
                "name": "wrong",
                "props": { "status": "deleted", "buttonLabel": "Gone" },
                "expect": [{ "class": "label-status-released", "text": "deleted" }]
            }"#,
        );
        let result = run_fixture(&fx, &StatusClassTable::default());
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 2, "{:?}", result.failures);
        assert!(result.failures[0].contains("class"));
        assert!(result.failures[1].contains("text"));
    }

    #[test]
    fn output_presence_mismatch_is_reported() {
        let fx = fixture(r#"{ "name": "empty", "props": { "status": [] }, "expect": null }"#);
        let result = run_fixture(&fx, &StatusClassTable::default());
        assert_eq!(result.failures, vec!["expected no output, got 0 badge(s)"]);
    }
}
