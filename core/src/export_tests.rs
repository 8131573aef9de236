//! Tests for fetch-verification record derivation.

use super::*;
use crate::checksum::Checksum;
use crate::component::Component;
use crate::document::ManifestDocument;
use crate::namespace::NamespaceContext;
use crate::parse::parse_artifacts;
use rstest::rstest;
use std::rc::Rc;

fn artifact(name: &str, checksum: Option<Checksum>) -> Artifact {
    Artifact {
        name: name.to_owned(),
        checksum,
        component: Rc::new(Component::new("org.example", "lib", "1.0")),
        module: None,
    }
}

fn sha256(value: &str) -> Option<Checksum> {
    Some(Checksum::new(HashAlgorithm::Sha256, value))
}

#[test]
fn worked_example_matches_reference_output() {
    let artifacts = vec![artifact("lib-1.0.jar", sha256("deadbeef"))];
    let repositories = vec!["https://repo.example/".to_owned()];

    let records = export_artifacts(&artifacts, &repositories).expect("valid artifacts");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.path, "org/example/lib/1.0");
    assert_eq!(
        record.url_prefixes,
        ["https://repo.example/org/example/lib/1.0"]
    );
    assert_eq!(record.name, "lib-1.0.jar");
    assert_eq!(record.hash.as_str(), "sha256-3q2+7w==");
    assert_eq!(record.hash_algo, HashAlgorithm::Sha256);
    assert_eq!(record.hash_value, "deadbeef");
    assert_eq!(record.component.group, "org.example");
    assert!(record.module.is_none());
}

#[test]
fn one_record_per_artifact_in_input_order() {
    let artifacts = vec![
        artifact("lib-1.0.pom", sha256("00")),
        artifact("lib-1.0.jar", sha256("01")),
        artifact("lib-1.0-sources.jar", sha256("02")),
    ];
    let records = export_artifacts(&artifacts, &[]).expect("valid artifacts");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["lib-1.0.pom", "lib-1.0.jar", "lib-1.0-sources.jar"]);
}

#[rstest]
#[case::with_trailing_slash("https://repo.example/")]
#[case::without_trailing_slash("https://repo.example")]
fn trailing_separator_on_base_url_is_stripped(#[case] base: &str) {
    let artifacts = vec![artifact("lib-1.0.jar", sha256("00"))];
    let records =
        export_artifacts(&artifacts, &[base.to_owned()]).expect("valid artifacts");
    assert_eq!(
        records[0].url_prefixes,
        ["https://repo.example/org/example/lib/1.0"]
    );
}

#[test]
fn one_url_prefix_per_repository() {
    let artifacts = vec![artifact("lib-1.0.jar", sha256("00"))];
    let repositories = vec![
        "https://repo.example/".to_owned(),
        "https://mirror.example/maven2".to_owned(),
    ];
    let records = export_artifacts(&artifacts, &repositories).expect("valid artifacts");
    assert_eq!(
        records[0].url_prefixes,
        [
            "https://repo.example/org/example/lib/1.0",
            "https://mirror.example/maven2/org/example/lib/1.0",
        ]
    );
}

#[test]
fn hashless_artifact_is_fatal() {
    let artifacts = vec![artifact("lib-1.0.jar", None)];
    let err = export_artifacts(&artifacts, &[]).expect_err("hashless artifact must be rejected");
    assert!(
        matches!(err, ManifestError::MissingHash { ref artifact } if artifact == "lib-1.0.jar"),
        "got: {err:?}"
    );
}

#[test]
fn malformed_digest_is_fatal() {
    let artifacts = vec![artifact("lib-1.0.jar", sha256("odd"))];
    let err = export_artifacts(&artifacts, &[]).expect_err("digest must be rejected");
    assert!(matches!(err, ManifestError::InvalidHash { .. }), "got: {err:?}");
}

#[test]
fn module_block_carries_linkage_fields() {
    let xml = concat!(
        "<m><components>",
        "<component group=\"org.example\" name=\"lib\" version=\"1.0\">",
        "<artifact name=\"lib-1.0.module\"><sha256 value=\"deadbeef\"/></artifact>",
        "<artifact name=\"lib-1.0.jar\"><sha256 value=\"cafebabe\"/></artifact>",
        "</component>",
        "</components></m>",
    );
    let doc = ManifestDocument::parse_str(xml, NamespaceContext::default())
        .expect("well-formed fixture");
    let artifacts = parse_artifacts(&doc).expect("valid manifest");
    let records = export_artifacts(&artifacts, &[]).expect("valid artifacts");

    assert!(records[0].module.is_none(), "module artifact itself has no block");
    let module = records[1].module.as_ref().expect("module block present");
    assert_eq!(module.name, "lib-1.0.module");
    assert_eq!(module.hash.as_str(), "sha256-3q2+7w==");
    assert_eq!(module.hash_algo, HashAlgorithm::Sha256);
    assert_eq!(module.hash_value, "deadbeef");
}

#[test]
fn serializes_as_json_array_with_expected_fields() {
    let artifacts = vec![artifact("lib-1.0.jar", sha256("deadbeef"))];
    let records = export_artifacts(&artifacts, &["https://repo.example".to_owned()])
        .expect("valid artifacts");
    let json = serde_json::to_value(&records).expect("serializable");

    let record = &json[0];
    assert_eq!(record["path"], "org/example/lib/1.0");
    assert_eq!(record["hash"], "sha256-3q2+7w==");
    assert_eq!(record["hash_algo"], "sha256");
    assert_eq!(record["hash_value"], "deadbeef");
    assert_eq!(record["component"]["group"], "org.example");
    assert!(
        record.get("module").is_none(),
        "absent module block must be omitted, got: {record}"
    );
}
