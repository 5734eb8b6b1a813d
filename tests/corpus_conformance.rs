//! Corpus-based conformance tests.
//!
//! These tests replay every vector recorded from the legacy helpers in
//! `corpus/legacy_vectors.json` and require identical results.

use asset_helper::conformance::{CorpusRunner, TestResult};
use std::path::{Path, PathBuf};

/// Path to the corpus file relative to the package root.
const CORPUS_PATH: &str = "corpus/legacy_vectors.json";

fn corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH)
}

/// Load and run the full corpus.
#[test]
fn test_full_corpus() {
    let runner = CorpusRunner::load(corpus_path()).expect("Failed to load corpus");

    println!("Loaded corpus with {} vectors", runner.vector_count());
    println!("Manifest: {:?}", runner.manifest());

    let results = runner.run_all();

    println!("\n=== Corpus Conformance Results ===");
    println!("{}", results.summary());

    let problems = results.problems();
    for (id, result) in &problems {
        match result {
            TestResult::Fail { expected, actual } => {
                println!("  {} - expected: {}, actual: {}", id, expected, actual)
            }
            TestResult::Error { message } => println!("  {} - error: {}", id, message),
            _ => {}
        }
    }

    assert!(
        results.all_passed(),
        "{} corpus vectors did not pass: {}",
        problems.len(),
        results.summary()
    );
    assert_eq!(results.skipped, 0, "corpus uses an unknown operation");
}

/// The corpus covers every operation the runner knows.
#[test]
fn test_corpus_covers_all_ops() {
    let content = std::fs::read_to_string(corpus_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    let vectors = json["vectors"].as_array().unwrap();

    for op in [
        "encode",
        "encode_strict",
        "parse_encode",
        "add_slashes",
        "is_numeric",
        "doctype",
    ] {
        assert!(
            vectors.iter().any(|v| v["op"] == op),
            "no vectors for op {}",
            op
        );
    }
}

/// Vector ids are unique so failures can be traced back.
#[test]
fn test_corpus_ids_unique() {
    let content = std::fs::read_to_string(corpus_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    let mut ids: Vec<&str> = json["vectors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_missing_corpus_is_io_error() {
    let err = CorpusRunner::load("/nonexistent/legacy_vectors.json")
        .err()
        .unwrap();
    assert_eq!(err.code(), 500);
}
