//! Corpus-based conformance testing.
//!
//! Loads recorded legacy vectors from a JSON corpus file and replays them
//! against this implementation.
//!
//! Each vector names an operation, its input and the expected result, which
//! is either `{"ok": <value>}` or `{"err": "<ErrorCode name>"}`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::assets::disp_doctype;
use crate::error::{ErrorCode, HelperResult};
use crate::json::{add_slashes, is_numeric, parse, serialize, serialize_strict, Value};

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
    /// Where the vectors were recorded.
    #[serde(default)]
    pub description: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test (e.g. "encode", "parse_encode").
    pub op: String,
    /// Input parameters for the operation.
    pub input: serde_json::Value,
    /// Expected result (success or error).
    pub expected: serde_json::Value,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from this implementation.
        actual: String,
    },
    /// Test was skipped (operation not known).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// Test errored during execution.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if nothing failed or errored.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures and errors, in corpus order.
    pub fn problems(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. } | TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load a corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> HelperResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ErrorCode::E500_Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Parse a corpus from JSON text.
    pub fn from_json_str(content: &str) -> HelperResult<Self> {
        let corpus: Corpus =
            serde_json::from_str(content).map_err(|e| ErrorCode::E301_ConfigInvalid(e.to_string()))?;
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();
        for vector in &self.corpus.vectors {
            let result = run_vector(vector);
            if !result.is_pass() {
                tracing::debug!(id = %vector.id, ?result, "vector did not pass");
            }
            results.record(&vector.id, result);
        }
        results
    }
}

fn run_vector(vector: &TestVector) -> TestResult {
    let outcome: Result<HelperResult<serde_json::Value>, String> = match vector.op.as_str() {
        "encode" => input_value(vector).map(|v| Ok(serialize(&v).into())),
        "encode_strict" => input_value(vector).map(|v| Ok(serialize_strict(&v).into())),
        "parse_encode" => input_str(vector, "json")
            .map(|text| parse(text.as_bytes()).map(|v| serialize(&v).into())),
        "add_slashes" => input_str(vector, "text").map(|text| Ok(add_slashes(text).into())),
        "is_numeric" => input_str(vector, "text").map(|text| Ok(is_numeric(text).into())),
        "doctype" => input_str(vector, "kind").and_then(|kind| {
            input_str(vector, "variant").map(|variant| Ok(disp_doctype(kind, variant).into()))
        }),
        _ => {
            return TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            }
        }
    };

    match outcome {
        Ok(actual) => compare(&vector.expected, actual),
        Err(message) => TestResult::Error { message },
    }
}

fn input_value(vector: &TestVector) -> Result<Value, String> {
    vector
        .input
        .get("value")
        .cloned()
        .map(Value::from)
        .ok_or_else(|| "Missing 'value' in input".to_string())
}

fn input_str<'a>(vector: &'a TestVector, field: &str) -> Result<&'a str, String> {
    vector
        .input
        .get(field)
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| format!("Missing '{}' in input", field))
}

fn compare(expected: &serde_json::Value, actual: HelperResult<serde_json::Value>) -> TestResult {
    if let Some(ok) = expected.get("ok") {
        return match actual {
            Ok(value) if &value == ok => TestResult::Pass,
            Ok(value) => TestResult::Fail {
                expected: ok.to_string(),
                actual: value.to_string(),
            },
            Err(err) => TestResult::Fail {
                expected: ok.to_string(),
                actual: err.name().to_string(),
            },
        };
    }

    if let Some(err_name) = expected.get("err").and_then(serde_json::Value::as_str) {
        return match actual {
            Err(err) if err.name() == err_name => TestResult::Pass,
            Err(err) => TestResult::Fail {
                expected: err_name.to_string(),
                actual: err.name().to_string(),
            },
            Ok(value) => TestResult::Fail {
                expected: err_name.to_string(),
                actual: value.to_string(),
            },
        };
    }

    TestResult::Error {
        message: "Expected result has neither 'ok' nor 'err'".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "manifest": {"format_version": "1", "version": "test"},
        "vectors": [
            {"id": "e1", "op": "encode", "input": {"value": [1, 2]}, "expected": {"ok": "[1,2]"}},
            {"id": "e2", "op": "encode", "input": {"value": {}}, "expected": {"ok": "[]"}},
            {"id": "p1", "op": "parse_encode", "input": {"json": "{\"a\":1,\"a\":2}"},
             "expected": {"err": "E101_DuplicateKey"}},
            {"id": "n1", "op": "is_numeric", "input": {"text": "1e5"}, "expected": {"ok": true}},
            {"id": "x1", "op": "unknown", "input": {}, "expected": {"ok": null}},
            {"id": "m1", "op": "add_slashes", "input": {}, "expected": {"ok": ""}}
        ]
    }"#;

    #[test]
    fn test_run_small_corpus() {
        let runner = CorpusRunner::from_json_str(SMALL).unwrap();
        assert_eq!(runner.vector_count(), 6);
        assert_eq!(runner.manifest().version, "test");

        let results = runner.run_all();
        assert_eq!(results.passed, 3);
        assert_eq!(results.failed, 1);
        assert_eq!(results.skipped, 1);
        assert_eq!(results.errors, 1);
        assert!(!results.all_passed());

        let problems: Vec<&str> = results.problems().iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(problems, vec!["e2", "m1"]);
    }

    #[test]
    fn test_summary() {
        let mut results = CorpusResults::new();
        results.record("a", TestResult::Pass);
        results.record(
            "b",
            TestResult::Skip {
                reason: "n/a".to_string(),
            },
        );
        assert_eq!(
            results.summary(),
            "1 passed, 0 failed, 1 skipped, 0 errors (total: 2)"
        );
        assert!(results.all_passed());
    }

    #[test]
    fn test_invalid_corpus() {
        assert_eq!(CorpusRunner::from_json_str("[]").err().map(|e| e.code()), Some(301));
    }
}
