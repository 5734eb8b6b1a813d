//! Conformance testing against recorded legacy output.
//!
//! The corpus in `corpus/legacy_vectors.json` was captured from the legacy
//! helpers. Every vector is replayed through the public API and compared as
//! JSON values, so byte-exact encoder output is checked as a string.

pub mod corpus;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, TestResult, TestVector};
