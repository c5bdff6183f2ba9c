//! Tests for the streaming extractor

mod runner_tests;
