//! File I/O operations for data documents.
//!
//! This module provides functionality to load YAML, JSON and JSONL data from
//! disk or stdin.

pub mod loader;
