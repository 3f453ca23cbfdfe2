//! Integration tests for multi-component workflows.
