//! Unit tests for task list state management.

mod domain_tests;
