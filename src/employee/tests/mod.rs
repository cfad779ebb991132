//! Unit tests for the employee directory context.
