//! Unit tests for the workflow board.
