//! Parser tests.
//!
//! Organized by handler category:
//! - cursor_tests: Cursor movement and control characters
//! - editing_tests: Erase operations
//! - style_tests: SGR color/attribute parsing
//! - stream_tests: Unrecognized sequences, truncation and source spans
