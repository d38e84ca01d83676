//! Integration tests for the gearbench CLI
//!
//! These tests run the real binary against temporary catalog and
//! constraint files.
