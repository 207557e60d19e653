//! Unit tests for the relay module.

mod support;
