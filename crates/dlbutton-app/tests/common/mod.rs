//! Common test utilities.
//!
//! Recording fakes for every port the download screen talks to, and a
//! harness that spawns a screen runtime wired to them.

#![allow(dead_code)]

pub mod fakes;
pub mod harness;
