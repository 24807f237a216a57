#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal front-end for a ticketing and event coordination tool.
//!
//! Three screens: a coordinator dashboard, an admin user-management view,
//! and a create-event form whose validation and lifecycle rules live in
//! [`model`]. Created events go to a [`sink::EventSink`]; the shipped sink
//! only logs them.

pub mod model;
pub mod sink;
pub mod tui;
