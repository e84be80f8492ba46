//! Function Lab: an interactive teaching tool that visualizes common
//! data-processing operations as short animated scenes.
//!
//! The behavioral core (catalog, selection, demo state machines) lives in
//! the `demo-engine` crate; this crate is the GPUI shell around it.

pub mod ui;
