//! Networking modules for the management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs single requests against `/api/v1` and decodes envelopes;
//! `poll` wraps those calls in keyed, interval-driven reactive state.

pub mod api;
pub mod poll;
