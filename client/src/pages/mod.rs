//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped polls and action handlers and delegates
//! rendering details to `components`.

pub mod alerts;
pub mod dashboard;
pub mod infrastructure;
pub mod not_found;
pub mod service_detail;
pub mod services;
pub mod settings;
pub mod vm_detail;
