//! Request handler module
//!
//! Routing and dispatch for the UI listener: the embedded catalog page,
//! the favicon, and optional static assets.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
