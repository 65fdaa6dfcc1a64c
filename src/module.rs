//! Module trait for pluggable route groups.
//!
//! A module registers its routes with the router and owns whatever state
//! those routes need, such as a store handle.
//!
//! # Example
//!
//! ```ignore
//! use student_registry::{Module, Router};
//!
//! pub struct Health;
//!
//! impl Module for Health {
//!     fn name(&self) -> &'static str {
//!         "health"
//!     }
//!
//!     fn routes(&self, router: &mut Router) {
//!         router.get("/health", |_ctx| async move {
//!             Ok(student_registry::response::ok("ok"))
//!         });
//!     }
//! }
//! ```

use crate::router::Router;

/// A pluggable group of routes.
///
/// State is captured in the route closures, typically behind an `Arc`.
pub trait Module: Send + Sync {
    /// Module name for identification and logging.
    fn name(&self) -> &'static str;

    /// Register routes with the router.
    fn routes(&self, router: &mut Router);
}
