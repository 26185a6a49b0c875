//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ReviewAppState;
pub use router::{review_router, review_router_generic};
