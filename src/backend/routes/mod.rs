//! Route configuration
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly and layers
//! └── api_routes.rs - Endpoint-to-handler mapping
//! ```

/// Router assembly
pub mod router;

/// Endpoint-to-handler mapping
pub mod api_routes;

pub use router::create_router;
