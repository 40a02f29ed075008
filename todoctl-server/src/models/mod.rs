//! Domain models for the to-do service
//!
//! Request-side types live here; database records live in `db::repos`.

pub mod validation;
pub mod todo;
pub mod pagination;

pub use validation::ValidationError;
pub use todo::TodoFields;
pub use pagination::{Pagination, PaginationParams};
