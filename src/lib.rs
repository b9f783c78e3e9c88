//! An HTTP service that aggregates repository statistics for a GitHub
//! account: total stars, most recently pushed repositories, and the
//! repositories above a star threshold, computed over the full paginated
//! listing of the upstream REST API.

mod handler;
mod infrastructure;
mod interface;
mod model;

pub use handler::*;
pub use infrastructure::*;
pub use interface::*;
pub use model::*;
