mod fetcher_rest;
mod lister_paginated;

pub use fetcher_rest::*;
pub use lister_paginated::*;
