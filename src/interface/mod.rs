mod fetcher;
mod lister;

pub use fetcher::*;
pub use lister::*;
