/// The standard result type used throughout the service.
pub type StdResult<T> = Result<T, anyhow::Error>;
