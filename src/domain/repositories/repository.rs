use crate::domain::error::AppError;

pub type RepositoryResult<T> = core::result::Result<T, AppError>;
