use super::repository::RepositoryResult;

/// Client-side key-value persistence surviving process restarts.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> RepositoryResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RepositoryResult<()>;
    fn remove(&self, key: &str) -> RepositoryResult<()>;
}
