use crate::domain::models::session::Session;

use super::repository::RepositoryResult;

/// Durable record of the signed-in session.
pub trait SessionRepository: Send + Sync {
    fn load(&self) -> RepositoryResult<Option<Session>>;
    fn save(&self, session: &Session) -> RepositoryResult<()>;
    fn clear(&self) -> RepositoryResult<()>;
}
