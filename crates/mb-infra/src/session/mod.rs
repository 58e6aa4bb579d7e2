mod file_session;
mod static_session;

pub use file_session::{FileSessionRepository, DEFAULT_SESSION_FILE};
pub use static_session::StaticSession;
