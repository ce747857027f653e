pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::login_resolver::LoginResolver;
pub use repositories::user_repository::UserRepository;
