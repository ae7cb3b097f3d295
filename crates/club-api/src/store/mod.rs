//! Persistence layer for accounts and blog posts
//!
//! Each repository wraps the shared PostgreSQL pool; every call is an
//! independently-failing unit of work with no cross-call transaction.

pub mod posts;
pub mod users;

pub use posts::PostRepository;
pub use users::UserRepository;
