pub mod error;
pub mod person_pg;
pub mod person_store;

pub use error::RepoError;
pub use person_pg::PgPersonStore;
pub use person_store::PersonStore;
