//! Database-backed storage: connection management plus the raw SQL and ORM
//! post repositories.

mod connections;

#[cfg(feature = "postgres")]
mod orm_base;
#[cfg(feature = "postgres")]
mod orm_repo;
#[cfg(feature = "postgres")]
mod sql_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;
#[cfg(feature = "postgres")]
pub use orm_base::SeaOrmBaseRepository;
#[cfg(feature = "postgres")]
pub use orm_repo::SeaOrmPostRepository;
#[cfg(feature = "postgres")]
pub use sql_repo::SqlPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
