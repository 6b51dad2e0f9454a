//! One strategy per supported engine

mod dm;
mod h2;
mod kingbase;
mod mysql;
mod oracle;
mod postgres;
mod sqlite;
mod sqlserver;

pub use dm::DmStrategy;
pub use h2::H2Strategy;
pub use kingbase::KingbaseStrategy;
pub use mysql::MySqlStrategy;
pub use oracle::OracleStrategy;
pub use postgres::PostgreSqlStrategy;
pub use sqlite::SqliteStrategy;
pub use sqlserver::SqlServerStrategy;
