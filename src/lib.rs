//! # ddlgen
//!
//! Dialect-aware DDL generation for entity schemas.
//!
//! ## Quick Start
//!
//! ```rust
//! use ddlgen::prelude::*;
//!
//! let user = Entity::new("User")
//!     .comment("Accounts")
//!     .field(Field::new("id", "Long").primary_key().auto_increment().not_null())
//!     .field(Field::new("email", "String").length(255).not_null());
//!
//! let post = Entity::new("Post")
//!     .field(Field::new("id", "Long").primary_key().auto_increment().not_null())
//!     .field(Field::new("userId", "Long").column("user_id"))
//!     .foreign_key(ForeignKey::new("fk_post_user", "user_id", "user", "id"));
//!
//! let registry = Registry::builtin();
//! let postgres = registry.strategy(Dialect::PostgreSql)?;
//! let sql = postgres.generate_all(&[user, post]);
//!
//! assert!(sql.contains("GENERATED BY DEFAULT AS IDENTITY"));
//! assert!(sql.contains("COMMENT ON TABLE \"user\" IS 'Accounts';"));
//! # Ok::<(), ddlgen::DdlError>(())
//! ```
//!
//! ## Database Support
//!
//! | Database   | Identifier   | Quote      | Autoincrement                      |
//! |------------|--------------|------------|------------------------------------|
//! | MySQL      | `mysql`      | `` `x` ``  | `AUTO_INCREMENT`                   |
//! | PostgreSQL | `postgresql` | `"x"`      | identity or `DEFAULT nextval(..)`  |
//! | Oracle     | `oracle`     | `"x"`      | sequence + `BEFORE INSERT` trigger |
//! | SQL Server | `sqlserver`  | `[x]`      | `IDENTITY(1,1)`                    |
//! | SQLite     | `sqlite`     | `"x"`      | `PRIMARY KEY AUTOINCREMENT`        |
//! | H2         | `h2`         | `"x"`      | `AUTO_INCREMENT`                   |
//! | DM         | `dm`         | `"x"`      | `IDENTITY(1,1)`                    |
//! | KingbaseES | `kingbase`   | `"x"`      | identity or `DEFAULT nextval(..)`  |

pub use ddlgen_generator::{
    DdlError, DdlStrategy, Operation, Quote, Registry, Result, Statement, StatementKind,
    Terminator, order_by_dependencies, strategy_for,
};
pub use ddlgen_types::{Dialect, DialectParseError, Entity, Field, ForeignKey, LogicalType};

/// Schema model types
pub use ddlgen_types as types;

/// Strategy implementations, one per dialect
pub use ddlgen_generator::dialect;

/// Common imports
pub mod prelude {
    pub use ddlgen_generator::{
        DdlError, DdlStrategy, Registry, Statement, StatementKind, order_by_dependencies,
        strategy_for,
    };
    pub use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};
}
