//! Whole-schema generation tests
//!
//! Full `generate_all` output for a small two-table schema, plus the worked
//! scenarios for MySQL, SQLite and Oracle.

use ddlgen_generator::{DdlError, DdlStrategy, Operation, strategy_for};
use ddlgen_types::{Dialect, Entity, Field, ForeignKey};

// =============================================================================
// Fixtures
// =============================================================================

/// `{ name: "User", fields: [id Long pk autoinc not-null, email String(255) not-null] }`
fn user() -> Entity {
    Entity::new("User")
        .field(
            Field::new("id", "Long")
                .primary_key()
                .auto_increment()
                .not_null(),
        )
        .field(Field::new("email", "String").length(255).not_null())
}

fn blog() -> Vec<Entity> {
    vec![
        user()
            .comment("Accounts")
            .field(Field::new("nickname", "String").length(32).comment("Display name")),
        Entity::new("Post")
            .field(Field::new("id", "Long").primary_key().auto_increment().not_null())
            .field(Field::new("userId", "Long").column("user_id").not_null())
            .field(Field::new("published", "Boolean").default_value("FALSE"))
            .foreign_key(ForeignKey::new("fk_post_user", "user_id", "user", "id")),
    ]
}

// =============================================================================
// Scenarios
// =============================================================================

/// MySQL: inline AUTO_INCREMENT and the table option
#[test]
fn test_mysql_user_scenario() {
    let sql = strategy_for(Dialect::MySql).create_table(&user());

    assert!(sql.contains("`id` BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY"));
    assert!(sql.contains("`email` VARCHAR(255) NOT NULL"));
    assert!(sql.contains("AUTO_INCREMENT=1"));
}

/// SQLite: PRIMARY KEY AUTOINCREMENT precedes NOT NULL, ALTER COLUMN is refused
#[test]
fn test_sqlite_user_scenario() {
    let strategy = strategy_for(Dialect::Sqlite);
    let entity = user();

    let sql = strategy.create_table(&entity);
    assert!(sql.contains("\"id\" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL"));

    let err = strategy
        .modify_column(&entity.table_name, &entity.fields[0])
        .unwrap_err();
    assert_eq!(
        err,
        DdlError::Unsupported {
            dialect: Dialect::Sqlite,
            operation: Operation::ModifyColumn,
        }
    );
    assert_eq!(
        err.to_string(),
        "SQLite does not support ALTER COLUMN; regenerate the table instead"
    );
}

/// Oracle: sequence, then table, then trigger reading the sequence
#[test]
fn test_oracle_orders_scenario() {
    let orders = Entity::new("Order").table_name("orders").field(Field {
        name: Some("id".into()),
        auto_increment: true,
        ..Field::default()
    });

    let sql = strategy_for(Dialect::Oracle).generate_all(&[orders]);

    let sequence = sql.find("CREATE SEQUENCE \"orders_id_seq\"").unwrap();
    let table = sql.find("CREATE TABLE \"orders\"").unwrap();
    let trigger = sql.find("\"orders_id_seq\".NEXTVAL").unwrap();
    assert!(sequence < table);
    assert!(table < trigger);
}

// =============================================================================
// Full output per dialect
// =============================================================================

#[test]
fn test_mysql_generate_all() {
    let sql = strategy_for(Dialect::MySql).generate_all(&blog());
    let expected = "\
CREATE TABLE `user` (
  `id` BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
  `email` VARCHAR(255) NOT NULL,
  `nickname` VARCHAR(32)
) AUTO_INCREMENT=1;

CREATE TABLE `post` (
  `id` BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
  `user_id` BIGINT NOT NULL,
  `published` TINYINT(1) DEFAULT FALSE
) AUTO_INCREMENT=1;

ALTER TABLE `post` ADD CONSTRAINT `fk_post_user` FOREIGN KEY (`user_id`) REFERENCES `user` (`id`);

ALTER TABLE `user` COMMENT='Accounts';
ALTER TABLE `user` MODIFY `nickname` VARCHAR(32) COMMENT 'Display name';";

    assert_eq!(sql, expected);
}

#[test]
fn test_postgres_generate_all() {
    let sql = strategy_for(Dialect::PostgreSql).generate_all(&blog());
    let expected = "\
CREATE TABLE \"user\" (
  \"id\" BIGINT NOT NULL GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
  \"email\" VARCHAR(255) NOT NULL,
  \"nickname\" VARCHAR(32)
);

CREATE TABLE \"post\" (
  \"id\" BIGINT NOT NULL GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
  \"user_id\" BIGINT NOT NULL,
  \"published\" BOOLEAN DEFAULT FALSE
);

COMMENT ON TABLE \"user\" IS 'Accounts';
COMMENT ON COLUMN \"user\".\"nickname\" IS 'Display name';

ALTER TABLE \"post\" ADD CONSTRAINT \"fk_post_user\" FOREIGN KEY (\"user_id\") REFERENCES \"user\" (\"id\");";

    assert_eq!(sql, expected);
}

#[test]
fn test_oracle_generate_all() {
    let sql = strategy_for(Dialect::Oracle).generate_all(&blog());
    let expected = "\
CREATE SEQUENCE \"user_id_seq\" START WITH 1 INCREMENT BY 1;

CREATE SEQUENCE \"post_id_seq\" START WITH 1 INCREMENT BY 1;

CREATE TABLE \"user\" (
  \"id\" NUMBER(19) NOT NULL PRIMARY KEY,
  \"email\" VARCHAR2(255) NOT NULL,
  \"nickname\" VARCHAR2(32)
);

CREATE TABLE \"post\" (
  \"id\" NUMBER(19) NOT NULL PRIMARY KEY,
  \"user_id\" NUMBER(19) NOT NULL,
  \"published\" NUMBER(1) DEFAULT FALSE
);

CREATE OR REPLACE TRIGGER \"user_id_trg\"
BEFORE INSERT ON \"user\"
FOR EACH ROW
BEGIN
  SELECT \"user_id_seq\".NEXTVAL INTO :NEW.\"id\" FROM DUAL;
END;

CREATE OR REPLACE TRIGGER \"post_id_trg\"
BEFORE INSERT ON \"post\"
FOR EACH ROW
BEGIN
  SELECT \"post_id_seq\".NEXTVAL INTO :NEW.\"id\" FROM DUAL;
END;

ALTER TABLE \"post\" ADD CONSTRAINT \"fk_post_user\" FOREIGN KEY (\"user_id\") REFERENCES \"user\" (\"id\");

COMMENT ON TABLE \"user\" IS 'Accounts';
COMMENT ON COLUMN \"user\".\"nickname\" IS 'Display name';";

    assert_eq!(sql, expected);
}

#[test]
fn test_sqlite_generate_all() {
    let sql = strategy_for(Dialect::Sqlite).generate_all(&blog());
    let expected = "\
PRAGMA foreign_keys = ON;

CREATE TABLE \"user\" (
  \"id\" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
  \"email\" TEXT NOT NULL,
  \"nickname\" TEXT
);

CREATE TABLE \"post\" (
  \"id\" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
  \"user_id\" INTEGER NOT NULL,
  \"published\" INTEGER DEFAULT FALSE,
  FOREIGN KEY (\"user_id\") REFERENCES \"user\" (\"id\")
);";

    assert_eq!(sql, expected);
}

#[test]
fn test_sqlserver_generate_all() {
    let sql = strategy_for(Dialect::SqlServer).generate_all(&blog());

    assert!(sql.starts_with(
        "CREATE TABLE [user] (\n  [id] BIGINT IDENTITY(1,1) NOT NULL PRIMARY KEY,\n  [email] NVARCHAR(255) NOT NULL,\n  [nickname] NVARCHAR(32)\n);"
    ));
    assert!(sql.contains("[published] BIT DEFAULT FALSE"));
    assert!(sql.contains(
        "ALTER TABLE [post] ADD CONSTRAINT [fk_post_user] FOREIGN KEY ([user_id]) REFERENCES [user] ([id]);"
    ));
    assert!(sql.ends_with(
        "@level1name = N'user', @level2type = N'COLUMN', @level2name = N'nickname';"
    ));
}

#[test]
fn test_h2_and_dm_share_shape() {
    for dialect in [Dialect::H2, Dialect::Dm] {
        let sql = strategy_for(dialect).generate_all(&blog());
        assert!(sql.contains("COMMENT ON TABLE \"user\" IS 'Accounts';"), "{dialect}");
        assert!(sql.contains("\"email\" VARCHAR(255) NOT NULL"), "{dialect}");
    }

    let h2 = strategy_for(Dialect::H2).generate_all(&blog());
    assert!(h2.contains("\"id\" BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY"));
    assert!(h2.contains("\"published\" BOOLEAN DEFAULT FALSE"));

    let dm = strategy_for(Dialect::Dm).generate_all(&blog());
    assert!(dm.contains("\"id\" BIGINT IDENTITY(1,1) NOT NULL PRIMARY KEY"));
    assert!(dm.contains("\"published\" BIT DEFAULT FALSE"));
    assert!(dm.ends_with("COMMENT ON COLUMN \"user\".\"nickname\" IS 'Display name';"));
}

#[test]
fn test_kingbase_sequence_defaults() {
    let entities = [Entity::new("Ticket")
        .field(Field::new("id", "Long").primary_key().sequence().not_null())
        .field(Field::new("code", "String").sequence_named("ticket_code_seq"))];

    let sql = strategy_for(Dialect::Kingbase).generate_all(&entities);
    let expected = "\
CREATE SEQUENCE IF NOT EXISTS \"id_seq\" INCREMENT BY 1 START WITH 1

CREATE SEQUENCE IF NOT EXISTS \"ticket_code_seq\" INCREMENT BY 1 START WITH 1

CREATE TABLE \"ticket\" (
  \"id\" BIGINT NOT NULL DEFAULT nextval('id_seq') PRIMARY KEY,
  \"code\" VARCHAR(255) DEFAULT nextval('ticket_code_seq')
);";

    assert_eq!(sql, expected);
}

// =============================================================================
// Registry-driven generation
// =============================================================================

#[test]
fn test_every_builtin_strategy_generates() {
    let registry = ddlgen_generator::Registry::builtin();
    for dialect in Dialect::ALL {
        let strategy: &dyn DdlStrategy = registry.strategy(dialect).unwrap();
        let sql = strategy.generate_all(&blog());
        assert!(sql.contains(&format!("CREATE TABLE {}", strategy.quote_identifier("post"))));
    }
}
