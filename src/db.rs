use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, EntityTrait, Schema,
    Statement, TransactionTrait,
};

use crate::entity::{Items, Wishlists};

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    // Every pooled connection to `sqlite::memory:` would otherwise see its own database.
    if database_url.starts_with("sqlite") && database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Create the `wishlists` and `items` tables (and the item owner index) if
/// they do not exist yet.
pub async fn init_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut wishlists = schema.create_table_from_entity(Wishlists);
    wishlists.if_not_exists();
    conn.execute(backend.build(&wishlists)).await?;

    let mut items = schema.create_table_from_entity(Items);
    items.if_not_exists();
    conn.execute(backend.build(&items)).await?;

    for mut index in schema.create_index_from_entity(Items) {
        index.if_not_exists();
        conn.execute(backend.build(&index)).await?;
    }

    tracing::info!(backend = ?backend, "database schema ready");
    Ok(())
}

/// Remove every wishlist and item and restart both id sequences at 1.
pub async fn reset_db(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let txn = conn.begin().await?;

    match backend {
        DbBackend::Postgres => {
            txn.execute(Statement::from_string(
                backend,
                "TRUNCATE TABLE items, wishlists RESTART IDENTITY CASCADE",
            ))
            .await?;
        }
        _ => {
            Items::delete_many().exec(&txn).await?;
            Wishlists::delete_many().exec(&txn).await?;
            if backend == DbBackend::Sqlite {
                let has_sequences = txn
                    .query_one(Statement::from_string(
                        backend,
                        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
                    ))
                    .await?
                    .is_some();
                if has_sequences {
                    txn.execute(Statement::from_string(
                        backend,
                        "DELETE FROM sqlite_sequence WHERE name IN ('items', 'wishlists')",
                    ))
                    .await?;
                }
            }
        }
    }

    txn.commit().await?;
    tracing::info!("database reset");
    Ok(())
}
