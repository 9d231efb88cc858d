use rusqlite::{Connection, OptionalExtension, Result};

const KV_STORE_VERSION: &str = "20250301_0001_create_kv_store";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the key-value table holding serialized collections.
/// Returns whether the migration ran.
fn migrate_create_kv_store(conn: &Connection) -> Result<bool> {
    if is_applied(conn, KV_STORE_VERSION)? {
        return Ok(false);
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, KV_STORE_VERSION, "Created kv_store table")?;

    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Safe to call on every start; applied versions are recorded in `log`.
/// Returns the versions applied by this call, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    if migrate_create_kv_store(conn)? {
        applied.push(KV_STORE_VERSION);
    }
    Ok(applied)
}
