//! SQL schema for the VaporTrack SQLite store.
//!
//! Executed on every connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Connection-level settings applied before the DDL.
///
/// `foreign_keys` is switched off explicitly (bundled SQLite enables it):
/// `price_history.item_id` references a column that is only unique together
/// with `user_id`, and price samples may be recorded before any user tracks
/// the item.
pub const PRAGMAS: &str = "
PRAGMA foreign_keys = OFF;
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 5000;
";

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS tracked_items (
    item_id      TEXT    NOT NULL,
    user_id      TEXT    NOT NULL,
    title        TEXT    NOT NULL CHECK (length(title) > 0),
    target_price REAL    NOT NULL CHECK (target_price >= 0),
    is_active    INTEGER NOT NULL DEFAULT 1,
    PRIMARY KEY (item_id, user_id)
);

-- Strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS price_history (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    item_id      TEXT NOT NULL REFERENCES tracked_items(item_id),
    sale_price   REAL NOT NULL CHECK (sale_price >= 0),
    normal_price REAL NOT NULL CHECK (normal_price >= 0),
    recorded_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS tracked_items_user_idx ON tracked_items(user_id, is_active);
CREATE INDEX IF NOT EXISTS price_history_item_idx ON price_history(item_id, recorded_at);

PRAGMA user_version = 1;
";
