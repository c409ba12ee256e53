//! [`SqliteStore`] — the SQLite implementation of [`WishlistStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use vaportrack_core::{
  item::TrackedItem,
  price::{NewPriceObservation, PriceObservation},
  store::WishlistStore,
};

use crate::{
  encode::{encode_dt, tracked_item_from_row, RawPriceObservation, NOW_SQL},
  schema::{PRAGMAS, SCHEMA},
  Error, Result,
};

const ITEM_COLUMNS: &str = "item_id, user_id, title, target_price, is_active";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A wishlist store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// clone queues onto the same connection thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, check it answers, and ensure the
  /// schema exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::Connection)?;
    let store = Self::init(conn).await?;
    tracing::debug!(path = %path.display(), "sqlite store ready");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::Connection)?;
    Self::init(conn).await
  }

  async fn init(conn: tokio_rusqlite::Connection) -> Result<Self> {
    let store = Self { conn };
    store.ping().await?;
    store.init_schema().await?;
    Ok(store)
  }

  async fn ping(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        conn.query_row("SELECT 1", [], |r| r.get::<_, i64>(0))?;
        Ok(())
      })
      .await
      .map_err(Error::Connection)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::Schema)
  }

  /// Read an integer-valued connection pragma.
  #[cfg(test)]
  pub(crate) async fn pragma(&self, name: &'static str) -> Result<i64> {
    self
      .conn
      .call(move |conn| Ok(conn.query_row(&format!("PRAGMA {name}"), [], |r| r.get(0))?))
      .await
      .map_err(Error::Read)
  }

  /// Look up a single item by key, ignoring the active flag.
  pub async fn get_item(&self, item_id: &str, user_id: &str) -> Result<Option<TrackedItem>> {
    let item_id = item_id.to_owned();
    let user_id = user_id.to_owned();

    self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {ITEM_COLUMNS} FROM tracked_items WHERE item_id = ?1 AND user_id = ?2"
            ),
            rusqlite::params![item_id, user_id],
            tracked_item_from_row,
          )
          .optional()?)
      })
      .await
      .map_err(Error::Read)
  }

  /// Full price history for `item_id`, oldest first.
  pub async fn price_history(&self, item_id: &str) -> Result<Vec<PriceObservation>> {
    let item_id = item_id.to_owned();

    let raws: Vec<RawPriceObservation> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, item_id, sale_price, normal_price, recorded_at
           FROM price_history
           WHERE item_id = ?1
           ORDER BY recorded_at, id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![item_id], RawPriceObservation::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::Read)?;

    raws
      .into_iter()
      .map(RawPriceObservation::into_observation)
      .collect()
  }
}

// ─── WishlistStore impl ──────────────────────────────────────────────────────

impl WishlistStore for SqliteStore {
  type Error = Error;

  async fn upsert_item(&self, item: TrackedItem) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO tracked_items (item_id, user_id, title, target_price, is_active)
           VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT (item_id, user_id) DO UPDATE SET
             target_price = excluded.target_price,
             is_active    = excluded.is_active",
          rusqlite::params![
            item.item_id,
            item.user_id,
            item.title,
            item.target_price,
            item.is_active,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(Error::Write)
  }

  async fn list_active_items(&self, user_id: &str) -> Result<Vec<TrackedItem>> {
    let user_id = user_id.to_owned();

    self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {ITEM_COLUMNS} FROM tracked_items WHERE user_id = ?1 AND is_active = 1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![user_id], tracked_item_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::Read)
  }

  async fn append_price_observation(&self, observation: NewPriceObservation) -> Result<()> {
    // Out-of-range years would encode to text `decode_dt` cannot read back.
    observation.validate().map_err(|e| {
      Error::Write(rusqlite::Error::ToSqlConversionFailure(Box::new(e)).into())
    })?;
    let recorded_at = observation.recorded_at.map(encode_dt);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          &format!(
            "INSERT INTO price_history (item_id, sale_price, normal_price, recorded_at)
             VALUES (?1, ?2, ?3, COALESCE(?4, {NOW_SQL}))"
          ),
          rusqlite::params![
            observation.item_id,
            observation.sale_price,
            observation.normal_price,
            recorded_at,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(Error::Write)
  }
}
