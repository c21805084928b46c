// SQLite repository implementation
use crate::application::dashboard_repository::{DashboardRepository, RepoResult};
use crate::application::errors::RepositoryError;
use crate::domain::category::{Category, CategoryPosition, NewCategory};
use crate::domain::link::{Link, LinkChanges, LinkPlacement, NewLink};
use crate::domain::panel::{NewPanel, Panel};
use anyhow::Context;
use async_trait::async_trait;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS panels (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT    NOT NULL UNIQUE,
    position   INTEGER NOT NULL DEFAULT 0,
    created_at TEXT    NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS categories (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT    NOT NULL,
    panel_id   INTEGER NOT NULL DEFAULT 1 REFERENCES panels(id) ON DELETE CASCADE,
    position   INTEGER NOT NULL DEFAULT 0,
    created_at TEXT    NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS links (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    url         TEXT    NOT NULL,
    favicon     TEXT,
    category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    position    INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT    NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_categories_panel_id ON categories(panel_id);
CREATE INDEX IF NOT EXISTS idx_links_category_id ON links(category_id);
";

const PANEL_COLUMNS: &str = "id, name, position, created_at";
const CATEGORY_COLUMNS: &str = "id, name, panel_id, position, created_at";
const LINK_COLUMNS: &str = "id, name, url, favicon, category_id, position, created_at";

#[derive(Clone)]
pub struct SqliteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRepository {
    /// Open (or create) the database file, configure it and apply the schema
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create database directory {}", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("open database {}", path.display()))?;
        configure_connection(&conn).context("configure sqlite pragmas")?;
        conn.execute_batch(SCHEMA).context("apply schema")?;

        tracing::info!("Opened dashboard database at {}", path.display());
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA).context("apply schema")?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> RepoResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> RepoResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| anyhow::anyhow!("sqlite connection mutex poisoned"))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| RepositoryError::Backend(anyhow::Error::new(e)))?
    }
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    let _journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    conn.busy_timeout(DEFAULT_BUSY_TIMEOUT)?;
    Ok(())
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, _) = &err {
            if failure.code == ErrorCode::ConstraintViolation {
                match failure.extended_code {
                    rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return Self::ForeignKey,
                    rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => return Self::Unique,
                    _ => {}
                }
            }
        }
        Self::Backend(anyhow::Error::new(err))
    }
}

fn now_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

fn panel_from_row(row: &Row<'_>) -> rusqlite::Result<Panel> {
    Ok(Panel {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        panel_id: row.get(2)?,
        position: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn link_from_row(row: &Row<'_>) -> rusqlite::Result<Link> {
    Ok(Link {
        id: row.get(0)?,
        name: row.get(1)?,
        url: row.get(2)?,
        favicon: row.get(3)?,
        category_id: row.get(4)?,
        position: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn select_link(conn: &Connection, id: i64) -> rusqlite::Result<Option<Link>> {
    conn.query_row(
        &format!("SELECT {LINK_COLUMNS} FROM links WHERE id = ?1"),
        params![id],
        link_from_row,
    )
    .optional()
}

#[async_trait]
impl DashboardRepository for SqliteRepository {
    async fn list_panels(&self) -> RepoResult<Vec<Panel>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {PANEL_COLUMNS} FROM panels ORDER BY position, id"))?;
            let panels = stmt
                .query_map([], panel_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(panels)
        })
        .await
    }

    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY position, id"
            ))?;
            let categories = stmt
                .query_map([], category_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(categories)
        })
        .await
    }

    async fn list_links(&self) -> RepoResult<Vec<Link>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {LINK_COLUMNS} FROM links ORDER BY position, id"))?;
            let links = stmt
                .query_map([], link_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(links)
        })
        .await
    }

    async fn max_panel_position(&self) -> RepoResult<Option<i64>> {
        self.with_conn(|conn| {
            let max = conn.query_row(
                "SELECT MAX(position) FROM panels",
                [],
                |row| row.get(0),
            )?;
            Ok(max)
        })
        .await
    }

    async fn max_category_position(&self, panel_id: i64) -> RepoResult<Option<i64>> {
        self.with_conn(move |conn| {
            let max = conn.query_row(
                "SELECT MAX(position) FROM categories WHERE panel_id = ?1",
                params![panel_id],
                |row| row.get(0),
            )?;
            Ok(max)
        })
        .await
    }

    async fn max_link_position(&self, category_id: i64) -> RepoResult<Option<i64>> {
        self.with_conn(move |conn| {
            let max = conn.query_row(
                "SELECT MAX(position) FROM links WHERE category_id = ?1",
                params![category_id],
                |row| row.get(0),
            )?;
            Ok(max)
        })
        .await
    }

    async fn insert_panel(&self, panel: NewPanel) -> RepoResult<Panel> {
        self.with_conn(move |conn| {
            let created_at = now_timestamp();
            conn.execute(
                "INSERT INTO panels (name, position, created_at) VALUES (?1, ?2, ?3)",
                params![panel.name, panel.position, created_at],
            )?;
            Ok(Panel {
                id: conn.last_insert_rowid(),
                name: panel.name,
                position: panel.position,
                created_at,
            })
        })
        .await
    }

    async fn insert_category(&self, category: NewCategory) -> RepoResult<Category> {
        self.with_conn(move |conn| {
            let created_at = now_timestamp();
            conn.execute(
                "INSERT INTO categories (name, panel_id, position, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![category.name, category.panel_id, category.position, created_at],
            )?;
            Ok(Category {
                id: conn.last_insert_rowid(),
                name: category.name,
                panel_id: category.panel_id,
                position: category.position,
                created_at,
            })
        })
        .await
    }

    async fn insert_link(&self, link: NewLink) -> RepoResult<Link> {
        self.with_conn(move |conn| {
            let created_at = now_timestamp();
            conn.execute(
                "INSERT INTO links (name, url, favicon, category_id, position, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    link.name,
                    link.url,
                    link.favicon,
                    link.category_id,
                    link.position,
                    created_at
                ],
            )?;
            Ok(Link {
                id: conn.last_insert_rowid(),
                name: link.name,
                url: link.url,
                favicon: link.favicon,
                category_id: link.category_id,
                position: link.position,
                created_at,
            })
        })
        .await
    }

    async fn find_link(&self, id: i64) -> RepoResult<Option<Link>> {
        self.with_conn(move |conn| Ok(select_link(conn, id)?)).await
    }

    async fn update_link(&self, id: i64, changes: LinkChanges) -> RepoResult<Option<Link>> {
        self.with_conn(move |conn| {
            // COALESCE keeps the stored value for every column left as NULL
            let updated = conn.execute(
                "UPDATE links SET
                    name        = COALESCE(?2, name),
                    url         = COALESCE(?3, url),
                    favicon     = COALESCE(?4, favicon),
                    category_id = COALESCE(?5, category_id),
                    position    = COALESCE(?6, position)
                 WHERE id = ?1",
                params![
                    id,
                    changes.name,
                    changes.url,
                    changes.favicon,
                    changes.category_id,
                    changes.position
                ],
            )?;
            if updated == 0 {
                return Ok(None);
            }
            Ok(select_link(conn, id)?)
        })
        .await
    }

    async fn delete_panel(&self, id: i64) -> RepoResult<usize> {
        self.with_conn(move |conn| {
            Ok(conn.execute("DELETE FROM panels WHERE id = ?1", params![id])?)
        })
        .await
    }

    async fn delete_category(&self, id: i64) -> RepoResult<usize> {
        self.with_conn(move |conn| {
            Ok(conn.execute("DELETE FROM categories WHERE id = ?1", params![id])?)
        })
        .await
    }

    async fn delete_link(&self, id: i64) -> RepoResult<usize> {
        self.with_conn(move |conn| {
            Ok(conn.execute("DELETE FROM links WHERE id = ?1", params![id])?)
        })
        .await
    }

    async fn reorder_categories(&self, items: &[CategoryPosition]) -> RepoResult<()> {
        let items = items.to_vec();
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare("UPDATE categories SET position = ?1 WHERE id = ?2")?;
                for item in &items {
                    stmt.execute(params![item.position, item.id])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await
    }

    async fn reorder_links(&self, items: &[LinkPlacement]) -> RepoResult<()> {
        let items = items.to_vec();
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt =
                    tx.prepare("UPDATE links SET position = ?1, category_id = ?2 WHERE id = ?3")?;
                for item in &items {
                    stmt.execute(params![item.position, item.category_id, item.id])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (SqliteRepository, Panel, Category, Link) {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let panel = repo.insert_panel(NewPanel::new("Work", 0)).await.unwrap();
        let category = repo
            .insert_category(NewCategory {
                name: "Build".to_string(),
                panel_id: panel.id,
                position: 0,
            })
            .await
            .unwrap();
        let link = repo
            .insert_link(NewLink {
                name: "Docs".to_string(),
                url: "https://docs.rs".to_string(),
                favicon: None,
                category_id: category.id,
                position: 0,
            })
            .await
            .unwrap();
        (repo, panel, category, link)
    }

    #[test]
    fn test_open_sets_wal_busy_timeout_and_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dashboard.db");
        let repo = SqliteRepository::open(&path).unwrap();
        assert!(path.exists());

        let conn = repo.conn.lock().unwrap();
        let journal_mode: String = conn
            .pragma_query_value(None, "journal_mode", |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_ascii_lowercase(), "wal");

        let busy_timeout_ms: u64 = conn
            .pragma_query_value(None, "busy_timeout", |row| row.get(0))
            .unwrap();
        assert_eq!(u128::from(busy_timeout_ms), DEFAULT_BUSY_TIMEOUT.as_millis());

        let foreign_keys: i64 = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }

    #[tokio::test]
    async fn test_reopen_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.db");
        {
            let repo = SqliteRepository::open(&path).unwrap();
            repo.insert_panel(NewPanel::new("Work", 0)).await.unwrap();
        }

        let repo = SqliteRepository::open(&path).unwrap();
        let panels = repo.list_panels().await.unwrap();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].name, "Work");
    }

    #[tokio::test]
    async fn test_max_positions_are_scoped() {
        let (repo, panel, category, _) = seeded().await;

        assert_eq!(repo.max_panel_position().await.unwrap(), Some(0));
        assert_eq!(repo.max_category_position(panel.id).await.unwrap(), Some(0));
        assert_eq!(repo.max_category_position(panel.id + 1).await.unwrap(), None);
        assert_eq!(repo.max_link_position(category.id).await.unwrap(), Some(0));
        assert_eq!(repo.max_link_position(category.id + 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_max_position_reads_i64_max() {
        let (repo, panel, category, _) = seeded().await;
        repo.reorder_categories(&[CategoryPosition {
            id: category.id,
            position: i64::MAX,
        }])
        .await
        .unwrap();

        let max = repo.max_category_position(panel.id).await.unwrap();
        assert_eq!(max, Some(i64::MAX));
    }

    #[tokio::test]
    async fn test_delete_category_cascades_to_links() {
        let (repo, panel, category, link) = seeded().await;
        let sibling = repo
            .insert_category(NewCategory {
                name: "Admin".to_string(),
                panel_id: panel.id,
                position: 1,
            })
            .await
            .unwrap();

        assert_eq!(repo.delete_category(category.id).await.unwrap(), 1);
        assert!(repo.find_link(link.id).await.unwrap().is_none());
        let remaining: Vec<i64> = repo
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(remaining, vec![sibling.id]);
        assert_eq!(repo.list_panels().await.unwrap().len(), 1);
        assert_eq!(repo.delete_category(category.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_constraint_violations_are_classified() {
        let (repo, _, _, _) = seeded().await;

        let duplicate = repo.insert_panel(NewPanel::new("Work", 1)).await;
        assert!(matches!(duplicate, Err(RepositoryError::Unique)));

        let orphan = repo
            .insert_category(NewCategory {
                name: "Orphan".to_string(),
                panel_id: 999,
                position: 0,
            })
            .await;
        assert!(matches!(orphan, Err(RepositoryError::ForeignKey)));
    }

    #[tokio::test]
    async fn test_delete_panel_cascades_two_levels() {
        let (repo, panel, _, _) = seeded().await;

        assert_eq!(repo.delete_panel(panel.id).await.unwrap(), 1);
        assert!(repo.list_categories().await.unwrap().is_empty());
        assert!(repo.list_links().await.unwrap().is_empty());
        assert_eq!(repo.delete_panel(panel.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_link_keeps_unset_columns() {
        let (repo, _, _, link) = seeded().await;

        let updated = repo
            .update_link(
                link.id,
                LinkChanges {
                    name: Some("Rust docs".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Rust docs");
        assert_eq!(updated.url, link.url);
        assert_eq!(updated.category_id, link.category_id);

        let missing = repo.update_link(999, LinkChanges::default()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_reorder_links_is_atomic() {
        let (repo, _, category, link) = seeded().await;

        let result = repo
            .reorder_links(&[
                LinkPlacement {
                    id: link.id,
                    category_id: category.id,
                    position: 7,
                },
                LinkPlacement {
                    id: link.id,
                    category_id: 999,
                    position: 8,
                },
            ])
            .await;
        assert!(matches!(result, Err(RepositoryError::ForeignKey)));

        let stored = repo.find_link(link.id).await.unwrap().unwrap();
        assert_eq!(stored.position, 0);
    }
}
