use crate::error::{AppError, AppResult};
use crate::models::Exchange;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

pub type DbConnection = Arc<Mutex<Connection>>;

pub struct Database {
    connection: DbConnection,
}

impl Database {
    pub fn new(db_path: &Path) -> AppResult<Self> {
        // Ensure the database directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;

        let database = Database {
            connection: Arc::new(Mutex::new(conn)),
        };

        database.init_schema()?;

        Ok(database)
    }

    fn init_schema(&self) -> AppResult<()> {
        let conn = self
            .connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))?;

        // The exchange log. Append-only; rows are never updated or deleted.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                response TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    pub fn insert_exchange(&self, exchange: &Exchange) -> AppResult<i64> {
        let conn = self
            .connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))?;

        conn.execute(
            "INSERT INTO questions (question, response, timestamp) VALUES (?1, ?2, ?3)",
            params![exchange.question, exchange.response, exchange.timestamp],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get_all_exchanges(&self) -> AppResult<Vec<Exchange>> {
        let conn = self
            .connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))?;

        let mut stmt = conn.prepare(
            "SELECT id, question, response, timestamp FROM questions ORDER BY id ASC",
        )?;

        let exchange_iter = stmt.query_map([], |row| {
            Ok(Exchange {
                id: row.get(0)?,
                question: row.get(1)?,
                response: row.get(2)?,
                timestamp: row.get(3)?,
            })
        })?;

        let mut exchanges = Vec::new();
        for exchange in exchange_iter {
            exchanges.push(exchange?);
        }

        Ok(exchanges)
    }
}
