// src/cache/store.rs
//
// Persistent factorization cache backed by SQLite.
//
// One row per distinct number, keyed by its decimal representation. A
// store is an upsert: a later successful factorization of the same number
// replaces the earlier row. Rows are never deleted by this subsystem and
// survive process restarts.

use std::path::Path;
use chrono::Utc;
use log::debug;
use num::BigInt;
use rusqlite::{params, Connection, OptionalExtension};
use crate::error::EngineError;

/// A cached factorization: the factors that were computed, the source
/// label of the strategy that produced them, and when the row was written.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheRecord {
    pub number: String,
    pub factors: Vec<BigInt>,
    pub method: String,
    pub timestamp: f64,
}

/// Handle to the backing store. Constructing the handle performs the
/// idempotent schema initialization, so every open handle is ready to use
/// and no global init flag exists anywhere.
pub struct ResultCache {
    conn: Connection,
}

impl ResultCache {
    /// Opens (or creates) the cache database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// In-memory cache, used by tests and callers that want memoization
    /// without persistence.
    pub fn open_in_memory() -> Result<Self, EngineError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, EngineError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS factorizations (
                 number TEXT PRIMARY KEY,
                 factors TEXT,
                 method TEXT,
                 timestamp REAL
             )",
            [],
        )?;
        Ok(ResultCache { conn })
    }

    /// Looks up a previously stored factorization. Never mutates state.
    pub fn lookup(&self, number: &BigInt) -> Result<Option<CacheRecord>, EngineError> {
        let key = number.to_string();
        let row = self
            .conn
            .query_row(
                "SELECT factors, method, timestamp FROM factorizations WHERE number = ?1",
                params![key],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, f64>(2)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((factors_json, method, timestamp)) => {
                let factors = decode_factors(&factors_json)?;
                debug!("Cache hit for {} ({})", key, method);
                Ok(Some(CacheRecord {
                    number: key,
                    factors,
                    method,
                    timestamp,
                }))
            }
            None => Ok(None),
        }
    }

    /// Upserts the factorization for `number`; the latest write wins.
    pub fn store(&self, number: &BigInt, factors: &[BigInt], method: &str) -> Result<(), EngineError> {
        let key = number.to_string();
        let factors_json = encode_factors(factors)?;
        let timestamp = Utc::now().timestamp_millis() as f64 / 1000.0;

        self.conn.execute(
            "INSERT OR REPLACE INTO factorizations (number, factors, method, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            params![key, factors_json, method, timestamp],
        )?;
        debug!("Cached factorization of {} via {}", key, method);
        Ok(())
    }

    /// Number of rows currently stored.
    pub fn record_count(&self) -> Result<i64, EngineError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM factorizations", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn encode_factors(factors: &[BigInt]) -> Result<String, EngineError> {
    let as_strings: Vec<String> = factors.iter().map(|f| f.to_string()).collect();
    serde_json::to_string(&as_strings)
        .map_err(|e| EngineError::CacheFailure(format!("failed to encode factors: {}", e)))
}

fn decode_factors(json: &str) -> Result<Vec<BigInt>, EngineError> {
    let as_strings: Vec<String> = serde_json::from_str(json)
        .map_err(|e| EngineError::CacheFailure(format!("corrupt factors column: {}", e)))?;
    as_strings
        .iter()
        .map(|s| {
            BigInt::parse_bytes(s.as_bytes(), 10)
                .ok_or_else(|| EngineError::CacheFailure(format!("corrupt factor value: {}", s)))
        })
        .collect()
}
