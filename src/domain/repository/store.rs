//! Local store module.
//!
//! This module contains the sqlite store holding folders and their
//! messages flags.

use log::trace;
use rusqlite::{params, Connection, Transaction};
use std::path::{Path, PathBuf};

use super::Result;

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS folders (
        id            INTEGER PRIMARY KEY,
        server_id     TEXT    NOT NULL UNIQUE,
        name          TEXT    NOT NULL,
        local_only    INTEGER NOT NULL DEFAULT 0,
        top_group     INTEGER NOT NULL DEFAULT 0,
        integrate     INTEGER NOT NULL DEFAULT 0,
        poll_class    TEXT,
        display_class TEXT,
        notify_class  TEXT,
        push_class    TEXT
    );

    CREATE TABLE IF NOT EXISTS messages (
        id        INTEGER PRIMARY KEY,
        folder_id INTEGER NOT NULL,
        empty     INTEGER NOT NULL DEFAULT 0,
        deleted   INTEGER NOT NULL DEFAULT 0,
        read      INTEGER NOT NULL DEFAULT 0
    );
";

const INSERT_FOLDER: &str = "
    INSERT INTO folders (server_id, name, local_only)
    VALUES (?, ?, ?)
";

/// Represents the local store of an account.
///
/// Every unit of work opens its own connection, which is closed once
/// the work ends, whether it succeeded or not.
#[derive(Clone, Debug)]
pub struct LocalStore {
    db_path: PathBuf,
}

impl LocalStore {
    pub fn new<P>(store_dir: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            db_path: store_dir.as_ref().join(".database.sqlite"),
        }
    }

    fn db(&self) -> Result<Connection> {
        let db = Connection::open(&self.db_path)?;
        db.execute_batch(CREATE_TABLES)?;
        Ok(db)
    }

    /// Runs the given read unit of work.
    pub fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let db = self.db()?;
        f(&db)
    }

    /// Runs the given write unit of work inside a transaction. The
    /// transaction is committed only if the unit of work succeeds.
    pub fn write<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction) -> Result<T>,
    {
        let mut db = self.db()?;
        let tx = db.transaction()?;
        let output = f(&tx)?;
        tx.commit()?;
        Ok(output)
    }

    /// Inserts a new folder without any class and returns its id.
    pub fn create_folder<S, N>(&self, server_id: S, name: N, local_only: bool) -> Result<i64>
    where
        S: AsRef<str>,
        N: AsRef<str>,
    {
        let server_id = server_id.as_ref();
        trace!("creating folder {}", server_id);

        self.write(|tx| {
            tx.execute(INSERT_FOLDER, params![server_id, name.as_ref(), local_only])?;
            Ok(tx.last_insert_rowid())
        })
    }
}
