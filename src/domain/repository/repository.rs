//! Folder repository module.
//!
//! This module contains the folder repository, which reads folders
//! from the local store, resolves their type from the account
//! configuration and lists them for display.

use log::{debug, info, trace, warn};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use std::borrow::Cow;

use crate::{
    AccountConfig, DisplayFolder, DisplayFolders, Folder, FolderClass, FolderDetails, FolderMode,
    Folders,
};

use super::{Error, LocalStore, Result};

const SELECT_FOLDER: &str = "
    SELECT id, server_id, name
    FROM folders
    WHERE id = ?
";

const SELECT_REMOTE_FOLDERS: &str = "
    SELECT id, server_id, name
    FROM folders
    WHERE local_only = 0
";

const SELECT_FOLDER_ID: &str = "
    SELECT id
    FROM folders
    WHERE server_id = ?
";

const SELECT_FOLDER_SERVER_ID: &str = "
    SELECT server_id
    FROM folders
    WHERE id = ?
";

const SELECT_FOLDER_DETAILS: &str = "
    SELECT id, server_id, name, top_group, integrate, poll_class, display_class, notify_class, push_class
    FROM folders
";

const UPDATE_FOLDER_DETAILS: &str = "
    UPDATE folders
    SET top_group = ?, integrate = ?, poll_class = ?, display_class = ?, notify_class = ?, push_class = ?
    WHERE id = ?
";

const SELECT_DISPLAY_FOLDERS: &str = "
    SELECT id, server_id, name, top_group, (
        SELECT COUNT(messages.id)
        FROM messages
        WHERE messages.folder_id = folders.id
        AND messages.empty = 0
        AND messages.deleted = 0
        AND messages.read = 0
    ) AS unread_count
    FROM folders
";

/// Represents a folder details row, before its classes are parsed.
struct FolderDetailsRow {
    id: i64,
    server_id: String,
    name: String,
    top_group: bool,
    integrate: bool,
    poll_class: Option<String>,
    display_class: Option<String>,
    notify_class: Option<String>,
    push_class: Option<String>,
}

impl FolderDetailsRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            server_id: row.get(1)?,
            name: row.get(2)?,
            top_group: row.get(3)?,
            integrate: row.get(4)?,
            poll_class: row.get(5)?,
            display_class: row.get(6)?,
            notify_class: row.get(7)?,
            push_class: row.get(8)?,
        })
    }
}

pub struct FolderRepository<'a> {
    account_config: Cow<'a, AccountConfig>,
    store: LocalStore,
}

impl<'a> FolderRepository<'a> {
    pub fn new(account_config: Cow<'a, AccountConfig>, store: LocalStore) -> Self {
        Self {
            account_config,
            store,
        }
    }

    fn folder(&self, id: i64, server_id: String, name: String) -> Folder {
        Folder {
            kind: self.account_config.folder_type(&server_id),
            id,
            server_id,
            name,
        }
    }

    fn folder_details(&self, row: FolderDetailsRow) -> Result<FolderDetails> {
        Ok(FolderDetails {
            sync_class: FolderClass::from_stored(row.poll_class.as_deref())?,
            display_class: FolderClass::from_stored(row.display_class.as_deref())?,
            notify_class: FolderClass::from_stored(row.notify_class.as_deref())?,
            push_class: FolderClass::from_stored(row.push_class.as_deref())?,
            is_in_top_group: row.top_group,
            is_integrate: row.integrate,
            folder: self.folder(row.id, row.server_id, row.name),
        })
    }

    fn query_folders<P>(&self, db: &Connection, sql: &str, params: P) -> Result<Folders>
    where
        P: rusqlite::Params,
    {
        let rows = db
            .prepare(sql)?
            .query_map(params, |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows
            .into_iter()
            .map(|(id, server_id, name)| self.folder(id, server_id, name))
            .collect())
    }

    fn query_folder_details<P>(
        &self,
        db: &Connection,
        sql: &str,
        params: P,
    ) -> Result<Vec<FolderDetails>>
    where
        P: rusqlite::Params,
    {
        let rows = db
            .prepare(sql)?
            .query_map(params, FolderDetailsRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|row| self.folder_details(row))
            .collect()
    }

    /// Gets the folder matching the given id, if any.
    pub fn get_folder(&self, id: i64) -> Result<Option<Folder>> {
        self.store.read(|db| {
            let folder = self.query_folders(db, SELECT_FOLDER, [id])?.0.pop();
            Ok(folder)
        })
    }

    /// Lists the folders existing on the server side, meaning every
    /// folder not marked as local only.
    pub fn get_remote_folders(&self) -> Result<Folders> {
        let folders = self
            .store
            .read(|db| self.query_folders(db, SELECT_REMOTE_FOLDERS, []))?;

        debug!("found {} remote folders", folders.len());
        trace!("remote folders: {:#?}", folders);

        Ok(folders)
    }

    pub fn get_folder_id<S>(&self, server_id: S) -> Result<Option<i64>>
    where
        S: AsRef<str>,
    {
        self.store.read(|db| {
            let id = db
                .query_row(SELECT_FOLDER_ID, [server_id.as_ref()], |row| row.get(0))
                .optional()?;
            Ok(id)
        })
    }

    pub fn get_folder_server_id(&self, id: i64) -> Result<Option<String>> {
        self.store.read(|db| {
            let server_id = db
                .query_row(SELECT_FOLDER_SERVER_ID, [id], |row| row.get(0))
                .optional()?;
            Ok(server_id)
        })
    }

    /// Gets the details of the folder matching the given id. A
    /// missing folder is not an error.
    pub fn get_folder_details(&self, id: i64) -> Result<Option<FolderDetails>> {
        let sql = format!("{} WHERE id = ?", SELECT_FOLDER_DETAILS);
        self.store
            .read(|db| Ok(self.query_folder_details(db, &sql, [id])?.pop()))
    }

    /// Lists the details of all folders, in no particular order.
    pub fn get_all_folder_details(&self) -> Result<Vec<FolderDetails>> {
        self.store
            .read(|db| self.query_folder_details(db, SELECT_FOLDER_DETAILS, []))
    }

    /// Lists the details of the folders not marked as local only, in
    /// no particular order.
    pub fn get_remote_folder_details(&self) -> Result<Vec<FolderDetails>> {
        let sql = format!("{} WHERE local_only = 0", SELECT_FOLDER_DETAILS);
        self.store
            .read(|db| self.query_folder_details(db, &sql, []))
    }

    /// Overwrites the classification settings of the folder matching
    /// `details.folder.id`. The folder id, server id and name are
    /// left untouched.
    pub fn update_folder_details(&self, details: &FolderDetails) -> Result<()> {
        let updated = self.store.write(|tx| {
            let updated = tx.execute(
                UPDATE_FOLDER_DETAILS,
                params![
                    details.is_in_top_group,
                    details.is_integrate,
                    details.sync_class.as_str(),
                    details.display_class.as_str(),
                    details.notify_class.as_str(),
                    details.push_class.as_str(),
                    details.folder.id,
                ],
            )?;
            Ok(updated)
        })?;

        if updated == 0 {
            warn!("no folder with id {}, skipping details update", details.folder.id);
        } else {
            info!("updated details of folder {}", details.folder.server_id);
        }

        Ok(())
    }

    /// Lists the folders to display for the given mode, sorted and
    /// along with their unread count. Without mode, the display mode
    /// of the account is used.
    pub fn get_display_folders(&self, mode: Option<FolderMode>) -> Result<DisplayFolders> {
        let mode = mode.unwrap_or_else(|| self.account_config.folder_display_mode());
        debug!("listing display folders with mode {}", mode);

        let filter = mode.class_filter("display_class")?;
        let (sql, params) = match filter {
            None => (SELECT_DISPLAY_FOLDERS.to_owned(), vec![]),
            Some(filter) => (
                format!("{} WHERE {}", SELECT_DISPLAY_FOLDERS, filter.clause),
                filter.params,
            ),
        };
        trace!("display folders query: {}", sql);

        let rows = self.store.read(|db| {
            let rows = db
                .prepare(&sql)?
                .query_map(params_from_iter(params.iter()), |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, bool>(3)?,
                        row.get::<_, i64>(4)?,
                    ))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;

        let mut folders: DisplayFolders = rows
            .into_iter()
            .map(|(id, server_id, name, top_group, unread_count)| DisplayFolder {
                folder: self.folder(id, server_id, name),
                is_in_top_group: top_group,
                unread_count: u64::try_from(unread_count).unwrap_or_default(),
            })
            .collect();
        folders.sort();

        debug!("found {} display folders", folders.len());
        trace!("display folders: {:#?}", folders);

        Ok(folders)
    }

    /// Lists the remote folders selected by the push mode of the
    /// account, sorted by name. The [`FolderMode::None`] push mode
    /// means push is disabled.
    pub fn get_push_folders(&self) -> Result<Folders> {
        let mode = self.account_config.folder_push_mode();
        if mode == FolderMode::None {
            debug!("push disabled, skipping push folders");
            return Ok(Folders::default());
        }

        let (sql, params) = match mode.class_filter("push_class")? {
            None => (SELECT_REMOTE_FOLDERS.to_owned(), vec![]),
            Some(filter) => (
                format!("{} AND {}", SELECT_REMOTE_FOLDERS, filter.clause),
                filter.params,
            ),
        };

        let mut folders = self
            .store
            .read(|db| self.query_folders(db, &sql, params_from_iter(params.iter())))?;
        folders.sort_by_name();

        debug!("found {} push folders with mode {}", folders.len(), mode);
        Ok(folders)
    }

    fn update_folder_column<S>(&self, server_id: S, column: &str, value: &dyn ToSql) -> Result<()>
    where
        S: AsRef<str>,
    {
        let server_id = server_id.as_ref();
        let sql = format!("UPDATE folders SET {} = ? WHERE server_id = ?", column);

        self.store.write(|tx| match tx.execute(&sql, params![value, server_id])? {
            0 => Err(Error::FindFolderByServerIdError(server_id.to_owned())),
            _ => Ok(()),
        })
    }

    /// Includes or excludes the folder from the unified inbox.
    pub fn set_integrate<S>(&self, server_id: S, integrate: bool) -> Result<()>
    where
        S: AsRef<str>,
    {
        let server_id = server_id.as_ref();
        self.update_folder_column(server_id, "integrate", &integrate)?;
        info!("set integrate of folder {} to {}", server_id, integrate);
        Ok(())
    }

    pub fn set_display_class<S>(&self, server_id: S, class: FolderClass) -> Result<()>
    where
        S: AsRef<str>,
    {
        let server_id = server_id.as_ref();
        self.update_folder_column(server_id, "display_class", &class.as_str())?;
        info!("set display class of folder {} to {}", server_id, class);
        Ok(())
    }

    pub fn set_sync_class<S>(&self, server_id: S, class: FolderClass) -> Result<()>
    where
        S: AsRef<str>,
    {
        let server_id = server_id.as_ref();
        self.update_folder_column(server_id, "poll_class", &class.as_str())?;
        info!("set sync class of folder {} to {}", server_id, class);
        Ok(())
    }

    pub fn set_notify_class<S>(&self, server_id: S, class: FolderClass) -> Result<()>
    where
        S: AsRef<str>,
    {
        let server_id = server_id.as_ref();
        self.update_folder_column(server_id, "notify_class", &class.as_str())?;
        info!("set notify class of folder {} to {}", server_id, class);
        Ok(())
    }
}
