use rusqlite::params;
use std::borrow::Cow;
use tempfile::TempDir;

use folders_lib::{
    repository, AccountConfig, FolderClass, FolderDetails, FolderMode, FolderRepository,
    FolderType, LocalStore,
};

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

fn account_config() -> AccountConfig {
    AccountConfig {
        name: "account".into(),
        inbox_folder: Some("INBOX".into()),
        outbox_folder: Some("OUTBOX-LOCAL".into()),
        sent_folder: Some("Sent".into()),
        folder_display_mode: Some(FolderMode::All),
        ..AccountConfig::default()
    }
}

fn set_display_class(store: &LocalStore, id: i64, class: Option<&str>) {
    store
        .write(|tx| {
            tx.execute(
                "UPDATE folders SET display_class = ? WHERE id = ?",
                params![class, id],
            )?;
            Ok(())
        })
        .unwrap();
}

fn add_message(store: &LocalStore, folder_id: i64, empty: bool, deleted: bool, read: bool) {
    store
        .write(|tx| {
            tx.execute(
                "INSERT INTO messages (folder_id, empty, deleted, read) VALUES (?, ?, ?, ?)",
                params![folder_id, empty, deleted, read],
            )?;
            Ok(())
        })
        .unwrap();
}

/// Sets up the store of the account: inbox, outbox, sent, a pinned
/// "Zebra" folder and an unpinned "Apple" folder.
fn setup(dir: &TempDir) -> LocalStore {
    init_logger();

    let store = LocalStore::new(dir.path());
    assert_eq!(store.create_folder("INBOX", "INBOX", false).unwrap(), 1);
    assert_eq!(store.create_folder("OUTBOX-LOCAL", "OUTBOX-LOCAL", true).unwrap(), 2);
    assert_eq!(store.create_folder("Sent", "Sent", false).unwrap(), 3);
    assert_eq!(store.create_folder("Zebra", "Zebra", false).unwrap(), 4);
    assert_eq!(store.create_folder("Apple", "Apple", false).unwrap(), 5);

    store
        .write(|tx| {
            tx.execute("UPDATE folders SET top_group = 1 WHERE id = 4", [])?;
            Ok(())
        })
        .unwrap();

    store
}

fn display_names(repo: &FolderRepository, mode: Option<FolderMode>) -> Vec<String> {
    repo.get_display_folders(mode)
        .unwrap()
        .iter()
        .map(|f| f.folder.server_id.clone())
        .collect()
}

#[test]
fn test_display_folders_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    let folders = repo.get_display_folders(Some(FolderMode::All)).unwrap();
    let names: Vec<&str> = folders.iter().map(|f| f.folder.name.as_str()).collect();
    assert_eq!(names, vec!["INBOX", "OUTBOX-LOCAL", "Sent", "Zebra", "Apple"]);

    let kinds: Vec<FolderType> = folders.iter().map(|f| f.folder.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FolderType::Inbox,
            FolderType::Outbox,
            FolderType::Sent,
            FolderType::Regular,
            FolderType::Regular,
        ]
    );

    assert!(folders[3].is_in_top_group);
    assert!(!folders[4].is_in_top_group);
}

#[test]
fn test_display_folders_unread_count() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);

    // inbox: 2 unread, plus one of each excluded state
    add_message(&store, 1, false, false, false);
    add_message(&store, 1, false, false, false);
    add_message(&store, 1, true, false, false);
    add_message(&store, 1, false, true, false);
    add_message(&store, 1, false, false, true);
    // apple: 1 unread
    add_message(&store, 5, false, false, false);

    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store.clone());

    let counts: Vec<(String, u64)> = repo
        .get_display_folders(None)
        .unwrap()
        .iter()
        .map(|f| (f.folder.name.clone(), f.unread_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("INBOX".into(), 2),
            ("OUTBOX-LOCAL".into(), 0),
            ("Sent".into(), 0),
            ("Zebra".into(), 0),
            ("Apple".into(), 1),
        ]
    );

    // counts are live
    store
        .write(|tx| {
            tx.execute("UPDATE messages SET read = 1 WHERE folder_id = 1", [])?;
            Ok(())
        })
        .unwrap();
    let folders = repo.get_display_folders(None).unwrap();
    let inbox = &folders[0];
    assert_eq!(inbox.folder.name, "INBOX");
    assert_eq!(inbox.unread_count, 0);
}

#[test]
fn test_display_folders_filters() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    set_display_class(&store, 1, Some("FIRST_CLASS"));
    set_display_class(&store, 2, Some("SECOND_CLASS"));
    set_display_class(&store, 3, Some("NO_CLASS"));
    set_display_class(&store, 4, Some("INHERITED"));
    set_display_class(&store, 5, None);

    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    assert_eq!(
        display_names(&repo, Some(FolderMode::All)),
        vec!["INBOX", "OUTBOX-LOCAL", "Sent", "Zebra", "Apple"]
    );
    assert_eq!(
        display_names(&repo, Some(FolderMode::FirstClass)),
        vec!["INBOX"]
    );
    assert_eq!(
        display_names(&repo, Some(FolderMode::FirstAndSecondClass)),
        vec!["INBOX", "OUTBOX-LOCAL"]
    );
    // null display class is considered as no class
    assert_eq!(
        display_names(&repo, Some(FolderMode::NotSecondClass)),
        vec!["INBOX", "Sent", "Zebra", "Apple"]
    );
}

#[test]
fn test_display_folders_first_class_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());
    let work = store.create_folder("Work", "Work", false).unwrap();
    let news = store.create_folder("News", "News", false).unwrap();
    set_display_class(&store, work, Some("SECOND_CLASS"));
    set_display_class(&store, news, Some("NO_CLASS"));

    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    assert!(repo
        .get_display_folders(Some(FolderMode::FirstClass))
        .unwrap()
        .is_empty());
}

#[test]
fn test_display_folders_default_mode() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    set_display_class(&store, 4, Some("SECOND_CLASS"));

    // without display mode, the account falls back to not second class
    let config = AccountConfig {
        folder_display_mode: None,
        ..account_config()
    };
    let repo = FolderRepository::new(Cow::Borrowed(&config), store.clone());
    assert_eq!(
        display_names(&repo, None),
        vec!["INBOX", "OUTBOX-LOCAL", "Sent", "Apple"]
    );

    let config = AccountConfig {
        folder_display_mode: Some(FolderMode::FirstAndSecondClass),
        ..account_config()
    };
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);
    assert_eq!(display_names(&repo, None), vec!["Zebra"]);
}

#[test]
fn test_display_folders_none_mode() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);

    let config = AccountConfig {
        folder_display_mode: Some(FolderMode::None),
        ..account_config()
    };
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    assert!(matches!(
        repo.get_display_folders(Some(FolderMode::None)),
        Err(repository::Error::FolderError(
            folders_lib::folder::Error::InvalidFolderModeError
        ))
    ));
    assert!(matches!(
        repo.get_display_folders(None),
        Err(repository::Error::FolderError(
            folders_lib::folder::Error::InvalidFolderModeError
        ))
    ));
}

#[test]
fn test_folder_details() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store.clone());

    // missing folder is not an error
    assert_eq!(repo.get_folder_details(42).unwrap(), None);

    // null classes default to no class
    let details = repo.get_folder_details(4).unwrap().unwrap();
    assert_eq!(details.folder.server_id, "Zebra");
    assert_eq!(details.folder.kind, FolderType::Regular);
    assert!(details.is_in_top_group);
    assert!(!details.is_integrate);
    assert_eq!(details.push_class, FolderClass::NoClass);
    assert_eq!(details.sync_class, FolderClass::NoClass);

    let updated = FolderDetails {
        is_in_top_group: false,
        is_integrate: true,
        sync_class: FolderClass::FirstClass,
        display_class: FolderClass::SecondClass,
        notify_class: FolderClass::Inherited,
        push_class: FolderClass::SecondClass,
        ..details
    };
    repo.update_folder_details(&updated).unwrap();
    assert_eq!(repo.get_folder_details(4).unwrap(), Some(updated.clone()));

    // identity fields are never written
    let renamed = FolderDetails {
        folder: folders_lib::Folder {
            name: "Renamed".into(),
            server_id: "Renamed".into(),
            ..updated.folder.clone()
        },
        ..updated.clone()
    };
    repo.update_folder_details(&renamed).unwrap();
    assert_eq!(repo.get_folder_details(4).unwrap(), Some(updated));

    // other folders are untouched
    let apple = repo.get_folder_details(5).unwrap().unwrap();
    assert!(!apple.is_integrate);
    assert_eq!(apple.display_class, FolderClass::NoClass);

    let all = repo.get_all_folder_details().unwrap();
    let mut ids: Vec<i64> = all.iter().map(|d| d.folder.id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let remote = repo.get_remote_folder_details().unwrap();
    assert!(remote.iter().all(|d| d.folder.server_id != "OUTBOX-LOCAL"));
    assert_eq!(remote.len(), 4);
}

#[test]
fn test_folder_details_corrupted_class() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    store
        .write(|tx| {
            tx.execute("UPDATE folders SET notify_class = 'LOUD' WHERE id = 3", [])?;
            Ok(())
        })
        .unwrap();

    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    assert!(matches!(
        repo.get_folder_details(3),
        Err(repository::Error::FolderError(
            folders_lib::folder::Error::ParseFolderClassError(class)
        )) if class == "LOUD"
    ));
    assert!(repo.get_all_folder_details().is_err());
    assert!(repo.get_folder_details(4).unwrap().is_some());
}

#[test]
fn test_folder_settings_mutators() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    repo.set_integrate("Sent", true).unwrap();
    repo.set_display_class("Sent", FolderClass::SecondClass)
        .unwrap();
    repo.set_sync_class("Sent", FolderClass::FirstClass).unwrap();
    repo.set_notify_class("Sent", FolderClass::Inherited)
        .unwrap();

    let sent = repo.get_folder_details(3).unwrap().unwrap();
    assert!(sent.is_integrate);
    assert!(!sent.is_in_top_group);
    assert_eq!(sent.display_class, FolderClass::SecondClass);
    assert_eq!(sent.sync_class, FolderClass::FirstClass);
    assert_eq!(sent.notify_class, FolderClass::Inherited);
    assert_eq!(sent.push_class, FolderClass::NoClass);
    assert_eq!(sent.folder.name, "Sent");

    repo.set_integrate("Sent", false).unwrap();
    let sent = repo.get_folder_details(3).unwrap().unwrap();
    assert!(!sent.is_integrate);
    assert_eq!(sent.display_class, FolderClass::SecondClass);
}

#[test]
fn test_folder_settings_mutators_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());
    store.create_folder("Work", "Work", false).unwrap();

    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);
    let before = repo.get_all_folder_details().unwrap();

    assert!(matches!(
        repo.set_sync_class("INBOX", FolderClass::FirstClass),
        Err(repository::Error::FindFolderByServerIdError(id)) if id == "INBOX"
    ));
    assert!(matches!(
        repo.set_integrate("INBOX", true),
        Err(repository::Error::FindFolderByServerIdError(_))
    ));
    assert!(matches!(
        repo.set_display_class("INBOX", FolderClass::FirstClass),
        Err(repository::Error::FindFolderByServerIdError(_))
    ));
    assert!(matches!(
        repo.set_notify_class("INBOX", FolderClass::FirstClass),
        Err(repository::Error::FindFolderByServerIdError(_))
    ));

    assert_eq!(repo.get_all_folder_details().unwrap(), before);
}

#[test]
fn test_remote_folders() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    let mut folders: Vec<(i64, String, FolderType)> = repo
        .get_remote_folders()
        .unwrap()
        .iter()
        .map(|f| (f.id, f.server_id.clone(), f.kind))
        .collect();
    folders.sort_by_key(|(id, _, _)| *id);

    assert_eq!(
        folders,
        vec![
            (1, "INBOX".into(), FolderType::Inbox),
            (3, "Sent".into(), FolderType::Sent),
            (4, "Zebra".into(), FolderType::Regular),
            (5, "Apple".into(), FolderType::Regular),
        ]
    );
}

#[test]
fn test_folder_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    let config = account_config();
    let repo = FolderRepository::new(Cow::Borrowed(&config), store);

    let outbox = repo.get_folder(2).unwrap().unwrap();
    assert_eq!(outbox.server_id, "OUTBOX-LOCAL");
    assert_eq!(outbox.kind, FolderType::Outbox);
    assert_eq!(repo.get_folder(42).unwrap(), None);

    assert_eq!(repo.get_folder_id("Sent").unwrap(), Some(3));
    assert_eq!(repo.get_folder_id("Trash").unwrap(), None);

    assert_eq!(repo.get_folder_server_id(5).unwrap(), Some("Apple".into()));
    assert_eq!(repo.get_folder_server_id(42).unwrap(), None);
}

#[test]
fn test_push_folders() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup(&dir);
    store
        .write(|tx| {
            tx.execute(
                "UPDATE folders SET push_class = 'FIRST_CLASS' WHERE id IN (1, 2, 5)",
                [],
            )?;
            tx.execute(
                "UPDATE folders SET push_class = 'SECOND_CLASS' WHERE id = 4",
                [],
            )?;
            Ok(())
        })
        .unwrap();

    let push_names = |mode: Option<FolderMode>| -> Vec<String> {
        let config = AccountConfig {
            folder_push_mode: mode,
            ..account_config()
        };
        let repo = FolderRepository::new(Cow::Owned(config), store.clone());
        repo.get_push_folders()
            .unwrap()
            .iter()
            .map(|f| f.name.clone())
            .collect()
    };

    // the local only outbox is never pushed
    assert_eq!(push_names(None), vec!["Apple", "INBOX"]);
    assert_eq!(
        push_names(Some(FolderMode::FirstAndSecondClass)),
        vec!["Apple", "INBOX", "Zebra"]
    );
    assert_eq!(
        push_names(Some(FolderMode::All)),
        vec!["Apple", "INBOX", "Sent", "Zebra"]
    );
    assert_eq!(
        push_names(Some(FolderMode::NotSecondClass)),
        vec!["Apple", "INBOX", "Sent"]
    );
    assert!(push_names(Some(FolderMode::None)).is_empty());
}
