pub mod account;
pub use account::AccountConfig;

pub mod folder;
pub use folder::{
    ClassFilter, DisplayFolder, DisplayFolders, Folder, FolderClass, FolderDetails, FolderMode,
    FolderType, Folders, RemoteFolder, RemoteFolderType,
};

pub mod repository;
pub use repository::{FolderRepository, LocalStore};
