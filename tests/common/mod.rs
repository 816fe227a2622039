use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use books_core::core::BooksManager;
use books_core::store::CsvStore;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh worksheet directory unique to this test.
pub fn books_path() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("books");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// A store handle over the given worksheet directory. Multiple handles over
/// the same directory see the same worksheets.
pub fn store_at(path: &Path) -> CsvStore {
    CsvStore::new(path.to_path_buf()).expect("create csv store")
}

/// Opens a manager session over the given worksheet directory.
pub fn open_manager(path: &Path) -> BooksManager {
    BooksManager::open(Box::new(store_at(path))).expect("open books")
}
