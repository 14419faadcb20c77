/*
[INPUT]:  Session markers written through the public store API
[OUTPUT]: Test results for session persistence
[POS]:    Integration tests - session marker storage
[UPDATE]: When marker storage changes
*/

mod common;

use std::fs;

use common::temp_dir;
use task_app_adapter::{FileSessionStore, Session, SessionStore};
use tokio_test::assert_ok;

#[test]
fn test_marker_survives_new_store_instance() {
    let dir = temp_dir();

    let writer = FileSessionStore::new(&dir);
    assert_ok!(writer.save(&Session::new("test@example.com")));

    let reader = FileSessionStore::new(&dir);
    assert_eq!(
        assert_ok!(reader.load()),
        Some(Session::new("test@example.com"))
    );

    assert_ok!(reader.clear());
    assert_eq!(assert_ok!(writer.load()), None);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_store_as_trait_object() {
    let dir = temp_dir();
    let store: Box<dyn SessionStore> = Box::new(FileSessionStore::new(&dir));

    assert_ok!(store.save(&Session::new("a@b.c")));
    assert_ok!(store.clear());
    assert_ok!(store.clear());

    fs::remove_dir_all(dir).unwrap();
}
