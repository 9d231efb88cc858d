mod common;
use common::setup_test_db;
use runcalc::core::RaceStore;
use runcalc::db::SqliteStorage;
use runcalc::db::log::{load_log, ttlog};
use runcalc::db::pool::DbPool;
use runcalc::models::race::RaceDraft;
use runcalc::models::race_type::RaceType;
use runcalc::storage::Storage;

#[test]
fn sqlite_storage_reads_back_what_it_wrote() {
    let mut storage = SqliteStorage::from_pool(DbPool::in_memory().unwrap()).unwrap();

    assert_eq!(storage.read("races").unwrap(), None);

    storage.write("races", "[1]").unwrap();
    storage.write("races", "[2]").unwrap();
    storage.write("other", "x").unwrap();

    assert_eq!(storage.read("races").unwrap().as_deref(), Some("[2]"));
    assert_eq!(storage.read("other").unwrap().as_deref(), Some("x"));
}

#[test]
fn races_survive_reopening_the_database() {
    let db_path = setup_test_db("sqlite_reopen");

    let created = {
        let storage = SqliteStorage::open(&db_path).unwrap();
        let mut store = RaceStore::load(storage, "races").unwrap();
        store
            .create(RaceDraft::new(
                "Corrida de São Silvestre",
                "Brasil",
                15.0,
                chrono::NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                RaceType::Road,
            ))
            .unwrap()
    };

    let storage = SqliteStorage::open(&db_path).unwrap();
    let store = RaceStore::load(storage, "races").unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(&created.id), Some(&created));
}

#[test]
fn migrations_are_recorded_once() {
    let db_path = setup_test_db("sqlite_migrations");

    let first = SqliteStorage::open(&db_path).unwrap();
    assert_eq!(first.applied_migrations(), ["20250301_0001_create_kv_store"]);
    drop(first);

    let storage = SqliteStorage::open(&db_path).unwrap();
    assert!(storage.applied_migrations().is_empty());

    ttlog(storage.conn(), "add", "1", "Added race").unwrap();

    let entries = load_log(storage.conn()).unwrap();
    let applied = entries
        .iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);
    assert!(entries.iter().any(|e| e.operation == "add" && e.target == "1"));
}
