mod common;
use common::{init_db, init_db_with_data, rc, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_seeds_default_races() {
    let db_path = setup_test_db("init_seeds");
    init_db(&db_path);

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTMB - Chamonix"))
        .stdout(predicate::str::contains("Evolution Itatiaia National Park"))
        .stdout(predicate::str::contains("2 race(s)"));
}

#[test]
fn test_init_twice_keeps_user_data() {
    let db_path = setup_test_db("init_twice");
    init_db_with_data(&db_path);

    // a second init must not re-seed over existing races
    init_db(&db_path);

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maratona de São Paulo"))
        .stdout(predicate::str::contains("3 race(s)"));
}

#[test]
fn test_list_search_and_type_filter() {
    let db_path = setup_test_db("list_filter");
    init_db_with_data(&db_path);

    rc().args(["--db", &db_path, "list", "--search", "utmb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTMB - Chamonix"))
        .stdout(predicate::str::contains("Evolution").not())
        .stdout(predicate::str::contains("1 race(s)"));

    rc().args(["--db", &db_path, "list", "--type", "trail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maratona").not())
        .stdout(predicate::str::contains("2 race(s)"));

    rc().args(["--db", &db_path, "list", "--type", "road"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maratona de São Paulo"))
        .stdout(predicate::str::contains("1 race(s)"));

    rc().args(["--db", &db_path, "list", "--search", "BRASIL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 race(s)"));
}

#[test]
fn test_list_rejects_unknown_type() {
    let db_path = setup_test_db("list_bad_type");
    init_db(&db_path);

    rc().args(["--db", &db_path, "list", "--type", "track"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type filter"));
}

#[test]
fn test_add_requires_valid_input() {
    let db_path = setup_test_db("add_invalid");
    init_db(&db_path);

    rc().args([
        "--db", &db_path, "add", "--name", "  ", "--location", "Chile", "--distance", "50",
        "--date", "2025-11-01",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("race name is required"));

    rc().args([
        "--db", &db_path, "add", "--name", "Patagonia Run", "--location", "Argentina",
        "--distance", "100", "--date", "2025-13-01",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid date format"));

    rc().args([
        "--db", &db_path, "add", "--name", "Patagonia Run", "--location", "Argentina",
        "--distance", "100", "--date", "2025-04-01", "--type", "track",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid race type"));

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 race(s)"));
}

#[test]
fn test_add_with_link_and_notes() {
    let db_path = setup_test_db("add_link_notes");
    init_db(&db_path);

    rc().args([
        "--db",
        &db_path,
        "add",
        "--name",
        "Paraty Brazil by UTMB",
        "--location",
        "Brasil",
        "--distance",
        "58",
        "--date",
        "2025-05-10",
        "--type",
        "trail",
        "--link",
        "https://paraty.utmb.world",
        "--notes",
        "bring poles",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Added race"));

    rc().args(["--db", &db_path, "list", "--search", "paraty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://paraty.utmb.world"))
        .stdout(predicate::str::contains("bring poles"))
        .stdout(predicate::str::contains("58 km"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let db_path = setup_test_db("edit_fields");
    init_db(&db_path);

    rc().args(["--db", &db_path, "edit", "1", "--distance", "176", "--notes", "finally"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Race #1 updated"));

    rc().args(["--db", &db_path, "list", "--search", "utmb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("176 km"))
        .stdout(predicate::str::contains("finally"))
        .stdout(predicate::str::contains("Suiça"));

    rc().args(["--db", &db_path, "edit", "1", "--clear-notes"])
        .assert()
        .success();

    rc().args(["--db", &db_path, "list", "--search", "utmb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("finally").not());
}

#[test]
fn test_edit_unknown_id_fails() {
    let db_path = setup_test_db("edit_unknown");
    init_db(&db_path);

    rc().args(["--db", &db_path, "edit", "999", "--name", "Ghost Run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Race not found: 999"));
}

#[test]
fn test_del_with_yes_removes_race() {
    let db_path = setup_test_db("del_yes");
    init_db(&db_path);

    rc().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTMB").not())
        .stdout(predicate::str::contains("1 race(s)"));
}

#[test]
fn test_del_declined_keeps_race() {
    let db_path = setup_test_db("del_declined");
    init_db(&db_path);

    rc().args(["--db", &db_path, "del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));

    rc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 race(s)"));
}

#[test]
fn test_del_unknown_id_is_a_noop() {
    let db_path = setup_test_db("del_unknown");
    init_db(&db_path);

    rc().args(["--db", &db_path, "del", "42", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));
}

#[test]
fn test_next_countdown() {
    let db_path = setup_test_db("next_countdown");
    init_db(&db_path);

    rc().args(["--db", &db_path, "next", "--at", "2025-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("31 days until UTMB - Chamonix"));

    rc().args(["--db", &db_path, "next", "--at", "2025-09-01T00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "91 days until Evolution Itatiaia National Park",
        ));

    rc().args(["--db", &db_path, "next", "--at", "2026-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming races"));

    rc().args(["--db", &db_path, "next", "--at", "yesterday"])
        .assert()
        .failure();
}

#[test]
fn test_next_watch_stops_after_ticks() {
    let db_path = setup_test_db("next_watch");
    init_db(&db_path);

    rc().args(["--db", &db_path, "next", "--watch", "--ticks", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("["));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    rc().args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .success();

    rc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("Added race 'Maratona de São Paulo'"))
        .stdout(predicate::str::contains("Deleted race 'Evolution Itatiaia National Park'"))
        .stdout(predicate::str::contains("migration_applied"));
}

#[test]
fn test_migration_notice_only_on_init() {
    let db_path = setup_test_db("migration_notice");

    rc().args(["--db", &db_path, "next", "--at", "2025-08-01"])
        .assert()
        .success()
        .stdout("31 days until UTMB - Chamonix\n");

    let fresh_db = setup_test_db("migration_notice_init");

    rc().args(["--db", &fresh_db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Migration applied: 20250301_0001_create_kv_store",
        ));

    rc().args(["--db", &fresh_db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration applied").not());
}

#[test]
fn test_edit_image() {
    let db_path = setup_test_db("edit_image");
    init_db(&db_path);

    rc().args(["--db", &db_path, "edit", "2", "--image", "https://example.org/itatiaia.jpg"])
        .assert()
        .success();

    rc().args(["--db", &db_path, "edit", "2", "--image", "x", "--clear-image"])
        .assert()
        .failure();
}
