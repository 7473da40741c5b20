use rusqlite::Connection;
use snipforge_store::migrations::apply_migrations;

#[test]
fn test_fresh_database_gets_full_schema() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let tables: Vec<String> = {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    };

    assert!(tables.contains(&"snippets".to_string()));
    assert!(tables.contains(&"composed_prompts".to_string()));
    assert!(tables.contains(&"generation_sessions".to_string()));
    assert!(tables.contains(&"schema_version".to_string()));
}

#[test]
fn test_reapply_is_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let applied: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(applied, 1);
}

#[test]
fn test_migrations_survive_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    {
        let mut conn = Connection::open(&path).unwrap();
        apply_migrations(&mut conn).unwrap();
    }

    // second open sees the recorded versions and applies nothing new
    let mut conn = Connection::open(&path).unwrap();
    apply_migrations(&mut conn).unwrap();

    let applied: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(applied, 1);
}
