#[cfg(test)]
mod tests {
    use lextrack::db::migrations::{get_db_version, init_with_migrations, MigrationManager};
    use rusqlite::Connection;

    #[test]
    fn test_fresh_database_migrates_to_latest() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 3);
    }

    #[test]
    fn test_migrations_create_expected_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        for table in ["cases", "time_logs", "attorneys", "migrations"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "expected table {} to exist", table);
        }
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();
        // A second run must be a no-op, not a failure
        init_with_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 3);

        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, 3);
    }

    #[test]
    fn test_attorney_columns_present_after_migration() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        // Version 2 added attorney_id to cases, version 3 added is_active
        conn.execute(
            "INSERT INTO attorneys (name, email) VALUES ('Jane Doe', 'jane@firm.example')",
            [],
        )
        .unwrap();
        let is_active: bool = conn
            .query_row("SELECT is_active FROM attorneys WHERE email = 'jane@firm.example'", [], |row| row.get(0))
            .unwrap();
        assert!(is_active);

        conn.execute(
            "INSERT INTO cases (title, client_name, attorney_id) VALUES ('Matter', 'Client', 1)",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_rollback_rewinds_version_records() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 3);

        manager.rollback_to(&mut conn, 1).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);

        // Rolling back to the current or a later version is a no-op
        manager.rollback_to(&mut conn, 5).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
    }
}
