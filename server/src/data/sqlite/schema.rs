//! SQLite schema definitions
//!
//! `SCHEMA` is the complete current schema applied to fresh databases.
//! Existing databases are brought forward by the versioned migrations.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// Complete schema SQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- Players (AUTOINCREMENT keeps deleted ids from being reused)
-- =============================================================================
CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK(length(name) >= 1 AND length(name) <= 12),
    title TEXT NOT NULL CHECK(length(title) >= 1 AND length(title) <= 30),
    race TEXT NOT NULL CHECK(race IN ('HUMAN', 'DWARF', 'ELF', 'GIANT', 'ORC', 'TROLL', 'HOBBIT')),
    profession TEXT NOT NULL CHECK(profession IN ('WARRIOR', 'ROGUE', 'SORCERER', 'CLERIC', 'PALADIN', 'NAZGUL', 'WARLOCK', 'DRUID')),
    birthday INTEGER NOT NULL,
    banned INTEGER NOT NULL DEFAULT 0 CHECK(banned IN (0, 1)),
    experience INTEGER NOT NULL CHECK(experience >= 0 AND experience <= 10000000),
    level INTEGER NOT NULL CHECK(level >= 0),
    until_next_level INTEGER NOT NULL CHECK(until_next_level >= 0),
    -- Case-folded copies for MATCH, written by the application
    name_lower TEXT NOT NULL,
    title_lower TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_players_birthday ON players(birthday);
CREATE INDEX IF NOT EXISTS idx_players_level ON players(level);
"#;

/// Version 2: case-folded name and title columns
///
/// SQLite `LOWER()` folds ASCII only, so the columns are backfilled from
/// Rust after this DDL runs.
pub const MIGRATION_V2: &str = r#"
ALTER TABLE players ADD COLUMN name_lower TEXT NOT NULL DEFAULT '';
ALTER TABLE players ADD COLUMN title_lower TEXT NOT NULL DEFAULT ''
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn test_schema_version_is_positive() {
        assert!(SCHEMA_VERSION > 0);
    }

    #[test]
    fn test_schema_contains_required_tables() {
        for table in ["schema_version", "schema_migrations", "players"] {
            assert!(
                SCHEMA.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)),
                "Schema missing table: {}",
                table
            );
        }
    }

    #[test]
    fn test_schema_includes_folded_columns() {
        for column in ["name_lower", "title_lower"] {
            assert!(
                SCHEMA.contains(&format!("{} TEXT NOT NULL", column)),
                "Schema missing column: {}",
                column
            );
            assert!(
                MIGRATION_V2.contains(&format!("ADD COLUMN {}", column)),
                "Migration missing column: {}",
                column
            );
        }
    }
}
