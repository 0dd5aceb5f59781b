//! Database Module
//!
//! Connection pool bootstrap, schema, and reference-data seeding. The DDL is
//! idempotent (`IF NOT EXISTS` throughout) and runs on every startup; the
//! stroke and event tables are seeded only when the strokes table is empty.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    // Users table
    r#"CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )"#,
    // Swimmers table
    r#"CREATE TABLE IF NOT EXISTS swimmers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT UNIQUE,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )"#,
    // Strokes table
    r#"CREATE TABLE IF NOT EXISTS strokes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )"#,
    // Meets table
    r#"CREATE TABLE IF NOT EXISTS meets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        location TEXT NOT NULL,
        meet_date DATE NOT NULL,
        description TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )"#,
    // Events table (stroke + distance combinations)
    r#"CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        stroke_id INTEGER NOT NULL,
        distance INTEGER NOT NULL,
        name TEXT NOT NULL,
        FOREIGN KEY (stroke_id) REFERENCES strokes(id),
        UNIQUE(stroke_id, distance)
    )"#,
    // Meet events table (which events run in which meets)
    r#"CREATE TABLE IF NOT EXISTS meet_events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meet_id INTEGER NOT NULL,
        event_id INTEGER NOT NULL,
        session TEXT NOT NULL,
        event_num INTEGER NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (meet_id) REFERENCES meets(id),
        FOREIGN KEY (event_id) REFERENCES events(id),
        UNIQUE(meet_id, event_id, session)
    )"#,
    // Swim times table
    r#"CREATE TABLE IF NOT EXISTS swim_times (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        swimmer_id INTEGER NOT NULL,
        event_id INTEGER NOT NULL,
        meet_id INTEGER,
        time_ms INTEGER NOT NULL,
        notes TEXT,
        recorded_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (swimmer_id) REFERENCES swimmers(id),
        FOREIGN KEY (event_id) REFERENCES events(id),
        FOREIGN KEY (meet_id) REFERENCES meets(id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_swim_times_swimmer ON swim_times(swimmer_id)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_swim_times_event ON swim_times(event_id)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_swim_times_meet ON swim_times(meet_id)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_meet_events_meet ON meet_events(meet_id)"#,
];

const STROKES: &[&str] = &[
    "Freestyle",
    "Backstroke",
    "Breaststroke",
    "Butterfly",
    "Individual Medley",
];

/// The standard event list: (stroke, distance in meters).
const EVENTS: &[(&str, i64)] = &[
    ("Freestyle", 50),
    ("Freestyle", 100),
    ("Freestyle", 200),
    ("Freestyle", 400),
    ("Freestyle", 800),
    ("Freestyle", 1500),
    ("Backstroke", 50),
    ("Backstroke", 100),
    ("Backstroke", 200),
    ("Breaststroke", 50),
    ("Breaststroke", 100),
    ("Breaststroke", 200),
    ("Butterfly", 50),
    ("Butterfly", 100),
    ("Butterfly", 200),
    ("Individual Medley", 200),
    ("Individual Medley", 400),
];

/// Open the database, apply the schema, and seed reference data.
///
/// The database file is created if missing.
pub async fn init(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    create_tables(&pool).await?;
    seed_reference_data(&pool).await?;

    Ok(pool)
}

/// Apply the schema.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Seed strokes and the standard event list, once.
pub async fn seed_reference_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM strokes")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for &stroke in STROKES {
        sqlx::query("INSERT INTO strokes (name) VALUES (?)")
            .bind(stroke)
            .execute(pool)
            .await?;
    }

    for &(stroke_name, distance) in EVENTS {
        let (stroke_id,): (i64,) = sqlx::query_as("SELECT id FROM strokes WHERE name = ?")
            .bind(stroke_name)
            .fetch_one(pool)
            .await?;

        let event_name = format!("{distance}m {stroke_name}");
        sqlx::query("INSERT INTO events (stroke_id, distance, name) VALUES (?, ?, ?)")
            .bind(stroke_id)
            .bind(distance)
            .bind(&event_name)
            .execute(pool)
            .await?;
    }

    tracing::info!(
        strokes = STROKES.len(),
        events = EVENTS.len(),
        "seeded reference data"
    );
    Ok(())
}
