use sqlx::postgres::{PgPool, PgPoolOptions};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run the full Postgres schema migration inline.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- User-submitted "In the Shadows" examples
CREATE TABLE IF NOT EXISTS examples (
    id           BIGSERIAL PRIMARY KEY,
    name         TEXT NOT NULL,
    situation    TEXT NOT NULL,
    shadow_piece TEXT NOT NULL,
    result       TEXT NOT NULL,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Tactical exercise catalog
CREATE TABLE IF NOT EXISTS tactical_exercises (
    id                   BIGSERIAL PRIMARY KEY,
    title                TEXT NOT NULL,
    description          TEXT NOT NULL,
    initial_position     TEXT NOT NULL,
    best_move            TEXT NOT NULL,
    tactic_type          TEXT NOT NULL,
    difficulty           TEXT NOT NULL,
    points               INTEGER NOT NULL DEFAULT 10,
    hint                 TEXT,
    solution_explanation TEXT NOT NULL,
    moves_required       INTEGER NOT NULL DEFAULT 1,
    created_at           TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_tactical_exercises_difficulty
    ON tactical_exercises (difficulty);
CREATE INDEX IF NOT EXISTS idx_tactical_exercises_tactic_type
    ON tactical_exercises (tactic_type);
"#;
