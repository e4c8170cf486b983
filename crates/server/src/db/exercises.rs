use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct Exercise {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub initial_position: String,
    pub best_move: String,
    pub tactic_type: String,
    pub difficulty: String,
    pub points: i32,
    pub hint: Option<String>,
    pub solution_explanation: String,
    pub moves_required: i32,
    pub created_at: DateTime<Utc>,
}

/// A catalog entry to insert; the seed catalogs produce these.
pub struct NewExercise<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub initial_position: &'a str,
    pub best_move: &'a str,
    pub tactic_type: &'a str,
    pub difficulty: &'a str,
    pub points: i32,
    pub hint: Option<&'a str>,
    pub solution_explanation: &'a str,
    pub moves_required: i32,
}

type ExerciseRow = (
    i64,
    String,
    String,
    String,
    String,
    String,
    String,
    i32,
    Option<String>,
    String,
    i32,
    DateTime<Utc>,
);

const EXERCISE_COLUMNS: &str = r#"
    id, title, description, initial_position, best_move, tactic_type,
    difficulty, points, hint, solution_explanation, moves_required, created_at
"#;

fn from_row(row: ExerciseRow) -> Exercise {
    let (
        id,
        title,
        description,
        initial_position,
        best_move,
        tactic_type,
        difficulty,
        points,
        hint,
        solution_explanation,
        moves_required,
        created_at,
    ) = row;
    Exercise {
        id,
        title,
        description,
        initial_position,
        best_move,
        tactic_type,
        difficulty,
        points,
        hint,
        solution_explanation,
        moves_required,
        created_at,
    }
}

pub async fn get_exercise_by_id(
    pool: &PgPool,
    id: i64,
) -> Result<Option<Exercise>, sqlx::Error> {
    let row = sqlx::query_as::<_, ExerciseRow>(&format!(
        "SELECT {EXERCISE_COLUMNS} FROM tactical_exercises WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(from_row))
}

/// Exercises of one difficulty tier, highest-scoring first.
pub async fn list_by_difficulty(
    pool: &PgPool,
    difficulty: &str,
) -> Result<Vec<Exercise>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ExerciseRow>(&format!(
        r#"
        SELECT {EXERCISE_COLUMNS}
        FROM tactical_exercises
        WHERE difficulty = $1
        ORDER BY points DESC
        "#
    ))
    .bind(difficulty)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(from_row).collect())
}

/// Everything outside one difficulty tier, grouped by difficulty then age.
pub async fn list_excluding_difficulty(
    pool: &PgPool,
    difficulty: &str,
) -> Result<Vec<Exercise>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ExerciseRow>(&format!(
        r#"
        SELECT {EXERCISE_COLUMNS}
        FROM tactical_exercises
        WHERE difficulty <> $1
        ORDER BY difficulty, created_at
        "#
    ))
    .bind(difficulty)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(from_row).collect())
}

pub async fn count_exercises(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tactical_exercises")
        .fetch_one(pool)
        .await
}

pub async fn count_by_tactic_types(
    pool: &PgPool,
    tactic_types: &[&str],
) -> Result<i64, sqlx::Error> {
    let types: Vec<String> = tactic_types.iter().map(|t| t.to_string()).collect();
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM tactical_exercises WHERE tactic_type = ANY($1)",
    )
    .bind(&types)
    .fetch_one(pool)
    .await
}

pub async fn insert_exercise(
    pool: &PgPool,
    ex: &NewExercise<'_>,
) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO tactical_exercises
            (title, description, initial_position, best_move, tactic_type,
             difficulty, points, hint, solution_explanation, moves_required)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id
        "#,
    )
    .bind(ex.title)
    .bind(ex.description)
    .bind(ex.initial_position)
    .bind(ex.best_move)
    .bind(ex.tactic_type)
    .bind(ex.difficulty)
    .bind(ex.points)
    .bind(ex.hint)
    .bind(ex.solution_explanation)
    .bind(ex.moves_required)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Best-effort batch insert: each entry commits on its own, and a failing
/// entry is logged and skipped instead of aborting the batch.
/// Returns the number of entries actually inserted.
pub async fn insert_catalog(pool: &PgPool, entries: &[NewExercise<'_>]) -> usize {
    let mut count = 0;
    for ex in entries {
        match insert_exercise(pool, ex).await {
            Ok(_) => count += 1,
            Err(e) => {
                tracing::warn!("Failed to insert exercise '{}': {e}", ex.title);
            }
        }
    }
    count
}

pub async fn delete_all_exercises(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tactical_exercises")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_by_difficulty(
    pool: &PgPool,
    difficulty: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tactical_exercises WHERE difficulty = $1")
        .bind(difficulty)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
