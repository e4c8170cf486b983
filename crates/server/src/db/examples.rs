use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct Example {
    pub id: i64,
    pub name: String,
    pub situation: String,
    pub shadow_piece: String,
    pub result: String,
    pub created_at: DateTime<Utc>,
}

type ExampleRow = (i64, String, String, String, String, DateTime<Utc>);

fn from_row(row: ExampleRow) -> Example {
    let (id, name, situation, shadow_piece, result, created_at) = row;
    Example {
        id,
        name,
        situation,
        shadow_piece,
        result,
        created_at,
    }
}

pub async fn list_examples(pool: &PgPool) -> Result<Vec<Example>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ExampleRow>(
        r#"
        SELECT id, name, situation, shadow_piece, result, created_at
        FROM examples
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(from_row).collect())
}

pub async fn create_example(
    pool: &PgPool,
    name: &str,
    situation: &str,
    shadow_piece: &str,
    result: &str,
) -> Result<Example, sqlx::Error> {
    let row = sqlx::query_as::<_, ExampleRow>(
        r#"
        INSERT INTO examples (name, situation, shadow_piece, result)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, situation, shadow_piece, result, created_at
        "#,
    )
    .bind(name)
    .bind(situation)
    .bind(shadow_piece)
    .bind(result)
    .fetch_one(pool)
    .await?;

    Ok(from_row(row))
}

/// Delete by id. Returns the number of rows removed (0 when the id is unknown).
pub async fn delete_example(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM examples WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
