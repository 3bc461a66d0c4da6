// src/poll.rs
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Choice, NewChoice, NewQuestion, Question};

/// Number of questions shown on the index page.
pub const LATEST_LIMIT: i64 = 5;

/// Published questions (`pub_date <= now`), newest first.
pub async fn latest_questions(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<Question>> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question_text, pub_date
        FROM questions
        WHERE pub_date <= ?
        ORDER BY pub_date DESC, id ASC
        LIMIT ?
        "#,
    )
    .bind(now)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>> {
    let question = sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM questions WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(question)
}

pub async fn choices_for(pool: &SqlitePool, question_id: i64) -> Result<Vec<Choice>> {
    let choices = sqlx::query_as::<_, Choice>(
        r#"
        SELECT id, question_id, choice_text, votes
        FROM choices
        WHERE question_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(question_id)
    .fetch_all(pool)
    .await?;

    Ok(choices)
}

/// Add one vote to `choice_id`, provided it belongs to `question_id`.
///
/// The increment happens inside a single UPDATE so concurrent votes can't
/// overwrite each other. Returns `false` when no such choice exists.
pub async fn record_vote(pool: &SqlitePool, question_id: i64, choice_id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE choices
        SET votes = votes + 1
        WHERE id = ? AND question_id = ?
        "#,
    )
    .bind(choice_id)
    .bind(question_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn create_question(pool: &SqlitePool, new: &NewQuestion) -> Result<Question> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (question_text, pub_date)
        VALUES (?, ?)
        RETURNING id, question_text, pub_date
        "#,
    )
    .bind(&new.question_text)
    .bind(new.pub_date)
    .fetch_one(pool)
    .await?;

    tracing::debug!(question_id = question.id, "created question");
    Ok(question)
}

pub async fn create_choice(pool: &SqlitePool, new: &NewChoice) -> Result<Choice> {
    let choice = sqlx::query_as::<_, Choice>(
        r#"
        INSERT INTO choices (question_id, choice_text)
        VALUES (?, ?)
        RETURNING id, question_id, choice_text, votes
        "#,
    )
    .bind(new.question_id)
    .bind(&new.choice_text)
    .fetch_one(pool)
    .await?;

    Ok(choice)
}

/// Delete a question together with its choices. Returns whether it existed.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
