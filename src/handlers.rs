// handlers.rs
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use serde_json::json;

use crate::error::{Error, Result};
use crate::models::{Question, VoteForm};
use crate::routes::{self, AppState};
use crate::{poll, templates};

const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

/// The latest published questions
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let questions = poll::latest_questions(&state.pool, Utc::now(), poll::LATEST_LIMIT).await?;

    let questions: Vec<_> = questions
        .iter()
        .map(|q| {
            json!({
                "question_text": q.question_text,
                "url": routes::detail_url(q.id),
            })
        })
        .collect();

    state
        .templates
        .render(templates::INDEX, &json!({ "questions": questions }))
}

/// A question and a form to vote on its choices
pub async fn detail(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>> {
    let question = require_question(&state, question_id(path)?).await?;
    render_detail(&state, &question, None).await
}

/// Current tallies for a question
pub async fn results(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>> {
    let question = require_question(&state, question_id(path)?).await?;
    let choices = poll::choices_for(&state.pool, question.id).await?;

    state.templates.render(
        templates::RESULTS,
        &json!({
            "question": question,
            "choices": choices,
            "detail_url": routes::detail_url(question.id),
        }),
    )
}

/// Count a vote, then redirect to the results so a reload can't vote twice
pub async fn vote(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Response> {
    let question_id = question_id(path)?;
    let question = require_question(&state, question_id).await?;

    // An unreadable body is treated the same as a missing choice
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(question_id, %rejection, "unreadable vote form");
        VoteForm::default()
    });

    let recorded = match form.choice_id() {
        Some(choice_id) => poll::record_vote(&state.pool, question.id, choice_id).await?,
        None => false,
    };

    if !recorded {
        tracing::warn!(question_id, choice = ?form.choice, "vote without a valid choice");
        let page = render_detail(&state, &question, Some(NO_CHOICE_MESSAGE)).await?;
        return Ok(page.into_response());
    }

    tracing::info!(question_id, choice = ?form.choice, "vote recorded");
    Ok(Redirect::to(&routes::results_url(question.id)).into_response())
}

/// Ids that aren't integers never name a question.
fn question_id(path: Result<Path<i64>, PathRejection>) -> Result<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| Error::MalformedId(rejection.body_text()))
}

async fn require_question(state: &AppState, question_id: i64) -> Result<Question> {
    tracing::debug!(question_id, "looking up question");
    poll::get_question(&state.pool, question_id)
        .await?
        .ok_or(Error::NotFound(question_id))
}

async fn render_detail(
    state: &AppState,
    question: &Question,
    error_message: Option<&str>,
) -> Result<Html<String>> {
    let choices = poll::choices_for(&state.pool, question.id).await?;

    state.templates.render(
        templates::DETAIL,
        &json!({
            "question": question,
            "choices": choices,
            "vote_url": routes::vote_url(question.id),
            "error_message": error_message,
        }),
    )
}
