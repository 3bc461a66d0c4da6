// models.rs
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const QUESTION_TEXT_MAX: usize = 200;
pub const CHOICE_TEXT_MAX: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Published within the day leading up to `now` (inclusive at the boundary).
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date >= now - Duration::days(1)
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question_text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.choice_text)
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl NewQuestion {
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Result<Self> {
        let question_text = question_text.into();
        check_length("question_text", &question_text, QUESTION_TEXT_MAX)?;
        Ok(Self {
            question_text,
            pub_date,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewChoice {
    pub question_id: i64,
    pub choice_text: String,
}

impl NewChoice {
    pub fn new(question_id: i64, choice_text: impl Into<String>) -> Result<Self> {
        let choice_text = choice_text.into();
        check_length("choice_text", &choice_text, CHOICE_TEXT_MAX)?;
        Ok(Self {
            question_id,
            choice_text,
        })
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::Validation { field, max });
    }
    Ok(())
}

/// Body of the vote form. Anything that isn't a numeric `choice` counts as no selection.
#[derive(Debug, Default, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl VoteForm {
    pub fn choice_id(&self) -> Option<i64> {
        self.choice.as_deref()?.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn question_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "What's new?".to_string(),
            pub_date,
        }
    }

    #[rstest]
    #[case::future(Duration::days(30), true)]
    #[case::just_now(Duration::zero(), true)]
    #[case::almost_a_day(-(Duration::hours(23) + Duration::minutes(59) + Duration::seconds(59)), true)]
    #[case::exactly_a_day(-Duration::days(1), true)]
    #[case::just_over_a_day(-(Duration::days(1) + Duration::seconds(1)), false)]
    #[case::a_month_ago(-Duration::days(30), false)]
    fn published_recently(#[case] offset: Duration, #[case] expected: bool) {
        let now = Utc::now();
        assert_eq!(question_at(now + offset).was_published_recently_at(now), expected);
    }

    #[test]
    fn display_uses_text() {
        let question = question_at(Utc::now());
        assert_eq!(question.to_string(), "What's new?");

        let choice = Choice {
            id: 1,
            question_id: 1,
            choice_text: "Not much".to_string(),
            votes: 0,
        };
        assert_eq!(choice.to_string(), "Not much");
    }

    #[test]
    fn labels_are_bounded() {
        assert!(NewQuestion::new("a".repeat(QUESTION_TEXT_MAX), Utc::now()).is_ok());
        assert!(matches!(
            NewQuestion::new("a".repeat(QUESTION_TEXT_MAX + 1), Utc::now()),
            Err(Error::Validation { field: "question_text", .. })
        ));
        assert!(matches!(
            NewChoice::new(1, "b".repeat(CHOICE_TEXT_MAX + 1)),
            Err(Error::Validation { field: "choice_text", .. })
        ));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("abc"), None)]
    #[case(Some("7"), Some(7))]
    #[case(Some(" 12 "), Some(12))]
    fn vote_form_choice(#[case] raw: Option<&str>, #[case] expected: Option<i64>) {
        let form = VoteForm {
            choice: raw.map(str::to_string),
        };
        assert_eq!(form.choice_id(), expected);
    }
}
