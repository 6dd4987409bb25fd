//! F.A.Q. domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::Entity;
use crate::DomainError;

/// Section of the F.A.Q. a question belongs to.
///
/// Stored as the literal Russian section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "Общие вопросы")]
    GeneralQuestions,
    #[serde(rename = "Проблемы с продуктами")]
    ProblemsWithProducts,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [
        QuestionType::GeneralQuestions,
        QuestionType::ProblemsWithProducts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::GeneralQuestions => "Общие вопросы",
            QuestionType::ProblemsWithProducts => "Проблемы с продуктами",
        }
    }
}

impl FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Общие вопросы" => Ok(QuestionType::GeneralQuestions),
            "Проблемы с продуктами" => Ok(QuestionType::ProblemsWithProducts),
            _ => Err(DomainError::UnknownQuestionType(s.to_string())),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question with its answer. The question text is unique across all sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub id: i32,
    pub question_type: QuestionType,
    pub question: String,
    pub answer: String,
}

impl Entity for Info {
    const TABLE: &'static str = "info";

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInfo {
    pub question_type: QuestionType,

    pub question: String,

    pub answer: String,
}
