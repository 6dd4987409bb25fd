//! F.A.Q. entity (database row mapping).

use domain::models::QuestionType;
use sqlx::FromRow;

/// Database enum for question_enum. Stored values are the section titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "question_enum")]
pub enum QuestionTypeDb {
    #[sqlx(rename = "Общие вопросы")]
    GeneralQuestions,
    #[sqlx(rename = "Проблемы с продуктами")]
    ProblemsWithProducts,
}

impl From<QuestionTypeDb> for QuestionType {
    fn from(db: QuestionTypeDb) -> Self {
        match db {
            QuestionTypeDb::GeneralQuestions => QuestionType::GeneralQuestions,
            QuestionTypeDb::ProblemsWithProducts => QuestionType::ProblemsWithProducts,
        }
    }
}

impl From<QuestionType> for QuestionTypeDb {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::GeneralQuestions => QuestionTypeDb::GeneralQuestions,
            QuestionType::ProblemsWithProducts => QuestionTypeDb::ProblemsWithProducts,
        }
    }
}

/// Database row mapping for the info table.
#[derive(Debug, Clone, FromRow)]
pub struct InfoEntity {
    pub id: i32,
    pub question_type: QuestionTypeDb,
    pub question: String,
    pub answer: String,
}

impl From<InfoEntity> for domain::models::Info {
    fn from(entity: InfoEntity) -> Self {
        Self {
            id: entity.id,
            question_type: entity.question_type.into(),
            question: entity.question,
            answer: entity.answer,
        }
    }
}
