use serde::Serialize;

use super::quiz_model::{QuizOutcome, QuizQuestion, QUIZ_QUESTIONS};
use super::quiz_scoring::ChoiceTallyScorer;
use crate::constants::QUIZ_QUESTION_COUNT;
use crate::errors::{Result, ValidationError};

/// Progress through the interest quiz for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    answers: Vec<String>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the question being shown.
    pub fn current_index(&self) -> usize {
        self.answers.len().min(QUIZ_QUESTION_COUNT - 1)
    }

    /// The question awaiting an answer, `None` once the quiz is complete.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        QUIZ_QUESTIONS.get(self.answers.len())
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= QUIZ_QUESTION_COUNT
    }

    /// Progress bar value: the shown question's position over the question
    /// count, as a percentage.
    pub fn progress_percent(&self) -> u8 {
        (((self.current_index() + 1) as f64 / QUIZ_QUESTION_COUNT as f64) * 100.0).round() as u8
    }

    /// Records the answer to the current question.
    pub fn answer(&mut self, answer: impl Into<String>) -> Result<()> {
        if self.is_complete() {
            return Err(ValidationError::InvalidInput(
                "the quiz has already been completed".to_string(),
            )
            .into());
        }
        self.answers.push(answer.into());
        Ok(())
    }

    /// Scores the quiz once every question has been answered.
    pub fn outcome(&self) -> Option<QuizOutcome> {
        if !self.is_complete() {
            return None;
        }
        ChoiceTallyScorer.score(&self.answers).ok()
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::InterestCategory;

    #[test]
    fn test_session_walks_through_all_questions() {
        let mut session = QuizSession::new();
        assert_eq!(session.progress_percent(), 20);
        assert!(session.outcome().is_none());

        for question in QUIZ_QUESTIONS.iter() {
            assert_eq!(session.current_question(), Some(question));
            session.answer(question.options[2]).unwrap();
        }

        assert!(session.is_complete());
        assert!(session.current_question().is_none());
        assert_eq!(session.progress_percent(), 100);
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.dominant, InterestCategory::Social);
    }

    #[test]
    fn test_answer_after_completion_is_rejected() {
        let mut session = QuizSession::new();
        for question in QUIZ_QUESTIONS.iter() {
            session.answer(question.options[0]).unwrap();
        }
        assert!(session.answer("extra").is_err());
        assert_eq!(session.answers().len(), 5);
    }

    #[test]
    fn test_reset_starts_over() {
        let mut session = QuizSession::new();
        session.answer(QUIZ_QUESTIONS[0].options[1]).unwrap();
        session.reset();
        assert_eq!(session, QuizSession::new());
        assert_eq!(session.current_index(), 0);
    }
}
