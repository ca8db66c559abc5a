//! Interest quiz - questions, the two scoring strategies, per-session quiz
//! progress and authenticated result submission.

mod quiz_model;
mod quiz_scoring;
mod quiz_service;
mod quiz_session;
mod quiz_traits;

pub use quiz_model::{
    CategoryTally, InterestCategory, NewQuizResult, QuizOutcome, QuizQuestion, QuizSubmission,
    Recommendation, QUIZ_QUESTIONS,
};
pub use quiz_scoring::{ChoiceTallyScorer, KeywordInterest, KeywordTallyScorer};
pub use quiz_service::QuizResultService;
pub use quiz_session::QuizSession;
pub use quiz_traits::{QuizResultRepositoryTrait, QuizResultServiceTrait};
