use std::sync::Arc;

use mindscope_core::models::answer::Answer;
use mindscope_core::models::interpretation::InterpretationRecord;
use mindscope_core::models::respondent::Respondent;
use mindscope_core::models::scores::ScoreRecord;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{InstrumentError, LedgerError};
use crate::interpretation::interpret;
use crate::ledger::{self, ResponseLedger};
use crate::scoring::{max_scores, score};

/// How far a session has got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
    pub next_open_position: Option<usize>,
}

/// One respondent working through a catalog.
///
/// The ledger is the only input that changes; scores are cached and
/// rebuilt with [`Session::recompute`].
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub respondent: Respondent,
    pub started_at: jiff::Timestamp,
    catalog: Arc<Catalog>,
    ledger: ResponseLedger,
    scores: ScoreRecord,
}

/// A session whose every question is answered, with final scores and
/// their interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSession {
    pub session_id: Uuid,
    pub respondent: Respondent,
    pub scores: ScoreRecord,
    /// Per-category maxima of the catalog the session was taken against.
    pub max_scores: ScoreRecord,
    pub interpretation: InterpretationRecord,
}

impl Session {
    pub fn new(respondent: Respondent, catalog: Arc<Catalog>) -> Self {
        Self {
            id: Uuid::new_v4(),
            respondent,
            started_at: jiff::Timestamp::now(),
            catalog,
            ledger: ResponseLedger::new(),
            scores: ScoreRecord::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ResponseLedger {
        &self.ledger
    }

    /// Validate and store an answer. Scores are not touched until the next
    /// [`Session::recompute`].
    pub fn record_answer(
        &mut self,
        position: usize,
        question_id: &str,
        value: u8,
    ) -> Result<Option<Answer>, LedgerError> {
        let replaced = self
            .ledger
            .record_answer(&self.catalog, position, question_id, value)?;
        tracing::debug!(
            session_id = %self.id,
            position,
            question_id,
            value,
            replaced = replaced.is_some(),
            "answer recorded"
        );
        Ok(replaced)
    }

    /// Rebuild the cached scores from the ledger.
    pub fn recompute(&mut self) -> &ScoreRecord {
        self.scores = score(&self.ledger, &self.catalog);
        &self.scores
    }

    /// Scores as of the last recompute.
    pub fn scores(&self) -> &ScoreRecord {
        &self.scores
    }

    pub fn progress(&self) -> Progress {
        let next_open_position = self.ledger.next_open_position(&self.catalog);
        Progress {
            answered: self.ledger.answered_count(),
            total: self.catalog.question_count(),
            complete: next_open_position.is_none(),
            next_open_position,
        }
    }

    /// Clear all answers and scores, keeping the respondent.
    pub fn restart(&mut self) {
        self.ledger.clear();
        self.scores = ScoreRecord::default();
        tracing::info!(session_id = %self.id, "session restarted");
    }

    pub fn previous_position(&self, position: usize) -> Option<usize> {
        ledger::previous_position(&self.catalog, position)
    }

    pub fn next_position(&self, position: usize) -> Option<usize> {
        ledger::next_position(&self.catalog, position)
    }

    /// Finalise a fully answered session. Scores are recomputed rather than
    /// taken from the cache so a stale cache can never leak into a report.
    pub fn complete(&mut self) -> Result<CompletedSession, InstrumentError> {
        let progress = self.progress();
        if !progress.complete {
            return Err(InstrumentError::IncompleteSession {
                answered: progress.answered,
                required: progress.total,
            });
        }
        let scores = *self.recompute();
        tracing::info!(session_id = %self.id, "session completed");
        Ok(CompletedSession {
            session_id: self.id,
            respondent: self.respondent.clone(),
            scores,
            max_scores: max_scores(&self.catalog),
            interpretation: interpret(&scores),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn session() -> Session {
        Session::new(
            Respondent {
                name: "Ada".to_string(),
                email: None,
                organisation: None,
            },
            Arc::new(catalog().clone()),
        )
    }

    #[test]
    fn scores_only_change_on_recompute() {
        let mut session = session();
        let first = session.catalog().questions().next().unwrap().clone();
        session.record_answer(first.ordinal_position, &first.id, 5).unwrap();
        assert_eq!(*session.scores(), ScoreRecord::default());
        session.recompute();
        assert_ne!(*session.scores(), ScoreRecord::default());
    }

    #[test]
    fn complete_requires_every_answer() {
        let mut session = session();
        let err = session.complete().unwrap_err();
        assert!(matches!(
            err,
            InstrumentError::IncompleteSession {
                answered: 0,
                required: 58
            }
        ));
    }

    #[test]
    fn restart_clears_answers_and_scores() {
        let mut session = session();
        let first = session.catalog().questions().next().unwrap().clone();
        session.record_answer(first.ordinal_position, &first.id, 4).unwrap();
        session.recompute();
        session.restart();
        assert_eq!(session.progress().answered, 0);
        assert_eq!(*session.scores(), ScoreRecord::default());
        assert_eq!(session.respondent.name, "Ada");
    }

    #[test]
    fn completing_uses_fresh_scores() {
        let mut session = session();
        let questions: Vec<_> = session.catalog().questions().cloned().collect();
        for q in &questions {
            session.record_answer(q.ordinal_position, &q.id, q.scale.max).unwrap();
        }
        // Cache never refreshed before completing.
        assert_eq!(*session.scores(), ScoreRecord::default());
        let done = session.complete().unwrap();
        assert_eq!(done.scores.resilience, 100);
        assert_eq!(done.scores.stress, 24);
        assert_eq!(*session.scores(), done.scores);
    }
}
