use std::collections::BTreeMap;

use mindscope_core::models::answer::Answer;
use mindscope_core::models::question::CatalogEntry;

use crate::catalog::Catalog;
use crate::error::LedgerError;

/// Answers of one session, keyed by catalog position.
///
/// Unanswered questions only ever trail the answered ones: a position can
/// be written once every question before it has an answer, and writing an
/// already answered position replaces the old answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseLedger {
    answers: BTreeMap<usize, Answer>,
}

impl ResponseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an answer, returning the one it replaced.
    pub fn record_answer(
        &mut self,
        catalog: &Catalog,
        position: usize,
        question_id: &str,
        value: u8,
    ) -> Result<Option<Answer>, LedgerError> {
        let entry = catalog
            .entry(position)
            .ok_or(LedgerError::PositionOutOfRange {
                position,
                len: catalog.len(),
            })?;
        let CatalogEntry::Question(question) = entry else {
            return Err(LedgerError::NotAQuestion { position });
        };
        if question.id != question_id {
            return Err(LedgerError::QuestionMismatch {
                position,
                expected: question.id.clone(),
                actual: question_id.to_string(),
            });
        }
        if !question.scale.contains(value) {
            return Err(LedgerError::InvalidResponseValue {
                question_id: question.id.clone(),
                value,
                min: question.scale.min,
                max: question.scale.max,
            });
        }
        if let Some(next_open) = self.next_open_position(catalog)
            && position > next_open
        {
            return Err(LedgerError::OutOfOrder {
                position,
                next_open,
            });
        }

        Ok(self.answers.insert(
            position,
            Answer {
                question_id: question.id.clone(),
                value,
                position,
            },
        ))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.next_open_position(catalog).is_none()
    }

    /// First question position without an answer.
    pub fn next_open_position(&self, catalog: &Catalog) -> Option<usize> {
        catalog
            .questions()
            .map(|q| q.ordinal_position)
            .find(|pos| !self.answers.contains_key(pos))
    }

    pub fn answer_at(&self, position: usize) -> Option<&Answer> {
        self.answers.get(&position)
    }

    /// Answers in catalog order.
    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// Position the "back" action lands on from `position`.
///
/// Moves one entry back; if that entry is a section marker, keeps going to
/// the last real question before it. `None` at the start of the catalog.
pub fn previous_position(catalog: &Catalog, position: usize) -> Option<usize> {
    (0..position.min(catalog.len()))
        .rev()
        .find(|&pos| catalog.question(pos).is_some())
}

/// Position the "next" action lands on from `position`, skipping markers.
pub fn next_position(catalog: &Catalog, position: usize) -> Option<usize> {
    (position.saturating_add(1)..catalog.len()).find(|&pos| catalog.question(pos).is_some())
}
