/// Wire value for a question without a selection.
pub const UNANSWERED: i64 = -1;

/// One selection slot per question of the loaded quiz.
///
/// `None` marks a question the learner has not answered yet. The slot count
/// is fixed when the quiz is loaded and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    slots: Vec<Option<usize>>,
}

impl AnswerSet {
    pub(crate) fn unanswered(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub(crate) fn with_selection(&self, question: usize, option: usize) -> Self {
        let mut slots = self.slots.clone();
        slots[question] = Some(option);
        Self { slots }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.slots.get(question).copied().flatten()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.len() - self.answered_count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Selections as sent in an attempt payload, with `UNANSWERED` for gaps.
    #[must_use]
    pub fn to_wire(&self) -> Vec<i64> {
        self.slots
            .iter()
            .map(|slot| slot.and_then(|i| i64::try_from(i).ok()).unwrap_or(UNANSWERED))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_uses_sentinel_for_gaps() {
        let answers = AnswerSet::unanswered(3).with_selection(1, 2);
        assert_eq!(answers.to_wire(), vec![-1, 2, -1]);
        assert_eq!(answers.answered_count(), 1);
        assert_eq!(answers.unanswered_count(), 2);
    }

    #[test]
    fn selection_out_of_bounds_reads_none() {
        let answers = AnswerSet::unanswered(1);
        assert_eq!(answers.selection(5), None);
    }
}
