use std::fmt;

/// Exact score of an attempt as `correct / total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    correct: usize,
    total: usize,
}

impl Score {
    #[must_use]
    pub fn correct(self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    /// Percentage in `0.0..=100.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.correct as f64 / self.total as f64
    }

    /// Percentage rounded to the nearest integer, for display only.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percent(self) -> u8 {
        self.percent().round() as u8
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded_percent())
    }
}

/// Graded attempt. Produced once per submission and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    correct: Vec<bool>,
    score: Score,
}

impl QuizResult {
    pub(crate) fn from_flags(correct: Vec<bool>) -> Self {
        let score = Score {
            correct: correct.iter().filter(|ok| **ok).count(),
            total: correct.len(),
        };
        Self { correct, score }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Per-question correctness, in question order.
    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.correct
    }

    #[must_use]
    pub fn is_correct(&self, question: usize) -> bool {
        self.correct.get(question).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirds_stay_exact_until_display() {
        let result = QuizResult::from_flags(vec![true, false, false]);
        let score = result.score();
        assert_eq!((score.correct(), score.total()), (1, 3));
        assert!((score.percent() - 100.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(score.rounded_percent(), 33);
        assert_eq!(score.to_string(), "33%");
    }

    #[test]
    fn two_thirds_round_up() {
        let result = QuizResult::from_flags(vec![true, true, false]);
        assert_eq!(result.score().rounded_percent(), 67);
    }
}
