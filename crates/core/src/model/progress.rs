use std::collections::BTreeMap;

use crate::model::ids::LessonId;

/// A learner's completion record for one course.
///
/// `overall_percent` is computed by the server. The client shows it as-is and
/// never derives it from the completion map, so the two can never disagree
/// about what "complete" means.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Progress {
    lessons_completed: BTreeMap<LessonId, bool>,
    overall_percent: f64,
}

impl Progress {
    #[must_use]
    pub fn new(lessons_completed: BTreeMap<LessonId, bool>, overall_percent: f64) -> Self {
        Self {
            lessons_completed,
            overall_percent,
        }
    }

    /// Empty record for a learner who has not started the course.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lessons_completed(&self) -> &BTreeMap<LessonId, bool> {
        &self.lessons_completed
    }

    /// Unset keys read as not completed.
    #[must_use]
    pub fn is_lesson_complete(&self, lesson_id: &LessonId) -> bool {
        self.lessons_completed.get(lesson_id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.lessons_completed.values().filter(|done| **done).count()
    }

    #[must_use]
    pub fn overall_percent(&self) -> f64 {
        self.overall_percent
    }

    /// Overall percentage rounded for labels, clamped to `0..=100`.
    #[must_use]
    pub fn display_percent(&self) -> u8 {
        if !self.overall_percent.is_finite() {
            return 0;
        }
        // Clamped first, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.overall_percent.clamp(0.0, 100.0).round() as u8;
        rounded
    }
}

/// Completion lookup that tolerates a missing progress record.
#[must_use]
pub fn is_lesson_complete(progress: Option<&Progress>, lesson_id: &LessonId) -> bool {
    progress.is_some_and(|p| p.is_lesson_complete(lesson_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(entries: &[(&str, bool)], overall: f64) -> Progress {
        Progress::new(
            entries
                .iter()
                .map(|(id, done)| (LessonId::new(*id), *done))
                .collect(),
            overall,
        )
    }

    #[test]
    fn unknown_lesson_reads_false() {
        let p = progress(&[("l1", true)], 50.0);
        assert!(p.is_lesson_complete(&LessonId::new("l1")));
        assert!(!p.is_lesson_complete(&LessonId::new("missing")));
    }

    #[test]
    fn absent_progress_reads_false() {
        assert!(!is_lesson_complete(None, &LessonId::new("l1")));
    }

    #[test]
    fn explicit_false_reads_false() {
        let p = progress(&[("l1", false)], 0.0);
        assert!(!is_lesson_complete(Some(&p), &LessonId::new("l1")));
        assert_eq!(p.completed_count(), 0);
    }

    #[test]
    fn display_percent_rounds_and_clamps() {
        assert_eq!(progress(&[], 33.4).display_percent(), 33);
        assert_eq!(progress(&[], 66.5).display_percent(), 67);
        assert_eq!(progress(&[], 140.0).display_percent(), 100);
        assert_eq!(progress(&[], -3.0).display_percent(), 0);
        assert_eq!(progress(&[], f64::NAN).display_percent(), 0);
    }

    #[test]
    fn overall_percent_is_not_recomputed() {
        // Server says 10% even though the map holds one of one.
        let p = progress(&[("l1", true)], 10.0);
        assert_eq!(p.display_percent(), 10);
    }
}
