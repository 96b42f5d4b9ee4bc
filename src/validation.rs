//! Input validation for timetable problems.
//!
//! Checks structural integrity of a [`Problem`] before scheduling.
//! Detects:
//! - Duplicate subject, teacher and room IDs
//! - Pre-assignments naming an unknown subject or teacher
//! - Slots outside the 6 x 10 week
//! - Slots listed twice in the universe
//!
//! Validation is advisory. The engine accepts any problem; these checks
//! point out inputs whose results would be surprising (silently ignored
//! pre-assignments, duplicated slots skewing the move distribution).

use std::collections::{BTreeSet, HashSet};

use crate::models::Problem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A pre-assignment names a subject that doesn't exist.
    InvalidSubjectReference,
    /// A pre-assignment names a teacher that doesn't exist.
    InvalidTeacherReference,
    /// A slot's day or period is out of range.
    SlotOutOfRange,
    /// The slot universe lists the same slot more than once.
    DuplicateSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a timetable problem.
///
/// Checks:
/// 1. No duplicate subject IDs
/// 2. No duplicate teacher IDs
/// 3. No duplicate room IDs
/// 4. Every pre-assignment names an existing subject and teacher
/// 5. Every slot in the universe is within range
/// 6. No slot appears twice in the universe
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    let subject_ids = collect_unique(
        problem.subjects.iter().map(|s| s.id.as_str()),
        "subject",
        &mut errors,
    );
    let teacher_ids = collect_unique(
        problem.teachers.iter().map(|t| t.id.as_str()),
        "teacher",
        &mut errors,
    );
    collect_unique(
        problem.rooms.iter().map(|r| r.id.as_str()),
        "room",
        &mut errors,
    );

    // sorted so the report is stable
    let pre_assignments: BTreeSet<(&str, &str)> = problem
        .teacher_assignments
        .iter()
        .map(|(s, t)| (s.as_str(), t.as_str()))
        .collect();
    for (subject, teacher) in pre_assignments {
        if !subject_ids.contains(subject) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSubjectReference,
                format!("Pre-assignment references unknown subject '{subject}'"),
            ));
        }
        if !teacher_ids.contains(teacher) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTeacherReference,
                format!("Subject '{subject}' is pre-assigned to unknown teacher '{teacher}'"),
            ));
        }
    }

    let mut seen_slots = HashSet::new();
    for slot in &problem.slots {
        if !slot.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotOutOfRange,
                format!("Slot (day {}, period {}) is out of range", slot.day, slot.period),
            ));
        } else if !seen_slots.insert(*slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("Slot {slot} appears more than once"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomInfo, SubjectInfo, TeacherInfo, TimeSlot};

    fn valid() -> Problem {
        Problem::new()
            .with_subject(SubjectInfo::new("S1", 3))
            .with_subject(SubjectInfo::new("S2", 2))
            .with_teacher(TeacherInfo::new("T1"))
            .with_room(RoomInfo::new("R1"))
            .with_teacher_assignment("S1", "T1")
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&valid()).is_ok());
        assert!(validate_problem(&Problem::new()).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let p = valid()
            .with_subject(SubjectInfo::new("S1", 1))
            .with_teacher(TeacherInfo::new("T1"))
            .with_room(RoomInfo::new("R1"));
        let errs = validate_problem(&p).unwrap_err();
        assert_eq!(errs.len(), 3);
        assert!(errs.iter().all(|e| e.kind == ValidationErrorKind::DuplicateId));
        assert!(errs[0].message.contains("subject"));
        assert!(errs[2].message.contains("room"));
    }

    #[test]
    fn test_same_id_across_kinds_is_fine() {
        let p = Problem::new()
            .with_subject(SubjectInfo::new("X", 1))
            .with_teacher(TeacherInfo::new("X"))
            .with_room(RoomInfo::new("X"));
        assert!(validate_problem(&p).is_ok());
    }

    #[test]
    fn test_unknown_pre_assignment_refs() {
        let p = valid()
            .with_teacher_assignment("S2", "ghost")
            .with_teacher_assignment("S9", "T1");
        assert_eq!(
            kinds(validate_problem(&p)),
            vec![
                ValidationErrorKind::InvalidTeacherReference,
                ValidationErrorKind::InvalidSubjectReference,
            ]
        );
    }

    #[test]
    fn test_bad_slots() {
        let p = valid().with_slots(vec![
            TimeSlot::new(0, 1),
            TimeSlot::new(6, 1),
            TimeSlot::new(0, 0),
            TimeSlot::new(0, 1),
        ]);
        assert_eq!(
            kinds(validate_problem(&p)),
            vec![
                ValidationErrorKind::SlotOutOfRange,
                ValidationErrorKind::SlotOutOfRange,
                ValidationErrorKind::DuplicateSlot,
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let p = valid().with_teacher_assignment("S2", "ghost");
        let errs = validate_problem(&p).unwrap_err();
        assert_eq!(
            errs[0].to_string(),
            "Subject 'S2' is pre-assigned to unknown teacher 'ghost'"
        );
    }
}
