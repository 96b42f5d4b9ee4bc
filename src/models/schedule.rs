//! Timetable output model.
//!
//! The engine emits bare [`Assignment`]s: subject, teacher, room and slot.
//! Identifiers, semester and version are left empty; the caller fills them
//! through [`Schedule::stamp`] before handing the result to storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Problem, TimeSlot, DAYS_PER_WEEK, PERIODS_PER_DAY};
use crate::conflicts::detect_violations;
use crate::constraints::Constraints;
use crate::cost::CostBreakdown;

/// Namespace for deterministic assignment ids (UUID v5).
const ASSIGNMENT_NAMESPACE: Uuid = Uuid::from_bytes([
    0x3f, 0x1c, 0x6e, 0x52, 0x9a, 0x04, 0x4b, 0x7d, 0xb1, 0x8e, 0x25, 0xc0, 0x7a, 0x13, 0xd9, 0x66,
]);

/// One scheduled class: subject, teacher and room at a day/period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Stable identifier, `None` until stamped.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Owning semester, `None` until stamped.
    #[serde(default)]
    pub semester_id: Option<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub room_id: String,
    /// Day of week, 0 = Monday.
    pub day: u8,
    /// Period, 1-based.
    pub period: u8,
    /// Schedule generation version, 0 until stamped.
    #[serde(default)]
    pub version: u32,
}

/// Partial update of an existing assignment.
///
/// Day and period are only applied when inside the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEdit {
    #[serde(default)]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub day: Option<u8>,
    #[serde(default)]
    pub period: Option<u8>,
}

impl Assignment {
    /// Creates an unstamped assignment.
    pub fn new(
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        room_id: impl Into<String>,
        slot: TimeSlot,
    ) -> Self {
        Self {
            id: None,
            semester_id: None,
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            room_id: room_id.into(),
            day: slot.day,
            period: slot.period,
            version: 0,
        }
    }

    #[inline]
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.period)
    }

    /// Moves the assignment to `slot`.
    #[inline]
    pub fn set_slot(&mut self, slot: TimeSlot) {
        self.day = slot.day;
        self.period = slot.period;
    }

    /// Applies a manual edit. Out-of-range day or period values are ignored.
    pub fn apply_edit(&mut self, edit: &AssignmentEdit) {
        if let Some(teacher_id) = &edit.teacher_id {
            self.teacher_id = teacher_id.clone();
        }
        if let Some(room_id) = &edit.room_id {
            self.room_id = room_id.clone();
        }
        if let Some(day) = edit.day.filter(|d| *d < DAYS_PER_WEEK) {
            self.day = day;
        }
        if let Some(period) = edit.period.filter(|p| (1..=PERIODS_PER_DAY).contains(p)) {
            self.period = period;
        }
    }
}

/// A concrete hard-constraint breach found in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub violation_type: ViolationType,
    /// Teacher or room id.
    pub entity_id: String,
    pub slot: TimeSlot,
    /// Indices into the evaluated assignment list.
    pub assignment_indices: Vec<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of [`Violation`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// Teacher booked more than once in a slot.
    TeacherConflict,
    /// Room booked more than once in a slot.
    RoomConflict,
    /// Teacher placed outside their availability.
    TeacherUnavailable,
    /// Room placed outside its availability.
    RoomUnavailable,
}

/// A generated timetable with its audit metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Semester the schedule belongs to, once stamped.
    pub semester_id: Option<String>,
    /// Generation version, once stamped.
    pub version: u32,
    pub assignments: Vec<Assignment>,
    /// Sum of hard-constraint violations.
    pub hard_violations: u64,
    /// Sum of soft-constraint penalties.
    pub soft_penalty: u64,
    /// Concrete hard-constraint breaches.
    pub violations: Vec<Violation>,
}

impl Schedule {
    /// Evaluates `assignments` against `problem` and wraps them.
    pub fn evaluate(problem: &Problem, assignments: Vec<Assignment>) -> Self {
        let mut schedule = Self {
            assignments,
            ..Self::default()
        };
        schedule.refresh(problem);
        schedule
    }

    /// Recomputes metrics and violations after the assignments changed.
    pub fn refresh(&mut self, problem: &Problem) {
        let constraints = Constraints::for_problem(problem);
        let breakdown = CostBreakdown::evaluate(&self.assignments, &constraints);
        self.hard_violations = breakdown.hard_violations;
        self.soft_penalty = breakdown.soft_penalty;
        self.violations = detect_violations(problem, &self.assignments);
    }

    /// Version that follows `previous` (1 for the first schedule).
    /// Saturates at `u32::MAX`.
    pub fn next_version(previous: Option<u32>) -> u32 {
        previous.map_or(1, |v| v.saturating_add(1))
    }

    /// Stamps semester and version onto every assignment and gives each
    /// unstamped assignment a deterministic id.
    pub fn stamp(&mut self, semester_id: impl Into<String>, version: u32) {
        let semester_id = semester_id.into();
        for (index, a) in self.assignments.iter_mut().enumerate() {
            a.semester_id = Some(semester_id.clone());
            a.version = version;
            if a.id.is_none() {
                let name = format!("{semester_id}:{version}:{index}");
                a.id = Some(Uuid::new_v5(&ASSIGNMENT_NAMESPACE, name.as_bytes()));
            }
        }
        self.semester_id = Some(semester_id);
        self.version = version;
    }

    /// Applies `edit` to the assignment with `id` and re-evaluates.
    /// Returns the edited assignment, or `None` if no assignment has `id`.
    pub fn update_assignment(
        &mut self,
        problem: &Problem,
        id: Uuid,
        edit: &AssignmentEdit,
    ) -> Option<&Assignment> {
        let index = self.assignments.iter().position(|a| a.id == Some(id))?;
        self.assignments[index].apply_edit(edit);
        self.refresh(problem);
        self.assignments.get(index)
    }

    /// Zero hard violations.
    pub fn is_feasible(&self) -> bool {
        self.hard_violations == 0
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn assignments_for_subject(&self, subject_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.subject_id == subject_id)
            .collect()
    }

    pub fn assignments_for_teacher(&self, teacher_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.teacher_id == teacher_id)
            .collect()
    }

    pub fn assignments_for_room(&self, room_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.room_id == room_id)
            .collect()
    }
}
