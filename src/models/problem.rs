//! Timetabling problem model.
//!
//! A [`Problem`] is the frozen input to the engine: the subjects that need
//! weekly hours, the teachers and rooms that can host them, optional
//! subject -> teacher pre-assignments, and the slot universe every
//! placement must come from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{AvailabilityGrid, TimeSlot};

/// A subject that needs `hours_per_week` slot placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    /// Unique subject identifier.
    pub id: String,
    /// Number of weekly placements required.
    pub hours_per_week: u32,
}

impl SubjectInfo {
    pub fn new(id: impl Into<String>, hours_per_week: u32) -> Self {
        Self {
            id: id.into(),
            hours_per_week,
        }
    }
}

/// A teacher and their weekly availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherInfo {
    /// Unique teacher identifier.
    pub id: String,
    /// Weekly availability. Permissive when empty.
    #[serde(default)]
    pub availability: AvailabilityGrid,
    /// Subject qualifications. Informational; not enforced by any constraint.
    #[serde(default)]
    pub qualifications: Vec<String>,
}

impl TeacherInfo {
    /// Creates a teacher who is available everywhere.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            availability: AvailabilityGrid::permissive(),
            qualifications: Vec::new(),
        }
    }

    /// Sets the availability grid.
    pub fn with_availability(mut self, availability: AvailabilityGrid) -> Self {
        self.availability = availability;
        self
    }

    /// Adds a qualification tag.
    pub fn with_qualification(mut self, qualification: impl Into<String>) -> Self {
        self.qualifications.push(qualification.into());
        self
    }

    #[inline]
    pub fn is_available(&self, slot: TimeSlot) -> bool {
        self.availability.is_available(slot)
    }
}

/// A room, its capacity, and its weekly availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    /// Unique room identifier.
    pub id: String,
    /// Seats. Informational.
    #[serde(default)]
    pub capacity: u32,
    /// Installed equipment. Informational.
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Weekly availability. Permissive when empty.
    #[serde(default)]
    pub availability: AvailabilityGrid,
}

impl RoomInfo {
    /// Creates a room that is available everywhere.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            capacity: 0,
            equipment: Vec::new(),
            availability: AvailabilityGrid::permissive(),
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds an equipment tag.
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment.push(equipment.into());
        self
    }

    /// Sets the availability grid.
    pub fn with_availability(mut self, availability: AvailabilityGrid) -> Self {
        self.availability = availability;
        self
    }

    #[inline]
    pub fn is_available(&self, slot: TimeSlot) -> bool {
        self.availability.is_available(slot)
    }
}

/// Complete scheduling input.
///
/// # Example
/// ```
/// use u_timetable::models::{Problem, RoomInfo, SubjectInfo, TeacherInfo};
///
/// let problem = Problem::new()
///     .with_subject(SubjectInfo::new("math", 4))
///     .with_teacher(TeacherInfo::new("alice"))
///     .with_room(RoomInfo::new("r101").with_capacity(30))
///     .with_teacher_assignment("math", "alice");
///
/// assert_eq!(problem.required_hours(), 4);
/// assert_eq!(problem.slots.len(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Subjects to place.
    pub subjects: Vec<SubjectInfo>,
    /// Teachers in priority order; the first one is the fallback.
    pub teachers: Vec<TeacherInfo>,
    /// Rooms in search order.
    pub rooms: Vec<RoomInfo>,
    /// Pre-assigned teacher per subject (subject_id -> teacher_id).
    #[serde(default)]
    pub teacher_assignments: HashMap<String, String>,
    /// Slot universe, scanned in order by the greedy constructor.
    #[serde(default = "TimeSlot::all")]
    pub slots: Vec<TimeSlot>,
}

impl Default for Problem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem {
    /// Creates an empty problem over the full 60-slot week.
    pub fn new() -> Self {
        Self {
            subjects: Vec::new(),
            teachers: Vec::new(),
            rooms: Vec::new(),
            teacher_assignments: HashMap::new(),
            slots: TimeSlot::all(),
        }
    }

    pub fn with_subject(mut self, subject: SubjectInfo) -> Self {
        self.subjects.push(subject);
        self
    }

    pub fn with_teacher(mut self, teacher: TeacherInfo) -> Self {
        self.teachers.push(teacher);
        self
    }

    pub fn with_room(mut self, room: RoomInfo) -> Self {
        self.rooms.push(room);
        self
    }

    /// Pins `subject_id` to `teacher_id`.
    pub fn with_teacher_assignment(
        mut self,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        self.teacher_assignments
            .insert(subject_id.into(), teacher_id.into());
        self
    }

    /// Replaces the slot universe.
    pub fn with_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.slots = slots;
        self
    }

    pub fn teacher(&self, id: &str) -> Option<&TeacherInfo> {
        self.teachers.iter().find(|t| t.id == id)
    }

    pub fn room(&self, id: &str) -> Option<&RoomInfo> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn subject(&self, id: &str) -> Option<&SubjectInfo> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Total placements requested across all subjects.
    pub fn required_hours(&self) -> u64 {
        self.subjects.iter().map(|s| s.hours_per_week as u64).sum()
    }

    /// Resolves the teacher for a subject: a pre-assignment naming a known
    /// teacher, otherwise the first teacher. `None` when there are no
    /// teachers at all.
    pub fn resolve_teacher(&self, subject_id: &str) -> Option<&TeacherInfo> {
        if let Some(teacher_id) = self.teacher_assignments.get(subject_id) {
            match self.teacher(teacher_id) {
                Some(teacher) => return Some(teacher),
                None => tracing::warn!(
                    subject = subject_id,
                    teacher = teacher_id.as_str(),
                    "pre-assigned teacher not in problem, falling back to first teacher"
                ),
            }
        }
        self.teachers.first()
    }
}
