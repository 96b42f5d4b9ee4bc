//! Timetabling domain models.
//!
//! Input side: [`Problem`] with its [`SubjectInfo`], [`TeacherInfo`] and
//! [`RoomInfo`] entries over a universe of [`TimeSlot`]s. Output side:
//! [`Assignment`]s, wrapped with audit metrics in a [`Schedule`].
//!
//! | u-timetable | School office |
//! |-------------|---------------|
//! | SubjectInfo | Course with weekly contact hours |
//! | TeacherInfo | Lecturer and their availability form |
//! | RoomInfo | Classroom or lab |
//! | Assignment | One timetable cell |
//! | Schedule | Versioned semester timetable |

mod problem;
mod schedule;
mod slot;

pub use problem::{Problem, RoomInfo, SubjectInfo, TeacherInfo};
pub use schedule::{Assignment, AssignmentEdit, Schedule, Violation, ViolationType};
pub use slot::{
    AvailabilityGrid, AvailabilityRow, TimeSlot, DAYS_PER_WEEK, PERIODS_PER_DAY, SLOT_COUNT,
};
