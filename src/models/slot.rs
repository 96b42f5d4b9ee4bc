//! Weekly time slots and availability grids.
//!
//! The teaching week is a fixed 6 x 10 grid: days `0..=5` (Monday to
//! Saturday) and periods `1..=10`. Every slot has a dense index
//! `day * 10 + (period - 1)` in `0..60`, which lets availability be stored
//! as a flat array instead of a hash map.
//!
//! # Availability semantics
//! A grid with no recorded cells is permissive: the owner is available in
//! every slot. Once any cell is recorded, every unrecorded cell counts as
//! unavailable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of teaching days per week (Monday..Saturday).
pub const DAYS_PER_WEEK: u8 = 6;
/// Number of periods per teaching day.
pub const PERIODS_PER_DAY: u8 = 10;
/// Size of the full slot universe.
pub const SLOT_COUNT: usize = DAYS_PER_WEEK as usize * PERIODS_PER_DAY as usize;

const DAY_NAMES: [&str; DAYS_PER_WEEK as usize] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A (day, period) pair identifying one weekly teaching period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of week, 0 = Monday .. 5 = Saturday.
    pub day: u8,
    /// Period within the day, 1-based.
    pub period: u8,
}

impl TimeSlot {
    /// Creates a slot. No range check; see [`TimeSlot::is_valid`].
    pub const fn new(day: u8, period: u8) -> Self {
        Self { day, period }
    }

    /// Whether the slot lies inside the 6 x 10 week.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.day < DAYS_PER_WEEK && (1..=PERIODS_PER_DAY).contains(&self.period)
    }

    /// Dense index in `0..SLOT_COUNT`, or `None` for out-of-range slots.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        if self.is_valid() {
            Some(self.day as usize * PERIODS_PER_DAY as usize + (self.period as usize - 1))
        } else {
            None
        }
    }

    /// Inverse of [`TimeSlot::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SLOT_COUNT {
            return None;
        }
        let day = (index / PERIODS_PER_DAY as usize) as u8;
        let period = (index % PERIODS_PER_DAY as usize) as u8 + 1;
        Some(Self { day, period })
    }

    /// All 60 slots, day-major then period ascending.
    ///
    /// ```
    /// use u_timetable::models::TimeSlot;
    ///
    /// let slots = TimeSlot::all();
    /// assert_eq!(slots.len(), 60);
    /// assert_eq!(slots[0], TimeSlot::new(0, 1));
    /// assert_eq!(slots[59], TimeSlot::new(5, 10));
    /// ```
    pub fn all() -> Vec<Self> {
        (0..SLOT_COUNT).filter_map(Self::from_index).collect()
    }

    /// Short weekday label ("Mon".."Sat"), `"???"` when out of range.
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES.get(self.day as usize).copied().unwrap_or("???")
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.day_name(), self.period)
    }
}

/// One flat availability record as delivered by the staff/room stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRow {
    pub day: u8,
    pub period: u8,
    pub is_available: bool,
}

impl AvailabilityRow {
    pub fn new(day: u8, period: u8, is_available: bool) -> Self {
        Self {
            day,
            period,
            is_available,
        }
    }
}

/// Weekly availability of a teacher or room.
///
/// Serialized as a list of [`AvailabilityRow`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AvailabilityRow>", into = "Vec<AvailabilityRow>")]
pub struct AvailabilityGrid {
    cells: [Option<bool>; SLOT_COUNT],
    recorded: usize,
}

impl Default for AvailabilityGrid {
    fn default() -> Self {
        Self::permissive()
    }
}

impl AvailabilityGrid {
    /// A grid with no data: available everywhere.
    pub fn permissive() -> Self {
        Self {
            cells: [None; SLOT_COUNT],
            recorded: 0,
        }
    }

    /// A grid where exactly the given slots are available.
    pub fn only(slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        let mut grid = Self::permissive();
        for slot in slots {
            grid.set(slot, true);
        }
        grid
    }

    /// A grid with every slot recorded as available.
    pub fn always() -> Self {
        Self::only(TimeSlot::all())
    }

    /// Builds a grid from flat rows. Later rows for the same slot win;
    /// rows outside the week are skipped.
    ///
    /// ```
    /// use u_timetable::models::{AvailabilityGrid, AvailabilityRow, TimeSlot};
    ///
    /// let grid = AvailabilityGrid::from_rows([
    ///     AvailabilityRow::new(0, 1, true),
    ///     AvailabilityRow::new(0, 2, false),
    /// ]);
    /// assert!(grid.is_available(TimeSlot::new(0, 1)));
    /// assert!(!grid.is_available(TimeSlot::new(0, 2)));
    /// assert!(!grid.is_available(TimeSlot::new(3, 4))); // unrecorded
    /// ```
    pub fn from_rows(rows: impl IntoIterator<Item = AvailabilityRow>) -> Self {
        let mut grid = Self::permissive();
        for row in rows {
            let slot = TimeSlot::new(row.day, row.period);
            if !grid.set(slot, row.is_available) {
                tracing::trace!(%slot, "skipping out-of-range availability row");
            }
        }
        grid
    }

    /// Records availability for a slot. Returns `false` if the slot is out
    /// of range (nothing recorded).
    pub fn set(&mut self, slot: TimeSlot, available: bool) -> bool {
        match slot.index() {
            Some(idx) => {
                if self.cells[idx].is_none() {
                    self.recorded += 1;
                }
                self.cells[idx] = Some(available);
                true
            }
            None => false,
        }
    }

    /// Builder form of [`AvailabilityGrid::set`].
    pub fn with(mut self, slot: TimeSlot, available: bool) -> Self {
        self.set(slot, available);
        self
    }

    /// Whether any cell has been recorded.
    #[inline]
    pub fn has_data(&self) -> bool {
        self.recorded > 0
    }

    /// Availability at `slot`, honouring the permissive default.
    #[inline]
    pub fn is_available(&self, slot: TimeSlot) -> bool {
        if !self.has_data() {
            return true;
        }
        match slot.index() {
            Some(idx) => self.cells[idx] == Some(true),
            None => false,
        }
    }

    /// Flattens back into rows, slot order.
    pub fn rows(&self) -> Vec<AvailabilityRow> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| {
                let available = (*cell)?;
                let slot = TimeSlot::from_index(idx)?;
                Some(AvailabilityRow::new(slot.day, slot.period, available))
            })
            .collect()
    }
}

impl From<Vec<AvailabilityRow>> for AvailabilityGrid {
    fn from(rows: Vec<AvailabilityRow>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<AvailabilityGrid> for Vec<AvailabilityRow> {
    fn from(grid: AvailabilityGrid) -> Self {
        grid.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index_roundtrip_bounds() {
        assert_eq!(TimeSlot::new(0, 1).index(), Some(0));
        assert_eq!(TimeSlot::new(0, 10).index(), Some(9));
        assert_eq!(TimeSlot::new(1, 1).index(), Some(10));
        assert_eq!(TimeSlot::new(5, 10).index(), Some(59));
        assert_eq!(TimeSlot::from_index(59), Some(TimeSlot::new(5, 10)));
        assert_eq!(TimeSlot::from_index(60), None);
    }

    #[test]
    fn test_slot_out_of_range() {
        assert!(!TimeSlot::new(6, 1).is_valid());
        assert!(!TimeSlot::new(0, 0).is_valid());
        assert!(!TimeSlot::new(0, 11).is_valid());
        assert_eq!(TimeSlot::new(0, 0).index(), None);
    }

    #[test]
    fn test_all_slots_unique_and_ordered() {
        let slots = TimeSlot::all();
        assert_eq!(slots.len(), SLOT_COUNT);
        let mut sorted = slots.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, slots);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(TimeSlot::new(2, 3).to_string(), "Wed P3");
        assert_eq!(TimeSlot::new(9, 3).day_name(), "???");
    }

    #[test]
    fn test_permissive_grid() {
        let grid = AvailabilityGrid::permissive();
        assert!(!grid.has_data());
        assert!(TimeSlot::all().into_iter().all(|s| grid.is_available(s)));
    }

    #[test]
    fn test_recorded_grid_defaults_to_unavailable() {
        let grid = AvailabilityGrid::only([TimeSlot::new(1, 5)]);
        assert!(grid.has_data());
        assert!(grid.is_available(TimeSlot::new(1, 5)));
        assert!(!grid.is_available(TimeSlot::new(1, 6)));
    }

    #[test]
    fn test_grid_all_false_is_not_permissive() {
        let grid = AvailabilityGrid::permissive().with(TimeSlot::new(0, 1), false);
        assert!(grid.has_data());
        assert!(!grid.is_available(TimeSlot::new(0, 1)));
        assert!(!grid.is_available(TimeSlot::new(4, 4)));
    }

    #[test]
    fn test_from_rows_skips_invalid_and_last_wins() {
        let grid = AvailabilityGrid::from_rows(vec![
            AvailabilityRow::new(9, 1, true),
            AvailabilityRow::new(0, 3, false),
            AvailabilityRow::new(0, 3, true),
        ]);
        assert_eq!(grid.rows(), vec![AvailabilityRow::new(0, 3, true)]);
        assert!(grid.is_available(TimeSlot::new(0, 3)));
    }

    #[test]
    fn test_grid_serializes_as_rows() {
        let grid = AvailabilityGrid::only([TimeSlot::new(0, 2)]);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[{"day":0,"period":2,"is_available":true}]"#);
        let back: AvailabilityGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
