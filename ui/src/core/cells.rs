//! Flat, ordered cell descriptors for the presentation layer.

use time::Date;

use super::events::LifeEvents;
use super::temporal::{add_months, whole_months_between, TemporalSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Past,
    Current,
    Future,
}

impl CellState {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            CellState::Past => "life-cell--past",
            CellState::Current => "life-cell--current",
            CellState::Future => "life-cell--future",
        }
    }
}

/// One month of the estimated lifespan. Position is implied by `index`
/// in row-major grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: u32,
    pub state: CellState,
    pub has_event: bool,
}

pub fn build_cells(snapshot: &TemporalSnapshot, events: &LifeEvents) -> Vec<Cell> {
    (0..snapshot.cell_count())
        .map(|index| Cell {
            index,
            state: state_for(index, snapshot.months_lived),
            has_event: events.contains(index),
        })
        .collect()
}

pub fn state_for(index: u32, months_lived: u32) -> CellState {
    use std::cmp::Ordering;
    match index.cmp(&months_lived) {
        Ordering::Less => CellState::Past,
        Ordering::Equal => CellState::Current,
        Ordering::Greater => CellState::Future,
    }
}

/// Relative phrasing of a cell's month against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeContext {
    CurrentMonth,
    YearsAgo(u32),
    MonthsAgo(u32),
    Recently,
    InYears(u32),
    InMonths(u32),
    Soon,
}

/// Tooltip details for a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthInfo {
    pub index: u32,
    pub month_date: Date,
    pub age_years: u32,
    /// 1-based month within the current year of age.
    pub month_of_year: u32,
    pub context: TimeContext,
    pub event: Option<String>,
}

pub fn month_info(snapshot: &TemporalSnapshot, events: &LifeEvents, index: u32) -> MonthInfo {
    let month_date = add_months(snapshot.birth_date, index).unwrap_or(snapshot.birth_date);
    let today = snapshot.today;

    let context = match state_for(index, snapshot.months_lived) {
        CellState::Current => TimeContext::CurrentMonth,
        CellState::Past => {
            let months = whole_months_between(month_date, today);
            match months / 12 {
                0 if months > 0 => TimeContext::MonthsAgo(months),
                0 => TimeContext::Recently,
                years => TimeContext::YearsAgo(years),
            }
        }
        CellState::Future => {
            let months = whole_months_between(today, month_date);
            match months / 12 {
                0 if months > 0 => TimeContext::InMonths(months),
                0 => TimeContext::Soon,
                years => TimeContext::InYears(years),
            }
        }
    };

    MonthInfo {
        index,
        month_date,
        age_years: index / 12,
        month_of_year: index % 12 + 1,
        context,
        event: events.get(index).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::temporal::snapshot_from_estimate;
    use time::macros::date;

    fn snapshot() -> TemporalSnapshot {
        snapshot_from_estimate(1990, 80.0, date!(2024 - 01 - 20))
    }

    #[test]
    fn cell_sequence_matches_snapshot() {
        let snap = snapshot();
        let cells = build_cells(&snap, &LifeEvents::milestones());
        assert_eq!(cells.len(), 960);
        assert_eq!(cells[407].state, CellState::Past);
        assert_eq!(cells[408].state, CellState::Current);
        assert_eq!(cells[409].state, CellState::Future);
        assert!(cells[0].has_event);
        assert!(!cells[1].has_event);
        assert!(cells.iter().enumerate().all(|(i, c)| c.index as usize == i));
        assert_eq!(
            cells.iter().filter(|c| c.state == CellState::Current).count(),
            1
        );
    }

    #[test]
    fn outlived_estimate_has_no_current_cell() {
        let snap = snapshot_from_estimate(1900, 60.0, date!(2024 - 01 - 01));
        let cells = build_cells(&snap, &LifeEvents::new());
        assert_eq!(cells.len(), 720);
        assert!(cells.iter().all(|c| c.state == CellState::Past));
    }

    #[test]
    fn tooltip_contexts() {
        let snap = snapshot();
        let events = LifeEvents::milestones();

        let current = month_info(&snap, &events, 408);
        assert_eq!(current.context, TimeContext::CurrentMonth);
        assert_eq!(current.month_date, date!(2024 - 01 - 01));
        assert_eq!(current.age_years, 34);
        assert_eq!(current.month_of_year, 1);

        let birth = month_info(&snap, &events, 0);
        assert_eq!(birth.context, TimeContext::YearsAgo(34));
        assert_eq!(birth.event.as_deref(), Some("Born"));

        let recent = month_info(&snap, &events, 403);
        assert_eq!(recent.context, TimeContext::MonthsAgo(5));

        assert_eq!(month_info(&snap, &events, 410).context, TimeContext::InMonths(1));
        assert_eq!(month_info(&snap, &events, 409).context, TimeContext::Soon);
        assert_eq!(month_info(&snap, &events, 432).context, TimeContext::InYears(1));
    }
}
