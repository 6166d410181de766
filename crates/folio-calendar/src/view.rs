//! Week grid built from activity days.
//!
//! Weeks run from `week_start` (Monday by default). The first and last weeks
//! are padded with cells that have no date; those cells carry no tooltip and
//! ignore clicks. Dates missing inside the window are filled with zero-count
//! cells so every column has seven rows.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use folio_core::ActivityDay;

use crate::navigation::{Navigation, Navigator, day_overview_url};
use crate::palette::Palette;

/// Call-to-action shown under every tooltip.
pub const DEFAULT_HINT: &str = "Click to see";

/// How the calendar is laid out and where clicks lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// First day of each week column
    pub week_start: Weekday,
    /// Color scale
    pub palette: Palette,
    /// Owner profile URL the click targets are built from
    pub profile_url: String,
    /// Second tooltip line
    pub hint: String,
}

impl CalendarOptions {
    /// Defaults (Monday start, light palette) for `profile_url`.
    pub fn new(profile_url: impl Into<String>) -> Self {
        Self {
            week_start: Weekday::Mon,
            palette: Palette::default(),
            profile_url: profile_url.into(),
            hint: DEFAULT_HINT.to_string(),
        }
    }
}

/// Hover text of a dated cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// `"{count} activities on {date}"`
    pub summary: String,
    /// Call-to-action
    pub hint: String,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.summary, self.hint)
    }
}

/// One square of the heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// `None` for padding cells
    pub date: Option<NaiveDate>,
    /// Activity count (0 for padding)
    pub count: u32,
    /// Provider intensity level
    pub level: u8,
    /// Fill color
    pub color: &'static str,
    /// Hover text, dated cells only
    pub tooltip: Option<Tooltip>,
    /// Click target, dated cells only
    pub href: Option<String>,
}

impl Cell {
    fn padding(palette: &Palette) -> Self {
        Self {
            date: None,
            count: 0,
            level: 0,
            color: palette.color(0),
            tooltip: None,
            href: None,
        }
    }

    fn dated(date: NaiveDate, count: u32, level: u8, options: &CalendarOptions) -> Self {
        let day = date.format("%Y-%m-%d");
        Self {
            date: Some(date),
            count,
            level,
            color: options.palette.color(level),
            tooltip: Some(Tooltip {
                summary: format!("{count} activities on {day}"),
                hint: options.hint.clone(),
            }),
            href: day_overview_url(&options.profile_url, date),
        }
    }

    /// Returns `true` for padding cells.
    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }
}

/// One column of seven cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    /// Cells from `week_start` onwards
    pub cells: Vec<Cell>,
}

/// A month name placed above the first week it appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    /// Column index
    pub week: usize,
    /// Abbreviated month name
    pub label: String,
}

/// Render-ready heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// Week columns, oldest first
    pub weeks: Vec<Week>,
    /// Sum of all counts
    pub total: u64,
    /// Month labels for the header row
    pub months: Vec<MonthLabel>,
    /// Colors for the "Less … More" legend
    pub legend: Vec<&'static str>,
}

impl CalendarView {
    /// Lay out `days` into week columns.
    pub fn build(days: &[ActivityDay], options: &CalendarOptions) -> Self {
        let by_date: BTreeMap<NaiveDate, &ActivityDay> =
            days.iter().map(|day| (day.date, day)).collect();
        let legend = options.palette.colors().to_vec();
        let total = days.iter().map(|day| u64::from(day.count)).sum();

        let (Some(first), Some(last)) = (
            by_date.keys().next().copied(),
            by_date.keys().next_back().copied(),
        ) else {
            return Self {
                weeks: Vec::new(),
                total,
                months: Vec::new(),
                legend,
            };
        };

        let mut cells: Vec<Cell> = Vec::new();
        let lead = days_from(options.week_start, first.weekday());
        cells.extend((0..lead).map(|_| Cell::padding(&options.palette)));

        let mut date = first;
        while date <= last {
            let cell = match by_date.get(&date) {
                Some(day) => Cell::dated(date, day.count, day.level, options),
                None => Cell::dated(date, 0, 0, options),
            };
            cells.push(cell);
            let Some(next) = date.checked_add_days(Days::new(1)) else {
                break;
            };
            date = next;
        }

        while cells.len() % 7 != 0 {
            cells.push(Cell::padding(&options.palette));
        }

        let weeks: Vec<Week> = cells
            .chunks(7)
            .map(|chunk| Week {
                cells: chunk.to_vec(),
            })
            .collect();
        let months = month_labels(&weeks);

        tracing::debug!(weeks = weeks.len(), total, "built activity calendar");
        Self {
            weeks,
            total,
            months,
            legend,
        }
    }

    /// Returns `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.weeks.iter().flat_map(|week| week.cells.iter())
    }

    /// The cell for `date`, if it is inside the window.
    pub fn cell_for(&self, date: NaiveDate) -> Option<&Cell> {
        self.cells().find(|cell| cell.date == Some(date))
    }

    /// `"{total} activities in the last year"`.
    pub fn total_text(&self) -> String {
        format!("{} activities in the last year", self.total)
    }

    /// Handle a click on `cell`.
    ///
    /// Dated cells dispatch exactly one navigation in a new context and
    /// return `true`. Padding cells do nothing.
    pub fn click(&self, cell: &Cell, navigator: &mut dyn Navigator) -> bool {
        let Some(url) = cell.href.as_ref() else {
            return false;
        };
        navigator.navigate(Navigation {
            url: url.clone(),
            new_context: true,
        });
        true
    }
}

/// Days from `start` forward to `day`, 0..=6.
fn days_from(start: Weekday, day: Weekday) -> usize {
    let start = start.num_days_from_monday();
    let day = day.num_days_from_monday();
    ((day + 7 - start) % 7) as usize
}

/// Labels each month on the first week holding any of its days. Dates only
/// grow within a week, so that is the week whose last dated cell first
/// falls in the month.
fn month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels: Vec<MonthLabel> = Vec::new();
    let mut previous: Option<(i32, u32)> = None;
    for (index, week) in weeks.iter().enumerate() {
        let Some(date) = week.cells.iter().rev().find_map(|cell| cell.date) else {
            continue;
        };
        let month = (date.year(), date.month());
        if previous != Some(month) {
            labels.push(MonthLabel {
                week: index,
                label: date.format("%b").to_string(),
            });
            previous = Some(month);
        }
    }
    labels
}
