//! Horizontal timeline (Gantt) chart layout.
//!
//! Produces the geometry for an SVG chart with one bar per milestone row.
//! Categories on the vertical axis are milestone names in order of first
//! appearance, top to bottom; bars are coloured by owner.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use compass_core::MilestoneRow;

/// Chart title.
pub const CHART_TITLE: &str = "Project Timeline";

/// Qualitative colour palette, assigned to owners in order of appearance.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

const WIDTH: f64 = 960.0;
const PLOT_LEFT: f64 = 200.0;
const PLOT_RIGHT_MARGIN: f64 = 40.0;
const PLOT_TOP: f64 = 50.0;
const BOTTOM_MARGIN: f64 = 40.0;
const ROW_HEIGHT: f64 = 36.0;
const BAR_PADDING: f64 = 6.0;
const MIN_BAR_WIDTH: f64 = 2.0;
const TICK_INTERVALS: i64 = 5;

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Milestone name.
    pub name: String,
    /// Owner the bar is grouped under.
    pub owner: String,
    /// Fill colour for the owner.
    pub color: String,
    /// Start date as `YYYY-MM-DD`.
    pub start: String,
    /// End date as `YYYY-MM-DD`.
    pub end: String,
    /// Index of the bar's category row.
    pub category: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Category label on the vertical axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Date tick on the horizontal axis with its grid line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub label: String,
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    pub label_y: f64,
}

/// Legend entry for one owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub owner: String,
    pub color: String,
}

/// Laid-out timeline chart, ready for the page template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub title_x: f64,
    pub categories: Vec<Category>,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    pub legend: Vec<LegendEntry>,
}

impl Timeline {
    /// Lays out a chart for `rows`, or `None` when there are no rows.
    pub fn layout(rows: &[MilestoneRow]) -> Option<Self> {
        let (domain_start, domain_end) = domain(rows)?;
        let span_days = (domain_end - domain_start).num_days().max(1) as f64;
        let plot_width = WIDTH - PLOT_LEFT - PLOT_RIGHT_MARGIN;
        let x_of = |date: NaiveDate| {
            round1(PLOT_LEFT + (date - domain_start).num_days() as f64 / span_days * plot_width)
        };

        let mut categories: Vec<Category> = Vec::new();
        let mut legend: Vec<LegendEntry> = Vec::new();
        let mut bars = Vec::with_capacity(rows.len());

        for row in rows {
            let category = match categories.iter().position(|c| c.name == row.name) {
                Some(index) => index,
                None => {
                    let index = categories.len();
                    categories.push(Category {
                        name: row.name.clone(),
                        x: PLOT_LEFT - 10.0,
                        y: round1(PLOT_TOP + index as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0 + 4.0),
                    });
                    index
                }
            };

            let color = match legend.iter().position(|e| e.owner == row.owner) {
                Some(index) => legend[index].color.clone(),
                None => {
                    let color = PALETTE[legend.len() % PALETTE.len()].to_string();
                    legend.push(LegendEntry {
                        owner: row.owner.clone(),
                        color: color.clone(),
                    });
                    color
                }
            };

            // Reversed ranges are drawn between the two dates as given.
            let (lo, hi) = if row.end < row.start {
                (row.end, row.start)
            } else {
                (row.start, row.end)
            };
            let x = x_of(lo);

            bars.push(Bar {
                name: row.name.clone(),
                owner: row.owner.clone(),
                color,
                start: row.start.to_string(),
                end: row.end.to_string(),
                category,
                x,
                y: round1(PLOT_TOP + category as f64 * ROW_HEIGHT + BAR_PADDING),
                width: (x_of(hi) - x).max(MIN_BAR_WIDTH),
                height: ROW_HEIGHT - 2.0 * BAR_PADDING,
            });
        }

        let plot_bottom = PLOT_TOP + categories.len() as f64 * ROW_HEIGHT;
        let ticks = tick_dates(domain_start, domain_end)
            .into_iter()
            .map(|date| Tick {
                label: date.to_string(),
                x: x_of(date),
                y1: PLOT_TOP,
                y2: plot_bottom,
                label_y: plot_bottom + 18.0,
            })
            .collect();

        Some(Self {
            title: CHART_TITLE.to_string(),
            width: WIDTH,
            height: plot_bottom + BOTTOM_MARGIN,
            title_x: PLOT_LEFT,
            categories,
            bars,
            ticks,
            legend,
        })
    }

    /// Returns the colour assigned to `owner`.
    pub fn color_of(&self, owner: &str) -> Option<&str> {
        self.legend
            .iter()
            .find(|e| e.owner == owner)
            .map(|e| e.color.as_str())
    }
}

/// Earliest and latest date across all rows.
fn domain(rows: &[MilestoneRow]) -> Option<(NaiveDate, NaiveDate)> {
    let dates = rows.iter().flat_map(|r| [r.start, r.end]);
    let min = dates.clone().min()?;
    let max = dates.max()?;
    Some((min, max))
}

/// Evenly spaced tick dates from `start` to `end`, without duplicates.
fn tick_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let span = (end - start).num_days();
    if span == 0 {
        return vec![start];
    }
    let intervals = TICK_INTERVALS.min(span);
    let mut dates: Vec<NaiveDate> = (0..=intervals)
        .map(|i| start + Duration::days(span * i / intervals))
        .collect();
    dates.dedup();
    dates
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
