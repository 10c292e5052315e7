use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::PhysicsError;

/// Upper bound on uploaded data rows; larger files are rejected outright.
pub const MAX_ROWS: usize = 100_000;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// How the first column of an upload was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeAxis {
    /// Calendar dates, converted to fractional years.
    Calendar,
    /// Plain numbers, used as-is.
    Numeric,
}

/// One data row. Cells that failed to parse are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub time: Option<f64>,
    pub temperature: Option<f64>,
}

impl Observation {
    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.time?, self.temperature?))
    }
}

/// A two-column time/temperature table as uploaded by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSeries {
    pub time_label: String,
    pub temperature_label: String,
    pub time_axis: TimeAxis,
    pub observations: Vec<Observation>,
}

/// Ordinary least-squares line through a temperature series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit {
    pub slope_per_year: f64,
    /// Slope scaled to degrees per ten years.
    pub slope_per_decade: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// Rows that contributed to the fit.
    pub used: usize,
    /// Rows dropped because a cell did not parse.
    pub excluded: usize,
    /// Fitted temperature for each input row, aligned by index.
    pub fitted: Vec<Option<f64>>,
}

impl TrendFit {
    pub fn predict(&self, time: f64) -> f64 {
        self.intercept + self.slope_per_year * time
    }
}

/// A parsed upload together with its fitted trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub series: TemperatureSeries,
    pub fit: TrendFit,
}

/// Parse an uploaded CSV and fit its trend in one step.
pub fn fit_csv(text: &str) -> Result<TrendReport, PhysicsError> {
    let series = TemperatureSeries::parse_csv(text)?;
    let fit = series.fit_trend()?;
    Ok(TrendReport { series, fit })
}

fn clean_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}

/// Split on commas outside double quotes, then strip the quotes.
fn split_row(line: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            ',' if !quoted => {
                cells.push(clean_cell(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    cells.push(clean_cell(&line[start..]));
    cells
}

fn cell<'a>(row: &[&'a str], col: usize) -> &'a str {
    row.get(col).copied().unwrap_or("")
}

/// Quoted cells may carry thousands separators, e.g. `"1,234.5"`.
fn parse_number(cell: &str) -> Option<f64> {
    let parsed = cell.parse::<f64>().ok().or_else(|| {
        if cell.contains(',') {
            cell.replace(',', "").parse().ok()
        } else {
            None
        }
    });
    parsed.filter(|v| v.is_finite())
}

/// Recognize the handful of date layouts spreadsheets usually export.
pub fn parse_calendar_date(cell: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", cell), "%Y-%m-%d").ok())
}

/// `year + (month - 1) / 12 + (day - 1) / 365`
pub fn fractional_year(date: NaiveDate) -> f64 {
    date.year() as f64 + (date.month0() as f64) / 12.0 + (date.day0() as f64) / 365.0
}

/// Arithmetic mean, dividing before summing when the plain sum overflows.
fn mean(values: impl Iterator<Item = f64> + Clone, count: f64) -> f64 {
    let sum = values.clone().sum::<f64>();
    if sum.is_finite() {
        sum / count
    } else {
        values.map(|v| v / count).sum()
    }
}

/// Largest absolute deviation from `mean`, or 1 when every value equals it.
fn deviation_scale(values: impl Iterator<Item = f64>, mean: f64) -> f64 {
    let max = values.map(|v| (v - mean).abs()).fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

impl TemperatureSeries {
    /// Parse comma-separated text with a header row.
    ///
    /// Only the first two columns are read. Commas inside double-quoted
    /// cells do not split the cell. The time column is treated
    /// as calendar dates when any of its cells parses as one, otherwise
    /// as plain numbers. Unparseable cells become `None` and are left
    /// for the fit to skip.
    pub fn parse_csv(text: &str) -> Result<Self, PhysicsError> {
        let mut lines = text
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let header = lines.next().map(split_row).unwrap_or_default();
        if header.len() < 2 {
            return Err(PhysicsError::MissingColumns { found: header.len() });
        }

        let rows: Vec<Vec<&str>> = lines.map(split_row).collect();
        if rows.is_empty() {
            return Err(PhysicsError::EmptyTable);
        }
        if rows.len() > MAX_ROWS {
            return Err(PhysicsError::TooManyRows {
                rows: rows.len(),
                limit: MAX_ROWS,
            });
        }

        let time_axis = if rows.iter().any(|row| parse_calendar_date(cell(row, 0)).is_some()) {
            TimeAxis::Calendar
        } else {
            TimeAxis::Numeric
        };
        log::debug!("upload has {} rows on a {:?} time axis", rows.len(), time_axis);

        let observations = rows
            .iter()
            .map(|row| {
                let time_cell = cell(row, 0);
                let time = match time_axis {
                    TimeAxis::Calendar => parse_calendar_date(time_cell).map(fractional_year),
                    TimeAxis::Numeric => parse_number(time_cell),
                };
                Observation {
                    time,
                    temperature: parse_number(cell(row, 1)),
                }
            })
            .collect();

        Ok(Self {
            time_label: header[0].to_string(),
            temperature_label: header[1].to_string(),
            time_axis,
            observations,
        })
    }

    /// Valid (time, temperature) pairs in input order.
    pub fn valid_pairs(&self) -> Vec<(f64, f64)> {
        self.observations.iter().filter_map(Observation::pair).collect()
    }

    /// Fit `temperature = intercept + slope * time` by ordinary least squares.
    pub fn fit_trend(&self) -> Result<TrendFit, PhysicsError> {
        let pairs = self.valid_pairs();
        let n = pairs.len();
        if n < 2 {
            return Err(PhysicsError::InsufficientData { valid: n });
        }
        let first_time = pairs[0].0;
        if pairs.iter().all(|(t, _)| *t == first_time) {
            return Err(PhysicsError::DegenerateTimeAxis);
        }

        // Centre and scale both axes so the sums of squares stay finite
        // for values near the ends of the f64 range.
        let count = n as f64;
        let mean_t = mean(pairs.iter().map(|(t, _)| *t), count);
        let mean_y = mean(pairs.iter().map(|(_, y)| *y), count);
        let scale_t = deviation_scale(pairs.iter().map(|(t, _)| *t), mean_t);
        let scale_y = deviation_scale(pairs.iter().map(|(_, y)| *y), mean_y);

        let (mut s_uu, mut s_uv, mut s_vv) = (0.0, 0.0, 0.0);
        for (t, y) in &pairs {
            let u = (t - mean_t) / scale_t;
            let v = (y - mean_y) / scale_y;
            s_uu += u * u;
            s_uv += u * v;
            s_vv += v * v;
        }

        let slope = s_uv / s_uu * (scale_y / scale_t);
        let intercept = mean_y - slope * mean_t;
        let r_squared = if s_vv == 0.0 {
            1.0
        } else {
            (s_uv * s_uv) / (s_uu * s_vv)
        };
        if ![slope * 10.0, intercept, r_squared].iter().all(|v| v.is_finite()) {
            return Err(PhysicsError::NumericOverflow);
        }

        let fitted = self
            .observations
            .iter()
            .map(|obs| obs.time.map(|t| intercept + slope * t))
            .collect();

        let excluded = self.observations.len() - n;
        log::info!(
            "trend fit: {:+.4} per decade from {} points ({} excluded)",
            slope * 10.0,
            n,
            excluded
        );

        Ok(TrendFit {
            slope_per_year: slope,
            slope_per_decade: slope * 10.0,
            intercept,
            r_squared,
            used: n,
            excluded,
            fitted,
        })
    }
}
