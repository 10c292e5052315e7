use crate::physics::{TemperatureSeries, TimeAxis, TrendReport};
use crate::storage::format_rate;
use leptos::*;

// Chart layout constants (SVG coordinate space within viewBox="0 0 400 200")
pub(crate) const CHART_LEFT: f64 = 40.0;
pub(crate) const CHART_WIDTH: f64 = 350.0;
pub(crate) const CHART_RIGHT: f64 = CHART_LEFT + CHART_WIDTH;
pub(crate) const CHART_TOP: f64 = 20.0;
pub(crate) const CHART_BOTTOM: f64 = 165.0;
pub(crate) const CHART_HEIGHT: f64 = CHART_BOTTOM - CHART_TOP;

/// Data extent of a chart, padded so a flat series still gets a visible band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartBounds {
    pub t_min: f64,
    pub t_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            t_min: first.0,
            t_max: first.0,
            y_min: first.1,
            y_max: first.1,
        };
        for &(t, y) in &points[1..] {
            bounds.t_min = bounds.t_min.min(t);
            bounds.t_max = bounds.t_max.max(t);
            bounds.y_min = bounds.y_min.min(y);
            bounds.y_max = bounds.y_max.max(y);
        }
        if (bounds.y_max - bounds.y_min).abs() < 1e-6 {
            bounds.y_min -= 0.5;
            bounds.y_max += 0.5;
        }
        if (bounds.t_max - bounds.t_min).abs() < 1e-9 {
            return None;
        }
        Some(bounds)
    }

    pub fn x(&self, t: f64) -> f64 {
        CHART_LEFT + (t - self.t_min) / (self.t_max - self.t_min) * CHART_WIDTH
    }

    pub fn y(&self, value: f64) -> f64 {
        CHART_BOTTOM - (value - self.y_min) / (self.y_max - self.y_min) * CHART_HEIGHT
    }
}

/// Convert (time, temperature) pairs to SVG polyline coordinates.
pub(crate) fn to_chart_points(data: &[(f64, f64)], bounds: &ChartBounds) -> String {
    data.iter()
        .map(|&(t, y)| format!("{:.1},{:.1}", bounds.x(t), bounds.y(y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Valid pairs ordered by time, so an unsorted upload still draws as one line.
pub(crate) fn observed_points(series: &TemperatureSeries) -> Vec<(f64, f64)> {
    let mut points = series.valid_pairs();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

fn format_time(t: f64, axis: TimeAxis) -> String {
    match axis {
        TimeAxis::Calendar => format!("{:.0}", t.floor()),
        TimeAxis::Numeric => format!("{}", (t * 100.0).round() / 100.0),
    }
}

/// Uploaded series with its least-squares line.
#[component]
pub fn TrendChart(report: TrendReport) -> impl IntoView {
    let series = report.series;
    let fit = report.fit;
    let data = observed_points(&series);
    let fitted: Vec<(f64, f64)> = series
        .observations
        .iter()
        .zip(&fit.fitted)
        .filter_map(|(obs, fitted)| Some((obs.time?, (*fitted)?)))
        .collect();

    let all_points: Vec<(f64, f64)> = data.iter().chain(&fitted).copied().collect();
    let Some(bounds) = ChartBounds::from_points(&all_points) else {
        return view! { <p class="chart-note">"Not enough spread in the data to draw a chart."</p> }
            .into_view();
    };

    let t_mid = (bounds.t_min + bounds.t_max) / 2.0;
    let first_fit = (bounds.t_min, fit.predict(bounds.t_min));
    let last_fit = (bounds.t_max, fit.predict(bounds.t_max));

    view! {
        <div class="chart-placeholder">
            <h4>{format!("{} over {}", series.temperature_label, series.time_label)}</h4>
            <svg viewBox="0 0 400 200" class="temp-chart" role="img" aria-labelledby="trend-chart-title trend-chart-desc">
                <title id="trend-chart-title">"Temperature trend"</title>
                <desc id="trend-chart-desc">"Line chart of the uploaded temperatures with a fitted linear trend"</desc>
                // Y-axis labels
                <text x="5" y="24" class="axis-label">{format!("{:.1}", bounds.y_max)}</text>
                <text x="5" y="168" class="axis-label">{format!("{:.1}", bounds.y_min)}</text>

                // X-axis labels
                <text x="40" y="195" class="axis-label">{format_time(bounds.t_min, series.time_axis)}</text>
                <text x="210" y="195" class="axis-label">{format_time(t_mid, series.time_axis)}</text>
                <text x="360" y="195" class="axis-label">{format_time(bounds.t_max, series.time_axis)}</text>

                <line x1=CHART_LEFT y1=CHART_BOTTOM x2=CHART_RIGHT y2=CHART_BOTTOM class="grid-line"/>

                <polyline class="temp-line observed" points=to_chart_points(&data, &bounds)/>
                <polyline class="temp-line trend" points=to_chart_points(&[first_fit, last_fit], &bounds)/>
            </svg>
            <div class="chart-legend">
                <div class="legend-row">
                    <span class="legend-item observed">"Observed"</span>
                    <span class="legend-item trend dotted">
                        {format!("Trend ({})", format_rate(fit.slope_per_decade))}
                    </span>
                </div>
            </div>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_map_to_chart_edges() {
        let bounds = ChartBounds::from_points(&[(2000.0, 14.0), (2020.0, 15.0)]).unwrap();
        assert_eq!(bounds.x(2000.0), CHART_LEFT);
        assert_eq!(bounds.x(2020.0), CHART_RIGHT);
        assert_eq!(bounds.y(14.0), CHART_BOTTOM);
        assert_eq!(bounds.y(15.0), CHART_TOP);
    }

    #[test]
    fn test_flat_series_is_padded() {
        let bounds = ChartBounds::from_points(&[(1.0, 14.0), (2.0, 14.0)]).unwrap();
        assert_eq!(bounds.y_min, 13.5);
        assert_eq!(bounds.y_max, 14.5);
        let mid = bounds.y(14.0);
        assert!(mid > CHART_TOP && mid < CHART_BOTTOM);
    }

    #[test]
    fn test_no_time_spread_has_no_bounds() {
        assert_eq!(ChartBounds::from_points(&[]), None);
        assert_eq!(ChartBounds::from_points(&[(5.0, 1.0), (5.0, 2.0)]), None);
    }

    #[test]
    fn test_chart_points_format() {
        let bounds = ChartBounds::from_points(&[(0.0, 0.0), (10.0, 1.0)]).unwrap();
        assert_eq!(
            to_chart_points(&[(0.0, 0.0), (10.0, 1.0)], &bounds),
            "40.0,165.0 390.0,20.0"
        );
    }

    #[test]
    fn test_unsorted_upload_is_drawn_in_time_order() {
        let series = TemperatureSeries::parse_csv("t,y\n3,30\n1,10\nx,99\n2,20\n").unwrap();
        assert_eq!(
            observed_points(&series),
            vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]
        );
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(format_time(1998.75, TimeAxis::Calendar), "1998");
        assert_eq!(format_time(1.23456, TimeAxis::Numeric), "1.23");
    }
}
