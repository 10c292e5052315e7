use crate::storage::format_percent;
use leptos::*;

// Layout within viewBox="0 0 400 220"; bar heights scale 0-100%.
pub(crate) const BARS_LEFT: f64 = 40.0;
pub(crate) const BARS_WIDTH: f64 = 340.0;
pub(crate) const BARS_BOTTOM: f64 = 185.0;
pub(crate) const BARS_HEIGHT: f64 = 155.0;
const BAR_GAP: f64 = 0.25;

/// One labelled bar of a relative-energy chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value_pct: f64,
    pub class: &'static str,
}

/// A bar positioned in chart coordinates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
}

/// Lay bars out left to right, leaving a gap of a quarter slot on each side.
pub(crate) fn bar_layout(count: usize, values: impl Iterator<Item = f64>) -> Vec<BarRect> {
    if count == 0 {
        return Vec::new();
    }
    let slot = BARS_WIDTH / count as f64;
    let width = slot * (1.0 - 2.0 * BAR_GAP);
    values
        .enumerate()
        .map(|(i, pct)| {
            let height = pct.clamp(0.0, 100.0) / 100.0 * BARS_HEIGHT;
            let x = BARS_LEFT + i as f64 * slot + slot * BAR_GAP;
            BarRect {
                x,
                y: BARS_BOTTOM - height,
                width,
                height,
                label_x: x + width / 2.0,
            }
        })
        .collect()
}

/// Bar chart of relative solar energy, 0-100%.
#[component]
pub fn EnergyBars(
    #[prop(into)] title: String,
    #[prop(into)] bars: Signal<Vec<Bar>>,
) -> impl IntoView {
    let title_id = format!("{}-title", title.to_lowercase().replace(' ', "-"));
    view! {
        <div class="chart-placeholder">
            <h4>{title.clone()}</h4>
            <svg viewBox="0 0 400 220" class="energy-chart" role="img" aria-labelledby=title_id.clone()>
                <title id=title_id>{title}</title>
                <text x="5" y="34" class="axis-label">"100%"</text>
                <text x="5" y="189" class="axis-label">"0%"</text>
                <line x1=BARS_LEFT y1=BARS_BOTTOM x2={BARS_LEFT + BARS_WIDTH} y2=BARS_BOTTOM class="grid-line"/>
                <line
                    x1=BARS_LEFT
                    y1={BARS_BOTTOM - BARS_HEIGHT}
                    x2={BARS_LEFT + BARS_WIDTH}
                    y2={BARS_BOTTOM - BARS_HEIGHT}
                    class="grid-line faint"
                />
                {move || {
                    let bars = bars.get();
                    let rects = bar_layout(bars.len(), bars.iter().map(|b| b.value_pct));
                    bars.into_iter()
                        .zip(rects)
                        .map(|(bar, rect)| view! {
                            <g class=format!("energy-bar {}", bar.class)>
                                <rect x=rect.x y=rect.y width=rect.width height=rect.height/>
                                <text x=rect.label_x y={rect.y - 6.0} class="bar-value">
                                    {format_percent(bar.value_pct)}
                                </text>
                                <text x=rect.label_x y={BARS_BOTTOM + 18.0} class="bar-label">
                                    {bar.label}
                                </text>
                            </g>
                        })
                        .collect_view()
                }}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bar_reaches_top() {
        let rects = bar_layout(1, [100.0].into_iter());
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].height, BARS_HEIGHT);
        assert_eq!(rects[0].y, BARS_BOTTOM - BARS_HEIGHT);
    }

    #[test]
    fn test_bars_do_not_overlap() {
        let rects = bar_layout(4, [97.2, 80.0, 70.0, 49.2].into_iter());
        for pair in rects.windows(2) {
            assert!(pair[0].x + pair[0].width < pair[1].x);
        }
        let last = rects.last().unwrap();
        assert!(last.x + last.width <= BARS_LEFT + BARS_WIDTH);
    }

    #[test]
    fn test_values_are_clamped() {
        let rects = bar_layout(2, [-5.0, 140.0].into_iter());
        assert_eq!(rects[0].height, 0.0);
        assert_eq!(rects[1].height, BARS_HEIGHT);
    }

    #[test]
    fn test_empty_chart() {
        assert!(bar_layout(0, std::iter::empty()).is_empty());
    }
}
