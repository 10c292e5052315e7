use crate::components::diagram::{SegmentLine, Viewport};
use crate::components::energy_bars::{Bar, EnergyBars};
use crate::physics::{
    seasonal_energies, tilt_geometry, AxialTilt, Point, Season, DEFAULT_LATITUDE_DEG,
    DEFAULT_TILT_DEG,
};
use crate::storage::{format_degrees, SharedSettings};
use leptos::*;

const EARTH_VIEW: Viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0, 320.0, 320.0);

fn season_class(season: Season) -> &'static str {
    match season {
        Season::Spring => "spring",
        Season::Summer => "summer",
        Season::Autumn => "autumn",
        Season::Winter => "winter",
    }
}

/// Earth close-up with adjustable axial tilt, plus the noon-energy table it implies.
#[component]
pub fn TiltPanel() -> impl IntoView {
    let settings = SharedSettings::instance();
    let tilt_deg = settings.tilt_deg;
    let latitude_deg = settings.latitude_deg;

    let geometry = create_memo(move |_| tilt_geometry(AxialTilt::clamped(tilt_deg.get())));

    let bars = create_memo(move |_| {
        seasonal_energies(latitude_deg.get(), geometry.get().tilt.degrees())
            .into_iter()
            .map(|row| Bar {
                label: row.season.name().to_string(),
                value_pct: row.energy_pct,
                class: season_class(row.season),
            })
            .collect::<Vec<_>>()
    });

    let reset = move |_| {
        tilt_deg.set(DEFAULT_TILT_DEG);
        latitude_deg.set(DEFAULT_LATITUDE_DEG);
    };

    view! {
        <div class="panel tilt-panel">
            <div class="chart-placeholder">
                <h4>"Earth's Axis"</h4>
                <svg viewBox=EARTH_VIEW.view_box() class="diagram earth-diagram" role="img" aria-labelledby="tilt-diagram-title">
                    <title id="tilt-diagram-title">"Earth with its rotation axis, equator and incoming sunlight"</title>
                    <defs>
                        <marker id="sun-arrow" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse">
                            <path d="M 0 0 L 10 5 L 0 10 z" class="sunlight-head"/>
                        </marker>
                    </defs>
                    {move || {
                        let geom = geometry.get();
                        let (cx, cy) = EARTH_VIEW.point(Point::ORIGIN);
                        let (label_x, label_y) = EARTH_VIEW.point(geom.sunlight.start.offset(0.0, 0.15));
                        view! {
                            <circle cx=cx cy=cy r={geom.radius * EARTH_VIEW.scale()} class="earth"/>
                            <SegmentLine viewport=EARTH_VIEW segment=geom.equator kind="equator"/>
                            <SegmentLine viewport=EARTH_VIEW segment=geom.axis kind="axis"/>
                            <SegmentLine viewport=EARTH_VIEW segment=geom.sunlight kind="sunlight" marker_end="sun-arrow"/>
                            <text x=label_x y=label_y class="diagram-label sunlight-label">"Sunlight"</text>
                        }
                    }}
                </svg>
                <div class="chart-legend">
                    <div class="legend-row">
                        <span class="legend-item axis">"Rotation axis"</span>
                        <span class="legend-item equator dotted">"Equator"</span>
                    </div>
                </div>
            </div>

            <div class="controls">
                <div class="control-group">
                    <label for="tilt">"Axial tilt: " {move || format_degrees(tilt_deg.get())}</label>
                    <input
                        type="range"
                        id="tilt"
                        min="21.5"
                        max="24.5"
                        step="0.1"
                        prop:value=move || tilt_deg.get()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                tilt_deg.set(AxialTilt::clamped(v).degrees());
                            }
                        }
                    />
                </div>

                <div class="control-group">
                    <label for="latitude">"Latitude: " {move || format_degrees(latitude_deg.get())}</label>
                    <input
                        type="range"
                        id="latitude"
                        min="-90"
                        max="90"
                        step="1"
                        prop:value=move || latitude_deg.get()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                latitude_deg.set(v.clamp(-90.0, 90.0));
                            }
                        }
                    />
                </div>

                <button class="reset-button" on:click=reset>"Reset to defaults"</button>
            </div>

            <EnergyBars title="Noon Solar Energy by Season" bars=bars/>
        </div>
    }
}
