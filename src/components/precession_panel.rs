use crate::components::diagram::{SegmentLine, Viewport};
use crate::physics::{precession_diagram, CyclePosition, EarthMarker, OrbitEllipse};
use crate::storage::{format_years, SharedSettings};
use leptos::*;

const ORBIT_VIEW: Viewport = Viewport::new(-4.0, 4.0, -3.2, 3.2, 400.0, 320.0);
const EARTH_MARKER_RADIUS: f64 = 0.18;
const SUN_RADIUS: f64 = 0.3;

#[component]
fn Marker(marker: EarthMarker, #[prop(into)] place: String) -> impl IntoView {
    let (x, y) = ORBIT_VIEW.point(marker.position);
    let (_, label_y) = ORBIT_VIEW.point(marker.position.offset(0.0, -0.7));
    view! {
        <g class="earth-marker">
            <circle cx=x cy=y r={EARTH_MARKER_RADIUS * ORBIT_VIEW.scale()} class="earth"/>
            <SegmentLine viewport=ORBIT_VIEW segment=marker.axis kind="axis"/>
            <text x=x y=label_y class="diagram-label season-label">
                {format!("{}: {}", place, marker.season.name())}
            </text>
        </g>
    }
}

/// Orbit diagram showing which season falls at perihelion at each cycle milestone.
#[component]
pub fn PrecessionPanel() -> impl IntoView {
    let settings = SharedSettings::instance();
    let position = settings.precession;

    let diagram = create_memo(move |_| precession_diagram(OrbitEllipse::default(), position.get()));

    view! {
        <div class="panel precession-panel">
            <div class="controls cycle-selector" role="group" aria-label="Precession cycle position">
                {CyclePosition::ALL
                    .into_iter()
                    .map(|p| view! {
                        <button
                            class=move || if position.get() == p { "cycle-button active" } else { "cycle-button" }
                            on:click=move |_| position.set(p)
                        >
                            {p.label()}
                            <span class="cycle-years">{format_years(p.years())}</span>
                        </button>
                    })
                    .collect_view()}
                <button class="reset-button" on:click=move |_| position.set(CyclePosition::default())>
                    "Reset to defaults"
                </button>
            </div>

            <div class="chart-placeholder">
                <h4>"Orbit and Axis Orientation"</h4>
                <svg viewBox=ORBIT_VIEW.view_box() class="diagram orbit-diagram" role="img" aria-labelledby="precession-title">
                    <title id="precession-title">"Earth's orbit with the axis orientation at perihelion and aphelion"</title>
                    {move || {
                        let d = diagram.get();
                        let (sun_x, sun_y) = ORBIT_VIEW.point(d.sun);
                        view! {
                            <polyline class="orbit" points=ORBIT_VIEW.polyline(&d.orbit_path)/>
                            <circle cx=sun_x cy=sun_y r={SUN_RADIUS * ORBIT_VIEW.scale()} class="sun"/>
                            <Marker marker=d.perihelion place="Perihelion"/>
                            <Marker marker=d.aphelion place="Aphelion"/>
                        }
                    }}
                </svg>
            </div>

            <p class="panel-note">
                {move || {
                    let d = diagram.get();
                    if d.seasons_reversed {
                        format!(
                            "After {} the axis points the other way: the Northern Hemisphere has {} at perihelion.",
                            format_years(d.position.years()),
                            d.perihelion.season.name().to_lowercase(),
                        )
                    } else {
                        format!(
                            "The Northern Hemisphere has {} at perihelion, when Earth is closest to the Sun.",
                            d.perihelion.season.name().to_lowercase(),
                        )
                    }
                }}
            </p>
        </div>
    }
}
