use crate::components::diagram::Viewport;
use crate::components::energy_bars::{Bar, EnergyBars};
use crate::physics::{
    eccentricity_diagram, Eccentricity, DEFAULT_ECCENTRICITY, DISPLAY_EXAGGERATION,
};
use crate::storage::{format_percent, SharedSettings};
use leptos::*;

const ORBIT_VIEW: Viewport = Viewport::new(-1.5, 1.5, -1.2, 1.2, 300.0, 240.0);
const SUN_RADIUS: f64 = 0.08;
const APSIS_RADIUS: f64 = 0.05;

#[component]
pub fn EccentricityPanel() -> impl IntoView {
    let settings = SharedSettings::instance();
    let eccentricity = settings.eccentricity;

    let diagram =
        create_memo(move |_| eccentricity_diagram(Eccentricity::clamped(eccentricity.get())));

    let bars = create_memo(move |_| {
        let energy = diagram.get().energy;
        vec![
            Bar {
                label: "Perihelion".to_string(),
                value_pct: energy.perihelion_pct,
                class: "perihelion",
            },
            Bar {
                label: "Aphelion".to_string(),
                value_pct: energy.aphelion_pct,
                class: "aphelion",
            },
        ]
    });

    view! {
        <div class="panel eccentricity-panel">
            <div class="chart-placeholder">
                <h4>"Orbit Shape"</h4>
                <svg viewBox=ORBIT_VIEW.view_box() class="diagram orbit-diagram" role="img" aria-labelledby="eccentricity-title">
                    <title id="eccentricity-title">"Earth's orbit drawn with exaggerated eccentricity"</title>
                    {move || {
                        let d = diagram.get();
                        let scale = ORBIT_VIEW.scale();
                        let (sun_x, sun_y) = ORBIT_VIEW.point(d.sun);
                        let (peri_x, peri_y) = ORBIT_VIEW.point(d.perihelion);
                        let (aph_x, aph_y) = ORBIT_VIEW.point(d.aphelion);
                        view! {
                            <polyline class="orbit" points=ORBIT_VIEW.polyline(&d.orbit_path)/>
                            <circle cx=sun_x cy=sun_y r={SUN_RADIUS * scale} class="sun"/>
                            <circle cx=peri_x cy=peri_y r={APSIS_RADIUS * scale} class="apsis perihelion"/>
                            <text x=peri_x y={peri_y - 12.0} class="diagram-label">"Perihelion"</text>
                            <circle cx=aph_x cy=aph_y r={APSIS_RADIUS * scale} class="apsis aphelion"/>
                            <text x=aph_x y={aph_y - 12.0} class="diagram-label">"Aphelion"</text>
                        }
                    }}
                </svg>
                <p class="chart-note">
                    {move || format!(
                        "Drawn at eccentricity {:.3} ({}× the true value) so the shape is visible.",
                        diagram.get().display_eccentricity,
                        DISPLAY_EXAGGERATION,
                    )}
                </p>
            </div>

            <div class="controls">
                <div class="control-group">
                    <label for="eccentricity">"Eccentricity: " {move || format!("{:.4}", eccentricity.get())}</label>
                    <input
                        type="range"
                        id="eccentricity"
                        min="0"
                        max="0.2"
                        step="0.005"
                        prop:value=move || eccentricity.get()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                eccentricity.set(Eccentricity::clamped(v).value());
                            }
                        }
                    />
                </div>
                <button class="reset-button" on:click=move |_| eccentricity.set(DEFAULT_ECCENTRICITY)>
                    "Reset to defaults"
                </button>
            </div>

            <EnergyBars title="Sunlight at Perihelion and Aphelion" bars=bars/>
            <p class="panel-note">
                {move || format!(
                    "Aphelion receives {} of perihelion sunlight, {} less.",
                    format_percent(diagram.get().energy.aphelion_pct),
                    format_percent(diagram.get().energy.contrast_pct()),
                )}
            </p>
        </div>
    }
}
