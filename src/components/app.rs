use crate::navigation::{Category, Section};
use crate::physics::{
    orbital_energy, seasonal_energies, AxialTilt, CyclePosition, Eccentricity, Season,
};
use crate::storage::{format_degrees, format_percent, format_years, SharedSettings};
use leptos::*;
use leptos_router::A;

fn blurb(section: Section) -> &'static str {
    match section {
        Section::Main => "",
        Section::Precession => {
            "The axis slowly wobbles like a spinning top, swapping which season falls at perihelion."
        }
        Section::AxialTilt => "How far the axis leans sets how strongly the seasons differ.",
        Section::Eccentricity => {
            "A more stretched orbit widens the gap between the closest and farthest sunlight."
        }
        Section::NaturalFactors => {
            "Volcanoes, solar output and ocean cycles also shift the climate from within."
        }
        Section::HumanInduced => "Upload a temperature record and fit a linear warming trend.",
    }
}

/// Main page: an overview of each factor with the current settings at a glance.
#[component]
pub fn App() -> impl IntoView {
    let settings = SharedSettings::instance();

    let summer_winter = create_memo(move |_| {
        let table = seasonal_energies(
            settings.latitude_deg.get(),
            AxialTilt::clamped(settings.tilt_deg.get()).degrees(),
        );
        let energy_of = |season: Season| {
            table
                .iter()
                .find(|row| row.season == season)
                .map(|row| row.energy_pct)
                .unwrap_or(0.0)
        };
        (energy_of(Season::Summer), energy_of(Season::Winter))
    });

    let aphelion_pct = create_memo(move |_| {
        orbital_energy(Eccentricity::clamped(settings.eccentricity.get())).aphelion_pct
    });

    view! {
        <main class="container">
            <header>
                <h1>"Earth's Orbit and Climate"</h1>
                <p class="tagline">
                    "How tilt, wobble and orbit shape change the sunlight Earth receives"
                </p>
            </header>

            <section class="current-settings">
                <h2>"Current settings"</h2>
                <ul>
                    <li>
                        "Axial tilt " {move || format_degrees(settings.tilt_deg.get())}
                        ": summer noon sunlight " {move || format_percent(summer_winter.get().0)}
                        ", winter " {move || format_percent(summer_winter.get().1)}
                    </li>
                    <li>
                        "Precession: " {move || settings.precession.get().label()}
                        " (" {move || format_years(settings.precession.get().years())} ")"
                        {move || if settings.precession.get() == CyclePosition::HalfCycle {
                            ", seasons reversed"
                        } else {
                            ""
                        }}
                    </li>
                    <li>
                        "Eccentricity " {move || format!("{:.4}", settings.eccentricity.get())}
                        ": aphelion gets " {move || format_percent(aphelion_pct.get())}
                        " of perihelion sunlight"
                    </li>
                </ul>
            </section>

            {[Category::External, Category::Internal]
                .into_iter()
                .map(|category| view! {
                    <section class="theory-section">
                        <h2>{category.label()}</h2>
                        {category
                            .sections()
                            .into_iter()
                            .map(|section| view! {
                                <div class="factor-card">
                                    <h3><A href=section.path()>{section.title()}</A></h3>
                                    <p>{blurb(section)}</p>
                                </div>
                            })
                            .collect_view()}
                    </section>
                })
                .collect_view()}

            <footer>
                <p>"Geometry is schematic: distances and angles are drawn for clarity, not to scale."</p>
            </footer>
        </main>
    }
}
