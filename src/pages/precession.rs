use crate::components::PrecessionPanel;
use crate::physics::PRECESSION_CYCLE_YEARS;
use crate::storage::format_years;
use leptos::*;
use leptos_router::A;

#[component]
pub fn PrecessionPage() -> impl IntoView {
    view! {
        <main class="container factor-page">
            <header>
                <h1>"Precession"</h1>
                <p class="tagline">"The slow wobble of Earth's axis"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="theory-section">
                <p>
                    "Like a spinning top, Earth's axis traces a slow circle. One full turn takes about "
                    {format_years(PRECESSION_CYCLE_YEARS)} "."
                </p>
                <p>
                    "Today the Northern Hemisphere is in winter when Earth passes perihelion, its closest "
                    "point to the Sun. Halfway through the cycle the axis points the other way, so "
                    "northern summer falls at perihelion and northern seasons become more extreme."
                </p>
            </section>

            <PrecessionPanel/>

            <section class="theory-section">
                <p>
                    "The diagram only shows the three milestones. The orbit and the Sun's position are "
                    "drawn schematically; only the direction of the axis changes between them."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
