use crate::components::TiltPanel;
use crate::physics::{MAX_TILT_DEG, MIN_TILT_DEG};
use leptos::*;
use leptos_router::A;

#[component]
pub fn AxialTiltPage() -> impl IntoView {
    view! {
        <main class="container factor-page">
            <header>
                <h1>"Axial Tilt"</h1>
                <p class="tagline">"Why Earth has seasons at all"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="theory-section">
                <p>
                    "Earth's rotation axis leans about 23.5\u{b0} away from the perpendicular to its orbit. "
                    "Over roughly 41,000 years the lean drifts between about "
                    {MIN_TILT_DEG} "\u{b0} and " {MAX_TILT_DEG} "\u{b0}."
                </p>
                <p>
                    "When a hemisphere leans toward the Sun, noon sunlight arrives more steeply and "
                    "each square metre of ground receives more energy. A larger tilt makes summers "
                    "stronger and winters weaker."
                </p>
            </section>

            <TiltPanel/>

            <section class="theory-section">
                <h2>"How the bars are computed"</h2>
                <p>
                    "The Sun's declination is tilt \u{00d7} sin(season angle), with spring at 0\u{b0}, "
                    "summer at 90\u{b0}, autumn at 180\u{b0} and winter at 270\u{b0}. The noon zenith "
                    "angle is |latitude \u{2212} declination|, and the relative energy is the sine of "
                    "the Sun's elevation. Once the Sun stays below the horizon at noon the energy is zero."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
