use crate::components::EccentricityPanel;
use leptos::*;
use leptos_router::A;

#[component]
pub fn EccentricityPage() -> impl IntoView {
    view! {
        <main class="container factor-page">
            <header>
                <h1>"Eccentricity"</h1>
                <p class="tagline">"How stretched Earth's orbit is"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="theory-section">
                <p>
                    "Earth's orbit is an ellipse whose eccentricity varies between nearly 0 and about 0.06 "
                    "over cycles of roughly 100,000 and 400,000 years. Today it is about 0.0167."
                </p>
                <p>
                    "Sunlight weakens with the square of distance. At perihelion Earth sits at (1 \u{2212} e) "
                    "of its average distance and at aphelion at (1 + e), so aphelion receives "
                    "((1 \u{2212} e) / (1 + e))\u{b2} of perihelion sunlight."
                </p>
            </section>

            <EccentricityPanel/>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
