use leptos::*;
use leptos_router::A;

#[component]
pub fn NaturalFactorsPage() -> impl IntoView {
    view! {
        <main class="container factor-page">
            <header>
                <h1>"Natural Factors"</h1>
                <p class="tagline">"Climate drivers inside the Earth system"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="theory-section">
                <h2>"Volcanic eruptions"</h2>
                <p>
                    "Large eruptions inject sulfur into the stratosphere. The aerosols reflect sunlight "
                    "and can cool the planet for a year or two."
                </p>
            </section>

            <section class="theory-section">
                <h2>"Solar activity"</h2>
                <p>
                    "The Sun's output rises and falls slightly over its 11-year sunspot cycle. "
                    "The change is about 0.1%, small next to the orbital effects on the other pages."
                </p>
            </section>

            <section class="theory-section">
                <h2>"Ocean and atmosphere"</h2>
                <p>
                    "El Ni\u{f1}o and La Ni\u{f1}a move heat between the ocean and the air, warming or "
                    "cooling global temperatures for a few years at a time."
                </p>
            </section>

            <section class="theory-section">
                <p>
                    "Compare these with a measured record on the "
                    <A href="/internal/human-induced">"human-induced"</A>
                    " page."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
