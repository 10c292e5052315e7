use crate::components::TrendPanel;
use leptos::*;
use leptos_router::A;

#[component]
pub fn HumanInducedPage() -> impl IntoView {
    view! {
        <main class="container factor-page">
            <header>
                <h1>"Human-Induced Change"</h1>
                <p class="tagline">"Fit a trend to a temperature record"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>

            <section class="theory-section">
                <p>
                    "Orbital cycles change the climate over tens of thousands of years. The warming "
                    "measured since the industrial era happens within decades, which is why it is "
                    "attributed to greenhouse gases rather than to Earth's orbit."
                </p>
                <p>
                    "Upload a CSV with a time column (dates such as 2001-06-15 or 2001-06, or plain "
                    "numbers such as years) and a temperature column. A straight line is fitted by "
                    "least squares and its slope is reported per decade. Rows with unreadable values "
                    "are skipped. The file stays in your browser and is not saved."
                </p>
            </section>

            <TrendPanel/>

            <nav class="back-nav bottom">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
