pub mod components;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod physics;
pub mod storage;

use components::{App, NavBar};
use leptos::*;
use leptos_router::*;
use navigation::Section;
use pages::{
    AxialTiltPage, EccentricityPage, HumanInducedPage, NaturalFactorsPage, NotFoundPage,
    PrecessionPage,
};
use storage::{clear_settings, load_settings, save_settings, SharedSettings};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The page hit an error. Try refreshing, or reset the sliders to their defaults."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        clear_settings();
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reset & Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Loads the saved settings once and shares them with every route.
#[component]
fn RootInner() -> impl IntoView {
    let settings = SharedSettings::new(load_settings());
    provide_context(settings);

    create_effect(move |_| {
        save_settings(&settings.to_stored());
    });

    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path=Section::Main.path() view=App/>
                <Route path=Section::Precession.path() view=PrecessionPage/>
                <Route path=Section::AxialTilt.path() view=AxialTiltPage/>
                <Route path=Section::Eccentricity.path() view=EccentricityPage/>
                <Route path=Section::NaturalFactors.path() view=NaturalFactorsPage/>
                <Route path=Section::HumanInduced.path() view=HumanInducedPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    log::debug!("mounting app");
    mount_to_body(Root);
}
