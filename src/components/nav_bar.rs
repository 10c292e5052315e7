use crate::navigation::{Category, Section};
use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let current = create_memo(move |_| Section::from_path(&pathname.get()));

    let link_class = move |section: Section| {
        if current.get() == Some(section) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let group_class = move |category: Category| {
        if current.get().map(|s| s.category()) == Some(category) {
            "nav-group active"
        } else {
            "nav-group"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"Milankovitch"</A>
                <div class="nav-links">
                    {Category::ALL
                        .into_iter()
                        .filter(|category| *category != Category::Main)
                        .map(|category| view! {
                            <div class=move || group_class(category)>
                                <span class="nav-group-label">{category.label()}</span>
                                {category
                                    .sections()
                                    .into_iter()
                                    .map(|section| view! {
                                        <A href=section.path() class=move || link_class(section)>
                                            {section.title()}
                                        </A>
                                    })
                                    .collect_view()}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
