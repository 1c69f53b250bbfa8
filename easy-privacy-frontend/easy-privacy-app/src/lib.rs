pub mod components;
pub mod routes;

use components::chatbot::ChatWidget;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use routes::{
    final_policy::FinalPolicy, home_page::HomePage, not_found::NotFound,
    policy_generator::PolicyGenerator,
};

/// Document shell rendered by the server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/easy-privacy.css" />
        <Title text="Easy Privacy" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment("policy-generator") view=PolicyGenerator />
                <Route path=StaticSegment("final-policy") view=FinalPolicy />
            </Routes>
            <ChatWidget />
        </Router>
    }
}
