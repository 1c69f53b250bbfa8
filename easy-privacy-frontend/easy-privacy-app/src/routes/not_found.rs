use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found - Easy Privacy" />
        <div class="flex flex-col items-center justify-center min-h-[80vh] text-center space-y-6 p-4">
            <h1 class="text-4xl font-extrabold tracking-tight text-blue-800">"Page not found"</h1>
            <p class="text-lg text-gray-600">
                "The page you are looking for does not exist."
            </p>
            <A href="/" attr:class="px-6 py-3 text-base font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700">
                "Back to Easy Privacy"
            </A>
        </div>
    }
}
