use leptos::prelude::*;

/// Inline validation message. Only one is ever shown at a time.
#[component]
pub fn FormError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|message| view! { <p class="text-red-500" role="alert">{message}</p> })
    }
}
