use easy_privacy_types::industry::industry_menu;
use leptos::prelude::*;

/// Industry dropdown emitting canonical keys. The placeholder option emits an empty string.
#[component]
pub fn IndustrySelect(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id="industry"
            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
            on:change=move |ev| on_select.run(event_target_value(&ev))
        >
            <option value="" selected=move || selected.with(String::is_empty)>
                "Select industry"
            </option>
            {industry_menu()
                .map(|(label, key)| {
                    let key = key.as_key();
                    view! {
                        <option value=key selected=move || selected.with(|s| s == key)>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
