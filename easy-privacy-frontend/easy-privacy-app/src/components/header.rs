use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_router::components::A;

/// Brand bar shown on every wizard view. Navigation links are passed as children.
#[component]
pub fn Header(children: Children) -> impl IntoView {
    view! {
        <header class="px-4 lg:px-6 h-16 flex items-center border-b border-gray-200">
            <A href="/" attr:class="flex items-center justify-center">
                <Icon icon=i::BsShieldCheck width="2em" height="2em" style="color: #2563eb" />
                <span class="ml-2 text-xl font-bold text-blue-600">"Easy Privacy"</span>
            </A>
            <nav class="ml-auto flex gap-6">{children()}</nav>
        </header>
    }
}

#[component]
pub fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            class="text-sm font-medium text-gray-600 hover:text-blue-600 transition-colors"
            href=href
        >
            {label}
        </a>
    }
}
