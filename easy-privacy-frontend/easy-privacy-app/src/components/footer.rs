use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full py-6 bg-gray-100 border-t border-gray-200">
            <div class="container px-4 md:px-6 mx-auto flex flex-col sm:flex-row justify-between items-center">
                <p class="text-sm text-gray-600">"© 2024 Easy Privacy. All rights reserved."</p>
            </div>
        </footer>
    }
}
