use leptos::{prelude::*, text_prop::TextProp};
use leptos_meta::*;

#[component]
pub fn MetaTitle(#[prop(into)] title: TextProp) -> impl IntoView {
    view! {
        <Title text=title.clone() />
        <Meta name="og:title" content=title />
    }
}

/// Page summary for search results and link previews.
#[component]
pub fn MetaDescription(#[prop(into)] text: TextProp) -> impl IntoView {
    view! {
        <Meta name="og:description" property="og:description" content=text.clone() />
        <Meta name="description" content=text />
    }
}
