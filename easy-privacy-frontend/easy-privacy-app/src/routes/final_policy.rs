use crate::components::meta::{MetaDescription, MetaTitle};
use easy_privacy_types::{
    policy::{Clause, PolicyDocument, Segment, CLAUSES, INTRO, PURPOSES_HEADING},
    wizard::{WizardQuery, WizardState},
};
use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_router::hooks::use_query_map;

/// Read-only rendering of the privacy notice described by the current URL.
#[component]
pub fn FinalPolicy() -> impl IntoView {
    let query = use_query_map();
    let document = Memo::new(move |_| {
        query.with(|query| {
            let query = WizardQuery::from_lookup(|key| query.get(key));
            PolicyDocument::new(WizardState::from_query(&query))
        })
    });
    let title = move || document.with(PolicyDocument::title);

    view! {
        <MetaTitle title=title />
        <MetaDescription text=title />
        <div class="flex flex-col items-center justify-center min-h-screen py-6 bg-gray-100">
            <div class="container mx-auto p-8 bg-white shadow-lg rounded-lg text-left">
                <h1 class="text-2xl font-bold mb-6 text-center">{title}</h1>
                {INTRO
                    .iter()
                    .enumerate()
                    .map(|(index, &paragraph)| {
                        let class = if index == 0 { "text-lg" } else { "mt-4 text-lg" };
                        view! {
                            <p class=class>
                                <Segments document segments=paragraph />
                            </p>
                        }
                    })
                    .collect_view()}
                <div class="mt-6">
                    <h2 class="text-lg mb-4">{PURPOSES_HEADING}</h2>
                    <ol class="list-decimal list-inside">
                        <For
                            each=move || {
                                document
                                    .with(|d| d.purposes().iter().cloned().enumerate().collect::<Vec<_>>())
                            }
                            key=|row| row.clone()
                            children=|(_, entry)| {
                                view! {
                                    <li class="mb-2">
                                        <strong>{entry.data}</strong>
                                        " - "
                                        {entry.purpose}
                                    </li>
                                }
                            }
                        />
                    </ol>
                    {CLAUSES
                        .iter()
                        .map(|clause| view! { <ClauseView document clause /> })
                        .collect_view()}
                </div>
                <DownloadLink document />
            </div>
        </div>
    }
}

#[component]
fn Segments(document: Memo<PolicyDocument>, segments: &'static [Segment]) -> impl IntoView {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => (*text).into_any(),
            interpolated => {
                let interpolated = *interpolated;
                view! {
                    <strong>{move || document.with(|d| d.resolve(&interpolated).to_string())}</strong>
                }
                .into_any()
            }
        })
        .collect_view()
}

#[component]
fn ClauseView(document: Memo<PolicyDocument>, clause: &'static Clause) -> impl IntoView {
    let has_items = !clause.items.is_empty();
    let lead_class = if has_items { "mb-4" } else { "mb-6" };
    view! {
        <h3 class="text-xl font-semibold mb-4 mt-6">{clause.heading}</h3>
        <p class=lead_class>
            <Segments document segments=clause.lead />
        </p>
        <Show when=move || has_items>
            <ul class="list-disc list-inside mb-6">
                {clause
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <strong>{item.label} ":"</strong>
                                " "
                                {item.text}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Show>
    }
}

/// Link to the server-rendered Markdown export of the same notice.
#[component]
fn DownloadLink(document: Memo<PolicyDocument>) -> impl IntoView {
    let href = move || match document.with(|d| d.state().markdown_href()) {
        Ok(href) => Some(href),
        Err(e) => {
            log::error!("unable to build markdown link {e}");
            None
        }
    };

    view! {
        <div class="mt-8 flex justify-center">
            {move || {
                href()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                download="privacy-notice.md"
                                rel="external"
                                class="inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 transition-colors"
                            >
                                <Icon icon=i::BsDownload width="1.2em" height="1.2em" />
                                <span class="ml-2">"Download as Markdown"</span>
                            </a>
                        }
                    })
            }}
        </div>
    }
}
