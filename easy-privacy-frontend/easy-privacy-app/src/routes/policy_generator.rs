use crate::components::{
    entry_table::EntryTable,
    form_error::FormError,
    header::{Header, NavLink},
    industry_select::IndustrySelect,
    meta::{MetaDescription, MetaTitle},
};
use easy_privacy_types::{editor::EntryEditor, wizard::WizardQuery};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn PolicyGenerator() -> impl IntoView {
    let query = use_query_map();
    // the URL only seeds the editor, later query changes do not reset edits
    let editor = RwSignal::new(query.with_untracked(|query| {
        EntryEditor::from_query(&WizardQuery::from_lookup(|key| query.get(key)))
    }));
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    let generate = move |_| match editor.with(EntryEditor::submit) {
        Ok(href) => {
            set_error.set(None);
            navigate(&href, Default::default());
        }
        Err(e) => {
            log::debug!("policy not generated: {e}");
            set_error.set(Some(e.to_string()));
        }
    };

    view! {
        <MetaTitle title="Policy Generator - Easy Privacy" />
        <MetaDescription text="Tell us what personal data you collect and why." />
        <div class="flex flex-col min-h-screen bg-white text-gray-800">
            <Header>
                <NavLink href="/" label="Home" />
                <NavLink href="/#faq" label="FAQs" />
            </Header>
            <main class="flex-1">
                <div class="container px-4 md:px-6 mx-auto py-12">
                    <div class="space-y-4">
                        <div class="space-y-2">
                            <label for="companyName" class="text-sm font-medium text-gray-700">
                                "Company Name"
                            </label>
                            <input
                                id="companyName"
                                class=INPUT_CLASS
                                value=editor.with_untracked(|e| e.company_name().to_string())
                                prop:value=move || editor.with(|e| e.company_name().to_string())
                                on:input=move |ev| {
                                    editor.update(|e| e.set_company_name(event_target_value(&ev)))
                                }
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="industry" class="text-sm font-medium text-gray-700">
                                "Select an industry"
                            </label>
                            <IndustrySelect
                                selected=Signal::derive(move || {
                                    editor.with(|e| e.industry().to_string())
                                })
                                on_select=move |value: String| {
                                    editor.update(|e| e.change_industry(value))
                                }
                            />
                        </div>
                        <div class="space-y-2">
                            <label for="emailId" class="text-sm font-medium text-gray-700">
                                "Email ID"
                            </label>
                            <input
                                id="emailId"
                                type="email"
                                class=INPUT_CLASS
                                prop:value=move || editor.with(|e| e.email_id().to_string())
                                on:input=move |ev| {
                                    editor.update(|e| e.set_email_id(event_target_value(&ev)))
                                }
                            />
                        </div>
                        <EntryTable editor />
                        <FormError message=error />
                        <button
                            class="mt-6 px-6 py-2 text-md font-medium text-white bg-blue-600 rounded-md hover:bg-green-700 transition-colors"
                            on:click=generate
                        >
                            "Generate Policy Document"
                        </button>
                    </div>
                </div>
            </main>
        </div>
    }
}
