use easy_privacy_types::{editor::EntryEditor, EntryField};
use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;

/// Editable data/purpose table.
///
/// Rows are keyed by `(revision, index)`: typing into a cell keeps its row (and focus) alive,
/// while a deletion or an industry switch rebuilds every row so nothing stays attached to a
/// position that now holds a different entry.
#[component]
pub fn EntryTable(editor: RwSignal<EntryEditor>) -> impl IntoView {
    let rows = move || {
        editor.with(|editor| {
            let revision = editor.revision();
            (0..editor.entries().len())
                .map(|index| (revision, index))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <table class="min-w-full mt-6 bg-white border">
            <thead>
                <tr>
                    <th class="py-2 px-4 border-b">"Data"</th>
                    <th class="py-2 px-4 border-b">"Purpose"</th>
                    <th class="border-b"></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|row| *row
                    children=move |(_, index)| view! { <EntryRow editor index /> }
                />
                <tr>
                    <td colspan="2">
                        <button
                            class="flex items-center text-blue-600 hover:text-blue-800 mt-4 ml-2 mb-4"
                            on:click=move |_| editor.update(EntryEditor::add_row)
                        >
                            <Icon icon=i::BiPlusRegular width="1.2em" height="1.2em" />
                            <span class="ml-2">"Add Row"</span>
                        </button>
                    </td>
                    <td></td>
                </tr>
            </tbody>
        </table>
    }
}

#[component]
fn EntryRow(editor: RwSignal<EntryEditor>, index: usize) -> impl IntoView {
    let cell_value = move |editor: &EntryEditor, field: EntryField| {
        editor
            .entries()
            .get(index)
            .map(|entry| entry.field(field).to_string())
            .unwrap_or_default()
    };
    let cell = move |field: EntryField| editor.with(|editor| cell_value(editor, field));
    let initial = move |field: EntryField| editor.with_untracked(|editor| cell_value(editor, field));
    let edit = move |field: EntryField, value: String| {
        editor.update(|editor| editor.edit_cell(index, field, value))
    };

    view! {
        <tr>
            <td class="py-2 px-4 border-b">
                <input
                    type="text"
                    class="w-full px-2 border border-gray-300 rounded-md h-12"
                    aria-label=format!("Row {} data", index + 1)
                    value=initial(EntryField::Data)
                    prop:value=move || cell(EntryField::Data)
                    on:input=move |ev| edit(EntryField::Data, event_target_value(&ev))
                />
            </td>
            <td class="py-2 px-4 border-b">
                <textarea
                    class="w-full px-2 border border-gray-300 rounded-md h-12 resize-none overflow-hidden"
                    rows="2"
                    aria-label=format!("Row {} purpose", index + 1)
                    prop:value=move || cell(EntryField::Purpose)
                    on:input=move |ev| edit(EntryField::Purpose, event_target_value(&ev))
                >
                    {initial(EntryField::Purpose)}
                </textarea>
            </td>
            <td class="py-1 px-1 border-b text-center">
                <button
                    class="text-red-600 hover:text-red-800"
                    aria-label="Delete row"
                    on:click=move |_| {
                        editor
                            .update(|editor| {
                                editor.delete_row(index);
                            })
                    }
                >
                    <Icon icon=i::BiTrashSolid width="1.2em" height="1.2em" />
                </button>
            </td>
        </tr>
    }
}
