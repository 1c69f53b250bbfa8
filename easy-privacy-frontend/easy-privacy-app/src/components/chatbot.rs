use easy_privacy_types::chat::{ChatTranscript, Turn, RESPONSE_DELAY};
use icondata as i;
use leptos::{
    ev::KeyboardEvent,
    html::Div,
    leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle},
    prelude::*,
};
use leptos_icons::Icon;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Reply timers that have not fired yet, keyed by a per-widget id.
#[derive(Debug)]
struct PendingTimers<H> {
    next_id: u64,
    handles: Vec<(u64, H)>,
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handles: Vec::new(),
        }
    }
}

impl<H> PendingTimers<H> {
    fn reserve(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn track(&mut self, id: u64, handle: H) {
        self.handles.push((id, handle));
    }

    fn finish(&mut self, id: u64) {
        self.handles.retain(|(pending, _)| *pending != id);
    }

    fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.handles.drain(..).map(|(_, handle)| handle)
    }

    fn len(&self) -> usize {
        self.handles.len()
    }
}

/// Floating, collapsible chat panel with canned replies.
///
/// Replies are scheduled with timeout handles owned by this component; the handles are
/// cleared when it is disposed, and a reply that still races disposal writes through
/// `try_update`, so it lands nowhere instead of panicking.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (input, set_input) = signal(String::new());
    let transcript = RwSignal::new(ChatTranscript::new());
    let timers = StoredValue::new(PendingTimers::<TimeoutHandle>::default());
    let end_of_messages = NodeRef::<Div>::new();

    on_cleanup(move || {
        timers.try_update_value(|timers| {
            for timer in timers.drain() {
                timer.clear();
            }
        });
    });

    let send = move || {
        let text = input.get_untracked();
        let Some(reply) = transcript.try_update(|t| t.send(&text)).flatten() else {
            return;
        };
        set_input.set(String::new());
        let Some(id) = timers.try_update_value(PendingTimers::reserve) else {
            return;
        };
        match set_timeout_with_handle(
            move || {
                timers.try_update_value(|timers| timers.finish(id));
                transcript.try_update(|t| t.resolve(reply));
            },
            RESPONSE_DELAY,
        ) {
            Ok(timer) => timers.update_value(|timers| timers.track(id, timer)),
            Err(e) => log::error!("unable to schedule chat reply {e:?}"),
        }
        log::debug!(
            "chat reply scheduled, {} pending",
            timers.with_value(PendingTimers::len)
        );
    };

    Effect::new(move |_| {
        transcript.track();
        open.track();
        if let Some(end) = end_of_messages.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    view! {
        <div class="fixed bottom-5 right-5 z-50">
            <Show
                when=move || open.get()
                fallback=move || {
                    view! {
                        <div
                            class="bg-blue-600 text-white rounded-lg flex items-center p-2 px-4 w-96 cursor-pointer"
                            on:click=move |_| set_open.set(true)
                        >
                            <h2 class="text-lg font-bold">"Chatbot"</h2>
                            <span class="ml-auto">
                                <Icon icon=i::BiChevronUpRegular width="1.2em" height="1.2em" />
                            </span>
                        </div>
                    }
                }
            >
                <div class="bg-white border border-gray-300 rounded-lg shadow-lg p-4 w-96">
                    <div
                        class="flex justify-between items-center mb-2 cursor-pointer"
                        on:click=move |_| set_open.set(false)
                    >
                        <h2 class="text-lg font-bold">"Chatbot"</h2>
                        <Icon icon=i::BiChevronDownRegular width="1.2em" height="1.2em" />
                    </div>
                    <div class="h-80 overflow-y-auto overscroll-contain mb-4">
                        <For
                            each=move || {
                                transcript
                                    .with(|t| t.turns().iter().cloned().enumerate().collect::<Vec<_>>())
                            }
                            key=|(index, _)| *index
                            children=|(_, turn)| view! { <ChatBubble turn /> }
                        />
                        <Show when=move || transcript.with(ChatTranscript::is_composing)>
                            <div class="flex justify-center my-3">
                                <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-blue-500"></div>
                            </div>
                        </Show>
                        <div node_ref=end_of_messages></div>
                    </div>
                    <div class="flex">
                        <input
                            type="text"
                            placeholder="Type a message..."
                            class="flex-1 border border-gray-300 rounded-l-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-blue-500"
                            prop:value=input
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev: KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button
                            class="bg-blue-600 text-white rounded-r-lg px-4 hover:bg-blue-700 transition"
                            on:click=move |_| send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ChatBubble(turn: Turn) -> impl IntoView {
    let text = turn.text().to_string();
    if turn.is_user() {
        view! {
            <div class="my-3 flex justify-end">
                <div class="flex items-center">
                    <div class="inline-block max-w-[80%] px-3 py-2 rounded-lg bg-blue-500 text-white text-sm leading-tight">
                        {text}
                    </div>
                    <div class="w-8 h-8 bg-blue-500 rounded-full flex items-center justify-center ml-1 text-white">
                        <Icon icon=i::FaUserSolid />
                    </div>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="my-3 flex justify-start">
                <div class="flex items-center">
                    <div class="w-8 h-8 bg-gray-300 rounded-full flex items-center justify-center mr-1 text-gray-600">
                        <Icon icon=i::FaRobotSolid />
                    </div>
                    <div class="inline-block max-w-[80%] px-3 py-2 rounded-lg bg-gray-200 text-gray-800 text-sm leading-tight">
                        {text}
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
