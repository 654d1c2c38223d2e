//! Demo Chat Widget

use leptos::{html, prelude::*};
use platform_core::{ChatSession, Message, Responder};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api;
use crate::components::{MessageBubble, SectionHeading, TypingIndicator};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let session = RwSignal::new(ChatSession::with_locale(api::page_locale()));

    // Each memo only notifies when its own slice changes
    let messages = Memo::new(move |_| session.with(|s| s.transcript().messages().to_vec()));
    let revision = Memo::new(move |_| session.with(ChatSession::revision));
    let awaiting = Memo::new(move |_| session.with(ChatSession::is_awaiting_reply));

    let transcript_end = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        revision.track();
        if let Some(anchor) = transcript_end.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            anchor.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send = move || {
        let Some(turn) = session.try_update(ChatSession::submit_draft).flatten() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = api::responder().respond(turn.request()).await;
            session.update(|s| {
                s.settle(turn, outcome);
            });
        });
    };

    view! {
        <section id="demo" class="section demo">
            <SectionHeading
                title="Interactive demo"
                subtitle="Try the model's capabilities right now"
            />

            <div class="card chat">
                <header class="card-header">
                    <h3>"Chat with the LLM"</h3>
                    <p>"Ask anything and get an answer in real time"</p>
                </header>

                <div class="transcript">
                    <Show
                        when=move || !messages.with(Vec::is_empty)
                        fallback=|| view! {
                            <div class="chat-empty">
                                <p>"Start a conversation with the model"</p>
                            </div>
                        }
                    >
                        <div class="messages">
                            <For
                                each=move || messages.get().into_iter().enumerate()
                                key=|(idx, _)| *idx
                                children=|(_, message): (usize, Message)| view! { <MessageBubble message=message /> }
                            />
                            <Show when=move || awaiting.get()>
                                <TypingIndicator />
                            </Show>
                            <div class="transcript-end" node_ref=transcript_end></div>
                        </div>
                    </Show>
                </div>

                <div class="input-area">
                    <input
                        type="text"
                        placeholder="Write a message..."
                        prop:value=move || session.with(|s| s.draft().to_owned())
                        on:input=move |ev| session.update(|s| s.update_draft(event_target_value(&ev)))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                send();
                            }
                        }
                    />
                    <button on:click=move |_| send() disabled=move || awaiting.get()>
                        "Send"
                    </button>
                </div>
            </div>
        </section>
    }
}
