//! Floating chat assistant widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted on every page. Visibility lives in `PageState` so the binding
//! table (`[data-toggle-chat]`) and the widget's own buttons flip the same
//! flag.

use leptos::prelude::*;

use crate::actions::{send_message, show_raise_ticket, suggest_question, toggle_chat};
use crate::app::PageContext;
use crate::state::chat::{ChatMessage, Sender};
use crate::state::page::PageState;
use crate::util::markdown::render_answer_html;

const SUGGESTIONS: &[&str] = &[
    "How do I upload a document?",
    "How is the genre of my document decided?",
    "How do I report a problem?",
];

/// Chat panel plus its launcher button.
#[component]
pub fn ChatWidget(ctx: PageContext) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let visible = move || ctx.page.with(PageState::chat_visible);

    // Focus the input a beat after opening so the slide-in transition starts first.
    Effect::new(move |was_visible: Option<bool>| {
        let now_visible = ctx.page.with(PageState::chat_visible);
        if now_visible && was_visible != Some(true) {
            #[cfg(feature = "csr")]
            {
                let delay = ctx.config.with_value(|c| c.chat_focus_delay_ms);
                leptos::task::spawn_local(async move {
                    crate::util::timer::sleep_ms(delay).await;
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                });
            }
        }
        now_visible
    });

    Effect::new(move || {
        let _ = ctx.chat.with(|c| c.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_keypress = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send_message(ctx);
        }
    };

    view! {
        <div id="chatWidget" class="chat-widget" class:active=visible>
            <div class="chat-header">
                <span class="chat-title">
                    <i class="fas fa-robot"></i>
                    " Pixi Assistant"
                </span>
                <button class="chat-close" on:click=move |_| toggle_chat(ctx) title="Close chat">
                    "✕"
                </button>
            </div>

            <div id="chatMessages" class="chat-messages" node_ref=messages_ref>
                <For
                    each=move || ctx.chat.with(|c| c.messages.clone())
                    key=|msg| msg.id
                    children=message_view
                />
            </div>

            <Show when=move || ctx.chat.with(|c| c.messages.is_empty())>
                <div class="chat-suggestions">
                    {SUGGESTIONS
                        .iter()
                        .map(|question| {
                            view! {
                                <button
                                    class="suggestion-chip"
                                    on:click=move |_| suggest_question(ctx, (*question).to_owned())
                                >
                                    {*question}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <div class="chat-input-row">
                <input
                    id="chatInput"
                    class="chat-input"
                    type="text"
                    placeholder="Ask me anything..."
                    node_ref=input_ref
                    prop:value=move || ctx.chat.with(|c| c.draft.clone())
                    on:input=move |ev| ctx.chat.update(|c| c.draft = event_target_value(&ev))
                    on:keypress=on_keypress
                />
                <button class="chat-send" on:click=move |_| send_message(ctx) title="Send">
                    <i class="fas fa-paper-plane"></i>
                </button>
            </div>

            <button class="chat-raise-ticket" on:click=move |_| show_raise_ticket(ctx)>
                "Still stuck? Raise a ticket"
            </button>
        </div>

        <button class="chat-launcher" class:active=visible on:click=move |_| toggle_chat(ctx) title="Chat with Pixi">
            <i class="fas fa-comments"></i>
        </button>
    }
}

fn message_view(msg: ChatMessage) -> impl IntoView {
    let body = match msg.sender {
        Sender::User => view! { <p>{msg.text}</p> }.into_any(),
        Sender::Bot => view! { <div class="message-markdown" inner_html=render_answer_html(&msg.text)></div> }.into_any(),
    };

    view! {
        <div class=format!("message {}", msg.sender.css_class())>
            <div class="message-avatar">
                <i class=format!("fas {}", msg.sender.icon())></i>
            </div>
            <div class="message-content">{body}</div>
        </div>
    }
}
