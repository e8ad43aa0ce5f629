//! Global notification center.
//!
//! The HTTP layer pushes here from plain async functions, outside any
//! component scope, so the queue lives in a thread local rather than in
//! leptos context (the UI runtime is single-threaded).

use leptos::prelude::*;
use std::cell::Cell;
use thaw::*;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u64,
    pub intent: Intent,
    pub text: String,
}

thread_local! {
    static QUEUE: RwSignal<Vec<Message>> = RwSignal::new(Vec::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(1) };
}

fn queue() -> RwSignal<Vec<Message>> {
    QUEUE.with(|q| *q)
}

fn push(intent: Intent, text: &str) {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    let message = Message {
        id,
        intent,
        text: text.to_string(),
    };
    queue().update(|list| list.push(message));

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
        dismiss(id);
    });
}

pub fn error(text: &str) {
    log::warn!("{}", text);
    push(Intent::Error, text);
}

pub fn success(text: &str) {
    push(Intent::Success, text);
}

pub fn dismiss(id: u64) {
    queue().update(|list| list.retain(|m| m.id != id));
}

/// Renders the queue in a fixed corner overlay. Mounted once in `App`.
#[component]
pub fn MessageHost() -> impl IntoView {
    let messages = queue();

    view! {
        <div class="message-host">
            <For
                each=move || messages.get()
                key=|m| m.id
                children=move |m| {
                    let intent = match m.intent {
                        Intent::Error => MessageBarIntent::Error,
                        Intent::Success => MessageBarIntent::Success,
                    };
                    let id = m.id;
                    view! {
                        <MessageBar intent=intent>
                            <div class="message-host__item">
                                <span>{m.text.clone()}</span>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| dismiss(id)
                                >
                                    "✕"
                                </Button>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
