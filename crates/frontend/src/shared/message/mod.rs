//! Transient toast-style messages.
//!
//! Every user action reports its own outcome here; messages disappear after
//! [`MESSAGE_TIMEOUT_MS`].

use crate::shared::config::MESSAGE_TIMEOUT_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
            MessageKind::Info => "message info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub kind: MessageKind,
}

/// Messages currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct MessageQueue {
    items: Vec<Message>,
    next_id: u64,
}

impl MessageQueue {
    pub fn push(&mut self, text: String, kind: MessageKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Message { id, text, kind });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|m| m.id != id);
    }

    pub fn items(&self) -> &[Message] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct MessageService {
    queue: RwSignal<MessageQueue>,
}

impl MessageService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(MessageQueue::default()),
        }
    }

    pub fn show(&self, text: impl Into<String>, kind: MessageKind) {
        let text = text.into();
        if kind == MessageKind::Error {
            log::warn!("{}", text);
        }
        let Some(id) = self.queue.try_update(|q| q.push(text, kind)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text, MessageKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text, MessageKind::Error);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(text, MessageKind::Info);
    }
}

impl Default for MessageService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_messages() -> MessageService {
    use_context::<MessageService>().expect("MessageService not provided in context")
}

#[component]
pub fn MessageHost() -> impl IntoView {
    let svc = use_messages();

    view! {
        <div id="message-container" class="message-container">
            <For
                each=move || svc.queue.with(|q| q.items().to_vec())
                key=|m| m.id
                children=move |m| {
                    view! { <div class=m.kind.css_class()>{m.text}</div> }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_dismisses_by_id() {
        let mut q = MessageQueue::default();
        let first = q.push("保存しました".into(), MessageKind::Success);
        let second = q.push("ネットワークエラーが発生しました".into(), MessageKind::Error);
        q.dismiss(first);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, second);
        q.dismiss(first);
        assert_eq!(q.items().len(), 1);
    }
}
