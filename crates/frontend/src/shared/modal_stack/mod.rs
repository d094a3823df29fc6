mod stack;

pub use stack::{ModalId, ModalStack};

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    builder: ModalBuilder,
    modal_style: Option<String>,
}

/// A handle returned by `ModalStackService::push`.
///
/// Can be cloned and used inside event handlers to close the modal.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: ModalId,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }

    pub fn id(&self) -> ModalId {
        self.id
    }
}

/// Stack of overlays shown above the current view.
///
/// - Escape and backdrop clicks close one overlay (Escape: the topmost)
/// - Only the topmost overlay is interactive; the ones below are `inert`
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<ModalStack<ModalEntry>>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(ModalStack::new()),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: the overlay may be removed from inside its own DOM event dispatch.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_frame(None, builder)
    }

    /// Push a new modal with a style override for the modal surface.
    pub fn push_with_frame<F>(&self, modal_style: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let entry = ModalEntry {
            builder: Arc::new(builder),
            modal_style,
        };
        let id = self
            .stack
            .try_update(|s| s.push(entry))
            .unwrap_or_default();
        log::debug!("modal {} opened, depth {}", id, self.stack.with_untracked(|s| s.len()));

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: ModalId) {
        self.stack.update(|s| {
            if s.close(id) {
                log::debug!("modal {} closed", id);
            }
        });
    }

    pub fn close_deferred(&self, id: ModalId) {
        self.defer(move |svc| svc.close(id));
    }

    /// Close the topmost overlay only.
    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }

    /// Close every overlay.
    pub fn clear(&self) {
        self.stack.update(|s| {
            s.clear();
        });
    }

    pub fn clear_deferred(&self) {
        self.defer(|svc| svc.clear());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    // Global Escape handler: closes only the topmost modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost is mounted once for the whole app lifetime; keep closure alive.
            closure.forget();
        }
    });

    let top_id = Memo::new(move |_| svc.stack.with(|s| s.top_id()));

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack.with(|s| {
                        s.iter()
                            .enumerate()
                            .map(|(idx, (id, entry))| (idx, id, entry.clone()))
                            .collect::<Vec<_>>()
                    })
                }
                key=|(_, id, _)| *id
                children=move |(idx, id, entry)| {
                    let z_index = 1000 + idx as i32;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let is_topmost = Signal::derive(move || top_id.get() == Some(id));

                    let handle = ModalHandle { id, svc };
                    let view = (entry.builder)(handle);
                    let modal_style = entry.modal_style.clone().unwrap_or_default();

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            is_topmost=is_topmost
                            modal_style=modal_style
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
