//! Delete Trigger
//!
//! Binds the "delete venue" control: a click sends `DELETE /venues/{id}`,
//! then either replaces the location with the home page or alerts.
//!
//! Collaborators are injected (`VenueApi`, `Page`, the element itself and
//! the task spawner) so the whole flow runs without a browser in tests.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use futures::FutureExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::commands::{venue_path, FetchVenueApi, VenueApi};
use crate::config::TriggerConfig;
use crate::models::{DeletionResult, VenueId};
use crate::page::{BrowserPage, Page};

// ========================
// Element Seams
// ========================

/// The event handed to a click listener
pub trait ClickEvent {
    fn prevent_default(&self);
}

impl ClickEvent for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// The control the trigger binds to
pub trait TriggerElement: Clone + 'static {
    type Event: ClickEvent;
    /// Keeps the listener registered while alive
    type Listener;

    /// Dataset lookup (`data-id` is key `id`)
    fn data(&self, key: &str) -> Option<String>;

    fn listen_click(&self, handler: Box<dyn FnMut(Self::Event)>) -> Self::Listener;
}

impl TriggerElement for HtmlElement {
    type Event = web_sys::Event;
    type Listener = ClickListener;

    fn data(&self, key: &str) -> Option<String> {
        self.dataset().get(key)
    }

    fn listen_click(&self, handler: Box<dyn FnMut(web_sys::Event)>) -> ClickListener {
        let closure = Closure::wrap(handler);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        if let Err(e) = self.add_event_listener_with_callback("click", callback) {
            log::error!("Failed to add click listener: {:?}", e);
        }
        ClickListener {
            element: self.clone(),
            closure: Some(closure),
        }
    }
}

/// Registered DOM click listener. Dropping it unregisters the handler.
pub struct ClickListener {
    element: HtmlElement,
    closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl ClickListener {
    /// Keep the handler registered for the lifetime of the page
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .element
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

// ========================
// Click Task
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertReason {
    /// Server answered with a status other than `true`
    Refused,
    /// Body was not a JSON object
    Malformed,
    /// Request never completed
    Transport,
    HttpStatus(u16),
    /// Trigger carried no identifier; nothing was sent
    MissingId,
}

/// What one click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Navigated { to: String },
    Alerted { reason: AlertReason },
    /// Another request was in flight and overlap is disabled
    Skipped,
    Cancelled,
}

/// Awaitable, cancellable handle for one click.
///
/// Resolves to [`ClickOutcome::Cancelled`] once aborted, without touching
/// the page.
pub struct ClickTask {
    inner: Abortable<LocalBoxFuture<'static, ClickOutcome>>,
    handle: AbortHandle,
}

impl ClickTask {
    fn from_future(fut: impl Future<Output = ClickOutcome> + 'static) -> Self {
        let (handle, registration) = AbortHandle::new_pair();
        Self {
            inner: Abortable::new(fut.boxed_local(), registration),
            handle,
        }
    }

    fn ready(outcome: ClickOutcome) -> Self {
        Self::from_future(futures::future::ready(outcome))
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Future for ClickTask {
    type Output = ClickOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<ClickOutcome> {
        self.inner
            .poll_unpin(cx)
            .map(|res| res.unwrap_or(ClickOutcome::Cancelled))
    }
}

/// Counts a request as in flight until dropped
struct InFlight(Rc<Cell<usize>>);

impl InFlight {
    fn enter(counter: Rc<Cell<usize>>) -> Self {
        counter.set(counter.get() + 1);
        Self(counter)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

// ========================
// Delete Trigger
// ========================

type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

#[derive(Clone)]
pub struct DeleteTrigger {
    config: Rc<TriggerConfig>,
    api: Rc<dyn VenueApi>,
    page: Rc<dyn Page>,
    spawner: Spawner,
    in_flight: Rc<Cell<usize>>,
}

impl DeleteTrigger {
    pub fn new(config: TriggerConfig, api: Rc<dyn VenueApi>, page: Rc<dyn Page>) -> Self {
        Self {
            config: Rc::new(config),
            api,
            page,
            spawner: Rc::new(|fut: LocalBoxFuture<'static, ()>| {
                wasm_bindgen_futures::spawn_local(fut)
            }),
            in_flight: Rc::new(Cell::new(0)),
        }
    }

    /// Trigger wired to `window.fetch` and the real page
    pub fn browser(config: TriggerConfig) -> Self {
        Self::new(config, Rc::new(FetchVenueApi), Rc::new(BrowserPage))
    }

    /// Replace how click tasks started by a bound listener are driven
    pub fn with_spawner(
        mut self,
        spawner: impl Fn(LocalBoxFuture<'static, ()>) + 'static,
    ) -> Self {
        self.spawner = Rc::new(spawner);
        self
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Requests currently awaiting a reply
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Register the click listener. A missing element is a silent no-op.
    pub fn bind<E: TriggerElement>(&self, element: Option<E>) -> Option<E::Listener> {
        let Some(element) = element else {
            log::debug!("No element matches {}, nothing bound", self.config.selector);
            return None;
        };

        let trigger = self.clone();
        let target = element.clone();
        let listener = element.listen_click(Box::new(move |event: E::Event| {
            let task = trigger.click(&target, &event);
            (trigger.spawner)(
                async move {
                    let outcome = task.await;
                    log::debug!("Click finished: {:?}", outcome);
                }
                .boxed_local(),
            );
        }));
        Some(listener)
    }

    /// Handle one click on `element`.
    ///
    /// Default navigation is suppressed before anything else. The returned
    /// task performs the request and the page effect.
    pub fn click<E: TriggerElement>(&self, element: &E, event: &E::Event) -> ClickTask {
        event.prevent_default();

        let Some(id) = element.data(&self.config.id_key) else {
            log::warn!("Trigger has no dataset key '{}', not deleting", self.config.id_key);
            return ClickTask::ready(self.fail(AlertReason::MissingId));
        };
        self.delete(VenueId::new(id))
    }

    /// Delete a venue and apply the page effect
    pub fn delete(&self, id: VenueId) -> ClickTask {
        log::debug!("Delete requested for venue {}", id);

        if !self.config.allow_overlap && self.in_flight.get() > 0 {
            log::debug!("Delete already in flight, ignoring click for venue {}", id);
            return ClickTask::ready(ClickOutcome::Skipped);
        }

        let guard = InFlight::enter(self.in_flight.clone());
        let this = self.clone();
        ClickTask::from_future(async move {
            let _guard = guard;
            this.run(id).await
        })
    }

    async fn run(&self, id: VenueId) -> ClickOutcome {
        let path = venue_path(&self.config.route_template, &id);

        let reply = match self.api.delete_venue(&path).await {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("DELETE {} failed: {}", path, e);
                return self.fail(AlertReason::Transport);
            }
        };

        if !reply.is_ok() {
            log::error!("DELETE {} answered HTTP {}", path, reply.status);
            return self.fail(AlertReason::HttpStatus(reply.status));
        }

        let result = DeletionResult::from_body(&reply.body);
        log::debug!("Venue {} delete status: {}", id, result.raw_status());

        match result {
            DeletionResult::Deleted => {
                self.page.replace_location(&self.config.home_path);
                ClickOutcome::Navigated {
                    to: self.config.home_path.clone(),
                }
            }
            DeletionResult::Refused { status } => {
                log::warn!("Venue {} was not deleted (status: {})", id, status);
                self.fail(AlertReason::Refused)
            }
            DeletionResult::Malformed { reason } => {
                log::error!("Unreadable reply from DELETE {}: {}", path, reason);
                self.fail(AlertReason::Malformed)
            }
        }
    }

    fn fail(&self, reason: AlertReason) -> ClickOutcome {
        self.page.alert(&self.config.failure_message);
        ClickOutcome::Alerted { reason }
    }
}

/// Find the trigger in `document` and bind it
pub fn mount(document: &web_sys::Document, trigger: &DeleteTrigger) -> Option<ClickListener> {
    let selector = &trigger.config().selector;
    let element = match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        Err(e) => {
            log::error!("Invalid trigger selector {}: {:?}", selector, e);
            None
        }
    };
    trigger.bind(element)
}
