//! UI Event Bus
//!
//! Shared publish/subscribe hub for transient alerts, confirmation dialogs
//! and sidebar-refresh signals. One instance is created at startup and
//! handed to every component; events are routed to current subscribers
//! and then discarded, so nothing is buffered for late subscribers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Severity of a transient alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Error,
    Warning,
}

/// A transient alert shown by the presentation host.
#[derive(Clone, Debug, PartialEq)]
pub struct AlertEvent {
    pub level: AlertLevel,
    pub message: String,
}

/// Configuration for a modal confirmation dialog.
///
/// Only one dialog is active at a time; a new request replaces whatever
/// is currently shown.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogRequest {
    pub header: String,
    pub message: String,
    pub left_button: String,
    pub right_button: String,
}

/// Which dialog button the user pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogChoice {
    Left,
    Right,
}

type AlertHandler = Rc<RefCell<dyn FnMut(&AlertEvent)>>;
type DialogHandler = Rc<RefCell<dyn FnMut(Option<&DialogRequest>)>>;
type ResultHandler = Box<dyn FnOnce(DialogChoice)>;
type RefreshHandler = Rc<RefCell<dyn FnMut()>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HandlerKind {
    Alert,
    Dialog,
    Refresh,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    alerts: Vec<(u64, AlertHandler)>,
    dialogs: Vec<(u64, DialogHandler)>,
    results: Vec<ResultHandler>,
    refreshes: Vec<(u64, RefreshHandler)>,
}

impl Registry {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn remove(&mut self, kind: HandlerKind, id: u64) {
        match kind {
            HandlerKind::Alert => self.alerts.retain(|(hid, _)| *hid != id),
            HandlerKind::Dialog => self.dialogs.retain(|(hid, _)| *hid != id),
            HandlerKind::Refresh => self.refreshes.retain(|(hid, _)| *hid != id),
        }
    }
}

/// Handle for an active subscription.
///
/// Dropping the handle leaves the subscription alive (app-lifetime
/// subscribers just discard it); call [`Subscription::cancel`] to stop
/// receiving events.
pub struct Subscription {
    id: u64,
    kind: HandlerKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn cancel(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.kind, self.id);
        }
    }
}

/// The event hub itself. Cheap to clone; all clones share one registry.
#[derive(Clone)]
pub struct UiEvents {
    registry: Rc<RefCell<Registry>>,
}

impl UiEvents {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    // ============ Alerts ============

    /// Publish an alert to all current alert subscribers, synchronously
    /// and in registration order. With no subscribers this is a no-op.
    pub fn alert(&self, level: AlertLevel, message: impl Into<String>) {
        let event = AlertEvent {
            level,
            message: message.into(),
        };

        // Snapshot before invoking so handlers can subscribe or cancel
        // during delivery without holding the registry borrow.
        let handlers: Vec<AlertHandler> = self
            .registry
            .borrow()
            .alerts
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        for handler in handlers {
            (handler.borrow_mut())(&event);
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.alert(AlertLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.alert(AlertLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.alert(AlertLevel::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.alert(AlertLevel::Warning, message);
    }

    pub fn subscribe_alerts(&self, handler: impl FnMut(&AlertEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id();
        registry.alerts.push((id, Rc::new(RefCell::new(handler))));
        self.subscription(id, HandlerKind::Alert)
    }

    // ============ Dialogs ============

    /// Show a confirmation dialog. Subscribers receive `Some(request)`;
    /// a request while another dialog is open means "close it, show this".
    pub fn request_dialog(&self, request: DialogRequest) {
        self.notify_dialog(Some(&request));
    }

    /// Hide any open dialog without producing a result.
    pub fn close_dialog(&self) {
        self.notify_dialog(None);
    }

    pub fn subscribe_dialog(
        &self,
        handler: impl FnMut(Option<&DialogRequest>) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id();
        registry.dialogs.push((id, Rc::new(RefCell::new(handler))));
        self.subscription(id, HandlerKind::Dialog)
    }

    /// Deliver the user's choice to every pending one-shot listener and
    /// consume them. Listeners registered during delivery wait for the
    /// next resolution.
    pub fn resolve_dialog(&self, choice: DialogChoice) {
        let pending: Vec<ResultHandler> = std::mem::take(&mut self.registry.borrow_mut().results);
        for handler in pending {
            handler(choice);
        }
    }

    /// Register for exactly the next dialog result. The listener is
    /// removed before it runs, so it can never fire twice.
    pub fn once_dialog_result(&self, handler: impl FnOnce(DialogChoice) + 'static) {
        self.registry.borrow_mut().results.push(Box::new(handler));
    }

    // ============ Sidebar ============

    /// Signal list views to re-fetch their backing collection.
    pub fn request_sidebar_refresh(&self) {
        let handlers: Vec<RefreshHandler> = self
            .registry
            .borrow()
            .refreshes
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    pub fn subscribe_sidebar_refresh(&self, handler: impl FnMut() + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id();
        registry.refreshes.push((id, Rc::new(RefCell::new(handler))));
        self.subscription(id, HandlerKind::Refresh)
    }

    // ============ Internals ============

    fn notify_dialog(&self, request: Option<&DialogRequest>) {
        let handlers: Vec<DialogHandler> = self
            .registry
            .borrow()
            .dialogs
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        for handler in handlers {
            (handler.borrow_mut())(request);
        }
    }

    fn subscription(&self, id: u64, kind: HandlerKind) -> Subscription {
        Subscription {
            id,
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }
}

impl Default for UiEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_bus() -> (UiEvents, Rc<RefCell<Vec<String>>>) {
        (UiEvents::new(), Rc::new(RefCell::new(Vec::new())))
    }

    #[test]
    fn test_alert_delivery_in_registration_order() {
        let (bus, log) = recording_bus();

        let log_a = Rc::clone(&log);
        bus.subscribe_alerts(move |event| {
            log_a.borrow_mut().push(format!("a:{}", event.message));
        });
        let log_b = Rc::clone(&log);
        bus.subscribe_alerts(move |event| {
            log_b.borrow_mut().push(format!("b:{}", event.message));
        });

        bus.success("saved");

        assert_eq!(*log.borrow(), vec!["a:saved", "b:saved"]);
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = UiEvents::new();
        bus.error("nobody listening");
        bus.request_sidebar_refresh();
        bus.resolve_dialog(DialogChoice::Right);
    }

    #[test]
    fn test_cancel_stops_delivery() {
        let (bus, log) = recording_bus();

        let log_a = Rc::clone(&log);
        let sub = bus.subscribe_alerts(move |event| {
            log_a.borrow_mut().push(event.message.clone());
        });

        bus.info("first");
        sub.cancel();
        bus.info("second");

        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn test_dialog_request_and_close() {
        let (bus, log) = recording_bus();

        let log_host = Rc::clone(&log);
        bus.subscribe_dialog(move |request| {
            log_host.borrow_mut().push(match request {
                Some(req) => format!("show:{}", req.header),
                None => "hide".to_string(),
            });
        });

        bus.request_dialog(DialogRequest {
            header: "Delete?".to_string(),
            message: "Confirm deleting this entry.".to_string(),
            left_button: "Cancel".to_string(),
            right_button: "Confirm".to_string(),
        });
        bus.close_dialog();

        assert_eq!(*log.borrow(), vec!["show:Delete?", "hide"]);
    }

    #[test]
    fn test_once_result_fires_exactly_once() {
        let bus = UiEvents::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_inner = Rc::clone(&seen);
        bus.once_dialog_result(move |choice| {
            seen_inner.borrow_mut().push(choice);
        });

        bus.resolve_dialog(DialogChoice::Right);
        bus.resolve_dialog(DialogChoice::Left);

        assert_eq!(*seen.borrow(), vec![DialogChoice::Right]);
    }

    #[test]
    fn test_all_pending_one_shots_consume_the_same_result() {
        let (bus, log) = recording_bus();

        let log_a = Rc::clone(&log);
        bus.once_dialog_result(move |_| log_a.borrow_mut().push("a".to_string()));
        let log_b = Rc::clone(&log);
        bus.once_dialog_result(move |_| log_b.borrow_mut().push("b".to_string()));

        bus.resolve_dialog(DialogChoice::Left);
        bus.resolve_dialog(DialogChoice::Left);

        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_subscriber_added_during_delivery_waits_for_next_event() {
        let (bus, log) = recording_bus();
        let added = Rc::new(RefCell::new(false));

        let bus_inner = bus.clone();
        let log_outer = Rc::clone(&log);
        bus.subscribe_alerts(move |event| {
            log_outer.borrow_mut().push(format!("outer:{}", event.message));
            if !*added.borrow() {
                *added.borrow_mut() = true;
                let log_late = Rc::clone(&log_outer);
                bus_inner.subscribe_alerts(move |event| {
                    log_late.borrow_mut().push(format!("late:{}", event.message));
                });
            }
        });

        bus.info("one");
        assert_eq!(*log.borrow(), vec!["outer:one"]);

        bus.info("two");
        assert_eq!(*log.borrow(), vec!["outer:one", "outer:two", "late:two"]);
    }

    #[test]
    fn test_one_shot_registered_during_resolution_waits() {
        let bus = UiEvents::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let bus_inner = bus.clone();
        let seen_outer = Rc::clone(&seen);
        bus.once_dialog_result(move |choice| {
            seen_outer.borrow_mut().push(("first", choice));
            let seen_late = Rc::clone(&seen_outer);
            bus_inner.once_dialog_result(move |choice| {
                seen_late.borrow_mut().push(("second", choice));
            });
        });

        bus.resolve_dialog(DialogChoice::Right);
        assert_eq!(*seen.borrow(), vec![("first", DialogChoice::Right)]);

        bus.resolve_dialog(DialogChoice::Left);
        assert_eq!(
            *seen.borrow(),
            vec![("first", DialogChoice::Right), ("second", DialogChoice::Left)]
        );
    }

    #[test]
    fn test_sidebar_refresh_signal() {
        let bus = UiEvents::new();
        let count = Rc::new(RefCell::new(0));

        let count_inner = Rc::clone(&count);
        bus.subscribe_sidebar_refresh(move || {
            *count_inner.borrow_mut() += 1;
        });

        bus.request_sidebar_refresh();
        bus.request_sidebar_refresh();

        assert_eq!(*count.borrow(), 2);
    }
}
