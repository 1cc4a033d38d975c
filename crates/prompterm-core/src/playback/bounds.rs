//! Content height tracking.
//!
//! The view layer re-measures the wrapped script whenever layout inputs
//! change (font size, script edits, terminal resize) and pushes the new row
//! count here. Reports are deduplicated so a steady layout produces no churn;
//! the engine reads `latest()` each tick and keeps its previous height when
//! nothing has been reported yet.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

struct Listener {
    alive: Rc<Cell<bool>>,
    callback: Box<dyn FnMut(f64)>,
}

#[derive(Default)]
struct Inner {
    latest: Option<f64>,
    listeners: Vec<Listener>,
}

/// Push-based tracker for the scrollable content height.
///
/// Single-threaded by design: ticks and layout reports all happen on the one
/// rendering loop, so interior mutability is enough and reports never race a
/// tick.
#[derive(Default)]
pub struct ContentBoundsTracker {
    inner: Rc<RefCell<Inner>>,
}

/// Subscription guard returned by [`ContentBoundsTracker::subscribe`].
///
/// Dropping the guard deregisters the callback; no notification is delivered
/// after the drop.
pub struct BoundsSubscription {
    alive: Rc<Cell<bool>>,
}

impl Drop for BoundsSubscription {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl ContentBoundsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a freshly measured content height.
    ///
    /// Non-finite or negative values and repeats of the last reported value
    /// are ignored; anything else is stored and pushed to subscribers.
    pub fn report(&self, height: f64) {
        if !height.is_finite() || height < 0.0 {
            return;
        }

        // Listeners run outside the borrow so a callback may read latest()
        // or subscribe without re-entering the RefCell.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.latest == Some(height) {
                return;
            }
            inner.latest = Some(height);
            std::mem::take(&mut inner.listeners)
        };

        trace!(height, "content height changed");
        for listener in listeners.iter_mut() {
            if listener.alive.get() {
                (listener.callback)(height);
            }
        }

        let mut inner = self.inner.borrow_mut();
        listeners.append(&mut inner.listeners);
        listeners.retain(|l| l.alive.get());
        inner.listeners = listeners;
    }

    /// Most recently reported height, if any has arrived yet
    pub fn latest(&self) -> Option<f64> {
        self.inner.borrow().latest
    }

    /// Register a callback invoked on every deduplicated height change.
    ///
    /// The returned guard must be kept alive for as long as notifications are
    /// wanted; dropping it releases the registration.
    #[must_use]
    pub fn subscribe(&self, callback: impl FnMut(f64) + 'static) -> BoundsSubscription {
        let alive = Rc::new(Cell::new(true));
        self.inner.borrow_mut().listeners.push(Listener {
            alive: Rc::clone(&alive),
            callback: Box::new(callback),
        });
        BoundsSubscription { alive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_starts_empty() {
        let tracker = ContentBoundsTracker::new();
        assert_eq!(tracker.latest(), None);
    }

    #[test]
    fn test_report_and_dedup() {
        let tracker = ContentBoundsTracker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = tracker.subscribe(move |h| sink.borrow_mut().push(h));

        tracker.report(100.0);
        tracker.report(100.0);
        tracker.report(250.0);

        assert_eq!(tracker.latest(), Some(250.0));
        assert_eq!(*seen.borrow(), vec![100.0, 250.0]);
    }

    #[test]
    fn test_invalid_reports_ignored() {
        let tracker = ContentBoundsTracker::new();
        tracker.report(f64::NAN);
        tracker.report(-1.0);
        tracker.report(f64::INFINITY);
        assert_eq!(tracker.latest(), None);

        tracker.report(80.0);
        tracker.report(f64::NAN);
        assert_eq!(tracker.latest(), Some(80.0));
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let tracker = ContentBoundsTracker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = tracker.subscribe(move |h| sink.borrow_mut().push(h));

        tracker.report(10.0);
        drop(sub);
        tracker.report(20.0);

        assert_eq!(*seen.borrow(), vec![10.0]);
    }

    #[test]
    fn test_callback_may_read_latest() {
        let tracker = ContentBoundsTracker::new();
        let inner = Rc::clone(&tracker.inner);
        let seen = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&seen);
        let _sub = tracker.subscribe(move |_| {
            sink.set(inner.borrow().latest.unwrap_or_default());
        });

        tracker.report(42.0);
        assert_eq!(seen.get(), 42.0);
    }
}
