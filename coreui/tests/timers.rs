use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use coreui::timer::Timeout;
use coreui::wakeup::WakeupHandle;
use coreui::widgets::{Alert, AlertState};
use coreui::{HandlerRegistry, State, WidgetHandlers};

fn counting_close(count: &Arc<AtomicUsize>) -> WidgetHandlers {
    let count = Arc::clone(count);
    let mut handlers = WidgetHandlers::new();
    handlers.insert(
        "on_close",
        Arc::new(move |_hx| {
            count.fetch_add(1, Ordering::SeqCst);
        }),
    );
    handlers
}

#[tokio::test(start_paused = true)]
async fn test_timeout_fires_once_and_wakes() {
    let wakeup = WakeupHandle::new();
    wakeup.listen();

    let fired = Arc::new(AtomicUsize::new(0));
    let mut timeout = Timeout::new();
    let counter = Arc::clone(&fired);
    timeout.arm(Duration::from_millis(50), wakeup.clone(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(timeout.is_pending());

    wakeup.wait().await;
    // The callback waits for the event loop
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(timeout.is_pending());

    assert_eq!(wakeup.run_pending(), 1);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(!timeout.is_pending());
    assert_eq!(wakeup.run_pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_delay_skips_queued_callback() {
    let wakeup = WakeupHandle::new();
    wakeup.listen();

    let fired = Arc::new(AtomicUsize::new(0));
    let mut timeout = Timeout::new();
    let counter = Arc::clone(&fired);
    timeout.arm(Duration::from_millis(50), wakeup.clone(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    wakeup.wait().await;
    timeout.cancel();
    assert_eq!(wakeup.run_pending(), 1);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_cancel_and_rearm() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut timeout = Timeout::new();

    let counter = Arc::clone(&fired);
    timeout.arm(Duration::from_millis(50), WakeupHandle::new(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    timeout.cancel();
    assert!(!timeout.is_pending());

    // Re-arming replaces the pending callback
    let counter = Arc::clone(&fired);
    timeout.arm(Duration::from_millis(50), WakeupHandle::new(), move || {
        counter.fetch_add(10, Ordering::SeqCst);
    });
    let counter = Arc::clone(&fired);
    timeout.arm(Duration::from_millis(80), WakeupHandle::new(), move || {
        counter.fetch_add(100, Ordering::SeqCst);
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 100);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_timeout_never_fires() {
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let mut timeout = Timeout::new();
        let counter = Arc::clone(&fired);
        timeout.arm(Duration::from_millis(10), WakeupHandle::new(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn test_timeout_outside_runtime_stays_idle() {
    let mut timeout = Timeout::new();
    timeout.arm(Duration::from_millis(1), WakeupHandle::new(), || {});
    assert!(!timeout.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_alert_without_duration_stays_open() {
    let registry = HandlerRegistry::new();
    let state = State::new(AlertState::new());

    Alert::new()
        .title("Saved")
        .state(&state)
        .build(&registry, &WidgetHandlers::new());

    tokio::time::sleep(Duration::from_secs(60)).await;
    state.with(|s| {
        assert!(s.is_open());
        assert!(!s.is_pending());
        assert_eq!(s.closed_count(), 0);
    });
}

#[tokio::test(start_paused = true)]
async fn test_alert_auto_dismisses_exactly_once() {
    let registry = HandlerRegistry::new();
    let state = State::new(AlertState::new());
    let closes = Arc::new(AtomicUsize::new(0));
    let handlers = counting_close(&closes);

    // Rebuilding while open must not restart the countdown
    for _ in 0..3 {
        Alert::new()
            .duration(100)
            .state(&state)
            .build(&registry, &handlers);
        tokio::time::sleep(Duration::from_millis(40)).await;
    }

    tokio::time::sleep(Duration::from_millis(200)).await;
    Alert::new()
        .duration(100)
        .state(&state)
        .build(&registry, &handlers);
    tokio::time::sleep(Duration::from_millis(200)).await;

    state.with(|s| {
        assert!(!s.is_open());
        assert_eq!(s.closed_count(), 1);
    });
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_alert_manual_close_cancels_timer() {
    let registry = HandlerRegistry::new();
    let state = State::new(AlertState::new());
    let closes = Arc::new(AtomicUsize::new(0));
    let handlers = counting_close(&closes);

    Alert::new()
        .duration(100)
        .closable()
        .id("notice")
        .state(&state)
        .build(&registry, &handlers);
    assert!(state.with(|s| s.is_pending()));

    let close = registry.get("notice-close", "on_activate").expect("close handler");
    close(&coreui::HandlerContext::new(registry.context()));
    assert!(!state.with(|s| s.is_pending()));

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(state.with(|s| s.closed_count()), 1);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_alert_show_rearms() {
    let registry = HandlerRegistry::new();
    let state = State::new(AlertState::new());
    let handlers = WidgetHandlers::new();

    Alert::new().duration(50).state(&state).build(&registry, &handlers);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!state.with(|s| s.is_open()));

    state.update(|s| s.show());
    Alert::new().duration(50).state(&state).build(&registry, &handlers);
    tokio::time::sleep(Duration::from_millis(100)).await;

    state.with(|s| {
        assert!(!s.is_open());
        assert_eq!(s.closed_count(), 2);
    });
}
