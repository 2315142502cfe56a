//! End-to-end behaviour of the monitor loop over scripted readings.

use std::sync::Arc;
use std::time::Duration;

use host_watch::health::{LinkStatus, Monitor, MonitorSettings};
use host_watch::lifecycle::Shutdown;
use host_watch::probe::ScriptedSource;
use host_watch::resilience::RetryPolicy;
use tokio::time::Instant;

mod common;

use common::RecordingNotifier;

fn settings(tolerance: u32, retries: u32) -> MonitorSettings {
    MonitorSettings {
        device_name: "EV charger".to_string(),
        monitor_delay: Duration::from_secs(10),
        tolerance,
        retry: RetryPolicy::from_retries(retries, Duration::from_secs(2)),
    }
}

#[tokio::test(start_paused = true)]
async fn test_sustained_outage_notifies_once() {
    let notifier = Arc::new(RecordingNotifier::new());
    let source = ScriptedSource::new(vec![true], false);
    let mut monitor = Monitor::start(settings(1, 0), source, notifier.clone()).await;

    let mut changes = Vec::new();
    for _ in 0..5 {
        let report = monitor.cycle().await;
        assert!(!report.outcome.reading);
        if report.changed {
            changes.push(report.iteration);
        }
    }

    // [true, false] is still online; the second failure tips the window.
    assert_eq!(changes, vec![2]);
    assert_eq!(monitor.status(), LinkStatus::Offline);
    assert_eq!(
        notifier.messages(),
        vec![
            "EV charger monitoring service has started.\nInitial status is ✅ Online.".to_string(),
            "Current EV charger status is ❌ Offline".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_transient_failures_absorbed_by_retries() {
    let notifier = Arc::new(RecordingNotifier::new());
    // Each cycle sees two failed probes before the third succeeds.
    let script = [true, false, false, true, false, false, true];
    let source = ScriptedSource::new(script, true);
    let mut monitor = Monitor::start(settings(0, 2), source, notifier.clone()).await;

    for _ in 0..2 {
        let report = monitor.cycle().await;
        assert_eq!(report.outcome.attempts, 3);
        assert!(!report.changed);
    }

    assert_eq!(monitor.source().draws(), 7);
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_notifications_follow_status_order() {
    let notifier = Arc::new(RecordingNotifier::new());
    let source = ScriptedSource::new(vec![true, false, true, false], false);
    let mut monitor = Monitor::start(settings(0, 0), source, notifier.clone()).await;

    for _ in 0..3 {
        assert!(monitor.cycle().await.changed);
    }

    let messages = notifier.messages();
    assert_eq!(messages.len(), 4);
    assert!(messages[0].contains("has started"));
    assert!(messages[1].ends_with("❌ Offline"));
    assert!(messages[2].ends_with("✅ Online"));
    assert!(messages[3].ends_with("❌ Offline"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_notification_does_not_stop_monitoring() {
    let notifier = Arc::new(RecordingNotifier::failing_first(2));
    let source = ScriptedSource::new(vec![true, false, true], true);
    let mut monitor = Monitor::start(settings(0, 0), source, notifier.clone()).await;

    assert!(monitor.cycle().await.changed);
    let report = monitor.cycle().await;
    assert!(report.changed);
    assert_eq!(report.status, LinkStatus::Online);

    // Start and first change were lost; tracking carried on regardless.
    assert_eq!(notifier.messages(), vec!["Current EV charger status is ✅ Online".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_preempts_wait_between_cycles() {
    let notifier = Arc::new(RecordingNotifier::new());
    let source = ScriptedSource::new(vec![true, false, true, false], true);
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let monitor_notifier = notifier.clone();
    let start = Instant::now();

    let handle = tokio::spawn(async move {
        let monitor = Monitor::start(settings(0, 0), source, monitor_notifier).await;
        monitor.run(rx).await;
    });

    // Cycles run at t=0, 10 and 20; the next would start at 30.
    tokio::time::sleep(Duration::from_secs(25)).await;
    assert!(shutdown.trigger());
    handle.await.unwrap();

    assert!(start.elapsed() < Duration::from_secs(30));
    assert_eq!(notifier.messages().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_simulation_reports_long_outage_only() {
    let notifier = Arc::new(RecordingNotifier::new());
    let source = ScriptedSource::simulation(2);
    let mut monitor = Monitor::start(settings(1, 2), source, notifier.clone()).await;

    // The short outage is absorbed; the long one flips the status until two good cycles restore it.
    for _ in 0..21 {
        monitor.cycle().await;
    }

    let messages = notifier.messages();
    assert_eq!(messages.len(), 3, "{messages:?}");
    assert!(messages[1].ends_with("❌ Offline"));
    assert!(messages[2].ends_with("✅ Online"));
}
