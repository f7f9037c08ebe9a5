#![allow(clippy::expect_used)]

use std::sync::Mutex;
use std::time::Duration;

use sentinel::application::services::CycleService;
use sentinel::domain::entities::alert::Alert;
use sentinel::domain::entities::battery::{BatteryReading, WearLevel};
use sentinel::domain::entities::network::{Latency, NetworkReport, PublicIp};
use sentinel::domain::entities::resources::{DiskUsage, ResourceUsage};
use sentinel::domain::ports::battery::BatteryProbe;
use sentinel::domain::ports::notifier::{NotificationError, Notifier};
use sentinel::domain::ports::probe::NetworkProbe;
use sentinel::domain::ports::ranker::{ProcessRanker, RankMetric};
use sentinel::domain::ports::reclaimer::MemoryReclaimer;
use sentinel::domain::ports::sampler::{ResourceSampler, SampleError};
use sentinel::domain::value_objects::alert_key::AlertKey;
use sentinel::domain::value_objects::thresholds::ThresholdSet;
use sentinel::infrastructure::persistence::in_memory_store::InMemoryStore;

const COOLDOWN: Duration = Duration::from_secs(3600);

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn usage(cpu: f32, ram: f64, disk_used: f64) -> ResourceUsage {
    ResourceUsage {
        cpu_percent: cpu,
        ram_percent: ram,
        disks: vec![DiskUsage {
            mount_point: "/".to_string(),
            used_percent: disk_used,
        }],
    }
}

fn online(ip: &str) -> NetworkReport {
    NetworkReport {
        latency: Latency::Millis(23),
        public_ip: PublicIp::Addr(ip.to_string()),
    }
}

fn offline() -> NetworkReport {
    NetworkReport {
        latency: Latency::Offline,
        public_ip: PublicIp::Offline,
    }
}

// ---------------------------------------------------------------------------
// StubSampler
// ---------------------------------------------------------------------------

struct StubSampler {
    resources: ResourceUsage,
    ram_after: f64,
    fail: bool,
}

impl StubSampler {
    fn with_usage(resources: ResourceUsage) -> Self {
        Self {
            resources,
            ram_after: 52.0,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            resources: usage(0.0, 0.0, 0.0),
            ram_after: 0.0,
            fail: true,
        }
    }
}

impl ResourceSampler for StubSampler {
    fn sample(&self) -> Result<ResourceUsage, SampleError> {
        if self.fail {
            return Err(SampleError::MetricsUnavailable(
                "sensors offline".to_string(),
            ));
        }
        Ok(self.resources.clone())
    }

    fn ram_percent(&self) -> Result<f64, SampleError> {
        Ok(self.ram_after)
    }
}

// ---------------------------------------------------------------------------
// StubRanker
// ---------------------------------------------------------------------------

struct StubRanker;

impl ProcessRanker for StubRanker {
    fn top_consumers(&self, metric: RankMetric, _n: usize) -> String {
        match metric {
            RankMetric::Cpu => "cargo (62.0%), chrome (21.5%)".to_string(),
            RankMetric::Memory => "chrome (38.2%), code (12.4%)".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// StubProbe
// ---------------------------------------------------------------------------

struct StubProbe {
    report: NetworkReport,
}

impl NetworkProbe for StubProbe {
    fn probe(&self) -> NetworkReport {
        self.report.clone()
    }
}

// ---------------------------------------------------------------------------
// StubBattery
// ---------------------------------------------------------------------------

struct StubBattery {
    reading: Option<BatteryReading>,
}

impl BatteryProbe for StubBattery {
    fn read(&self) -> Option<BatteryReading> {
        self.reading.clone()
    }
}

// ---------------------------------------------------------------------------
// CountingReclaimer
// ---------------------------------------------------------------------------

struct CountingReclaimer {
    calls: Mutex<usize>,
}

impl CountingReclaimer {
    const fn new() -> Self {
        Self {
            calls: Mutex::new(0),
        }
    }

    fn call_count(&self) -> usize {
        *self.calls.lock().expect("lock")
    }
}

impl MemoryReclaimer for CountingReclaimer {
    fn reclaim(&self) -> usize {
        *self.calls.lock().expect("lock") += 1;
        9
    }
}

// ---------------------------------------------------------------------------
// TrackingNotifier
// ---------------------------------------------------------------------------

struct TrackingNotifier {
    alerts: Mutex<Vec<Alert>>,
}

impl TrackingNotifier {
    const fn new() -> Self {
        Self {
            alerts: Mutex::new(vec![]),
        }
    }

    fn collected_alerts(&self) -> Vec<Alert> {
        self.alerts.lock().expect("lock").clone()
    }

    fn keys(&self) -> Vec<AlertKey> {
        self.collected_alerts().iter().map(|a| a.key.clone()).collect()
    }
}

impl Notifier for TrackingNotifier {
    fn notify(&self, alert: &Alert) -> Result<(), NotificationError> {
        self.alerts.lock().expect("lock").push(alert.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn healthy_cycle_reports_and_stays_quiet() {
    let sampler = StubSampler::with_usage(usage(12.0, 40.0, 55.0));
    let ranker = StubRanker;
    let probe = StubProbe { report: online("1.2.3.4") };
    let battery = StubBattery {
        reading: Some(BatteryReading {
            percent: 80.0,
            plugged: true,
            wear: WearLevel::Percent(4.2),
        }),
    };
    let reclaimer = CountingReclaimer::new();
    let notifier = TrackingNotifier::new();
    let store = InMemoryStore::new();
    let thresholds = ThresholdSet::default();

    let service = CycleService::new(
        &sampler, &ranker, &probe, &battery, &reclaimer, &notifier, &store, &thresholds, COOLDOWN,
    );
    let report = service.run_once().expect("cycle failed");

    assert!(notifier.collected_alerts().is_empty());
    assert_eq!(reclaimer.call_count(), 0);
    assert!(report.ram_after_reclaim.is_none());
    assert!(store.current().notifications.is_empty());

    let line = report.summary();
    assert!(line.contains("CPU 12.0%"));
    assert!(line.contains("latency 23 ms"));
    assert!(line.contains("IP 1.2.3.4"));
}

#[test]
fn alert_fires_once_within_cooldown_across_cycles() {
    let store = InMemoryStore::new();
    let thresholds = ThresholdSet::default();

    let mut fired_per_cycle = Vec::new();
    for _ in 0..2 {
        let sampler = StubSampler::with_usage(usage(96.5, 40.0, 55.0));
        let ranker = StubRanker;
        let probe = StubProbe { report: offline() };
        let battery = StubBattery { reading: None };
        let reclaimer = CountingReclaimer::new();
        let notifier = TrackingNotifier::new();

        let service = CycleService::new(
            &sampler, &ranker, &probe, &battery, &reclaimer, &notifier, &store, &thresholds,
            COOLDOWN,
        );
        service.run_once().expect("cycle failed");
        fired_per_cycle.push(notifier.keys());
    }

    assert_eq!(fired_per_cycle[0], vec![AlertKey::CpuHigh]);
    assert!(fired_per_cycle[1].is_empty(), "second cycle is throttled");
    assert!(store.current().notifications.contains_key("cpu_high"));
}

#[test]
fn reclamation_repeats_even_while_alert_throttled() {
    let store = InMemoryStore::new();
    let thresholds = ThresholdSet::default();

    let mut alerts_per_cycle = Vec::new();
    for _ in 0..2 {
        let sampler = StubSampler::with_usage(usage(12.0, 97.0, 55.0));
        let ranker = StubRanker;
        let probe = StubProbe { report: offline() };
        let battery = StubBattery { reading: None };
        let reclaimer = CountingReclaimer::new();
        let notifier = TrackingNotifier::new();

        let service = CycleService::new(
            &sampler, &ranker, &probe, &battery, &reclaimer, &notifier, &store, &thresholds,
            COOLDOWN,
        );
        let report = service.run_once().expect("cycle failed");

        assert_eq!(reclaimer.call_count(), 1, "trim runs every cycle over threshold");
        assert_eq!(report.ram_after_reclaim, Some(52.0));
        alerts_per_cycle.push(notifier.keys());
    }

    assert_eq!(alerts_per_cycle[0], vec![AlertKey::RamHigh]);
    assert!(alerts_per_cycle[1].is_empty(), "alert throttled, trim is not");
}

#[test]
fn public_ip_lifecycle_over_cycles() {
    let store = InMemoryStore::new();
    let thresholds = ThresholdSet::default();
    let reports = [offline(), online("1.2.3.4"), online("1.2.3.4"), online("5.6.7.8")];

    let mut alerts_per_cycle = Vec::new();
    for report in reports {
        let sampler = StubSampler::with_usage(usage(12.0, 40.0, 55.0));
        let ranker = StubRanker;
        let probe = StubProbe { report };
        let battery = StubBattery { reading: None };
        let reclaimer = CountingReclaimer::new();
        let notifier = TrackingNotifier::new();

        let service = CycleService::new(
            &sampler, &ranker, &probe, &battery, &reclaimer, &notifier, &store, &thresholds,
            COOLDOWN,
        );
        service.run_once().expect("cycle failed");
        alerts_per_cycle.push(notifier.collected_alerts());
    }

    // Offline never records a baseline.
    assert!(alerts_per_cycle[0].is_empty());
    // First confirmed address is a silent baseline.
    assert!(alerts_per_cycle[1].is_empty());
    // Unchanged address stays silent.
    assert!(alerts_per_cycle[2].is_empty());
    // A different address raises exactly one change alert.
    assert_eq!(alerts_per_cycle[3].len(), 1);
    let change = &alerts_per_cycle[3][0];
    assert_eq!(change.key, AlertKey::NetworkChange);
    assert_eq!(change.message, "Public IP changed from 1.2.3.4 to 5.6.7.8.");

    assert_eq!(store.current().last_ip, "5.6.7.8");
}

#[test]
fn degraded_battery_wear_still_alerts_and_reports() {
    let sampler = StubSampler::with_usage(usage(12.0, 40.0, 55.0));
    let ranker = StubRanker;
    let probe = StubProbe { report: offline() };
    let battery = StubBattery {
        reading: Some(BatteryReading {
            percent: 15.0,
            plugged: false,
            wear: WearLevel::Unavailable,
        }),
    };
    let reclaimer = CountingReclaimer::new();
    let notifier = TrackingNotifier::new();
    let store = InMemoryStore::new();
    let thresholds = ThresholdSet::default();

    let service = CycleService::new(
        &sampler, &ranker, &probe, &battery, &reclaimer, &notifier, &store, &thresholds, COOLDOWN,
    );
    let report = service.run_once().expect("cycle failed");

    assert_eq!(notifier.keys(), vec![AlertKey::BatteryLow]);
    assert!(report.summary().contains("wear N/A"));
}

#[test]
fn sampler_outage_aborts_without_side_effects() {
    let sampler = StubSampler::failing();
    let ranker = StubRanker;
    let probe = StubProbe { report: online("1.2.3.4") };
    let battery = StubBattery { reading: None };
    let reclaimer = CountingReclaimer::new();
    let notifier = TrackingNotifier::new();
    let store = InMemoryStore::new();
    let thresholds = ThresholdSet::default();

    let service = CycleService::new(
        &sampler, &ranker, &probe, &battery, &reclaimer, &notifier, &store, &thresholds, COOLDOWN,
    );
    let result = service.run_once();

    assert!(result.is_err());
    assert!(notifier.collected_alerts().is_empty());
    assert_eq!(reclaimer.call_count(), 0);
    assert_eq!(store.current(), sentinel::domain::entities::state::PersistedState::default());
}
