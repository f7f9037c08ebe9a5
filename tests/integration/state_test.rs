#![allow(clippy::expect_used)]

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use sentinel::application::services::NotificationGate;
use sentinel::domain::entities::state::PersistedState;
use sentinel::domain::ports::store::StateStore;
use sentinel::domain::value_objects::alert_key::AlertKey;
use sentinel::infrastructure::persistence::json_store::JsonStateStore;

const COOLDOWN: Duration = Duration::from_secs(3600);

fn at(epoch_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(epoch_secs, 0)
        .single()
        .expect("valid timestamp")
}

// ---------------------------------------------------------------------------
// Gate decisions across simulated process restarts
// ---------------------------------------------------------------------------

#[test]
fn gate_denial_survives_process_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    let store = JsonStateStore::new(&path);
    let gate = NotificationGate::new(&store, COOLDOWN);
    let mut state = store.load();
    assert!(gate.permit(&mut state, &AlertKey::CpuHigh, at(1_700_000_000)));

    // A later invocation opens its own store against the same file.
    let restarted = JsonStateStore::new(&path);
    let gate = NotificationGate::new(&restarted, COOLDOWN);
    let mut state = restarted.load();
    assert!(!gate.permit(&mut state, &AlertKey::CpuHigh, at(1_700_000_060)));
}

#[test]
fn gate_grants_again_after_cooldown_expires() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    let store = JsonStateStore::new(&path);
    let gate = NotificationGate::new(&store, COOLDOWN);
    let mut state = store.load();
    assert!(gate.permit(&mut state, &AlertKey::BatteryLow, at(1_700_000_000)));

    let restarted = JsonStateStore::new(&path);
    let gate = NotificationGate::new(&restarted, COOLDOWN);
    let mut state = restarted.load();
    assert!(gate.permit(&mut state, &AlertKey::BatteryLow, at(1_700_003_601)));
}

#[test]
fn unrelated_keys_do_not_share_a_cooldown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    let store = JsonStateStore::new(&path);
    let gate = NotificationGate::new(&store, COOLDOWN);
    let mut state = store.load();
    assert!(gate.permit(&mut state, &AlertKey::DiskLow("/".to_string()), at(1_700_000_000)));

    let restarted = JsonStateStore::new(&path);
    let gate = NotificationGate::new(&restarted, COOLDOWN);
    let mut state = restarted.load();
    assert!(gate.permit(&mut state, &AlertKey::DiskLow("/home".to_string()), at(1_700_000_060)));
    assert!(!gate.permit(&mut state, &AlertKey::DiskLow("/".to_string()), at(1_700_000_060)));
}

// ---------------------------------------------------------------------------
// State file contents
// ---------------------------------------------------------------------------

#[test]
fn state_roundtrip_preserves_notifications_and_ip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    let mut state = PersistedState::default();
    state.record_fired(&AlertKey::RamHigh, at(1_700_000_000));
    state.last_ip = "203.0.113.7".to_string();

    let store = JsonStateStore::new(&path);
    store.save(&state).expect("save failed");

    let reloaded = JsonStateStore::new(&path).load();
    assert_eq!(reloaded, state);
    assert!(reloaded.has_ip_baseline());
}

#[test]
fn on_disk_format_uses_epoch_second_floats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    let mut state = PersistedState::default();
    state.record_fired(&AlertKey::CpuHigh, at(1_700_000_000));
    JsonStateStore::new(&path).save(&state).expect("save failed");

    let raw = std::fs::read_to_string(&path).expect("read state file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let stamp = value["notifications"]["cpu_high"]
        .as_f64()
        .expect("numeric timestamp");
    assert!((stamp - 1_700_000_000.0).abs() < 1e-6);
    assert_eq!(value["last_ip"], "Unknown");
}

#[test]
fn corrupt_state_file_starts_fresh_and_heals() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{\"notifications\": {\"cpu_h").expect("write corrupt file");

    let store = JsonStateStore::new(&path);
    assert_eq!(store.load(), PersistedState::default());

    // The next save replaces the damaged file with a valid one.
    let mut state = PersistedState::default();
    state.record_fired(&AlertKey::NetworkChange, at(1_700_000_000));
    store.save(&state).expect("save failed");

    let reloaded = JsonStateStore::new(&path).load();
    assert!(reloaded.notifications.contains_key("network_change"));
}
