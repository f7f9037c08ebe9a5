use std::time::Duration;

use anyhow::Context;
use chrono::Utc;

use super::gate::NotificationGate;
use crate::domain::entities::alert::Alert;
use crate::domain::entities::battery::BatteryReading;
use crate::domain::entities::network::NetworkReport;
use crate::domain::entities::report::CycleReport;
use crate::domain::entities::resources::ResourceUsage;
use crate::domain::entities::state::PersistedState;
use crate::domain::ports::battery::BatteryProbe;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::probe::NetworkProbe;
use crate::domain::ports::ranker::{ProcessRanker, RankMetric};
use crate::domain::ports::reclaimer::MemoryReclaimer;
use crate::domain::ports::sampler::ResourceSampler;
use crate::domain::ports::store::StateStore;
use crate::domain::rules::{evaluate_ip_change, IpChange};
use crate::domain::value_objects::ThresholdSet;

/// How many top consumers are named in CPU and memory alerts.
const TOP_CONSUMERS: usize = 3;

/// Orchestrates one health cycle: sample → evaluate → reclaim → probe → report.
pub struct CycleService<'a> {
    sampler: &'a dyn ResourceSampler,
    ranker: &'a dyn ProcessRanker,
    probe: &'a dyn NetworkProbe,
    battery: &'a dyn BatteryProbe,
    reclaimer: &'a dyn MemoryReclaimer,
    notifier: &'a dyn Notifier,
    store: &'a dyn StateStore,
    thresholds: &'a ThresholdSet,
    cooldown: Duration,
}

impl<'a> CycleService<'a> {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sampler: &'a dyn ResourceSampler,
        ranker: &'a dyn ProcessRanker,
        probe: &'a dyn NetworkProbe,
        battery: &'a dyn BatteryProbe,
        reclaimer: &'a dyn MemoryReclaimer,
        notifier: &'a dyn Notifier,
        store: &'a dyn StateStore,
        thresholds: &'a ThresholdSet,
        cooldown: Duration,
    ) -> Self {
        Self {
            sampler,
            ranker,
            probe,
            battery,
            reclaimer,
            notifier,
            store,
            thresholds,
            cooldown,
        }
    }

    /// Run a single health cycle and return what it measured.
    ///
    /// Only a total sampling failure aborts the cycle. Probe, battery,
    /// notification, and persistence failures are logged and the cycle
    /// continues with whatever it could measure.
    ///
    /// # Errors
    ///
    /// Returns an error if CPU, memory, and disk usage cannot be sampled.
    pub fn run_once(&self) -> anyhow::Result<CycleReport> {
        let mut state = self.store.load();
        let gate = NotificationGate::new(self.store, self.cooldown);

        let resources = self.sampler.sample().context("resource sampling failed")?;

        self.check_cpu(&gate, &mut state, &resources);
        let ram_after_reclaim = self.check_ram(&gate, &mut state, &resources);
        self.check_disks(&gate, &mut state, &resources);

        let network = self.probe.probe();
        self.track_public_ip(&gate, &mut state, &network);

        let battery = self.battery.read();
        self.check_battery(&gate, &mut state, battery.as_ref());

        let report = CycleReport {
            resources,
            ram_after_reclaim,
            network,
            battery,
        };
        tracing::info!("{}", report.summary());
        Ok(report)
    }

    fn check_cpu(
        &self,
        gate: &NotificationGate,
        state: &mut PersistedState,
        resources: &ResourceUsage,
    ) {
        if f64::from(resources.cpu_percent) <= self.thresholds.cpu_percent {
            return;
        }
        let top = self.ranker.top_consumers(RankMetric::Cpu, TOP_CONSUMERS);
        self.raise(gate, state, &Alert::cpu_high(resources.cpu_percent, &top));
    }

    /// Memory check plus the reclamation it triggers.
    ///
    /// Reclamation runs whenever usage is over the threshold, even when
    /// the alert itself is under cooldown. Returns the re-read usage
    /// after the trim, or `None` when no trim ran or the re-read failed.
    fn check_ram(
        &self,
        gate: &NotificationGate,
        state: &mut PersistedState,
        resources: &ResourceUsage,
    ) -> Option<f64> {
        if resources.ram_percent <= self.thresholds.ram_percent {
            return None;
        }
        let top = self.ranker.top_consumers(RankMetric::Memory, TOP_CONSUMERS);
        self.raise(gate, state, &Alert::ram_high(resources.ram_percent, &top));

        tracing::warn!(
            "Memory pressure at {:.1}%, trimming working sets",
            resources.ram_percent
        );
        let trimmed = self.reclaimer.reclaim();
        tracing::info!("Working sets trimmed for {trimmed} process(es)");

        match self.sampler.ram_percent() {
            Ok(after) => {
                tracing::info!("Memory usage after trim: {after:.1}%");
                Some(after)
            }
            Err(e) => {
                tracing::error!("Failed to re-read memory usage after trim: {e}");
                None
            }
        }
    }

    fn check_disks(
        &self,
        gate: &NotificationGate,
        state: &mut PersistedState,
        resources: &ResourceUsage,
    ) {
        for disk in &resources.disks {
            if disk.used_percent > self.thresholds.disk_percent {
                self.raise(
                    gate,
                    state,
                    &Alert::disk_low(&disk.mount_point, disk.used_percent),
                );
            }
        }
    }

    /// Compare the probed public IP against the persisted baseline.
    ///
    /// The baseline is written on every accepted change, independent of
    /// whether the change alert clears the cooldown gate. An offline
    /// probe never touches the baseline.
    fn track_public_ip(
        &self,
        gate: &NotificationGate,
        state: &mut PersistedState,
        network: &NetworkReport,
    ) {
        match evaluate_ip_change(state, &network.public_ip) {
            IpChange::None => {}
            IpChange::FirstBaseline(current) => {
                tracing::info!("Public IP baseline recorded: {current}");
                state.last_ip = current;
                self.persist(state);
            }
            IpChange::Changed { previous, current } => {
                state.last_ip = current.clone();
                self.persist(state);
                self.raise(gate, state, &Alert::network_change(&previous, &current));
            }
        }
    }

    fn check_battery(
        &self,
        gate: &NotificationGate,
        state: &mut PersistedState,
        battery: Option<&BatteryReading>,
    ) {
        let Some(reading) = battery else {
            tracing::info!("No battery sensor detected");
            return;
        };
        if f64::from(reading.percent) < self.thresholds.battery_low_percent && !reading.plugged {
            self.raise(gate, state, &Alert::battery_low(reading.percent));
        }
    }

    fn raise(&self, gate: &NotificationGate, state: &mut PersistedState, alert: &Alert) {
        if !gate.permit(state, &alert.key, Utc::now()) {
            tracing::debug!("Alert '{}' suppressed by cooldown", alert.key);
            return;
        }
        tracing::warn!("ALERT: {} - {}", alert.title, alert.message);
        if let Err(e) = self.notifier.notify(alert) {
            tracing::error!("Alert notification failed: {e}");
        }
    }

    fn persist(&self, state: &PersistedState) {
        if let Err(e) = self.store.save(state) {
            tracing::error!("Failed to persist state: {e}");
        }
    }
}
