use crate::domain::entities::network::PublicIp;
use crate::domain::entities::state::PersistedState;

/// What a probed public IP means relative to the stored baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpChange {
    /// Nothing to do: probe offline, or the address matches the baseline.
    None,
    /// First successful probe ever; record the baseline, no alert.
    FirstBaseline(String),
    /// Known baseline and a different confirmed address.
    Changed { previous: String, current: String },
}

/// Compares a probe result against the stored baseline.
///
/// An offline probe never counts as a change and never replaces the
/// baseline; a transient outage must not poison the stored address.
#[must_use]
pub fn evaluate_ip_change(state: &PersistedState, probed: &PublicIp) -> IpChange {
    let PublicIp::Addr(current) = probed else {
        return IpChange::None;
    };
    if !state.has_ip_baseline() {
        IpChange::FirstBaseline(current.clone())
    } else if state.last_ip == *current {
        IpChange::None
    } else {
        IpChange::Changed {
            previous: state.last_ip.clone(),
            current: current.clone(),
        }
    }
}
