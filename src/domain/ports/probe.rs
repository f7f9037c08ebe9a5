use crate::domain::entities::network::NetworkReport;

pub trait NetworkProbe: Send + Sync {
    /// Measure reachability latency and discover the public IP address.
    ///
    /// Connectivity failures are not errors: an unreachable network
    /// yields the `Offline` variants so the cycle can still complete
    /// and report them.
    fn probe(&self) -> NetworkReport;
}
