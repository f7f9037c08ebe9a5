use serde::{Deserialize, Serialize};

/// Reachability measurement against the fixed probe endpoint.
///
/// `Offline` covers every failure mode: timeout, refused connection,
/// unreachable network. The distinction is logged, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Latency {
    Millis(u128),
    Offline,
}

impl std::fmt::Display for Latency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Millis(ms) => write!(f, "{ms} ms"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// Public address as reported by the IP echo endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicIp {
    Addr(String),
    Offline,
}

impl std::fmt::Display for PublicIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Addr(addr) => write!(f, "{addr}"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// Outcome of one network probe: socket latency plus public IP lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub latency: Latency,
    pub public_ip: PublicIp,
}
