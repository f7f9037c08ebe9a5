use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpStream};
use std::time::{Duration, Instant};

use crate::domain::entities::network::{Latency, NetworkReport, PublicIp};
use crate::domain::ports::probe::NetworkProbe;

/// Well-known resolver used as the reachability target.
const PROBE_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53);

/// Plain-text IP echo service.
const IP_ENDPOINT: &str = "https://api.ipify.org";

/// Keeps only the characters a dotted-quad address is made of.
///
/// An echo service behind a captive portal can answer with HTML; the
/// leftover digits and dots of such a page never equal a previously
/// recorded address, and a fully non-address body strips to `None`.
fn sanitize_ip(body: &str) -> Option<String> {
    let cleaned: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Probes connectivity with a raw TCP connect and discovers the public
/// IP over HTTP.
///
/// Both measurements share one timeout. No failure propagates: the
/// report carries `Offline` markers instead.
pub struct OnlineProbe {
    probe_addr: SocketAddr,
    ip_endpoint: String,
    timeout: Duration,
}

impl OnlineProbe {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            probe_addr: PROBE_ADDR,
            ip_endpoint: IP_ENDPOINT.to_string(),
            timeout,
        }
    }

    #[cfg(test)]
    fn with_endpoints(probe_addr: SocketAddr, ip_endpoint: &str, timeout: Duration) -> Self {
        Self {
            probe_addr,
            ip_endpoint: ip_endpoint.to_string(),
            timeout,
        }
    }

    fn measure_latency(&self) -> Latency {
        let started = Instant::now();
        match TcpStream::connect_timeout(&self.probe_addr, self.timeout) {
            Ok(_stream) => Latency::Millis(started.elapsed().as_millis()),
            Err(e) => {
                tracing::error!("Reachability probe to {} failed: {e}", self.probe_addr);
                Latency::Offline
            }
        }
    }

    fn fetch_public_ip(&self) -> PublicIp {
        let client = match reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("HTTP client construction failed: {e}");
                return PublicIp::Offline;
            }
        };

        let body = client
            .get(&self.ip_endpoint)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text);
        match body {
            Ok(body) => match sanitize_ip(&body) {
                Some(addr) => PublicIp::Addr(addr),
                None => {
                    tracing::warn!("IP endpoint answered with no address content");
                    PublicIp::Offline
                }
            },
            Err(e) => {
                tracing::error!("Public IP lookup failed: {e}");
                PublicIp::Offline
            }
        }
    }
}

impl NetworkProbe for OnlineProbe {
    fn probe(&self) -> NetworkReport {
        let latency = self.measure_latency();
        // No point in an HTTP round trip when the raw connect already failed.
        let public_ip = match latency {
            Latency::Millis(_) => self.fetch_public_ip(),
            Latency::Offline => PublicIp::Offline,
        };
        NetworkReport { latency, public_ip }
    }
}
