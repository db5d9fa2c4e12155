//! Broker API Types
//!
//! Response shapes of the broker HTTP API endpoints the dashboard reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SYSTREE_ENDPOINT: &str = "/api/v1/systree";
pub const LISTENERS_ENDPOINT: &str = "/api/v1/listeners";

pub const UPTIME_TOPIC: &str = "$SYS/broker/uptime";

/// Topics shown as headline cards, in display order
pub const HEADLINE_TOPICS: &[(&str, &str)] = &[
    ("$SYS/broker/clients/connected", "Clients Connected"),
    ("$SYS/broker/clients/total", "Clients Total"),
    ("$SYS/broker/messages/received", "Messages Received"),
    ("$SYS/broker/messages/sent", "Messages Sent"),
    ("$SYS/broker/subscriptions/count", "Subscriptions"),
    ("$SYS/broker/retained messages/count", "Retained Messages"),
];

/// Snapshot of the broker's `$SYS` metrics: topic → current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SysTree(pub BTreeMap<String, i64>);

impl SysTree {
    pub fn get(&self, topic: &str) -> Option<i64> {
        self.0.get(topic).copied()
    }

    /// Broker uptime in seconds
    pub fn uptime_secs(&self) -> Option<i64> {
        self.get(UPTIME_TOPIC)
    }

    /// Headline metrics present in this snapshot, as (label, value)
    pub fn headlines(&self) -> Vec<(&'static str, i64)> {
        HEADLINE_TOPICS
            .iter()
            .filter_map(|(topic, label)| self.get(topic).map(|v| (*label, v)))
            .collect()
    }

    /// All entries sorted by topic
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `{"listeners": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenersResponse {
    pub listeners: Vec<Listener>,
}

/// One configured broker listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listener {
    /// TCP port, absent for unix socket listeners
    #[serde(default)]
    pub port: Option<u16>,
    /// Unix socket path
    #[serde(default)]
    pub path: Option<String>,
    pub protocol: String,
    #[serde(default)]
    pub tls: bool,
    #[serde(default)]
    pub mtls: bool,
    #[serde(default)]
    pub allow_anonymous: bool,
}

impl Listener {
    /// Port number or socket path for display
    pub fn address(&self) -> String {
        match (&self.port, &self.path) {
            (_, Some(path)) => path.clone(),
            (Some(port), None) => port.to_string(),
            (None, None) => "-".to_string(),
        }
    }
}

/// Render an uptime in seconds as `1d 02:03:04`.
pub fn format_uptime(secs: i64) -> String {
    let secs = secs.max(0);
    let days = secs / 86_400;
    let rem = secs % 86_400;
    let clock = format!("{:02}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);
    if days > 0 {
        format!("{}d {}", days, clock)
    } else {
        clock
    }
}
