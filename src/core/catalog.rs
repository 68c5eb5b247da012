// src/core/catalog.rs

//! Static, read-only content shown around the scan terminal.
//!
//! Every number on the dashboard comes from these tables. Nothing is measured.

use crate::core::models::TERMINAL_GREEN;
use ratatui::style::Color;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The canned scan modes listed in the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ScanMode {
    #[default]
    #[strum(serialize = "deep-scan")]
    DeepScan,
    #[strum(serialize = "network-scan")]
    NetworkScan,
    #[strum(serialize = "port-scan")]
    PortScan,
    #[strum(serialize = "malware-scan")]
    MalwareScan,
}

impl ScanMode {
    pub fn name(self) -> &'static str {
        match self {
            ScanMode::DeepScan => "Deep Vulnerability Scan",
            ScanMode::NetworkScan => "Network Topology Scan",
            ScanMode::PortScan => "Port Security Scan",
            ScanMode::MalwareScan => "Malware Detection",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScanMode::DeepScan => "Comprehensive security analysis",
            ScanMode::NetworkScan => "Map network infrastructure",
            ScanMode::PortScan => "Analyze open ports and services",
            ScanMode::MalwareScan => "Real-time threat analysis",
        }
    }

    /// Single-cell glyph used when the sidebar is collapsed.
    pub fn glyph(self) -> &'static str {
        match self {
            ScanMode::DeepScan => "▣",
            ScanMode::NetworkScan => "◎",
            ScanMode::PortScan => "▤",
            ScanMode::MalwareScan => "▲",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ScanMode::DeepScan => Color::Cyan,
            ScanMode::NetworkScan => TERMINAL_GREEN,
            ScanMode::PortScan => Color::Yellow,
            ScanMode::MalwareScan => Color::Red,
        }
    }

    /// Mode at `index` in sidebar order, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn index(self) -> usize {
        Self::iter().position(|mode| mode == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let count = Self::iter().count();
        Self::from_index((self.index() + 1) % count).unwrap_or_default()
    }

    pub fn previous(self) -> Self {
        let count = Self::iter().count();
        Self::from_index((self.index() + count - 1) % count).unwrap_or_default()
    }
}

/// Colour class of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Success,
    Warning,
    Active,
    Neutral,
}

impl MetricStatus {
    pub fn color(self) -> Color {
        match self {
            MetricStatus::Success => Color::Green,
            MetricStatus::Warning => Color::Yellow,
            MetricStatus::Active => Color::Cyan,
            MetricStatus::Neutral => TERMINAL_GREEN,
        }
    }
}

/// A label/value row in one of the static panels.
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub status: MetricStatus,
}

pub static SYSTEM_METRICS: &[Metric] = &[
    Metric { label: "Threats Detected", value: "0", status: MetricStatus::Success },
    Metric { label: "Vulnerabilities", value: "2", status: MetricStatus::Warning },
    Metric { label: "Active Scans", value: "1", status: MetricStatus::Active },
    Metric { label: "System Status", value: "SECURE", status: MetricStatus::Success },
];

pub static NETWORK_STATUS: &[Metric] = &[
    Metric { label: "Active Nodes", value: "127", status: MetricStatus::Success },
    Metric { label: "Bandwidth", value: "1.2 Gbps", status: MetricStatus::Active },
    Metric { label: "Latency", value: "12ms", status: MetricStatus::Success },
    Metric { label: "Security", value: "SECURE", status: MetricStatus::Success },
];

/// Host details printed under the terminal banner. The clock line is added at render time.
pub static HOST_INFO: &[&str] = &["System: QuantumOS v3.2.1", "User: root@quantum-scanner"];

pub static HOST_LOAD: &[&str] = &[
    "Memory: 15.7GB / 32GB",
    "CPU: 87% (Neural Processing)",
    "Network: 1.2 Gbps",
];

/// An icon-prefixed line in the activity or threat panels.
pub struct FeedLine {
    pub icon: &'static str,
    pub text: &'static str,
    pub status: MetricStatus,
}

pub static THREAT_MONITOR: &[FeedLine] = &[
    FeedLine { icon: "✓", text: "No active threats", status: MetricStatus::Success },
    FeedLine { icon: "⚠", text: "2 minor vulnerabilities", status: MetricStatus::Warning },
];

pub static ACTIVITY_LOG: &[FeedLine] = &[
    FeedLine { icon: "✓", text: "Port scan completed", status: MetricStatus::Success },
    FeedLine { icon: "◦", text: "Deep scan in progress", status: MetricStatus::Active },
    FeedLine { icon: "⚠", text: "SSL warning detected", status: MetricStatus::Warning },
    FeedLine { icon: "✓", text: "System update applied", status: MetricStatus::Success },
];

pub static STATUS_INDICATORS: &[FeedLine] = &[
    FeedLine { icon: "◉", text: "SECURE", status: MetricStatus::Success },
    FeedLine { icon: "◉", text: "SCANNING", status: MetricStatus::Active },
    FeedLine { icon: "◉", text: "MONITORING", status: MetricStatus::Warning },
];

/// Sidebar shortcuts. Purely decorative.
pub static QUICK_ACTIONS: &[(&str, &str)] = &[
    ("◇", "System Config"),
    ("◈", "View Logs"),
    ("▤", "Server Status"),
];

/// Buttons under the scanner. Purely decorative.
pub static REPORT_ACTIONS: &[&str] = &[
    "Export Report",
    "View Detailed Analysis",
    "Security Alerts",
    "Access Control",
];

pub const COPYRIGHT: &str = "Quantum Scanner © 2024 - Neural Network Defense System";

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_ids_round_trip_through_strum() {
        assert_eq!(ScanMode::DeepScan.to_string(), "deep-scan");
        assert_eq!(ScanMode::from_str("malware-scan").unwrap(), ScanMode::MalwareScan);
        assert!(ScanMode::from_str("quantum-scan").is_err());
    }

    #[test]
    fn test_mode_cycling_wraps() {
        assert_eq!(ScanMode::MalwareScan.next(), ScanMode::DeepScan);
        assert_eq!(ScanMode::DeepScan.previous(), ScanMode::MalwareScan);
        assert_eq!(ScanMode::NetworkScan.next(), ScanMode::PortScan);
    }

    #[test]
    fn test_mode_indexes() {
        assert_eq!(ScanMode::iter().count(), 4);
        assert_eq!(ScanMode::from_index(2), Some(ScanMode::PortScan));
        assert_eq!(ScanMode::from_index(4), None);
        assert_eq!(ScanMode::PortScan.index(), 2);
    }

    #[test]
    fn test_metric_colors() {
        assert_eq!(MetricStatus::Warning.color(), Color::Yellow);
        assert_eq!(SYSTEM_METRICS[1].status, MetricStatus::Warning);
        assert_eq!(NETWORK_STATUS[0].value, "127");
    }
}
