//! Process metrics rendered in the Prometheus text exposition format.
//!
//! One request counter and two host gauges. The gauges are refreshed from
//! `sysinfo` each time `/metrics` is scraped.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use sysinfo::System;

/// Content type of the text exposition format
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

const REQUESTS_TOTAL: &str = "app_requests_total";
const REQUESTS_CREATED: &str = "app_requests_created";
const CPU_USAGE: &str = "app_cpu_usage_percent";
const RAM_USAGE: &str = "app_ram_usage_percent";

/// `f64` gauge stored as raw bits
#[derive(Debug, Default)]
struct Gauge(AtomicU64);

impl Gauge {
    fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }

    fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct Metrics {
    requests_total: AtomicU64,
    requests_created: f64,
    cpu_usage_percent: Gauge,
    ram_usage_percent: Gauge,
    system: Mutex<System>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            requests_total: AtomicU64::new(0),
            requests_created: now.timestamp_millis() as f64 / 1000.0,
            cpu_usage_percent: Gauge::default(),
            ram_usage_percent: Gauge::default(),
            system: Mutex::new(System::new()),
        }
    }

    /// Count one dispatched API request
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Sample CPU and memory usage into the gauges.
    ///
    /// CPU usage is measured since the previous refresh, so the first
    /// sample after startup reads 0.
    pub fn refresh_system_gauges(&self) {
        let Ok(mut system) = self.system.lock() else {
            tracing::warn!("System probe lock poisoned; keeping previous gauge values");
            return;
        };

        system.refresh_cpu();
        system.refresh_memory();

        self.cpu_usage_percent
            .set(f64::from(system.global_cpu_info().cpu_usage()));
        self.ram_usage_percent
            .set(percent(system.used_memory(), system.total_memory()));
    }

    /// Render all metrics in the text exposition format
    pub fn render(&self) -> String {
        let mut out = String::new();
        write_metric(
            &mut out,
            REQUESTS_TOTAL,
            "Total HTTP requests",
            "counter",
            self.requests_total() as f64,
        );
        write_metric(
            &mut out,
            REQUESTS_CREATED,
            "Total HTTP requests",
            "gauge",
            self.requests_created,
        );
        write_metric(
            &mut out,
            CPU_USAGE,
            "CPU usage percent",
            "gauge",
            self.cpu_usage_percent.get(),
        );
        write_metric(
            &mut out,
            RAM_USAGE,
            "RAM usage percent",
            "gauge",
            self.ram_usage_percent.get(),
        );
        out
    }
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 / total as f64 * 100.0
}

fn write_metric(out: &mut String, name: &str, help: &str, kind: &str, value: f64) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
    let _ = writeln!(out, "{} {:?}", name, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn sample_value(rendered: &str, name: &str) -> f64 {
        rendered
            .lines()
            .find_map(|line| line.strip_prefix(&format!("{} ", name)))
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn test_render_exposition_format() {
        let metrics = Metrics::new();
        metrics.record_request();
        metrics.record_request();

        let rendered = metrics.render();

        assert!(rendered.contains("# HELP app_requests_total Total HTTP requests\n"));
        assert!(rendered.contains("# TYPE app_requests_total counter\n"));
        assert!(rendered.contains("app_requests_total 2.0\n"));
        assert!(rendered.contains("# TYPE app_cpu_usage_percent gauge\n"));
        assert!(rendered.contains("# TYPE app_ram_usage_percent gauge\n"));
        assert!(sample_value(&rendered, REQUESTS_CREATED) > 0.0);
    }

    #[test]
    fn test_refresh_sets_gauges_in_range() {
        let metrics = Metrics::new();
        metrics.refresh_system_gauges();

        let rendered = metrics.render();
        let cpu = sample_value(&rendered, CPU_USAGE);
        let ram = sample_value(&rendered, RAM_USAGE);

        assert!(cpu >= 0.0);
        assert!((0.0..=100.0).contains(&ram));
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(50, 200), 25.0);
        assert_eq!(percent(1, 0), 0.0);
    }

    #[test]
    fn test_concurrent_increments_are_counted() {
        let metrics = Arc::new(Metrics::new());

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_request();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(metrics.requests_total(), 8000);
    }
}
