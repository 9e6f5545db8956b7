// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_default()
            .push(latency.as_nanos() as u64);
    }

    pub(crate) async fn render_exposition(&self) -> String {
        let mut out = String::new();
        out.push_str("# TYPE podium_requests_total counter\n");
        let counts = self.counts.lock().await;
        let mut count_lines: Vec<((String, u16), u64)> = counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        drop(counts);
        count_lines.sort();
        for ((route, status), count) in count_lines {
            out.push_str(&format!(
                "podium_requests_total{{route=\"{route}\",status=\"{status}\"}} {count}\n"
            ));
        }

        out.push_str("# TYPE podium_request_latency_p95_ms gauge\n");
        let latency_map = self.latency_ns.lock().await;
        let mut latency_lines: Vec<(String, u64)> = latency_map
            .iter()
            .map(|(route, samples)| (route.clone(), p95(samples)))
            .collect();
        drop(latency_map);
        latency_lines.sort();
        for (route, p95_ns) in latency_lines {
            let ms = p95_ns as f64 / 1_000_000.0;
            out.push_str(&format!(
                "podium_request_latency_p95_ms{{route=\"{route}\"}} {ms:.3}\n"
            ));
        }
        out
    }
}

fn p95(samples: &[u64]) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let mut sorted: Vec<u64> = samples.to_vec();
    sorted.sort_unstable();
    let idx = ((sorted.len() as f64) * 0.95).ceil() as usize - 1;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exposition_lists_observed_routes() {
        let metrics = RequestMetrics::default();
        metrics
            .observe_request("/healthz", StatusCode::OK, Duration::from_millis(1))
            .await;
        metrics
            .observe_request("/healthz", StatusCode::OK, Duration::from_millis(2))
            .await;
        metrics
            .observe_request("/v1/roadmap", StatusCode::UNAUTHORIZED, Duration::from_millis(1))
            .await;
        let text = metrics.render_exposition().await;
        assert!(text.contains("podium_requests_total{route=\"/healthz\",status=\"200\"} 2"));
        assert!(text.contains("podium_requests_total{route=\"/v1/roadmap\",status=\"401\"} 1"));
        assert!(text.contains("podium_request_latency_p95_ms{route=\"/healthz\"}"));
    }

    #[test]
    fn p95_of_empty_is_zero() {
        assert_eq!(p95(&[]), 0);
    }
}
