//! 性能指标收集模块
//!
//! 提供图变更和算法运行指标的收集和导出功能

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 图变更统计
    graph_stats: GraphStats,
    /// 算法运行统计
    algorithm_stats: AlgorithmStats,
    /// 按算法名称统计的运行次数
    runs_by_name: Mutex<HashMap<&'static str, u64>>,
    /// 启动时间
    start_time: Instant,
}

/// 图变更统计
#[derive(Debug)]
struct GraphStats {
    /// 顶点插入数
    vertices_inserted: AtomicU64,
    /// 边插入数
    edges_inserted: AtomicU64,
    /// 顶点删除数
    vertices_removed: AtomicU64,
    /// 边删除数
    edges_removed: AtomicU64,
}

/// 算法运行统计
#[derive(Debug)]
struct AlgorithmStats {
    /// 总运行数
    total_runs: AtomicU64,
    /// 运行总耗时（微秒）
    total_duration_us: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    // 图变更指标
    pub vertices_inserted: u64,
    pub edges_inserted: u64,
    pub vertices_removed: u64,
    pub edges_removed: u64,

    // 算法指标
    pub total_runs: u64,
    pub avg_run_duration_ms: f64,
    pub runs_by_name: HashMap<String, u64>,

    // 系统指标
    pub uptime_seconds: u64,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            graph_stats: GraphStats {
                vertices_inserted: AtomicU64::new(0),
                edges_inserted: AtomicU64::new(0),
                vertices_removed: AtomicU64::new(0),
                edges_removed: AtomicU64::new(0),
            },
            algorithm_stats: AlgorithmStats {
                total_runs: AtomicU64::new(0),
                total_duration_us: AtomicU64::new(0),
            },
            runs_by_name: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// 记录顶点插入
    pub fn record_vertex_insert(&self) {
        self.graph_stats
            .vertices_inserted
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边插入
    pub fn record_edge_insert(&self) {
        self.graph_stats
            .edges_inserted
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录顶点删除
    pub fn record_vertex_remove(&self) {
        self.graph_stats
            .vertices_removed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边删除
    pub fn record_edge_remove(&self) {
        self.graph_stats
            .edges_removed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录算法运行开始
    pub fn record_run_start(&self) -> AlgoTimer {
        self.algorithm_stats
            .total_runs
            .fetch_add(1, Ordering::Relaxed);
        AlgoTimer::new()
    }

    /// 记录算法运行完成
    pub fn record_run_complete(&self, name: &'static str, timer: AlgoTimer) {
        let duration = timer.elapsed();
        self.algorithm_stats
            .total_duration_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        *self.runs_by_name.lock().entry(name).or_insert(0) += 1;
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let total_runs = self.algorithm_stats.total_runs.load(Ordering::Relaxed);
        let total_duration_us = self
            .algorithm_stats
            .total_duration_us
            .load(Ordering::Relaxed);

        let avg_run_duration_ms = if total_runs > 0 {
            (total_duration_us as f64) / (total_runs as f64) / 1000.0
        } else {
            0.0
        };

        let runs_by_name = self
            .runs_by_name
            .lock()
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect();

        MetricsSnapshot {
            vertices_inserted: self.graph_stats.vertices_inserted.load(Ordering::Relaxed),
            edges_inserted: self.graph_stats.edges_inserted.load(Ordering::Relaxed),
            vertices_removed: self.graph_stats.vertices_removed.load(Ordering::Relaxed),
            edges_removed: self.graph_stats.edges_removed.load(Ordering::Relaxed),
            total_runs,
            avg_run_duration_ms,
            runs_by_name,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.graph_stats.vertices_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.edges_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.vertices_removed.store(0, Ordering::Relaxed);
        self.graph_stats.edges_removed.store(0, Ordering::Relaxed);
        self.algorithm_stats.total_runs.store(0, Ordering::Relaxed);
        self.algorithm_stats
            .total_duration_us
            .store(0, Ordering::Relaxed);
        self.runs_by_name.lock().clear();
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 算法计时器
pub struct AlgoTimer {
    start: Instant,
}

impl AlgoTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = Metrics::new();

        metrics.record_vertex_insert();
        metrics.record_vertex_insert();
        metrics.record_edge_insert();

        let timer = metrics.record_run_start();
        std::thread::sleep(Duration::from_millis(5));
        metrics.record_run_complete("dijkstra", timer);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.vertices_inserted, 2);
        assert_eq!(snapshot.edges_inserted, 1);
        assert_eq!(snapshot.total_runs, 1);
        assert_eq!(snapshot.runs_by_name.get("dijkstra"), Some(&1));
        assert!(snapshot.avg_run_duration_ms >= 5.0);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = Metrics::new();
        metrics.record_vertex_insert();
        let timer = metrics.record_run_start();
        metrics.record_run_complete("bfs", timer);

        metrics.reset();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.vertices_inserted, 0);
        assert_eq!(snapshot.total_runs, 0);
        assert!(snapshot.runs_by_name.is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = Metrics::new();
        metrics.record_edge_insert();

        let json = serde_json::to_string(&metrics.snapshot()).unwrap();
        assert!(json.contains("edges_inserted"));
    }
}
