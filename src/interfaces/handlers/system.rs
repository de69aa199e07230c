use std::time::Duration;

use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use humantime::format_duration;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Serialize;
use sysinfo::System;

use crate::{constants::START_TIME, AppState};

/// Seconds a computed health report is served from cache.
const HEALTH_CACHE_SECS: i64 = 5;

#[derive(Serialize, Clone)]
struct HostInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    environment: String,
    project_name: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: &'static str,
    memory_usage: String,
    system: HostInfo,
}

static CACHED_REPORT: Lazy<RwLock<Option<(DateTime<Utc>, HealthReport)>>> =
    Lazy::new(|| RwLock::new(None));

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0 / 1024.0
}

/// Host facts plus the memory held by this process.
fn probe_host() -> (HostInfo, String) {
    let mut sys = System::new_all();
    sys.refresh_all();

    let unknown = || "Unknown".to_string();
    let host = HostInfo {
        os: System::name().unwrap_or_else(unknown),
        kernel: System::kernel_version().unwrap_or_else(unknown),
        hostname: System::host_name().unwrap_or_else(unknown),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", megabytes(sys.total_memory()) / 1024.0),
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or_else(unknown, |p| format!("{:.2} MB", megabytes(p.memory())));

    (host, memory_usage)
}

async fn build_report(state: &AppState, now: DateTime<Utc>) -> HealthReport {
    let uptime = now.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let (status, database) = match state.profile_handler.check_connection().await {
        Ok(()) => ("healthy", "OK"),
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            ("degraded", "Unavailable")
        }
    };

    let (system, memory_usage) = probe_host();

    HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.env.to_string(),
        project_name: state.config.name.clone(),
        uptime: format_duration(Duration::from_secs(uptime)).to_string(),
        timestamp: now.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database,
        memory_usage,
        system,
    }
}

/// `GET /api/health`
///
/// Always 200; a failing database shows up as `"status": "degraded"`.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();

    if let Some((built_at, report)) = CACHED_REPORT.read().as_ref() {
        if (now - *built_at).num_seconds() < HEALTH_CACHE_SECS {
            return HttpResponse::Ok().json(report);
        }
    }

    let report = build_report(&state, now).await;
    *CACHED_REPORT.write() = Some((now, report.clone()));
    HttpResponse::Ok().json(report)
}
