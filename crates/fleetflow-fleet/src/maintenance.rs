//! Maintenance and service log book.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use fleetflow_core::error::AppError;
use fleetflow_core::result::AppResult;
use fleetflow_entity::fleet::{NewServiceLog, ServiceLog, ServiceStatus};

/// Per-status service log counts for the maintenance overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStats {
    /// All logs.
    pub total: usize,
    /// Logged, work not started.
    pub new: usize,
    /// Work under way.
    pub in_progress: usize,
    /// Work finished.
    pub completed: usize,
}

/// Owns the maintenance service logs.
///
/// Log numbers come from a counter that only ever increments, so deleting
/// a log never reuses its number. Stats are derived from the live list.
#[derive(Debug)]
pub struct ServiceLogBook {
    logs: Vec<ServiceLog>,
    next_id: u32,
}

impl ServiceLogBook {
    /// Create a book holding the demo seed logs.
    pub fn seeded() -> Self {
        let logs = seed_logs();
        let next_id = logs.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Self { logs, next_id }
    }

    /// Create an empty book whose numbering starts at `first_id`.
    pub fn empty(first_id: u32) -> Self {
        Self {
            logs: Vec::new(),
            next_id: first_id,
        }
    }

    /// All logs, in entry order.
    pub fn logs(&self) -> &[ServiceLog] {
        &self.logs
    }

    /// Record a service log.
    ///
    /// Vehicle name, issue, and date are required; a single validation
    /// error reports every missing field.
    pub fn add(&mut self, candidate: NewServiceLog) -> AppResult<ServiceLog> {
        let mut missing = Vec::new();
        if candidate.vehicle.trim().is_empty() {
            missing.push("vehicle");
        }
        if candidate.issue.trim().is_empty() {
            missing.push("issue");
        }
        if candidate.date.is_none() {
            missing.push("date");
        }
        if !missing.is_empty() {
            let mut err = AppError::validation(format!(
                "Required service log fields missing: {}",
                missing.join(", ")
            ));
            err.fields = missing.into_iter().map(str::to_string).collect();
            return Err(err);
        }

        let log = ServiceLog {
            id: self.next_id,
            vehicle: candidate.vehicle.trim().to_string(),
            issue: candidate.issue.trim().to_string(),
            date: candidate.date.ok_or_else(|| {
                AppError::internal("Service date missing after validation")
            })?,
            cost: candidate.cost,
            status: candidate.status,
        };
        self.next_id += 1;

        info!(id = log.id, vehicle = %log.vehicle, status = %log.status, "Service log recorded");
        self.logs.push(log.clone());
        Ok(log)
    }

    /// Remove a service log by number.
    pub fn remove(&mut self, id: u32) -> AppResult<ServiceLog> {
        let idx = self
            .logs
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| AppError::not_found(format!("Service log not found: #{id}")))?;
        let log = self.logs.remove(idx);
        info!(id = log.id, vehicle = %log.vehicle, "Service log removed");
        Ok(log)
    }

    /// Per-status log counts.
    pub fn stats(&self) -> ServiceStats {
        let count = |status| self.logs.iter().filter(|l| l.status == status).count();
        ServiceStats {
            total: self.logs.len(),
            new: count(ServiceStatus::New),
            in_progress: count(ServiceStatus::InProgress),
            completed: count(ServiceStatus::Completed),
        }
    }

    /// Case-insensitive substring search over vehicle, issue, and status
    /// label.
    pub fn search(&self, query: &str) -> Vec<&ServiceLog> {
        let query = query.to_lowercase();
        self.logs
            .iter()
            .filter(|l| {
                l.vehicle.to_lowercase().contains(&query)
                    || l.issue.to_lowercase().contains(&query)
                    || l.status.label().to_lowercase().contains(&query)
            })
            .collect()
    }
}

fn seed_logs() -> Vec<ServiceLog> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        ServiceLog {
            id: 321,
            vehicle: "Tata Prima 2830.K".to_string(),
            issue: "Brake pad replacement".to_string(),
            date: date(2024, 8, 2),
            cost: Some(12_500),
            status: ServiceStatus::Completed,
        },
        ServiceLog {
            id: 322,
            vehicle: "Eicher Pro 2049".to_string(),
            issue: "Engine oil leak".to_string(),
            date: date(2024, 8, 10),
            cost: Some(18_000),
            status: ServiceStatus::InProgress,
        },
        ServiceLog {
            id: 323,
            vehicle: "Mahindra Supro".to_string(),
            issue: "AC not cooling".to_string(),
            date: date(2024, 8, 14),
            cost: None,
            status: ServiceStatus::New,
        },
        ServiceLog {
            id: 324,
            vehicle: "Ashok Leyland Ecomet".to_string(),
            issue: "Tyre rotation due".to_string(),
            date: date(2024, 8, 15),
            cost: Some(4_000),
            status: ServiceStatus::New,
        },
    ]
}
