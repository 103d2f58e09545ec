//! MER Status Tool
//!
//! Provides runtime status information about the calculator service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const MER_INSTRUCTIONS: &str = r#"
# Canine MER Calculator Instructions

This guide explains how to calculate a dog's daily energy requirements.

## Overview

1. **RER** (Resting Energy Requirement) = 70 × (body weight in kg)^0.75 kcal/day
2. **MER** (Maintenance Energy Requirement) = RER × a life stage factor
3. Most life stages have a factor **range**, so MER is reported as a lower
   bound, an upper bound, and the mean of the two.

---

## Tools

| Tool | Purpose |
|------|---------|
| `calculate_mer` | RER, MER range and mean for a life stage and weight |
| `convert_weight` | Convert between kilograms and pounds |
| `list_life_stages` | All valid life stages with their factor ranges |
| `mer_status` | Build and process information |

### calculate_mer

- `life_stage`: identifier (`NeuteredAdult`, `neutered_adult`) or numeric code (`1`)
- `weight`: must be greater than zero
- `unit`: `kg` (default) or `lb`

Always call `list_life_stages` if unsure which stage applies.

---

## Life Stage Factors

| Code | Life Stage | Lower | Upper |
|------|------------|-------|-------|
| 1 | NeuteredAdult | 1.4 | 1.6 |
| 2 | IntactAdult | 1.4 | 1.6 |
| 3 | InactiveObeseProne | 1.2 | 1.4 |
| 4 | WeightLoss | 1.0 | 1.0 |
| 5 | WeightGain | 1.2 | 1.8 |
| 6 | ActiveWorkingDog | 2.0 | 5.0 |
| 7 | Puppy0To4Months | 3.0 | 3.0 |
| 8 | Puppy4MonthsToAdult | 1.5 | 2.0 |
| 9 | Gestation | 1.6 | 2.0 |
| 10 | Lactation | 2.0 | 5.0 |

Code 0 (`None`) is never valid.

---

## Feeding Amounts

Results include `cups_low`, `cups_high` and `cups_mean`, always `null`.
To convert to cups, divide each bound by the food's kcal per cup.
The calculator does not know food densities.

---

## Notes

- Weights of zero or less are rejected
- Pounds are converted with 1 kg = 2.20462 lb
- The same inputs always produce the same result
"#;

/// Runtime status of the calculator service
#[derive(Debug, Clone, Serialize)]
pub struct MerStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Service information
    pub started_at: String,
    pub calculations_succeeded: u64,
    pub calculations_rejected: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    calculations_succeeded: u64,
    calculations_rejected: u64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            calculations_succeeded: 0,
            calculations_rejected: 0,
        }
    }

    /// Count a calculation outcome
    pub fn record_calculation(&mut self, succeeded: bool) {
        if succeeded {
            self.calculations_succeeded += 1;
        } else {
            self.calculations_rejected += 1;
        }
    }

    pub fn get_status(&self) -> MerStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            calculations_succeeded: self.calculations_succeeded,
            calculations_rejected: self.calculations_rejected,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
