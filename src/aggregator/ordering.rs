//! Metric fields and profile ordering.
//!
//! Sorting is the only operation that imposes an order on `Profile::calls`.
//! It is descending and stable: calls with equal values keep their previous
//! relative order (ascending name, straight out of `flatten`).

use crate::parser::{Call, Profile};
use crate::utils::error::ProfileError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A numeric field of a flattened call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricField {
    Count,
    WallTime,
    ExclusiveWallTime,
    CpuTime,
    ExclusiveCpuTime,
    Memory,
    ExclusiveMemory,
    IoTime,
    ExclusiveIoTime,
}

impl MetricField {
    /// Every sortable field, in display order
    pub const ALL: [MetricField; 9] = [
        MetricField::Count,
        MetricField::WallTime,
        MetricField::ExclusiveWallTime,
        MetricField::CpuTime,
        MetricField::ExclusiveCpuTime,
        MetricField::Memory,
        MetricField::ExclusiveMemory,
        MetricField::IoTime,
        MetricField::ExclusiveIoTime,
    ];

    /// Canonical field name
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricField::Count => "Count",
            MetricField::WallTime => "WallTime",
            MetricField::ExclusiveWallTime => "ExclusiveWallTime",
            MetricField::CpuTime => "CpuTime",
            MetricField::ExclusiveCpuTime => "ExclusiveCpuTime",
            MetricField::Memory => "Memory",
            MetricField::ExclusiveMemory => "ExclusiveMemory",
            MetricField::IoTime => "IoTime",
            MetricField::ExclusiveIoTime => "ExclusiveIoTime",
        }
    }

    /// Compare two calls on this field, ascending
    pub fn compare(&self, a: &Call, b: &Call) -> Ordering {
        match self {
            MetricField::Count => a.count.cmp(&b.count),
            _ => a.metric(*self).total_cmp(&b.metric(*self)),
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricField {
    type Err = ProfileError;

    /// Accepts canonical names ("ExclusiveWallTime") and their snake_case form
    /// ("exclusive_wall_time")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricField::ALL
            .into_iter()
            .find(|field| field.as_str() == s || to_snake_case(field.as_str()) == s)
            .ok_or_else(|| ProfileError::InvalidField(s.to_string()))
    }
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl Call {
    /// Value of a metric field as a real number
    pub fn metric(&self, field: MetricField) -> f64 {
        match field {
            MetricField::Count => self.count as f64,
            MetricField::WallTime => self.wall_time,
            MetricField::ExclusiveWallTime => self.exclusive_wall_time,
            MetricField::CpuTime => self.cpu_time,
            MetricField::ExclusiveCpuTime => self.exclusive_cpu_time,
            MetricField::Memory => self.memory,
            MetricField::ExclusiveMemory => self.exclusive_memory,
            MetricField::IoTime => self.io_time,
            MetricField::ExclusiveIoTime => self.exclusive_io_time,
        }
    }
}

impl Profile {
    /// Sort calls by a field name, descending
    ///
    /// **Public** - main entry point for ordering
    ///
    /// # Errors
    /// * `ProfileError::InvalidField` - unrecognized field name; the profile is left untouched
    pub fn sort_by(&mut self, field: &str) -> Result<(), ProfileError> {
        let field: MetricField = field.parse()?;
        self.sort_by_field(field);
        Ok(())
    }

    /// Sort calls by a parsed field, descending and stable
    pub fn sort_by_field(&mut self, field: MetricField) {
        debug!("Sorting {} calls by {}", self.calls.len(), field);
        self.calls.sort_by(|a, b| field.compare(b, a));
    }
}
