//! Policy types.

use prod_guard_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// The declarative thresholds a run is evaluated against.
///
/// Every threshold is optional. An absent threshold means no constraint is
/// configured and the corresponding comparison passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub gates: GatePolicy,
    pub rate_limit: RateLimitPolicy,
    pub network: NetworkPolicy,
    pub load: LoadPolicy,
    pub security: SecurityPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatePolicy {
    /// Whether fixable failures may be remediated in place. Default: false.
    pub allow_autofix: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitPolicy {
    pub requests_per_minute: Option<Ceiling>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkPolicy {
    pub timeout_ms: Option<Floor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadPolicy {
    /// Highest acceptable p95 latency in milliseconds.
    pub p95_latency_ms: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityPolicy {
    /// Alert risk levels that block a release (e.g. `High`).
    pub block_on: Vec<String>,
}

/// Upper bound. Integers and floats are both accepted (`100`, `100.0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ceiling {
    pub max: Option<f64>,
}

/// Lower bound. Integers and floats are both accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Floor {
    pub min: Option<f64>,
}

impl Policy {
    pub fn allow_autofix(&self) -> bool {
        self.gates.allow_autofix
    }

    pub fn rate_limit_max(&self) -> Option<f64> {
        self.rate_limit.requests_per_minute.and_then(|c| c.max)
    }

    pub fn network_timeout_min(&self) -> Option<f64> {
        self.network.timeout_ms.and_then(|f| f.min)
    }

    pub fn load_p95_ceiling(&self) -> Option<f64> {
        self.load.p95_latency_ms
    }

    /// True when `risk` matches a blocked level, ignoring case and padding.
    pub fn blocks_risk(&self, risk: &str) -> bool {
        let risk = risk.trim();
        self.security
            .block_on
            .iter()
            .any(|level| level.trim().eq_ignore_ascii_case(risk))
    }

    pub fn has_security_block_list(&self) -> bool {
        self.security.block_on.iter().any(|l| !l.trim().is_empty())
    }

    /// Reject thresholds no artifact could satisfy.
    ///
    /// A rate-limit maximum must be positive, since the check also requires
    /// `requestsPerMinute > 0`; the other bounds must be non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max) = self.rate_limit_max() {
            if !(max.is_finite() && max > 0.0) {
                return Err(invalid(
                    "rate_limit.requests_per_minute.max",
                    format!("must be a positive number, found {max}"),
                ));
            }
        }
        if let Some(min) = self.network_timeout_min() {
            if !(min.is_finite() && min >= 0.0) {
                return Err(invalid(
                    "network.timeout_ms.min",
                    format!("must be a non-negative number, found {min}"),
                ));
            }
        }
        if let Some(ceiling) = self.load_p95_ceiling() {
            if !(ceiling.is_finite() && ceiling >= 0.0) {
                return Err(invalid(
                    "load.p95_latency_ms",
                    format!("must be a non-negative number, found {ceiling}"),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_mean_no_constraint() {
        let policy = Policy::default();
        assert!(!policy.allow_autofix());
        assert_eq!(policy.rate_limit_max(), None);
        assert_eq!(policy.network_timeout_min(), None);
        assert_eq!(policy.load_p95_ceiling(), None);
        assert!(!policy.has_security_block_list());
        assert!(!policy.blocks_risk("High"));
    }

    #[test]
    fn risk_matching_ignores_case() {
        let policy = Policy {
            security: SecurityPolicy {
                block_on: vec!["High".to_string(), " critical ".to_string()],
            },
            ..Default::default()
        };
        assert!(policy.blocks_risk("HIGH"));
        assert!(policy.blocks_risk("Critical"));
        assert!(!policy.blocks_risk("Medium"));
    }

    #[test]
    fn non_positive_rate_limit_is_invalid() {
        for max in [0.0, -10.0] {
            let policy = Policy {
                rate_limit: RateLimitPolicy {
                    requests_per_minute: Some(Ceiling { max: Some(max) }),
                },
                ..Default::default()
            };
            let err = policy.validate().unwrap_err();
            assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "rate_limit.requests_per_minute.max"));
        }
    }

    #[test]
    fn zero_timeout_floor_is_valid() {
        let policy = Policy {
            network: NetworkPolicy {
                timeout_ms: Some(Floor { min: Some(0.0) }),
            },
            ..Default::default()
        };
        assert!(policy.validate().is_ok());
    }
}
