//! Service plans
//!
//! A plan code identifies the contract duration (1, 2 or 3 years) and whether
//! the Cayambe regional surcharge applies. The set is closed: exactly six
//! codes exist and every other value is rejected.
//!
//! Records written before the duration/region split stored the plan as a bare
//! integer. The deserializer is the single place that normalizes those legacy
//! values (`1` → `"1"`, ...), logging each occurrence as an anomaly. A legacy
//! numeric record that was really a Cayambe contract is indistinguishable
//! from a non-Cayambe one and will price without the surcharge; the log line
//! is the flag for that, nothing attempts to guess.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::PlanError;

/// Contract duration plus regional surcharge flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServicePlan {
    OneYear,
    TwoYears,
    ThreeYears,
    OneYearCayambe,
    TwoYearsCayambe,
    ThreeYearsCayambe,
}

impl ServicePlan {
    /// All six plan codes
    pub const ALL: [ServicePlan; 6] = [
        ServicePlan::OneYear,
        ServicePlan::TwoYears,
        ServicePlan::ThreeYears,
        ServicePlan::OneYearCayambe,
        ServicePlan::TwoYearsCayambe,
        ServicePlan::ThreeYearsCayambe,
    ];

    /// The canonical string code stored in documents
    pub fn code(&self) -> &'static str {
        match self {
            ServicePlan::OneYear => "1",
            ServicePlan::TwoYears => "2",
            ServicePlan::ThreeYears => "3",
            ServicePlan::OneYearCayambe => "1-cayambe",
            ServicePlan::TwoYearsCayambe => "2-cayambe",
            ServicePlan::ThreeYearsCayambe => "3-cayambe",
        }
    }

    /// Contract duration in whole years
    pub fn duration_years(&self) -> u32 {
        match self {
            ServicePlan::OneYear | ServicePlan::OneYearCayambe => 1,
            ServicePlan::TwoYears | ServicePlan::TwoYearsCayambe => 2,
            ServicePlan::ThreeYears | ServicePlan::ThreeYearsCayambe => 3,
        }
    }

    /// Returns true for plans carrying the Cayambe regional surcharge
    pub fn is_cayambe(&self) -> bool {
        matches!(
            self,
            ServicePlan::OneYearCayambe
                | ServicePlan::TwoYearsCayambe
                | ServicePlan::ThreeYearsCayambe
        )
    }

    /// Recovers a plan from a legacy bare-integer code.
    ///
    /// Only 1, 2 and 3 are recoverable; the numeric form never encoded the
    /// Cayambe variants. Each call logs the anomaly.
    pub fn from_legacy_number(value: i64) -> Result<Self, PlanError> {
        let plan = match value {
            1 => ServicePlan::OneYear,
            2 => ServicePlan::TwoYears,
            3 => ServicePlan::ThreeYears,
            other => return Err(PlanError::LegacyCodeOutOfRange(other)),
        };
        warn!(
            legacy_code = value,
            normalized = plan.code(),
            "normalized legacy numeric plan code; Cayambe variants are unrecoverable from numeric records"
        );
        Ok(plan)
    }
}

impl fmt::Display for ServicePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ServicePlan {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(ServicePlan::OneYear),
            "2" => Ok(ServicePlan::TwoYears),
            "3" => Ok(ServicePlan::ThreeYears),
            "1-cayambe" => Ok(ServicePlan::OneYearCayambe),
            "2-cayambe" => Ok(ServicePlan::TwoYearsCayambe),
            "3-cayambe" => Ok(ServicePlan::ThreeYearsCayambe),
            other => Err(PlanError::UnknownCode(other.to_string())),
        }
    }
}

impl Serialize for ServicePlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ServicePlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PlanVisitor)
    }
}

struct PlanVisitor;

impl de::Visitor<'_> for PlanVisitor {
    type Value = ServicePlan;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a service plan code (\"1\", \"2\", \"3\", \"1-cayambe\", \"2-cayambe\", \"3-cayambe\") or a legacy integer 1-3")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        ServicePlan::from_legacy_number(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let value = i64::try_from(value)
            .map_err(|_| E::custom(PlanError::LegacyCodeOutOfRange(i64::MAX)))?;
        ServicePlan::from_legacy_number(value).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        // JSON numbers from older exports may arrive as floats
        if value.fract() == 0.0 && (1.0..=3.0).contains(&value) {
            ServicePlan::from_legacy_number(value as i64).map_err(E::custom)
        } else {
            Err(E::custom(PlanError::UnknownCode(value.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for plan in ServicePlan::ALL {
            assert_eq!(plan.code().parse::<ServicePlan>().unwrap(), plan);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            "4".parse::<ServicePlan>(),
            Err(PlanError::UnknownCode("4".to_string()))
        );
        assert!("cayambe".parse::<ServicePlan>().is_err());
        assert!("".parse::<ServicePlan>().is_err());
    }

    #[test]
    fn test_duration_and_region() {
        assert_eq!(ServicePlan::OneYear.duration_years(), 1);
        assert_eq!(ServicePlan::ThreeYearsCayambe.duration_years(), 3);
        assert!(!ServicePlan::TwoYears.is_cayambe());
        assert!(ServicePlan::TwoYearsCayambe.is_cayambe());
    }

    #[test]
    fn test_deserialize_canonical_string() {
        let plan: ServicePlan = serde_json::from_str("\"2-cayambe\"").unwrap();
        assert_eq!(plan, ServicePlan::TwoYearsCayambe);
    }

    #[test]
    fn test_deserialize_legacy_integer() {
        let plan: ServicePlan = serde_json::from_str("2").unwrap();
        assert_eq!(plan, ServicePlan::TwoYears);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_number() {
        assert!(serde_json::from_str::<ServicePlan>("0").is_err());
        assert!(serde_json::from_str::<ServicePlan>("4").is_err());
        assert!(serde_json::from_str::<ServicePlan>("2.5").is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&ServicePlan::ThreeYearsCayambe).unwrap(),
            "\"3-cayambe\""
        );
    }
}
