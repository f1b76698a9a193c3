use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LoanError;

/// how often installments fall due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    #[serde(rename = "W")]
    Weekly,
    #[serde(rename = "BW")]
    BiWeekly,
    #[default]
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "Q")]
    Quarterly,
    #[serde(rename = "S")]
    SemiAnnual,
    #[serde(rename = "A")]
    Annual,
}

/// step between two consecutive payment dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollStep {
    /// fixed number of days, no month-end handling
    Days(u64),
    /// whole calendar months with end-of-month preservation
    Months(u32),
}

impl Frequency {
    pub const ALL: [Frequency; 6] = [
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::SemiAnnual,
        Frequency::Annual,
    ];

    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Weekly => 52,
            Frequency::BiWeekly => 26,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::SemiAnnual => 2,
            Frequency::Annual => 1,
        }
    }

    pub fn roll_step(&self) -> RollStep {
        match self {
            Frequency::Weekly => RollStep::Days(7),
            Frequency::BiWeekly => RollStep::Days(14),
            Frequency::Monthly => RollStep::Months(1),
            Frequency::Quarterly => RollStep::Months(3),
            Frequency::SemiAnnual => RollStep::Months(6),
            Frequency::Annual => RollStep::Months(12),
        }
    }

    /// short code used by requests
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Weekly => "W",
            Frequency::BiWeekly => "BW",
            Frequency::Monthly => "M",
            Frequency::Quarterly => "Q",
            Frequency::SemiAnnual => "S",
            Frequency::Annual => "A",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Frequency {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|f| f.code() == s)
            .ok_or_else(|| LoanError::UnknownFrequency { code: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        let counts: Vec<u32> = Frequency::ALL.iter().map(|f| f.periods_per_year()).collect();
        assert_eq!(counts, vec![52, 26, 12, 4, 2, 1]);
    }

    #[test]
    fn test_roll_steps() {
        assert_eq!(Frequency::Weekly.roll_step(), RollStep::Days(7));
        assert_eq!(Frequency::BiWeekly.roll_step(), RollStep::Days(14));
        assert_eq!(Frequency::Quarterly.roll_step(), RollStep::Months(3));
        assert_eq!(Frequency::Annual.roll_step(), RollStep::Months(12));
    }

    #[test]
    fn test_code_parsing() {
        for frequency in Frequency::ALL {
            assert_eq!(frequency.code().parse::<Frequency>().unwrap(), frequency);
        }

        let err = "D".parse::<Frequency>().unwrap_err();
        assert_eq!(err, LoanError::UnknownFrequency { code: "D".to_string() });

        // codes are case sensitive
        assert!("m".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Frequency::BiWeekly).unwrap(), "\"BW\"");
        let parsed: Frequency = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(parsed, Frequency::SemiAnnual);
    }
}
