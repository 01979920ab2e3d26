use crate::triage::types::TriageError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = TriageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TriageError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
    Unknown => "unknown",
});

// ---------------------------------------------------------------------------
// SeverityLevel
// ---------------------------------------------------------------------------

/// Triage severity of a casualty.
/// Variant order encodes the escalation order: rules that raise severity
/// compare against this ordering and never lower it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Not yet determined, or input was unusable.
    Unknown,
    /// Minor injury, no urgent intervention indicated.
    Minor,
    /// Conscious casualty with no matched trigger; monitor and reassess.
    Moderate,
    /// Elevated risk; urgent care indicated.
    Serious,
    /// Life-threatening; immediate intervention indicated.
    Critical,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Serious => "serious",
            Self::Critical => "critical",
        }
    }
}

impl std::str::FromStr for SeverityLevel {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "minor" => Ok(Self::Minor),
            "moderate" => Ok(Self::Moderate),
            "serious" => Ok(Self::Serious),
            "critical" => Ok(Self::Critical),
            _ => Err(TriageError::InvalidEnum {
                field: "SeverityLevel".into(),
                value: s.into(),
            }),
        }
    }
}
