use strum::{Display, EnumIs, EnumString, FromRepr, VariantArray};
use tracing_core::LevelFilter;

#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    FromRepr,
    EnumIs,
    EnumString,
    Display,
    VariantArray,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum TraceLevel {
    #[strum(to_string = "off", serialize = "none")]
    Off = 0,
    #[strum(serialize = "error")]
    Error = 1,
    #[strum(serialize = "warn")]
    Warn = 2,
    #[strum(serialize = "info")]
    #[default]
    Info = 3,
    #[strum(serialize = "debug")]
    Debug = 4,
    #[strum(serialize = "trace")]
    Trace = 5,
}

impl From<TraceLevel> for LevelFilter {
    fn from(value: TraceLevel) -> Self {
        match value {
            TraceLevel::Off => LevelFilter::OFF,
            TraceLevel::Error => LevelFilter::ERROR,
            TraceLevel::Warn => LevelFilter::WARN,
            TraceLevel::Info => LevelFilter::INFO,
            TraceLevel::Debug => LevelFilter::DEBUG,
            TraceLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TraceLevel::from_str("DEBUG").ok(), Some(TraceLevel::Debug));
        assert_eq!(TraceLevel::from_str("none").ok(), Some(TraceLevel::Off));
        assert!(TraceLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(LevelFilter::from(TraceLevel::Off), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(TraceLevel::Warn), LevelFilter::WARN);
    }
}
