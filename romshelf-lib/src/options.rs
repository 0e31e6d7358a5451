use chrono::{DateTime, Utc};

/// How much of the validation report to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// Do not validate
    #[default]
    Off,
    /// Report only systems and ROMs with missing fields
    ErrorsOnly,
    /// Report every system and ROM
    Verbose,
}

impl CheckMode {
    /// Resolve the mode from the `--check` and `--verbose` flags.
    ///
    /// `--verbose` implies checking.
    pub fn from_flags(check: bool, verbose: bool) -> Self {
        if verbose {
            CheckMode::Verbose
        } else if check {
            CheckMode::ErrorsOnly
        } else {
            CheckMode::Off
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self != CheckMode::Off
    }

    pub fn is_verbose(&self) -> bool {
        *self == CheckMode::Verbose
    }
}

/// Options that control a build run.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub check: CheckMode,
    /// Creation time stamped into the catalog; the current time when unset
    pub timestamp: Option<DateTime<Utc>>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(mut self, check: CheckMode) -> Self {
        self.check = check;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mode_from_flags() {
        assert_eq!(CheckMode::from_flags(false, false), CheckMode::Off);
        assert_eq!(CheckMode::from_flags(true, false), CheckMode::ErrorsOnly);
        assert_eq!(CheckMode::from_flags(false, true), CheckMode::Verbose);
        assert_eq!(CheckMode::from_flags(true, true), CheckMode::Verbose);
    }

    #[test]
    fn test_build_options_builder() {
        let options = BuildOptions::new().check(CheckMode::ErrorsOnly);
        assert!(options.check.is_enabled());
        assert!(!options.check.is_verbose());
        assert!(!BuildOptions::new().check.is_enabled());
        assert!(options.timestamp.is_none());
    }

    #[test]
    fn test_build_options_timestamp() {
        use chrono::TimeZone;

        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let options = BuildOptions::new().timestamp(ts);
        assert_eq!(options.timestamp, Some(ts));
        assert_eq!(options.check, CheckMode::Off);
    }
}
