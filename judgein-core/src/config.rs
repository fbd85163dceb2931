/// How strictly whitespace between tokens is checked.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WhitespaceMode {
    /// Every byte is significant. This is how judge-provided files are validated.
    #[default]
    Identical,
    /// Runs of blanks before a token are skipped, never across a line break unless
    /// the previous structural read was a newline. Meant for contestant output.
    Standard,
}

/// Who produced the stream being read, which decides how a violation is judged.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Role {
    /// The stream is the judge's own data; any violation means the data is broken.
    #[default]
    Validator,
    /// The stream is contestant output.
    Checker,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ScanConfig {
    pub whitespace: WhitespaceMode,
    pub role: Role,
}

impl ScanConfig {
    #[must_use]
    pub fn validator() -> Self {
        ScanConfig::default()
    }

    #[must_use]
    pub fn standard_checker() -> Self {
        ScanConfig {
            whitespace: WhitespaceMode::Standard,
            role: Role::Checker,
        }
    }

    #[must_use]
    pub fn identical_checker() -> Self {
        ScanConfig {
            whitespace: WhitespaceMode::Identical,
            role: Role::Checker,
        }
    }

    #[must_use]
    pub fn with_whitespace(mut self, whitespace: WhitespaceMode) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[test]
fn test_presets() {
    assert_eq!(ScanConfig::validator().whitespace, WhitespaceMode::Identical);
    assert_eq!(ScanConfig::validator().role, Role::Validator);
    assert_eq!(
        ScanConfig::identical_checker(),
        ScanConfig::default().with_role(Role::Checker)
    );
    assert_eq!(
        ScanConfig::standard_checker(),
        ScanConfig::identical_checker().with_whitespace(WhitespaceMode::Standard)
    );
}
