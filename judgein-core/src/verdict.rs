use std::process::ExitCode;

use crate::{Role, ScanResult, Violation, ViolationKind};

/// Judge verdicts, carried to the harness as the process exit status.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Verdict {
    Accepted = 0,
    WrongAnswer = 1,
    PresentationError = 2,
    InternalError = 3,
    Partial = 7,
}

impl Verdict {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_violation(violation: &Violation, role: Role) -> Verdict {
        match (role, violation.kind()) {
            (Role::Validator, _) | (_, ViolationKind::Internal) => Verdict::InternalError,
            (Role::Checker, ViolationKind::Requirement) => Verdict::WrongAnswer,
            (Role::Checker, ViolationKind::Presentation | ViolationKind::EndOfStream) => {
                Verdict::PresentationError
            }
        }
    }

    #[must_use]
    pub fn from_result<T>(result: &ScanResult<T>, role: Role) -> Verdict {
        match result {
            Ok(_) => Verdict::Accepted,
            Err(violation) => Verdict::from_violation(violation, role),
        }
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> ExitCode {
        ExitCode::from(verdict.code())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expected, Role, ScanResult, Verdict, Violation};

    #[test]
    fn test_codes() {
        assert_eq!(Verdict::Accepted.code(), 0);
        assert_eq!(Verdict::WrongAnswer.code(), 1);
        assert_eq!(Verdict::PresentationError.code(), 2);
        assert_eq!(Verdict::InternalError.code(), 3);
        assert_eq!(Verdict::Partial.code(), 7);
    }

    #[test]
    fn test_checker_mapping() {
        let range = Violation::IntegerRange {
            value: 5,
            min: 0,
            max: 1,
        };
        let ws = Violation::Whitespace {
            expected: Expected::Space,
            found: None,
        };
        let io = Violation::Io(String::from("gone"));
        assert_eq!(
            Verdict::from_violation(&range, Role::Checker),
            Verdict::WrongAnswer
        );
        assert_eq!(
            Verdict::from_violation(&ws, Role::Checker),
            Verdict::PresentationError
        );
        assert_eq!(
            Verdict::from_violation(&Violation::EndOfStream, Role::Checker),
            Verdict::PresentationError
        );
        assert_eq!(
            Verdict::from_violation(&io, Role::Checker),
            Verdict::InternalError
        );
    }

    #[test]
    fn test_validator_mapping() {
        let ok: ScanResult<()> = Ok(());
        assert_eq!(Verdict::from_result(&ok, Role::Validator), Verdict::Accepted);
        let range: ScanResult<()> = Err(Violation::IntegerRange {
            value: 5,
            min: 0,
            max: 1,
        });
        assert_eq!(
            Verdict::from_result(&range, Role::Validator),
            Verdict::InternalError
        );
    }
}
