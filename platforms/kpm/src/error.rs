use core::fmt;

/// Status codes handed back to the power-management dispatcher.
///
/// The numeric values follow the PSCI return-code space so they can be
/// forwarded to the non-secure caller unchanged.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PmError {
    /// Malformed or out-of-range power-state request.
    InvalidParams = -2,
    /// Generic platform failure. Reserved; no current handler returns it.
    Failure = -6,
    /// Resume address outside the normal-world memory window.
    InvalidAddress = -9,
}

/// Result type used by all dispatcher-facing operations.
pub type PmResult<T = ()> = Result<T, PmError>;

impl PmError {
    /// The raw PSCI return code.
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidParams => "invalid parameters",
            Self::Failure => "platform failure",
            Self::InvalidAddress => "invalid address",
        }
    }
}

impl fmt::Display for PmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
