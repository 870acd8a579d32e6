use thiserror::Error;

/// A snowflake parameter outside its accepted range.
///
/// Every variant carries the rejected value so the message can be shown
/// to the user as is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("number of arms must be between 1 and 360, got {0}")]
    ArmCount(u32),

    #[error("stem length must be at least 1, got {0}")]
    StemLength(u32),

    #[error("branch ratio must be between 0 and 1, got {0}")]
    BranchRatio(f64),

    #[error("branch half-angle must be between 0 and 90 degrees, got {0}")]
    BranchAngle(f64),
}

pub type ParamResult<T> = Result<T, ParamError>;
