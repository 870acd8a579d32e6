use crate::error::{ParamError, ParamResult};

pub const DEFAULT_ARMS: u32 = 6;
pub const DEFAULT_STEM_LEN: u32 = 3;
pub const DEFAULT_BRANCH_RATIO: f64 = 0.6667;
pub const DEFAULT_BRANCH_HALF_ANGLE: f64 = 40.0;

/// Largest arm count with a non-zero angular step (`360 / n`).
pub const MAX_ARMS: u32 = 360;

/// What the branch ratio is a fraction of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchScale {
    /// Fraction of one stem unit: branches are `branch_ratio` long.
    #[default]
    Unit,
    /// Fraction of the whole stem: branches are `stem_len * branch_ratio` long.
    Stem,
}

/// Validated parameters driving a single snowflake.
///
/// Values can only be built through [`SnowflakeParams::new`] (or
/// [`Default`]), so every instance satisfies the range checks below and
/// the composer never has to re-check them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnowflakeParams {
    n_arms: u32,
    stem_len: u32,
    branch_ratio: f64,
    branch_half_angle: f64,
    branch_scale: BranchScale,
}

impl Default for SnowflakeParams {
    fn default() -> Self {
        Self {
            n_arms: DEFAULT_ARMS,
            stem_len: DEFAULT_STEM_LEN,
            branch_ratio: DEFAULT_BRANCH_RATIO,
            branch_half_angle: DEFAULT_BRANCH_HALF_ANGLE,
            branch_scale: BranchScale::Unit,
        }
    }
}

impl SnowflakeParams {
    /// Builds a parameter set, rejecting any value outside its range.
    ///
    /// ### Parameters
    /// - `n_arms` - Requested number of arms, `1..=360`.
    /// - `stem_len` - Stem length in units, at least `1`.
    /// - `branch_ratio` - Branch length ratio in `[0, 1]`.
    /// - `branch_half_angle` - Angle of each branch strand from its arm,
    ///   in degrees, `[0, 90]`.
    ///
    /// ### Returns
    /// The parameters with [`BranchScale::Unit`], or the first
    /// [`ParamError`] encountered in argument order.
    pub fn new(
        n_arms: u32,
        stem_len: u32,
        branch_ratio: f64,
        branch_half_angle: f64,
    ) -> ParamResult<Self> {
        Ok(Self {
            n_arms: check_arm_count(n_arms)?,
            stem_len: check_stem_len(stem_len)?,
            branch_ratio: check_branch_ratio(branch_ratio)?,
            branch_half_angle: check_branch_angle(branch_half_angle)?,
            branch_scale: BranchScale::Unit,
        })
    }

    pub fn with_branch_scale(mut self, scale: BranchScale) -> Self {
        self.branch_scale = scale;
        self
    }

    pub fn n_arms(&self) -> u32 {
        self.n_arms
    }

    pub fn stem_len(&self) -> u32 {
        self.stem_len
    }

    pub fn branch_ratio(&self) -> f64 {
        self.branch_ratio
    }

    pub fn branch_half_angle(&self) -> f64 {
        self.branch_half_angle
    }

    pub fn branch_scale(&self) -> BranchScale {
        self.branch_scale
    }

    /// Angular distance between consecutive arms, in whole degrees.
    ///
    /// Uses floor division, so for arm counts that do not divide 360 the
    /// arms sweep past the last requested one and extra arms are drawn.
    pub fn arm_step(&self) -> u32 {
        360 / self.n_arms
    }

    /// Length of each branch strand in units.
    pub fn branch_length(&self) -> f64 {
        match self.branch_scale {
            BranchScale::Unit => self.branch_ratio,
            BranchScale::Stem => f64::from(self.stem_len) * self.branch_ratio,
        }
    }

    /// Output file name, `snowflake-{n_arms}-{len_k}-{len_b}-{theta_i}.png`.
    ///
    /// `len_b` keeps a trailing `.0` when integral (`1.0`, not `1`) and
    /// switches to a two-digit exponent below `1e-4` (`1e-05`).
    pub fn file_name(&self) -> String {
        format!(
            "snowflake-{}-{}-{}-{}.png",
            self.n_arms,
            self.stem_len,
            format_ratio(self.branch_ratio),
            self.branch_half_angle
        )
    }
}

/// Formats a real the way the generated file names have always spelled it.
fn format_ratio(v: f64) -> String {
    if v != 0.0 && v.abs() < 1e-4 {
        let sci = format!("{v:e}");
        match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => sci,
        }
    } else if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

pub fn check_arm_count(n: u32) -> ParamResult<u32> {
    if (1..=MAX_ARMS).contains(&n) {
        Ok(n)
    } else {
        Err(ParamError::ArmCount(n))
    }
}

pub fn check_stem_len(k: u32) -> ParamResult<u32> {
    if k >= 1 {
        Ok(k)
    } else {
        Err(ParamError::StemLength(k))
    }
}

/// NaN never passes a range check.
pub fn check_branch_ratio(b: f64) -> ParamResult<f64> {
    if (0.0..=1.0).contains(&b) {
        Ok(b)
    } else {
        Err(ParamError::BranchRatio(b))
    }
}

pub fn check_branch_angle(t: f64) -> ParamResult<f64> {
    if (0.0..=90.0).contains(&t) {
        Ok(t)
    } else {
        Err(ParamError::BranchAngle(t))
    }
}
