//! Command line arguments, parsed with clap.
//!
//! Range checks run inside the value parsers, so an invalid argument is
//! reported by clap before any geometry is computed.

use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};
use flake_core::config::{
    self, BranchScale, DEFAULT_ARMS, DEFAULT_BRANCH_HALF_ANGLE, DEFAULT_BRANCH_RATIO,
    DEFAULT_STEM_LEN, SnowflakeParams,
};
use flake_core::error::ParamResult;

/// Draws a branching snowflake to a PNG file
#[derive(Parser, Debug)]
#[command(name = "snowflake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of arms
    #[arg(long = "n_arms", value_name = "N", default_value_t = DEFAULT_ARMS, value_parser = parse_arm_count, allow_negative_numbers = true)]
    pub n_arms: u32,

    /// Stem length, in branch spacings
    #[arg(long = "len_k", value_name = "K", default_value_t = DEFAULT_STEM_LEN, value_parser = parse_stem_len, allow_negative_numbers = true)]
    pub len_k: u32,

    /// Branch length ratio
    #[arg(long = "len_b", value_name = "B", default_value_t = DEFAULT_BRANCH_RATIO, value_parser = parse_branch_ratio, allow_negative_numbers = true)]
    pub len_b: f64,

    /// Branch half-angle in degrees
    #[arg(long = "theta_i", value_name = "T", default_value_t = DEFAULT_BRANCH_HALF_ANGLE, value_parser = parse_branch_angle, allow_negative_numbers = true)]
    pub theta_i: f64,

    /// Output directory (must exist)
    #[arg(long = "out_dir", value_name = "DIR", default_value = ".", value_parser = parse_out_dir, value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// What the branch ratio is a fraction of
    #[arg(long = "branch_scale", value_enum, default_value_t = ScaleArg::Unit)]
    pub branch_scale: ScaleArg,

    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleArg {
    /// Branch length is `len_b` units
    Unit,
    /// Branch length is `len_k * len_b` units
    Stem,
}

impl From<ScaleArg> for BranchScale {
    fn from(arg: ScaleArg) -> Self {
        match arg {
            ScaleArg::Unit => BranchScale::Unit,
            ScaleArg::Stem => BranchScale::Stem,
        }
    }
}

impl Cli {
    /// Builds validated snowflake parameters from the parsed arguments.
    pub fn params(&self) -> ParamResult<SnowflakeParams> {
        Ok(
            SnowflakeParams::new(self.n_arms, self.len_k, self.len_b, self.theta_i)?
                .with_branch_scale(self.branch_scale.into()),
        )
    }
}

fn parse_arm_count(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|e| format!("{e}"))?;
    config::check_arm_count(n).map_err(|e| e.to_string())
}

fn parse_stem_len(s: &str) -> Result<u32, String> {
    let k: u32 = s.parse().map_err(|e| format!("{e}"))?;
    config::check_stem_len(k).map_err(|e| e.to_string())
}

fn parse_branch_ratio(s: &str) -> Result<f64, String> {
    let b: f64 = s.parse().map_err(|e| format!("{e}"))?;
    config::check_branch_ratio(b).map_err(|e| e.to_string())
}

fn parse_branch_angle(s: &str) -> Result<f64, String> {
    let t: f64 = s.parse().map_err(|e| format!("{e}"))?;
    config::check_branch_angle(t).map_err(|e| e.to_string())
}

fn parse_out_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("not a directory: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("snowflake").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.n_arms, 6);
        assert_eq!(cli.len_k, 3);
        assert_eq!(cli.len_b, 0.6667);
        assert_eq!(cli.theta_i, 40.0);
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert_eq!(cli.branch_scale, ScaleArg::Unit);
        assert_eq!(cli.debug, 0);
        assert_eq!(cli.params().unwrap(), SnowflakeParams::default());
    }

    #[test]
    fn explicit_values_are_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let dir_arg = dir.path().to_str().unwrap();
        let cli = parse(&[
            "--n_arms",
            "8",
            "--len_k",
            "5",
            "--len_b",
            "0.25",
            "--theta_i",
            "22.5",
            "--out_dir",
            dir_arg,
            "--branch_scale",
            "stem",
            "-dd",
        ])
        .unwrap();

        assert_eq!(cli.out_dir, dir.path());
        assert_eq!(cli.debug, 2);
        let params = cli.params().unwrap();
        assert_eq!(params.n_arms(), 8);
        assert_eq!(params.stem_len(), 5);
        assert_eq!(params.branch_ratio(), 0.25);
        assert_eq!(params.branch_half_angle(), 22.5);
        assert_eq!(params.branch_scale(), BranchScale::Stem);
    }

    #[rstest]
    #[case(&["--n_arms", "0"])]
    #[case(&["--n_arms", "361"])]
    #[case(&["--n_arms", "-1"])]
    #[case(&["--n_arms", "six"])]
    #[case(&["--len_k", "0"])]
    #[case(&["--len_b", "1.5"])]
    #[case(&["--len_b", "-0.1"])]
    #[case(&["--theta_i", "91"])]
    #[case(&["--theta_i", "-1"])]
    #[case(&["--out_dir", "/definitely/not/a/real/dir"])]
    #[case(&["--branch_scale", "tree"])]
    fn invalid_arguments_are_rejected(#[case] args: &[&str]) {
        let err = parse(args).unwrap_err();
        assert!(
            matches!(
                err.kind(),
                ErrorKind::ValueValidation | ErrorKind::InvalidValue
            ),
            "unexpected error kind {:?} for {:?}",
            err.kind(),
            args
        );
    }

    #[test]
    fn out_dir_must_be_a_directory_not_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = parse(&["--out_dir", file.path().to_str().unwrap()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn range_errors_carry_library_message() {
        let err = parse(&["--theta_i", "91"]).unwrap_err();
        assert!(err.to_string().contains("between 0 and 90 degrees"));
    }
}
