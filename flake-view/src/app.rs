//! One generation run: parameters in, PNG file out.

use std::path::PathBuf;

use flake_core::composer::write_snowflake;
use tracing::debug;

use crate::cli::Cli;
use crate::error::AppResult;
use crate::raster::RasterCanvas;

/// Validates the arguments, composes the snowflake and writes it.
///
/// ### Returns
/// The path of the written PNG. Nothing is drawn or written when the
/// parameters are invalid.
pub fn run(cli: &Cli) -> AppResult<PathBuf> {
    let params = cli.params()?;
    debug!(?params, out_dir = %cli.out_dir.display(), "parameters accepted");

    let mut canvas = RasterCanvas::new();
    let path = write_snowflake(&params, &mut canvas, &cli.out_dir)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ScaleArg;
    use crate::error::{AppError, RenderError};
    use crate::exitcode;
    use flake_core::error::ParamError;
    use std::fs;
    use std::path::Path;

    fn cli_for(out_dir: &Path) -> Cli {
        Cli {
            n_arms: 6,
            len_k: 3,
            len_b: 0.6667,
            theta_i: 40.0,
            out_dir: out_dir.to_path_buf(),
            branch_scale: ScaleArg::Unit,
            debug: 0,
        }
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn default_run_writes_exactly_one_named_png() {
        let dir = tempfile::tempdir().unwrap();

        let path = run(&cli_for(dir.path())).unwrap();

        assert_eq!(path, dir.path().join("snowflake-6-3-0.6667-40.png"));
        assert_eq!(dir_entries(dir.path()), vec!["snowflake-6-3-0.6667-40.png"]);

        let img = image::open(&path).unwrap();
        assert!(img.width() > 0 && img.height() > 0);
    }

    #[test]
    fn parsed_arguments_drive_the_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let cli = <Cli as clap::Parser>::try_parse_from([
            "snowflake",
            "--n_arms",
            "8",
            "--len_k",
            "4",
            "--len_b",
            "0.5",
            "--theta_i",
            "30",
            "--out_dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let path = run(&cli).unwrap();
        assert_eq!(path.file_name().unwrap(), "snowflake-8-4-0.5-30.png");
        assert!(path.is_file());
    }

    #[test]
    fn invalid_parameters_fail_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_for(dir.path());
        cli.n_arms = 0;

        let err = run(&cli).unwrap_err();

        assert!(matches!(err, AppError::Params(ParamError::ArmCount(0))));
        assert_eq!(err.exit_code(), exitcode::USAGE);
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn out_of_range_angle_fails_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = cli_for(dir.path());
        cli.theta_i = 91.0;

        let err = run(&cli).unwrap_err();

        assert!(matches!(err, AppError::Params(ParamError::BranchAngle(_))));
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn missing_output_directory_maps_to_cantcreat() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(&dir.path().join("gone"));

        let err = run(&cli).unwrap_err();

        assert!(matches!(err, AppError::Render(RenderError::Image { .. })));
        assert_eq!(err.exit_code(), exitcode::CANTCREAT);
    }
}
