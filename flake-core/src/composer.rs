//! Snowflake composition: arms, stems and branch "V"s.
//!
//! A snowflake is built arm by arm:
//! 1. [`arm_angles`] — the direction of every arm, stepping by
//!    `360 / n_arms` whole degrees.
//! 2. The stem — one segment from the origin to `stem_len` units out.
//! 3. [`compose_branch`] — a symmetric "V" at every whole unit along the
//!    stem, excluding the origin and the tip.
//!
//! Segments are streamed into a [`StrokeSink`] as soon as they are
//! computed; nothing is buffered here.

use crate::{
    canvas::{Canvas, StrokeSink},
    config::SnowflakeParams,
    geometry::{polar_to_cartesian, vector_sum},
    segment::LineSegment,
    types::ORIGIN,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

/// Computes the two strands of a branch rooted on an arm.
///
/// The root sits `root_radius` units out along the arm at `root_angle`.
/// Each strand is `branch_radius` long and leaves the root at
/// `± half_angle` degrees from the arm direction.
///
/// ### Parameters
/// - `root_angle` - Direction of the arm, in degrees.
/// - `root_radius` - Distance of the branch root from the origin.
/// - `branch_radius` - Length of each strand.
/// - `half_angle` - Angle between each strand and the arm, in degrees.
///
/// ### Returns
/// `[left, right]`, both starting at the root. `left` is rotated by
/// `+half_angle`, `right` by `-half_angle`.
pub fn compose_branch(
    root_angle: f64,
    root_radius: f64,
    branch_radius: f64,
    half_angle: f64,
) -> [LineSegment; 2] {
    let root = polar_to_cartesian(root_angle, root_radius);
    let tip_left = vector_sum(
        root,
        polar_to_cartesian(root_angle + half_angle, branch_radius),
    );
    let tip_right = vector_sum(
        root,
        polar_to_cartesian(root_angle - half_angle, branch_radius),
    );

    [
        LineSegment::new(root, tip_left),
        LineSegment::new(root, tip_right),
    ]
}

/// Returns the direction of every arm, in degrees.
///
/// Angles start at `0` and advance by `360 / n_arms` (floor division)
/// while staying below `360`. When `n_arms` does not divide `360` this
/// yields `ceil(360 / step)` angles, which is more than requested.
///
/// ### Parameters
/// - `params` - Validated parameters; `n_arms` is at most `360`, so the
///   step is never zero.
pub fn arm_angles(params: &SnowflakeParams) -> impl Iterator<Item = f64> {
    let step = params.arm_step() as usize;
    (0..360u32).step_by(step).map(f64::from)
}

/// Strokes every segment of one arm: the stem first, then its branches
/// from the origin outwards.
///
/// ### Returns
/// The number of segments stroked.
fn compose_arm(params: &SnowflakeParams, theta: f64, sink: &mut impl StrokeSink) -> usize {
    let stem_len = params.stem_len();
    let branch_len = params.branch_length();
    let half_angle = params.branch_half_angle();

    let tip = polar_to_cartesian(theta, f64::from(stem_len));
    trace!(theta, ?tip, "stem");
    sink.stroke(LineSegment::new(ORIGIN, tip));
    let mut count = 1;

    for len_e in 1..stem_len {
        for seg in compose_branch(theta, f64::from(len_e), branch_len, half_angle) {
            trace!(theta, len_e, ?seg, "branch");
            sink.stroke(seg);
            count += 1;
        }
    }
    count
}

/// Streams the whole snowflake into `sink`.
///
/// ### Parameters
/// - `params` - Validated snowflake parameters.
/// - `sink` - Receives every segment in drawing order: per arm, the stem
///   and then the branch pairs at distances `1..stem_len`.
///
/// ### Returns
/// The total number of segments stroked.
#[instrument(level = "debug", skip(sink))]
pub fn compose_snowflake(params: &SnowflakeParams, sink: &mut impl StrokeSink) -> usize {
    let mut total = 0;
    let mut arms = 0;
    for theta in arm_angles(params) {
        let n = compose_arm(params, theta, sink);
        debug!(theta, segments = n, "arm composed");
        total += n;
        arms += 1;
    }

    if arms != params.n_arms() {
        debug!(
            requested = params.n_arms(),
            drawn = arms,
            step = params.arm_step(),
            "arm step does not divide 360"
        );
    }
    total
}

/// Collects [`compose_snowflake`] into a vector.
pub fn snowflake_segments(params: &SnowflakeParams) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    compose_snowflake(params, &mut segments);
    segments
}

/// Composes the snowflake onto `canvas` and writes it into `out_dir`.
///
/// The file is named by [`SnowflakeParams::file_name`].
///
/// ### Returns
/// The path of the written file, or the canvas error if serialization
/// failed.
pub fn write_snowflake<C: Canvas>(
    params: &SnowflakeParams,
    canvas: &mut C,
    out_dir: &Path,
) -> Result<PathBuf, C::Error> {
    let segments = compose_snowflake(params, canvas);
    let path = out_dir.join(params.file_name());
    info!(segments, path = %path.display(), "snowflake composed");
    canvas.write_to(&path)?;
    Ok(path)
}
