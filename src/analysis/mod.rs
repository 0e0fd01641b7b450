mod accumulate;
mod peaks;
mod trajectory;

pub(crate) use accumulate::accumulate;
pub(crate) use peaks::peaks_by_month;
pub(crate) use trajectory::{target_trajectory, TrajectoryPoint, DEFAULT_TRAJECTORY_DAYS};
