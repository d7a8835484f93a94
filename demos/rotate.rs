//! Rotates the named direction vectors by an angle given in degrees.
//!
//! Usage: `cargo run --example rotate -- [degrees] [axis-x axis-y axis-z]`

use anyhow::{anyhow, Context};
use log::LevelFilter;
use tiny_linalg::{
    consts::{DEGREE_TO_RADIAN, RADIAN_TO_DEGREE},
    Quaternion, Vector2, Vector3,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("tiny_linalg"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let degrees = match args.next() {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("invalid angle '{arg}'"))?,
        None => 90.0,
    };
    let axis = match args.collect::<Vec<_>>().as_slice() {
        [] => Vector3::FORWARD,
        [x, y, z] => Vector3::new(x.parse()?, y.parse()?, z.parse()?),
        other => return Err(anyhow!("expected 3 axis components, got {}", other.len())),
    };
    let radians = degrees * DEGREE_TO_RADIAN;

    log::info!("rotating by {degrees}° ({radians} rad)");
    for (name, v) in [
        ("right", Vector2::RIGHT),
        ("left", Vector2::LEFT),
        ("top", Vector2::TOP),
        ("down", Vector2::DOWN),
    ] {
        log::info!("{name:>5}: {v} -> {}", v.rotated(radians));
    }

    let q = Quaternion::try_from_axis_angle(axis, radians)
        .with_context(|| format!("cannot rotate around {axis}"))?;
    log::debug!("quaternion for axis {axis}: {q} (magnitude {})", q.magnitude());
    for (name, v) in [
        ("right", Vector3::RIGHT),
        ("down", Vector3::DOWN),
        ("forward", Vector3::FORWARD),
    ] {
        log::info!("{name:>7}: {v} -> {}", q * v);
    }

    let pitch = q.try_pitch()?;
    log::info!(
        "euler angles: roll={}° pitch={}° yaw={}°",
        q.roll() * RADIAN_TO_DEGREE,
        pitch * RADIAN_TO_DEGREE,
        q.yaw() * RADIAN_TO_DEGREE,
    );

    Ok(())
}
