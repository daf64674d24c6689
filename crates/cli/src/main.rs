use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use windmill::prelude::*;

mod provenance;

#[derive(Parser)]
#[command(name = "windmill")]
#[command(about = "Drive the windmill process over random or explicit planes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a seeded plane and advance the windmill for a number of steps
    Run {
        #[arg(long, default_value_t = PlaneCfg::default().size)]
        size: usize,
        #[arg(long, default_value_t = PlaneCfg::default().density)]
        density: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 20)]
        steps: usize,
        /// Write the JSON trace here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run a single step on an explicit plane, e.g. --points "1,2;3,4;2,6" --pivot 3,4
    Step {
        #[arg(long, value_parser = parse_points, allow_hyphen_values = true)]
        points: Plane,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        pivot: Point,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, Serialize)]
struct RunParams {
    size: usize,
    density: f64,
    seed: u64,
    steps: usize,
}

#[derive(Debug, Serialize)]
struct StepRecord {
    pivot: [i64; 2],
    line: [[i64; 2]; 2],
    next: [i64; 2],
    in_front: usize,
    behind: usize,
}

impl From<&Step> for StepRecord {
    fn from(s: &Step) -> Self {
        Self {
            pivot: xy(s.pivot),
            line: [xy(s.line.near), xy(s.line.far)],
            next: xy(s.next),
            in_front: s.in_front,
            behind: s.behind,
        }
    }
}

#[derive(Debug, Serialize)]
struct Trace {
    params: RunParams,
    plane: Vec<[i64; 2]>,
    start: [i64; 2],
    steps: Vec<StepRecord>,
    /// Set when the process ran out of points before the step limit.
    stopped: Option<String>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            size,
            density,
            seed,
            steps,
            out,
        } => run(
            RunParams {
                size,
                density,
                seed,
                steps,
            },
            out.as_deref(),
        ),
        Action::Step { points, pivot } => single_step(&points, pivot),
        Action::Report => report(),
    }
}

fn run(params: RunParams, out: Option<&Path>) -> Result<()> {
    tracing::info!(
        size = params.size,
        density = params.density,
        seed = params.seed,
        steps = params.steps,
        "run"
    );
    let trace = trace_run(params)?;
    let json = serde_json::to_vec_pretty(&trace)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = provenance::write_sidecar(path, params)?;
            tracing::info!(out = %path.display(), provenance = %sidecar.display(), "trace written");
        }
        None => println!("{}", String::from_utf8(json)?),
    }
    Ok(())
}

fn trace_run(params: RunParams) -> Result<Trace> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let plane = generate_random_plane(params.size, params.density, &mut rng)
        .context("generating plane")?;
    if !plane.supports_rotation() {
        tracing::warn!(
            points = plane.len(),
            "plane is too small or collinear to rotate meaningfully"
        );
    }
    let start = pick_pivot(&plane, &mut rng).context("picking start pivot")?;

    let mut steps = Vec::with_capacity(params.steps);
    let mut stopped = None;
    for s in Windmill::new(&plane, start)?.take(params.steps) {
        match s {
            Ok(s) => steps.push(StepRecord::from(&s)),
            Err(e) => {
                tracing::warn!(error = %e, completed = steps.len(), "windmill stopped");
                stopped = Some(e.to_string());
            }
        }
    }
    Ok(Trace {
        params,
        plane: plane.iter().copied().map(xy).collect(),
        start: xy(start),
        steps,
        stopped,
    })
}

fn single_step(plane: &Plane, pivot: Point) -> Result<()> {
    ensure!(
        plane.contains(&pivot),
        "pivot {},{} is not one of the given points",
        pivot.x,
        pivot.y
    );
    let s = step(plane, pivot)?;
    println!("{}", serde_json::to_string_pretty(&StepRecord::from(&s))?);
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::Provenance::new(serde_json::json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn xy(p: Point) -> [i64; 2] {
    [p.x, p.y]
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<i64>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<i64>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_points(s: &str) -> Result<Plane, String> {
    s.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_points_and_planes() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" -1 , 7 "), Ok(Point::new(-1, 7)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,4").is_err());

        let plane = parse_points("1,2; 3,4;2,6;3,4;").unwrap();
        assert_eq!(
            plane.points(),
            &[Point::new(1, 2), Point::new(3, 4), Point::new(2, 6)]
        );
    }

    #[test]
    fn cli_parses_step_args() {
        let cmd = Cmd::try_parse_from([
            "windmill", "step", "--points", "1,2;3,4;2,6", "--pivot", "3,4",
        ])
        .unwrap();
        match cmd.action {
            Action::Step { points, pivot } => {
                assert_eq!(points.len(), 3);
                assert_eq!(pivot, Point::new(3, 4));
            }
            _ => panic!("expected step"),
        }
    }

    #[test]
    fn step_rejects_pivot_outside_points() {
        let cmd = Cmd::try_parse_from([
            "windmill", "step", "--points", "1,2;3,4;2,6", "--pivot", "9,9",
        ])
        .unwrap();
        let Action::Step { points, pivot } = cmd.action else {
            panic!("expected step");
        };
        let err = single_step(&points, pivot).unwrap_err();
        assert!(err.to_string().contains("not one of the given points"));
    }

    #[test]
    fn step_accepts_member_pivot() {
        let cmd = Cmd::try_parse_from([
            "windmill", "step", "--points", "1,2;3,4;2,6", "--pivot", "3,4",
        ])
        .unwrap();
        let Action::Step { points, pivot } = cmd.action else {
            panic!("expected step");
        };
        single_step(&points, pivot).unwrap();
    }

    #[test]
    fn report_prints_provenance() {
        let cmd = Cmd::try_parse_from(["windmill", "report"]).unwrap();
        assert!(matches!(cmd.action, Action::Report));
        report().unwrap();
    }

    #[test]
    fn cli_run_defaults_follow_plane_cfg() {
        let cmd = Cmd::try_parse_from(["windmill", "run"]).unwrap();
        match cmd.action {
            Action::Run {
                size, density, out, ..
            } => {
                assert_eq!(size, PlaneCfg::default().size);
                assert_eq!(density, PlaneCfg::default().density);
                assert!(out.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn trace_is_reproducible_and_chained() {
        let params = RunParams {
            size: 8,
            density: 0.5,
            seed: 17,
            steps: 12,
        };
        let a = trace_run(params).unwrap();
        let b = trace_run(params).unwrap();
        assert_eq!(a.plane, b.plane);
        assert_eq!(a.start, b.start);
        assert_eq!(a.steps.len(), b.steps.len());
        if let Some(first) = a.steps.first() {
            assert_eq!(first.pivot, a.start);
        }
        for pair in a.steps.windows(2) {
            assert_eq!(pair[0].next, pair[1].pivot);
        }
        assert!(a.steps.len() == params.steps || a.stopped.is_some());
    }

    #[test]
    fn empty_plane_fails_run() {
        let params = RunParams {
            size: 4,
            density: 0.0,
            seed: 1,
            steps: 3,
        };
        assert!(trace_run(params).is_err());
    }

    #[test]
    fn run_writes_trace_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("traces").join("run.json");
        let params = RunParams {
            size: 6,
            density: 0.6,
            seed: 5,
            steps: 4,
        };
        run(params, Some(out.as_path())).unwrap();
        let trace: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(trace["params"]["seed"], 5);
        assert!(trace["steps"].is_array());
        assert!(dir.path().join("traces").join("run.provenance.json").exists());
    }
}
