//! # Problems read from files
//!
//! Each problem is stored next to this module, in one or more notations, together with the
//! response of the solver where there is one.
use std::fs;
use std::path::{Path, PathBuf};

use simplex_trace::algorithm::projection::{InvalidSelection, Marker, project, Viewport};
use simplex_trace::algorithm::reconstruct::{Analysis, reconstruct, Snapshot};
use simplex_trace::data::linear_program::elements::{Objective, PivotRule};
use simplex_trace::io::{Format, import, Leniency};
use simplex_trace::io::error::{Import, Parse};
use simplex_trace::io::wire::{SolveRequest, SolveResponse};

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

fn get_test_file_path(name: &str, extension: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension(extension)
}

fn snapshots(name: &str) -> Vec<Snapshot> {
    let text = fs::read_to_string(get_test_file_path(name, "json")).unwrap();
    let response: SolveResponse = serde_json::from_str(&text).unwrap();

    response.into_snapshots().unwrap()
}

#[test]
fn notations_agree() {
    let copt = import(&get_test_file_path("big_m", "lp"), None, Leniency::Strict).unwrap();
    let standardized = import(&get_test_file_path("big_m", "txt"), None, Leniency::Strict).unwrap();

    assert_eq!(copt, standardized);
    assert_eq!(copt.nr_variables(), 6);
    assert_eq!(copt.nr_constraints(), 2);
}

#[test]
fn format_overrides_extension() {
    let result = import(
        &get_test_file_path("big_m", "lp"),
        Some(Format::Standardized),
        Leniency::Lenient,
    );

    assert!(matches!(result, Err(Import::Parse(Parse::MissingField(_)))));
}

#[test]
fn maximize() {
    let program = import(&get_test_file_path("maximize", "lp"), None, Leniency::Lenient).unwrap();

    assert_eq!(program.direction(), Objective::Maximize);
    assert_eq!(program.objective(), ["3", "2", "0", "0"]);
    assert_eq!(program.rhs(), [4f64, 6f64]);

    let json = serde_json::to_value(SolveRequest::from(&program)).unwrap();
    assert_eq!(json["is_minimize"], false);
    assert_eq!(json["pivot_rule"], "bland");
}

#[test]
fn big_m() {
    let _ = env_logger::builder().is_test(true).try_init();

    let program = import(&get_test_file_path("big_m", "lp"), None, Leniency::Lenient).unwrap();
    assert_eq!(program.pivot_rule(), PivotRule::Bland);

    let reconstruction = reconstruct(program.objective(), &snapshots("big_m"));
    assert_eq!(reconstruction.steps.len(), 4);

    let analyses = reconstruction.steps.iter().map(|step| step.analysis).collect::<Vec<_>>();
    assert_eq!(analyses, vec![
        Analysis::Initialized,
        Analysis::Pivot { entering: 1, leaving: 4 },
        Analysis::Pivot { entering: 2, leaving: 5 },
        Analysis::Optimal,
    ]);
    let last = reconstruction.steps.last().unwrap();
    assert_eq!(last.x, vec![0f64, 3f64, 2f64, 0f64, 0f64, 0f64]);
    assert_eq!(last.tableau.objective_value.to_string(), "-12");

    let trajectory = reconstruction.path.trajectory();
    let projection = project(trajectory, (1, 2), &Viewport::default()).unwrap();
    let markers = projection.points.iter().map(|point| point.marker).collect::<Vec<_>>();
    assert_eq!(markers, vec![Marker::Visited, Marker::Visited, Marker::Terminal]);
    assert_eq!((projection.points[2].x, projection.points[2].y), (550f64, 50f64));

    assert_eq!(
        project(trajectory, (1, 1), &Viewport::default()),
        Err(InvalidSelection::IdenticalAxes(1)),
    );
}

#[test]
fn serialized_steps() {
    let program = import(&get_test_file_path("big_m", "txt"), None, Leniency::Lenient).unwrap();
    let reconstruction = reconstruct(program.objective(), &snapshots("big_m"));
    let json = serde_json::to_value(&reconstruction).unwrap();

    assert_eq!(json["steps"][0]["label"], "initial");
    assert_eq!(json["steps"][1]["label"]["step"], 0);
    assert_eq!(json["steps"][1]["roles"][1], "entering");
    assert_eq!(json["steps"][1]["tableau"]["next_pivot"]["column"], 1);
    assert_eq!(json["path"].as_array().map(Vec::len), Some(4));
}
