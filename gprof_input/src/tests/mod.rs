use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use clap::Parser;
use generator_common::output::DEFAULT_OUTPUT;
use generator_common::params::EdgeFormat;
use generator_common::random::WeightRange;
use generator_common::{Command, Directive};
use rstest::*;
use tracing::info;

use crate::args::{Algorithm, Args, EdgeFormatMode};
use crate::edges_csv::EdgeCsvWriter;
use crate::pbar::{self, PBWriter};
use crate::run_app;

static INIT: Once = Once::new();

fn init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
            .with_test_writer()
            .try_init();
    });
}

fn args_for(output: &Path, vertices: u64, edges: u64) -> Args {
    Args {
        vertices,
        edges,
        output: output.to_path_buf(),
        seed: Some(17),
        min_weight: 1,
        max_weight: 20,
        edge_format: EdgeFormatMode::Command,
        algorithms: Vec::new(),
        no_directives: false,
        output_edges_csv: None,
        progress: false,
    }
}

fn read_commands(path: &Path) -> Vec<Command> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect()
}

#[test]
fn default_invocation() {
    let app = Args::try_parse_from(["gprof_input"]).unwrap();
    assert_eq!(app.vertices, 5000);
    assert_eq!(app.edges, 5000);
    assert_eq!(app.output, Path::new(DEFAULT_OUTPUT));
    assert_eq!(app.seed, None);

    let params = app.get_params();
    assert_eq!(params.weights, WeightRange::new(1, 20));
    assert_eq!(params.edge_format, EdgeFormat::Command);
    assert_eq!(params.directives, vec![Directive::Prim, Directive::Boruvka]);
}

#[test]
fn parses_flags() {
    let app = Args::try_parse_from([
        "gprof_input",
        "-v",
        "6",
        "-e",
        "6",
        "--seed",
        "3",
        "--edge-format",
        "bare",
        "-a",
        "boruvka",
        "--min-weight",
        "2",
        "--max-weight",
        "4",
    ])
    .unwrap();

    let params = app.get_params();
    assert_eq!(params.seed, 3);
    assert_eq!(params.edge_format, EdgeFormat::Bare);
    assert_eq!(params.directives, vec![Directive::Boruvka]);
    assert_eq!(params.weights, WeightRange::new(2, 4));
}

#[test]
fn default_directives_match_explicit_order() {
    let default = Args::try_parse_from(["gprof_input"]).unwrap().get_directives();
    assert_eq!(default, Directive::DEFAULT.to_vec());

    let explicit = Args::try_parse_from(["gprof_input", "-a", "prim", "-a", "boruvka"])
        .unwrap()
        .get_directives();
    assert_eq!(explicit, default);
}

#[test]
fn no_directives_conflicts_with_algorithm() {
    assert!(Args::try_parse_from(["gprof_input", "--no-directives", "-a", "prim"]).is_err());

    let app = Args::try_parse_from(["gprof_input", "--no-directives"]).unwrap();
    assert!(app.get_directives().is_empty());
}

#[rstest]
#[case(6, 6, false)]
#[case(2, 2, false)]
#[case(5000, 5000, false)]
#[case(5000, 5000, true)]
fn writes_path(#[case] vertices: u64, #[case] edges: u64, #[case] progress: bool) {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT);

    let mut app = args_for(&path, vertices, edges);
    app.progress = progress;
    let summary = run_app(app).unwrap();
    info!("Summary: {:?}", summary);

    let lines = read_commands(&path);
    assert_eq!(lines.len() as u64, 1 + (edges - 1) + 2);
    assert_eq!(lines[0], Command::NewGraph { vertices, edges: 0 });
    for (k, line) in lines[1..lines.len() - 2].iter().enumerate() {
        let k = k as u64;
        assert!(
            matches!(line, Command::NewEdge(e, w) if *e == (k, k + 1) && (1..=20).contains(w)),
            "unexpected line {:?}",
            line
        );
    }
    assert_eq!(lines[lines.len() - 2], Command::Directive(Directive::Prim));
    assert_eq!(lines[lines.len() - 1], Command::Directive(Directive::Boruvka));
    assert_eq!(summary.edges_written, edges - 1);
}

#[test]
fn seed_reproduces_file() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");

    run_app(args_for(&a, 300, 300)).unwrap();
    run_app(args_for(&b, 300, 300)).unwrap();

    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[rstest]
#[case(5, 1)]
#[case(5, 0)]
fn rejects_short_paths(#[case] vertices: u64, #[case] edges: u64) {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT);

    let err = run_app(args_for(&path, vertices, edges)).unwrap_err();
    let err = err
        .downcast_ref::<generator_common::error::GeneratorError>()
        .expect("generator error");
    assert!(err.is_invalid_argument());
    assert!(!path.exists());
}

#[test]
fn edge_csv_matches_output() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT);
    let csv_path = dir.path().join("edges.csv");

    let mut app = args_for(&path, 10, 10);
    app.output_edges_csv = Some(csv_path.clone());
    app.algorithms = vec![Algorithm::Boruvka, Algorithm::Prim];
    let summary = run_app(app).unwrap();

    let mut rdr = csv::Reader::from_path(&csv_path).unwrap();
    assert_eq!(
        rdr.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["edge_i", "edge_j", "weight"]
    );
    let rows: Vec<(u64, u64, u32)> = rdr
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].parse().unwrap(), r[1].parse().unwrap(), r[2].parse().unwrap())
        })
        .collect();

    let lines = read_commands(&path);
    let edges: Vec<(u64, u64, u32)> = lines
        .iter()
        .filter_map(Command::edge)
        .map(|((i, j), w)| (i, j, w))
        .collect();
    assert_eq!(rows, edges);
    assert_eq!(rows.iter().map(|r| u64::from(r.2)).sum::<u64>(), summary.total_weight);

    assert_eq!(
        &lines[lines.len() - 2..],
        &[Command::Directive(Directive::Boruvka), Command::Directive(Directive::Prim)]
    );
}

#[test]
fn bare_format_announces_edges() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT);

    let mut app = args_for(&path, 6, 6);
    app.edge_format = EdgeFormatMode::Bare;
    app.no_directives = true;
    run_app(app).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Newgraph 6 5"));
    assert_eq!(lines.clone().count(), 5);
    assert!(lines.all(|l| matches!(l.parse::<Command>(), Ok(Command::BareEdge(..)))));
}

#[test]
fn failed_output_removes_edge_csv() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join(DEFAULT_OUTPUT);
    let csv_path = dir.path().join("edges.csv");

    let mut app = args_for(&path, 6, 6);
    app.output_edges_csv = Some(csv_path.clone());
    let err = run_app(app).unwrap_err();

    assert!(err
        .downcast_ref::<generator_common::error::GeneratorError>()
        .map_or(false, |e| !e.is_invalid_argument()));
    assert!(!path.exists());
    assert!(!csv_path.exists());
}

#[test]
fn discarded_edge_csv_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("edges.csv");

    let mut wtr = EdgeCsvWriter::new(&csv_path).unwrap();
    wtr.write_edge((0, 1), 4).unwrap();
    assert!(csv_path.exists());
    wtr.discard();

    assert!(!csv_path.exists());
}

#[test]
fn log_lines_go_above_progress_bar() {
    pbar::create_progress_bar(3);
    pbar::increment_progress(1);

    let mut writer = PBWriter::new();
    assert_eq!(writer.write(b"Writing edges...\n").unwrap(), 17);
    writer.flush().unwrap();

    pbar::finish_progress_bar();
    assert_eq!(writer.write(b"").unwrap(), 0);
}
