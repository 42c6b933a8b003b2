use std::fs;

use orbital_transfers::config::{load_bodies, load_scenario};
use orbital_transfers::export::{self, report::ManeuverRow, sweep::SweepRow};
use orbital_transfers::transfer::{bielliptic_sweep, plan_scenario};

#[test]
fn maneuver_csv_leaves_missing_burns_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("report.csv");
    let rows = [
        ManeuverRow::from_burns(
            "demo",
            "capture",
            "hyperbola_to_ellipse",
            &[0.5, 1.5],
            2.0,
            100.0,
            Some(0.25),
        ),
        ManeuverRow::from_burns(
            "demo",
            "bi",
            "bielliptic",
            &[1.0, 0.5, 0.25],
            1.75,
            200.0,
            None,
        ),
    ];
    export::report::write_csv(export::writer_for_path(&path).unwrap(), &rows).expect("csv");

    let contents = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "scenario,label,kind,dv1_km_s,dv2_km_s,dv3_km_s,dv_total_km_s,tof_s,propellant_fraction"
    );
    assert_eq!(lines[1], "demo,capture,hyperbola_to_ellipse,0.5,1.5,,2.0,100.0,0.25");
    assert_eq!(lines[2], "demo,bi,bielliptic,1.0,0.5,0.25,1.75,200.0,");
}

#[test]
fn scenario_report_exports_json_envelope() {
    let scenario = load_scenario("configs/scenarios/reference.yaml").expect("scenario");
    let bodies = load_bodies("configs/bodies").expect("bodies");
    let report = plan_scenario(&scenario, &bodies, &[]).expect("plan");

    let mut buffer = Vec::new();
    export::report::write_json(&mut buffer, &report).expect("json");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");

    assert!(value["generated_utc"].as_str().unwrap().ends_with('Z'));
    assert_eq!(value["report"]["scenario"], "reference");
    let maneuvers = value["report"]["maneuvers"].as_array().unwrap();
    assert_eq!(maneuvers.len(), 4);
    assert_eq!(maneuvers[0]["kind"], "hyperbola_to_ellipse");
    let total = maneuvers[0]["dv_total_km_s"].as_f64().unwrap();
    assert!((total - 5.748_790_656_471_036).abs() < 1e-9);
}

#[test]
fn sweep_csv_matches_header_and_sample_count() {
    let points = bielliptic_sweep(7_000.0, 105_000.0, 105_000.0, 420_000.0, 8, 398_600.0)
        .expect("sweep");
    assert_eq!(points.len(), 8);
    assert_eq!(points[0].apex_km, 105_000.0);
    assert_eq!(points[7].apex_km, 420_000.0);
    assert!(points.iter().all(|p| p.hohmann_dv_km_s == points[0].hohmann_dv_km_s));
    assert!(points.last().unwrap().bielliptic_saves());

    let rows: Vec<SweepRow> = points
        .iter()
        .map(|p| SweepRow {
            apex_km: p.apex_km,
            bielliptic_dv_km_s: p.bielliptic_dv_km_s,
            hohmann_dv_km_s: p.hohmann_dv_km_s,
            bielliptic_tof_s: p.bielliptic_tof_s,
            hohmann_tof_s: p.hohmann_tof_s,
        })
        .collect();
    let mut buffer = Vec::new();
    export::sweep::write_csv(&mut buffer, &rows).expect("csv");
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.lines().next().unwrap(), export::sweep::HEADER.join(","));
    assert_eq!(text.lines().count(), 9);
}

#[test]
fn sweep_needs_two_samples() {
    assert!(bielliptic_sweep(7_000.0, 105_000.0, 1.0e5, 2.0e5, 1, 398_600.0).is_err());
}
