//! The whole unit catalog must resolve

use dimr_units::audit::verify_catalog;
use dimr_units::dimr_core::Factor;
use pretty_assertions::assert_eq;

#[test]
fn test_every_catalog_unit_resolves() {
    let analyzer = verify_catalog().expect("catalog units resolve");
    assert_eq!(analyzer.len(), 73);

    for analysis in analyzer.report() {
        assert!(analysis.factor.to_f64() > 0.0, "{} has factor {}", analysis.unit, analysis.factor);
        assert!(analysis.nodes >= 1);
    }
}

#[test]
fn test_report_contents() {
    let analyzer = verify_catalog().unwrap();
    let report = analyzer.report();

    let metre = report
        .iter()
        .find(|a| a.unit.ends_with("si::Metre"))
        .expect("metre is analysed");
    assert_eq!(metre.factor, Factor::ONE);
    assert!(metre.simplified);
    assert_eq!(metre.dimension.len(), 1);
    assert!(metre.dimension[0].base.ends_with("si::Length"));

    let radian = report.iter().find(|a| a.unit == "()").expect("radian is analysed");
    assert!(radian.is_dimensionless());
}

#[test]
fn test_report_serializes() {
    let analyzer = verify_catalog().unwrap();
    let json: serde_json::Value = serde_json::from_str(&analyzer.to_json().unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 73);
    assert!(entries.iter().all(|entry| entry["factor"].is_number()));
}
