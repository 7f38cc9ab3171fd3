use aerodesign::components::ComponentKind;
use aerodesign::DesignError;
use std::time::Duration;

use crate::common::{assert_record_valid, floatplane_design, TestAppBuilder};

#[test]
fn test_rapid_edits_coalesce_into_one_evaluation() {
    let mut app = TestAppBuilder::new().build();

    for target in [500.0, 550.0, 600.0, 620.0, 640.0] {
        app.edit(|snapshot| snapshot.target_speed = target);
        app.step(50);
    }
    assert_eq!(app.latest().evaluations, 0);

    app.step(300);
    assert_eq!(app.latest().evaluations, 1);

    let record = app.latest().record().unwrap();
    assert_record_valid(record);
    assert!(record.speed_sea_level_kmh <= 640.0);

    app.step(1000);
    assert_eq!(app.latest().evaluations, 1);
}

#[test]
fn test_configured_debounce_delay() {
    let mut app = TestAppBuilder::new()
        .with_design(floatplane_design())
        .with_debounce(Duration::from_secs(1))
        .build();

    app.edit(|snapshot| snapshot.target_range = 800.0);
    app.step(0);
    app.step(600);
    assert_eq!(app.latest().evaluations, 0);

    app.step(600);
    assert_eq!(app.latest().evaluations, 1);
    assert_eq!(app.latest().record().unwrap().name, "Floatplane");
}

#[test]
fn test_each_settled_edit_is_evaluated() {
    let mut app = TestAppBuilder::new().build();

    app.edit(|snapshot| snapshot.engine = "radial_9".to_string());
    app.step(0);
    app.step(300);
    app.edit(|snapshot| snapshot.engine = "radial_14".to_string());
    app.step(0);
    app.step(300);

    assert_eq!(app.latest().evaluations, 2);
    assert_eq!(app.latest().record().unwrap().total_power_hp, 1400.0);
}

#[test]
fn test_invalid_edit_is_reported() {
    let mut app = TestAppBuilder::new().build();

    app.edit(|snapshot| snapshot.engine = "steam".to_string());
    app.step(0);
    app.step(300);

    assert!(app.latest().record().is_none());
    assert!(matches!(
        app.latest().error(),
        Some(DesignError::UnknownComponent {
            kind: ComponentKind::Engine,
            ..
        })
    ));
}

#[test]
fn test_app_uses_supplied_catalog_and_solver() {
    use aerodesign::components::{ComponentCatalog, SolverConfig};

    let catalog = ComponentCatalog::standard().unwrap();
    let mut app = TestAppBuilder::new()
        .with_catalog(catalog)
        .with_solver(SolverConfig::golden_section())
        .with_design(floatplane_design())
        .build();

    app.edit(|snapshot| snapshot.target_speed = 380.0);
    app.step(0);
    app.step(300);

    let record = app.latest().record().unwrap();
    assert_record_valid(record);
    assert!(record.speed_sea_level_kmh <= 380.0);
}
