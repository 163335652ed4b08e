use std::path::Path;

use rocket_academy::catalog::{Catalog, CatalogError};
use rocket_academy::config::{
    GravitySourceSetting, MassSourceSetting, load_levels, load_settings,
};
use rocket_academy::core::site::LaunchSite;
use rocket_academy::mission::{GravitySource, MassSource, SessionError, setup};

#[test]
fn builtin_levels_have_contiguous_required_orders() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 4);
    for (index, level) in catalog.levels().iter().enumerate() {
        assert_eq!(level.level as usize, index + 1);
        let orders: Vec<u32> = level.required_parts.iter().map(|p| p.required_order).collect();
        let expected: Vec<u32> = (1..=level.part_count() as u32).collect();
        assert_eq!(orders, expected, "level {}", level.level);
    }
}

#[test]
fn shipped_level_files_match_builtin_catalog() {
    let configs = load_levels("configs/levels").expect("level directory");
    let loaded = Catalog::from_configs(&configs).expect("valid catalog");
    let builtin = Catalog::builtin();
    assert_eq!(loaded.len(), builtin.len());

    for (file, table) in loaded.levels().iter().zip(builtin.levels()) {
        assert_eq!(file.level, table.level);
        assert_eq!(file.name, table.name);
        assert_eq!(file.target, table.target);
        assert_eq!(file.gravity, table.gravity);
        assert_eq!(file.astronauts, table.astronauts);
        assert_eq!(file.reward, table.reward);
        assert_eq!(file.dry_mass(), table.dry_mass());
        assert!(file.correct_order().eq(table.correct_order()));
    }
}

#[test]
fn shipped_settings_match_defaults() {
    let settings = load_settings("configs/settings.toml").expect("settings file");
    assert_eq!(settings.fuel.reference_gravity, 9.8);
    assert_eq!(settings.fuel.crew_unit_mass, 100.0);
    assert_eq!(settings.fuel.scale_factor, 15.0);
    assert_eq!(settings.fuel.mass_source, MassSourceSetting::Assembled);
    assert_eq!(settings.fuel.gravity_source, GravitySourceSetting::Destination);
    assert_eq!(settings.session.starting_level, 1);
    assert_eq!(settings.session.launch_site, "earth");
}

#[test]
fn yaml_catalog_drives_a_session() {
    let mut session = setup::session(Some(Path::new("tests/fixtures/two_part.yaml")), None)
        .expect("session from yaml");
    assert_eq!(session.catalog().len(), 2);
    session.place_part("engine");
    session.place_part("nose");
    assert_eq!(session.required_fuel(), 6000);
}

#[test]
fn settings_file_selects_level_site_and_policy() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
        [fuel]
        mass_source = "required"
        gravity_source = "launch_site"

        [session]
        starting_level = 2
        launch_site = "Mars"
        "#,
    )
    .expect("write settings");

    let session = setup::session(None, Some(&path)).expect("session");
    assert_eq!(session.active_level().level, 2);
    assert_eq!(session.launch_site(), LaunchSite::Mars);
    assert_eq!(session.policy().mass_source, MassSource::Required);
    assert_eq!(session.policy().gravity_source, GravitySource::LaunchSite);
    // 700 * (3.71 / 9.8) * 15 = 3975.0
    assert_eq!(session.required_fuel(), 3975);
}

#[test]
fn starting_level_outside_catalog_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[session]\nstarting_level = 9\n").expect("write settings");
    let err = setup::session(None, Some(&path)).expect_err("level 9 does not exist");
    assert!(matches!(err, SessionError::UnknownLevel(9)));
}

#[test]
fn unknown_launch_site_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[session]\nlaunch_site = \"venus\"\n").expect("write settings");
    let err = setup::session(None, Some(&path)).expect_err("venus is not a site");
    assert!(matches!(err, SessionError::UnknownSite(_)));
}

#[test]
fn level_with_gap_in_required_order_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gap.yaml");
    std::fs::write(
        &path,
        r#"
- level: 1
  name: Gap
  target: Nowhere
  planet: Earth
  gravity: 9.8
  reward: 1
  parts:
    - { id: a, name: A, required_order: 1, mass: 1.0 }
    - { id: b, name: B, required_order: 3, mass: 1.0 }
"#,
    )
    .expect("write levels");
    let err = setup::catalog(Some(&path)).expect_err("order 2 is missing");
    assert!(matches!(
        err,
        SessionError::Catalog(CatalogError::InvalidRequiredOrder { .. })
    ));
}
