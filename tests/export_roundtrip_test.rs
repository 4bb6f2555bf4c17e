// ==========================================
// ExportApi integration tests
// ==========================================
// Export to file, read back, restore into an empty ledger
// ==========================================


use std::fs;

use chrono::NaiveDate;
use proptest::prelude::*;
use support_stock::api::ApiError;
use support_stock::domain::{Direction, Item, Location, Movement, MAX_QUANTITY};
use support_stock::i18n::t_with_args;
use support_stock::transfer;
use tempfile::TempDir;
use test_helpers::{date, movement, TestEnv};

fn seed(env: &TestEnv) {
    let ledger = &env.state.ledger_api;
    ledger
        .append(&movement(date(2024, 3, 1), Item::Roll, Direction::Inbound, Location::Dry, 8))
        .unwrap();
    ledger
        .append(&movement(date(2024, 2, 28), Item::ReturnableCrate, Direction::Inbound, Location::Meat, 3))
        .unwrap();
    ledger
        .append(&movement(date(2024, 3, 1), Item::Roll, Direction::Outbound, Location::Dry, 2))
        .unwrap();
}

#[test]
fn test_export_writes_header_and_rows_in_id_order() {
    let env = TestEnv::new().expect("test env");
    seed(&env);
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.csv");

    let summary = env.state.export_api.export_csv(Some(&target)).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.path, target);
    let shown = target.display().to_string();
    assert_eq!(
        summary.message,
        t_with_args("notice.exported", &[("path", shown.as_str())])
    );

    let content = fs::read_to_string(&target).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Item,Direction,Location,Quantity");
    assert_eq!(lines[1], "2024-03-01,Roll,ENTRATA,Secchi,8");
    assert_eq!(lines[2], "2024-02-28,Cassetta CPR,ENTRATA,Carne,3");
    assert_eq!(lines[3], "2024-03-01,Roll,USCITA,Secchi,2");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_to_directory_uses_configured_name() {
    let env = TestEnv::new().expect("test env");
    seed(&env);
    let dir = TempDir::new().unwrap();

    let summary = env.state.export_api.export_csv(Some(dir.path())).unwrap();
    assert_eq!(summary.path, dir.path().join("movimenti_supporti.csv"));
    assert!(summary.path.exists());

    env.state.config.set_export_file_name("supports.csv").unwrap();
    let summary = env.state.export_api.export_csv(Some(dir.path())).unwrap();
    assert_eq!(summary.path, dir.path().join("supports.csv"));
}

#[test]
fn test_export_empty_ledger_writes_header_only() {
    let env = TestEnv::new().expect("test env");
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("empty.csv");

    let summary = env.state.export_api.export_csv(Some(&target)).unwrap();
    assert_eq!(summary.rows, 0);
    let content = fs::read_to_string(&target).unwrap();
    assert_eq!(content.trim_end(), "Date,Item,Direction,Location,Quantity");
}

#[test]
fn test_exported_file_parses_back_to_same_movements() {
    let env = TestEnv::new().expect("test env");
    seed(&env);
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.csv");
    env.state.export_api.export_csv(Some(&target)).unwrap();

    let parsed = transfer::parse_file(&target).unwrap();
    let expected: Vec<_> = env
        .state
        .dashboard_api
        .latest_movements()
        .unwrap()
        .iter()
        .rev()
        .map(|m| m.to_new())
        .collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_restore_into_empty_ledger() {
    let source_env = TestEnv::new().expect("source env");
    seed(&source_env);
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.csv");
    source_env.state.export_api.export_csv(Some(&target)).unwrap();

    let env = TestEnv::new().expect("target env");
    let restored = env.state.export_api.restore_csv(&target).unwrap();
    assert_eq!(restored, 3);

    let api = &env.state.dashboard_api;
    assert_eq!(api.balance(Some(Item::Roll), Some(Location::Dry)).unwrap(), 6);
    assert_eq!(
        api.inventory().unwrap(),
        source_env.state.dashboard_api.inventory().unwrap()
    );
}

#[test]
fn test_restore_refused_when_ledger_not_empty() {
    let env = TestEnv::new().expect("test env");
    seed(&env);
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.csv");
    env.state.export_api.export_csv(Some(&target)).unwrap();

    let err = env.state.export_api.restore_csv(&target).unwrap_err();
    assert!(matches!(err, ApiError::BusinessRuleViolation(_)));
    assert_eq!(env.state.dashboard_api.balance(None, None).unwrap(), 9);
}

#[test]
fn test_restore_rejects_invalid_rows() {
    let env = TestEnv::new().expect("test env");
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("bad.csv");
    fs::write(
        &source,
        "Date,Item,Direction,Location,Quantity\n2024-03-01,Roll,ENTRATA,Secchi,4\n2024-03-01,Pallet,ENTRATA,Secchi,1\n",
    )
    .unwrap();

    let err = env.state.export_api.restore_csv(&source).unwrap_err();
    assert!(matches!(err, ApiError::ImportError(_)));
    assert_eq!(env.state.dashboard_api.balance(None, None).unwrap(), 0);
}

fn arb_movements() -> impl Strategy<Value = Vec<Movement>> {
    let row = (0i64..3650, 0usize..3, any::<bool>(), 0usize..4, 1i64..=MAX_QUANTITY);
    prop::collection::vec(row, 0..40).prop_map(|rows| {
        let epoch = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (days, item, outbound, location, quantity))| {
                let location = Location::ALL[location];
                let direction = if outbound && !location.forces_inbound() {
                    Direction::Outbound
                } else {
                    Direction::Inbound
                };
                Movement {
                    id: i as i64 + 1,
                    date: epoch + chrono::Duration::days(days),
                    item: Item::ALL[item],
                    direction,
                    location,
                    quantity,
                }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    #[test]
    fn exported_rows_parse_back_in_id_order(movements in arb_movements()) {
        let mut buffer = Vec::new();
        let written = transfer::write_movements(&mut buffer, &movements).unwrap();
        prop_assert_eq!(written, movements.len());

        let parsed = transfer::parse_movements(buffer.as_slice()).unwrap();
        let expected: Vec<_> = movements.iter().map(Movement::to_new).collect();
        prop_assert_eq!(parsed, expected);
    }
}
