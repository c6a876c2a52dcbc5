//! End-to-end workflow tests driven through the library
//!
//! Uses `ServerState::initialize` with a temp working directory, exercising
//! the same paths the HTTP handlers call: session login, car creation,
//! status moves, payment, snapshot persistence, and the daily export.

use chrono::{Duration, TimeZone, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde_json::json;

use carwash_server::report::{DailyReport, csv};
use carwash_server::{CarDetails, CarRegistry, Config, RegistryError, ServerState};
use shared::{Car, CarStatus, EmployeeInfo, Role};

fn test_state(dir: &tempfile::TempDir) -> ServerState {
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    ServerState::initialize(&config).expect("state initializes")
}

#[tokio::test]
async fn full_workflow_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let car_id = {
        let state = test_state(&dir);

        // Ana and Ben self-declare their identities
        let ana_token = state
            .sessions
            .login(EmployeeInfo::new("Ana", Role::Washer));
        let ben_token = state
            .sessions
            .login(EmployeeInfo::new("Ben", Role::Cashier));
        let ana = state.sessions.resolve(ana_token).unwrap().info();
        let ben = state.sessions.resolve(ben_token).unwrap().info();

        let car = state
            .registry
            .create(
                CarDetails {
                    car_name: "Toyota Vios".into(),
                    plate_number: "ABC-1234".into(),
                    plate_photo: Some("plate.jpg".into()),
                },
                &ana,
            )
            .unwrap();

        state
            .registry
            .update_status(car.id, CarStatus::AwaitingPayment, &ana)
            .unwrap();
        let paid = state.registry.pay(car.id, &json!("150.00"), &ben).unwrap();
        assert_eq!(paid.status, CarStatus::Finished);
        assert_eq!(paid.payment_amount, Some(Decimal::new(15000, 2)));
        assert_eq!(paid.cashier_name.as_deref(), Some("Ben"));

        state.flush_snapshot().unwrap();
        car.id
    };

    // A new process loads the snapshot and sees the identical record
    let state = test_state(&dir);
    let car = state.registry.get(car_id).unwrap();
    assert_eq!(car.car_name, "Toyota Vios");
    assert_eq!(car.plate_number, "ABC-1234");
    assert_eq!(car.plate_photo.as_deref(), Some("plate.jpg"));
    assert_eq!(car.status, CarStatus::Finished);
    assert_eq!(car.payment_amount, Some(Decimal::new(15000, 2)));
    assert!(car.completion_time.unwrap() >= car.timestamp);

    // Sessions do not survive the restart
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn double_payment_is_rejected_without_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    let ana = EmployeeInfo::new("Ana", Role::Washer);
    let ben = EmployeeInfo::new("Ben", Role::Cashier);

    let car = state
        .registry
        .create(
            CarDetails {
                car_name: "Toyota Vios".into(),
                plate_number: "ABC-1234".into(),
                plate_photo: None,
            },
            &ana,
        )
        .unwrap();
    state
        .registry
        .update_status(car.id, CarStatus::AwaitingPayment, &ana)
        .unwrap();
    state.registry.pay(car.id, &json!(150.00), &ben).unwrap();

    let err = state
        .registry
        .pay(car.id, &json!(200.00), &ben)
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidTransition(_)));
    assert_eq!(
        state.registry.get(car.id).unwrap().payment_amount,
        Some(Decimal::new(15000, 2))
    );
}

/// Hand-built finished car with a controlled completion instant
fn finished_at(name: &str, plate: &str, cents: i64, done: chrono::DateTime<Utc>) -> Car {
    let mut car = Car::new(name, plate, None, "Ana");
    car.timestamp = done - Duration::hours(1);
    car.status = CarStatus::Finished;
    car.cashier_name = Some("Ben".into());
    car.payment_amount = Some(Decimal::new(cents, 2));
    car.completion_time = Some(done);
    car
}

#[test]
fn export_selection_is_exact_across_day_boundaries() {
    let tz = chrono_tz::UTC;
    let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let on_day = finished_at(
        "On Day",
        "D-0",
        15000,
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
    );
    let day_before = finished_at(
        "Day Before",
        "D-1",
        10000,
        Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap(),
    );
    let day_after = finished_at(
        "Day After",
        "D+1",
        20000,
        Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 1).unwrap(),
    );
    let in_progress = Car::new("In Progress", "WIP-1", None, "Ana");

    let mut cars = IndexMap::new();
    for car in [&day_before, &on_day, &day_after, &in_progress] {
        cars.insert(car.id, car.clone());
    }
    let registry = CarRegistry::from_cars(cars);

    let selected = registry.finished_on(date, tz);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, on_day.id);

    let report = DailyReport::build(date, selected).unwrap();
    let text = String::from_utf8(csv::render(&report, tz, true).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Car Name,Plate Number,Washer,Cashier,Payment Amount (₱),Start Time,Completion Time"
    );
    assert!(lines[1].starts_with("On Day,D-0,Ana,Ben,150.00,"));
    assert_eq!(lines[2], "\"\"");
    assert_eq!(lines[3], "TOTAL CARS:,1");
    assert_eq!(lines[4], "TOTAL REVENUE:,₱150.00");

    // Empty days export nothing, not an empty file
    let empty = registry.finished_on(date + Duration::days(7), tz);
    assert!(DailyReport::build(date + Duration::days(7), empty).is_none());
}

#[tokio::test]
async fn memory_only_mode_never_writes_a_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    config.snapshot_interval_secs = 0;

    let state = ServerState::initialize(&config).unwrap();
    let ana = EmployeeInfo::new("Ana", Role::Washer);
    state
        .registry
        .create(
            CarDetails {
                car_name: "Vios".into(),
                plate_number: "A-1".into(),
                plate_photo: None,
            },
            &ana,
        )
        .unwrap();

    state.flush_snapshot().unwrap();
    assert!(!config.snapshot_path().exists());
}

#[tokio::test]
async fn corrupt_snapshot_refuses_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    config.ensure_work_dir_structure().unwrap();
    std::fs::write(config.snapshot_path(), b"{not json").unwrap();

    assert!(ServerState::initialize(&config).is_err());
}

#[tokio::test]
async fn reset_clears_everything_and_persists_the_empty_registry() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);
    let ana = EmployeeInfo::new("Ana", Role::Washer);

    for i in 0..3 {
        state
            .registry
            .create(
                CarDetails {
                    car_name: format!("Car {i}"),
                    plate_number: format!("P-{i}"),
                    plate_photo: None,
                },
                &ana,
            )
            .unwrap();
    }

    let stats = state.registry.clear();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.finished, 0);
    state.flush_snapshot().unwrap();

    let reloaded = test_state(&dir);
    assert!(reloaded.registry.is_empty());
}
