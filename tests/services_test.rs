//! Services wired to their in-memory and simulated collaborators.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use testninja::dst::{FaultConfig, FaultInjector, FaultType, SimConfig};
use testninja::mocking::{
    overlapping_booking, Booking, BookingStatus, EmployeeController, FsStatementGenerator,
    Housekeeper, HousekeeperService, InMemoryBookingRepository, InMemoryHousekeeperRepository,
    InstallerHelper, Order, OrderError, OrderService, SimEmailSender, SimEmployeeStorage,
    SimFileDownloader, SimMessageBox, SimOrderStorage,
};
use tokio_test::{assert_err, assert_ok};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn housekeeper(oid: u64, email: &str) -> Housekeeper {
    Housekeeper {
        oid,
        full_name: format!("housekeeper {}", oid),
        email: Some(email.to_string()),
        statement_email_body: "Your statement is attached".to_string(),
    }
}

#[tokio::test]
async fn test_overlap_against_repository_of_mixed_bookings() {
    init_tracing();

    let at = |day: u32| Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
    let repository = InMemoryBookingRepository::new();
    repository
        .insert(Booking::new(10, "CANCELLED", at(1), at(10)).with_status(BookingStatus::Cancelled))
        .await;
    repository.insert(Booking::new(11, "EARLY", at(1), at(3))).await;
    repository.insert(Booking::new(12, "LATE", at(8), at(12))).await;

    let fits_between = Booking::new(1, "NEW", at(3), at(8));
    let clashes = Booking::new(2, "NEW", at(7), at(9));

    assert_eq!(assert_ok!(overlapping_booking(&fits_between, &repository).await), None);
    assert_eq!(
        assert_ok!(overlapping_booking(&clashes, &repository).await),
        Some("LATE".to_string())
    );
}

#[tokio::test]
async fn test_order_faults_are_reproducible_by_seed() {
    init_tracing();

    async fn outcomes(config: SimConfig) -> Vec<bool> {
        let faults = FaultInjector::builder(config)
            .with_fault(FaultConfig::new(FaultType::StorageWriteFail, 0.5))
            .build();
        let service = OrderService::new(Arc::new(SimOrderStorage::with_faults(faults)));

        let mut results = Vec::new();
        for i in 0..32 {
            results.push(service.place_order(&Order::new(format!("c{}", i), i)).await.is_ok());
        }
        results
    }

    let config = SimConfig::from_env();
    let replay = SimConfig::with_seed(config.seed());

    assert_eq!(outcomes(config).await, outcomes(replay).await);
}

#[tokio::test]
async fn test_order_failure_is_storage_error() {
    let faults = FaultInjector::builder(SimConfig::from_env())
        .with_fault(FaultConfig::always(FaultType::StorageWriteFail))
        .build();
    let service = OrderService::new(Arc::new(SimOrderStorage::with_faults(faults)));

    let err = assert_err!(service.place_order(&Order::new("alice", 100)).await);
    assert!(matches!(err, OrderError::Storage(_)));
}

#[tokio::test]
async fn test_statement_run_writes_files_and_reports_failures() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryHousekeeperRepository::with_housekeepers(vec![
        housekeeper(1, "one@example.com"),
        housekeeper(2, " "),
        housekeeper(3, "three@example.com"),
    ]));
    let faults = FaultInjector::builder(SimConfig::from_env())
        .with_fault(FaultConfig::always(FaultType::EmailSendFail))
        .build();
    let sender = Arc::new(SimEmailSender::with_faults(faults));
    let message_box = Arc::new(SimMessageBox::new());
    let service = HousekeeperService::new(
        repository,
        Arc::new(FsStatementGenerator::new(dir.path())),
        sender.clone(),
        message_box.clone(),
    );

    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let run = tokio::time::timeout(Duration::from_secs(5), service.send_statement_emails(date))
        .await
        .expect("statement run timed out")
        .unwrap();

    assert_eq!(run.generated, 2);
    assert_eq!(run.emailed, 0);
    assert_eq!(run.failed, 2);
    assert!(sender.sent().await.is_empty());

    let titles: Vec<String> = message_box.shown().into_iter().map(|m| m.title).collect();
    assert_eq!(
        titles,
        vec![
            "Email failure: one@example.com".to_string(),
            "Email failure: three@example.com".to_string()
        ]
    );
    assert!(dir.path().join("statement_1_2024-02.txt").exists());
    assert!(!dir.path().join("statement_2_2024-02.txt").exists());
}

#[tokio::test]
async fn test_installer_and_employee_controller_record_interactions() {
    let downloader = Arc::new(SimFileDownloader::new());
    let helper = InstallerHelper::new(
        downloader.clone(),
        "https://downloads.example.com",
        "/tmp/setup.exe",
    );
    assert!(assert_ok!(helper.download_installer("acme", "setup-1.2").await));
    assert_eq!(downloader.requests().await[0].0, "https://downloads.example.com/acme/setup-1.2");

    let storage = Arc::new(SimEmployeeStorage::new());
    let controller = EmployeeController::new(storage.clone());
    assert_ok!(controller.delete_employee(7).await);
    assert_ok!(controller.delete_employee(9).await);
    assert_eq!(storage.deleted().await, vec![7, 9]);
}
