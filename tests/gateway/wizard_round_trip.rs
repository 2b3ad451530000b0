use crate::recording_gateway::{GatewayTestServer, RecordingMailer};
use chrono::NaiveDate;
use rendezvous::storage::LocalStore;
use rendezvous::transport::submit::HttpSubmitter;
use rendezvous::wizard::{
    Availability, Dish, Excitement, Field, MovieChoice, TimeSlot, WizardController,
    load_saved_answers, spawn_completion_observer,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

#[tokio::test]
async fn finishing_the_wizard_saves_and_emails_once() {
    let mailer = Arc::new(RecordingMailer::default());
    let server = GatewayTestServer::start(Some(mailer.clone())).await;
    let workspace = TempDir::new().expect("temp workspace should be created");

    let store = LocalStore::open(workspace.path().join("local_storage.json"));
    let submitter = HttpSubmitter::new(&server.base_url(), Duration::from_secs(5))
        .expect("submitter should build");
    let (tx, rx) = mpsc::unbounded_channel();
    let observer = spawn_completion_observer(rx, store.clone(), Arc::new(submitter));

    let mut wizard = WizardController::with_completion_channel(tx);
    assert_eq!(wizard.respond(Availability::Yes), 1);
    wizard.set(Field::Date(NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")));
    wizard.set(Field::Time(TimeSlot::new(20).expect("valid hour")));
    assert_eq!(wizard.proceed(), Ok(2));
    wizard.toggle_food(Dish::ChickenShawarma);
    assert_eq!(wizard.proceed(), Ok(3));
    assert_eq!(
        wizard.choose_movie(&MovieChoice::SomethingElse("  Before Sunrise ".into())),
        4
    );
    wizard.set(Field::Excitement(Excitement::from_slider(93.0)));
    assert_eq!(wizard.proceed(), Ok(5));

    // Further input after the summary changes nothing.
    wizard.advance(Field::Movie("Titanic".into()));
    assert!(wizard.proceed().is_err());
    let finished = wizard.record().clone();
    drop(wizard);

    let report = tokio::time::timeout(Duration::from_secs(10), observer)
        .await
        .expect("observer should finish")
        .expect("observer should not panic");
    assert_eq!(report.persisted, 1);
    assert_eq!(report.submitted, 1);

    let saved = load_saved_answers(&store)
        .expect("store should read")
        .expect("answers should be saved");
    assert_eq!(saved, finished);
    assert_eq!(saved.movie, "Before Sunrise");
    assert_eq!(saved.excitement.value(), 100);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("Movie: Before Sunrise"));
    assert!(sent[0].html.contains("Food: Chicken Shawarma"));
}

#[tokio::test]
async fn gateway_failure_still_leaves_answers_on_disk() {
    let server = GatewayTestServer::start(None).await;
    let workspace = TempDir::new().expect("temp workspace should be created");

    let store = LocalStore::open(workspace.path().join("nested").join("local_storage.json"));
    let submitter = HttpSubmitter::new(&server.base_url(), Duration::from_secs(5))
        .expect("submitter should build");
    let (tx, rx) = mpsc::unbounded_channel();
    let observer = spawn_completion_observer(rx, store.clone(), Arc::new(submitter));

    let mut wizard = WizardController::with_completion_channel(tx);
    wizard.respond(Availability::No);
    wizard.set(Field::Date(NaiveDate::from_ymd_opt(2025, 2, 14).expect("valid date")));
    wizard.set(Field::Time(TimeSlot::new(9).expect("valid hour")));
    wizard.proceed().expect("schedule gate should open");
    wizard.toggle_food(Dish::Lasagna);
    wizard.proceed().expect("food gate should open");
    wizard.choose_movie(&MovieChoice::Listed("La La Land"));
    wizard.proceed().expect("excitement has no gate");
    drop(wizard);

    let report = observer.await.expect("observer should not panic");
    assert_eq!(report.failed, 1);
    assert_eq!(report.submitted, 0);

    let saved = load_saved_answers(&store)
        .expect("store should read")
        .expect("answers should be saved");
    assert_eq!(saved.is_available, Some(true));
    assert_eq!(saved.time.map(|t| t.label()).as_deref(), Some("09:00"));
}
