//! End-to-end drive of the form controller against a real server socket.

use pcbook::booker::BookingApp;
use pcbook::client::BookingClient;
use pcbook::controller::{BookingForm, FormController};
use pcbook::routes;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

fn temp_bookings_dir(tag: &str) -> String {
    let dir = std::env::temp_dir().join(format!("pcbook-kiosk-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir.to_str().unwrap().to_string()
}

async fn spawn_server(tag: &str) -> (String, JoinHandle<()>) {
    let mut booker = BookingApp::new();
    booker.load_bookings(&temp_bookings_dir(tag)).unwrap();
    let app = routes::app_router(Arc::new(RwLock::new(booker)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), handle)
}

fn form(name: &str, computer: &str) -> BookingForm {
    BookingForm {
        name: name.to_string(),
        contact: "a@x.com".to_string(),
        computer: computer.to_string(),
        start_time: "10:00".to_string(),
        end_time: "11:00".to_string(),
    }
}

#[tokio::test]
async fn init_renders_the_current_list() {
    let (server, _handle) = spawn_server("init").await;

    let mut controller = FormController::new(BookingClient::new(&server));
    controller.init().await;

    assert!(controller.status().is_none());
    assert!(controller.table().is_empty());
}

#[tokio::test]
async fn submit_redraws_from_the_updated_list() {
    let (server, _handle) = spawn_server("submit").await;

    let mut controller = FormController::new(BookingClient::new(&server));
    controller.init().await;

    controller.submit(form("Al", "PC3")).await;
    assert!(controller.status().is_none());
    assert_eq!(
        controller.table().rows(),
        [["Al", "a@x.com", "PC3", "10:00", "11:00"].map(String::from)]
    );

    controller.submit(form("Bo", "PC1")).await;
    let rows = controller.table().rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Al");
    assert_eq!(rows[1][0], "Bo");
}

#[tokio::test]
async fn empty_form_values_pass_through_unchanged() {
    let (server, _handle) = spawn_server("empty-values").await;

    let mut controller = FormController::new(BookingClient::new(&server));
    controller.init().await;

    controller.submit(BookingForm::default()).await;
    assert!(controller.status().is_none());
    assert_eq!(
        controller.table().rows(),
        [["", "", "", "", ""].map(String::from)]
    );
}

#[tokio::test]
async fn failed_request_sets_status_and_keeps_rows() {
    let (server, handle) = spawn_server("failure").await;

    let mut controller = FormController::new(BookingClient::new(&server));
    controller.init().await;
    controller.submit(form("Al", "PC3")).await;
    assert_eq!(controller.table().rows().len(), 1);

    // take the server down; the next submit must fail visibly
    handle.abort();
    let _ = handle.await;

    controller.submit(form("Bo", "PC1")).await;
    assert!(controller.status().is_some());
    assert_eq!(controller.table().rows().len(), 1);
    assert_eq!(controller.table().rows()[0][0], "Al");
}
