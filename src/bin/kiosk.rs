#![forbid(unsafe_code)]
use anyhow::Result;
use pcbook::client::BookingClient;
use pcbook::controller::{BookingForm, FormController};
use std::env;
use tracing_subscriber::filter::EnvFilter;

/// Front-desk shell for the booking form controller: loads the current list,
/// optionally submits one booking from the command line, and prints the
/// rendered table body.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();

    let server =
        env::var("BOOKING_SERVER").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let mut controller = FormController::new(BookingClient::new(&server));

    controller.init().await;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [name, contact, computer, start_time, end_time] => {
            controller
                .submit(BookingForm {
                    name: name.clone(),
                    contact: contact.clone(),
                    computer: computer.clone(),
                    start_time: start_time.clone(),
                    end_time: end_time.clone(),
                })
                .await;
        }
        _ => {
            eprintln!("usage: kiosk [<name> <contact> <computer> <start-time> <end-time>]");
            std::process::exit(2);
        }
    }

    print!("{}", controller.table().to_html());

    if let Some(status) = controller.status() {
        eprintln!("{status}");
        std::process::exit(1);
    }
    Ok(())
}
