use std::io;

use chrono::{Duration, Local};
use k1ng::Sms;
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> io::Result<String> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = required_env("K1NG_HOST")?;
    let api_key = required_env("K1NG_API_KEY")?;
    let api_pass = required_env("K1NG_API_PASS")?;
    let sender_id = required_env("K1NG_SENDER_ID")?;
    let phone = required_env("K1NG_PHONE")?;
    let template = std::env::var("K1NG_TEMPLATE").unwrap_or_default();
    let message = std::env::var("K1NG_MESSAGE")
        .unwrap_or_else(|_| "Scheduled hello from the k1ng demo.".to_owned());

    let mut sms = Sms::default_channel(host, api_key, api_pass)?;
    sms.set_sender_id(sender_id)
        .set_template(template)
        .set_content(message)
        .add_destinations([phone]);

    let at = Local::now() + Duration::minutes(10);
    let response = sms.send_at(at).await?;
    println!(
        "scheduled for {}: status {}, count {}",
        at.format("%Y-%m-%d %H:%M:%S"),
        response.code,
        response.count
    );

    Ok(())
}
