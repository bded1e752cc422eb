//! Newsroom demo: one agency, several channels
//!
//! Run with: cargo run --example newsroom [HEADLINE...]
//!
//! Examples:
//!   cargo run --example newsroom
//!   cargo run --example newsroom "Storm warning" "Markets rally"
//!   RUST_LOG=herald=trace cargo run --example newsroom
//!
//! Two channels print each headline to stdout, an archive records them, and
//! a wire service forwards them to an async task that tallies what it saw.

use herald::{Forwarder, Printer, Recorder, Subject, SubjectConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("herald=debug".parse()?)
                .add_directive("newsroom=info".parse()?),
        )
        .init();

    let mut headlines: Vec<String> = std::env::args().skip(1).collect();
    if headlines.is_empty() {
        headlines = vec![
            "Election results in".to_string(),
            "Markets close higher".to_string(),
            "Election results in".to_string(),
        ];
    }

    let (wire, mut wire_rx) = Forwarder::channel();
    let wire_desk = tokio::spawn(async move {
        let mut received = 0usize;
        while let Some(headline) = wire_rx.recv().await {
            received += 1;
            tracing::info!(headline = %headline, "Wire desk picked up story");
        }
        received
    });

    let cnn = Printer::stdout("CNN");
    let bbc = Printer::stdout("BBC");
    let archive = Recorder::new();

    let stats = {
        let mut agency = Subject::with_config("Breaking: none", SubjectConfig::named("agency"));
        agency.register(&cnn);
        agency.register(&bbc);
        agency.register(&archive);
        agency.register(&wire);

        for headline in headlines {
            agency.set_state(headline)?;
        }
        agency.stats()
    };

    // Closing the last sender lets the wire desk finish
    drop(wire);
    let wired = wire_desk.await?;

    tracing::info!(
        updates = stats.updates,
        deliveries = stats.deliveries,
        archived = archive.len(),
        wired = wired,
        "Newsroom closed"
    );
    println!("Archive: {:?}", archive.values());

    Ok(())
}
