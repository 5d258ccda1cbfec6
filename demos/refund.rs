use anyhow::Context;
use pix_rust::{config::PixConfig, PixClient};
use serde_json::json;

async fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let e2eid = args.next().context("Usage: refund <endToEndId> <valor>")?;
    let valor = args.next().context("Usage: refund <endToEndId> <valor>")?;

    let pix: PixClient = PixConfig::read()?.into_builder()?.build()?;

    let received = pix.pix.get(&e2eid).await?;
    tracing::info!(
        "Refunding {} out of {} received on {}",
        valor,
        received["valor"],
        received["horario"]
    );

    // The refund id is chosen by the caller and must be unique per PIX
    let id = format!(
        "D{}",
        received["devolucoes"].as_array().map_or(0, |d| d.len()) + 1
    );
    let devolucao = pix
        .pix
        .request_refund(&e2eid, &id, &json!({ "valor": valor }))
        .await?;

    tracing::info!("Requested refund {}: {}", id, devolucao["status"]);

    let devolucao = pix.pix.get_refund(&e2eid, &id).await?;
    tracing::info!("{:#}", devolucao);

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
