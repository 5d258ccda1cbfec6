use anyhow::Context;
use pix_rust::{config::PixConfig, generate_txid, PixClient};
use serde_json::json;
use std::time::Duration;

/// Receiving key of the account, e.g. an email, a phone number or a random key.
static CHAVE: &str = "7d9f0335-8dcc-4054-9bf9-0dbd61d36906";

async fn run() -> anyhow::Result<()> {
    let pix: PixClient = PixConfig::read()?.into_builder()?.build()?;

    // Create a new immediate charge
    let txid = generate_txid();
    let cob = pix
        .cob
        .create(
            &txid,
            &json!({
                "calendario": { "expiracao": 600 },
                "devedor": { "cpf": "12345678909", "nome": "Francisco da Silva" },
                "valor": { "original": "1.00" },
                "chave": CHAVE,
                "solicitacaoPagador": "Pagamento de teste",
            }),
        )
        .await?;

    tracing::info!("Created new cob: {}", txid);
    tracing::info!(
        "Copia e cola: {}",
        cob["pixCopiaECola"].as_str().context("Missing pixCopiaECola")?
    );

    tracing::info!("Begin waiting...");

    loop {
        let cob = pix.cob.get(&txid, None).await?;
        match cob["status"].as_str() {
            Some("ATIVA") => tokio::time::sleep(Duration::from_secs(5)).await,
            _ => {
                tracing::info!("{:#}", cob);
                break;
            }
        }
    }

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
