use crate::common::{test_context::TestContext, TEST_CHAVE};
use chrono::{Duration, Utc};
use pix_rust::{
    apis::cob::{CobStatus, ListCobsRequestBuilder},
    error::ApiErrorKind,
    generate_txid, Error,
};
use serde_json::{json, Value};
use test_case::test_case;

fn cob_body(valor: &str) -> Value {
    json!({
        "calendario": { "expiracao": 3600 },
        "devedor": { "cpf": "12345678909", "nome": "Francisco da Silva" },
        "valor": { "original": valor },
        "chave": TEST_CHAVE,
        "solicitacaoPagador": "Serviço realizado.",
    })
}

#[tokio::test]
async fn create_and_get() {
    let ctx = TestContext::start().await;
    let txid = generate_txid();

    let created = ctx.client.cob.create(&txid, &cob_body("37.00")).await.unwrap();
    assert_eq!(created["txid"], txid.as_str());
    assert_eq!(created["status"], "ATIVA");
    assert_eq!(created["valor"]["original"], "37.00");

    let fetched = ctx.client.cob.get(&txid, None).await.unwrap();
    assert_eq!(fetched["txid"], created["txid"]);
    assert_eq!(fetched["revisao"], created["revisao"]);
}

#[tokio::test]
async fn create_with_auto_txid() {
    let ctx = TestContext::start().await;

    let created = ctx
        .client
        .cob
        .create_with_auto_txid(&cob_body("10.50"))
        .await
        .unwrap();

    let txid = created["txid"].as_str().unwrap();
    assert!(!txid.is_empty());
    assert_eq!(ctx.client.cob.get(txid, None).await.unwrap()["status"], "ATIVA");
}

#[tokio::test]
async fn review_bumps_revision() {
    let ctx = TestContext::start().await;
    let txid = generate_txid();
    ctx.client.cob.create(&txid, &cob_body("37.00")).await.unwrap();

    let reviewed = ctx
        .client
        .cob
        .review(&txid, &json!({ "valor": { "original": "40.00" } }))
        .await
        .unwrap();
    assert_eq!(reviewed["revisao"], 1);
    assert_eq!(reviewed["valor"]["original"], "40.00");

    let removed = ctx
        .client
        .cob
        .review(
            &txid,
            &json!({ "status": CobStatus::RemovidaPeloUsuarioRecebedor }),
        )
        .await
        .unwrap();
    assert_eq!(removed["revisao"], 2);
    assert_eq!(removed["status"], "REMOVIDA_PELO_USUARIO_RECEBEDOR");
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn list_filters_by_status() {
    let ctx = TestContext::start().await;
    let active = generate_txid();
    let paid = generate_txid();
    ctx.client.cob.create(&active, &cob_body("1.00")).await.unwrap();
    ctx.client.cob.create(&paid, &cob_body("2.00")).await.unwrap();
    ctx.pay_cob(&paid).await.unwrap();

    let request = ListCobsRequestBuilder::default()
        .inicio(Utc::now() - Duration::hours(1))
        .fim(Utc::now() + Duration::hours(1))
        .status(CobStatus::Concluida)
        .build()
        .unwrap();
    let res = ctx.client.cob.list(&request).await.unwrap();

    let txids = res["cobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cob| cob["txid"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(txids, vec![paid]);
    assert_eq!(res["parametros"]["paginacao"]["quantidadeTotalDeItens"], 1);
}

#[tokio::test]
async fn get_unknown_cob() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .cob
        .get(&generate_txid(), None)
        .await
        .expect_err("Expected error");

    assert!(matches!(err, Error::ApiError(e) if e.kind() == ApiErrorKind::NotFound));
}

#[test_case(json!({ "calendario": { "expiracao": 3600 }, "chave": TEST_CHAVE }), "cob.valor.original" ; "missing valor")]
#[test_case(json!({ "valor": { "original": "1.00" } }), "cob.chave" ; "missing chave")]
#[tokio::test]
async fn invalid_cobs_are_rejected(body: Value, propriedade: &str) {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .cob
        .create(&generate_txid(), &body)
        .await
        .expect_err("Expected error");

    match err {
        Error::ApiError(e) => {
            assert_eq!(e.kind(), ApiErrorKind::Validation);
            assert!(e
                .violacoes
                .iter()
                .any(|v| v.propriedade.as_deref() == Some(propriedade)));
        }
        e => panic!("Unexpected error: {}", e),
    }
}
