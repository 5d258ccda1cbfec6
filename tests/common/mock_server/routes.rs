use crate::common::mock_server::{MockServerConfiguration, MockServerStorage};
use actix_web::{
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

static ERROR_TYPE_PREFIX: &str = "https://pix.bcb.gov.br/api/v2/error/";

fn problem(status: StatusCode, error: &str, title: &str, detail: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "type": format!("{}{}", ERROR_TYPE_PREFIX, error),
        "title": title,
        "status": status.as_u16(),
        "detail": detail,
    }))
}

fn schema_violation(error: &str, title: &str, propriedade: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "type": format!("{}{}", ERROR_TYPE_PREFIX, error),
        "title": title,
        "status": 400,
        "detail": "A requisição não respeita o schema.",
        "violacoes": [
            {
                "razao": format!("O campo {} não respeita o schema.", propriedade),
                "propriedade": propriedade,
            }
        ],
    }))
}

fn header_str<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|h| h.to_str().ok())
}

/// Every PIX request must carry the issued access token and the `client_id` header.
fn authorize(
    req: &HttpRequest,
    configuration: &MockServerConfiguration,
) -> Result<(), HttpResponse> {
    let token = header_str(req, header::AUTHORIZATION.as_str())
        .and_then(|h| h.strip_prefix("Bearer "));
    let client_id = header_str(req, "client_id");

    if token == Some(configuration.access_token.as_str())
        && client_id == Some(configuration.client_id.as_str())
    {
        Ok(())
    } else {
        Err(problem(
            StatusCode::FORBIDDEN,
            "AcessoNegado",
            "Acesso Negado",
            "Requisição de participante autenticado que viola alguma regra de autorização.",
        ))
    }
}

macro_rules! authorize_or_return {
    ($req:expr, $configuration:expr) => {
        if let Err(res) = authorize(&$req, &$configuration) {
            return res;
        }
    };
}

#[derive(Deserialize)]
pub(super) struct TokenRequest {
    grant_type: String,
    scope: Option<String>,
}

/// POST /oauth/token
pub(super) async fn post_token(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    form: web::Form<TokenRequest>,
) -> HttpResponse {
    storage.write().unwrap().token_requests += 1;

    if form.grant_type != "client_credentials" {
        return HttpResponse::BadRequest().json(json!({ "error": "unsupported_grant_type" }));
    }

    let credentials = header_str(&req, header::AUTHORIZATION.as_str())
        .and_then(|h| h.strip_prefix("Basic "))
        .and_then(|h| STANDARD.decode(h).ok())
        .and_then(|h| String::from_utf8(h).ok());
    let expected = format!("{}:{}", configuration.client_id, configuration.client_secret);

    match credentials {
        Some(credentials) if credentials == expected => HttpResponse::Ok().json(json!({
            "token_type": "Bearer",
            "access_token": configuration.access_token,
            "expires_in": 3600,
            "scope": form.scope,
        })),
        _ => HttpResponse::Unauthorized().json(json!({
            "error": "invalid_client",
            "error_description": "Invalid client credentials",
        })),
    }
}

fn insert_cob(storage: &MockServerStorage, txid: String, mut cob: Value) -> HttpResponse {
    if !cob.is_object() || cob.pointer("/valor/original").and_then(Value::as_str).is_none() {
        return schema_violation(
            "CobOperacaoInvalida",
            "Cobrança inválida.",
            "cob.valor.original",
        );
    }
    if cob.get("chave").and_then(Value::as_str).is_none() {
        return schema_violation("CobOperacaoInvalida", "Cobrança inválida.", "cob.chave");
    }

    let mut storage = storage.write().unwrap();
    if storage.cobs.contains_key(&txid) {
        return problem(
            StatusCode::BAD_REQUEST,
            "CobOperacaoInvalida",
            "Cobrança inválida.",
            "O txid informado já foi utilizado.",
        );
    }

    cob["txid"] = json!(txid);
    cob["revisao"] = json!(0);
    cob["status"] = json!("ATIVA");
    cob["calendario"]["criacao"] = json!(Utc::now().to_rfc3339());
    storage.cobs.insert(txid, cob.clone());

    HttpResponse::Created().json(cob)
}

fn cob_not_found() -> HttpResponse {
    problem(
        StatusCode::NOT_FOUND,
        "CobNaoEncontrado",
        "Cobrança não encontrada.",
        "Cobrança não encontrada para o txid informado.",
    )
}

/// PUT /cob/{txid}
pub(super) async fn create_cob(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    let txid = path.into_inner();
    if !(26..=35).contains(&txid.len()) || !txid.chars().all(|c| c.is_ascii_alphanumeric()) {
        return schema_violation("CobOperacaoInvalida", "Cobrança inválida.", "cob.txid");
    }

    insert_cob(&storage, txid, body.into_inner())
}

/// POST /cob
pub(super) async fn create_cob_with_auto_txid(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    insert_cob(&storage, Uuid::new_v4().simple().to_string(), body.into_inner())
}

/// PATCH /cob/{txid}
pub(super) async fn review_cob(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    let mut storage = storage.write().unwrap();
    let cob = match storage.cobs.get_mut(&path.into_inner()) {
        Some(cob) => cob,
        None => return cob_not_found(),
    };

    if cob["status"] != "ATIVA" {
        return problem(
            StatusCode::BAD_REQUEST,
            "CobOperacaoInvalida",
            "Cobrança inválida.",
            "Somente cobranças ativas podem ser revisadas.",
        );
    }

    if let Value::Object(changes) = body.into_inner() {
        for (key, value) in changes {
            cob[key.as_str()] = value;
        }
    }
    let revisao = cob["revisao"].as_u64().unwrap_or_default() + 1;
    cob["revisao"] = json!(revisao);

    HttpResponse::Ok().json(cob.clone())
}

/// GET /cob/{txid}
pub(super) async fn get_cob(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    storage
        .read()
        .unwrap()
        .cobs
        .get(&path.into_inner())
        .map_or_else(cob_not_found, |cob| HttpResponse::Ok().json(cob))
}

#[derive(Deserialize)]
pub(super) struct ListCobsQuery {
    inicio: String,
    fim: String,
    status: Option<String>,
}

/// GET /cob
pub(super) async fn list_cobs(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    query: web::Query<ListCobsQuery>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    let storage = storage.read().unwrap();
    let mut cobs = storage
        .cobs
        .values()
        .filter(|cob| {
            query
                .status
                .as_deref()
                .map_or(true, |status| cob["status"] == status)
        })
        .cloned()
        .collect::<Vec<_>>();
    cobs.sort_by(|a, b| a["txid"].as_str().cmp(&b["txid"].as_str()));

    HttpResponse::Ok().json(json!({
        "parametros": {
            "inicio": query.inicio,
            "fim": query.fim,
            "paginacao": {
                "paginaAtual": 0,
                "itensPorPagina": 100,
                "quantidadeDePaginas": 1,
                "quantidadeTotalDeItens": cobs.len(),
            },
        },
        "cobs": cobs,
    }))
}

fn pix_not_found() -> HttpResponse {
    problem(
        StatusCode::NOT_FOUND,
        "PixNaoEncontrado",
        "Pix não encontrado.",
        "Pix não encontrado para o endToEndId informado.",
    )
}

/// GET /pix/{e2eid}
pub(super) async fn get_pix(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    storage
        .read()
        .unwrap()
        .pix
        .get(&path.into_inner())
        .map_or_else(pix_not_found, |pix| HttpResponse::Ok().json(pix))
}

/// PUT /pix/{e2eid}/devolucao/{id}
pub(super) async fn request_refund(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    let (e2eid, id) = path.into_inner();
    let valor = match body.get("valor").and_then(Value::as_str) {
        Some(valor) => valor.to_string(),
        None => {
            return schema_violation(
                "DevolucaoOperacaoInvalida",
                "Devolução inválida.",
                "devolucao.valor",
            )
        }
    };

    let mut storage = storage.write().unwrap();
    let pix = match storage.pix.get_mut(&e2eid) {
        Some(pix) => pix,
        None => return pix_not_found(),
    };

    let parse = |v: &Value| v.as_str().and_then(|v| v.parse::<f64>().ok()).unwrap_or_default();
    let refunded: f64 = pix["devolucoes"]
        .as_array()
        .map(|devolucoes| devolucoes.iter().map(|d| parse(&d["valor"])).sum())
        .unwrap_or_default();
    if refunded + valor.parse::<f64>().unwrap_or_default() > parse(&pix["valor"]) {
        return problem(
            StatusCode::BAD_REQUEST,
            "DevolucaoOperacaoInvalida",
            "Devolução inválida.",
            "O valor da devolução excede o valor disponível do Pix.",
        );
    }

    let devolucao = json!({
        "id": id,
        "rtrId": format!("D{}", &e2eid[1..]),
        "valor": valor,
        "horario": { "solicitacao": Utc::now().to_rfc3339() },
        "status": "EM_PROCESSAMENTO",
    });
    if let Some(devolucoes) = pix["devolucoes"].as_array_mut() {
        devolucoes.push(devolucao.clone());
    }
    storage.devolucoes.insert((e2eid, id), devolucao.clone());

    HttpResponse::Created().json(devolucao)
}

/// GET /pix/{e2eid}/devolucao/{id}
pub(super) async fn get_refund(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    storage
        .read()
        .unwrap()
        .devolucoes
        .get(&path.into_inner())
        .map_or_else(
            || {
                problem(
                    StatusCode::NOT_FOUND,
                    "DevolucaoNaoEncontrada",
                    "Devolução não encontrada.",
                    "Devolução não encontrada para o identificador informado.",
                )
            },
            |devolucao| HttpResponse::Ok().json(devolucao),
        )
}

fn webhook_not_found() -> HttpResponse {
    problem(
        StatusCode::NOT_FOUND,
        "WebhookNaoEncontrado",
        "Webhook não encontrado.",
        "Webhook não encontrado para a chave informada.",
    )
}

/// PUT /webhook/{chave}
pub(super) async fn configure_webhook(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    let webhook_url = match body.get("webhookUrl").and_then(Value::as_str) {
        Some(webhook_url) if webhook_url.starts_with("https://") => webhook_url.to_string(),
        _ => {
            return schema_violation(
                "WebhookOperacaoInvalida",
                "Webhook inválido.",
                "webhook.webhookUrl",
            )
        }
    };

    let chave = path.into_inner();
    storage.write().unwrap().webhooks.insert(
        chave.clone(),
        json!({
            "webhookUrl": webhook_url,
            "chave": chave,
            "criacao": Utc::now().to_rfc3339(),
        }),
    );

    HttpResponse::NoContent().finish()
}

/// GET /webhook/{chave}
pub(super) async fn get_webhook(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    storage
        .read()
        .unwrap()
        .webhooks
        .get(&path.into_inner())
        .map_or_else(webhook_not_found, |webhook| HttpResponse::Ok().json(webhook))
}

/// DELETE /webhook/{chave}
pub(super) async fn delete_webhook(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    match storage.write().unwrap().webhooks.remove(&path.into_inner()) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => webhook_not_found(),
    }
}

/// GET /webhook
pub(super) async fn list_webhooks(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
) -> HttpResponse {
    authorize_or_return!(req, configuration);

    let mut webhooks = storage
        .read()
        .unwrap()
        .webhooks
        .values()
        .cloned()
        .collect::<Vec<_>>();
    webhooks.sort_by(|a, b| a["chave"].as_str().cmp(&b["chave"].as_str()));

    HttpResponse::Ok().json(json!({
        "parametros": {
            "paginacao": {
                "paginaAtual": 0,
                "itensPorPagina": 100,
                "quantidadeDePaginas": 1,
                "quantidadeTotalDeItens": webhooks.len(),
            },
        },
        "webhooks": webhooks,
    }))
}
