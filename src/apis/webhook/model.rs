use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Body of every webhook configuration request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureWebhookRequest {
    pub webhook_url: String,
}

/// Filters for [`WebhookApi::list`](crate::apis::webhook::WebhookApi::list).
#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct ListWebhooksRequest {
    #[builder(setter(strip_option))]
    #[serde(
        serialize_with = "crate::common::serialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub inicio: Option<DateTime<Utc>>,
    #[builder(setter(strip_option))]
    #[serde(
        serialize_with = "crate::common::serialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub fim: Option<DateTime<Utc>>,
    #[builder(setter(strip_option))]
    #[serde(
        rename = "paginacao.paginaAtual",
        skip_serializing_if = "Option::is_none"
    )]
    pub pagina_atual: Option<u32>,
    #[builder(setter(strip_option))]
    #[serde(
        rename = "paginacao.itensPorPagina",
        skip_serializing_if = "Option::is_none"
    )]
    pub itens_por_pagina: Option<u32>,
}
