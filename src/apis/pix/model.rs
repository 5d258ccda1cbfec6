use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::Serialize;

/// Filters for [`PixApi::list`](crate::apis::pix::PixApi::list).
#[derive(Serialize, Debug, Clone, Builder)]
#[serde(rename_all = "camelCase")]
pub struct ListPixRequest {
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub inicio: DateTime<Utc>,
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub fim: DateTime<Utc>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// Only PIX linked (or not linked) to a charge.
    #[builder(default, setter(strip_option))]
    #[serde(rename = "txIdPresente", skip_serializing_if = "Option::is_none")]
    pub tx_id_presente: Option<bool>,
    /// Only PIX with (or without) refunds.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devolucao_presente: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(
        rename = "paginacao.paginaAtual",
        skip_serializing_if = "Option::is_none"
    )]
    pub pagina_atual: Option<u32>,
    #[builder(default, setter(strip_option))]
    #[serde(
        rename = "paginacao.itensPorPagina",
        skip_serializing_if = "Option::is_none"
    )]
    pub itens_por_pagina: Option<u32>,
}
