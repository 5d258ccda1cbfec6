use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Status of a recurring charge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CobRStatus {
    Criada,
    Ativa,
    Concluida,
    Expirada,
    Rejeitada,
    Cancelada,
}

/// Filters for [`CobRApi::list`](crate::apis::cobr::CobRApi::list).
#[derive(Serialize, Debug, Clone, Builder)]
#[serde(rename_all = "camelCase")]
pub struct ListCobRsRequest {
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub inicio: DateTime<Utc>,
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub fim: DateTime<Utc>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_rec: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convenio: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CobRStatus>,
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
