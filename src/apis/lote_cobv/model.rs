use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::Serialize;

/// Filters for [`LoteCobVApi::list`](crate::apis::lote_cobv::LoteCobVApi::list).
#[derive(Serialize, Debug, Clone, Builder)]
pub struct ListLotesCobVRequest {
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub inicio: DateTime<Utc>,
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub fim: DateTime<Utc>,
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
