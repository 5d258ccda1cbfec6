use crate::apis::cob::CobStatus;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::Serialize;

/// Filters for [`CobVApi::list`](crate::apis::cobv::CobVApi::list).
///
/// Pagination is sent as `paginacao.paginaAtual` and `paginacao.itensPorPagina`, as in the
/// BCB API. Some bank gateways also accept the flat `paginaAtual` and `itensPorPagina`
/// names used by [`ListRecsRequest`](crate::apis::rec::ListRecsRequest).
#[derive(Serialize, Debug, Clone, Builder)]
#[serde(rename_all = "camelCase")]
pub struct ListCobVsRequest {
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub inicio: DateTime<Utc>,
    #[builder(setter(into))]
    #[serde(serialize_with = "crate::common::serialize_timestamp")]
    pub fim: DateTime<Utc>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_presente: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CobStatus>,
    /// Only list charges belonging to the given batch.
    #[builder(default, setter(strip_option))]
    #[serde(rename = "loteCobVId", skip_serializing_if = "Option::is_none")]
    pub lote_cob_v_id: Option<u64>,
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
