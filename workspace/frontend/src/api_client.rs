use async_trait::async_trait;
use common::{
    endpoints, transactions_path, volume_path, ProcessResponse, SummaryPayload, TransactionsPage,
    TypeChartPayload, VolumeChartPayload,
};
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use momo_dashboard::{ChartPeriod, DashboardApi, DashboardError, Result};
use serde::Deserialize;

use crate::settings;

/// Sends the request, failing with a transport error once the configured
/// timeout elapses.
async fn send(request: Request, endpoint: &str) -> Result<Response> {
    let timeout_ms = settings::get_settings().request_timeout_ms;
    let pending = Box::pin(request.send());
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(pending, timer).await {
        Either::Left((Ok(response), _)) => Ok(response),
        Either::Left((Err(e), _)) => {
            let error_msg = format!("Request failed: {}", e);
            log::error!("{} - {}", endpoint, error_msg);
            Err(DashboardError::transport(error_msg))
        }
        Either::Right(_) => {
            let error_msg = format!("Timed out after {} ms", timeout_ms);
            log::error!("{} - {}", endpoint, error_msg);
            Err(DashboardError::transport(error_msg))
        }
    }
}

async fn parse<T>(response: Response, endpoint: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("{} - Response received, parsing JSON", endpoint);
    response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} - {}", endpoint, error_msg);
        DashboardError::malformed(error_msg)
    })
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = send(Request::get(&url).build().map_err(build_error)?, endpoint).await?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(DashboardError::transport(error_msg));
    }

    let data = parse(response, endpoint).await?;
    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Bodiless POST; a non-OK response still counts if its body has the expected shape
pub async fn post<T>(endpoint: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = send(Request::post(&url).build().map_err(build_error)?, endpoint).await?;

    if !response.ok() {
        let status = response.status();
        log::warn!("POST {} - Non-OK response: {}", endpoint, status);
        return parse(response, endpoint)
            .await
            .map_err(|_| DashboardError::transport(format!("HTTP error: {}", status)));
    }

    let data = parse(response, endpoint).await?;
    log::info!("POST {} - Success", endpoint);
    Ok(data)
}

fn build_error(e: gloo_net::Error) -> DashboardError {
    DashboardError::transport(format!("Failed to build request: {}", e))
}

/// The dashboard backend reached over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDashboardApi;

#[async_trait(?Send)]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_summary(&self) -> Result<SummaryPayload> {
        get(endpoints::SUMMARY).await
    }

    async fn fetch_volume(&self, period: ChartPeriod) -> Result<VolumeChartPayload> {
        get(&volume_path(period.as_str())).await
    }

    async fn fetch_type_counts(&self) -> Result<TypeChartPayload> {
        get(endpoints::CHART_TYPES).await
    }

    async fn fetch_transactions(&self, per_page: u32) -> Result<TransactionsPage> {
        get(&transactions_path(per_page)).await
    }

    async fn process(&self) -> Result<ProcessResponse> {
        post(endpoints::PROCESS).await
    }
}
