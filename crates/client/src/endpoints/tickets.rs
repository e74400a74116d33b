//! Ticket listing endpoints.

use reqwest::Client;

use crate::endpoints::{
    RetryPolicy, authorize, encode_path_segment, parse_json, send_request_with_retry,
};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{AdvertisedTicketsResponse, Ticket};
use crate::query::TicketQueryParams;

/// Search approved tickets.
pub async fn search_tickets(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    params: &TicketQueryParams,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Ticket>> {
    let url = format!("{}/tickets", base_url);

    let builder = authorize(client.get(&url), auth_token).query(&params.to_query_pairs());
    let response = send_request_with_retry(builder, retry, "/tickets", "GET", metrics).await?;

    parse_json(response, "/tickets", metrics).await
}

/// Most recently added tickets.
pub async fn latest_tickets(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Ticket>> {
    let url = format!("{}/tickets/latest", base_url);

    let builder = authorize(client.get(&url), auth_token);
    let response =
        send_request_with_retry(builder, retry, "/tickets/latest", "GET", metrics).await?;

    parse_json(response, "/tickets/latest", metrics).await
}

/// Tickets currently advertised on the home page.
pub async fn advertised_tickets(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Ticket>> {
    let url = format!("{}/tickets/advertise/current", base_url);

    let builder = authorize(client.get(&url), auth_token);
    let response = send_request_with_retry(
        builder,
        retry,
        "/tickets/advertise/current",
        "GET",
        metrics,
    )
    .await?;

    let resp: AdvertisedTicketsResponse =
        parse_json(response, "/tickets/advertise/current", metrics).await?;
    Ok(resp.data)
}

/// A single ticket by id.
pub async fn get_ticket(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    ticket_id: &str,
    retry: RetryPolicy,
    metrics: Option<&MetricsCollector>,
) -> Result<Ticket> {
    let url = format!("{}/tickets/{}", base_url, encode_path_segment(ticket_id));

    let builder = authorize(client.get(&url), auth_token);
    let response = send_request_with_retry(builder, retry, "/tickets/{id}", "GET", metrics).await?;

    parse_json(response, "/tickets/{id}", metrics).await
}
