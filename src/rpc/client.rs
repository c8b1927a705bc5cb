//! Minimal JSON-RPC 2.0 client over HTTP POST

use crate::error::{Error, ProbeError, Result, TransportKind};
use alloy::primitives::U256;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Request id sent with every call
pub const REQUEST_ID: u64 = 1;

/// JSON-RPC 2.0 request body
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Value,
    pub id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id: REQUEST_ID,
        }
    }
}

/// HTTP client issuing single JSON-RPC calls
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl RpcClient {
    /// Create a client with a hard per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClientInit(e.to_string()))?;

        Ok(Self { http, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Call `method` on `url`, returning the `result` member and the round trip time
    ///
    /// The HTTP status code is not inspected; a 4xx or 5xx response carrying a
    /// JSON-RPC error body is reported as that RPC error.
    pub async fn call(
        &self,
        url: &Url,
        method: &str,
        params: Value,
    ) -> std::result::Result<(Value, Duration), ProbeError> {
        let request = JsonRpcRequest::new(method, params);
        let started = Instant::now();

        tracing::debug!("{} -> {}", method, url);

        let response = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let latency = started.elapsed();

        tracing::debug!(
            "{} <- {} ({} bytes, {}ms)",
            method,
            status,
            body.len(),
            latency.as_millis()
        );

        let result = extract_result(&body)?;
        Ok((result, latency))
    }
}

/// Pull `result` out of a raw JSON-RPC response body
pub fn extract_result(body: &[u8]) -> std::result::Result<Value, ProbeError> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| ProbeError::transport(TransportKind::Body, format!("not JSON: {}", e)))?;

    let Value::Object(mut object) = json else {
        return Err(ProbeError::transport(
            TransportKind::Body,
            "expected a JSON object",
        ));
    };

    match object.remove("error") {
        None | Some(Value::Null) => {}
        Some(error) => {
            return Err(ProbeError::Rpc {
                message: error_message(&error),
            })
        }
    }

    Ok(object.remove("result").unwrap_or(Value::Null))
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        Value::Object(obj) => match obj.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => error.to_string(),
        },
        other => other.to_string(),
    }
}

/// Parse a JSON-RPC quantity: a hex string (with or without `0x`) or a JSON number
pub fn parse_quantity(value: &Value) -> Option<U256> {
    match value {
        Value::String(s) => {
            let digits = strip_hex_prefix(s.trim());
            if digits.is_empty() {
                return None;
            }
            U256::from_str_radix(digits, 16).ok()
        }
        Value::Number(n) => n.as_u64().map(U256::from),
        _ => None,
    }
}

/// Like [`parse_quantity`] but limited to values that fit in a `u64`
pub fn parse_u64_quantity(value: &Value) -> Option<u64> {
    parse_quantity(value).and_then(|q| u64::try_from(q).ok())
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
