use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Acknowledgment returned for every submitted question.
pub const ACK_RESPONSE: &str = "Thanks for your question, I'll think about it.";

/// One logged question together with the response it was answered with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub id: i64,
    pub question: String,
    pub response: String,
    /// ISO-8601, naive UTC, generated at insert time.
    pub timestamp: String,
}

impl Exchange {
    pub fn new(question: String) -> Self {
        Self {
            id: 0, // Will be set by database AUTOINCREMENT
            question,
            response: ACK_RESPONSE.to_string(),
            timestamp: utc_timestamp(),
        }
    }
}

fn utc_timestamp() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

/// History entry as exposed over the API: the row identifier is stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub response: String,
    pub timestamp: String,
}

impl From<Exchange> for HistoryEntry {
    fn from(exchange: Exchange) -> Self {
        Self {
            question: exchange.question,
            response: exchange.response,
            timestamp: exchange.timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerStatus {
    pub status: String,
    pub version: String,
    pub uptime: u64,
}
