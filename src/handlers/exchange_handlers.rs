use super::main_handlers::AppState;
use crate::error::AppError;
use crate::models::{AskRequest, AskResponse, Exchange, HistoryEntry, HistoryResponse};
use actix_web::{web, HttpResponse, Result};

pub async fn ask_question(
    data: web::Data<AppState>,
    request: web::Json<AskRequest>,
) -> Result<HttpResponse, AppError> {
    let ask_req = request.into_inner();

    let exchange = Exchange::new(ask_req.question);
    let id = data.database.insert_exchange(&exchange)?;

    tracing::info!("Stored exchange {id}");

    Ok(HttpResponse::Ok().json(AskResponse {
        response: exchange.response,
    }))
}

pub async fn get_history(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let exchanges = data.database.get_all_exchanges()?;

    let history: Vec<HistoryEntry> = exchanges.into_iter().map(HistoryEntry::from).collect();

    Ok(HttpResponse::Ok().json(HistoryResponse { history }))
}
