use chrono::{DateTime, Utc};
use serde::Deserialize;

use assettrack_core::{CompanyId, LocationId, UserId};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub date_of_purchase: DateTime<Utc>,
    pub warranty_months: u32,
    pub owner: UserId,
    pub manufacturer: CompanyId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub date_of_purchase: Option<DateTime<Utc>>,
    pub warranty_months: Option<u32>,
    pub owner: Option<UserId>,
    pub manufacturer: Option<CompanyId>,
}

#[derive(Debug, Deserialize)]
pub struct StatusEntryRequest {
    pub name: String,
    pub location: LocationId,
}

#[derive(Debug, Deserialize)]
pub struct AppendHistoryRequest {
    pub status: Vec<StatusEntryRequest>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub name: Option<String>,
    pub address: Option<String>,
}
