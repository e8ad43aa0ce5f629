use contracts::domain::product::{Product, ProductListQuery, ProductPayload};
use contracts::shared::{Msg, StatusQuery};

use crate::shared::http;

pub async fn fetch_products(query: &ProductListQuery) -> Result<Vec<Product>, String> {
    http::get_query("/products/", query).await
}

pub async fn create_product(payload: &ProductPayload) -> Result<Product, String> {
    http::post("/products/", payload).await
}

pub async fn update_product(id: i64, payload: &ProductPayload) -> Result<Product, String> {
    http::put(&format!("/products/{}", id), payload).await
}

pub async fn delete_product(id: i64) -> Result<Msg, String> {
    http::delete(&format!("/products/{}", id)).await
}

pub async fn update_product_status(id: i64, status: i32) -> Result<Msg, String> {
    http::put_query(&format!("/products/{}/status", id), &StatusQuery { status }).await
}