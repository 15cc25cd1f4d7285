//! Order service.

use std::sync::Arc;

use serde_json::Value;

use super::dispatch;
use crate::application::ports::NhanhApiPort;
use crate::domain::entity::Entity;
use crate::domain::order::{
    Order, OrderAddRequest, OrderReceipt, OrderSearchRequest, OrderUpdateRequest,
};
use crate::domain::shared::Page;
use crate::error::NhanhError;

/// One page of `/order/index`.
pub type OrderPage = Page<Order>;

/// Order search, creation and status updates.
pub struct OrderService<A: NhanhApiPort + ?Sized> {
    api: Arc<A>,
}

impl<A: NhanhApiPort + ?Sized> OrderService<A> {
    /// Create a new `OrderService`.
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Search orders.
    pub async fn search(&self, request: &OrderSearchRequest) -> Result<OrderPage, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        Ok(Page::from_data(&data, "orders"))
    }

    /// Order by Nhanh id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Order>, NhanhError> {
        let page = self.search(&OrderSearchRequest::by_id(id)).await?;
        Ok(page.items.into_iter().find(|order| order.id() == id))
    }

    /// Create an order.
    pub async fn add(&self, request: &OrderAddRequest) -> Result<OrderReceipt, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        let receipt = receipt_from(data, None)?;
        tracing::info!(
            shop_order_id = %request.id,
            order_id = receipt.order_id(),
            "Order added"
        );
        Ok(receipt)
    }

    /// Update an order's status or payment.
    pub async fn update(&self, request: &OrderUpdateRequest) -> Result<OrderReceipt, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        let receipt = receipt_from(data, Some(request.order_id))?;
        tracing::info!(
            order_id = receipt.order_id(),
            status = ?receipt.status(),
            "Order updated"
        );
        Ok(receipt)
    }
}

/// Decode and check a receipt. `/order/update` may omit the id it was
/// given, so `known_id` fills it in.
fn receipt_from(data: Value, known_id: Option<i64>) -> Result<OrderReceipt, NhanhError> {
    let mut receipt = OrderReceipt::from_value(data).unwrap_or_default();
    if let Some(id) = known_id.filter(|_| receipt.get("orderId").is_none()) {
        receipt.set("orderId", id);
    }
    receipt
        .validate()
        .map_err(|err| NhanhError::InvalidResponse(format!("order receipt: {err}")))?;
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fake::FakeApi;
    use crate::domain::order::{OrderLineInput, OrderStatus};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn new_order() -> OrderAddRequest {
        OrderAddRequest {
            id: "WEB-7".to_string(),
            customer_name: "Phạm Thu".to_string(),
            customer_mobile: "0987000111".to_string(),
            product_list: vec![OrderLineInput::new("SKU-9", 1, dec!(250000))],
            ..OrderAddRequest::default()
        }
    }

    #[tokio::test]
    async fn search_and_find() {
        let data = json!({
            "totalPages": 1,
            "orders": { "5501": { "id": 5501, "statusCode": "New" } }
        });
        let api = Arc::new(FakeApi::new().respond("/order/index", data));
        let service = OrderService::new(Arc::clone(&api));

        let order = service.find_by_id(5501).await.unwrap().unwrap();
        assert_eq!(order.status(), OrderStatus::New);
        assert!(service.find_by_id(1).await.unwrap().is_none());
        assert_eq!(api.call_count("/order/index"), 2);
    }

    #[tokio::test]
    async fn add_returns_receipt() {
        let api = Arc::new(FakeApi::new().respond(
            "/order/add",
            json!({ "orderId": 7788, "trackingUrl": "https://track.example/7788" }),
        ));
        let service = OrderService::new(api);

        let receipt = service.add(&new_order()).await.unwrap();
        assert_eq!(receipt.order_id(), 7788);
        assert_eq!(
            receipt.tracking_url().as_deref(),
            Some("https://track.example/7788")
        );
    }

    #[tokio::test]
    async fn add_with_bad_line_is_refused() {
        let api = Arc::new(FakeApi::new().respond("/order/add", json!({ "orderId": 1 })));
        let service = OrderService::new(Arc::clone(&api));
        let mut request = new_order();
        request.product_list[0].quantity = 0;

        let err = service.add(&request).await.unwrap_err();
        assert!(err.validation_errors().unwrap().has("productList.0.quantity"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn add_without_order_id_is_invalid_response() {
        let api = Arc::new(FakeApi::new().respond("/order/add", json!({})));
        let service = OrderService::new(api);
        let err = service.add(&new_order()).await.unwrap_err();
        assert!(matches!(err, NhanhError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn update_fills_missing_order_id() {
        let api = Arc::new(FakeApi::new().respond("/order/update", json!({ "status": "Canceled" })));
        let service = OrderService::new(Arc::clone(&api));

        let receipt = service
            .update(&OrderUpdateRequest::status(4242, OrderStatus::Canceled))
            .await
            .unwrap();
        assert_eq!(receipt.order_id(), 4242);
        assert_eq!(receipt.status(), Some(OrderStatus::Canceled));
        assert_eq!(
            api.calls()[0].1,
            Some(json!({ "orderId": 4242, "status": "Canceled" }))
        );
    }
}
