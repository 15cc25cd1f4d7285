//! Customer service.

use std::sync::Arc;

use super::{dispatch, ids_of, unwrap_list};
use crate::application::ports::NhanhApiPort;
use crate::domain::customer::{Customer, CustomerAddRequest, CustomerSearchRequest};
use crate::domain::shared::Page;
use crate::error::NhanhError;

/// One page of `/customer/search`.
pub type CustomerPage = Page<Customer>;

/// Customer search and creation.
pub struct CustomerService<A: NhanhApiPort + ?Sized> {
    api: Arc<A>,
}

impl<A: NhanhApiPort + ?Sized> CustomerService<A> {
    /// Create a new `CustomerService`.
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Search customers.
    pub async fn search(&self, request: &CustomerSearchRequest) -> Result<CustomerPage, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        let page = Page::from_data(&data, "customers");
        tracing::debug!(
            page = page.page,
            total_pages = page.total_pages,
            count = page.items.len(),
            "Customer search"
        );
        Ok(page)
    }

    /// Customer by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, NhanhError> {
        let page = self.search(&CustomerSearchRequest::by_id(id)).await?;
        Ok(page.items.into_iter().next())
    }

    /// Customer by mobile number.
    pub async fn find_by_mobile(&self, mobile: &str) -> Result<Option<Customer>, NhanhError> {
        let page = self.search(&CustomerSearchRequest::by_mobile(mobile)).await?;
        Ok(page.items.into_iter().next())
    }

    /// Create customers; returns the ids Nhanh assigned.
    pub async fn add(&self, request: &CustomerAddRequest) -> Result<Vec<i64>, NhanhError> {
        let data = dispatch(self.api.as_ref(), request).await?;
        let ids = ids_of(unwrap_list(&data, "ids"));
        tracing::info!(requested = request.customers.len(), created = ids.len(), "Customers added");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fake::FakeApi;
    use crate::domain::customer::NewCustomer;
    use serde_json::json;

    fn page_data() -> serde_json::Value {
        json!({
            "totalPages": 4,
            "page": 1,
            "customers": {
                "31": { "id": 31, "name": "Nguyễn Văn An", "mobile": "0912345678" }
            }
        })
    }

    #[tokio::test]
    async fn search_decodes_page() {
        let api = Arc::new(FakeApi::new().respond("/customer/search", page_data()));
        let service = CustomerService::new(Arc::clone(&api));

        let page = service
            .search(&CustomerSearchRequest::paged(1, 20))
            .await
            .unwrap();

        assert_eq!(page.total_pages, 4);
        assert!(page.has_more());
        assert_eq!(page.items[0].name(), "Nguyễn Văn An");
        assert_eq!(api.calls()[0].1, Some(json!({ "page": 1, "icpp": 20 })));
    }

    #[tokio::test]
    async fn invalid_search_is_not_sent() {
        let api = Arc::new(FakeApi::new().respond("/customer/search", page_data()));
        let service = CustomerService::new(Arc::clone(&api));

        let err = service
            .search(&CustomerSearchRequest::paged(1, 60))
            .await
            .unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert!(errors.first("icpp").unwrap().contains("50"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn find_by_mobile_returns_first_match() {
        let api = Arc::new(FakeApi::new().respond("/customer/search", page_data()));
        let service = CustomerService::new(Arc::clone(&api));

        let customer = service.find_by_mobile("0912345678").await.unwrap().unwrap();
        assert_eq!(customer.id(), 31);
        assert_eq!(api.calls()[0].1, Some(json!({ "mobile": "0912345678" })));
    }

    #[tokio::test]
    async fn find_by_id_on_empty_page() {
        let api = Arc::new(FakeApi::new().respond("/customer/search", json!({ "customers": [] })));
        let service = CustomerService::new(api);
        assert!(service.find_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_returns_ids() {
        let api = Arc::new(FakeApi::new().respond("/customer/add", json!({ "ids": [901, "902"] })));
        let service = CustomerService::new(Arc::clone(&api));
        let request = CustomerAddRequest::new(vec![
            NewCustomer::new("An", "0911000001"),
            NewCustomer::new("Bình", "0911000002"),
        ]);

        assert_eq!(service.add(&request).await.unwrap(), vec![901, 902]);
        assert!(api.calls()[0].1.as_ref().unwrap().is_array());
    }

    #[tokio::test]
    async fn api_errors_propagate() {
        let api = Arc::new(FakeApi::new().fail("/customer/search", 401, r#"{"code":0}"#));
        let service = CustomerService::new(api);
        let err = service.find_by_id(1).await.unwrap_err();
        assert!(matches!(err, NhanhError::Authentication(_)));
    }
}
