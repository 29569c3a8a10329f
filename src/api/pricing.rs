//! Subscription plans and plan orders.

use crate::{front::errors::ApiError, models, repo};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewOrderRequest {
    pub user_id: i64,
    pub plan_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub id: i64,
    pub status: String,
}

pub async fn list_plans(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::pricing::PricingPlan>, ApiError> {
    Ok(repo.list_pricing_plans().await?)
}

pub async fn list_orders(
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::pricing::PlanOrder>, ApiError> {
    Ok(repo.list_plan_orders().await?)
}

pub async fn create_order(
    request: &NewOrderRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    if !repo.user_exists(request.user_id).await? {
        return Err(ApiError::NotFound("User not found".into()));
    }

    if !repo.plan_exists(request.plan_id).await? {
        return Err(ApiError::NotFound("Plan not found".into()));
    }

    Ok(repo
        .insert_plan_order(request.user_id, request.plan_id)
        .await?)
}

pub async fn update_order(
    request: &UpdateOrderRequest,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    let status: models::pricing::OrderStatus = request.status.parse().map_err(|_| {
        ApiError::Validation("Invalid status. Must be one of: pending, active, cancelled".into())
    })?;

    if !repo.plan_order_exists(request.id).await? {
        return Err(ApiError::NotFound("Order not found".into()));
    }

    Ok(repo.set_plan_order_status(request.id, status).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pricing::OrderStatus;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    #[ntex::test]
    async fn test_create_order_unknown_plan_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_user_exists().returning(|_| Ok(true));
        mock_repo
            .expect_plan_exists()
            .with(eq(9))
            .times(1)
            .returning(|_| Ok(false));
        // no insert expectation: a call would panic the test

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = NewOrderRequest {
            user_id: 42,
            plan_id: 9,
        };
        let result = create_order(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_create_order_starts_pending() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_user_exists().returning(|_| Ok(true));
        mock_repo.expect_plan_exists().returning(|_| Ok(true));
        mock_repo
            .expect_insert_plan_order()
            .with(eq(42), eq(2))
            .times(1)
            .returning(|_, _| Ok(6));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = NewOrderRequest {
            user_id: 42,
            plan_id: 2,
        };
        let result = create_order(&request, &mock_repo).await;

        assert!(result.is_ok_and(|id| id == 6));
    }

    #[ntex::test]
    async fn test_update_order_invalid_status_is_rejected() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let request = UpdateOrderRequest {
            id: 6,
            status: "paid".to_string(),
        };
        let result = update_order(&request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_order_sets_status() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_plan_order_exists()
            .with(eq(6))
            .times(1)
            .returning(|_| Ok(true));
        mock_repo
            .expect_set_plan_order_status()
            .with(eq(6), eq(OrderStatus::Active))
            .times(1)
            .returning(|_, _| Ok(()));

        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);
        let request = UpdateOrderRequest {
            id: 6,
            status: "active".to_string(),
        };

        assert!(update_order(&request, &mock_repo).await.is_ok());
    }
}
