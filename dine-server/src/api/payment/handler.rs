//! Payment API Handlers
//!
//! The order payment lifecycle:
//!
//! 1. Initiation loads (or inline-creates) the order, mints a fresh
//!    transaction id, opens a gateway session and hands the hosted page
//!    URL back to the frontend.
//! 2. The gateway later POSTs to the success/fail callback carrying the
//!    transaction id plus the correlation value (`orderId` or `code`).
//! 3. The callback records the terminal status and redirects the customer
//!    to the frontend result page. A correlation miss is logged and still
//!    redirected; the gateway retries on non-2xx/3xx responses.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::models::{CheckoutCreate, Correlation, Order, PaymentStatus};
use crate::db::repository::{CartRepository, OrderRepository};
use crate::gateway::{self, SessionRequest};
use crate::utils::{AppError, AppResult};

/// Cart checkouts aggregate many foods into one gateway line item.
const CHECKOUT_PRODUCT_NAME: &str = "combine food";
const CHECKOUT_PRODUCT_CATEGORY: &str = "Mix category";

fn callback_urls(state: &ServerState, tran_id: &str, corr_key: &str, corr_value: &str) -> (String, String) {
    let base = &state.config.public_url;
    (
        format!("{base}/api/v1/user/payment/success/{tran_id}?{corr_key}={corr_value}"),
        format!("{base}/api/v1/user/payment/fail/{tran_id}?{corr_key}={corr_value}"),
    )
}

/// POST /api/v1/user/food/payment/:id - 为已有订单发起支付
pub async fn pay_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {order_id}")))?;

    let amount = order
        .price
        .ok_or_else(|| AppError::validation("Order has no price"))?;
    let order_key = order
        .id
        .as_ref()
        .map(ToString::to_string)
        .ok_or_else(|| AppError::internal("Order record has no id"))?;

    // Fresh transaction id per initiation; repeat initiations of the same
    // order must not share correlation state.
    let tran_id = gateway::new_tran_id();
    let (success_url, fail_url) = callback_urls(&state, &tran_id, "orderId", &order_key);

    let session = SessionRequest {
        total_amount: amount,
        tran_id: tran_id.clone(),
        success_url,
        fail_url,
        cancel_url: state.config.payment_cancel_url.clone(),
        ipn_url: state.config.payment_ipn_url.clone(),
        product_name: order.food_name.clone(),
        product_category: order.food_category.clone(),
        cus_name: order.user_name.clone(),
        cus_email: order.user_email.clone(),
    };

    let url = gateway::create_session(&state.config.gateway, &session)
        .await
        .map_err(|e| AppError::upstream(e.to_string()))?;

    tracing::info!(order_id = %order_key, tran_id = %tran_id, "Redirecting to payment gateway");

    Ok(Json(serde_json::json!({ "url": url })))
}

/// POST /api/v1/user/foods/payment - 购物车结算 (内联创建订单)
pub async fn pay_cart(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutCreate>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = OrderRepository::new(state.get_db());

    let code = Uuid::new_v4().simple().to_string();
    let order = repo.create_checkout(payload, code.clone()).await?;

    let amount = order
        .total_bill
        .ok_or_else(|| AppError::validation("Checkout has no totalBill"))?;

    let tran_id = gateway::new_tran_id();
    let (success_url, fail_url) = callback_urls(&state, &tran_id, "code", &code);

    let session = SessionRequest {
        total_amount: amount,
        tran_id: tran_id.clone(),
        success_url,
        fail_url,
        cancel_url: state.config.payment_cancel_url.clone(),
        ipn_url: state.config.payment_ipn_url.clone(),
        product_name: CHECKOUT_PRODUCT_NAME.to_string(),
        product_category: CHECKOUT_PRODUCT_CATEGORY.to_string(),
        cus_name: order.user_name.clone(),
        cus_email: order.user_email.clone(),
    };

    let url = gateway::create_session(&state.config.gateway, &session)
        .await
        .map_err(|e| AppError::upstream(e.to_string()))?;

    tracing::info!(code = %code, tran_id = %tran_id, "Redirecting to payment gateway");

    Ok(Json(serde_json::json!({ "url": url })))
}

/// Correlation query parameter: the order's record id, or the checkout code.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackQuery {
    pub order_id: Option<String>,
    pub code: Option<String>,
}

impl CallbackQuery {
    fn correlation(self) -> Option<Correlation> {
        self.order_id
            .map(Correlation::OrderId)
            .or(self.code.map(Correlation::Code))
    }
}

/// POST /api/v1/user/payment/success/:tranId - 网关支付成功回调
pub async fn payment_success(
    State(state): State<ServerState>,
    Path(tran_id): Path<String>,
    Query(query): Query<CallbackQuery>,
) -> AppResult<Redirect> {
    let redirect = Redirect::to(&format!(
        "{}/api/v1/payment-complete/{tran_id}",
        state.config.frontend_url
    ));

    let Some(corr) = query.correlation() else {
        tracing::warn!(tran_id = %tran_id, "Success callback without correlation value");
        return Ok(redirect);
    };

    let repo = OrderRepository::new(state.get_db());
    let Some(order) = repo.find_by_correlation(&corr).await? else {
        tracing::warn!(tran_id = %tran_id, ?corr, "Success callback matched no order");
        return Ok(redirect);
    };

    if order.payment.is_some() {
        // Already terminal (double delivery or a lost race): leave it alone.
        tracing::debug!(tran_id = %tran_id, ?corr, "Order already settled, ignoring callback");
        return Ok(redirect);
    }

    match repo
        .record_payment(&corr, PaymentStatus::Complete, Some(tran_id.clone()))
        .await?
    {
        Some(updated) => {
            tracing::info!(tran_id = %tran_id, ?corr, "Payment complete");
            cleanup_cart(&state, &updated).await;
        }
        None => {
            tracing::debug!(tran_id = %tran_id, ?corr, "Order settled concurrently, no update");
        }
    }

    Ok(redirect)
}

/// POST /api/v1/user/payment/fail/:tranId - 网关支付失败回调
pub async fn payment_fail(
    State(state): State<ServerState>,
    Path(tran_id): Path<String>,
    Query(query): Query<CallbackQuery>,
) -> AppResult<Redirect> {
    let redirect = Redirect::to(&format!(
        "{}/api/v1/payment-failed/{tran_id}",
        state.config.frontend_url
    ));

    let Some(corr) = query.correlation() else {
        tracing::warn!(tran_id = %tran_id, "Fail callback without correlation value");
        return Ok(redirect);
    };

    let repo = OrderRepository::new(state.get_db());
    let Some(order) = repo.find_by_correlation(&corr).await? else {
        tracing::warn!(tran_id = %tran_id, ?corr, "Fail callback matched no order");
        return Ok(redirect);
    };

    if order.payment.is_some() {
        tracing::debug!(tran_id = %tran_id, ?corr, "Order already settled, ignoring callback");
        return Ok(redirect);
    }

    // No transaction id is recorded for failed payments.
    if repo
        .record_payment(&corr, PaymentStatus::Failed, None)
        .await?
        .is_some()
    {
        tracing::info!(tran_id = %tran_id, ?corr, "Payment failed");
    }

    Ok(redirect)
}

/// Best-effort cart cleanup after a successful checkout payment.
///
/// Scoped to the paying order's own user; only the cart-checkout flow
/// (orders carrying a code) has cart items to clear.
async fn cleanup_cart(state: &ServerState, order: &Order) {
    if order.code.is_none() {
        return;
    }

    let cart = CartRepository::new(state.get_db());
    match cart.delete_for_user(&order.user_email).await {
        Ok(removed) => {
            tracing::info!(email = %order.user_email, removed, "Cart cleared after payment");
        }
        Err(e) => {
            tracing::error!(email = %order.user_email, error = %e, "Cart cleanup failed");
        }
    }
}
