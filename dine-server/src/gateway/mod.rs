//! SSLCommerz integration via REST API (no SDK dependency)
//!
//! One call: initiate a payment session and get back the hosted gateway
//! page URL the customer is redirected to. Outcome arrives later on the
//! success/fail callback routes.

use rust_decimal::Decimal;
use uuid::Uuid;

const SANDBOX_ENDPOINT: &str = "https://sandbox.sslcommerz.com/gwprocess/v4/api.php";
const LIVE_ENDPOINT: &str = "https://securepay.sslcommerz.com/gwprocess/v4/api.php";

/// Gateway credentials and mode
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub store_id: String,
    pub store_passwd: String,
    /// false = sandbox
    pub is_live: bool,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            store_id: std::env::var("STORE_ID").unwrap_or_default(),
            store_passwd: std::env::var("STORE_PASSWD").unwrap_or_default(),
            is_live: std::env::var("GATEWAY_LIVE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    fn endpoint(&self) -> &'static str {
        if self.is_live {
            LIVE_ENDPOINT
        } else {
            SANDBOX_ENDPOINT
        }
    }
}

/// Mint a transaction identifier.
///
/// Called once per payment initiation; concurrent initiations must never
/// share an id, so there is deliberately no cached/global value here.
pub fn new_tran_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Everything the session init needs beyond the fixed placeholder fields.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub total_amount: Decimal,
    pub tran_id: String,
    pub success_url: String,
    pub fail_url: String,
    pub cancel_url: String,
    pub ipn_url: String,
    pub product_name: String,
    pub product_category: String,
    pub cus_name: String,
    pub cus_email: String,
}

/// Create a payment session, returning the hosted gateway page URL.
pub async fn create_session(
    config: &GatewayConfig,
    req: &SessionRequest,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let client = reqwest::Client::new();
    let amount = req.total_amount.to_string();

    // The address block is a fixed placeholder: the shop has no shipping
    // address capture, but the gateway requires the fields.
    let resp: serde_json::Value = client
        .post(config.endpoint())
        .form(&[
            ("store_id", config.store_id.as_str()),
            ("store_passwd", config.store_passwd.as_str()),
            ("total_amount", amount.as_str()),
            ("currency", "USD"),
            ("tran_id", req.tran_id.as_str()),
            ("success_url", req.success_url.as_str()),
            ("fail_url", req.fail_url.as_str()),
            ("cancel_url", req.cancel_url.as_str()),
            ("ipn_url", req.ipn_url.as_str()),
            ("shipping_method", "Courier"),
            ("product_name", req.product_name.as_str()),
            ("product_category", req.product_category.as_str()),
            ("product_profile", "general"),
            ("cus_name", req.cus_name.as_str()),
            ("cus_email", req.cus_email.as_str()),
            ("cus_add1", "Dhaka"),
            ("cus_add2", "Dhaka"),
            ("cus_city", "Dhaka"),
            ("cus_state", "Dhaka"),
            ("cus_postcode", "1000"),
            ("cus_country", "Bangladesh"),
            ("cus_phone", "01711111111"),
            ("cus_fax", "01711111111"),
            ("ship_name", req.cus_name.as_str()),
            ("ship_add1", "Dhaka"),
            ("ship_add2", "Dhaka"),
            ("ship_city", "Dhaka"),
            ("ship_state", "Dhaka"),
            ("ship_postcode", "1000"),
            ("ship_country", "Bangladesh"),
        ])
        .send()
        .await?
        .json()
        .await?;

    resp["GatewayPageURL"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| format!("Gateway session init failed: {resp}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tran_ids_are_unique_per_initiation() {
        let a = new_tran_id();
        let b = new_tran_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn sandbox_is_the_default_endpoint() {
        let config = GatewayConfig {
            store_id: "store".into(),
            store_passwd: "pass".into(),
            is_live: false,
        };
        assert!(config.endpoint().contains("sandbox"));
    }
}
