use crate::auth::JwtConfig;
use crate::gateway::GatewayConfig;

/// 服务器配置 - 餐厅后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/dine | 工作目录 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | PUBLIC_URL | http://localhost:5000 | 回调基地址 (支付网关) |
/// | FRONTEND_URL | http://localhost:5173 | 前端地址 (支付结果跳转) |
/// | ALLOWED_ORIGINS | http://localhost:5173 | CORS 允许来源 (逗号分隔) |
/// | ENVIRONMENT | development | 运行环境 |
/// | STORE_ID | (空) | 支付网关商户号 |
/// | STORE_PASSWD | (空) | 支付网关商户密钥 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/dine HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 本服务对外基地址 (网关回调 URL 的前缀)
    pub public_url: String,
    /// 前端地址 (支付完成/失败页跳转)
    pub frontend_url: String,
    /// 支付取消回调地址
    pub payment_cancel_url: String,
    /// 支付 IPN 回调地址
    pub payment_ipn_url: String,
    /// CORS 允许来源 (凭证模式下不能使用通配符)
    pub allowed_origins: Vec<String>,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 支付网关配置
    pub gateway: GatewayConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/dine".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            public_url: std::env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:5000".into()),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            payment_cancel_url: std::env::var("PAYMENT_CANCEL_URL")
                .unwrap_or_else(|_| "http://localhost:3030/cancel".into()),
            payment_ipn_url: std::env::var("PAYMENT_IPN_URL")
                .unwrap_or_else(|_| "http://localhost:3030/ipn".into()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            jwt: JwtConfig::default(),
            gateway: GatewayConfig::from_env(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
