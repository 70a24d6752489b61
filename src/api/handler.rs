// ==========================================
// 钣喷维修成本引擎 - JSON 请求处理
// ==========================================
// 输入: 请求 JSON 字符串
// 输出: 响应信封
//   成功: {"success":true,"<key>":{…}}
//   失败: {"success":false,"error":"…","code":"…"}
// ==========================================

use crate::api::cart_api::CartApi;
use crate::api::compliance_api::ComplianceApi;
use crate::api::dto::{
    ComparePricesRequest, ComplianceRequest, OptimizeCartRequest, PaintEstimateRequest,
    PriceTableCartRequest,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::paint_api::PaintEstimateApi;
use crate::config::engine_config::EngineConfig;
use crate::importer::SupplierPriceImporter;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

// ==========================================
// RequestHandler - 按配置组装的处理器
// ==========================================
pub struct RequestHandler {
    cart_api: CartApi,
    paint_api: PaintEstimateApi,
    compliance_api: ComplianceApi,
}

impl RequestHandler {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            cart_api: CartApi::new(config.cart.clone()),
            paint_api: PaintEstimateApi::new(config.paint.clone()),
            compliance_api: ComplianceApi::new(config.compliance.clone()),
        }
    }

    pub fn optimize_cart(&self, request_json: &str) -> Value {
        respond("optimization", parse::<OptimizeCartRequest>(request_json).and_then(|req| {
            self.cart_api.optimize(&req)
        }))
    }

    pub fn paint_estimate(&self, request_json: &str) -> Value {
        respond("estimate", parse::<PaintEstimateRequest>(request_json).and_then(|req| {
            self.paint_api.estimate(&req)
        }))
    }

    pub fn compliance_score(&self, request_json: &str) -> Value {
        respond("compliance", parse::<ComplianceRequest>(request_json).and_then(|req| {
            self.compliance_api.score_request(&req)
        }))
    }

    /// 从供应商价格 CSV 组装购物车并拆单
    pub fn optimize_from_price_csv(&self, csv_path: &Path, request_json: &str) -> Value {
        let result = parse::<PriceTableCartRequest>(request_json).and_then(|req| {
            let table = SupplierPriceImporter::new().import_file(csv_path)?;
            self.cart_api.optimize_from_table(&table, &req)
        });
        respond("optimization", result)
    }

    pub fn compare_prices(&self, request_json: &str) -> Value {
        respond("comparison", parse::<ComparePricesRequest>(request_json).and_then(|req| {
            self.cart_api.compare(&req)
        }))
    }
}

impl Default for RequestHandler {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

// ==========================================
// 默认配置下的入口
// ==========================================

pub fn handle_optimize_cart(request_json: &str) -> String {
    RequestHandler::default().optimize_cart(request_json).to_string()
}

pub fn handle_paint_estimate(request_json: &str) -> String {
    RequestHandler::default().paint_estimate(request_json).to_string()
}

pub fn handle_compliance_score(request_json: &str) -> String {
    RequestHandler::default().compliance_score(request_json).to_string()
}

pub fn handle_compare_prices(request_json: &str) -> String {
    RequestHandler::default().compare_prices(request_json).to_string()
}

// ==========================================
// 信封
// ==========================================

fn parse<T: DeserializeOwned>(request_json: &str) -> ApiResult<T> {
    Ok(serde_json::from_str(request_json)?)
}

fn respond<T: Serialize>(key: &str, result: ApiResult<T>) -> Value {
    match result.and_then(|payload| Ok(serde_json::to_value(payload)?)) {
        Ok(payload) => {
            let mut envelope = serde_json::Map::new();
            envelope.insert("success".to_string(), Value::Bool(true));
            envelope.insert(key.to_string(), payload);
            Value::Object(envelope)
        }
        Err(err) => error_envelope(&err),
    }
}

pub fn error_envelope(err: &ApiError) -> Value {
    tracing::warn!(code = err.code(), error = %err, "请求处理失败");
    json!({
        "success": false,
        "error": err.to_string(),
        "code": err.code(),
    })
}
