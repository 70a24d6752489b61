// ==========================================
// 钣喷维修成本引擎 - 命令行入口
// ==========================================
// 用法:
//   collision-cost-engine <command> [request.json] [--config cfg.json] [--prices prices.csv] [--lang en]
//
// 命令:
//   paint       喷漆估价
//   cart        配件拆单
//   cart-csv    按供应商价格 CSV 拆单（需 --prices）
//   compare     单配件比价
//   compliance  DRP 合规评分
//
// 请求 JSON 从文件读取，未指定文件时从 stdin 读取；响应信封输出到 stdout
// ==========================================

use anyhow::{bail, Context, Result};
use collision_cost_engine::{i18n, logging, ConfigManager, RequestHandler};
use std::io::Read;
use std::path::PathBuf;

const USAGE: &str = "用法: collision-cost-engine <paint|cart|cart-csv|compare|compliance> \
[request.json] [--config cfg.json] [--prices prices.csv] [--lang zh-CN|en]";

struct CliArgs {
    command: String,
    request_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    prices_path: Option<PathBuf>,
    lang: Option<String>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let command = args.next().context(USAGE)?;

    let mut request_path = None;
    let mut config_path = None;
    let mut prices_path = None;
    let mut lang = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(args.next().context("--config 缺少路径")?)),
            "--prices" => prices_path = Some(PathBuf::from(args.next().context("--prices 缺少路径")?)),
            "--lang" => lang = Some(args.next().context("--lang 缺少语言代码")?),
            _ if request_path.is_none() => request_path = Some(PathBuf::from(arg)),
            other => bail!("多余的参数: {}\n{}", other, USAGE),
        }
    }

    Ok(CliArgs {
        command,
        request_path,
        config_path,
        prices_path,
        lang,
    })
}

fn read_request(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("无法读取请求文件: {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("无法从 stdin 读取请求")?;
            Ok(raw)
        }
    }
}

fn main() -> Result<()> {
    logging::init();

    let args = parse_args()?;
    tracing::info!(
        version = collision_cost_engine::VERSION,
        command = %args.command,
        "{} 启动",
        collision_cost_engine::APP_NAME
    );

    if let Some(lang) = &args.lang {
        if !i18n::set_locale(lang) {
            bail!("不支持的语言: {}（可选: {}）", lang, i18n::SUPPORTED_LOCALES.join(", "));
        }
    }

    let manager = match &args.config_path {
        Some(path) => ConfigManager::from_file(path)?,
        None => ConfigManager::new(),
    };
    let handler = RequestHandler::new(manager.config());
    let request = read_request(args.request_path.as_ref())?;

    let response = match args.command.as_str() {
        "paint" => handler.paint_estimate(&request),
        "cart" => handler.optimize_cart(&request),
        "cart-csv" => {
            let prices = args.prices_path.as_ref().context("cart-csv 需要 --prices")?;
            handler.optimize_from_price_csv(prices, &request)
        }
        "compare" => handler.compare_prices(&request),
        "compliance" => handler.compliance_score(&request),
        other => bail!("未知命令: {}\n{}", other, USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
