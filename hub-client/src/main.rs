//! 数据浏览后端探测工具
//!
//! 连接配置的后端并输出：
//! - 所有表及其列
//! - 所有视图及其列

use common::config::AppConfig;
use common::state::HubState;
use common::utils::snake_to_camel_with_spaces;
use hub_client::service::{build_http_client, fetch_columns, fetch_tables, fetch_views};
use hub_client::{DataService, DataSource};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "hub-client";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    let state = HubState::from_config(&config);
    let service = DataService::from_state(&state, build_http_client(&config)?);
    info!(service = SERVICE_NAME, api_url = %state.api_url.get(), schema = %state.current_schema.get(), "连接后端");

    let mut tables = Vec::new();
    fetch_tables(&service, |t| tables = t).await;
    for table in &tables {
        let mut columns = Vec::new();
        fetch_columns(&service, table, |c| columns = c).await;
        print_resource("table", table, &columns);
    }
    if let Some(first) = tables.first() {
        state.current_table.set(first.clone());
    }

    let mut views = Vec::new();
    fetch_views(&service, |v| views = v).await;
    for view in &views {
        // 视图列读取失败时只记录日志
        let columns = service.view_columns(view).await.unwrap_or_default();
        print_resource("view", view, &columns);
    }
    if let Some(first) = views.first() {
        state.current_view.set(first.clone());
    }

    info!(
        tables = tables.len(),
        views = views.len(),
        current_table = %state.current_table.get(),
        current_view = %state.current_view.get(),
        "探测完成"
    );
    Ok(())
}

fn print_resource(kind: &str, name: &str, columns: &[String]) {
    let labels: Vec<String> = columns
        .iter()
        .map(|c| snake_to_camel_with_spaces(c))
        .collect();
    println!(
        "{kind} {} ({name}): {}",
        snake_to_camel_with_spaces(name),
        labels.join(", ")
    );
}
