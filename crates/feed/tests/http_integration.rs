use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use kboard_core::market::entity::QuoteReply;
use kboard_core::market::error::FeedError;
use kboard_core::market::port::MarketBackend;
use kboard_feed::http::HttpBackend;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Hits = Arc<Mutex<Vec<String>>>;

async fn realtime(Path(code): Path<String>) -> (StatusCode, String) {
    match code.as_str() {
        "sh600519" => (
            StatusCode::OK,
            json!({
                "time": "2024-05-06 15:00:00",
                "open": 1700.0,
                "high": 1720.5,
                "low": 1690.0,
                "close": 1712.3,
                "volume": 1234567
            })
            .to_string(),
        ),
        "broken" => (StatusCode::OK, "<html>not json</html>".to_string()),
        "crash" => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
        _ => (
            StatusCode::OK,
            json!({ "error": format!("未找到股票 {}", code) }).to_string(),
        ),
    }
}

async fn update(State(hits): State<Hits>, Path(code): Path<String>) -> axum::Json<Value> {
    hits.lock().unwrap().push(code.clone());
    axum::Json(json!({ "status": "success", "message": format!("{} 数据更新完成", code) }))
}

// 帮助函数：在随机端口启动模拟后端
async fn spawn_stub_backend() -> (String, Hits) {
    let hits: Hits = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/realtime/{code}", get(realtime))
        .route("/update/{code}", get(update))
        .with_state(hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://127.0.0.1:{}", port), hits)
}

#[tokio::test]
async fn test_fetch_realtime_quote() -> anyhow::Result<()> {
    let (addr, _) = spawn_stub_backend().await;
    let backend = HttpBackend::new(&addr, Duration::from_secs(5))?;

    let reply = backend.fetch_realtime("sh600519").await?;
    match reply {
        QuoteReply::Quote(q) => {
            assert_eq!(q.time, "2024-05-06 15:00:00");
            assert_eq!(q.close, 1712.3);
            assert_eq!(q.volume, 1_234_567.0);
        }
        QuoteReply::DomainError { error } => anyhow::bail!("unexpected domain error: {}", error),
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_realtime_domain_error() -> anyhow::Result<()> {
    let (addr, _) = spawn_stub_backend().await;
    let backend = HttpBackend::new(&addr, Duration::from_secs(5))?;

    let reply = backend.fetch_realtime("xx000000").await?;
    assert_eq!(
        reply,
        QuoteReply::DomainError {
            error: "未找到股票 xx000000".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_transport_failures_are_classified() -> anyhow::Result<()> {
    let (addr, _) = spawn_stub_backend().await;
    let backend = HttpBackend::new(&addr, Duration::from_secs(5))?;

    let status = backend.fetch_realtime("crash").await;
    assert_eq!(status, Err(FeedError::Status(500)));

    let parse = backend.fetch_realtime("broken").await;
    assert!(matches!(parse, Err(FeedError::Parse(_))), "got {:?}", parse);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() -> anyhow::Result<()> {
    // 绑定后立即释放端口，保证没有服务监听
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);

    let backend = HttpBackend::new(&format!("http://127.0.0.1:{}", port), Duration::from_secs(2))?;
    let result = backend.fetch_realtime("sh000001").await;
    assert!(matches!(result, Err(FeedError::Network(_))), "got {:?}", result);
    Ok(())
}

#[tokio::test]
async fn test_request_update_hits_code_endpoint() -> anyhow::Result<()> {
    let (addr, hits) = spawn_stub_backend().await;
    let backend = HttpBackend::new(&addr, Duration::from_secs(5))?;

    let reply = backend.request_update("sz000858").await?;
    assert_eq!(reply.message, "sz000858 数据更新完成");
    assert_eq!(reply.status.as_deref(), Some("success"));
    assert_eq!(hits.lock().unwrap().clone(), vec!["sz000858".to_string()]);
    Ok(())
}
