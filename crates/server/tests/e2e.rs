use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{build_app, serve};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = serve(listener, build_app()).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_customer_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/customers", app.base_url);

    let res = c.post(&url)
        .json(&json!({"name": "A", "email": "a@x.com", "balance": 10, "account_type": "checking"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["id"], 1);

    let res = c.post(&url)
        .json(&json!({"name": "C", "email": "a@x.com", "balance": 0, "account_type": "checking"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c.put(format!("{}/1", url))
        .json(&json!({"name": "A", "email": "a@x.com", "balance": 42.5, "account_type": "savings"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["balance"], 42.5);

    let res = c.delete(format!("{}/1", url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Customer deleted successfully");

    let res = c.get(&url).send().await?;
    assert_eq!(res.json::<Value>().await?, json!([]));

    let res = c.get(format!("{}/1", url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
