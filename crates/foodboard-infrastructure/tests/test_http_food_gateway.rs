use foodboard_core::config::ApiConfig;
use foodboard_core::food::{Food, FoodDraft, FoodGateway};
use foodboard_infrastructure::HttpFoodGateway;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accepts one connection, answers with `status` and `body`, and returns the
/// raw request it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8(raw).unwrap()
    });

    (base_url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn request_body(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

fn gateway(base_url: &str) -> HttpFoodGateway {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpFoodGateway::with_client(client, &ApiConfig::default().with_base_url(base_url))
}

#[tokio::test]
async fn test_list_gets_collection() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"id":1,"name":"Ao molho","description":"d","price":19.9,"available":true,"image":"i"}]"#,
    )
    .await;

    let foods = gateway(&base_url).list().await.unwrap();
    let raw = server.await.unwrap();

    assert!(raw.starts_with("GET /foods HTTP/1.1"));
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].name, "Ao molho");
}

#[tokio::test]
async fn test_create_posts_available_draft() {
    let (base_url, server) = serve_once(
        "201 Created",
        r#"{"id":12,"name":"Veggie","description":"d","price":21.0,"available":true,"image":"i"}"#,
    )
    .await;

    let new_food = FoodDraft::new("Veggie", "d", 21.0, "i").into_new_food();
    let created = gateway(&base_url).create(&new_food).await.unwrap();
    let raw = server.await.unwrap();

    assert!(raw.starts_with("POST /foods HTTP/1.1"));
    assert_eq!(
        request_body(&raw),
        serde_json::json!({
            "name": "Veggie",
            "description": "d",
            "price": 21.0,
            "image": "i",
            "available": true,
        })
    );
    assert_eq!(created.id, 12);
}

#[tokio::test]
async fn test_update_puts_full_record() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"id":4,"name":"B","description":"d","price":12.0,"available":true,"image":"i"}"#,
    )
    .await;

    let food = Food {
        id: 4,
        name: "B".to_string(),
        description: "d".to_string(),
        price: 12.0,
        available: true,
        image: "i".to_string(),
    };
    let updated = gateway(&base_url).update(4, &food).await.unwrap();
    let raw = server.await.unwrap();

    assert!(raw.starts_with("PUT /foods/4 HTTP/1.1"));
    assert_eq!(request_body(&raw), serde_json::to_value(&food).unwrap());
    assert_eq!(updated, food);
}

#[tokio::test]
async fn test_delete_ignores_body() {
    let (base_url, server) = serve_once("200 OK", "").await;

    gateway(&base_url).delete(9).await.unwrap();
    let raw = server.await.unwrap();

    assert!(raw.starts_with("DELETE /foods/9 HTTP/1.1"));
}

#[tokio::test]
async fn test_non_success_status_is_request_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let err = gateway(&base_url).list().await.unwrap_err();
    server.await.unwrap();

    assert!(err.is_request());
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_unparseable_body_is_request_error() {
    let (base_url, server) = serve_once("200 OK", "not json").await;

    let err = gateway(&base_url).list().await.unwrap_err();
    server.await.unwrap();

    assert!(err.is_request());
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = gateway(&format!("http://{addr}"))
        .delete(1)
        .await
        .unwrap_err();

    assert!(err.is_request());
}
