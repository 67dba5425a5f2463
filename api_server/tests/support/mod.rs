// Per-test server bootstrap on an ephemeral port.

// Start a fresh server with its own broker and return its base URL.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        api_server::run(listener).await.expect("server failed");
    });
    format!("http://{addr}")
}
