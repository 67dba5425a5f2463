// Each test gets its own server so room pairing starts from an empty broker.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    // The server task lives as long as the test runtime.
    tokio::spawn(async move {
        api_server::run(listener).await.expect("server failed");
    });

    format!("http://{addr}")
}
