use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize, PartialEq)]
struct StatsResponse {
    count: i64,
    total_clicks: u64,
    max_value: i64,
    min_value: i64,
    tone: String,
}

#[derive(Debug, Deserialize)]
struct ClickResponse {
    action: String,
    feedback: String,
    count: i64,
    total_clicks: u64,
    max_value: i64,
    min_value: i64,
    tone: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/stats")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_counter_widget"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_stats(client: &Client, base_url: &str) -> StatsResponse {
    client
        .get(format!("{base_url}/api/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post_click(client: &Client, base_url: &str, action: &str) -> ClickResponse {
    let response = client
        .post(format!("{base_url}/api/click"))
        .json(&serde_json::json!({ "action": action }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_scenario_sequence_tracks_stats() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_click(&client, &server.base_url, "reset").await;

    for _ in 0..3 {
        post_click(&client, &server.base_url, "increment").await;
    }
    let stats = get_stats(&client, &server.base_url).await;
    assert_eq!(
        (stats.count, stats.total_clicks, stats.max_value, stats.min_value),
        (3, 3, 3, 0)
    );

    for _ in 0..5 {
        post_click(&client, &server.base_url, "decrement").await;
    }
    let stats = get_stats(&client, &server.base_url).await;
    assert_eq!(
        (stats.count, stats.total_clicks, stats.max_value, stats.min_value),
        (-2, 8, 3, -2)
    );

    let reset = post_click(&client, &server.base_url, "reset").await;
    assert_eq!(reset.action, "reset");
    assert_eq!(reset.feedback, "Reset!");
    let stats = get_stats(&client, &server.base_url).await;
    assert_eq!(
        (stats.count, stats.total_clicks, stats.max_value, stats.min_value),
        (0, 0, 0, 0)
    );
}

#[tokio::test]
async fn http_key_press_matches_click() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_click(&client, &server.base_url, "reset").await;
    post_click(&client, &server.base_url, "increment").await;
    let after_click = get_stats(&client, &server.base_url).await;
    post_click(&client, &server.base_url, "reset").await;

    let response = client
        .post(format!("{}/api/key", server.base_url))
        .json(&serde_json::json!({ "key": "+" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let applied: ClickResponse = response.json().await.unwrap();
    assert_eq!(applied.action, "increment");
    assert_eq!(applied.feedback, "+1");

    let after_key = get_stats(&client, &server.base_url).await;
    assert_eq!(after_key.count, 1);
    assert_eq!(after_key.total_clicks, 1);
    assert_eq!(after_key.max_value, 1);
    assert_eq!(after_key.min_value, 0);
    assert_eq!(after_key, after_click);
}

#[tokio::test]
async fn http_unmodified_r_key_is_ignored() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_click(&client, &server.base_url, "reset").await;
    post_click(&client, &server.base_url, "increment").await;
    let before = get_stats(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/key", server.base_url))
        .json(&serde_json::json!({ "key": "r" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let after = get_stats(&client, &server.base_url).await;
    assert_eq!(after, before);

    let response = client
        .post(format!("{}/api/key", server.base_url))
        .json(&serde_json::json!({ "key": "R", "meta_key": true }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let applied: ClickResponse = response.json().await.unwrap();
    assert_eq!(applied.action, "reset");
    assert_eq!(applied.count, 0);
    assert_eq!(applied.total_clicks, 0);
}

#[tokio::test]
async fn http_unknown_action_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/click", server.base_url))
        .json(&serde_json::json!({ "action": "bogus" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_tone_follows_count_sign() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_click(&client, &server.base_url, "reset").await;
    assert_eq!(get_stats(&client, &server.base_url).await.tone, "neutral");

    let up = post_click(&client, &server.base_url, "increment").await;
    assert_eq!(up.tone, "positive");

    post_click(&client, &server.base_url, "decrement").await;
    let down = post_click(&client, &server.base_url, "decrement").await;
    assert_eq!(down.count, -1);
    assert_eq!(down.tone, "negative");
}

#[tokio::test]
async fn http_index_serves_widget_regions() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_click(&client, &server.base_url, "reset").await;
    post_click(&client, &server.base_url, "increment").await;

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    for id in [
        "id=\"counter\"",
        "id=\"total-clicks\"",
        "id=\"max-value\"",
        "id=\"min-value\"",
        "id=\"increment-btn\"",
        "id=\"decrement-btn\"",
        "id=\"reset-btn\"",
    ] {
        assert!(body.contains(id), "missing region: {id}");
    }
    assert!(body.contains("class=\"positive\">1</span>"));
}
