//! Scenario test against the server on a real socket.
//!
//! Starts the server on a random port, then walks the sample-data scenario
//! over real HTTP using ureq.

use serde_json::Value;
use todo_core::Store;

struct Response {
    status: u16,
    body: Value,
}

/// Disables ureq's status-code-as-error behavior so 4xx responses come back
/// as data.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn read(mut response: ureq::http::Response<ureq::Body>) -> Response {
    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string().unwrap_or_default();
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);
    Response { status, body }
}

fn get(base: &str, path: &str) -> Response {
    read(agent().get(&format!("{base}{path}")).call().expect("HTTP transport error"))
}

fn send(base: &str, method: &str, path: &str, body: &str) -> Response {
    let url = format!("{base}{path}");
    let agent = agent();
    let response = match method {
        "POST" => agent
            .post(&url)
            .content_type("application/json")
            .send(body.as_bytes()),
        "PUT" => agent
            .put(&url)
            .content_type("application/json")
            .send(body.as_bytes()),
        other => panic!("unsupported method: {other}"),
    };
    read(response.expect("HTTP transport error"))
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, Store::seeded()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn sample_data_scenario() {
    let base = start_server();

    // Pending filter returns both seeded todos with their owners.
    let resp = get(&base, "/todos?status=pending");
    assert_eq!(resp.status, 200);
    let todos = resp.body.as_array().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["user"]["last_name"], "Doe");
    assert_eq!(todos[1]["user"]["id"], 1);

    // Search narrows to the laundry item.
    let resp = get(&base, "/todos?q=laundry");
    let todos = resp.body.as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], 2);

    // Existing id conflicts.
    let resp = send(
        &base,
        "POST",
        "/todos",
        r#"{"id":1,"user_id":1,"title":"Something else","description":"x"}"#,
    );
    assert_eq!(resp.status, 409);

    // Unknown owner is not found.
    let resp = send(
        &base,
        "POST",
        "/todos",
        r#"{"id":5,"user_id":99,"title":"Orphan","description":"x"}"#,
    );
    assert_eq!(resp.status, 404);

    // Partial update keeps the title.
    let resp = send(&base, "PUT", "/todos/2", r#"{"status":"completed"}"#);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["data"]["status"], "completed");

    let resp = get(&base, "/todos/2");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["status"], "completed");
    assert_eq!(resp.body["title"], "Do laundry");

    // Status filter now splits the two items.
    let resp = get(&base, "/todos?status=completed");
    assert_eq!(resp.body.as_array().unwrap().len(), 1);

    // Delete, then the item is gone.
    let resp = read(
        agent()
            .delete(&format!("{base}/todos/2"))
            .call()
            .expect("HTTP transport error"),
    );
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["data"]["delete"], true);
    assert_eq!(get(&base, "/todos/2").status, 404);
}
