use lib::board::activity_api::{ActivityApi, HttpApi};
use lib::board::error::BoardError;
use lib::board::models::ApiReply;
use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// Serves exactly one canned response on a fresh local port. The handle
/// yields the request line the client sent.
async fn serve_once(status: &'static str, body: &'static str) -> (HttpApi, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_owned()
    });
    (HttpApi::with_client(Client::new(), base_url), server)
}

#[tokio::test]
async fn list_with_error_status_is_a_failure() {
    let (api, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
    let result = api.list_activities().await;

    assert!(matches!(result, Err(BoardError::Status(500))));
    assert_eq!(server.await.unwrap(), "GET /activities HTTP/1.1");
}

#[tokio::test]
async fn list_keeps_server_key_order() {
    let (api, server) = serve_once(
        "200 OK",
        r#"{"B":{"description":"b","schedule":"Mon","max_participants":1,"participants":[]},"A":{"description":"a","schedule":"Tue","max_participants":2,"participants":["a@x.com"]}}"#,
    )
    .await;
    let activities = api.list_activities().await.unwrap();
    server.await.unwrap();

    let names = activities.iter().map(|(name, _)| name).collect::<Vec<_>>();
    assert_eq!(names, vec!["B", "A"]);
    assert_eq!(activities.get("A").unwrap().spots_left(), 1);
}

#[tokio::test]
async fn list_with_malformed_activity_is_a_decode_failure() {
    let (api, server) = serve_once(
        "200 OK",
        r#"{"A":{"description":"a","schedule":"Tue","max_participants":2}}"#,
    )
    .await;
    let result = api.list_activities().await;
    server.await.unwrap();

    assert!(matches!(result, Err(BoardError::Decode(_))));
}

#[tokio::test]
async fn signup_escapes_name_and_email() {
    let (api, server) = serve_once(
        "200 OK",
        r#"{"message":"Signed up a+b c@x.com for Chess Club"}"#,
    )
    .await;
    let reply = api.signup("Chess Club", "a+b c@x.com").await.unwrap();

    assert_eq!(
        reply,
        ApiReply::Accepted {
            message: Some("Signed up a+b c@x.com for Chess Club".to_owned())
        }
    );
    assert_eq!(
        server.await.unwrap(),
        "POST /activities/Chess%20Club/signup?email=a%2Bb+c%40x.com HTTP/1.1"
    );
}

#[tokio::test]
async fn signup_rejection_carries_detail() {
    let (api, server) = serve_once("400 Bad Request", r#"{"detail":"Already signed up"}"#).await;
    let reply = api.signup("Chess Club", "a@x.com").await.unwrap();
    server.await.unwrap();

    assert_eq!(
        reply,
        ApiReply::Rejected {
            status: 400,
            detail: Some("Already signed up".to_owned())
        }
    );
}

#[tokio::test]
async fn signup_success_body_is_decoded_too() {
    let (api, server) = serve_once("200 OK", "<html>ok</html>").await;
    let result = api.signup("Chess Club", "a@x.com").await;
    server.await.unwrap();

    assert!(matches!(result, Err(BoardError::Decode(_))));
}

#[tokio::test]
async fn unregister_success_ignores_body() {
    let (api, server) = serve_once("200 OK", "").await;
    let reply = api.unregister("Chess Club", "a@x.com").await.unwrap();

    assert_eq!(reply, ApiReply::Accepted { message: None });
    assert_eq!(
        server.await.unwrap(),
        "DELETE /activities/Chess%20Club/participants/a@x.com HTTP/1.1"
    );
}

#[tokio::test]
async fn unregister_rejection_carries_detail() {
    let (api, server) = serve_once(
        "400 Bad Request",
        r#"{"detail":"Student is not registered for this activity"}"#,
    )
    .await;
    let reply = api.unregister("Chess Club", "a@x.com").await.unwrap();
    server.await.unwrap();

    assert_eq!(
        reply,
        ApiReply::Rejected {
            status: 400,
            detail: Some("Student is not registered for this activity".to_owned())
        }
    );
}

#[tokio::test]
async fn unregister_with_undecodable_failure_body_is_a_decode_failure() {
    let (api, server) = serve_once("404 Not Found", "<html>not found</html>").await;
    let result = api.unregister("Chess Club", "a@x.com").await;
    server.await.unwrap();

    assert!(matches!(result, Err(BoardError::Decode(_))));
}
