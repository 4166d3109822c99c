use folio_core::Error;
use folio_core::feed::{FeedClient, FeedView, NO_POSTS_MESSAGE};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn item(title: &str, content: &str, categories: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "link": format!("https://medium.com/@jane/{}", title),
        "pubDate": "2024-01-05T00:00:00Z",
        "content": content,
        "categories": categories,
    })
}

async fn serve(body: serde_json::Value, status: u16) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/api.json"))
        .and(query_param("rss_url", "https://medium.com/feed/@jane"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

fn client_for(server: &MockServer) -> FeedClient {
    FeedClient::new(format!("{}/v1/api.json", server.uri()), "jane")
}

#[tokio::test]
async fn test_renders_three_cards_from_eight_items() {
    let mut items = vec![item("A", "<img src='x.jpg'>body text...", &["tech"])];
    for title in ["B", "C", "D", "E", "F", "G", "H"] {
        items.push(item(title, "<p>more</p>", &["tech"]));
    }
    let server = serve(serde_json::json!({"status": "ok", "items": items}), 200).await;

    let view = FeedView::from_result(client_for(&server).fetch().await, 3);

    let FeedView::Cards(cards) = view else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 3);
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
    assert_eq!(cards[0].image.as_deref(), Some("x.jpg"));
    assert_eq!(cards[0].date, "January 5, 2024");
    assert_eq!(cards[0].link, "https://medium.com/@jane/A");
}

#[tokio::test]
async fn test_error_status_in_payload_falls_back() {
    let server = serve(
        serde_json::json!({"status": "error", "message": "rate limited", "items": []}),
        200,
    )
    .await;

    let result = client_for(&server).fetch().await;
    assert!(matches!(&result, Err(Error::FeedStatus(status)) if status == "error"));
    assert_eq!(
        FeedView::from_result(result, 3),
        FeedView::Fallback {
            message: "Failed to get RSS feed".to_string()
        }
    );
}

#[tokio::test]
async fn test_no_categorized_items_falls_back() {
    let items = vec![item("comment", "<p>reply</p>", &[]), item("other", "", &[])];
    let server = serve(serde_json::json!({"status": "ok", "items": items}), 200).await;

    let view = FeedView::from_result(client_for(&server).fetch().await, 3);
    assert_eq!(
        view,
        FeedView::Fallback {
            message: NO_POSTS_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn test_http_error_falls_back() {
    let server = serve(serde_json::json!({}), 500).await;

    let result = client_for(&server).fetch().await;
    assert!(matches!(result, Err(Error::Status(500))));
    assert_eq!(
        FeedView::from_result(result, 3),
        FeedView::Fallback {
            message: "Network response was not ok".to_string()
        }
    );
}
