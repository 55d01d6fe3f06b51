//! Lookups against a canned local HTTP server.

use std::collections::HashMap;
use std::time::Duration;

use dofus_linker_core::{ContentCategory, Linker, PageKind, Resolution};
use dofus_linker_lookup::{DofusDbClient, LookupError, fetch_all_content, resolve_french_name, resolve_urls};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve `routes` (category path → (status, body)) until the test ends.
/// Unknown paths answer with an empty result set.
async fn serve(routes: HashMap<&'static str, (u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&buf);
                let target = request.split_whitespace().nth(1).unwrap_or("/");
                let path = target.split('?').next().unwrap_or("").trim_start_matches('/');
                let (status, body) = routes
                    .get(path)
                    .copied()
                    .unwrap_or((200, r#"{"total":0,"data":[]}"#));
                let response = format!(
                    "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}

fn client(base: &str) -> DofusDbClient {
    DofusDbClient::new(base, Duration::from_secs(5))
        .unwrap()
        .with_min_interval(Duration::ZERO)
}

const ZOBAL_QUEST: &str = r#"{"total":1,"data":[{"id":1,"name":{"en":"The Zobal Trial","fr":"Épreuve du Zobal"}}]}"#;
const ZOBAL_ITEM: &str = r#"{"total":1,"data":[{"id":2,"name":{"en":"The Zobal Trial","fr":"Trophée du Zobal"}}]}"#;

#[tokio::test]
async fn search_single_category() {
    let base = serve(HashMap::from([("quests", (200, ZOBAL_QUEST))])).await;
    let records = client(&base)
        .search(ContentCategory::Quests, "The Zobal Trial")
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name_fr.as_deref(), Some("Épreuve du Zobal"));
}

#[tokio::test]
async fn search_reports_http_status() {
    let base = serve(HashMap::from([("spells", (500, "oops"))])).await;
    let err = client(&base)
        .search(ContentCategory::Spells, "Anything")
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn search_reports_bad_json() {
    let base = serve(HashMap::from([("items", (200, "not json"))])).await;
    let err = client(&base)
        .search(ContentCategory::Items, "Anything")
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Json(_)));
}

#[tokio::test]
async fn failing_categories_are_skipped() {
    let base = serve(HashMap::from([
        ("quests", (503, "")),
        ("items", (200, ZOBAL_ITEM)),
        ("monsters", (200, "{broken")),
    ]))
    .await;
    let results = fetch_all_content(&client(&base), "The Zobal Trial").await;
    assert!(results.get(ContentCategory::Quests).is_empty());
    assert_eq!(results.get(ContentCategory::Items).len(), 1);
    assert!(!results.is_empty());
}

#[tokio::test]
async fn page_kind_decides_between_categories() {
    let base = serve(HashMap::from([
        ("quests", (200, ZOBAL_QUEST)),
        ("items", (200, ZOBAL_ITEM)),
    ]))
    .await;
    let client = client(&base);

    let name = resolve_french_name(&client, "The Zobal Trial", PageKind::Unknown).await;
    assert_eq!(name.as_deref(), Some("Épreuve du Zobal"));

    let name = resolve_french_name(&client, "The Zobal Trial", PageKind::Item).await;
    assert_eq!(name.as_deref(), Some("Trophée du Zobal"));
}

#[tokio::test]
async fn resolve_urls_from_french_name() {
    let base = serve(HashMap::from([("quests", (200, ZOBAL_QUEST))])).await;
    let resolved = resolve_urls(
        &client(&base),
        &Linker::default(),
        "The Zobal Trial",
        PageKind::Quest,
    )
    .await;
    assert_eq!(resolved.french.as_deref(), Some("Épreuve du Zobal"));
    assert_eq!(resolved.slug_input(), "Épreuve du Zobal");
    assert_eq!(
        resolved.urls.primary,
        "https://www.dofuspourlesnoobs.com/eacutepreuve-du-zobal.html"
    );
}

#[tokio::test]
async fn resolve_urls_falls_back_to_english() {
    let base = serve(HashMap::new()).await;
    let resolved = resolve_urls(
        &client(&base),
        &Linker::default(),
        "Unknown Thing",
        PageKind::Unknown,
    )
    .await;
    assert_eq!(resolved.french, None);
    assert_eq!(resolved.slug_input(), "Unknown Thing");
    assert_eq!(
        resolved.urls.primary,
        "https://www.dofuspourlesnoobs.com/unknown-thing.html"
    );
    assert!(matches!(resolved.urls.resolution, Resolution::Heuristic { .. }));
}

#[tokio::test]
async fn unreachable_server_yields_no_name() {
    // port 9 (discard) is not listening on loopback
    let client = DofusDbClient::new("http://127.0.0.1:9", Duration::from_secs(2))
        .unwrap()
        .with_min_interval(Duration::ZERO);
    let results = fetch_all_content(&client, "Anything").await;
    assert!(results.is_empty());
}
