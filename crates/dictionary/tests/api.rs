use dictionary::{Dictionary, DictionaryError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const HELLO: &str = r#"[
    {
        "word": "hello",
        "phonetic": "/həˈloʊ/",
        "phonetics": [{"text": "/həˈloʊ/", "audio": "https://audio/hello-us.mp3"}],
        "meanings": [{
            "partOfSpeech": "exclamation",
            "definitions": [
                {"definition": "Used as a greeting.", "example": "Hello, everyone."},
                {"definition": "Used to attract attention."}
            ],
            "synonyms": [],
            "antonyms": []
        }]
    },
    {
        "word": "hello",
        "phonetics": [],
        "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": "A greeting."}]}]
    }
]"#;

/// Serves a single canned response and hands back the request line it saw.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    serve_with_length(status, body, body.len()).await
}

/// Like `serve_once`, but announces `content_length` bytes whatever the body
/// holds, then closes the connection.
async fn serve_with_length(
    status: &'static str,
    body: &'static str,
    content_length: usize,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v2/entries/en", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..read]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {content_length}\r\nConnection: close\r\n\r\n{body}"
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        let request = String::from_utf8_lossy(&request).into_owned();
        request.lines().next().unwrap_or_default().to_owned()
    });
    (base_url, handle)
}

#[tokio::test]
async fn returns_all_entries_in_order() {
    let (base_url, server) = serve_once("200 OK", HELLO).await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    let entries = dict.get_entries("hello").await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].meanings[0].part_of_speech, "exclamation");
    assert_eq!(entries[1].meanings[0].part_of_speech, "noun");
    assert_eq!(
        server.await.unwrap(),
        "GET /api/v2/entries/en/hello HTTP/1.1"
    );
}

#[tokio::test]
async fn definition_is_the_first_entry() {
    let (base_url, _server) = serve_once("200 OK", HELLO).await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    let word = dict.get_definition("hello").await.unwrap();

    assert_eq!(word.display_phonetic(), Some("/həˈloʊ/"));
    assert_eq!(word.audio_url(), Some("https://audio/hello-us.mp3"));
    assert_eq!(word.meanings[0].definitions.len(), 2);
}

#[tokio::test]
async fn word_keeps_its_case_and_is_encoded() {
    let (base_url, server) = serve_once("200 OK", "[]").await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    dict.get_entries("Ice Cream").await.unwrap();

    assert_eq!(
        server.await.unwrap(),
        "GET /api/v2/entries/en/Ice%20Cream HTTP/1.1"
    );
}

#[tokio::test]
async fn not_found_carries_the_api_message() {
    let (base_url, _server) = serve_once(
        "404 Not Found",
        r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for.","resolution":"You can try the search again at later time or head to the web instead."}"#,
    )
    .await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    match dict.get_entries("zzzxq").await {
        Err(DictionaryError::NotFound(error)) => {
            assert_eq!(error.title, "No Definitions Found");
            assert!(error.message.starts_with("Sorry pal"));
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_does_not_depend_on_the_body_arriving() {
    let (base_url, _server) = serve_with_length("404 Not Found", r#"{"title":"#, 500).await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    match dict.get_entries("zzzxq").await {
        Err(DictionaryError::NotFound(error)) => {
            assert_eq!(error, dictionary::NotFoundError::for_word("zzzxq"));
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn truncated_success_body_is_a_fetch_error() {
    let (base_url, _server) = serve_with_length("200 OK", "[", 500).await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    let error = dict.get_entries("hello").await.unwrap_err();

    assert!(matches!(error, DictionaryError::Fetch(_)));
}

#[tokio::test]
async fn other_statuses_are_reported_as_is() {
    let (base_url, _server) = serve_once("503 Service Unavailable", "").await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    match dict.get_entries("hello").await {
        Err(DictionaryError::Status(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let (base_url, _server) = serve_once("200 OK", r#"{"word": "hello"}"#).await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    let error = dict.get_entries("hello").await.unwrap_err();

    assert!(matches!(error, DictionaryError::Deserialize(_)));
}

#[tokio::test]
async fn empty_list_has_no_definition() {
    let (base_url, _server) = serve_once("200 OK", "[]").await;
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    let error = dict.get_definition("hello").await.unwrap_err();

    assert!(matches!(error, DictionaryError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_server_is_a_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/entries/en", listener.local_addr().unwrap());
    drop(listener);
    let dict = Dictionary::with_base_url(&base_url).unwrap();

    let error = dict.get_entries("hello").await.unwrap_err();

    assert!(matches!(error, DictionaryError::Fetch(_)));
}
