mod common;

use chatcompare::{ChatClient, ClientError, GenerationParams, OpenAiChatClient, Role};
use common::MockProvider;

fn client_for(provider: &MockProvider) -> OpenAiChatClient {
    OpenAiChatClient::new("sk-test", provider.base_url()).expect("client")
}

#[tokio::test]
async fn success_returns_first_choice_content() {
    let provider = MockProvider::replying("X").await;

    let reply = client_for(&provider)
        .send("hello", "deepseek-chat", None)
        .await
        .expect("reply");

    assert_eq!(reply, "X");
}

#[tokio::test]
async fn request_carries_bearer_key_and_json_content_type() {
    let provider = MockProvider::replying("ok").await;
    client_for(&provider)
        .send("hello", "deepseek-chat", None)
        .await
        .expect("reply");

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer sk-test"));
    assert!(requests[0]
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("application/json")));
    assert_eq!(requests[0].body["model"], "deepseek-chat");
}

#[tokio::test]
async fn absent_params_send_no_optional_keys() {
    let provider = MockProvider::replying("ok").await;
    let client = client_for(&provider);

    client.send("hello", "deepseek-chat", None).await.unwrap();
    client
        .send("hello", "deepseek-chat", Some(&GenerationParams::new()))
        .await
        .unwrap();

    for request in provider.requests() {
        let body = request.body.as_object().expect("json object");
        for key in [
            "max_tokens",
            "stop",
            "temperature",
            "top_p",
            "top_k",
            "frequency_penalty",
            "presence_penalty",
            "seed",
        ] {
            assert!(!body.contains_key(key), "{key} should be omitted");
        }
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], Role::User.as_str());
        assert_eq!(body["messages"][0]["content"], "hello");
    }
}

#[tokio::test]
async fn format_instruction_is_sent_as_system_message_first() {
    let provider = MockProvider::replying("ok").await;
    let params = GenerationParams::new()
        .with_format_instruction("Reply in JSON.")
        .with_max_tokens(50)
        .with_stop(vec!["[END]".to_string()])
        .with_temperature(0.0);

    client_for(&provider)
        .send("list primes", "deepseek-chat", Some(&params))
        .await
        .unwrap();

    let body = &provider.requests()[0].body;
    let messages = body["messages"].as_array().unwrap();
    let roles: Vec<&str> = messages.iter().map(|m| m["role"].as_str().unwrap()).collect();
    assert_eq!(roles, vec!["system", "user"]);
    assert_eq!(messages[0]["content"], "Reply in JSON.");
    assert_eq!(body["max_tokens"], 50);
    assert_eq!(body["stop"], serde_json::json!(["[END]"]));
    assert_eq!(body["temperature"], 0.0);
}

#[tokio::test]
async fn empty_choices_is_empty_reply() {
    let provider = MockProvider::start(200, r#"{"choices": []}"#).await;

    let err = client_for(&provider)
        .send("hello", "deepseek-chat", None)
        .await
        .unwrap_err();

    assert!(err.is_empty_reply(), "got {err:?}");
}

#[tokio::test]
async fn null_content_is_empty_reply() {
    let provider =
        MockProvider::start(200, r#"{"choices": [{"message": {"content": null}}]}"#).await;

    let err = client_for(&provider)
        .send("hello", "deepseek-chat", None)
        .await
        .unwrap_err();

    assert!(err.is_empty_reply(), "got {err:?}");
}

#[tokio::test]
async fn empty_string_content_is_returned_as_is() {
    let provider = MockProvider::replying("").await;

    let reply = client_for(&provider)
        .send("hi", "deepseek-chat", None)
        .await
        .expect("empty content is still a reply");

    assert_eq!(reply, "");
}

#[tokio::test]
async fn unauthorized_is_http_error_with_body() {
    let provider = MockProvider::start(401, "unauthorized").await;

    let err = client_for(&provider)
        .send("hello", "deepseek-chat", None)
        .await
        .unwrap_err();

    match err {
        ClientError::HttpError { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "unauthorized");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
    assert_eq!(provider.requests().len(), 1, "no retries");
}

#[tokio::test]
async fn malformed_json_is_transport_fault() {
    let provider = MockProvider::start(200, "<html>gateway</html>").await;

    let err = client_for(&provider)
        .send("hello", "deepseek-chat", None)
        .await
        .unwrap_err();

    assert!(err.is_transport_fault(), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_fault() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenAiChatClient::new("sk-test", &format!("http://{addr}/v1")).unwrap();
    let err = client.send("hello", "deepseek-chat", None).await.unwrap_err();

    assert!(err.is_transport_fault(), "got {err:?}");
}

#[tokio::test]
async fn blank_prompt_is_forwarded_by_the_client() {
    let provider = MockProvider::replying("ok").await;

    client_for(&provider)
        .send("", "deepseek-chat", None)
        .await
        .unwrap();

    assert_eq!(provider.requests()[0].body["messages"][0]["content"], "");
}

#[tokio::test]
async fn concurrent_sends_do_not_interfere() {
    let restricted_provider = MockProvider::replying("short answer").await;
    let unrestricted_provider = MockProvider::replying("a much longer answer").await;
    let restricted_client = client_for(&restricted_provider);
    let unrestricted_client = client_for(&unrestricted_provider);

    let restricted_params = GenerationParams::new()
        .with_max_tokens(50)
        .with_stop(vec!["[END]".to_string()]);

    let (restricted, unrestricted) = tokio::join!(
        restricted_client.send("same prompt", "deepseek-chat", Some(&restricted_params)),
        unrestricted_client.send("same prompt", "deepseek-chat", None),
    );

    assert_eq!(restricted.unwrap(), "short answer");
    assert_eq!(unrestricted.unwrap(), "a much longer answer");

    let restricted_body = &restricted_provider.requests()[0].body;
    let unrestricted_body = &unrestricted_provider.requests()[0].body;
    assert_eq!(restricted_body["max_tokens"], 50);
    assert_eq!(restricted_body["stop"], serde_json::json!(["[END]"]));
    assert!(unrestricted_body.get("max_tokens").is_none());
    assert!(unrestricted_body.get("stop").is_none());
}
