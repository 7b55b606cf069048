use crate::mock::MockHttpSend;
use ess_sdk::{ErrorKind, KeywordSignInfo, PositionSignInfo};
use pretty_assertions::assert_eq;
use serde_json::json;

fn keyword_info() -> KeywordSignInfo {
    KeywordSignInfo {
        doc_id: "abc".to_string(),
        seal_id: "4028e5e5765f43630176656067f1003d".to_string(),
        keyword: "本人声明".to_string(),
        scope: 0,
        start: 0,
        end: 0,
        zoom: 100,
    }
}

fn position_info() -> PositionSignInfo {
    PositionSignInfo {
        doc_id: "abc".to_string(),
        seal_id: "4028e5e5765f4363017665b5407d0040".to_string(),
        page_number: "1".to_string(),
        x: 50,
        y: 50,
        zoom: 100,
        reason: "同意".to_string(),
        remark: "李四的存证证书盖章".to_string(),
    }
}

#[tokio::test]
async fn test_sign_document_for_keyword() -> anyhow::Result<()> {
    let http = MockHttpSend::json(json!({"code": 0, "data": {"id": "abc", "url": "http://signed"}}));

    let url = http.client().sign_document_for_keyword(&keyword_info()).await?;
    assert_eq!(url, "http://signed");

    let reqs = http.requests();
    assert_eq!(reqs.len(), 1);
    assert_eq!(
        reqs[0].uri,
        "http://211.88.18.140:30080/ess/api/user/doc/sign/keyword"
    );
    assert_eq!(
        reqs[0].header("content-type"),
        "application/x-www-form-urlencoded"
    );

    let fields = reqs[0].form_fields();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields["docId"], "abc");
    assert_eq!(fields["sealId"], "4028e5e5765f43630176656067f1003d");
    assert_eq!(fields["keyword"], "本人声明");
    assert_eq!(fields["scope"], "0");
    assert_eq!(fields["start"], "0");
    assert_eq!(fields["end"], "0");
    assert_eq!(fields["zoom"], "100");

    Ok(())
}

#[tokio::test]
async fn test_sign_document_for_position() -> anyhow::Result<()> {
    let http = MockHttpSend::json(json!({"code": 0, "data": {"id": "abc", "url": "http://signed"}}));

    let url = http
        .client()
        .sign_document_for_position(&position_info())
        .await?;
    assert_eq!(url, "http://signed");

    let reqs = http.requests();
    assert_eq!(
        reqs[0].uri,
        "http://211.88.18.140:30080/ess/api/user/doc/sign/position"
    );

    let fields = reqs[0].form_fields();
    assert_eq!(fields.len(), 8);
    assert_eq!(fields["docId"], "abc");
    assert_eq!(fields["remark"], "李四的存证证书盖章");
    assert_eq!(fields["signs[0].pageNumber"], "1");
    assert_eq!(fields["signs[0].sealId"], "4028e5e5765f4363017665b5407d0040");
    assert_eq!(fields["signs[0].x"], "50");
    assert_eq!(fields["signs[0].y"], "50");
    assert_eq!(fields["signs[0].zoom"], "100");
    assert_eq!(fields["signs[0].reason"], "同意");

    Ok(())
}

#[tokio::test]
async fn test_sign_id_mismatch() {
    let http =
        MockHttpSend::json(json!({"code": 0, "data": {"id": "other-doc-id", "url": "http://x"}}));
    let client = http.client();

    let err = client
        .sign_document_for_keyword(&keyword_info())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    assert!(err.to_string().contains("id mismatch"), "got: {err}");
    assert!(!err.to_string().contains("http://x"), "got: {err}");

    let err = client
        .sign_document_for_position(&position_info())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    assert!(err.to_string().contains("id mismatch"), "got: {err}");
}

#[tokio::test]
async fn test_sign_missing_url() {
    let http = MockHttpSend::json(json!({"code": 0, "data": {"id": "abc"}}));
    let client = http.client();

    let err = client
        .sign_document_for_keyword(&keyword_info())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("url"), "got: {err}");

    let err = client
        .sign_document_for_position(&position_info())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("url"), "got: {err}");
}

#[tokio::test]
async fn test_sign_data_not_map() {
    let http = MockHttpSend::json(json!({"code": 1, "msg": "document not found", "data": null}));

    let err = http
        .client()
        .sign_document_for_keyword(&keyword_info())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    assert!(err.to_string().contains("map"), "got: {err}");
}

#[tokio::test]
async fn test_sign_is_repeatable() -> anyhow::Result<()> {
    let http = MockHttpSend::json(json!({"data": {"id": "abc", "url": "http://signed"}}));
    let client = http.client();
    let info = position_info();

    let first = client.sign_document_for_position(&info).await?;
    let second = client.sign_document_for_position(&info).await?;
    assert_eq!(first, second);

    let reqs = http.requests();
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].body, reqs[1].body);

    Ok(())
}

#[tokio::test]
async fn test_sign_concurrently_from_shared_client() -> anyhow::Result<()> {
    let http = MockHttpSend::json(json!({"data": {"id": "abc", "url": "http://signed"}}));
    let client = http.client();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.sign_document_for_keyword(&keyword_info()).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await??, "http://signed");
    }
    assert_eq!(http.requests().len(), 8);

    Ok(())
}

#[tokio::test]
async fn test_sign_server_error_status() {
    let http = MockHttpSend::raw(500, "internal error");

    let err = http
        .client()
        .sign_document_for_keyword(&keyword_info())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn test_sign_accepts_null_code_and_msg() -> anyhow::Result<()> {
    let http = MockHttpSend::json(
        json!({"code": null, "msg": null, "data": {"id": "abc", "url": "http://signed"}}),
    );
    let client = http.client();

    let url = client.sign_document_for_keyword(&keyword_info()).await?;
    assert_eq!(url, "http://signed");

    let url = client.sign_document_for_position(&position_info()).await?;
    assert_eq!(url, "http://signed");

    Ok(())
}
