use crate::mock::MockHttpSend;
use ess_sdk::{DocType, Document, ErrorKind};
use pretty_assertions::assert_eq;
use serde_json::json;

// "%PDF-1.4\n"
const PDF_BASE64: &str = "JVBERi0xLjQK";

fn document(doc_type: DocType, content: &str) -> Document {
    Document {
        doc_name: "李四的劳动合同".to_string(),
        doc_type,
        doc_content_base64: content.to_string(),
        user_id: "4028e5e5765f43630176655cf3c5003c".to_string(),
        uuid: String::new(),
    }
}

#[tokio::test]
async fn test_create_document() -> anyhow::Result<()> {
    let http = MockHttpSend::json(json!({"code": 0, "msg": "success", "data": {"id": "X"}}));
    let client = http.client();

    let mut doc = document(DocType::Pdf, PDF_BASE64);
    client.create_document(&mut doc).await?;
    assert_eq!(doc.uuid, "X");

    let reqs = http.requests();
    assert_eq!(reqs.len(), 1);
    let req = &reqs[0];
    assert_eq!(req.method, http::Method::POST);
    assert_eq!(
        req.uri,
        "http://211.88.18.140:30080/ess/api/user/doc/create"
    );

    let content_type = req.header("content-type");
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("multipart content type");

    let body = String::from_utf8(req.body.to_vec())?;
    let part = |name: &str, value: &str| {
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    };
    assert!(body.contains(&part("docName", "李四的劳动合同")));
    assert!(body.contains(&part("docType", "2")));
    assert!(body.contains(&part("userId", "4028e5e5765f43630176655cf3c5003c")));
    assert!(body.contains(&part("uuid", "")));
    assert!(body.contains(&format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"李四的劳动合同.pdf\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n%PDF-1.4\n\r\n--{boundary}--\r\n"
    )));

    Ok(())
}

#[tokio::test]
async fn test_create_document_file_name_follows_doc_type() -> anyhow::Result<()> {
    for (doc_type, file_name) in [
        (DocType::Pdf, "filename=\"a.pdf\""),
        (DocType::Ofd, "filename=\"a.ofd\""),
        (DocType::Other(9), "filename=\"a\""),
    ] {
        let http = MockHttpSend::json(json!({"data": {"id": "X"}}));
        let mut doc = document(doc_type, PDF_BASE64);
        doc.doc_name = "a".to_string();

        http.client().create_document(&mut doc).await?;

        let body = String::from_utf8(http.requests()[0].body.to_vec())?;
        assert!(body.contains(file_name), "{doc_type:?}: {body}");
        assert!(
            body.contains(&format!("\r\n\r\n{}\r\n", doc_type.code())),
            "{doc_type:?}: {body}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_create_document_invalid_content() {
    let http = MockHttpSend::json(json!({"data": {"id": "X"}}));
    let mut doc = document(DocType::Pdf, "not-base64!!");

    let err = http.client().create_document(&mut doc).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ContentInvalid);
    assert_eq!(doc.uuid, "");
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn test_create_document_missing_id() {
    let http = MockHttpSend::json(json!({"code": 0, "msg": "", "data": {}}));
    let mut doc = document(DocType::Pdf, PDF_BASE64);
    doc.uuid = "previous".to_string();

    let err = http.client().create_document(&mut doc).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    assert!(err.to_string().contains("id"), "got: {err}");
    assert_eq!(doc.uuid, "previous");
}

#[tokio::test]
async fn test_create_document_rejects_malformed_data() {
    for data in [
        json!(null),
        json!("X"),
        json!({"id": 42}),
        json!({"id": ""}),
    ] {
        let http = MockHttpSend::json(json!({"code": 0, "data": data}));
        let mut doc = document(DocType::Ofd, PDF_BASE64);

        let err = http.client().create_document(&mut doc).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResponseInvalid, "data: {data}");
        assert_eq!(doc.uuid, "", "data: {data}");
    }
}

#[tokio::test]
async fn test_create_document_transport_error() {
    let http = MockHttpSend::failing("connection refused");
    let mut doc = document(DocType::Pdf, PDF_BASE64);

    let err = http.client().create_document(&mut doc).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.to_string(), "connection refused");
    assert_eq!(doc.uuid, "");
}

#[tokio::test]
async fn test_create_document_body_not_json() {
    let http = MockHttpSend::raw(200, "<html>ok</html>");
    let mut doc = document(DocType::Pdf, PDF_BASE64);

    let err = http.client().create_document(&mut doc).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    assert_eq!(doc.uuid, "");
}

#[tokio::test]
async fn test_create_document_accepts_null_msg() -> anyhow::Result<()> {
    let http = MockHttpSend::json(json!({"code": 0, "msg": null, "data": {"id": "X"}}));
    let mut doc = document(DocType::Pdf, PDF_BASE64);

    http.client().create_document(&mut doc).await?;
    assert_eq!(doc.uuid, "X");

    Ok(())
}
