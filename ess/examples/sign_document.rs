use anyhow::Result;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use ess_http_send_reqwest::ReqwestHttpSend;
use ess_sdk::{Client, Context, DocType, Document, Options, OsEnv, PositionSignInfo};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let mut args = env::args().skip(1);
    let (Some(path), Some(user_id), Some(seal_id)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: sign_document <file.pdf> <user-id> <seal-id>");
        eprintln!("ESS_APP_KEY, ESS_APP_SECRET and ESS_ADDR must be set");
        std::process::exit(2);
    };

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::with_timeout(Duration::from_secs(60))?)
        .with_env(OsEnv);
    let client = Client::new(ctx.clone(), Options::from_env(&ctx))?;

    let content = std::fs::read(&path)?;
    let mut doc = Document {
        doc_name: "example".to_string(),
        doc_type: DocType::Pdf,
        doc_content_base64: BASE64_STANDARD.encode(content),
        user_id,
        uuid: String::new(),
    };
    client.create_document(&mut doc).await?;
    println!("document id: {}", doc.uuid);

    let url = client
        .sign_document_for_position(&PositionSignInfo {
            doc_id: doc.uuid.clone(),
            seal_id,
            page_number: "1".to_string(),
            x: 50,
            y: 50,
            zoom: 100,
            reason: String::new(),
            remark: "signed by ess-sdk example".to_string(),
        })
        .await?;
    println!("signed document: {url}");

    Ok(())
}
