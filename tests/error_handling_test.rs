use activation_client::utils::error::{ErrorCategory, ErrorSeverity};
use activation_client::{Api, ClientConfig, ClientError, Pagination};
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn api_for(server: &MockServer) -> Result<Api> {
    Ok(Api::from_config(ClientConfig::new(server.base_url()))?)
}

#[tokio::test]
async fn test_status_codes_outside_success_range_reject() -> Result<()> {
    let server = MockServer::start();
    for (code, status) in [("C400", 400u16), ("C401", 401), ("C404", 404), ("C500", 500), ("C502", 502)] {
        server.mock(|when, then| {
            when.method(GET)
                .path(format!("/api/v1/payment/status/{}", code));
            then.status(status)
                .json_body(json!({ "detail": "rejected", "status": "paid" }));
        });
    }

    let api = api_for(&server)?;
    for (code, status) in [("C400", 400u16), ("C401", 401), ("C404", 404), ("C500", 500), ("C502", 502)] {
        match api.payment().get_payment_status(code).await {
            Err(ClientError::Http { status: got }) => assert_eq!(got, status),
            other => panic!("expected HTTP error for {}, got {:?}", status, other),
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_created_status_is_success() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/products");
        then.status(201).json_body(json!({ "id": 3 }));
    });

    let api = api_for(&server)?;
    let created = api.products().create_product(&json!({ "name": "New" })).await?;
    assert_eq!(created["id"], 3);
    Ok(())
}

#[tokio::test]
async fn test_malformed_success_body_is_parse_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/stats");
        then.status(200)
            .header("content-type", "application/json")
            .body("<html>proxy error</html>");
    });

    let api = api_for(&server)?;
    let err = api.admin().get_system_stats().await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
    assert_eq!(err.category(), ErrorCategory::Data);
    Ok(())
}

#[tokio::test]
async fn test_empty_success_body_is_parse_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/products/9");
        then.status(200);
    });

    let api = api_for(&server)?;
    let err = api.products().delete_product(9).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() -> Result<()> {
    let api = Api::from_config(ClientConfig::new("http://127.0.0.1:1"))?;
    let err = api
        .admin()
        .get_all_codes(Pagination::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.category(), ErrorCategory::Network);
    assert_eq!(err.severity(), ErrorSeverity::Medium);
    Ok(())
}

#[tokio::test]
async fn test_config_file_drives_requests() -> Result<()> {
    let server = MockServer::start();
    let tenant_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products")
            .header("x-tenant", "acme")
            .header("user-agent", "admin-console/2.0");
        then.status(200).json_body(json!([]));
    });

    let mut file = NamedTempFile::new()?;
    write!(
        file,
        "base_url = \"{}\"\nuser_agent = \"admin-console/2.0\"\n\n[headers]\nX-Tenant = \"acme\"\n",
        server.base_url()
    )?;

    let api = Api::from_config(ClientConfig::from_file(file.path())?)?;
    api.products().get_products().await?;

    tenant_mock.assert();
    Ok(())
}
