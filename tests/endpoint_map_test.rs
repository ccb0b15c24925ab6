use activation_client::{Api, ClientConfig, Pagination, RequestOptions};
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;

fn api_for(server: &MockServer) -> Result<Api> {
    Ok(Api::from_config(ClientConfig::new(server.base_url()))?)
}

/// 未帶 user_id 時仍送出空的 user_id 參數
#[tokio::test]
async fn test_verify_code_without_user() -> Result<()> {
    let server = MockServer::start();
    let verify_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/activation/verify/ABC123")
            .query_param("user_id", "");
        then.status(200).json_body(json!({ "valid": true, "message": "ok" }));
    });

    let api = api_for(&server)?;
    let result = api.activation().verify_code("ABC123", None).await?;

    verify_mock.assert();
    assert_eq!(result["valid"], true);
    Ok(())
}

#[tokio::test]
async fn test_activation_endpoints() -> Result<()> {
    let server = MockServer::start();

    let generate_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/activation/generate")
            .header("content-type", "application/json")
            .json_body(json!({ "product_id": "basic_software", "product_name": "Basic", "quantity": 2 }));
        then.status(200).json_body(json!([{ "code": "A1" }, { "code": "A2" }]));
    });
    let use_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/activation/use/A1")
            .json_body(json!({ "user_id": null }));
        then.status(200).json_body(json!({ "success": true }));
    });
    let by_product_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/activation/product/basic_software")
            .query_param("skip", "0")
            .query_param("limit", "100");
        then.status(200).json_body(json!([]));
    });
    let stats_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/activation/stats");
        then.status(200).json_body(json!({ "total": 2 }));
    });
    let product_stats_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/activation/stats/basic_software");
        then.status(200).json_body(json!({ "total": 1 }));
    });
    let records_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/activation/records/A1");
        then.status(200).json_body(json!({ "records": [] }));
    });
    let detailed_use_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/activation/use")
            .header("content-type", "application/json")
            .json_body(json!({
                "code": "A2",
                "user_id": "u-7",
                "device_info": { "os": "linux" },
                "ip_address": "10.0.0.8"
            }));
        then.status(200).json_body(json!({ "success": true, "code": "A2" }));
    });
    let activation_products_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/activation/products");
        then.status(200)
            .json_body(json!([{ "product_id": "basic_software", "requires_hardware_binding": false }]));
    });

    let api = api_for(&server)?;
    let activation = api.activation();

    let codes = activation
        .generate_codes(&json!({ "product_id": "basic_software", "product_name": "Basic", "quantity": 2 }))
        .await?;
    let used = activation.use_code("A1", None).await?;
    activation
        .get_codes_by_product("basic_software", Pagination::default())
        .await?;
    let all_stats = activation.get_stats(None).await?;
    let product_stats = activation.get_stats(Some("basic_software")).await?;
    activation.get_records("A1").await?;
    let detailed = activation
        .use_code_with_details(&json!({
            "code": "A2",
            "user_id": "u-7",
            "device_info": { "os": "linux" },
            "ip_address": "10.0.0.8"
        }))
        .await?;
    let catalogue = activation.get_products().await?;

    generate_mock.assert();
    use_mock.assert();
    by_product_mock.assert();
    stats_mock.assert();
    product_stats_mock.assert();
    records_mock.assert();
    detailed_use_mock.assert();
    activation_products_mock.assert();

    assert_eq!(detailed["code"], "A2");
    assert_eq!(catalogue[0]["product_id"], "basic_software");
    assert_eq!(codes.as_array().map(Vec::len), Some(2));
    assert_eq!(used["success"], true);
    assert_eq!(all_stats["total"], 2);
    assert_eq!(product_stats["total"], 1);
    Ok(())
}

#[tokio::test]
async fn test_payment_list_query_parameters() -> Result<()> {
    let server = MockServer::start();
    let filtered_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/payment/list")
            .query_param("skip", "0")
            .query_param("limit", "50")
            .query_param("status", "paid");
        then.status(200).json_body(json!({ "items": ["filtered"] }));
    });
    let plain_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/payment/list")
            .query_param("skip", "10")
            .query_param("limit", "20");
        then.status(200).json_body(json!({ "items": [] }));
    });

    let api = api_for(&server)?;
    let filtered = api
        .payment()
        .get_payment_list(Pagination::new(0, 50), Some("paid"))
        .await?;
    api.payment()
        .get_payment_list(Pagination::new(10, 20), None)
        .await?;

    filtered_mock.assert();
    plain_mock.assert();
    assert_eq!(filtered["items"][0], "filtered");
    Ok(())
}

#[tokio::test]
async fn test_payment_endpoints() -> Result<()> {
    let server = MockServer::start();

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/payment/create")
            .json_body(json!({ "activation_code_id": 1, "payment_method": "wechat" }));
        then.status(200).json_body(json!({ "payment_id": "PAY1" }));
    });
    let create_with_product_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/payment/create-with-product");
        then.status(200).json_body(json!({ "payment_id": "PAY2" }));
    });
    let status_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/payment/status/PAY1");
        then.status(200).json_body(json!({ "status": "pending" }));
    });
    let success_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/payment/success/PAY1");
        then.status(200).json_body(json!({ "success": true, "activation_code": "ACT9" }));
    });
    let refund_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/payment/refund")
            .json_body(json!({ "payment_id": "PAY1", "reason": "duplicate" }));
        then.status(200).json_body(json!({ "refunded": true }));
    });
    let statistics_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/payment/statistics");
        then.status(200).json_body(json!({ "total_orders": 3 }));
    });
    let methods_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/payment/methods");
        then.status(200).json_body(json!(["wechat", "alipay"]));
    });

    let api = api_for(&server)?;
    let payment = api.payment();

    let created = payment
        .create_payment(&json!({ "activation_code_id": 1, "payment_method": "wechat" }))
        .await?;
    payment
        .create_payment_with_product(&json!({ "product_id": "basic_software" }))
        .await?;
    let status = payment.get_payment_status("PAY1").await?;
    let success = payment.get_payment_success_info("PAY1").await?;
    let refund = payment.refund_payment("PAY1", "duplicate").await?;
    let statistics = payment.get_payment_statistics().await?;
    let methods = payment.get_payment_methods().await?;

    create_mock.assert();
    create_with_product_mock.assert();
    status_mock.assert();
    success_mock.assert();
    refund_mock.assert();
    statistics_mock.assert();
    methods_mock.assert();

    assert_eq!(created["payment_id"], "PAY1");
    assert_eq!(status["status"], "pending");
    assert_eq!(success["activation_code"], "ACT9");
    assert_eq!(refund["refunded"], true);
    assert_eq!(statistics["total_orders"], 3);
    assert_eq!(methods[1], "alipay");
    Ok(())
}

#[tokio::test]
async fn test_product_crud() -> Result<()> {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/products");
        then.status(200).json_body(json!([{ "id": 1 }]));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/products")
            .json_body(json!({ "product_id": "pro", "name": "Pro", "price": 299.0 }));
        then.status(200).json_body(json!({ "id": 2 }));
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/products/2")
            .json_body(json!({ "price": 199.0 }));
        then.status(200).json_body(json!({ "id": 2, "price": 199.0 }));
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/products/2");
        then.status(200).json_body(json!({ "message": "deleted" }));
    });

    let api = api_for(&server)?;
    let products = api.products();

    let listed = products.get_products().await?;
    let created = products
        .create_product(&json!({ "product_id": "pro", "name": "Pro", "price": 299.0 }))
        .await?;
    let updated = products.update_product(2, &json!({ "price": 199.0 })).await?;
    let deleted = products.delete_product(2).await?;

    list_mock.assert();
    create_mock.assert();
    update_mock.assert();
    delete_mock.assert();

    assert_eq!(listed[0]["id"], 1);
    assert_eq!(created["id"], 2);
    assert_eq!(updated["price"], 199.0);
    assert_eq!(deleted["message"], "deleted");
    Ok(())
}

#[tokio::test]
async fn test_auth_and_admin_endpoints() -> Result<()> {
    let server = MockServer::start();

    let login_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/login")
            .json_body(json!({ "username": "admin", "password": "s3cret" }));
        then.status(200)
            .json_body(json!({ "access_token": "tok", "token_type": "bearer" }));
    });
    let register_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/register");
        then.status(200).json_body(json!({ "id": 5 }));
    });
    let me_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/auth/me")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({ "username": "admin", "is_admin": true }));
    });
    let codes_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/admin/activation-codes")
            .query_param("skip", "0")
            .query_param("limit", "100");
        then.status(200).json_body(json!([]));
    });
    let payments_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/admin/payments")
            .query_param("skip", "100")
            .query_param("limit", "25");
        then.status(200).json_body(json!([]));
    });
    let stats_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/stats");
        then.status(200).json_body(json!({ "users": 1 }));
    });

    let anonymous = api_for(&server)?;
    let token = anonymous.auth().login("admin", "s3cret").await?;
    anonymous
        .auth()
        .register(&json!({ "username": "new", "email": "n@example.com", "password": "pw1234" }))
        .await?;

    let access_token = token["access_token"].as_str().unwrap_or_default();
    let signed_in = Api::from_config(
        ClientConfig::new(server.base_url()).with_bearer_token(access_token),
    )?;
    let me = signed_in.auth().get_current_user().await?;
    signed_in.admin().get_all_codes(Pagination::default()).await?;
    signed_in
        .admin()
        .get_all_payments(Pagination::new(100, 25))
        .await?;
    let stats = signed_in.admin().get_system_stats().await?;

    login_mock.assert();
    register_mock.assert();
    me_mock.assert();
    codes_mock.assert();
    payments_mock.assert();
    stats_mock.assert();

    assert_eq!(me["is_admin"], true);
    assert_eq!(stats["users"], 1);
    Ok(())
}

#[tokio::test]
async fn test_hardware_endpoints() -> Result<()> {
    let server = MockServer::start();

    let remote_fp_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/activation/hardware/generate-fingerprint");
        then.status(200)
            .json_body(json!({ "fingerprint": "abc", "device_info": {} }));
    });
    let binding_info_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/activation/hardware/binding-info/HW1");
        then.status(200).json_body(json!({ "bound": true }));
    });
    let unbind_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/activation/hardware/unbind")
            .json_body(json!({ "activation_code": "HW1", "admin_key": "k" }));
        then.status(200).json_body(json!({ "success": true }));
    });

    let api = api_for(&server)?;
    let hardware = api.hardware();

    let remote = hardware.generate_fingerprint().await?;
    let info = hardware.get_binding_info("HW1").await?;
    let unbound = hardware
        .unbind(&activation_client::domain::model::HardwareUnbindRequest {
            activation_code: "HW1".to_string(),
            admin_key: "k".to_string(),
        })
        .await?;

    remote_fp_mock.assert();
    binding_info_mock.assert();
    unbind_mock.assert();

    assert_eq!(remote["fingerprint"], "abc");
    assert_eq!(info["bound"], true);
    assert_eq!(unbound["success"], true);
    Ok(())
}

#[tokio::test]
async fn test_map_wide_request_options() -> Result<()> {
    let server = MockServer::start();
    let tagged_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/activation/security-info")
            .header("x-request-source", "admin-console");
        then.status(200).json_body(json!({ "default_length": 16 }));
    });

    let api = api_for(&server)?
        .with_options(RequestOptions::new().header("X-Request-Source", "admin-console"));
    let info = api.activation().get_security_info().await?;

    tagged_mock.assert();
    assert_eq!(info["default_length"], 16);
    Ok(())
}
