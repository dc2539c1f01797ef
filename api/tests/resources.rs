//! Integration tests for the HTTP wrapper and resource services against a
//! mock backend.

use brewdesk_api::resources::{AuthApi, CoffeeItems, SubscriptionPlans, Users};
use brewdesk_api::{
    ApiClient, ApiError, CoffeeDraft, PageQuery, SearchCondition, TokenSource, UserDraft,
};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A token source whose token can be swapped and whose `clear` is observable.
#[derive(Default)]
struct TestTokens {
    token: Mutex<Option<String>>,
    cleared: AtomicBool,
}

impl TestTokens {
    fn with_token(token: &str) -> Arc<Self> {
        Arc::new(Self {
            token: Mutex::new(Some(token.to_string())),
            cleared: AtomicBool::new(false),
        })
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn was_cleared(&self) -> bool {
        self.cleared.load(Ordering::SeqCst)
    }
}

impl TokenSource for TestTokens {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
        self.cleared.store(true, Ordering::SeqCst);
    }
}

fn coffee_json(id: i64, name: &str, code: &str) -> serde_json::Value {
    json!({
        "id": id,
        "categoryId": 2,
        "coffeeName": name,
        "description": "",
        "code": code,
        "imageUrl": null,
        "isActive": true
    })
}

#[tokio::test]
async fn requests_carry_the_live_token_not_a_startup_copy() {
    let server = MockServer::start().await;
    let tokens = TestTokens::with_token("tok-1");

    Mock::given(method("GET"))
        .and(path("/api/CoffeeItem"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": [coffee_json(1, "Latte", "CF010")]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/CoffeeItem"))
        .and(header("authorization", "Bearer tok-2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": [coffee_json(2, "Mocha", "CF011")]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), tokens.clone());
    let catalog = CoffeeItems::new(client);

    let first = catalog.list().await.unwrap();
    assert_eq!(first[0].coffee_name, "Latte");

    // Token refreshed mid-session: the next call must carry the new value.
    tokens.set("tok-2");
    let second = catalog.list().await.unwrap();
    assert_eq!(second[0].coffee_name, "Mocha");
}

#[tokio::test]
async fn a_401_clears_the_session_and_notifies_subscribers() {
    let server = MockServer::start().await;
    let tokens = TestTokens::with_token("stale-token");

    Mock::given(method("GET"))
        .and(path("/api/SubscriptionPlan/getAll"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), tokens.clone());
    let mut unauthorized = client.subscribe_unauthorized();
    let plans = SubscriptionPlans::new(client);

    let error = plans.list().await.unwrap_err();

    assert!(error.is_unauthorized());
    assert_eq!(error.to_string(), "Token expired");
    // The clear is a side effect of the response itself, before the caller
    // sees the error.
    assert!(tokens.was_cleared());
    assert!(tokens.token().is_none());
    assert!(unauthorized.try_recv().is_ok());
}

#[tokio::test]
async fn a_403_does_not_tear_down_the_session() {
    let server = MockServer::start().await;
    let tokens = TestTokens::with_token("valid-token");

    Mock::given(method("PUT"))
        .and(path("/api/User/5/role"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Admins only"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), tokens.clone());
    let users = Users::new(client);

    let error = users.set_role(5, 2).await.unwrap_err();

    assert!(matches!(error, ApiError::Forbidden { .. }));
    assert_eq!(error.to_string(), "Admins only");
    assert!(!tokens.was_cleared());
    assert_eq!(tokens.token().as_deref(), Some("valid-token"));
}

#[tokio::test]
async fn create_then_list_round_trips_submitted_fields() {
    let server = MockServer::start().await;
    let tokens = TestTokens::with_token("tok");

    let draft = CoffeeDraft {
        category_id: 2,
        coffee_name: "Latte".to_string(),
        description: "Espresso with milk".to_string(),
        code: "CF010".to_string(),
        image_url: None,
        is_active: true,
    };

    // The draft serializes numeric foreign keys as numbers; body_json would
    // reject a string-typed categoryId.
    Mock::given(method("POST"))
        .and(path("/api/CoffeeItem"))
        .and(body_json(json!({
            "categoryId": 2,
            "coffeeName": "Latte",
            "description": "Espresso with milk",
            "code": "CF010",
            "imageUrl": null,
            "isActive": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": 42,
                "categoryId": 2,
                "coffeeName": "Latte",
                "description": "Espresso with milk",
                "code": "CF010",
                "imageUrl": null,
                "isActive": true
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/CoffeeItem"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 42,
                "categoryId": 2,
                "coffeeName": "Latte",
                "description": "Espresso with milk",
                "code": "CF010",
                "imageUrl": null,
                "isActive": true
            }]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), tokens);
    let catalog = CoffeeItems::new(client);

    let created = catalog.create(&draft).await.unwrap().unwrap();
    assert_eq!(created.id, 42);

    let listed = catalog.list().await.unwrap();
    let found = listed.iter().find(|i| i.id == 42).unwrap();
    assert_eq!(found.coffee_name, draft.coffee_name);
    assert_eq!(found.code, draft.code);
    assert_eq!(found.category_id, draft.category_id);
    assert_eq!(found.is_active, draft.is_active);
}

#[tokio::test]
async fn transport_failures_classify_as_network_errors() {
    // Nothing listens on this port.
    let client = ApiClient::new("http://127.0.0.1:9", TestTokens::with_token("tok"));
    let catalog = CoffeeItems::new(client);

    let error = catalog.list().await.unwrap_err();

    assert!(error.is_network());
    assert_eq!(error.to_string(), "Network error. Please check your connection.");
}

#[tokio::test]
async fn login_surfaces_the_server_message_verbatim_on_401() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "wrong"})))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid email or password"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(TestTokens::default()));
    let auth = AuthApi::new(client);

    let error = auth.login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(error.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn register_without_token_performs_follow_up_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "User registered successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/login"))
        .and(body_json(json!({"email": "new@b.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"token": "fresh-token"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(TestTokens::default()));
    let auth = AuthApi::new(client);

    let outcome = auth.register("New User", "new@b.com", "secret").await.unwrap();
    assert_eq!(outcome.token, "fresh-token");
}

#[tokio::test]
async fn google_login_exchanges_the_third_party_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/Auth/google-login"))
        .and(body_json(json!({"token": "google-jwt"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"token": "bearer-from-google"}
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Arc::new(TestTokens::default()));
    let auth = AuthApi::new(client);

    let outcome = auth.google_login("google-jwt").await.unwrap();
    assert_eq!(outcome.token, "bearer-from-google");
}

#[tokio::test]
async fn time_windows_decode_times_and_submit_numeric_plan_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/SubscriptionTimeWindow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 1,
                "planId": 4,
                "startTime": "08:00:00",
                "endTime": "10:30:00",
                "description": "Morning window",
                "isActive": true
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/SubscriptionTimeWindow"))
        .and(body_json(json!({
            "planId": 4,
            "startTime": "11:00:00",
            "endTime": "13:00:00",
            "description": "",
            "isActive": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Created"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), TestTokens::with_token("tok"));
    let windows = brewdesk_api::resources::TimeWindows::new(client);

    let listed = windows.list().await.unwrap();
    assert_eq!(listed[0].start_time.to_string(), "08:00:00");

    let draft = brewdesk_api::TimeWindowDraft {
        plan_id: 4,
        start_time: "11:00:00".parse().unwrap(),
        end_time: "13:00:00".parse().unwrap(),
        description: String::new(),
        is_active: true,
    };
    // Acknowledgement without the entity is tolerated; the page refetches.
    assert!(windows.create(&draft).await.unwrap().is_none());
}

#[tokio::test]
async fn search_decodes_the_page_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/User/search"))
        .and(body_json(json!({
            "searchCondition": {"keyword": "alice", "isDelete": false},
            "pageInfo": {"pageNum": 0, "pageSize": 10}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "pageData": [{
                    "id": 7,
                    "userName": "alice",
                    "fullName": "Alice Doe",
                    "email": "alice@example.com",
                    "phoneNumber": null,
                    "roleId": 1,
                    "isActive": true
                }],
                "pageInfo": {"pageNum": 0, "pageSize": 10, "totalItems": 31, "totalPages": 4}
            }
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), TestTokens::with_token("tok"));
    let users = Users::new(client);

    let page = users
        .search(
            SearchCondition {
                keyword: "alice".to_string(),
                is_delete: false,
            },
            PageQuery::default(),
        )
        .await
        .unwrap();

    assert_eq!(page.page_data.len(), 1);
    assert_eq!(page.page_data[0].user_name, "alice");
    assert_eq!(page.page_info.total_pages, 4);
    assert_eq!(page.page_info.total_items, Some(31));
}

#[tokio::test]
async fn user_active_toggle_uses_the_query_parameter_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/User/is-active/9"))
        .and(query_param("active", "false"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), TestTokens::with_token("tok"));
    let users = Users::new(client);

    users.set_active(9, false).await.unwrap();
}

#[tokio::test]
async fn user_create_tolerates_an_empty_acknowledgement() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/User"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), TestTokens::with_token("tok"));
    let users = Users::new(client);

    let draft = UserDraft {
        user_name: "bob".to_string(),
        full_name: "Bob Roe".to_string(),
        email: "bob@example.com".to_string(),
        password: "hunter2!".to_string(),
        phone_number: None,
        role_id: 2,
    };

    users.create(&draft).await.unwrap();
}

#[tokio::test]
async fn image_upload_returns_the_hosted_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/CoffeeItem/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"url": "https://cdn.example.com/latte.png"}
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), TestTokens::with_token("tok"));
    let catalog = CoffeeItems::new(client);

    let url = catalog
        .upload_image("latte.png", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.example.com/latte.png");
}

#[tokio::test]
async fn validation_errors_render_field_qualified_lines() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/SubscriptionPlan/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Validation failed",
            "errors": {"price": ["must be greater than zero"]}
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), TestTokens::with_token("tok"));
    let plans = SubscriptionPlans::new(client);

    let draft = brewdesk_api::PlanDraft {
        plan_name: "Morning".to_string(),
        description: String::new(),
        price: -1.0,
        duration_days: 30,
        total_cups: 60,
        daily_cup_limit: 2,
        is_active: true,
    };

    let error = plans.create(&draft).await.unwrap_err();
    let rendered = error.to_string();
    assert!(rendered.contains("Validation failed"));
    assert!(rendered.contains("price: must be greater than zero"));
}

#[tokio::test]
async fn bare_array_responses_decode_without_the_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/SubscriptionPlan/getAll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "planName": "Morning Pass",
            "description": "",
            "price": 199000.0,
            "durationDays": 30,
            "totalCups": 60,
            "dailyCupLimit": 2,
            "isActive": true
        }])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), TestTokens::with_token("tok"));
    let plans = SubscriptionPlans::new(client);

    let listed = plans.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].plan_name, "Morning Pass");
}
