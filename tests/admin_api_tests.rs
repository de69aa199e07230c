use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceResponse},
    http::{header, StatusCode},
    test, Error,
};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use uuid::Uuid;

use profile_api::{
    entities::{contact::ContactTranslation, token::Claims},
    errors::AppError,
    AppState,
};

#[macro_use]
mod test_utils;
use test_utils::{
    sample_collections, test_config, InMemoryProfileRepo, MockAdminRepo, ADMIN_PASSWORD,
    ADMIN_USERNAME,
};

fn admin_state(admin_repo: MockAdminRepo) -> AppState {
    AppState::with_repositories(
        test_config(),
        Arc::new(InMemoryProfileRepo::new(sample_collections())),
        Arc::new(admin_repo),
    )
}

async fn login<S>(app: &S, username: &str, password: &str) -> ServiceResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/admin/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    test::call_service(app, req).await
}

async fn admin_token<S>(app: &S) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
{
    let resp = login(app, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 300);
    body["access_token"].as_str().expect("access token").to_string()
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

#[actix_rt::test]
async fn admin_routes_require_a_token() {
    let app = init_app!(admin_state(MockAdminRepo::new()));

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/stacks")
        .set_json(json!({ "name": "Rust" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing credentials");
}

#[actix_rt::test]
async fn wrong_credentials_are_rejected() {
    let app = init_app!(admin_state(MockAdminRepo::new()));

    let resp = login(&app, ADMIN_USERNAME, "not the password").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = login(&app, "someone-else", ADMIN_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Wrong credentials");
}

#[actix_rt::test]
async fn repeated_failures_throttle_login() {
    let app = init_app!(admin_state(MockAdminRepo::new()));

    for _ in 0..3 {
        let resp = login(&app, ADMIN_USERNAME, "guess").await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    // Correct credentials are refused until the window passes
    let resp = login(&app, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(resp.headers().contains_key(header::RETRY_AFTER));
}

#[actix_rt::test]
async fn forged_and_malformed_tokens_are_rejected() {
    let app = init_app!(admin_state(MockAdminRepo::new()));

    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: ADMIN_USERNAME.into(),
        admin: true,
        exp: now + 600,
        iat: now,
    };
    let forged = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(b"some_other_secret_that_is_also_long_enough_0000"),
    )
    .unwrap();

    for token in [forged.as_str(), "not-a-jwt"] {
        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/stacks/{}", Uuid::new_v4()))
            .insert_header(bearer(token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid token");
    }
}

#[actix_rt::test]
async fn token_without_admin_flag_is_forbidden() {
    let config = test_config();
    let app = init_app!(admin_state(MockAdminRepo::new()));

    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "visitor".into(),
        admin: false,
        exp: now + 600,
        iat: now,
    };
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/stacks/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn login_then_create_stack() {
    let stack_id = Uuid::new_v4();
    let mut repo = MockAdminRepo::new();
    repo.expect_create_stack()
        .withf(|input| input.name == "Rust" && input.proficiency == Some(90))
        .times(1)
        .returning(move |_| Ok(stack_id));

    let app = init_app!(admin_state(repo));
    let token = admin_token(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/stacks")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Rust", "category": "language", "proficiency": 90 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], stack_id.to_string());
    assert_eq!(body["message"], "Stack created");
}

#[actix_rt::test]
async fn invalid_payload_returns_field_details() {
    let mut repo = MockAdminRepo::new();
    repo.expect_create_stack().never();

    let app = init_app!(admin_state(repo));
    let token = admin_token(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/stacks")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Rust", "proficiency": 150 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "proficiency");
}

#[actix_rt::test]
async fn malformed_json_is_a_json_400() {
    let app = init_app!(admin_state(MockAdminRepo::new()));
    let token = admin_token(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/stacks")
        .insert_header(bearer(&token))
        .insert_header(header::ContentType::json())
        .set_payload("{ \"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
}

#[actix_rt::test]
async fn malformed_id_is_rejected_before_the_store() {
    let mut repo = MockAdminRepo::new();
    repo.expect_delete_contact().never();

    let app = init_app!(admin_state(repo));
    let token = admin_token(&app).await;

    let req = test::TestRequest::delete()
        .uri("/api/v1/admin/contacts/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn deleting_unknown_row_is_404_and_known_row_is_204() {
    let known = Uuid::new_v4();
    let mut repo = MockAdminRepo::new();
    repo.expect_delete_project().returning(move |id| {
        if id == known {
            Ok(())
        } else {
            Err(AppError::NotFound("Project not found".into()))
        }
    });

    let app = init_app!(admin_state(repo));
    let token = admin_token(&app).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/projects/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/projects/{known}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_rt::test]
async fn contact_translation_upsert_returns_saved_row() {
    let contact_id = Uuid::new_v4();
    let mut repo = MockAdminRepo::new();
    repo.expect_upsert_contact_translation()
        .withf(move |id, lang, input| {
            *id == contact_id && lang == "de" && input.label.as_deref() == Some("E-Mail")
        })
        .times(1)
        .returning(|id, lang, input| {
            Ok(ContactTranslation {
                id: Uuid::new_v4(),
                contact_id: id,
                language_code: lang.to_string(),
                label: input.label.clone(),
            })
        });

    let app = init_app!(admin_state(repo));
    let token = admin_token(&app).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/admin/contacts/{contact_id}/translations/de"))
        .insert_header(bearer(&token))
        .set_json(json!({ "label": "E-Mail" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["language_code"], "de");
    assert_eq!(body["label"], "E-Mail");
}

#[actix_rt::test]
async fn duplicate_slug_surfaces_as_conflict() {
    let mut repo = MockAdminRepo::new();
    repo.expect_create_project()
        .withf(|input| input.slug == "my-site")
        .returning(|_| Err(AppError::Conflict("Project slug already exists".into())));

    let app = init_app!(admin_state(repo));
    let token = admin_token(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/projects")
        .insert_header(bearer(&token))
        .set_json(json!({ "slug": "My Site", "start_date": "2024-01-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
