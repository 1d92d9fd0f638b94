//! API integration tests
//!
//! These run against a live server and database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

use librarium_server::models::Claims;

const BASE_URL: &str = "http://localhost:8080/api";

/// Secret from config/default.toml; tokens are minted directly since token
/// issuance is handled by the identity service, not this server.
const JWT_SECRET: &str = "change-this-secret-in-production";

fn token_for(user_id: i32) -> String {
    Claims::for_user(user_id, 24)
        .create_token(JWT_SECRET)
        .expect("Failed to sign token")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_missing_token_is_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let token = token_for(1001);

    // Create
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "copies": 3
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse response");
    assert!(book["id"].is_number());
    assert_eq!(book["userId"], 1001);
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["copies"], 3);
    let id = book["id"].as_i64().unwrap();

    // Update with copies=0 keeps the stored value (falsy-field gap)
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "copies": 0 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["copies"], 3);

    // Update with copies=5 takes effect
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "copies": 5 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["copies"], 5);
    assert_eq!(book["title"], "Dune");

    // Delete returns the confirmation message, not the record
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted");

    // Gone from the owner's list
    let response = client
        .get(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(!books.iter().any(|b| b["id"].as_i64() == Some(id)));

    // Second delete is a 404 with the fixed message
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
#[ignore]
async fn test_create_missing_required_field_is_store_failure() {
    let client = Client::new();
    let token = token_for(1002);

    // No copies supplied; the NOT NULL column rejects the insert
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_list_is_scoped_to_owner() {
    let client = Client::new();
    let owner = token_for(2001);
    let other = token_for(2002);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner))
        .json(&json!({
            "title": "Hyperion",
            "author": "Simmons",
            "copies": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    let book: Value = response.json().await.expect("Failed to parse response");
    let id = book["id"].as_i64().unwrap();

    // The other user's list never contains the record
    let response = client
        .get(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", other))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(!books.iter().any(|b| b["id"].as_i64() == Some(id)));

    // Nor can the other user update or delete it by id
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", other))
        .json(&json!({ "title": "Stolen" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", other))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Cleanup
    client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", owner))
        .send()
        .await
        .expect("Failed to send request");
}

#[tokio::test]
#[ignore]
async fn test_list_empty_for_fresh_owner() {
    let client = Client::new();
    let token = token_for(909090);

    let response = client
        .get(format!("{}/loans", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let loans: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(loans.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_loan_lifecycle() {
    let client = Client::new();
    let token = token_for(3001);

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "book": "Dune",
            "loanee": "Paul",
            "dueDate": "2025-06-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let loan: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loan["userId"], 3001);
    assert_eq!(loan["loanee"], "Paul");
    let id = loan["id"].as_i64().unwrap();

    // Empty string keeps the stored value; supplied fields replace it
    let response = client
        .put(format!("{}/loans/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "book": "",
            "loanee": "Chani",
            "dueDate": "2025-07-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let loan: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loan["book"], "Dune");
    assert_eq!(loan["loanee"], "Chani");
    assert_eq!(loan["dueDate"], "2025-07-01");

    let response = client
        .delete(format!("{}/loans/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Loan deleted");
}

#[tokio::test]
#[ignore]
async fn test_member_lifecycle() {
    let client = Client::new();
    let token = token_for(4001);

    let response = client
        .post(format!("{}/members", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Ada",
            "gender": "F",
            "dateOfBirth": "1815-12-10"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let member: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(member["userId"], 4001);
    assert_eq!(member["name"], "Ada");
    let id = member["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/members/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let member: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(member["name"], "Ada");

    let response = client
        .delete(format!("{}/members/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Member deleted");

    let response = client
        .put(format!("{}/members/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Grace" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Member not found");
}
