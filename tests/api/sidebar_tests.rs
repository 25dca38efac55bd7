//! Server Sidebar API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use chat_sidebar::domain::{ChannelType, MemberRole};

use crate::common::{
    make_channel, make_member, make_server, token_for, Fixture, HOME_PATH, SIGN_IN_PATH,
};

fn sample_fixture() -> Fixture {
    let srv = "srv-1";
    Fixture::new()
        .profile("A")
        .profile("B")
        .profile("Z")
        .server(make_server(
            srv,
            vec![
                // Stored out of order; the repository sorts by creation time
                make_channel(srv, "3", "stage", ChannelType::Video, 3),
                make_channel(srv, "1", "general", ChannelType::Text, 1),
                make_channel(srv, "2", "lounge", ChannelType::Audio, 2),
                make_channel(srv, "4", "random", ChannelType::Text, 4),
            ],
            vec![
                make_member(srv, "ma", "A", MemberRole::Admin),
                make_member(srv, "mb", "B", MemberRole::Guest),
            ],
        ))
}

fn item_ids(group: &Value) -> Vec<String> {
    group["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_anonymous_request_redirects_to_sign_in() {
    let app = sample_fixture().into_app();

    let response = app.get("/api/v1/servers/srv-1/sidebar").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), SIGN_IN_PATH);
}

#[tokio::test]
async fn test_invalid_token_redirects_to_sign_in() {
    let app = sample_fixture().into_app();

    let response = app
        .get("/api/v1/servers/srv-1/sidebar")
        .authorization_bearer("not-a-jwt")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), SIGN_IN_PATH);
}

#[tokio::test]
async fn test_token_without_profile_redirects_to_sign_in() {
    let app = sample_fixture().into_app();

    let response = app
        .get("/api/v1/servers/srv-1/sidebar")
        .authorization_bearer(token_for("nobody"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), SIGN_IN_PATH);
}

#[tokio::test]
async fn test_missing_server_redirects_home() {
    let app = sample_fixture().into_app();

    let response = app
        .get("/api/v1/servers/missing-id/sidebar")
        .authorization_bearer(token_for("A"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), HOME_PATH);
}

#[tokio::test]
async fn test_admin_sidebar() {
    let app = sample_fixture().into_app();

    let response = app
        .get("/api/v1/servers/srv-1/sidebar")
        .authorization_bearer(token_for("A"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["header"]["role"], "ADMIN");
    assert_eq!(body["header"]["server"]["id"], "srv-1");
    assert!(body["header"]["server"]["invite_code"].is_string());
    assert_eq!(
        body["header"]["actions"],
        json!([
            "invite_people",
            "server_settings",
            "manage_members",
            "create_channel",
            "delete_server"
        ])
    );

    let search = body["search"].as_array().unwrap();
    let labels: Vec<&str> = search.iter().map(|g| g["label"].as_str().unwrap()).collect();
    assert_eq!(
        labels,
        vec!["Text Channels", "Voice Channels", "Video Channels", "Members"]
    );
    assert_eq!(item_ids(&search[0]), vec!["1", "4"]);
    assert_eq!(item_ids(&search[1]), vec!["2"]);
    assert_eq!(item_ids(&search[2]), vec!["3"]);
    assert_eq!(item_ids(&search[3]), vec!["mb"]);
    assert_eq!(search[0]["type"], "channel");
    assert_eq!(search[0]["data"][0]["icon"], "hash");
    assert_eq!(search[1]["data"][0]["icon"], "mic");
    assert_eq!(search[2]["data"][0]["icon"], "video");
    assert_eq!(search[3]["type"], "member");
    assert_eq!(search[3]["data"][0]["icon"], Value::Null);

    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0]["channel_type"], "TEXT");
    assert_eq!(sections[1]["channel_type"], "AUDIO");
    assert_eq!(sections[2]["channel_type"], "VIDEO");
    assert_eq!(sections[3]["section_type"], "members");
    assert_eq!(sections[0]["channels"][0]["name"], "general");
    assert_eq!(sections[0]["channels"][0]["can_manage"], false);
    assert_eq!(sections[0]["channels"][1]["can_manage"], true);
}

#[tokio::test]
async fn test_guest_sidebar() {
    let app = sample_fixture().into_app();

    let response = app
        .get("/api/v1/servers/srv-1/sidebar")
        .authorization_bearer(token_for("B"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["header"]["role"], "GUEST");
    assert_eq!(body["header"]["actions"], json!(["leave_server"]));
    assert!(body["header"]["server"].get("invite_code").is_none());
    assert_eq!(item_ids(&body["search"][3]), vec!["ma"]);
    assert_eq!(body["search"][3]["data"][0]["icon"], "shield-alert");
    assert_eq!(body["search"][3]["data"][0]["tone"], "rose");
    assert_eq!(body["sections"][3]["members"][0]["tone"], "rose");
    assert_eq!(body["sections"][0]["can_create_channel"], false);
}

#[tokio::test]
async fn test_non_member_sees_everyone() {
    let app = sample_fixture().into_app();

    let response = app
        .get("/api/v1/servers/srv-1/sidebar")
        .authorization_bearer(token_for("Z"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["header"]["role"], Value::Null);
    assert_eq!(body["header"]["actions"], json!([]));
    // Ordered by role rank: guest before admin
    assert_eq!(item_ids(&body["search"][3]), vec!["mb", "ma"]);
}

#[tokio::test]
async fn test_sole_member_gets_empty_member_group() {
    let srv = "solo";
    let app = Fixture::new()
        .profile("A")
        .server(make_server(
            srv,
            vec![make_channel(srv, "1", "general", ChannelType::Text, 0)],
            vec![make_member(srv, "ma", "A", MemberRole::Admin)],
        ))
        .into_app();

    let response = app
        .get("/api/v1/servers/solo/sidebar")
        .authorization_bearer(token_for("A"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();

    assert_eq!(body["search"][3]["data"], json!([]));
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["channel_type"], "TEXT");
}
