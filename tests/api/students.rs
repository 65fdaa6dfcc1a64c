//! Student CRUD over HTTP.

use super::{add_student, get, post_form, post_json, post_multipart, start_test_server};

#[tokio::test]
async fn add_then_list_all() {
    let server = start_test_server().await;
    let addr = server.addr();

    let reply = post_json(
        addr,
        "/add-student",
        r#"{"name":"Ann Lee","phone_no":"5551234","address":"1 Main St"}"#,
    )
    .await;
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body["statusCode"], 200);
    assert_eq!(reply.message(), "Student Added SuccessFully.");

    let listed = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();

    assert_eq!(listed.status, 200);
    assert_eq!(listed.body["statusCode"], 200);
    let students = listed.content();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["phone_no"], "5551234");
    assert_eq!(students[0]["name"], "Ann Lee");
    assert_eq!(students[0]["display_name"], "ann lee");
    assert_eq!(students[0]["address"], "1 Main St");
}

#[tokio::test]
async fn round_trip_by_id() {
    let server = start_test_server().await;
    let addr = server.addr();

    let id = add_student(addr, "Bob Stone", "5550001", "2 Elm St").await;
    add_student(addr, "Cara", "5550002", "3 Oak St").await;

    let listed = get(addr, &format!("/student-list/{id}")).await;
    server.shutdown().await.unwrap();

    let students = listed.content();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], id);
    assert_eq!(students[0]["name"], "Bob Stone");
    assert_eq!(students[0]["phone_no"], "5550001");
    assert_eq!(students[0]["address"], "2 Elm St");
}

#[tokio::test]
async fn update_replaces_fields_of_one_row() {
    let server = start_test_server().await;
    let addr = server.addr();

    let ann = add_student(addr, "Ann", "111", "a").await;
    let bob = add_student(addr, "Bob", "222", "b").await;

    let body = serde_json::json!({
        "id": ann,
        "name": "Annabel SMITH",
        "phone_no": "999",
        "address": "z"
    });
    let reply = post_json(addr, "/update-student", &body.to_string()).await;
    assert_eq!(reply.status, 200);
    assert_eq!(reply.message(), "Student Update SuccessFully.");

    let updated = get(addr, &format!("/student-list/{ann}")).await;
    let untouched = get(addr, &format!("/student-list/{bob}")).await;
    server.shutdown().await.unwrap();

    let updated = &updated.content()[0];
    assert_eq!(updated["name"], "Annabel SMITH");
    assert_eq!(updated["display_name"], "annabel smith");
    assert_eq!(updated["phone_no"], "999");
    assert_eq!(updated["address"], "z");

    let untouched = &untouched.content()[0];
    assert_eq!(untouched["name"], "Bob");
    assert_eq!(untouched["phone_no"], "222");
}

#[tokio::test]
async fn add_with_id_goes_through_update_path() {
    let server = start_test_server().await;
    let addr = server.addr();

    let reply = post_json(
        addr,
        "/add-student",
        r#"{"id":404,"name":"Ghost","phone_no":"1","address":"x"}"#,
    )
    .await;
    let listed = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();

    assert_eq!(reply.status, 200);
    assert_eq!(reply.message(), "Student Update SuccessFully.");
    assert!(listed.content().is_empty());
}

#[tokio::test]
async fn invalid_payloads_do_not_mutate() {
    let server = start_test_server().await;
    let addr = server.addr();

    let cases = [
        (r#"{"phone_no":"1","address":"x"}"#, "Name can't be blank."),
        (r#"{"name":"Ann","address":"x"}"#, "Phone number can't be blank."),
        (
            r#"{"name":"Ann","phone_no":"+15551234","address":"x"}"#,
            "Mobile number not correct please enter correct number.",
        ),
        (r#"{"name":"Ann","phone_no":"1"}"#, "Address can't be blank."),
        ("{", "Invalid request - please check your input data."),
        (
            r#"[0,"Ann","5551234","1 Main St"]"#,
            "Invalid request - please check your input data.",
        ),
    ];

    for (body, expected) in cases {
        let reply = post_json(addr, "/add-student", body).await;
        assert_eq!(reply.status, 400, "body: {body}");
        assert_eq!(reply.body["statusCode"], 400);
        assert_eq!(reply.message(), expected, "body: {body}");
    }

    let listed = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();
    assert!(listed.content().is_empty());
}

#[tokio::test]
async fn search_by_name_and_phone() {
    let server = start_test_server().await;
    let addr = server.addr();

    add_student(addr, "Ann", "111", "a").await;
    add_student(addr, "Ann", "222", "b").await;
    add_student(addr, "Anne", "333", "c").await;

    let by_name = get(addr, "/student-list/all?search_type=name&search_value=Ann").await;
    let by_phone = get(addr, "/student-list/all?search_type=phone&search_value=333").await;
    let unknown = get(addr, "/student-list/all?search_type=email&search_value=Ann").await;
    let spaced = get(addr, "/student-list/all?search_type=name&search_value=Ann%20Lee").await;
    server.shutdown().await.unwrap();

    let names = by_name.content();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|s| s["name"] == "Ann"));

    let phones = by_phone.content();
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0]["name"], "Anne");

    assert_eq!(unknown.content().len(), 3);
    assert!(spaced.content().is_empty());
}

#[tokio::test]
async fn injection_attempts_match_literally() {
    let server = start_test_server().await;
    let addr = server.addr();

    add_student(addr, "Ann", "111", "a").await;

    let reply = get(
        addr,
        "/student-list/all?search_type=name&search_value=x%27%20OR%20%271%27%3D%271",
    )
    .await;
    let all = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();

    assert_eq!(reply.status, 200);
    assert!(reply.content().is_empty());
    assert_eq!(all.content().len(), 1);
}

#[tokio::test]
async fn non_numeric_id_lists_nothing() {
    let server = start_test_server().await;
    let addr = server.addr();

    add_student(addr, "Ann", "111", "a").await;
    let reply = get(addr, "/student-list/abc").await;
    server.shutdown().await.unwrap();

    assert_eq!(reply.status, 200);
    assert!(reply.content().is_empty());
}

#[tokio::test]
async fn percent_encoded_id_is_decoded() {
    let server = start_test_server().await;
    let addr = server.addr();

    let ann = add_student(addr, "Ann", "111", "a").await;
    let encoded: String = ann.to_string().bytes().map(|b| format!("%{b:02X}")).collect();
    let reply = get(addr, &format!("/student-list/{encoded}")).await;
    server.shutdown().await.unwrap();

    assert_eq!(reply.status, 200);
    let listed = reply.content();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], ann);
}

#[tokio::test]
async fn blank_student_id_is_rejected() {
    let server = start_test_server().await;
    let addr = server.addr();

    let slash = get(addr, "/student-list/").await;
    let bare = get(addr, "/student-list").await;
    server.shutdown().await.unwrap();

    for reply in [slash, bare] {
        assert_eq!(reply.status, 400);
        assert_eq!(reply.message(), "student id can't be blank.");
    }
}

#[tokio::test]
async fn remove_deletes_permanently() {
    let server = start_test_server().await;
    let addr = server.addr();

    let ann = add_student(addr, "Ann", "111", "a").await;
    let bob = add_student(addr, "Bob", "222", "b").await;

    let reply = post_form(addr, "/remove-student", &format!("student_id={ann}")).await;
    assert_eq!(reply.status, 200);
    assert_eq!(reply.message(), "Student Removed SuccessFully.");

    let gone = get(addr, &format!("/student-list/{ann}")).await;
    let all = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();

    assert!(gone.content().is_empty());
    let remaining = all.content();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], bob);
}

#[tokio::test]
async fn remove_rejects_bad_ids() {
    let server = start_test_server().await;
    let addr = server.addr();

    add_student(addr, "Ann", "111", "a").await;

    let missing = post_form(addr, "/remove-student", "").await;
    let wrong = post_form(addr, "/remove-student", "student_id=one").await;
    let all = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();

    assert_eq!(missing.status, 400);
    assert_eq!(missing.message(), "Student id can't blank.");
    assert_eq!(wrong.status, 400);
    assert_eq!(wrong.message(), "Student id can't correct.");
    assert_eq!(all.content().len(), 1);
}

#[tokio::test]
async fn remove_reads_query_string_fallback() {
    let server = start_test_server().await;
    let addr = server.addr();

    let ann = add_student(addr, "Ann", "111", "a").await;
    let reply = post_form(addr, &format!("/remove-student?student_id={ann}"), "").await;
    let all = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();

    assert_eq!(reply.status, 200);
    assert!(all.content().is_empty());
}

#[tokio::test]
async fn remove_reads_multipart_body() {
    let server = start_test_server().await;
    let addr = server.addr();

    let ann = add_student(addr, "Ann", "111", "a").await;
    let bob = add_student(addr, "Bob", "222", "b").await;
    let reply = post_multipart(addr, "/remove-student", &[("student_id", &ann.to_string())]).await;
    let all = get(addr, "/student-list/all").await;
    server.shutdown().await.unwrap();

    assert_eq!(reply.status, 200);
    assert_eq!(reply.message(), "Student Removed SuccessFully.");
    let remaining = all.content();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], bob);
}
