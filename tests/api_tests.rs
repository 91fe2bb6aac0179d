//! API 集成测试
//!
//! 用内存 SQLite 跑完整的路由 → 服务 → 存储链路，
//! 每个测试用例独立建库，互不影响。

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use rust_studyhub::models::users::requests::{CreateUserRequest, UserListQuery};
use rust_studyhub::routes;
use rust_studyhub::storage::{Storage, create_storage_with_url};
use rust_studyhub::utils::{json_error_handler, query_error_handler};

async fn build_storage() -> Arc<dyn Storage> {
    create_storage_with_url(":memory:")
        .await
        .expect("Failed to create in-memory storage")
}

// 构造挂好全部路由的测试应用
macro_rules! test_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .configure(routes::configure_auth_routes)
                .configure(routes::configure_user_routes)
                .configure(routes::configure_section_routes)
                .configure(routes::configure_material_routes)
                .configure(routes::configure_test_routes)
                .configure(routes::configure_question_routes)
                .configure(routes::configure_choice_routes)
                .configure(routes::configure_answer_routes),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $path:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri($path)
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
    // 注册接口按 IP 限流，测试之间用不同的 peer 地址隔离
    ($app:expr, $path:expr, $body:expr, $peer:expr) => {{
        let peer: SocketAddr = $peer.parse().unwrap();
        let req = test::TestRequest::post()
            .uri($path)
            .peer_addr(peer)
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! get_req {
    ($app:expr, $path:expr) => {{
        let req = test::TestRequest::get().uri($path).to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! put_json {
    ($app:expr, $path:expr, $body:expr) => {{
        let req = test::TestRequest::put()
            .uri($path)
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! patch_json {
    ($app:expr, $path:expr, $body:expr) => {{
        let req = test::TestRequest::patch()
            .uri($path)
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! delete_req {
    ($app:expr, $path:expr) => {{
        let req = test::TestRequest::delete().uri($path).to_request();
        test::call_service(&$app, req).await
    }};
}

macro_rules! created_id {
    ($resp:expr, $entity:literal) => {{
        assert_eq!($resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json($resp).await;
        body["data"][$entity]["id"].as_i64().unwrap()
    }};
}

#[actix_web::test]
async fn register_hashes_password_and_creates_single_account() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(
        app,
        "/api/v1/auth/register",
        &json!({"username": "testuser", "password": "testpassword123"}),
        "10.80.0.1:40000"
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["username"], "testuser");
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    // 响应里绝不能出现凭据字段
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());

    // 恰好创建了一条账号记录
    let users = storage
        .list_users_with_pagination(UserListQuery {
            page: None,
            size: None,
            username: None,
            search: None,
            ordering: None,
        })
        .await
        .unwrap();
    assert_eq!(users.pagination.total, 1);

    // 存储的凭据是 Argon2 哈希，不等于明文
    let user = storage
        .get_user_by_username("testuser")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(user.password_hash, "testpassword123");
    assert!(user.password_hash.starts_with("$argon2"));

    // 重复用户名 → 400 + 字段级错误
    let resp = post_json!(
        app,
        "/api/v1/auth/register",
        &json!({"username": "testuser", "password": "testpassword123"}),
        "10.80.0.1:40000"
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["data"]["username"][0]
            .as_str()
            .unwrap()
            .contains("already exists")
    );
}

#[actix_web::test]
async fn register_rejects_invalid_fields_per_field() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(
        app,
        "/api/v1/auth/register",
        &json!({"username": "ab", "password": "short"}),
        "10.80.0.2:40000"
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["username"][0].as_str().is_some());
    assert!(body["data"]["password"][0].as_str().is_some());
}

#[actix_web::test]
async fn create_then_retrieve_echoes_submitted_fields() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Math"}));
    let section_id = created_id!(resp, "section");

    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": section_id, "title": "Algebra", "content": "Linear equations"})
    );
    let material_id = created_id!(resp, "material");

    let resp = get_req!(app, &format!("/api/v1/materials/{material_id}"));
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["material"]["id"], material_id);
    assert_eq!(body["data"]["material"]["section_id"], section_id);
    assert_eq!(body["data"]["material"]["title"], "Algebra");
    assert_eq!(body["data"]["material"]["content"], "Linear equations");
}

#[actix_web::test]
async fn retrieving_material_embeds_children_to_full_depth() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Math"}));
    let section_id = created_id!(resp, "section");

    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": section_id, "title": "Algebra", "content": "..."})
    );
    let material_id = created_id!(resp, "material");

    let resp = post_json!(
        app,
        "/api/v1/tests",
        &json!({"material_id": material_id, "title": "Quiz 1"})
    );
    let test_id = created_id!(resp, "test");

    let resp = post_json!(
        app,
        "/api/v1/questions",
        &json!({"test_id": test_id, "text": "2+2=?"})
    );
    let question_id = created_id!(resp, "question");

    let resp = post_json!(
        app,
        "/api/v1/choices",
        &json!({"question_id": question_id, "text": "4", "is_correct": true})
    );
    let choice_id = created_id!(resp, "choice");

    // 资料的读取表示要一路嵌套到选项
    let resp = get_req!(app, &format!("/api/v1/materials/{material_id}"));
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let material = &body["data"]["material"];
    assert_eq!(material["title"], "Algebra");

    let tests = material["tests"].as_array().unwrap();
    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0]["id"], test_id);
    assert_eq!(tests[0]["title"], "Quiz 1");

    let questions = tests[0]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["id"], question_id);
    assert_eq!(questions[0]["text"], "2+2=?");

    let choices = questions[0]["choices"].as_array().unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0]["id"], choice_id);
    assert_eq!(choices[0]["text"], "4");
    assert_eq!(choices[0]["is_correct"], true);

    // 列表读取同样嵌套
    let resp = get_req!(app, "/api/v1/materials");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0]["tests"][0]["questions"][0]["choices"][0]["text"],
        "4"
    );
}

#[actix_web::test]
async fn deleting_material_cascades_to_descendants() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Math"}));
    let section_id = created_id!(resp, "section");

    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": section_id, "title": "Algebra", "content": "..."})
    );
    let material_id = created_id!(resp, "material");

    let resp = post_json!(
        app,
        "/api/v1/tests",
        &json!({"material_id": material_id, "title": "Quiz 1"})
    );
    let test_id = created_id!(resp, "test");

    let resp = post_json!(
        app,
        "/api/v1/questions",
        &json!({"test_id": test_id, "text": "2+2=?"})
    );
    let question_id = created_id!(resp, "question");

    let resp = post_json!(
        app,
        "/api/v1/choices",
        &json!({"question_id": question_id, "text": "4", "is_correct": true})
    );
    let choice_id = created_id!(resp, "choice");

    // 删除资料，级联带走测验/题目/选项
    let resp = delete_req!(app, &format!("/api/v1/materials/{material_id}"));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_req!(app, &format!("/api/v1/tests/{test_id}"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = get_req!(app, &format!("/api/v1/questions/{question_id}"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = get_req!(app, &format!("/api/v1/choices/{choice_id}"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 存储层面确认零残留
    assert!(storage.get_test_by_id(test_id).await.unwrap().is_none());
    assert!(
        storage
            .get_question_by_id(question_id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(storage.get_choice_by_id(choice_id).await.unwrap().is_none());

    // 章节不受影响
    let resp = get_req!(app, &format!("/api/v1/sections/{section_id}"));
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn list_filters_return_only_exact_matches() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Math"}));
    let math_id = created_id!(resp, "section");
    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Physics"}));
    let physics_id = created_id!(resp, "section");

    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": math_id, "title": "Algebra", "content": "a"})
    );
    let algebra_id = created_id!(resp, "material");
    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": physics_id, "title": "Optics", "content": "b"})
    );
    let optics_id = created_id!(resp, "material");

    // materials?title= 精确匹配
    let resp = get_req!(app, "/api/v1/materials?title=Algebra");
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], algebra_id);

    // materials?section= 按父引用过滤
    let resp = get_req!(app, &format!("/api/v1/materials?section={physics_id}"));
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], optics_id);

    // tests?material=&title=
    let resp = post_json!(
        app,
        "/api/v1/tests",
        &json!({"material_id": algebra_id, "title": "Quiz 1"})
    );
    let quiz1_id = created_id!(resp, "test");
    let resp = post_json!(
        app,
        "/api/v1/tests",
        &json!({"material_id": optics_id, "title": "Quiz 2"})
    );
    let quiz2_id = created_id!(resp, "test");

    let resp = get_req!(app, &format!("/api/v1/tests?material={algebra_id}"));
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], quiz1_id);

    let resp = get_req!(app, "/api/v1/tests?title=Quiz%202");
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], quiz2_id);

    // questions?test=
    let resp = post_json!(
        app,
        "/api/v1/questions",
        &json!({"test_id": quiz1_id, "text": "2+2=?"})
    );
    let q1_id = created_id!(resp, "question");
    let resp = post_json!(
        app,
        "/api/v1/questions",
        &json!({"test_id": quiz2_id, "text": "Speed of light?"})
    );
    let q2_id = created_id!(resp, "question");

    let resp = get_req!(app, &format!("/api/v1/questions?test={quiz2_id}"));
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], q2_id);

    // choices?is_correct=&question=
    let resp = post_json!(
        app,
        "/api/v1/choices",
        &json!({"question_id": q1_id, "text": "4", "is_correct": true})
    );
    let right_id = created_id!(resp, "choice");
    let resp = post_json!(
        app,
        "/api/v1/choices",
        &json!({"question_id": q1_id, "text": "5"})
    );
    let wrong_id = created_id!(resp, "choice");

    let resp = get_req!(app, "/api/v1/choices?is_correct=true");
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], right_id);

    let resp = get_req!(app, &format!("/api/v1/choices?question={q1_id}"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pagination"]["total"], 2);

    let _ = wrong_id;

    // ordering= 按声明字段排序
    let resp = get_req!(app, "/api/v1/sections?ordering=title");
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items[0]["title"], "Math");
    assert_eq!(items[1]["title"], "Physics");

    let resp = get_req!(app, "/api/v1/sections?ordering=-title");
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items[0]["title"], "Physics");
}

#[actix_web::test]
async fn partial_update_preserves_unspecified_fields() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Math"}));
    let section_id = created_id!(resp, "section");

    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": section_id, "title": "Algebra", "content": "Original content"})
    );
    let material_id = created_id!(resp, "material");

    // PATCH 只改标题
    let resp = patch_json!(
        app,
        &format!("/api/v1/materials/{material_id}"),
        &json!({"title": "Algebra II"})
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["material"]["title"], "Algebra II");
    assert_eq!(body["data"]["material"]["content"], "Original content");

    // PUT 缺省字段同样保持原值
    let resp = put_json!(
        app,
        &format!("/api/v1/materials/{material_id}"),
        &json!({"content": "New content"})
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["material"]["title"], "Algebra II");
    assert_eq!(body["data"]["material"]["content"], "New content");
    assert_eq!(body["data"]["material"]["section_id"], section_id);
}

#[actix_web::test]
async fn unknown_ids_and_missing_parents_are_rejected() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    // 未知 ID → 404
    let resp = get_req!(app, "/api/v1/materials/9999");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = get_req!(app, "/api/v1/sections/9999");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = put_json!(app, "/api/v1/sections/9999", &json!({"title": "X"}));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 指向不存在父级的创建 → 400 + 字段级错误
    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": 777, "title": "Orphan", "content": "..."})
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["data"]["section_id"][0]
            .as_str()
            .unwrap()
            .contains("does not exist")
    );

    // 非法路径 ID → 400
    let resp = get_req!(app, "/api/v1/materials/not-a-number");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 删除两次：第一次 204，第二次 404
    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Temp"}));
    let section_id = created_id!(resp, "section");
    let resp = delete_req!(app, &format!("/api/v1/sections/{section_id}"));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
    let resp = delete_req!(app, &format!("/api/v1/sections/{section_id}"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn answer_refs_must_exist_but_choice_question_link_is_not_enforced() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    // 用户直接从存储层造，注册接口单独测过了
    let user = storage
        .create_user(CreateUserRequest {
            username: "answerer".to_string(),
            password: "prehashed-for-test".to_string(),
        })
        .await
        .unwrap();

    let resp = post_json!(app, "/api/v1/sections", &json!({"title": "Math"}));
    let section_id = created_id!(resp, "section");
    let resp = post_json!(
        app,
        "/api/v1/materials",
        &json!({"section_id": section_id, "title": "Algebra", "content": "..."})
    );
    let material_id = created_id!(resp, "material");
    let resp = post_json!(
        app,
        "/api/v1/tests",
        &json!({"material_id": material_id, "title": "Quiz 1"})
    );
    let test_id = created_id!(resp, "test");

    let resp = post_json!(
        app,
        "/api/v1/questions",
        &json!({"test_id": test_id, "text": "2+2=?"})
    );
    let q1_id = created_id!(resp, "question");
    let resp = post_json!(
        app,
        "/api/v1/questions",
        &json!({"test_id": test_id, "text": "3+3=?"})
    );
    let q2_id = created_id!(resp, "question");

    let resp = post_json!(
        app,
        "/api/v1/choices",
        &json!({"question_id": q2_id, "text": "6", "is_correct": true})
    );
    let q2_choice_id = created_id!(resp, "choice");

    // 引用不存在的题目 → 400 + 字段级错误
    let resp = post_json!(
        app,
        "/api/v1/answers",
        &json!({"user_id": user.id, "question_id": 9999, "choice_id": q2_choice_id})
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["data"]["question_id"][0]
            .as_str()
            .unwrap()
            .contains("does not exist")
    );

    // 选项属于另一道题也照记不误，引用各自存在即可
    let resp = post_json!(
        app,
        "/api/v1/answers",
        &json!({"user_id": user.id, "question_id": q1_id, "choice_id": q2_choice_id})
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let answer_id = body["data"]["answer"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["answer"]["question_id"], q1_id);
    assert_eq!(body["data"]["answer"]["choice_id"], q2_choice_id);

    // answers?user= 过滤
    let resp = get_req!(app, &format!("/api/v1/answers?user={}", user.id));
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], answer_id);
}

#[actix_web::test]
async fn user_list_is_filterable_and_never_leaks_credentials() {
    let storage = build_storage().await;
    let app = test_app!(storage);

    let resp = post_json!(
        app,
        "/api/v1/auth/register",
        &json!({"username": "alice", "password": "wonderland123"}),
        "10.80.0.3:40000"
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let resp = post_json!(
        app,
        "/api/v1/auth/register",
        &json!({"username": "bob", "password": "builderbob456"}),
        "10.80.0.3:40000"
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = get_req!(app, "/api/v1/users");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["pagination"]["total"], 2);

    let resp = get_req!(app, "/api/v1/users?username=alice");
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["username"], "alice");
    // 凭据字段不允许出现在任何表示里
    assert!(items[0].get("password_hash").is_none());
    assert!(items[0].get("password").is_none());
}
