//! HTTP tests for the backoffice:
//! - GET /backoffice: registration form and story list
//! - POST /backoffice/stories: registration

mod common;

use crate::common::{cast_vote, create_test_story, TestHarness};
use approval_core::domains::stories::{STORY_COLUMNS, VOTE_COLUMNS};
use approval_core::domains::tally::Decision;
use approval_core::kernel::{MemoryRowStore, TestDependencies};
use axum::http::StatusCode;
use test_context::test_context;

fn registration<'a>(id: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("id", id),
        ("title", "Login com SSO"),
        ("project", "Portal"),
        ("link", "https://wiki.example.com/sso"),
        ("owner", ""),
    ]
}

#[test_context(TestHarness)]
#[tokio::test]
async fn root_redirects_to_backoffice(ctx: &TestHarness) {
    let response = ctx.get("/").await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/backoffice"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_sheet_shows_warning(ctx: &TestHarness) {
    let page = ctx.get("/backoffice").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("A planilha está vazia"));
    assert!(page.body.contains(r#"action="/backoffice/stories""#));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn registration_redirects_and_lists_the_story(ctx: &TestHarness) {
    let response = ctx
        .post_form("/backoffice/stories", &registration("HU-100"))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(
        response.location.as_deref(),
        Some("/backoffice?registered=HU-100")
    );
    assert_eq!(ctx.test_deps.stories.row_count(), 1);

    let page = ctx.get("/backoffice?registered=HU-100").await;
    assert!(page.body.contains("HU HU-100 registrada com sucesso!"));
    assert!(page.body.contains("<strong>ID:</strong> HU-100 - <strong>Login com SSO</strong>"));
    assert!(page.body.contains(r#"<a href="/approval?id=HU-100">Ver detalhes</a>"#));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_registration_keeps_form_values(ctx: &TestHarness) {
    ctx.post_form("/backoffice/stories", &registration("HU-100"))
        .await;

    let response = ctx
        .post_form("/backoffice/stories", &registration("HU-100"))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Já existe uma HU com o ID HU-100"));
    assert!(response.body.contains(r#"name="title" value="Login com SSO""#));
    assert_eq!(ctx.test_deps.stories.row_count(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_title_is_rejected(ctx: &TestHarness) {
    let response = ctx
        .post_form(
            "/backoffice/stories",
            &[("id", "HU-1"), ("project", "Portal"), ("link", "https://x")],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Título"));
    assert_eq!(ctx.test_deps.stories.row_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn listing_shows_recomputed_status(ctx: &TestHarness) {
    create_test_story(&ctx.deps, "HU-1").await;
    cast_vote(&ctx.deps, "HU-1", "Ana", Decision::Rejected).await;
    cast_vote(&ctx.deps, "HU-1", "Bruno", Decision::ChangesRequested).await;

    let page = ctx.get("/backoffice").await;

    assert!(page.body.contains(r#"<span class="status rejected">Reprovado</span>"#));
    assert!(page.body.contains("2 voto(s)"));
}

#[tokio::test]
async fn sheet_without_expected_columns_reports_them() {
    let ctx = TestHarness::with_dependencies(
        TestDependencies::new().mock_stories(MemoryRowStore::new("stories", &["ID", "Título"])),
    );

    let page = ctx.get("/backoffice").await;

    assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(page.body.contains("ID_HU"));
    assert!(page.body.contains("Colunas disponíveis: ID, Título"));
}

#[tokio::test]
async fn invalid_vote_row_is_shown_on_its_story_only() {
    let ctx = TestHarness::with_dependencies(
        TestDependencies::new()
            .mock_stories(MemoryRowStore::new("stories", &STORY_COLUMNS).with_rows(vec![
                vec!["HU-1", "Login", "Portal", "https://x", "Pendente"],
                vec!["HU-2", "Logout", "Portal", "https://y", "Pendente"],
            ]))
            .mock_votes(MemoryRowStore::new("votes", &VOTE_COLUMNS).with_rows(vec![
                vec!["HU-1", "Ana", "Aprovado", "", ""],
                vec!["HU-2", "Bruno", "Talvez", "", ""],
            ])),
    );

    let page = ctx.get("/backoffice").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(r#"<span class="status approved">Aprovado</span>"#));
    assert!(page.body.contains("Decisão inválida: Talvez"));
}

#[tokio::test]
async fn registration_rejects_script_links() {
    let ctx = TestHarness::with_dependencies(TestDependencies::new());

    let response = ctx
        .post_form(
            "/backoffice/stories",
            &[
                ("id", "HU-1"),
                ("title", "Login"),
                ("project", "Portal"),
                ("link", "javascript:alert(1)"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("http://"));
    assert_eq!(ctx.test_deps.stories.row_count(), 0);
}

#[tokio::test]
async fn health_reports_row_store_state() {
    let ctx = TestHarness::with_dependencies(TestDependencies::new());
    let response = ctx.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["row_store"]["worksheet"], "stories");

    let ctx = TestHarness::with_dependencies(TestDependencies::new().stories_unavailable());
    let response = ctx.get("/health").await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}
