//! Unit tests for submissions crate
//!
//! Grouped by concern: store, image naming, submit flow, review flow,
//! and router-level behavior over the HTTP surface.

use std::sync::Arc;

use tempfile::TempDir;
use tokio::sync::Mutex;

use crate::application::config::SubmissionsConfig;
use crate::application::review_queue::ReviewQueueUseCase;
use crate::application::submit_place::{SubmitPlaceInput, SubmitPlaceUseCase, UploadedImage};
use crate::application::update_status::UpdateStatusUseCase;
use crate::domain::repository::{ImageStore, SubmissionRepository};
use crate::domain::value_objects::SubmissionStatus;
use crate::error::SubmissionError;
use crate::infra::json_store::JsonFileRepository;
use crate::infra::uploads::DiskImageStore;
use kernel::id::SubmissionId;

/// Everything a use-case test needs, rooted in one temp directory
struct TestEnv {
    _dir: TempDir,
    repo: Arc<JsonFileRepository>,
    images: Arc<DiskImageStore>,
    config: Arc<SubmissionsConfig>,
    store_lock: Arc<Mutex<()>>,
}

impl TestEnv {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = SubmissionsConfig {
            store_path: dir.path().join("submissions.json"),
            upload_dir: dir.path().join("uploads"),
            ..SubmissionsConfig::default()
        };
        Self {
            repo: Arc::new(JsonFileRepository::new(&config.store_path)),
            images: Arc::new(DiskImageStore::new(&config.upload_dir)),
            config: Arc::new(config),
            store_lock: Arc::new(Mutex::new(())),
            _dir: dir,
        }
    }

    fn submit_use_case(&self) -> SubmitPlaceUseCase<JsonFileRepository, DiskImageStore> {
        SubmitPlaceUseCase::new(
            self.repo.clone(),
            self.images.clone(),
            self.config.clone(),
            self.store_lock.clone(),
        )
    }

    fn update_use_case(&self) -> UpdateStatusUseCase<JsonFileRepository> {
        UpdateStatusUseCase::new(self.repo.clone(), self.store_lock.clone())
    }

    fn review_use_case(&self) -> ReviewQueueUseCase<JsonFileRepository> {
        ReviewQueueUseCase::new(self.repo.clone())
    }
}

fn jpeg(name: &str) -> UploadedImage {
    UploadedImage {
        original_name: name.to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
    }
}

fn valid_input(title: &str, images: Vec<UploadedImage>) -> SubmitPlaceInput {
    SubmitPlaceInput {
        title: title.to_string(),
        description: "A wonderful place".to_string(),
        location: "Iceland".to_string(),
        images,
    }
}

mod store_tests {
    use super::*;

    #[tokio::test]
    async fn load_without_document_returns_empty() {
        let env = TestEnv::new();
        let submissions = env.repo.load().await.unwrap();
        assert!(submissions.is_empty());
        // A pure load must not create the document either
        assert!(!env.config.store_path.exists());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let env = TestEnv::new();
        let submission = crate::domain::entities::Submission::new(
            SubmissionId::from_millis(1),
            "Blue Lagoon".into(),
            "Hot spring".into(),
            "Iceland".into(),
            vec!["/uploads/blue-lagoon-1.jpg".into()],
        );
        env.repo.save(&[submission.clone()]).await.unwrap();

        let loaded = env.repo.load().await.unwrap();
        assert_eq!(loaded, vec![submission]);
    }

    #[tokio::test]
    async fn save_of_load_is_a_no_op() {
        let env = TestEnv::new();
        let submission = crate::domain::entities::Submission::new(
            SubmissionId::from_millis(1),
            "Blue Lagoon".into(),
            "Hot spring".into(),
            "Iceland".into(),
            vec!["/uploads/blue-lagoon-1.jpg".into()],
        );
        env.repo.save(&[submission]).await.unwrap();

        let before = tokio::fs::read_to_string(&env.config.store_path)
            .await
            .unwrap();
        let loaded = env.repo.load().await.unwrap();
        env.repo.save(&loaded).await.unwrap();
        let after = tokio::fs::read_to_string(&env.config.store_path)
            .await
            .unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn corrupt_document_surfaces_as_corrupt_store() {
        let env = TestEnv::new();
        tokio::fs::write(&env.config.store_path, "{ not json")
            .await
            .unwrap();

        let err = env.repo.load().await.unwrap_err();
        assert!(matches!(err, SubmissionError::CorruptStore(_)));
        assert_eq!(err.status_code().as_u16(), 500);
    }
}

mod image_store_tests {
    use super::*;

    #[tokio::test]
    async fn filenames_increment_per_slug() {
        let env = TestEnv::new();

        let first = env
            .images
            .store_image("blue-lagoon", ".jpg", b"one")
            .await
            .unwrap();
        let second = env
            .images
            .store_image("blue-lagoon", ".jpg", b"two")
            .await
            .unwrap();

        assert_eq!(first, "blue-lagoon-1.jpg");
        assert_eq!(second, "blue-lagoon-2.jpg");
        assert!(env.config.upload_dir.join("blue-lagoon-2.jpg").exists());
    }

    #[tokio::test]
    async fn counting_is_per_slug_prefix() {
        let env = TestEnv::new();

        env.images.store_image("lagoon", ".jpg", b"a").await.unwrap();
        let other = env.images.store_image("cove", ".png", b"b").await.unwrap();

        assert_eq!(other, "cove-1.png");
    }

    #[tokio::test]
    async fn extension_may_be_empty() {
        let env = TestEnv::new();
        let name = env.images.store_image("cove", "", b"raw").await.unwrap();
        assert_eq!(name, "cove-1");
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn valid_submission_is_stored_pending() {
        let env = TestEnv::new();
        let output = env
            .submit_use_case()
            .execute(valid_input("Blue Lagoon", vec![jpeg("a.jpg")]))
            .await
            .unwrap();

        let pending = env.review_use_case().list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, output.id);
        assert_eq!(pending[0].status, SubmissionStatus::Pending);
        assert_eq!(pending[0].images, vec!["/uploads/blue-lagoon-1.jpg"]);
    }

    #[tokio::test]
    async fn sequential_ids_are_unique() {
        let env = TestEnv::new();
        let use_case = env.submit_use_case();

        let a = use_case
            .execute(valid_input("First", vec![jpeg("a.jpg")]))
            .await
            .unwrap();
        let b = use_case
            .execute(valid_input("Second", vec![jpeg("b.jpg")]))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn missing_text_field_rejected_without_mutation() {
        let env = TestEnv::new();
        let mut input = valid_input("Blue Lagoon", vec![jpeg("a.jpg")]);
        input.location = String::new();

        let err = env.submit_use_case().execute(input).await.unwrap_err();
        assert!(matches!(err, SubmissionError::MissingFields));
        assert_eq!(err.status_code().as_u16(), 400);

        // Neither the store document nor any upload was created
        assert!(!env.config.store_path.exists());
        assert!(!env.config.upload_dir.exists());
    }

    #[tokio::test]
    async fn zero_images_rejected() {
        let env = TestEnv::new();
        let err = env
            .submit_use_case()
            .execute(valid_input("Blue Lagoon", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::MissingFields));
        assert!(!env.config.store_path.exists());
    }

    #[tokio::test]
    async fn more_than_five_images_rejected() {
        let env = TestEnv::new();
        let images = (0..6).map(|i| jpeg(&format!("{i}.jpg"))).collect();
        let err = env
            .submit_use_case()
            .execute(valid_input("Blue Lagoon", images))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::TooManyImages { max: 5 }));
        assert!(!env.config.upload_dir.exists());
    }

    #[tokio::test]
    async fn repeated_title_continues_suffix_numbering() {
        let env = TestEnv::new();
        let use_case = env.submit_use_case();

        let input = || valid_input("Blue Lagoon", vec![jpeg("a.jpg"), jpeg("b.jpg")]);
        use_case.execute(input()).await.unwrap();
        use_case.execute(input()).await.unwrap();

        let pending = env.review_use_case().list_pending().await.unwrap();
        assert_eq!(
            pending[0].images,
            vec!["/uploads/blue-lagoon-1.jpg", "/uploads/blue-lagoon-2.jpg"]
        );
        assert_eq!(
            pending[1].images,
            vec!["/uploads/blue-lagoon-3.jpg", "/uploads/blue-lagoon-4.jpg"]
        );
        for n in 1..=4 {
            assert!(env.config.upload_dir.join(format!("blue-lagoon-{n}.jpg")).exists());
        }
    }
}

mod review_tests {
    use super::*;

    #[tokio::test]
    async fn approval_moves_between_lists() {
        let env = TestEnv::new();
        let output = env
            .submit_use_case()
            .execute(valid_input("Blue Lagoon", vec![jpeg("a.jpg")]))
            .await
            .unwrap();

        env.update_use_case()
            .execute(&output.id, SubmissionStatus::Approved)
            .await
            .unwrap();

        let review = env.review_use_case();
        assert!(review.list_pending().await.unwrap().is_empty());
        let approved = review.list_approved().await.unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, output.id);
    }

    #[tokio::test]
    async fn transitions_are_unrestricted() {
        let env = TestEnv::new();
        let output = env
            .submit_use_case()
            .execute(valid_input("Blue Lagoon", vec![jpeg("a.jpg")]))
            .await
            .unwrap();

        let update = env.update_use_case();
        update
            .execute(&output.id, SubmissionStatus::Approved)
            .await
            .unwrap();
        update
            .execute(&output.id, SubmissionStatus::Pending)
            .await
            .unwrap();

        let pending = env.review_use_case().list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_leaves_store_untouched() {
        let env = TestEnv::new();
        env.submit_use_case()
            .execute(valid_input("Blue Lagoon", vec![jpeg("a.jpg")]))
            .await
            .unwrap();
        let before = tokio::fs::read_to_string(&env.config.store_path)
            .await
            .unwrap();

        let err = env
            .update_use_case()
            .execute(&SubmissionId::from("0"), SubmissionStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::NotFound));
        assert_eq!(err.status_code().as_u16(), 404);

        let after = tokio::fs::read_to_string(&env.config.store_path)
            .await
            .unwrap();
        assert_eq!(before, after);
    }
}

mod router_tests {
    use super::*;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn test_router(env: &TestEnv) -> Router {
        crate::submissions_router_generic(
            (*env.repo).clone(),
            (*env.images).clone(),
            (*env.config).clone(),
        )
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const BOUNDARY: &str = "test-boundary";

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(filename: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\nfake-image-bytes\r\n"
        )
    }

    fn submit_request(parts: &[String]) -> Request<Body> {
        let mut body = parts.concat();
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        Request::builder()
            .method("POST")
            .uri("/submit")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn submissions_on_empty_store_returns_empty_array() {
        let env = TestEnv::new();
        let response = test_router(&env)
            .oneshot(Request::get("/submissions").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn submit_end_to_end() {
        let env = TestEnv::new();
        let router = test_router(&env);

        let request = submit_request(&[
            text_part("title", "Blue Lagoon"),
            text_part("description", "Hot spring"),
            text_part("location", "Iceland"),
            file_part("a.jpg"),
        ]);
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["success"], true);
        assert!(body["id"].is_string());

        let response = router
            .oneshot(Request::get("/submissions").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listed: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(listed[0]["title"], "Blue Lagoon");
        assert_eq!(listed[0]["status"], "pending");
        assert_eq!(listed[0]["images"][0], "/uploads/blue-lagoon-1.jpg");
    }

    #[tokio::test]
    async fn submit_without_images_yields_400_error_body() {
        let env = TestEnv::new();
        let request = submit_request(&[
            text_part("title", "Blue Lagoon"),
            text_part("description", "Hot spring"),
            text_part("location", "Iceland"),
        ]);
        let response = test_router(&env).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "All fields are required including images.");
    }

    #[tokio::test]
    async fn update_status_unknown_id_yields_404_error_body() {
        let env = TestEnv::new();
        let request = Request::post("/update-status")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"id":"0","status":"approved"}"#))
            .unwrap();
        let response = test_router(&env).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "Submission not found.");
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status_string() {
        let env = TestEnv::new();
        let request = Request::post("/update-status")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"id":"0","status":"archived"}"#))
            .unwrap();
        let response = test_router(&env).oneshot(request).await.unwrap();

        // Rejected at deserialization, before the store is consulted
        assert!(response.status().is_client_error());
    }
}
