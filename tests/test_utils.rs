#![allow(dead_code, unused_macros)]

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use mockall::mock;
use once_cell::sync::Lazy;
use uuid::Uuid;

use profile_api::{
    auth::password::hash_password,
    entities::{
        contact::{Contact, ContactInput, ContactTranslation, ContactTranslationInput},
        experience::{
            WorkExperience, WorkExperienceInput, WorkExperienceTranslation,
            WorkExperienceTranslationInput,
        },
        profile::ProfileCollections,
        project::{Project, ProjectInput, ProjectTranslation, ProjectTranslationInput},
        resume::{Resume, ResumeInput},
        stack::{Stack, StackInput},
        testimonial::{
            Testimonial, TestimonialInput, TestimonialTranslation, TestimonialTranslationInput,
        },
        timestamps::Timestamps,
    },
    errors::AppError,
    repositories::{admin::AdminRepository, profile::ProfileRepository},
    settings::{AppConfig, AppEnvironment},
};

pub const ADMIN_USERNAME: &str = "site-owner";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

static ADMIN_PASSWORD_HASH: Lazy<String> =
    Lazy::new(|| hash_password(ADMIN_PASSWORD).expect("hash admin password"));

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Profile API Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://localhost/profile_test".to_string(),
        database_max_connections: 1,
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".to_string(),
        jwt_expiration_minutes: 5,
        admin_username: ADMIN_USERNAME.to_string(),
        admin_password_hash: ADMIN_PASSWORD_HASH.clone(),
        trust_x_forwarded_for: false,
        login_attempt_limit: 3,
        login_attempt_window_secs: 60,
    }
}

/// Builds the full application (routes, auth middleware, path
/// normalization) around an `AppState` and returns the test service.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(profile_api::middlewares::auth::AuthMiddleware)
                .wrap(actix_web::middleware::NormalizePath::trim())
                .configure(profile_api::routes::configure_routes),
        )
        .await
    };
}

mock! {
    pub AdminRepo {}

    #[async_trait]
    impl AdminRepository for AdminRepo {
        async fn create_stack(&self, input: &StackInput) -> Result<Uuid, AppError>;
        async fn update_stack(&self, id: Uuid, input: &StackInput) -> Result<(), AppError>;
        async fn delete_stack(&self, id: Uuid) -> Result<(), AppError>;

        async fn create_work_experience(&self, input: &WorkExperienceInput) -> Result<Uuid, AppError>;
        async fn update_work_experience(&self, id: Uuid, input: &WorkExperienceInput) -> Result<(), AppError>;
        async fn delete_work_experience(&self, id: Uuid) -> Result<(), AppError>;
        async fn upsert_work_experience_translation(
            &self,
            id: Uuid,
            language_code: &str,
            input: &WorkExperienceTranslationInput,
        ) -> Result<WorkExperienceTranslation, AppError>;
        async fn delete_work_experience_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

        async fn create_project(&self, input: &ProjectInput) -> Result<Uuid, AppError>;
        async fn update_project(&self, id: Uuid, input: &ProjectInput) -> Result<(), AppError>;
        async fn delete_project(&self, id: Uuid) -> Result<(), AppError>;
        async fn upsert_project_translation(
            &self,
            id: Uuid,
            language_code: &str,
            input: &ProjectTranslationInput,
        ) -> Result<ProjectTranslation, AppError>;
        async fn delete_project_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

        async fn create_testimonial(&self, input: &TestimonialInput) -> Result<Uuid, AppError>;
        async fn update_testimonial(&self, id: Uuid, input: &TestimonialInput) -> Result<(), AppError>;
        async fn delete_testimonial(&self, id: Uuid) -> Result<(), AppError>;
        async fn upsert_testimonial_translation(
            &self,
            id: Uuid,
            language_code: &str,
            input: &TestimonialTranslationInput,
        ) -> Result<TestimonialTranslation, AppError>;
        async fn delete_testimonial_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

        async fn create_contact(&self, input: &ContactInput) -> Result<Uuid, AppError>;
        async fn update_contact(&self, id: Uuid, input: &ContactInput) -> Result<(), AppError>;
        async fn delete_contact(&self, id: Uuid) -> Result<(), AppError>;
        async fn upsert_contact_translation(
            &self,
            id: Uuid,
            language_code: &str,
            input: &ContactTranslationInput,
        ) -> Result<ContactTranslation, AppError>;
        async fn delete_contact_translation(&self, id: Uuid, language_code: &str) -> Result<(), AppError>;

        async fn create_resume(&self, input: &ResumeInput) -> Result<Uuid, AppError>;
        async fn update_resume(&self, id: Uuid, input: &ResumeInput) -> Result<(), AppError>;
        async fn delete_resume(&self, id: Uuid) -> Result<(), AppError>;
    }
}

/// Profile store backed by fixed collections. Lists come back in
/// insertion order, the handlers are expected to sort them.
pub struct InMemoryProfileRepo {
    pub collections: ProfileCollections,
    pub healthy: bool,
}

impl InMemoryProfileRepo {
    pub fn new(collections: ProfileCollections) -> Self {
        InMemoryProfileRepo { collections, healthy: true }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::InternalError("database unreachable".into()))
        }
    }

    async fn list_work_experiences(&self) -> Result<Vec<WorkExperience>, AppError> {
        Ok(self.collections.experiences.clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.collections.projects.clone())
    }

    async fn list_stacks(&self) -> Result<Vec<Stack>, AppError> {
        Ok(self.collections.stacks.clone())
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        Ok(self.collections.testimonials.clone())
    }

    async fn list_visible_contacts(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.collections.contacts.iter().filter(|c| c.is_visible).cloned().collect())
    }

    async fn list_active_resumes(&self) -> Result<Vec<Resume>, AppError> {
        Ok(self.collections.resumes.iter().filter(|r| r.is_active).cloned().collect())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn rust_stack() -> Stack {
    Stack {
        id: Uuid::new_v4(),
        name: "Rust".into(),
        icon_url: None,
        category: Some("language".into()),
        proficiency: Some(90),
        timestamps: Timestamps::default(),
    }
}

fn experience(company: &str, start: NaiveDate, translations: &[(&str, &str)]) -> WorkExperience {
    let id = Uuid::new_v4();
    WorkExperience {
        id,
        company_name: company.into(),
        company_url: None,
        start_date: start,
        end_date: None,
        is_current: false,
        timestamps: Timestamps::default(),
        translations: translations
            .iter()
            .map(|(lang, position)| WorkExperienceTranslation {
                id: Uuid::new_v4(),
                work_experience_id: id,
                language_code: lang.to_string(),
                position: position.to_string(),
                description: format!("{position} ({lang})"),
                location: None,
            })
            .collect(),
        stacks: vec![rust_stack()],
    }
}

fn contact(contact_type: &str, sort_order: i32, visible: bool, label: &str) -> Contact {
    let id = Uuid::new_v4();
    Contact {
        id,
        contact_type: contact_type.into(),
        value: format!("{contact_type}-value"),
        icon: None,
        is_visible: visible,
        sort_order,
        timestamps: Timestamps::default(),
        translations: vec![ContactTranslation {
            id: Uuid::new_v4(),
            contact_id: id,
            language_code: "en".into(),
            label: Some(label.into()),
        }],
    }
}

fn resume(language_code: &str, active: bool) -> Resume {
    Resume {
        id: Uuid::new_v4(),
        language_code: language_code.into(),
        file_path: format!("/files/cv-{language_code}.pdf"),
        generated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        is_active: active,
    }
}

/// A small profile: two experiences stored oldest first, one of them only
/// translated into Russian, plus a hidden contact and an inactive resume.
pub fn sample_collections() -> ProfileCollections {
    let project_id = Uuid::new_v4();

    ProfileCollections {
        experiences: vec![
            experience("Test Corp", date(2019, 3, 1), &[("ru", "Разработчик")]),
            experience(
                "Acme",
                date(2022, 6, 1),
                &[("en", "Backend Engineer"), ("de", "Backend-Entwickler")],
            ),
        ],
        projects: vec![Project {
            id: project_id,
            slug: "site".into(),
            link: Some("https://example.com".into()),
            repo_link: None,
            start_date: date(2023, 1, 1),
            end_date: None,
            is_featured: true,
            timestamps: Timestamps::default(),
            translations: vec![ProjectTranslation {
                id: Uuid::new_v4(),
                project_id,
                language_code: "en".into(),
                title: "Personal site".into(),
                description: "This site".into(),
                role: None,
            }],
            stacks: vec![rust_stack()],
        }],
        stacks: vec![rust_stack()],
        testimonials: vec![],
        contacts: vec![
            contact("telegram", 2, true, "Telegram"),
            contact("phone", 0, false, "Phone"),
            contact("email", 1, true, "Email"),
        ],
        resumes: vec![resume("en", true), resume("de", false)],
    }
}
