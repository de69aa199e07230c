use std::sync::Arc;

use crate::{
    domain::{aggregator::aggregate_profile, ordering},
    entities::{
        contact::Contact,
        experience::WorkExperience,
        profile::{ProfileCollections, ProfileSnapshot},
        project::Project,
        resume::Resume,
        stack::Stack,
        testimonial::Testimonial,
    },
    errors::AppError,
    repositories::profile::ProfileRepository,
};

pub struct ProfileHandler<R>
where
    R: ProfileRepository + ?Sized,
{
    pub profile_repo: Arc<R>,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository + ?Sized,
{
    pub fn new(profile_repo: Arc<R>) -> Self {
        ProfileHandler { profile_repo }
    }

    /// Loads all six collections concurrently and resolves them for `language_code`.
    /// A failed fetch fails the whole request before any aggregation happens.
    pub async fn get_full_profile(&self, language_code: &str) -> Result<ProfileSnapshot, AppError> {
        let repo = &self.profile_repo;

        let (experiences, projects, stacks, testimonials, contacts, resumes) = futures::try_join!(
            repo.list_work_experiences(),
            repo.list_projects(),
            repo.list_stacks(),
            repo.list_testimonials(),
            repo.list_visible_contacts(),
            repo.list_active_resumes(),
        )?;

        let collections = ProfileCollections {
            experiences,
            projects,
            stacks,
            testimonials,
            contacts,
            resumes,
        };

        Ok(aggregate_profile(language_code, collections))
    }

    pub async fn list_experience(&self) -> Result<Vec<WorkExperience>, AppError> {
        let experiences = self.profile_repo.list_work_experiences().await?;
        Ok(ordering::order_work_experiences(experiences))
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.profile_repo.list_projects().await?;
        Ok(ordering::order_projects(projects))
    }

    pub async fn list_stacks(&self) -> Result<Vec<Stack>, AppError> {
        let stacks = self.profile_repo.list_stacks().await?;
        Ok(ordering::order_stacks(stacks))
    }

    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = self.profile_repo.list_testimonials().await?;
        Ok(ordering::order_testimonials(testimonials))
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let contacts = self.profile_repo.list_visible_contacts().await?;
        Ok(ordering::visible_contacts(contacts))
    }

    pub async fn list_resumes(&self) -> Result<Vec<Resume>, AppError> {
        let resumes = self.profile_repo.list_active_resumes().await?;
        Ok(ordering::active_resumes(resumes))
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        self.profile_repo.check_connection().await
    }
}
