use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LANGUAGE;
use crate::entities::{
    contact::{Contact, LocalizedContact},
    experience::{LocalizedWorkExperience, WorkExperience},
    project::{LocalizedProject, Project},
    resume::Resume,
    stack::Stack,
    testimonial::{LocalizedTestimonial, Testimonial},
};

/// The six fully materialized collections the aggregator works on.
#[derive(Debug, Clone, Default)]
pub struct ProfileCollections {
    pub experiences: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub stacks: Vec<Stack>,
    pub testimonials: Vec<Testimonial>,
    pub contacts: Vec<Contact>,
    pub resumes: Vec<Resume>,
}

/// Whole profile resolved for one language.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSnapshot {
    pub experience: Vec<LocalizedWorkExperience>,
    pub projects: Vec<LocalizedProject>,
    pub stacks: Vec<Stack>,
    pub testimonials: Vec<LocalizedTestimonial>,
    pub contacts: Vec<LocalizedContact>,
    pub resumes: Vec<Resume>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    DEFAULT_LANGUAGE.to_string()
}
