use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::entities::{
    contact::{Contact, ContactTranslation},
    experience::{WorkExperience, WorkExperienceTranslation},
    project::{Project, ProjectTranslation},
    resume::Resume,
    stack::Stack,
    testimonial::{Testimonial, TestimonialTranslation},
    timestamps::Timestamps,
};

pub fn stack(name: &str) -> Stack {
    Stack {
        id: Uuid::new_v4(),
        name: name.to_string(),
        icon_url: None,
        category: Some("backend".to_string()),
        proficiency: Some(80),
        timestamps: Timestamps::default(),
    }
}

pub fn experience(
    company: &str,
    start_date: NaiveDate,
    translations: Vec<WorkExperienceTranslation>,
) -> WorkExperience {
    WorkExperience {
        id: Uuid::new_v4(),
        company_name: company.to_string(),
        company_url: None,
        start_date,
        end_date: None,
        is_current: false,
        timestamps: Timestamps::default(),
        translations,
        stacks: Vec::new(),
    }
}

pub fn experience_tr(lang: &str, position: &str) -> WorkExperienceTranslation {
    WorkExperienceTranslation {
        id: Uuid::new_v4(),
        work_experience_id: Uuid::nil(),
        language_code: lang.to_string(),
        position: position.to_string(),
        description: format!("{position} description"),
        location: Some(format!("{lang} office")),
    }
}

pub fn project(
    slug: &str,
    is_featured: bool,
    start_date: NaiveDate,
    translations: Vec<ProjectTranslation>,
) -> Project {
    Project {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        link: None,
        repo_link: None,
        start_date,
        end_date: None,
        is_featured,
        timestamps: Timestamps::default(),
        translations,
        stacks: Vec::new(),
    }
}

pub fn project_tr(lang: &str, title: &str) -> ProjectTranslation {
    ProjectTranslation {
        id: Uuid::new_v4(),
        project_id: Uuid::nil(),
        language_code: lang.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        role: Some("Lead".to_string()),
    }
}

pub fn testimonial(
    author: &str,
    date: NaiveDate,
    translations: Vec<TestimonialTranslation>,
) -> Testimonial {
    Testimonial {
        id: Uuid::new_v4(),
        author_name: author.to_string(),
        author_url: None,
        author_avatar_url: None,
        kind: Some("colleague".to_string()),
        date,
        timestamps: Timestamps::default(),
        translations,
    }
}

pub fn testimonial_tr(lang: &str, content: &str) -> TestimonialTranslation {
    TestimonialTranslation {
        id: Uuid::new_v4(),
        testimonial_id: Uuid::nil(),
        language_code: lang.to_string(),
        author_position: Some("CTO".to_string()),
        content: content.to_string(),
    }
}

pub fn contact(
    contact_type: &str,
    sort_order: i32,
    is_visible: bool,
    translations: Vec<ContactTranslation>,
) -> Contact {
    Contact {
        id: Uuid::new_v4(),
        contact_type: contact_type.to_string(),
        value: format!("{contact_type}-value"),
        icon: None,
        is_visible,
        sort_order,
        timestamps: Timestamps::default(),
        translations,
    }
}

pub fn contact_tr(lang: &str, label: &str) -> ContactTranslation {
    ContactTranslation {
        id: Uuid::new_v4(),
        contact_id: Uuid::nil(),
        language_code: lang.to_string(),
        label: Some(label.to_string()),
    }
}

pub fn resume(lang: &str, is_active: bool) -> Resume {
    Resume {
        id: Uuid::new_v4(),
        language_code: lang.to_string(),
        file_path: format!("/static/resume_{lang}.pdf"),
        generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        is_active,
    }
}
