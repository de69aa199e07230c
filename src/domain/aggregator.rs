use crate::domain::localization::resolve_translation;
use crate::domain::ordering::{
    active_resumes, order_projects, order_stacks, order_testimonials, order_work_experiences,
    visible_contacts,
};
use crate::entities::{
    contact::{Contact, LocalizedContact},
    experience::{LocalizedWorkExperience, WorkExperience},
    profile::{ProfileCollections, ProfileSnapshot},
    project::{LocalizedProject, Project},
    testimonial::{LocalizedTestimonial, Testimonial},
};

/// Resolves every collection for `language_code` into a single snapshot.
///
/// Pure and infallible: entities without any translation are kept, with
/// required text set to `""` and optional text to `None`. Ordering and
/// visibility filters are applied here as well, so unordered input still
/// yields the documented order.
pub fn aggregate_profile(language_code: &str, collections: ProfileCollections) -> ProfileSnapshot {
    let ProfileCollections {
        experiences,
        projects,
        stacks,
        testimonials,
        contacts,
        resumes,
    } = collections;

    ProfileSnapshot {
        experience: order_work_experiences(experiences)
            .into_iter()
            .map(|e| localize_experience(e, language_code))
            .collect(),
        projects: order_projects(projects)
            .into_iter()
            .map(|p| localize_project(p, language_code))
            .collect(),
        stacks: order_stacks(stacks),
        testimonials: order_testimonials(testimonials)
            .into_iter()
            .map(|t| localize_testimonial(t, language_code))
            .collect(),
        contacts: visible_contacts(contacts)
            .into_iter()
            .map(|c| localize_contact(c, language_code))
            .collect(),
        resumes: active_resumes(resumes),
    }
}

fn localize_experience(experience: WorkExperience, language_code: &str) -> LocalizedWorkExperience {
    let translation = resolve_translation(&experience.translations, language_code);

    LocalizedWorkExperience {
        id: experience.id,
        position: translation.map(|t| t.position.clone()).unwrap_or_default(),
        description: translation.map(|t| t.description.clone()).unwrap_or_default(),
        location: translation.and_then(|t| t.location.clone()),
        company_name: experience.company_name,
        company_url: experience.company_url,
        start_date: experience.start_date,
        end_date: experience.end_date,
        is_current: experience.is_current,
        stacks: experience.stacks,
    }
}

fn localize_project(project: Project, language_code: &str) -> LocalizedProject {
    let translation = resolve_translation(&project.translations, language_code);

    LocalizedProject {
        id: project.id,
        title: translation.map(|t| t.title.clone()).unwrap_or_default(),
        description: translation.map(|t| t.description.clone()).unwrap_or_default(),
        role: translation.and_then(|t| t.role.clone()),
        slug: project.slug,
        link: project.link,
        repo_link: project.repo_link,
        start_date: project.start_date,
        end_date: project.end_date,
        is_featured: project.is_featured,
        stacks: project.stacks,
    }
}

fn localize_testimonial(testimonial: Testimonial, language_code: &str) -> LocalizedTestimonial {
    let translation = resolve_translation(&testimonial.translations, language_code);

    LocalizedTestimonial {
        id: testimonial.id,
        author_position: translation.and_then(|t| t.author_position.clone()),
        content: translation.map(|t| t.content.clone()).unwrap_or_default(),
        author_name: testimonial.author_name,
        author_url: testimonial.author_url,
        author_avatar_url: testimonial.author_avatar_url,
        kind: testimonial.kind,
        date: testimonial.date,
    }
}

fn localize_contact(contact: Contact, language_code: &str) -> LocalizedContact {
    let label = resolve_translation(&contact.translations, language_code)
        .and_then(|t| t.label.clone());

    LocalizedContact {
        id: contact.id,
        contact_type: contact.contact_type,
        value: contact.value,
        icon: contact.icon,
        sort_order: contact.sort_order,
        label,
    }
}
