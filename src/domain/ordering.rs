//! Display order of each entity type. Sorts are stable, so equal keys keep
//! the order the store returned them in.

use std::cmp::Ordering;

use crate::entities::{
    contact::Contact, experience::WorkExperience, project::Project, resume::Resume,
    stack::Stack, testimonial::Testimonial,
};

/// Newest start date first.
pub fn by_work_experience(a: &WorkExperience, b: &WorkExperience) -> Ordering {
    b.start_date.cmp(&a.start_date)
}

/// Featured projects first, then newest start date.
pub fn by_project(a: &Project, b: &Project) -> Ordering {
    b.is_featured
        .cmp(&a.is_featured)
        .then_with(|| b.start_date.cmp(&a.start_date))
}

pub fn by_testimonial(a: &Testimonial, b: &Testimonial) -> Ordering {
    b.date.cmp(&a.date)
}

pub fn by_contact(a: &Contact, b: &Contact) -> Ordering {
    a.sort_order.cmp(&b.sort_order)
}

pub fn by_stack(a: &Stack, b: &Stack) -> Ordering {
    a.name.cmp(&b.name)
}

pub fn order_work_experiences(mut items: Vec<WorkExperience>) -> Vec<WorkExperience> {
    items.sort_by(by_work_experience);
    items
}

pub fn order_projects(mut items: Vec<Project>) -> Vec<Project> {
    items.sort_by(by_project);
    items
}

pub fn order_testimonials(mut items: Vec<Testimonial>) -> Vec<Testimonial> {
    items.sort_by(by_testimonial);
    items
}

pub fn order_stacks(mut items: Vec<Stack>) -> Vec<Stack> {
    items.sort_by(by_stack);
    items
}

/// Hidden contacts are dropped.
pub fn visible_contacts(items: Vec<Contact>) -> Vec<Contact> {
    let mut visible: Vec<Contact> = items.into_iter().filter(|c| c.is_visible).collect();
    visible.sort_by(by_contact);
    visible
}

/// Inactive resumes are dropped; the rest keep insertion order.
pub fn active_resumes(items: Vec<Resume>) -> Vec<Resume> {
    items.into_iter().filter(|r| r.is_active).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn experiences_newest_first() {
        let ordered = order_work_experiences(vec![
            experience("Old", ymd(2015, 1, 1), vec![]),
            experience("New", ymd(2023, 1, 1), vec![]),
            experience("Mid", ymd(2019, 6, 1), vec![]),
        ]);
        let names: Vec<_> = ordered.iter().map(|e| e.company_name.as_str()).collect();
        assert_eq!(names, ["New", "Mid", "Old"]);
    }

    #[test]
    fn featured_projects_lead_regardless_of_date() {
        let ordered = order_projects(vec![
            project("recent", false, ymd(2024, 1, 1), vec![]),
            project("featured", true, ymd(2018, 1, 1), vec![]),
            project("older", false, ymd(2020, 1, 1), vec![]),
        ]);
        let slugs: Vec<_> = ordered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["featured", "recent", "older"]);
    }

    #[test]
    fn equal_keys_keep_store_order() {
        let ordered = order_testimonials(vec![
            testimonial("first", ymd(2022, 3, 1), vec![]),
            testimonial("second", ymd(2022, 3, 1), vec![]),
        ]);
        assert_eq!(ordered[0].author_name, "first");
        assert_eq!(ordered[1].author_name, "second");
    }

    #[test]
    fn contacts_filtered_and_sorted() {
        let ordered = visible_contacts(vec![
            contact("github", 2, true, vec![]),
            contact("phone", 0, false, vec![]),
            contact("email", 1, true, vec![]),
        ]);
        let kinds: Vec<_> = ordered.iter().map(|c| c.contact_type.as_str()).collect();
        assert_eq!(kinds, ["email", "github"]);
    }

    #[test]
    fn stacks_alphabetical_and_resumes_active_only() {
        let stacks = order_stacks(vec![stack("Rust"), stack("Docker"), stack("PostgreSQL")]);
        let names: Vec<_> = stacks.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Docker", "PostgreSQL", "Rust"]);

        let resumes = active_resumes(vec![resume("en", true), resume("fr", false), resume("ru", true)]);
        let langs: Vec<_> = resumes.iter().map(|r| r.language_code.as_str()).collect();
        assert_eq!(langs, ["en", "ru"]);
    }
}
