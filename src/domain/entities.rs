pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod response;
pub mod resume;
pub mod stack;
pub mod testimonial;
pub mod timestamps;
pub mod token;
