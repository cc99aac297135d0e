mod get_testimonials;
mod manage_testimonials;

pub use get_testimonials::get_testimonials_handler;
pub use manage_testimonials::{
    create_testimonial_handler, delete_testimonial_handler, patch_testimonial_handler,
};
