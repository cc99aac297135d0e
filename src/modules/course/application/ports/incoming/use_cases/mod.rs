mod enrollment;

pub use enrollment::{EnrollmentError, EnrollmentUseCases};
