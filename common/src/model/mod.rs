pub mod import;
pub mod recipient;
pub mod template;
pub mod validation;
