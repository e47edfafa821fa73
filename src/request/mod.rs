mod form;
pub use form::*;
