pub mod form_fields;
pub mod page;
pub mod routes;
