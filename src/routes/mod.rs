pub(crate) mod auth;
pub(crate) mod books;
pub(crate) mod review;
pub(crate) mod router;
