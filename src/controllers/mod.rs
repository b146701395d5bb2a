pub(crate) mod catalog;
pub(crate) mod review;
pub(crate) mod token;
pub(crate) mod user;
