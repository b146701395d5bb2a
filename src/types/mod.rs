pub(crate) mod book;
pub(crate) mod request;
pub(crate) mod response;
pub(crate) mod user;

pub(crate) use book::{Book, Reviews};
pub(crate) use user::{AuthorizedUser, Claims, User, Username};
