mod validator;

pub use validator::EntryValidator;
