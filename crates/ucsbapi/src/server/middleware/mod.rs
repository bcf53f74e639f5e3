pub mod role_validator;
