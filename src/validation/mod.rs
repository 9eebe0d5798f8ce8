pub(crate) mod name_validation;
