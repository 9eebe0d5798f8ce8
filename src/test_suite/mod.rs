pub(crate) mod builders;
