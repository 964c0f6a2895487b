pub(crate) mod unit;
