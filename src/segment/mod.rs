pub(crate) mod lines;
pub(crate) mod split;
