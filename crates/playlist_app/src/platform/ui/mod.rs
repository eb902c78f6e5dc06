pub(crate) mod commands;
pub(crate) mod page;
pub(crate) mod render;
