pub(crate) mod layout;
pub(crate) mod markup;
pub(crate) mod node;
pub(crate) mod selector;
