#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::{TestContext, zip_entry_bytes, zip_entry_names, zip_entry_text};
