mod loader;

pub(crate) use loader::load_records;
