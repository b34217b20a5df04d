pub mod draft;
pub mod slots;
