pub mod add_entry_cmd;
pub mod find_entries_cmd;
pub mod mark_read_cmd;
