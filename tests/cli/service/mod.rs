mod add_persists_defaults_contract;
mod add_rejects_duplicate_name_contract;
mod list_and_show_contract;
mod remove_and_missing_ids_contract;
mod store_location_contract;
