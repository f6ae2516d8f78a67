pub mod amount_input;
pub mod date_input;
pub mod field;
pub mod header;
pub mod login_form;
pub mod pagination;
pub mod phone_input;
pub mod worker_form;
pub mod worker_list;
pub mod workers_page;
