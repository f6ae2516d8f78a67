pub mod use_click_outside;
pub mod use_companies;
pub mod use_workers;
