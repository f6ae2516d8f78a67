use shared::date::UNIX_EPOCH;
use shared::CalendarDate;

/// Today's date in the browser's local time zone
pub fn today() -> CalendarDate {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    CalendarDate::new(year, month, day).unwrap_or(UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_js_date() {
        let now = js_sys::Date::new_0();
        let date = today();
        assert_eq!(date.year(), now.get_full_year() as i32);
        assert_eq!(date.month(), now.get_month() + 1);
        assert_eq!(date.day(), now.get_date());
    }
}
