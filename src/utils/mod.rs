mod maths_utils;
mod time_utils;

pub use maths_utils::round2;
pub use time_utils::{
    MONTH_YEAR_FORMAT, STANDARD_DATE_FORMAT, add_months, format_month_year, months_between,
    whole_calendar_months,
};
