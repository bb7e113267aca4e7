mod about;
pub use about::About;

mod calendar;
pub use calendar::Calendar;
