pub mod convert;
pub mod currencies;
pub mod popular;
pub mod setup;
pub mod ui;
