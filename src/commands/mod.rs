pub mod clean;
pub mod configure;
pub mod gdp;
pub mod museums;
