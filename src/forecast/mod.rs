//! Forecast to display transformation: parameter access, date bucketing,
//! per day aggregation, hour selection and weather condition mapping.

pub mod aggregate;
pub mod bucketing;
pub mod conditions;
pub mod hours;
pub mod models;
