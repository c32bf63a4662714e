pub mod meteoswiss_forecast;
pub mod samples;
