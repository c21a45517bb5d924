mod aqi_standard_deserializer;
mod unit_deserializer;
