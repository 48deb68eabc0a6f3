mod region_code;
mod tests;
