// Integration tests for ddlforge

pub mod cli;
pub mod unit;
