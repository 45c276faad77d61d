pub mod generation_service;
pub mod report;
