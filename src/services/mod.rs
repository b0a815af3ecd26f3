pub mod logger_service;
pub mod markup_service;
pub mod placement_service;
pub mod toast_service;
