mod video_creation_service;
mod video_query_service;

pub use video_creation_service::*;
pub use video_query_service::*;
