pub mod client;
pub mod icons;
pub mod regroup;

pub use crate::domain::model::{
    AstroRecord, ErrorBody, ResponsePayload, SpacecraftGroup, UpstreamPayload,
};
pub use crate::domain::ports::{AstroSource, ConfigProvider};
pub use crate::utils::error::Result;
