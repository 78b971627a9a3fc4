//! Request models with validation at construction
//!
//! Payloads deserialize leniently (every field optional) and are turned into
//! `*Fields` values by `validate()`. Invalid input returns ValidationError,
//! not panic.

pub mod validation;
pub mod enterprise;
pub mod product;
pub mod news;
pub mod slider;

pub use validation::ValidationError;
pub use enterprise::{EnterpriseFields, EnterprisePayload};
pub use product::{ProductFields, ProductPayload};
pub use news::{NewsFields, NewsPayload};
pub use slider::{SliderFields, SliderKind, SliderPayload, SliderTarget};
