//! Mapping core: curve configuration, the axis transform pipeline, the
//! device working set and its persistence.
//!
//! Everything in here is keyed by [`StableId`] (the hardware GUID); the
//! ephemeral [`crate::input::SessionHandle`] only ever reaches the input
//! backend for polling calls.

pub mod axis;
pub mod curve;
pub mod device;
pub mod engine;
pub mod registry;
pub mod store;
pub mod transform;

pub use axis::AxisChannel;
pub use curve::{CurveKind, CurveSettings};
pub use device::{DeviceEntry, StableId};
pub use registry::DeviceRegistry;
pub use store::AssignmentRecord;
