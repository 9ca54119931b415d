//! Features Module - Feature Encoding Engine
//!
//! Turns an untrusted student record into the fixed-order vector the
//! classifier was trained on.

pub mod layout;
pub mod vector;
pub mod categorical;
pub mod encoder;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, LayoutInfo, layout_hash};
pub use vector::FeatureVector;
pub use categorical::{Gender, ParentalSupport, OnlineClassesValue};
pub use encoder::{decode, encode, EncodingError, StudentFeatures};
