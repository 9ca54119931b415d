//! Prediction logic: feature encoding and model inference

pub mod features;
pub mod model;
