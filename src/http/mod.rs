//! HTTP client layer — `ZipDemographicsHttp`, one GET per call.

pub mod client;

pub use client::ZipDemographicsHttp;
