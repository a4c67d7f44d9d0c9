//! Bilingual (Arabic/English) site server for Petra Oil Services.
//!
//! Every page lives under a language segment (`/{lang}/{page}`). The segment
//! is resolved to a supported language, which fixes the document direction
//! and the dictionary every string is looked up in.

pub mod config;
pub mod i18n;
pub mod pages;
pub mod render;
pub mod server;
