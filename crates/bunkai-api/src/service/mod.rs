//! サービスモジュール

mod word_api_service;

pub use word_api_service::{WordApiService, WordApiServiceFull};
