#![allow(dead_code)]

pub mod fakes;
pub mod mp3_fixture;
pub mod stub_server;
