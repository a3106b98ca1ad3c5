// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /procesar: shoulder mobility diagnosis from an uploaded photo

pub mod handler;
pub mod response;
pub mod upload;

pub use handler::procesar_handler;
pub use response::ProcesarResponse;
pub use upload::{read_first_file, UploadedFile};
