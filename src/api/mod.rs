// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod procesar;

pub use errors::{ErrorResponse, ProcessError};
pub use handlers::HealthResponse;
pub use http_server::{create_app, start_server, AppState};
pub use procesar::{procesar_handler, read_first_file, ProcesarResponse, UploadedFile};
