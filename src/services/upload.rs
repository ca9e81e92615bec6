// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity file uploads and their processing status.

use super::API_PREFIX;
use crate::error::Result;
use crate::executor::{Operation, RequestExecutor};
use crate::models::{NewUpload, UploadStatus};
use crate::token::Token;
use crate::transport::RequestBody;

pub struct UploadService {
    executor: RequestExecutor,
    token: Token,
}

impl UploadService {
    pub fn new(executor: RequestExecutor, token: Token) -> Self {
        Self { executor, token }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Upload an activity file. Requires write access.
    ///
    /// Strava processes uploads asynchronously; poll [`Self::get_upload`]
    /// until `activity_id` is set or `error` is reported.
    pub async fn upload(&self, upload: &NewUpload) -> Result<UploadStatus> {
        let mut fields = vec![("data_type".to_string(), upload.data_type.clone())];
        for (key, value) in [
            ("name", &upload.name),
            ("description", &upload.description),
            ("external_id", &upload.external_id),
        ] {
            if let Some(value) = value {
                fields.push((key.to_string(), value.clone()));
            }
        }

        let op = Operation::create(format!("{}/uploads", API_PREFIX)).body(RequestBody::Multipart {
            fields,
            file_name: upload.file_name.clone(),
            data: upload.data.clone(),
        });
        self.executor.execute(&self.token, &op).await?.into_value()
    }

    pub async fn get_upload(&self, upload_id: u64) -> Result<Option<UploadStatus>> {
        let op = Operation::fetch(format!("{}/uploads/{}", API_PREFIX, upload_id));
        Ok(self.executor.execute(&self.token, &op).await?.into_option())
    }
}
