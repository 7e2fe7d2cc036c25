use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use podium::api::{ApiError, ApiResult, check_status};
use podium::config::StorageConfig;
use podium::data::StoredFile;
use podium::log::{debug, info};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
/// Asks the storage service to generate the file id.
const GENERATED_ID: &str = "unique()";

fn form_error(value: JsValue) -> ApiError {
    ApiError::BodyError(gloo_net::Error::GlooError(format!("{value:?}")))
}

/// Client for the object-storage service's REST interface.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageClient {
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// The bucket presentation assets live in.
    pub fn default_bucket(&self) -> &str {
        &self.config.bucket
    }

    /// Public URL that renders the stored file.
    pub fn view_url(&self, bucket: &str, key: &str) -> String {
        self.config.file_view_url(bucket, key)
    }

    /// Download a stored file by key.
    pub async fn fetch(&self, bucket: &str, key: &str) -> ApiResult<Vec<u8>> {
        let url = self.view_url(bucket, key);
        debug!("Fetching {key} from bucket {bucket}");

        let response = Request::get(&url)
            .header(PROJECT_HEADER, &self.config.project)
            .send()
            .await
            .map_err(ApiError::NetworkError)?;

        check_status(response, &url)?
            .binary()
            .await
            .map_err(ApiError::ParseError)
    }

    /// Upload a file. Without a `key` the service picks one.
    pub async fn upload(
        &self,
        bucket: &str,
        key: Option<&str>,
        file: &File,
    ) -> ApiResult<StoredFile> {
        let url = self.config.files_url(bucket);

        let form = FormData::new().map_err(form_error)?;
        form.append_with_str("fileId", key.unwrap_or(GENERATED_ID))
            .map_err(form_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(form_error)?;

        let response = Request::post(&url)
            .header(PROJECT_HEADER, &self.config.project)
            .body(form)
            .map_err(ApiError::BodyError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)?;

        let stored: StoredFile = check_status(response, &url)?
            .json()
            .await
            .map_err(ApiError::ParseError)?;

        info!(
            "Uploaded {} ({} bytes) to bucket {}",
            stored.name, stored.size, stored.bucket_id
        );
        Ok(stored)
    }
}
